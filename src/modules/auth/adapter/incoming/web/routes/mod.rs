mod admin_redirect;
mod login_admin;
mod logout_admin;

pub use admin_redirect::{admin_redirect_handler, __path_admin_redirect_handler};
pub use login_admin::{login_admin_handler, __path_login_admin_handler, LoginRequestDto, LoginResponse};
pub use logout_admin::{logout_admin_handler, __path_logout_admin_handler, LogoutResponseBody};
