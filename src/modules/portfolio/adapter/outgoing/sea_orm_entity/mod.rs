pub mod certificates;
pub mod education;
pub mod experiences;
pub mod files;
pub mod profiles;
pub mod skills;
