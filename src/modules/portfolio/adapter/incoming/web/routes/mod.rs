pub mod certificates;
pub mod dashboard;
pub mod education;
pub mod experiences;
pub mod files;
pub mod mutation_response;
pub mod profile;
pub mod public;
pub mod skills;

pub use certificates::{
    create_certificate_handler, __path_create_certificate_handler, delete_certificate_handler, __path_delete_certificate_handler, update_certificate_handler, __path_update_certificate_handler,
    CertificateRequestDto,
};
pub use dashboard::{get_dashboard_handler, __path_get_dashboard_handler, skill_categories_handler, __path_skill_categories_handler, CategorySuggestionQuery};
pub use education::{
    create_education_handler, __path_create_education_handler, delete_education_handler, __path_delete_education_handler, update_education_handler, __path_update_education_handler,
    EducationRequestDto,
};
pub use experiences::{
    create_experience_handler, __path_create_experience_handler, delete_experience_handler, __path_delete_experience_handler, update_experience_handler, __path_update_experience_handler,
    ExperienceRequestDto,
};
pub use files::{
    delete_file_handler, __path_delete_file_handler, register_file_handler, __path_register_file_handler, upload_file_handler, __path_upload_file_handler, RegisterFileDto,
    UploadFileQuery,
};
pub use profile::{update_profile_handler, __path_update_profile_handler, ProfileRequestDto};
pub use public::{
    portfolio_page_handler, __path_portfolio_page_handler, public_about_handler, __path_public_about_handler, public_cv_handler, __path_public_cv_handler,
    public_experiences_handler, __path_public_experiences_handler, public_header_handler, __path_public_header_handler, public_hero_handler, __path_public_hero_handler,
    public_skills_handler, __path_public_skills_handler,
};
pub use skills::{create_skill_handler, __path_create_skill_handler, delete_skill_handler, __path_delete_skill_handler, update_skill_handler, __path_update_skill_handler, SkillRequestDto};
