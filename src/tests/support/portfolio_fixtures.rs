use chrono::{Duration, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::portfolio::application::domain::{
    FallbackContent, FileRecord, FileType, Profile, Skill,
};
use crate::portfolio::application::ports::outgoing::{MockPortfolioQuery, PortfolioQueryError};

pub fn fallback_content() -> Arc<FallbackContent> {
    Arc::new(FallbackContent::embedded().expect("embedded fallback content must parse"))
}

pub fn query_error() -> PortfolioQueryError {
    PortfolioQueryError::DatabaseError("connection refused".to_string())
}

pub fn profile(name: &str) -> Profile {
    Profile {
        id: Uuid::new_v4(),
        name: name.to_string(),
        title: "Backend Engineer".to_string(),
        email: "jordan@example.com".to_string(),
        phone: "+1 555 010 0300".to_string(),
        location: "Lisbon".to_string(),
        bio: "Builds services.".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn skill(category: &str, name: &str) -> Skill {
    Skill {
        id: Uuid::new_v4(),
        category: category.to_string(),
        name: name.to_string(),
        level: 80,
        created_at: Utc::now(),
    }
}

/// Lists handed to the query mock are expected newest first, as the
/// adapter returns them.
pub fn cv_file(url: &str, is_active: bool) -> FileRecord {
    FileRecord {
        id: Uuid::new_v4(),
        file_type: FileType::Cv,
        file_name: url.rsplit('/').next().unwrap_or(url).to_string(),
        file_url: url.to_string(),
        is_active,
        created_at: Utc::now() - Duration::minutes(1),
    }
}

/// Query mock answering every dashboard read successfully.
pub fn dashboard_query(skills: Vec<Skill>, files: Vec<FileRecord>) -> MockPortfolioQuery {
    let mut query = MockPortfolioQuery::new();
    query.expect_first_profile().returning(|| Ok(None));
    query
        .expect_list_skills()
        .returning(move || Ok(skills.clone()));
    query.expect_list_experiences().returning(|| Ok(vec![]));
    query.expect_list_education().returning(|| Ok(vec![]));
    query.expect_list_certificates().returning(|| Ok(vec![]));
    query
        .expect_list_files()
        .returning(move || Ok(files.clone()));
    query
}

/// Rows shared between an in-memory repository and the query mock, so a
/// dashboard refresh sees what the write left behind.
pub type SharedRows<T> = Arc<Mutex<Vec<T>>>;

/// Query mock reading skills and files from shared stores on every call.
/// Files are stored in insertion order and handed out newest first.
pub fn store_backed_query(
    skills: SharedRows<Skill>,
    files: SharedRows<FileRecord>,
) -> MockPortfolioQuery {
    let mut query = MockPortfolioQuery::new();
    query.expect_first_profile().returning(|| Ok(None));
    query
        .expect_list_skills()
        .returning(move || Ok(skills.lock().unwrap().clone()));
    query.expect_list_experiences().returning(|| Ok(vec![]));
    query.expect_list_education().returning(|| Ok(vec![]));
    query.expect_list_certificates().returning(|| Ok(vec![]));
    query
        .expect_list_files()
        .returning(move || Ok(files.lock().unwrap().iter().rev().cloned().collect()));
    query
}
