use async_trait::async_trait;
use tracing::error;

use crate::portfolio::application::{
    domain::{category_suggestions, dashboard::distinct_categories, DashboardSnapshot, MutationOutcome},
    ports::{
        incoming::use_cases::{DashboardError, GetDashboardUseCase, MutationError, MutationResult},
        outgoing::{PortfolioQuery, PortfolioQueryError},
    },
};

/// Reads all six tables concurrently. The first failing query aborts the load.
pub async fn load_dashboard<Q>(query: &Q) -> Result<DashboardSnapshot, PortfolioQueryError>
where
    Q: PortfolioQuery + ?Sized,
{
    let (profile, skills, experiences, education, certificates, files) = futures::try_join!(
        query.first_profile(),
        query.list_skills(),
        query.list_experiences(),
        query.list_education(),
        query.list_certificates(),
        query.list_files()
    )?;

    Ok(DashboardSnapshot::new(
        profile,
        skills,
        experiences,
        education,
        certificates,
        files,
    ))
}

/// Completes a successful write with a fresh snapshot.
pub async fn respond_with_dashboard<Q>(query: &Q, message: String) -> MutationResult
where
    Q: PortfolioQuery + ?Sized,
{
    match load_dashboard(query).await {
        Ok(dashboard) => Ok(MutationOutcome { message, dashboard }),
        Err(e) => {
            error!(error = %e, "Write succeeded but dashboard reload failed");
            Err(MutationError::RefreshFailed {
                message,
                reason: e.to_string(),
            })
        }
    }
}

#[derive(Clone)]
pub struct DashboardService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> DashboardService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetDashboardUseCase for DashboardService<Q>
where
    Q: PortfolioQuery,
{
    async fn execute(&self) -> Result<DashboardSnapshot, DashboardError> {
        load_dashboard(&self.query).await.map_err(|e| {
            error!(error = %e, "Failed to load dashboard");
            DashboardError::Unavailable(e.to_string())
        })
    }

    async fn category_suggestions(&self, query: &str) -> Result<Vec<String>, DashboardError> {
        let skills = self
            .query
            .list_skills()
            .await
            .map_err(|e| DashboardError::Unavailable(e.to_string()))?;

        Ok(category_suggestions(&distinct_categories(&skills), query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::application::domain::FileType;
    use crate::portfolio::application::ports::outgoing::MockPortfolioQuery;
    use crate::tests::support::portfolio_fixtures::{
        cv_file, dashboard_query, query_error, skill,
    };

    #[tokio::test]
    async fn execute_returns_snapshot_with_derived_fields() {
        let query = dashboard_query(
            vec![
                skill("Backend", "Rust"),
                skill("Backend", "Postgres"),
                skill("Frontend", "React"),
            ],
            vec![cv_file("/files/cv.pdf", true)],
        );

        let snapshot = DashboardService::new(query).execute().await.unwrap();

        assert_eq!(snapshot.skills.len(), 3);
        assert_eq!(snapshot.skill_categories, vec!["Backend", "Frontend"]);
        let cv = snapshot.active_files.cv.unwrap();
        assert_eq!(cv.file_type, FileType::Cv);
        assert!(snapshot.active_files.profile_pic.is_none());
    }

    #[tokio::test]
    async fn any_failing_table_makes_dashboard_unavailable() {
        let mut query = MockPortfolioQuery::new();
        query.expect_first_profile().returning(|| Ok(None));
        query.expect_list_skills().returning(|| Ok(vec![]));
        query.expect_list_experiences().returning(|| Ok(vec![]));
        query.expect_list_education().returning(|| Err(query_error()));
        query.expect_list_certificates().returning(|| Ok(vec![]));
        query.expect_list_files().returning(|| Ok(vec![]));

        let result = DashboardService::new(query).execute().await;

        assert!(matches!(result, Err(DashboardError::Unavailable(_))));
    }

    #[tokio::test]
    async fn category_suggestions_match_ignoring_case() {
        let mut query = MockPortfolioQuery::new();
        query.expect_list_skills().returning(|| {
            Ok(vec![
                skill("Backend", "Rust"),
                skill("Cloud", "AWS"),
                skill("backend tools", "Docker"),
            ])
        });

        let suggestions = DashboardService::new(query)
            .category_suggestions("BACK")
            .await
            .unwrap();

        assert_eq!(suggestions, vec!["Backend", "backend tools"]);
    }

    #[tokio::test]
    async fn refresh_failure_keeps_success_message() {
        let mut query = MockPortfolioQuery::new();
        query.expect_first_profile().returning(|| Err(query_error()));
        query.expect_list_skills().returning(|| Ok(vec![]));
        query.expect_list_experiences().returning(|| Ok(vec![]));
        query.expect_list_education().returning(|| Ok(vec![]));
        query.expect_list_certificates().returning(|| Ok(vec![]));
        query.expect_list_files().returning(|| Ok(vec![]));

        let result = respond_with_dashboard(&query, "Skill added successfully!".into()).await;

        match result {
            Err(MutationError::RefreshFailed { message, .. }) => {
                assert_eq!(message, "Skill added successfully!")
            }
            other => panic!("expected RefreshFailed, got {:?}", other),
        }
    }
}
