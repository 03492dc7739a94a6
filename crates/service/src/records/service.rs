use std::sync::Arc;

use models::record::StudentRecord;
use tracing::{field, info, instrument, warn, Span};

use super::domain::{CreatedRecord, DeleteOutcome, RecordInput, ValidationPolicy};
use super::repository::RecordRepository;
use crate::errors::ServiceError;

/// Record service: validates form input and drives the repository.
/// Validation always completes before the first storage call.
pub struct RecordService<R: RecordRepository> {
    repo: Arc<R>,
    policy: ValidationPolicy,
}

impl<R: RecordRepository> RecordService<R> {
    pub fn new(repo: Arc<R>, policy: ValidationPolicy) -> Self { Self { repo, policy } }

    pub async fn list_all(&self) -> Result<Vec<StudentRecord>, ServiceError> {
        let rows = self.repo.list().await?;
        info!(count = rows.len(), "list student records");
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<StudentRecord>, ServiceError> {
        self.repo.get(id).await
    }

    /// Create a student and its grade.
    ///
    /// # Examples
    /// ```
    /// use service::records::{domain::{RecordInput, ValidationPolicy}, repository::mock::MockRecordRepository, RecordService};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockRecordRepository::default());
    /// let svc = RecordService::new(repo.clone(), ValidationPolicy::default());
    /// let created = tokio_test::block_on(svc.create(RecordInput::new("Ana Maria", "Math", "18"))).unwrap();
    /// let row = tokio_test::block_on(svc.get_by_id(created.student_id)).unwrap().unwrap();
    /// assert_eq!(row.score, Some(18.0));
    /// ```
    #[instrument(skip(self, input), fields(student_id = field::Empty))]
    pub async fn create(&self, input: RecordInput) -> Result<CreatedRecord, ServiceError> {
        let record = input.validate_for_create(self.policy).map_err(|e| {
            warn!(error = %e, "student create rejected");
            ServiceError::from(e)
        })?;
        let created = self.repo.create(&record).await?;
        Span::current().record("student_id", created.student_id);
        info!(student_id = created.student_id, grade_id = created.grade_id, "student_created");
        Ok(created)
    }

    #[instrument(skip(self, input), fields(student_id = id))]
    pub async fn update(&self, id: i32, input: RecordInput) -> Result<(), ServiceError> {
        let record = input.validate_for_update().map_err(|e| {
            warn!(error = %e, "student update rejected");
            ServiceError::from(e)
        })?;
        let outcome = self.repo.update(id, &record).await?;
        if outcome.grade_rows == 0 {
            warn!("student has no grade row; subject and score not stored");
        }
        info!(grade_rows = outcome.grade_rows, "student_updated");
        Ok(())
    }

    #[instrument(skip(self), fields(student_id = id))]
    pub async fn delete(&self, id: i32) -> Result<DeleteOutcome, ServiceError> {
        let outcome = self.repo.delete(id).await?;
        info!(grades_removed = outcome.grades_removed, student_removed = outcome.student_removed, "student_deleted");
        Ok(outcome)
    }
}
