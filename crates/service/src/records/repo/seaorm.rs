use async_trait::async_trait;
use models::record::StudentRecord;
use sea_orm::DatabaseConnection;

use crate::db::record_service;
use crate::errors::ServiceError;
use crate::records::domain::{CreatedRecord, DeleteOutcome, UpdateOutcome, ValidRecord};
use crate::records::repository::RecordRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmRecordRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl RecordRepository for SeaOrmRecordRepository {
    async fn list(&self) -> Result<Vec<StudentRecord>, ServiceError> {
        record_service::list_records(&self.db).await
    }

    async fn get(&self, id: i32) -> Result<Option<StudentRecord>, ServiceError> {
        record_service::get_record(&self.db, id).await
    }

    async fn create(&self, record: &ValidRecord) -> Result<CreatedRecord, ServiceError> {
        record_service::create_record(&self.db, record).await
    }

    async fn update(&self, id: i32, record: &ValidRecord) -> Result<UpdateOutcome, ServiceError> {
        record_service::update_record(&self.db, id, record).await
    }

    async fn delete(&self, id: i32) -> Result<DeleteOutcome, ServiceError> {
        record_service::delete_record(&self.db, id).await
    }
}
