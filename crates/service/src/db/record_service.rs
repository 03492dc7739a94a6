use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set, TransactionTrait,
};
use models::{grade, record::{self, StudentRecord}, student};

use crate::errors::ServiceError;
use crate::records::domain::{CreatedRecord, DeleteOutcome, UpdateOutcome, ValidRecord};

/// List every student left-joined with its grade.
pub async fn list_records(db: &DatabaseConnection) -> Result<Vec<StudentRecord>, ServiceError> {
    let rows = record::find_all(db).await?;
    Ok(rows)
}

/// Joined row for one student, `None` if the id is unknown.
pub async fn get_record(db: &DatabaseConnection, id: i32) -> Result<Option<StudentRecord>, ServiceError> {
    let found = record::find_by_id(db, id).await?;
    Ok(found)
}

/// Insert the student, then its grade with the generated id. Both or neither.
pub async fn create_record(db: &DatabaseConnection, rec: &ValidRecord) -> Result<CreatedRecord, ServiceError> {
    let rec = rec.clone();
    let created = db
        .transaction::<_, CreatedRecord, ServiceError>(|txn| {
            Box::pin(async move {
                let s = student::ActiveModel { name: Set(rec.name), ..Default::default() }
                    .insert(txn)
                    .await?;
                let g = grade::ActiveModel {
                    student_id: Set(s.id),
                    subject: Set(rec.subject),
                    score: Set(rec.score),
                    ..Default::default()
                }
                .insert(txn)
                .await?;
                Ok(CreatedRecord { student_id: s.id, grade_id: g.id })
            })
        })
        .await?;
    Ok(created)
}

/// Rename the student and overwrite its grade rows in one transaction.
/// Unknown ids yield `NotFound`; a student without grades updates zero grade rows.
pub async fn update_record(db: &DatabaseConnection, id: i32, rec: &ValidRecord) -> Result<UpdateOutcome, ServiceError> {
    let rec = rec.clone();
    let outcome = db
        .transaction::<_, UpdateOutcome, ServiceError>(|txn| {
            Box::pin(async move {
                if student::Entity::find_by_id(id).one(txn).await?.is_none() {
                    return Err(ServiceError::not_found("student"));
                }
                student::Entity::update_many()
                    .col_expr(student::Column::Name, Expr::value(rec.name))
                    .filter(student::Column::Id.eq(id))
                    .exec(txn)
                    .await?;
                let grades = grade::Entity::update_many()
                    .col_expr(grade::Column::Subject, Expr::value(rec.subject))
                    .col_expr(grade::Column::Score, Expr::value(rec.score))
                    .filter(grade::Column::StudentId.eq(id))
                    .exec(txn)
                    .await?;
                Ok(UpdateOutcome { grade_rows: grades.rows_affected })
            })
        })
        .await?;
    Ok(outcome)
}

/// Delete the student's grades, then the student. Unknown ids delete nothing.
pub async fn delete_record(db: &DatabaseConnection, id: i32) -> Result<DeleteOutcome, ServiceError> {
    let outcome = db
        .transaction::<_, DeleteOutcome, ServiceError>(|txn| {
            Box::pin(async move {
                let grades = grade::Entity::delete_many()
                    .filter(grade::Column::StudentId.eq(id))
                    .exec(txn)
                    .await?;
                let students = student::Entity::delete_by_id(id).exec(txn).await?;
                Ok(DeleteOutcome {
                    grades_removed: grades.rows_affected,
                    student_removed: students.rows_affected > 0,
                })
            })
        })
        .await?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use sea_orm::{ConnectionTrait, PaginatorTrait};

    fn ana() -> ValidRecord {
        ValidRecord { name: "Ana Maria".into(), subject: "Math".into(), score: 18.0 }
    }

    #[tokio::test]
    async fn record_crud_roundtrip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let created = create_record(&db, &ana()).await?;
        let rows = list_records(&db).await?;
        assert_eq!(rows, vec![StudentRecord {
            id: created.student_id,
            name: "Ana Maria".into(),
            subject: Some("Math".into()),
            score: Some(18.0),
        }]);
        let g = grade::Entity::find_by_id(created.grade_id).one(&db).await?.unwrap();
        assert_eq!(g.student_id, created.student_id);

        let changed = ValidRecord { name: "Ana Lucia".into(), subject: "Physics".into(), score: 12.5 };
        let outcome = update_record(&db, created.student_id, &changed).await?;
        assert_eq!(outcome.grade_rows, 1);
        let found = get_record(&db, created.student_id).await?.unwrap();
        assert_eq!(found.name, "Ana Lucia");
        assert_eq!(found.subject.as_deref(), Some("Physics"));
        assert_eq!(found.score, Some(12.5));

        let deleted = delete_record(&db, created.student_id).await?;
        assert_eq!(deleted, DeleteOutcome { grades_removed: 1, student_removed: true });
        assert!(get_record(&db, created.student_id).await?.is_none());
        assert!(list_records(&db).await?.is_empty());
        assert_eq!(grade::Entity::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn failed_grade_insert_rolls_back_student() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        db.execute_unprepared("DROP TABLE notas").await?;

        let err = create_record(&db, &ana()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)), "{err:?}");
        assert_eq!(student::Entity::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_student_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = update_record(&db, 42, &ana()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)), "{err:?}");
        assert_eq!(student::Entity::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn update_student_without_grade_touches_no_grade_rows() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let s = student::ActiveModel { name: Set("Juan".into()), ..Default::default() }.insert(&db).await?;

        let outcome = update_record(&db, s.id, &ana()).await?;
        assert_eq!(outcome.grade_rows, 0);
        let found = get_record(&db, s.id).await?.unwrap();
        assert_eq!(found.name, "Ana Maria");
        assert_eq!(found.subject, None);
        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_id_leaves_data_unchanged() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_record(&db, &ana()).await?;

        let outcome = delete_record(&db, 9999).await?;
        assert_eq!(outcome, DeleteOutcome { grades_removed: 0, student_removed: false });
        assert_eq!(list_records(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_every_grade_of_the_student() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = create_record(&db, &ana()).await?;
        grade::ActiveModel {
            student_id: Set(created.student_id),
            subject: Set("Art".into()),
            score: Set(4.0),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let outcome = delete_record(&db, created.student_id).await?;
        assert_eq!(outcome.grades_removed, 2);
        assert!(outcome.student_removed);
        Ok(())
    }
}
