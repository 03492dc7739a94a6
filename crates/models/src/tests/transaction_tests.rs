use super::setup_test_db;
use crate::{grade, record, student};
use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set, TransactionTrait};

/// Test basic transaction commit across both tables
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let s = student::ActiveModel { name: Set("Ana Maria".into()), ..Default::default() }
        .insert(&txn)
        .await?;
    grade::ActiveModel { student_id: Set(s.id), subject: Set("Math".into()), score: Set(18.0), ..Default::default() }
        .insert(&txn)
        .await?;
    txn.commit().await?;

    let found = record::find_by_id(&db, s.id).await?.expect("committed");
    assert_eq!(found.subject.as_deref(), Some("Math"));
    Ok(())
}

/// Test rollback leaves neither row behind
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let s = student::ActiveModel { name: Set("Ana".into()), ..Default::default() }
        .insert(&txn)
        .await?;
    grade::ActiveModel { student_id: Set(s.id), subject: Set("Art".into()), score: Set(3.0), ..Default::default() }
        .insert(&txn)
        .await?;
    txn.rollback().await?;

    assert_eq!(student::Entity::find().count(&db).await?, 0);
    assert_eq!(grade::Entity::find().count(&db).await?, 0);
    Ok(())
}
