//! Joined student/grade read model.
//!
//! Reads always left-join `alumnos` to `notas`, so a student without a grade
//! still shows up with `subject` and `score` set to `None`.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};
use serde::Serialize;

use crate::{grade, student};

#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize)]
pub struct StudentRecord {
    pub id: i32,
    pub name: String,
    pub subject: Option<String>,
    pub score: Option<f64>,
}

fn joined() -> Select<student::Entity> {
    student::Entity::find()
        .select_only()
        .column_as(student::Column::Id, "id")
        .column_as(student::Column::Name, "name")
        .column_as(grade::Column::Subject, "subject")
        .column_as(grade::Column::Score, "score")
        .join(JoinType::LeftJoin, student::Relation::Grade.def())
        .order_by_asc(student::Column::Id)
        .order_by_asc(grade::Column::Id)
}

/// Every student with its grade columns, ordered by student id.
pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<StudentRecord>, DbErr> {
    joined().into_model::<StudentRecord>().all(db).await
}

/// First joined row for one student, `None` when the student does not exist.
pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<StudentRecord>, DbErr> {
    joined()
        .filter(student::Column::Id.eq(id))
        .into_model::<StudentRecord>()
        .one(db)
        .await
}
