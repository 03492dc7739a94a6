use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, student};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 20.0;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "alumno_id")]
    pub student_id: i32,
    #[sea_orm(column_name = "materia")]
    pub subject: String,
    #[sea_orm(column_name = "nota")]
    pub score: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Student }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Student => Entity::belongs_to(student::Entity)
                .from(Column::StudentId)
                .to(student::Column::Id)
                .into(),
        }
    }
}

impl Related<student::Entity> for Entity {
    fn to() -> RelationDef { Relation::Student.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_subject(subject: &str) -> Result<(), errors::ModelError> {
    if subject.trim().is_empty() {
        return Err(errors::ModelError::Validation("invalid subject".into()));
    }
    Ok(())
}

/// Parse a form score. Surrounding whitespace is ignored; the value must be
/// a finite number in `MIN_SCORE..=MAX_SCORE`.
pub fn parse_score(raw: &str) -> Result<f64, errors::ModelError> {
    let invalid = || errors::ModelError::Validation("invalid score".into());
    let score: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(invalid());
    }
    Ok(score)
}
