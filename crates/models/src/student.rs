use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, grade};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "alumnos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "nombre")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Grade }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Grade => Entity::has_many(grade::Entity).into(),
        }
    }
}

impl Related<grade::Entity> for Entity {
    fn to() -> RelationDef { Relation::Grade.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// A student name is one or more ASCII letters or whitespace characters.
pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    let valid = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace());
    if !valid {
        return Err(errors::ModelError::Validation("invalid student name".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_and_spaces() {
        for name in ["Ana", "Ana Maria", "juan  perez", "Ana\tMaria"] {
            assert!(validate_name(name).is_ok(), "{name:?} should be valid");
        }
    }

    #[test]
    fn rejects_digits_punctuation_and_empty() {
        for name in ["", "Ana3", "O'Brien", "Ana-Maria", "Perez.", "José"] {
            let err = validate_name(name).unwrap_err();
            assert_eq!(err.to_string(), "validation error: invalid student name", "{name:?}");
        }
    }
}
