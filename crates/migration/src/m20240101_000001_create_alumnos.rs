//! Create `alumnos` table.
//!
//! One row per student; `notas` rows reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alumnos::Table)
                    .if_not_exists()
                    .col(pk_auto(Alumnos::Id))
                    .col(string_len(Alumnos::Nombre, 100))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Alumnos::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Alumnos { Table, Id, Nombre }
