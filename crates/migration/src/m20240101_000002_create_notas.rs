//! Create `notas` table with FK to `alumnos`.
//!
//! The FK has no cascade: grades must be removed before their student.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notas::Table)
                    .if_not_exists()
                    .col(pk_auto(Notas::Id))
                    .col(integer(Notas::AlumnoId))
                    .col(string_len(Notas::Materia, 100))
                    .col(double(Notas::Nota))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notas_alumno")
                            .from(Notas::Table, Notas::AlumnoId)
                            .to(Alumnos::Table, Alumnos::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Notas::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Notas { Table, Id, AlumnoId, Materia, Nota }

#[derive(DeriveIden)]
enum Alumnos { Table, Id }
