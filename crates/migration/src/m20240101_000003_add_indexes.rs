use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Notas: index on alumno_id for the left join and child deletes
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_notas_alumno")
                    .table(Notas::Table)
                    .col(Notas::AlumnoId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_notas_alumno").table(Notas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Notas { Table, AlumnoId }
