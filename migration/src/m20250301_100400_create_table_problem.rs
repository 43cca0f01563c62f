/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Problem::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Problem::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Problem::Title).string().not_null())
                    .col(ColumnDef::new(Problem::Description).text().not_null())
                    .col(ColumnDef::new(Problem::ProblemValue).double().not_null())
                    .col(ColumnDef::new(Problem::Deadline).date_time().not_null())
                    .col(ColumnDef::new(Problem::InputData).string().not_null())
                    .col(ColumnDef::new(Problem::OutputData).string().not_null())
                    .col(ColumnDef::new(Problem::Teacher).uuid().not_null())
                    .col(ColumnDef::new(Problem::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-problem-teacher")
                            .from(Problem::Table, Problem::Teacher)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Problem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Problem {
    Table,
    Id,
    Title,
    Description,
    ProblemValue,
    Deadline,
    InputData,
    OutputData,
    Teacher,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Teacher {
    Table,
    Id,
}
