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
                    .table(Solution::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Solution::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Solution::Problem).uuid().not_null())
                    .col(ColumnDef::new(Solution::Student).uuid().not_null())
                    .col(ColumnDef::new(Solution::SolutionCode).text().not_null())
                    .col(ColumnDef::new(Solution::SubmittedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-solution-problem")
                            .from(Solution::Table, Solution::Problem)
                            .to(Problem::Table, Problem::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-solution-student")
                            .from(Solution::Table, Solution::Student)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Solution::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Solution {
    Table,
    Id,
    Problem,
    Student,
    SolutionCode,
    SubmittedAt,
}

#[derive(DeriveIden)]
enum Problem {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Student {
    Table,
    Id,
}
