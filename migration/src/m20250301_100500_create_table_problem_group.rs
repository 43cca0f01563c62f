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
                    .table(ProblemGroup::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProblemGroup::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProblemGroup::Problem).uuid().not_null())
                    .col(ColumnDef::new(ProblemGroup::Group).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-problem_group-problem")
                            .from(ProblemGroup::Table, ProblemGroup::Problem)
                            .to(Problem::Table, Problem::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-problem_group-group")
                            .from(ProblemGroup::Table, ProblemGroup::Group)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-problem_group-problem-group")
                    .table(ProblemGroup::Table)
                    .col(ProblemGroup::Problem)
                    .col(ProblemGroup::Group)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProblemGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProblemGroup {
    Table,
    Id,
    Problem,
    Group,
}

#[derive(DeriveIden)]
enum Problem {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Group {
    Table,
    Id,
}
