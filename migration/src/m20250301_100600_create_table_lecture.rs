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
                    .table(Lecture::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Lecture::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Lecture::Title).string().not_null())
                    .col(ColumnDef::new(Lecture::Description).text().not_null())
                    .col(ColumnDef::new(Lecture::Teacher).uuid().not_null())
                    .col(ColumnDef::new(Lecture::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-lecture-teacher")
                            .from(Lecture::Table, Lecture::Teacher)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lecture::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Lecture {
    Table,
    Id,
    Title,
    Description,
    Teacher,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Teacher {
    Table,
    Id,
}
