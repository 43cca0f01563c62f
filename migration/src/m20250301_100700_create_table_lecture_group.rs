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
                    .table(LectureGroup::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LectureGroup::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LectureGroup::Lecture).uuid().not_null())
                    .col(ColumnDef::new(LectureGroup::Group).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-lecture_group-lecture")
                            .from(LectureGroup::Table, LectureGroup::Lecture)
                            .to(Lecture::Table, Lecture::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-lecture_group-group")
                            .from(LectureGroup::Table, LectureGroup::Group)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-lecture_group-lecture-group")
                    .table(LectureGroup::Table)
                    .col(LectureGroup::Lecture)
                    .col(LectureGroup::Group)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LectureGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LectureGroup {
    Table,
    Id,
    Lecture,
    Group,
}

#[derive(DeriveIden)]
enum Lecture {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Group {
    Table,
    Id,
}
