/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "lecture_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub lecture: Uuid,
    pub group: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lecture::Entity",
        from = "Column::Lecture",
        to = "super::lecture::Column::Id"
    )]
    Lecture,
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::Group",
        to = "super::group::Column::Id"
    )]
    Group,
}

impl ActiveModelBehavior for ActiveModel {}
