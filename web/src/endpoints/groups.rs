/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::State;
use axum::{Extension, Json};
use chrono::Utc;
use eolimp_core::database::get_teacher_by_user;
use eolimp_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeGroupRequest {
    pub name: String,
}

/// Group listing backs the student signup form, so it is reachable
/// without authentication.
pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<BaseResponse<ListResponse>>> {
    let groups = EGroup::find().all(&state.db).await?;

    let groups: ListResponse = groups
        .iter()
        .map(|g| ListItem {
            id: g.id,
            name: g.name.clone(),
        })
        .collect();

    let res = BaseResponse {
        error: false,
        message: groups,
    };

    Ok(Json(res))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeGroupRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    get_teacher_by_user(&state.db, user.id)
        .await?
        .ok_or_else(WebError::teacher_only)?;

    let name = body.name.trim();

    if name.is_empty() {
        return Err(WebError::invalid_name("Group Name"));
    }

    let existing_group = EGroup::find()
        .filter(CGroup::Name.eq(name))
        .one(&state.db)
        .await?;

    if existing_group.is_some() {
        return Err(WebError::already_exists("Group"));
    }

    let group = AGroup {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        created_at: Set(Utc::now().naive_utc()),
    };

    let group = group.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: group.id.to_string(),
    };

    Ok(Json(res))
}
