/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::extract::State;
use axum::{Extension, Json};
use eolimp_core::database::get_student_by_user;
use eolimp_core::types::*;
use entity::user::UserRole;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct UserInfoResponse {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub group: Option<Uuid>,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<UserInfoResponse>>> {
    let group = match user.role {
        UserRole::Teacher => None,
        UserRole::Student => get_student_by_user(&state.db, user.id)
            .await?
            .map(|s| s.group),
    };

    let role = match user.role {
        UserRole::Teacher => "teacher",
        UserRole::Student => "student",
    };

    let user_info = UserInfoResponse {
        id: user.id.to_string(),
        username: user.username.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        email: user.email.clone(),
        role: role.to_string(),
        group,
    };

    let res = BaseResponse {
        error: false,
        message: user_info,
    };

    Ok(Json(res))
}
