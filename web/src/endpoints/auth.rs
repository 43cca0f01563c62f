/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::{encode_jwt, update_last_login};
use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::State;
use chrono::Utc;
use eolimp_core::consts::*;
use eolimp_core::database::get_group_by_id;
use eolimp_core::input::{check_index_name, load_secret, secret_matches, validate_password};
use eolimp_core::types::*;
use email_address::EmailAddress;
use entity::user::UserRole;
use password_auth::{generate_hash, verify_password};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLoginRequest {
    pub loginname: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeTeacherRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub password_confirm: String,
    pub secret_key: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub password_confirm: String,
    pub group: Uuid,
}

async fn check_signup_input(
    state: &State<Arc<ServerState>>,
    username: &str,
    email: &str,
    password: &str,
    password_confirm: &str,
) -> WebResult<()> {
    if state.cli.disable_registration {
        return Err(WebError::registration_disabled());
    }

    check_index_name(username)?;

    if !EmailAddress::is_valid(email) {
        return Err(WebError::invalid_email());
    }

    if password != password_confirm {
        return Err(WebError::password_mismatch());
    }

    validate_password(password)?;

    Ok(())
}

async fn check_user_unique(
    state: &State<Arc<ServerState>>,
    username: &str,
    email: &str,
) -> WebResult<()> {
    let user = EUser::find()
        .filter(
            Condition::any()
                .add(CUser::Username.eq(username))
                .add(CUser::Email.eq(email)),
        )
        .one(&state.db)
        .await?;

    if user.is_some() {
        return Err(WebError::already_exists("User"));
    }

    Ok(())
}

pub async fn post_teacher_register(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeTeacherRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    check_signup_input(
        &state,
        &body.username,
        &body.email,
        &body.password,
        &body.password_confirm,
    )
    .await?;

    let teacher_key = load_secret(&state.cli.teacher_key_file);

    if !secret_matches(&body.secret_key, &teacher_key) {
        return Err(WebError::invalid_teacher_key());
    }

    check_user_unique(&state, &body.username, &body.email).await?;

    // User and Teacher rows must appear together or not at all
    let txn = state.db.begin().await?;

    let user = AUser {
        id: Set(Uuid::new_v4()),
        username: Set(body.username.clone()),
        first_name: Set(body.first_name.clone()),
        last_name: Set(body.last_name.clone()),
        email: Set(body.email.clone()),
        role: Set(UserRole::Teacher),
        password: Set(generate_hash(body.password.clone())),
        last_login_at: Set(*NULL_TIME),
        created_at: Set(Utc::now().naive_utc()),
    };

    let user = user.insert(&txn).await?;

    let teacher = ATeacher {
        id: Set(Uuid::new_v4()),
        user: Set(user.id),
    };

    teacher.insert(&txn).await?;

    txn.commit().await?;

    tracing::info!("Registered teacher {}", user.username);

    let res = BaseResponse {
        error: false,
        message: user.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn post_student_register(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeStudentRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    check_signup_input(
        &state,
        &body.username,
        &body.email,
        &body.password,
        &body.password_confirm,
    )
    .await?;

    check_user_unique(&state, &body.username, &body.email).await?;

    let group = get_group_by_id(&state.db, body.group)
        .await?
        .ok_or_else(|| WebError::not_found("Group"))?;

    let txn = state.db.begin().await?;

    let user = AUser {
        id: Set(Uuid::new_v4()),
        username: Set(body.username.clone()),
        first_name: Set(body.first_name.clone()),
        last_name: Set(body.last_name.clone()),
        email: Set(body.email.clone()),
        role: Set(UserRole::Student),
        password: Set(generate_hash(body.password.clone())),
        last_login_at: Set(*NULL_TIME),
        created_at: Set(Utc::now().naive_utc()),
    };

    let user = user.insert(&txn).await?;

    let student = AStudent {
        id: Set(Uuid::new_v4()),
        user: Set(user.id),
        group: Set(group.id),
    };

    student.insert(&txn).await?;

    txn.commit().await?;

    tracing::info!("Registered student {} into group {}", user.username, group.name);

    let res = BaseResponse {
        error: false,
        message: user.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeLoginRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let user = EUser::find()
        .filter(
            Condition::any()
                .add(CUser::Username.eq(body.loginname.clone()))
                .add(CUser::Email.eq(body.loginname.clone())),
        )
        .one(&state.db)
        .await?
        .ok_or_else(WebError::invalid_credentials)?;

    verify_password(body.password, &user.password)
        .map_err(|_| WebError::invalid_credentials())?;

    let token = encode_jwt(state.clone(), user.id)
        .map_err(|_| WebError::failed_to_generate_token())?;

    update_last_login(state, user)
        .await
        .map_err(|_| WebError::failed_to_update_user())?;

    let res = BaseResponse {
        error: false,
        message: token,
    };

    Ok(Json(res))
}

pub async fn post_logout(
    _state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<String>>> {
    let res = BaseResponse {
        error: false,
        message: "Logout Successfully".to_string(),
    };

    Ok(Json(res))
}
