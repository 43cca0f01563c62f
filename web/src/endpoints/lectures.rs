/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use eolimp_core::database::{
    get_group_by_id, get_student_by_user, get_teacher_by_user, lecture_assigned_to_group,
};
use eolimp_core::types::*;
use entity::user::UserRole;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, QueryFilter, QuerySelect,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLectureRequest {
    pub title: String,
    pub description: String,
    pub groups: Vec<Uuid>,
}

pub async fn put(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeLectureRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let teacher = get_teacher_by_user(&state.db, user.id)
        .await?
        .ok_or_else(WebError::teacher_only)?;

    if body.title.trim().is_empty() {
        return Err(WebError::invalid_name("Lecture Title"));
    }

    if body.groups.is_empty() {
        return Err(WebError::BadRequest(
            "At least one group must be assigned".to_string(),
        ));
    }

    let mut groups = body.groups.clone();
    groups.sort_unstable();
    groups.dedup();

    for group in &groups {
        get_group_by_id(&state.db, *group)
            .await?
            .ok_or_else(|| WebError::not_found("Group"))?;
    }

    let txn = state.db.begin().await?;

    let lecture = ALecture {
        id: Set(Uuid::new_v4()),
        title: Set(body.title.clone()),
        description: Set(body.description.clone()),
        teacher: Set(teacher.id),
        created_at: Set(Utc::now().naive_utc()),
    };

    let lecture = lecture.insert(&txn).await?;

    for group in &groups {
        let lecture_group = ALectureGroup {
            id: Set(Uuid::new_v4()),
            lecture: Set(lecture.id),
            group: Set(*group),
        };

        lecture_group.insert(&txn).await?;
    }

    txn.commit().await?;

    let res = BaseResponse {
        error: false,
        message: lecture.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<ListResponse>>> {
    let lectures = match user.role {
        UserRole::Teacher => {
            let teacher = get_teacher_by_user(&state.db, user.id)
                .await?
                .ok_or_else(WebError::teacher_only)?;

            ELecture::find()
                .filter(CLecture::Teacher.eq(teacher.id))
                .all(&state.db)
                .await?
        }
        UserRole::Student => {
            let student = get_student_by_user(&state.db, user.id)
                .await?
                .ok_or_else(WebError::student_only)?;

            ELecture::find()
                .join_rev(
                    JoinType::InnerJoin,
                    ELectureGroup::belongs_to(entity::lecture::Entity)
                        .from(CLectureGroup::Lecture)
                        .to(CLecture::Id)
                        .into(),
                )
                .filter(CLectureGroup::Group.eq(student.group))
                .all(&state.db)
                .await?
        }
    };

    let lectures: ListResponse = lectures
        .iter()
        .map(|l| ListItem {
            id: l.id,
            name: l.title.clone(),
        })
        .collect();

    let res = BaseResponse {
        error: false,
        message: lectures,
    };

    Ok(Json(res))
}

pub async fn get_lecture(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(lecture): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MLecture>>> {
    let lecture = ELecture::find_by_id(lecture)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Lecture"))?;

    match user.role {
        UserRole::Teacher => {
            let teacher = get_teacher_by_user(&state.db, user.id)
                .await?
                .ok_or_else(WebError::teacher_only)?;

            if lecture.teacher != teacher.id {
                return Err(WebError::not_found("Lecture"));
            }
        }
        UserRole::Student => {
            let student = get_student_by_user(&state.db, user.id)
                .await?
                .ok_or_else(WebError::student_only)?;

            if !lecture_assigned_to_group(&state.db, lecture.id, student.group).await? {
                return Err(WebError::not_found("Lecture"));
            }
        }
    }

    let res = BaseResponse {
        error: false,
        message: lecture,
    };

    Ok(Json(res))
}
