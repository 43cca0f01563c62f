/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use eolimp_core::database::{get_student_by_user, get_teacher_by_user, problem_assigned_to_group};
use eolimp_core::types::*;
use entity::user::UserRole;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeSolutionRequest {
    pub solution_code: String,
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(problem): Path<Uuid>,
    Json(body): Json<MakeSolutionRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let student = get_student_by_user(&state.db, user.id)
        .await?
        .ok_or_else(WebError::student_only)?;

    if body.solution_code.trim().is_empty() {
        return Err(WebError::BadRequest("Solution code is empty".to_string()));
    }

    let problem = EProblem::find_by_id(problem)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Problem"))?;

    if !problem_assigned_to_group(&state.db, problem.id, student.group).await? {
        return Err(WebError::not_found("Problem"));
    }

    let solution = ASolution {
        id: Set(Uuid::new_v4()),
        problem: Set(problem.id),
        student: Set(student.id),
        solution_code: Set(body.solution_code.clone()),
        submitted_at: Set(Utc::now().naive_utc()),
    };

    let solution = solution.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: solution.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(problem): Path<Uuid>,
) -> WebResult<Json<BaseResponse<Vec<MSolution>>>> {
    let problem = EProblem::find_by_id(problem)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Problem"))?;

    let solutions = match user.role {
        UserRole::Teacher => {
            let teacher = get_teacher_by_user(&state.db, user.id)
                .await?
                .ok_or_else(WebError::teacher_only)?;

            if problem.teacher != teacher.id {
                return Err(WebError::not_found("Problem"));
            }

            ESolution::find()
                .filter(CSolution::Problem.eq(problem.id))
                .all(&state.db)
                .await?
        }
        UserRole::Student => {
            let student = get_student_by_user(&state.db, user.id)
                .await?
                .ok_or_else(WebError::student_only)?;

            if !problem_assigned_to_group(&state.db, problem.id, student.group).await? {
                return Err(WebError::not_found("Problem"));
            }

            ESolution::find()
                .filter(CSolution::Problem.eq(problem.id))
                .filter(CSolution::Student.eq(student.id))
                .all(&state.db)
                .await?
        }
    };

    let res = BaseResponse {
        error: false,
        message: solutions,
    };

    Ok(Json(res))
}
