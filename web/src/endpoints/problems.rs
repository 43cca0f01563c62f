/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Multipart, Path, State};
use axum::{Extension, Json};
use chrono::{NaiveDateTime, Utc};
use eolimp_core::database::{
    get_group_by_id, get_student_by_user, get_teacher_by_user, problem_assigned_to_group,
};
use eolimp_core::input::parse_deadline;
use eolimp_core::types::*;
use entity::user::UserRole;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, QueryFilter, QuerySelect,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

struct ProblemUpload {
    title: String,
    description: String,
    problem_value: f64,
    deadline: NaiveDateTime,
    groups: Vec<Uuid>,
    input_data: Vec<u8>,
    output_data: Vec<u8>,
}

async fn read_problem_upload(mut multipart: Multipart) -> WebResult<ProblemUpload> {
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut problem_value: Option<f64> = None;
    let mut deadline: Option<NaiveDateTime> = None;
    let mut groups: Vec<Uuid> = Vec::new();
    let mut input_data: Option<Vec<u8>> = None;
    let mut output_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| WebError::BadRequest(format!("Invalid multipart request: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "title" => {
                title = Some(read_text_field(field).await?);
            }
            "description" => {
                description = Some(read_text_field(field).await?);
            }
            "problem_value" => {
                let text = read_text_field(field).await?;
                problem_value = Some(
                    text.trim()
                        .parse()
                        .map_err(|_| WebError::invalid_name("Problem Value"))?,
                );
            }
            "deadline" => {
                let text = read_text_field(field).await?;
                deadline = Some(parse_deadline(text.trim())?);
            }
            "groups" => {
                let text = read_text_field(field).await?;
                for part in text.split(',') {
                    let group = Uuid::parse_str(part.trim())
                        .map_err(|_| WebError::invalid_name("Group Id"))?;
                    if !groups.contains(&group) {
                        groups.push(group);
                    }
                }
            }
            "input_data" => {
                input_data = Some(read_file_field(field).await?);
            }
            "output_data" => {
                output_data = Some(read_file_field(field).await?);
            }
            _ => {}
        }
    }

    Ok(ProblemUpload {
        title: title.ok_or_else(|| missing_field("title"))?,
        description: description.ok_or_else(|| missing_field("description"))?,
        problem_value: problem_value.ok_or_else(|| missing_field("problem_value"))?,
        deadline: deadline.ok_or_else(|| missing_field("deadline"))?,
        groups,
        input_data: input_data.ok_or_else(|| missing_field("input_data"))?,
        output_data: output_data.ok_or_else(|| missing_field("output_data"))?,
    })
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> WebResult<String> {
    field
        .text()
        .await
        .map_err(|e| WebError::BadRequest(format!("Invalid multipart field: {}", e)))
}

async fn read_file_field(field: axum::extract::multipart::Field<'_>) -> WebResult<Vec<u8>> {
    Ok(field
        .bytes()
        .await
        .map_err(|e| WebError::BadRequest(format!("Invalid multipart field: {}", e)))?
        .to_vec())
}

fn missing_field(name: &str) -> WebError {
    WebError::BadRequest(format!("Missing field: {}", name))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    multipart: Multipart,
) -> WebResult<Json<BaseResponse<String>>> {
    let teacher = get_teacher_by_user(&state.db, user.id)
        .await?
        .ok_or_else(WebError::teacher_only)?;

    let upload = read_problem_upload(multipart).await?;

    if upload.groups.is_empty() {
        return Err(WebError::BadRequest(
            "At least one group must be assigned".to_string(),
        ));
    }

    for group in &upload.groups {
        get_group_by_id(&state.db, *group)
            .await?
            .ok_or_else(|| WebError::not_found("Group"))?;
    }

    let problem_id = Uuid::new_v4();
    let problem_dir = format!("{}/problems/{}", state.cli.base_path, problem_id);
    let input_path = format!("{}/input.txt", problem_dir);
    let output_path = format!("{}/output.txt", problem_dir);

    tokio::fs::create_dir_all(&problem_dir)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create problem directory: {}", e);
            WebError::InternalServerError("Failed to store problem data".to_string())
        })?;

    tokio::fs::write(&input_path, &upload.input_data)
        .await
        .map_err(|e| {
            tracing::error!("Failed to write problem input data: {}", e);
            WebError::InternalServerError("Failed to store problem data".to_string())
        })?;

    tokio::fs::write(&output_path, &upload.output_data)
        .await
        .map_err(|e| {
            tracing::error!("Failed to write problem output data: {}", e);
            WebError::InternalServerError("Failed to store problem data".to_string())
        })?;

    let stored = store_problem(
        &state,
        &upload,
        teacher.id,
        problem_id,
        input_path,
        output_path,
    )
    .await;

    let problem = match stored {
        Ok(problem) => problem,
        Err(err) => {
            // The data files must not outlive a failed insert.
            if let Err(fs_err) = tokio::fs::remove_dir_all(&problem_dir).await {
                tracing::error!(
                    "Failed to remove problem directory {}: {}",
                    problem_dir,
                    fs_err
                );
            }
            return Err(err);
        }
    };

    let res = BaseResponse {
        error: false,
        message: problem.id.to_string(),
    };

    Ok(Json(res))
}

// The problem row, its owner and its group assignments land in one
// transaction so a half-created problem is never visible.
async fn store_problem(
    state: &ServerState,
    upload: &ProblemUpload,
    teacher: Uuid,
    problem_id: Uuid,
    input_path: String,
    output_path: String,
) -> WebResult<MProblem> {
    let txn = state.db.begin().await?;

    let problem = AProblem {
        id: Set(problem_id),
        title: Set(upload.title.clone()),
        description: Set(upload.description.clone()),
        problem_value: Set(upload.problem_value),
        deadline: Set(upload.deadline),
        input_data: Set(input_path),
        output_data: Set(output_path),
        teacher: Set(teacher),
        created_at: Set(Utc::now().naive_utc()),
    };

    let problem = problem.insert(&txn).await?;

    for group in &upload.groups {
        let problem_group = AProblemGroup {
            id: Set(Uuid::new_v4()),
            problem: Set(problem.id),
            group: Set(*group),
        };

        problem_group.insert(&txn).await?;
    }

    txn.commit().await?;

    Ok(problem)
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<ListResponse>>> {
    let problems = match user.role {
        UserRole::Teacher => {
            let teacher = get_teacher_by_user(&state.db, user.id)
                .await?
                .ok_or_else(WebError::teacher_only)?;

            EProblem::find()
                .filter(CProblem::Teacher.eq(teacher.id))
                .all(&state.db)
                .await?
        }
        UserRole::Student => {
            let student = get_student_by_user(&state.db, user.id)
                .await?
                .ok_or_else(WebError::student_only)?;

            EProblem::find()
                .join_rev(
                    JoinType::InnerJoin,
                    EProblemGroup::belongs_to(entity::problem::Entity)
                        .from(CProblemGroup::Problem)
                        .to(CProblem::Id)
                        .into(),
                )
                .filter(CProblemGroup::Group.eq(student.group))
                .all(&state.db)
                .await?
        }
    };

    let problems: ListResponse = problems
        .iter()
        .map(|p| ListItem {
            id: p.id,
            name: p.title.clone(),
        })
        .collect();

    let res = BaseResponse {
        error: false,
        message: problems,
    };

    Ok(Json(res))
}

pub async fn get_problem(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(problem): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MProblem>>> {
    let problem = EProblem::find_by_id(problem)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Problem"))?;

    match user.role {
        UserRole::Teacher => {
            let teacher = get_teacher_by_user(&state.db, user.id)
                .await?
                .ok_or_else(WebError::teacher_only)?;

            if problem.teacher != teacher.id {
                return Err(WebError::not_found("Problem"));
            }
        }
        UserRole::Student => {
            let student = get_student_by_user(&state.db, user.id)
                .await?
                .ok_or_else(WebError::student_only)?;

            if !problem_assigned_to_group(&state.db, problem.id, student.group).await? {
                return Err(WebError::not_found("Problem"));
            }
        }
    }

    let res = BaseResponse {
        error: false,
        message: problem,
    };

    Ok(Json(res))
}
