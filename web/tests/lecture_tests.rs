/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use entity::user::UserRole;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase};
use uuid::Uuid;
use web::endpoints::lectures::*;
use web::error::WebError;

fn mock_user(role: UserRole) -> user::Model {
    user::Model {
        id: Uuid::new_v4(),
        username: "someone".to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: "someone@example.com".to_string(),
        role,
        password: "hashed".to_string(),
        last_login_at: Utc::now().naive_utc(),
        created_at: Utc::now().naive_utc(),
    }
}

fn mock_lecture(teacher: Uuid) -> lecture::Model {
    lecture::Model {
        id: Uuid::new_v4(),
        title: "Graphs".to_string(),
        description: "Traversal and shortest paths".to_string(),
        teacher,
        created_at: Utc::now().naive_utc(),
    }
}

#[tokio::test]
async fn test_lecture_creation_requires_group() {
    let user = mock_user(UserRole::Teacher);
    let teacher = teacher::Model {
        id: Uuid::new_v4(),
        user: user.id,
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![teacher]])
        .into_connection();

    let state = common::create_state_with(db, common::create_mock_cli());

    let request = MakeLectureRequest {
        title: "Graphs".to_string(),
        description: "Traversal and shortest paths".to_string(),
        groups: vec![],
    };

    let result = put(State(state), Extension(user), Json(request)).await;

    assert!(matches!(result, Err(WebError::BadRequest(_))));
}

#[tokio::test]
async fn test_lecture_creation_rejects_unknown_group() {
    let user = mock_user(UserRole::Teacher);
    let teacher = teacher::Model {
        id: Uuid::new_v4(),
        user: user.id,
    };

    // The group lookup comes back empty, so nothing may be inserted.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![teacher]])
        .append_query_results([Vec::<group::Model>::new()])
        .into_connection();

    let state = common::create_state_with(db, common::create_mock_cli());

    let request = MakeLectureRequest {
        title: "Graphs".to_string(),
        description: "Traversal and shortest paths".to_string(),
        groups: vec![Uuid::new_v4()],
    };

    let result = put(State(state), Extension(user), Json(request)).await;

    assert!(matches!(result, Err(WebError::NotFound(_))));
}

#[tokio::test]
async fn test_lecture_creation_assigns_groups() {
    let user = mock_user(UserRole::Teacher);
    let teacher = teacher::Model {
        id: Uuid::new_v4(),
        user: user.id,
    };
    let group = group::Model {
        id: Uuid::new_v4(),
        name: "10-a".to_string(),
        created_at: Utc::now().naive_utc(),
    };
    let lecture = mock_lecture(teacher.id);
    let assignment = lecture_group::Model {
        id: Uuid::new_v4(),
        lecture: lecture.id,
        group: group.id,
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![teacher]])
        .append_query_results([vec![group.clone()]])
        .append_query_results([vec![lecture.clone()]])
        .append_query_results([vec![assignment]])
        .into_connection();

    let state = common::create_state_with(db, common::create_mock_cli());

    let request = MakeLectureRequest {
        title: "Graphs".to_string(),
        description: "Traversal and shortest paths".to_string(),
        groups: vec![group.id],
    };

    let result = put(State(state), Extension(user), Json(request))
        .await
        .unwrap();

    assert!(!result.error);
    assert_eq!(result.message, lecture.id.to_string());
}

#[tokio::test]
async fn test_lecture_duplicate_groups_assigned_once() {
    let user = mock_user(UserRole::Teacher);
    let teacher = teacher::Model {
        id: Uuid::new_v4(),
        user: user.id,
    };
    let group = group::Model {
        id: Uuid::new_v4(),
        name: "10-a".to_string(),
        created_at: Utc::now().naive_utc(),
    };
    let lecture = mock_lecture(teacher.id);
    let assignment = lecture_group::Model {
        id: Uuid::new_v4(),
        lecture: lecture.id,
        group: group.id,
    };

    // One group lookup and one assignment insert are queued. A repeated
    // group id in the request must not consume more.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![teacher]])
        .append_query_results([vec![group.clone()]])
        .append_query_results([vec![lecture.clone()]])
        .append_query_results([vec![assignment]])
        .into_connection();

    let state = common::create_state_with(db, common::create_mock_cli());

    let request = MakeLectureRequest {
        title: "Graphs".to_string(),
        description: "Traversal and shortest paths".to_string(),
        groups: vec![group.id, group.id],
    };

    let result = put(State(state), Extension(user), Json(request))
        .await
        .unwrap();

    assert!(!result.error);
    assert_eq!(result.message, lecture.id.to_string());
}

#[tokio::test]
async fn test_lecture_detail_hidden_from_other_teachers() {
    let user = mock_user(UserRole::Teacher);
    let teacher = teacher::Model {
        id: Uuid::new_v4(),
        user: user.id,
    };

    // Lecture owned by a different teacher.
    let lecture = mock_lecture(Uuid::new_v4());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![lecture.clone()]])
        .append_query_results([vec![teacher]])
        .into_connection();

    let state = common::create_state_with(db, common::create_mock_cli());

    let result = get_lecture(State(state), Extension(user), Path(lecture.id)).await;

    assert!(matches!(result, Err(WebError::NotFound(_))));
}

#[tokio::test]
async fn test_lecture_detail_hidden_from_unassigned_students() {
    let user = mock_user(UserRole::Student);
    let student = student::Model {
        id: Uuid::new_v4(),
        user: user.id,
        group: Uuid::new_v4(),
    };
    let lecture = mock_lecture(Uuid::new_v4());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![lecture.clone()]])
        .append_query_results([vec![student]])
        .append_query_results([Vec::<lecture_group::Model>::new()])
        .into_connection();

    let state = common::create_state_with(db, common::create_mock_cli());

    let result = get_lecture(State(state), Extension(user), Path(lecture.id)).await;

    assert!(matches!(result, Err(WebError::NotFound(_))));
}
