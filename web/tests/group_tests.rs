/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::extract::State;
use axum::{Extension, Json};
use chrono::Utc;
use entity::user::UserRole;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase};
use uuid::Uuid;
use web::endpoints::groups::*;
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

#[tokio::test]
async fn test_group_listing_is_public() {
    let groups = vec![
        group::Model {
            id: Uuid::new_v4(),
            name: "10-a".to_string(),
            created_at: Utc::now().naive_utc(),
        },
        group::Model {
            id: Uuid::new_v4(),
            name: "10-b".to_string(),
            created_at: Utc::now().naive_utc(),
        },
    ];

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([groups.clone()])
        .into_connection();

    let state = common::create_state_with(db, common::create_mock_cli());

    let result = get(State(state)).await.unwrap();

    assert!(!result.error);
    assert_eq!(result.message.len(), 2);
    assert_eq!(result.message[0].name, "10-a");
}

#[tokio::test]
async fn test_group_creation_requires_teacher() {
    let user = mock_user(UserRole::Student);

    // No teacher profile exists for this user.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<teacher::Model>::new()])
        .into_connection();

    let state = common::create_state_with(db, common::create_mock_cli());

    let request = MakeGroupRequest {
        name: "10-a".to_string(),
    };

    let result = put(State(state), Extension(user), Json(request)).await;

    assert!(matches!(result, Err(WebError::Forbidden(_))));
}

#[tokio::test]
async fn test_group_creation_rejects_duplicate_name() {
    let user = mock_user(UserRole::Teacher);
    let teacher = teacher::Model {
        id: Uuid::new_v4(),
        user: user.id,
    };
    let existing = group::Model {
        id: Uuid::new_v4(),
        name: "10-a".to_string(),
        created_at: Utc::now().naive_utc(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![teacher]])
        .append_query_results([vec![existing]])
        .into_connection();

    let state = common::create_state_with(db, common::create_mock_cli());

    let request = MakeGroupRequest {
        name: "10-a".to_string(),
    };

    let result = put(State(state), Extension(user), Json(request)).await;

    assert!(matches!(result, Err(WebError::Conflict(_))));
}

#[tokio::test]
async fn test_group_creation_returns_new_id() {
    let user = mock_user(UserRole::Teacher);
    let teacher = teacher::Model {
        id: Uuid::new_v4(),
        user: user.id,
    };
    let created = group::Model {
        id: Uuid::new_v4(),
        name: "11-c".to_string(),
        created_at: Utc::now().naive_utc(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![teacher]])
        .append_query_results([Vec::<group::Model>::new()])
        .append_query_results([vec![created.clone()]])
        .into_connection();

    let state = common::create_state_with(db, common::create_mock_cli());

    let request = MakeGroupRequest {
        name: "11-c".to_string(),
    };

    let result = put(State(state), Extension(user), Json(request))
        .await
        .unwrap();

    assert!(!result.error);
    assert_eq!(result.message, created.id.to_string());
}
