/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::{group, student, user};
use chrono::{DateTime, NaiveDateTime};
use sea_orm::{ColumnTrait, DatabaseBackend, DbErr, EntityTrait, MockDatabase, QueryFilter};
use uuid::Uuid;

fn null_time() -> NaiveDateTime {
    DateTime::from_timestamp(0, 0).unwrap().naive_utc()
}

#[tokio::test]
async fn test_find_user_by_username() -> Result<(), DbErr> {
    let user_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user::Model {
            id: user_id,
            username: "mdoe".to_string(),
            first_name: "Mary".to_string(),
            last_name: "Doe".to_string(),
            email: "mdoe@example.com".to_string(),
            role: user::UserRole::Teacher,
            password: "argon2-hash".to_string(),
            last_login_at: null_time(),
            created_at: null_time(),
        }]])
        .into_connection();

    let found = user::Entity::find()
        .filter(user::Column::Username.eq("mdoe"))
        .one(&db)
        .await?
        .unwrap();

    assert_eq!(found.id, user_id);
    assert_eq!(found.role, user::UserRole::Teacher);

    Ok(())
}

#[tokio::test]
async fn test_find_student_with_group() -> Result<(), DbErr> {
    let group_id = Uuid::new_v4();
    let student_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![student::Model {
            id: student_id,
            user: Uuid::new_v4(),
            group: group_id,
        }]])
        .append_query_results([vec![group::Model {
            id: group_id,
            name: "K-28".to_string(),
            created_at: null_time(),
        }]])
        .into_connection();

    let found = student::Entity::find_by_id(student_id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(found.group, group_id);

    let found_group = group::Entity::find_by_id(found.group)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(found_group.name, "K-28");

    Ok(())
}
