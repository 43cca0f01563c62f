/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use eolimp_core::types::*;
use entity::*;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        base_path: ".".to_string(),
        disable_registration: false,
        jwt_secret_file: "test_jwt".to_string(),
        teacher_key_file: "test_teacher_key".to_string(),
    }
}

pub fn create_mock_state() -> Arc<ServerState> {
    let cli = create_mock_cli();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    Arc::new(ServerState { db, cli })
}

pub fn create_state_with(db: DatabaseConnection, cli: Cli) -> Arc<ServerState> {
    Arc::new(ServerState { db, cli })
}
