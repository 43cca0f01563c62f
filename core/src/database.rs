/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::Migrator;
use sea_orm::{
    ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, QueryFilter,
};
use sea_orm_migration::prelude::*;
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file).context("Failed to read database url from file")?
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    Ok(db)
}

pub async fn get_teacher_by_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Option<MTeacher>> {
    Ok(ETeacher::find()
        .filter(CTeacher::User.eq(user_id))
        .one(db)
        .await
        .context("Failed to query teacher profile")?)
}

pub async fn get_student_by_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Option<MStudent>> {
    Ok(EStudent::find()
        .filter(CStudent::User.eq(user_id))
        .one(db)
        .await
        .context("Failed to query student profile")?)
}

pub async fn get_group_by_id(db: &DatabaseConnection, group_id: Uuid) -> Result<Option<MGroup>> {
    Ok(EGroup::find_by_id(group_id)
        .one(db)
        .await
        .context("Failed to query group")?)
}

pub async fn problem_assigned_to_group(
    db: &DatabaseConnection,
    problem_id: Uuid,
    group_id: Uuid,
) -> Result<bool> {
    Ok(EProblemGroup::find()
        .filter(CProblemGroup::Problem.eq(problem_id))
        .filter(CProblemGroup::Group.eq(group_id))
        .one(db)
        .await
        .context("Failed to query problem assignment")?
        .is_some())
}

pub async fn lecture_assigned_to_group(
    db: &DatabaseConnection,
    lecture_id: Uuid,
    group_id: Uuid,
) -> Result<bool> {
    Ok(ELectureGroup::find()
        .filter(CLectureGroup::Lecture.eq(lecture_id))
        .filter(CLectureGroup::Group.eq(group_id))
        .one(db)
        .await
        .context("Failed to query lecture assignment")?
        .is_some())
}
