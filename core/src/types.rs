/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::port_in_range;
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "Eolimp", display_name = "Eolimp", bin_name = "eolimp-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "EOLIMP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "EOLIMP_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "EOLIMP_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "EOLIMP_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "EOLIMP_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "EOLIMP_BASE_PATH", default_value = ".")]
    pub base_path: String,
    #[arg(long, env = "EOLIMP_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
    #[arg(long, env = "EOLIMP_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "EOLIMP_TEACHER_KEY_FILE")]
    pub teacher_key_file: String,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItem {
    pub id: Uuid,
    pub name: String,
}

pub type ListResponse = Vec<ListItem>;

pub type EGroup = group::Entity;
pub type ELecture = lecture::Entity;
pub type ELectureGroup = lecture_group::Entity;
pub type EProblem = problem::Entity;
pub type EProblemGroup = problem_group::Entity;
pub type ESolution = solution::Entity;
pub type EStudent = student::Entity;
pub type ETeacher = teacher::Entity;
pub type EUser = user::Entity;

pub type MGroup = group::Model;
pub type MLecture = lecture::Model;
pub type MLectureGroup = lecture_group::Model;
pub type MProblem = problem::Model;
pub type MProblemGroup = problem_group::Model;
pub type MSolution = solution::Model;
pub type MStudent = student::Model;
pub type MTeacher = teacher::Model;
pub type MUser = user::Model;

pub type AGroup = group::ActiveModel;
pub type ALecture = lecture::ActiveModel;
pub type ALectureGroup = lecture_group::ActiveModel;
pub type AProblem = problem::ActiveModel;
pub type AProblemGroup = problem_group::ActiveModel;
pub type ASolution = solution::ActiveModel;
pub type AStudent = student::ActiveModel;
pub type ATeacher = teacher::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CGroup = group::Column;
pub type CLecture = lecture::Column;
pub type CLectureGroup = lecture_group::Column;
pub type CProblem = problem::Column;
pub type CProblemGroup = problem_group::Column;
pub type CSolution = solution::Column;
pub type CStudent = student::Column;
pub type CTeacher = teacher::Column;
pub type CUser = user::Column;
