/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250301_100000_create_table_user;
mod m20250301_100100_create_table_group;
mod m20250301_100200_create_table_teacher;
mod m20250301_100300_create_table_student;
mod m20250301_100400_create_table_problem;
mod m20250301_100500_create_table_problem_group;
mod m20250301_100600_create_table_lecture;
mod m20250301_100700_create_table_lecture_group;
mod m20250301_100800_create_table_solution;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_100000_create_table_user::Migration),
            Box::new(m20250301_100100_create_table_group::Migration),
            Box::new(m20250301_100200_create_table_teacher::Migration),
            Box::new(m20250301_100300_create_table_student::Migration),
            Box::new(m20250301_100400_create_table_problem::Migration),
            Box::new(m20250301_100500_create_table_problem_group::Migration),
            Box::new(m20250301_100600_create_table_lecture::Migration),
            Box::new(m20250301_100700_create_table_lecture_group::Migration),
            Box::new(m20250301_100800_create_table_solution::Migration),
        ]
    }
}
