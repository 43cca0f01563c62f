#[cfg(test)]
mod tests;

pub mod group;
pub mod lecture;
pub mod lecture_group;
pub mod problem;
pub mod problem_group;
pub mod solution;
pub mod student;
pub mod teacher;
pub mod user;
