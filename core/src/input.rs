/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;

use super::consts::*;

#[derive(Debug, Clone, thiserror::Error)]
pub enum InputError {
    #[error("Invalid username: {0}")]
    Username(String),
    #[error("Invalid password: {0}")]
    Password(String),
    #[error("Invalid deadline: {0}")]
    Deadline(String),
}

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn check_index_name(s: &str) -> Result<(), InputError> {
    if s.is_empty() {
        return Err(InputError::Username("Name cannot be empty".to_string()));
    }

    if s != s.to_lowercase() {
        return Err(InputError::Username("Name must be lowercase".to_string()));
    }

    if s.contains(|c: char| !c.is_ascii_alphanumeric() && c != '-') {
        return Err(InputError::Username(
            "Name can only contain letters, numbers, and dashes".to_string(),
        ));
    }

    if s.starts_with('-') || s.ends_with('-') {
        return Err(InputError::Username(
            "Name can only start and end with letters or numbers".to_string(),
        ));
    }

    Ok(())
}

/// Validates password strength requirements
pub fn validate_password(password: &str) -> Result<(), InputError> {
    if password.len() < 8 {
        return Err(InputError::Password(
            "Password must be at least 8 characters long".to_string(),
        ));
    }

    if password.len() > 128 {
        return Err(InputError::Password(
            "Password cannot exceed 128 characters".to_string(),
        ));
    }

    if password.to_lowercase().contains("password") {
        return Err(InputError::Password(
            "Password cannot contain the word 'password'".to_string(),
        ));
    }

    let has_letter = password.chars().any(|c| c.is_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_letter {
        return Err(InputError::Password(
            "Password must contain at least one letter".to_string(),
        ));
    }

    if !has_digit {
        return Err(InputError::Password(
            "Password must contain at least one digit".to_string(),
        ));
    }

    Ok(())
}

/// Parses a problem deadline in the fixed `DD/MM/YYYY HH:MM` format.
pub fn parse_deadline(s: &str) -> Result<NaiveDateTime, InputError> {
    NaiveDateTime::parse_from_str(s, DEADLINE_FORMAT).map_err(|_| {
        InputError::Deadline(format!("`{}` does not match format DD/MM/YYYY HH:MM", s))
    })
}

pub fn load_secret(f: &str) -> String {
    let s = std::fs::read_to_string(f).unwrap_or_default();
    s.trim().replace(char::from(25), "")
}

/// Compares a submitted admission key against the provisioned one
/// without short-circuiting on the first differing byte.
pub fn secret_matches(submitted: &str, expected: &str) -> bool {
    let submitted = submitted.as_bytes();
    let expected = expected.as_bytes();

    let mut diff = submitted.len() ^ expected.len();
    for i in 0..expected.len() {
        let s = submitted.get(i).copied().unwrap_or(0);
        diff |= (s ^ expected[i]) as usize;
    }

    diff == 0 && !expected.is_empty()
}
