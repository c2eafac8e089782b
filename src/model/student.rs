//! Student row and role enum.
//!
//! Students are never physically deleted: the `active` flag plus
//! `deactivated_at` implement soft delete, and email/CPF uniqueness is
//! scoped to active rows only (partial unique indexes in the migration).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role stored in the `user_role` PostgreSQL enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Student,
    Instructor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Instructor => "INSTRUCTOR",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "STUDENT" => Ok(Role::Student),
            "INSTRUCTOR" => Ok(Role::Instructor),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub role: Role,
    pub matriculation_number: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deactivated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!(Role::from_str("instructor"), Ok(Role::Instructor));
        assert_eq!(Role::from_str("STUDENT"), Ok(Role::Student));
        assert_eq!(Role::from_str("Admin"), Ok(Role::Admin));
        assert!(Role::from_str("coach").is_err());
    }

    #[test]
    fn role_round_trips_through_display() {
        for role in [Role::Student, Role::Instructor, Role::Admin] {
            assert_eq!(Role::from_str(&role.to_string()), Ok(role));
        }
    }
}
