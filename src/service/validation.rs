//! Request field validation.

use crate::dto::{NewPlan, NewStudent, StudentPatch};
use crate::error::ApiError;
use regex::Regex;
use std::sync::OnceLock;

fn cpf_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{11}$").expect("valid literal pattern"))
}

// One local part, one @, domain with at least one dot, no whitespace.
fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid literal pattern")
    })
}

fn require_non_blank(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidInput(format!("{} is required", field)));
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), ApiError> {
    require_non_blank(name, "name")?;
    let len = name.chars().count();
    if !(2..=100).contains(&len) {
        return Err(ApiError::InvalidInput(
            "name must be between 2 and 100 characters".into(),
        ));
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), ApiError> {
    require_non_blank(email, "email")?;
    if !email_regex().is_match(email) {
        return Err(ApiError::InvalidInput("email must be a valid email".into()));
    }
    Ok(())
}

fn check_cpf(cpf: &str) -> Result<(), ApiError> {
    require_non_blank(cpf, "cpf")?;
    if !cpf_regex().is_match(cpf) {
        return Err(ApiError::InvalidInput("cpf must contain exactly 11 digits".into()));
    }
    Ok(())
}

/// All fields required for creation; role presence is enforced by
/// deserialization.
pub fn validate_new_student(input: &NewStudent) -> Result<(), ApiError> {
    check_name(&input.name)?;
    check_email(&input.email)?;
    check_cpf(&input.cpf)?;
    require_non_blank(&input.phone, "phone")?;
    Ok(())
}

/// Only the fields present in the patch are validated; absent fields are
/// "no change", never "cleared".
pub fn validate_student_patch(patch: &StudentPatch) -> Result<(), ApiError> {
    if let Some(name) = &patch.name {
        check_name(name)?;
    }
    if let Some(email) = &patch.email {
        check_email(email)?;
    }
    if let Some(cpf) = &patch.cpf {
        check_cpf(cpf)?;
    }
    if let Some(phone) = &patch.phone {
        require_non_blank(phone, "phone")?;
    }
    Ok(())
}

pub fn validate_new_plan(input: &NewPlan) -> Result<(), ApiError> {
    require_non_blank(&input.name, "name")?;
    if input.price <= 0.0 {
        return Err(ApiError::InvalidInput("price must be greater than zero".into()));
    }
    if input.duration_days <= 0 {
        return Err(ApiError::InvalidInput(
            "durationDays must be greater than zero".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn valid_student() -> NewStudent {
        NewStudent {
            name: "João Silva".into(),
            email: "joao@example.com".into(),
            cpf: "12345678901".into(),
            phone: "11999990000".into(),
            role: Role::Student,
        }
    }

    #[test]
    fn accepts_valid_input() {
        assert!(validate_new_student(&valid_student()).is_ok());
    }

    #[test]
    fn rejects_blank_required_fields() {
        for field in ["name", "email", "cpf", "phone"] {
            let mut input = valid_student();
            match field {
                "name" => input.name = "  ".into(),
                "email" => input.email = String::new(),
                "cpf" => input.cpf = String::new(),
                _ => input.phone = " ".into(),
            }
            let err = validate_new_student(&input).unwrap_err();
            assert!(err.to_string().contains(field), "missing {field}: {err}");
        }
    }

    #[test]
    fn rejects_short_and_long_names() {
        let mut input = valid_student();
        input.name = "J".into();
        assert!(validate_new_student(&input).is_err());
        input.name = "x".repeat(101);
        assert!(validate_new_student(&input).is_err());
        input.name = "x".repeat(100);
        assert!(validate_new_student(&input).is_ok());
    }

    #[test]
    fn rejects_malformed_cpf() {
        let mut input = valid_student();
        for bad in ["1234567890", "123456789012", "1234567890a", "123.456.789-01"] {
            input.cpf = bad.into();
            assert!(validate_new_student(&input).is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn rejects_malformed_email() {
        let mut input = valid_student();
        for bad in [
            "not-an-email",
            "a@b",
            "@example.com",
            "user@",
            "user name@example.com",
            "user@exam ple.com",
            "user@@example.com",
        ] {
            input.email = bad.into();
            assert!(validate_new_student(&input).is_err(), "accepted {bad}");
        }
        for good in ["joao@example.com", "a.b+tag@sub.example.co"] {
            input.email = good.into();
            assert!(validate_new_student(&input).is_ok(), "rejected {good}");
        }
    }

    #[test]
    fn patch_validates_only_present_fields() {
        let patch = StudentPatch {
            name: Some("Ana".into()),
            ..StudentPatch::default()
        };
        assert!(validate_student_patch(&patch).is_ok());

        let patch = StudentPatch {
            cpf: Some("123".into()),
            ..StudentPatch::default()
        };
        assert!(validate_student_patch(&patch).is_err());

        assert!(validate_student_patch(&StudentPatch::default()).is_ok());
    }

    #[test]
    fn plan_price_must_be_positive() {
        let mut plan = NewPlan {
            name: "Monthly".into(),
            description: None,
            price: 99.9,
            duration_days: 30,
        };
        assert!(validate_new_plan(&plan).is_ok());
        plan.price = 0.0;
        assert!(validate_new_plan(&plan).is_err());
        plan.price = -5.0;
        assert!(validate_new_plan(&plan).is_err());
    }
}
