//! Record transformer between persisted rows and transfer representations.
//!
//! Two fidelity levels exist for students: simple (flat fields only, used
//! for listings) and full (flat fields plus related-record id lists, used
//! for single-record reads).

use crate::dto::StudentDto;
use crate::model::Student;

/// Related-record ids attached to a full-fidelity student DTO.
#[derive(Debug, Clone, Default)]
pub struct RelatedIds {
    pub enrollment_ids: Vec<i64>,
    pub workout_ids: Vec<i64>,
    pub evaluation_ids: Vec<i64>,
}

/// Simple fidelity: flat fields only.
pub fn student_to_dto_simple(s: &Student) -> StudentDto {
    StudentDto {
        id: s.id,
        name: s.name.clone(),
        email: s.email.clone(),
        cpf: s.cpf.clone(),
        phone: s.phone.clone(),
        role: s.role,
        matriculation_number: s.matriculation_number.clone(),
        active: s.active,
        created_at: s.created_at,
        updated_at: s.updated_at,
        deactivated_at: s.deactivated_at,
        enrollment_ids: None,
        workout_ids: None,
        evaluation_ids: None,
    }
}

/// Full fidelity: flat fields plus related-record id lists.
pub fn student_to_dto_full(s: &Student, related: RelatedIds) -> StudentDto {
    let mut dto = student_to_dto_simple(s);
    dto.enrollment_ids = Some(related.enrollment_ids);
    dto.workout_ids = Some(related.workout_ids);
    dto.evaluation_ids = Some(related.evaluation_ids);
    dto
}

pub fn students_to_dto_simple(rows: &[Student]) -> Vec<StudentDto> {
    rows.iter().map(student_to_dto_simple).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use chrono::Utc;

    fn student() -> Student {
        Student {
            id: 42,
            name: "João Silva".into(),
            email: "joao@example.com".into(),
            cpf: "12345678901".into(),
            phone: "11999990000".into(),
            role: Role::Student,
            matriculation_number: "AKD001".into(),
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deactivated_at: None,
        }
    }

    #[test]
    fn simple_fidelity_omits_related_ids() {
        let dto = student_to_dto_simple(&student());
        assert!(dto.enrollment_ids.is_none());
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("enrollmentIds").is_none());
        assert!(json.get("workoutIds").is_none());
        assert!(json.get("evaluationIds").is_none());
    }

    #[test]
    fn full_fidelity_carries_related_ids() {
        let related = RelatedIds {
            enrollment_ids: vec![1, 2],
            workout_ids: vec![],
            evaluation_ids: vec![9],
        };
        let dto = student_to_dto_full(&student(), related);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["enrollmentIds"], serde_json::json!([1, 2]));
        assert_eq!(json["workoutIds"], serde_json::json!([]));
        assert_eq!(json["evaluationIds"], serde_json::json!([9]));
    }

    #[test]
    fn wire_keys_are_camel_case() {
        let json = serde_json::to_value(student_to_dto_simple(&student())).unwrap();
        assert_eq!(json["matriculationNumber"], "AKD001");
        assert_eq!(json["role"], "STUDENT");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("deactivatedAt").is_none());
    }
}
