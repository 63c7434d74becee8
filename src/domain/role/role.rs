//! Role definition: the question banks and focus areas for one job role.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RoleId, ValidationError};

/// A job role an interview can be practiced for.
///
/// # Invariants
///
/// - `seed_questions` is non-empty (turn 0 always has a question)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    id: RoleId,
    name: String,
    description: String,
    seed_questions: Vec<String>,
    #[serde(default)]
    fallback_questions: Vec<String>,
    #[serde(default)]
    focus_areas: Vec<String>,
}

impl Role {
    /// Creates a role.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank or there are no seed questions
    pub fn new(
        id: RoleId,
        name: impl Into<String>,
        description: impl Into<String>,
        seed_questions: Vec<String>,
        fallback_questions: Vec<String>,
        focus_areas: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let role = Self {
            id,
            name: name.into(),
            description: description.into(),
            seed_questions,
            fallback_questions,
            focus_areas,
        };
        role.validate()?;
        Ok(role)
    }

    /// Checks invariants; used after deserialization as well.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if self.seed_questions.is_empty() {
            return Err(ValidationError::empty_field("seed_questions"));
        }
        Ok(())
    }

    pub fn id(&self) -> &RoleId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Primary question bank, asked in order.
    pub fn seed_questions(&self) -> &[String] {
        &self.seed_questions
    }

    /// Secondary bank used once seed questions are exhausted.
    pub fn fallback_questions(&self) -> &[String] {
        &self.fallback_questions
    }

    pub fn focus_areas(&self) -> &[String] {
        &self.focus_areas
    }

    /// The opening question of every interview for this role.
    pub fn first_question(&self) -> &str {
        // validated non-empty
        &self.seed_questions[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn new_role_exposes_first_seed_question() {
        let role = Role::new(
            RoleId::new("qa").unwrap(),
            "QA Engineer",
            "Testing",
            strings(&["Why testing?", "Second?"]),
            vec![],
            strings(&["rigor"]),
        )
        .unwrap();
        assert_eq!(role.first_question(), "Why testing?");
    }

    #[test]
    fn new_role_rejects_empty_seed_questions() {
        let result = Role::new(
            RoleId::new("qa").unwrap(),
            "QA Engineer",
            "Testing",
            vec![],
            strings(&["fallback"]),
            vec![],
        );
        assert_eq!(result, Err(ValidationError::empty_field("seed_questions")));
    }

    #[test]
    fn new_role_rejects_blank_name() {
        let result = Role::new(
            RoleId::new("qa").unwrap(),
            " ",
            "Testing",
            strings(&["Q"]),
            vec![],
            vec![],
        );
        assert!(result.is_err());
    }
}
