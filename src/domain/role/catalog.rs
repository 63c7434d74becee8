//! Role catalog - immutable lookup of role definitions.
//!
//! Built once at startup (from the builtin table or a YAML file) and shared
//! through `Arc`. Nothing mutates it afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Role;
use crate::domain::foundation::{DomainError, ErrorCode, RoleId, ValidationError};

/// Ordered, immutable set of roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCatalog {
    roles: Vec<Role>,
}

impl RoleCatalog {
    /// Builds a catalog, rejecting empty tables and duplicate ids.
    pub fn new(roles: Vec<Role>) -> Result<Self, ValidationError> {
        if roles.is_empty() {
            return Err(ValidationError::empty_field("roles"));
        }
        let mut seen = HashSet::new();
        for role in &roles {
            role.validate()?;
            if !seen.insert(role.id().clone()) {
                return Err(ValidationError::invalid_format(
                    "roles",
                    format!("duplicate role id '{}'", role.id()),
                ));
            }
        }
        Ok(Self { roles })
    }

    /// Parses a catalog from YAML of the form `roles: [ {id, name, ...} ]`.
    pub fn from_yaml(yaml: &str) -> Result<Self, DomainError> {
        let parsed: RoleCatalog = serde_yaml::from_str(yaml).map_err(|e| {
            DomainError::validation("roles", format!("Invalid role catalog: {}", e))
        })?;
        Ok(Self::new(parsed.roles)?)
    }

    /// Reads and parses a YAML role catalog file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to read role catalog {}: {}", path.display(), e),
            )
        })?;
        Self::from_yaml(&yaml)
    }

    pub fn to_yaml(&self) -> Result<String, DomainError> {
        serde_yaml::to_string(self).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize role catalog: {}", e),
            )
        })
    }

    /// Looks up a role.
    ///
    /// # Errors
    ///
    /// - `RoleNotFound` if the id is not in the catalog
    pub fn get(&self, id: &RoleId) -> Result<&Role, DomainError> {
        self.roles.iter().find(|r| r.id() == id).ok_or_else(|| {
            DomainError::new(ErrorCode::RoleNotFound, format!("Unknown role: {}", id))
                .with_detail("role", id.as_str())
        })
    }

    pub fn contains(&self, id: &RoleId) -> bool {
        self.roles.iter().any(|r| r.id() == id)
    }

    /// Roles in catalog order.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// The builtin roles: sales, engineer and retail.
    pub fn builtin() -> Self {
        let roles = vec![
            builtin_role(
                "sales",
                "Sales Representative",
                "Customer-facing sales position",
                &[
                    "Tell me about yourself and your sales experience.",
                    "How do you handle rejection from potential customers?",
                    "Describe a time when you exceeded your sales targets.",
                    "How would you approach a cold call to a potential client?",
                    "What motivates you in a sales role?",
                ],
                &[
                    "How do you qualify leads before investing time in them?",
                    "What's your approach to building long-term customer relationships?",
                    "How do you handle price objections?",
                    "Tell me about your experience with CRM systems.",
                    "How do you prepare for important sales presentations?",
                ],
                &["persuasion", "resilience", "communication", "goal orientation"],
            ),
            builtin_role(
                "engineer",
                "Software Engineer",
                "Technical development position",
                &[
                    "Tell me about your background in software engineering.",
                    "How do you approach debugging a complex issue in production?",
                    "Describe a challenging technical problem you solved recently.",
                    "How do you stay current with new technologies and best practices?",
                    "Tell me about a time you had to make a trade-off between speed and quality.",
                ],
                &[
                    "How do you approach code reviews?",
                    "What's your experience with testing and quality assurance?",
                    "How do you handle technical debt in a project?",
                    "Tell me about your experience working in an agile environment.",
                    "How do you approach system design for scalability?",
                ],
                &[
                    "problem-solving",
                    "technical knowledge",
                    "collaboration",
                    "continuous learning",
                ],
            ),
            builtin_role(
                "retail",
                "Retail Associate",
                "Customer service and sales position",
                &[
                    "Tell me about your experience in customer service or retail.",
                    "How would you handle an upset customer?",
                    "Describe a time when you went above and beyond for a customer.",
                    "How do you prioritize tasks during a busy shift?",
                    "What does excellent customer service mean to you?",
                ],
                &[
                    "How do you handle multiple customers waiting for assistance?",
                    "Tell me about your experience with cash handling or POS systems.",
                    "How do you approach upselling or cross-selling?",
                    "What would you do if you noticed a coworker providing poor service?",
                    "How do you maintain energy and positivity during long shifts?",
                ],
                &["customer service", "patience", "multitasking", "teamwork"],
            ),
        ];
        Self { roles }
    }
}

fn builtin_role(
    id: &str,
    name: &str,
    description: &str,
    seeds: &[&str],
    fallbacks: &[&str],
    focus: &[&str],
) -> Role {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    Role::new(
        RoleId::new(id).expect("builtin role ids are non-empty"),
        name,
        description,
        owned(seeds),
        owned(fallbacks),
        owned(focus),
    )
    .expect("builtin roles are valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn role_id(s: &str) -> RoleId {
        RoleId::new(s).unwrap()
    }

    #[test]
    fn builtin_has_sales_engineer_and_retail() {
        let catalog = RoleCatalog::builtin();
        let ids: Vec<&str> = catalog.roles().iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["sales", "engineer", "retail"]);
    }

    #[test]
    fn builtin_roles_have_five_seeds_and_five_fallbacks() {
        for role in RoleCatalog::builtin().roles() {
            assert_eq!(role.seed_questions().len(), 5, "{}", role.id());
            assert_eq!(role.fallback_questions().len(), 5, "{}", role.id());
            assert_eq!(role.focus_areas().len(), 4, "{}", role.id());
        }
    }

    #[test]
    fn get_returns_known_role() {
        let catalog = RoleCatalog::builtin();
        let role = catalog.get(&role_id("engineer")).unwrap();
        assert_eq!(role.name(), "Software Engineer");
        assert_eq!(
            role.first_question(),
            "Tell me about your background in software engineering."
        );
    }

    #[test]
    fn get_unknown_role_is_not_found() {
        let err = RoleCatalog::builtin().get(&role_id("astronaut")).unwrap_err();
        assert_eq!(err.code, ErrorCode::RoleNotFound);
    }

    #[test]
    fn new_rejects_empty_and_duplicate_tables() {
        assert!(RoleCatalog::new(vec![]).is_err());

        let builtin = RoleCatalog::builtin();
        let sales = builtin.get(&role_id("sales")).unwrap().clone();
        assert!(RoleCatalog::new(vec![sales.clone(), sales]).is_err());
    }

    #[test]
    fn yaml_round_trips_builtin_table() {
        let catalog = RoleCatalog::builtin();
        let yaml = catalog.to_yaml().unwrap();
        assert_eq!(RoleCatalog::from_yaml(&yaml).unwrap(), catalog);
    }

    #[test]
    fn yaml_fallbacks_and_focus_areas_are_optional() {
        let yaml = r#"
roles:
  - id: barista
    name: Barista
    description: Coffee bar
    seed_questions:
      - "Tell me about your favourite drink to make."
"#;
        let catalog = RoleCatalog::from_yaml(yaml).unwrap();
        let role = catalog.get(&role_id("barista")).unwrap();
        assert!(role.fallback_questions().is_empty());
        assert!(role.focus_areas().is_empty());
    }

    #[test]
    fn yaml_role_without_seed_questions_is_rejected() {
        let yaml = r#"
roles:
  - id: barista
    name: Barista
    description: Coffee bar
    seed_questions: []
"#;
        let err = RoleCatalog::from_yaml(yaml).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn from_yaml_file_reads_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", RoleCatalog::builtin().to_yaml().unwrap()).unwrap();

        let catalog = RoleCatalog::from_yaml_file(file.path()).unwrap();
        assert!(catalog.contains(&role_id("retail")));
    }

    #[test]
    fn from_yaml_file_missing_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = RoleCatalog::from_yaml_file(dir.path().join("nope.yaml"));
        assert!(result.is_err());
    }
}
