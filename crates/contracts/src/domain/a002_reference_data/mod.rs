//! Reference-data lookups that feed the employee form comboboxes

use serde::{Deserialize, Serialize};

/// One of the lookup lists fetched when the form mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    SubDepartements,
    WageSystems,
    Positions,
    Types,
    Grades,
    Religions,
    Educations,
    Majors,
    Insurances,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 9] = [
        ReferenceKind::SubDepartements,
        ReferenceKind::WageSystems,
        ReferenceKind::Positions,
        ReferenceKind::Types,
        ReferenceKind::Grades,
        ReferenceKind::Religions,
        ReferenceKind::Educations,
        ReferenceKind::Majors,
        ReferenceKind::Insurances,
    ];

    /// Path segment of the lookup endpoint, relative to the API prefix
    pub fn path(&self) -> &'static str {
        match self {
            Self::SubDepartements => "sub-departements",
            Self::WageSystems => "wage-systems",
            Self::Positions => "positions",
            Self::Types => "types",
            Self::Grades => "grades",
            Self::Religions => "religions",
            Self::Educations => "educations",
            Self::Majors => "majors",
            Self::Insurances => "insurances",
        }
    }

    /// Human name used in load error messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::SubDepartements => "sub departements",
            Self::WageSystems => "wage systems",
            Self::Positions => "positions",
            Self::Types => "types",
            Self::Grades => "grades",
            Self::Religions => "religions",
            Self::Educations => "educations",
            Self::Majors => "majors",
            Self::Insurances => "insurances",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<_> = ReferenceKind::ALL.iter().map(|k| k.path()).collect();
        assert_eq!(paths.len(), ReferenceKind::ALL.len());
    }

    #[test]
    fn test_serde_name() {
        assert_eq!(
            serde_json::to_string(&ReferenceKind::WageSystems).unwrap(),
            "\"wage_systems\""
        );
    }
}
