use crate::domain::common::Choice;
use serde::{Deserialize, Serialize};

// ============================================================================
// Enumerations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const TAGS: &'static [&'static str] = &["male", "female"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }

    /// Combobox options in display order
    pub fn choices() -> Vec<Choice> {
        vec![
            Choice::with_tag("male", "Male"),
            Choice::with_tag("female", "Female"),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    A,
    B,
    O,
    AB,
}

impl BloodGroup {
    pub const TAGS: &'static [&'static str] = &["A", "B", "O", "AB"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::O => "O",
            Self::AB => "AB",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "O" => Some(Self::O),
            "AB" => Some(Self::AB),
            _ => None,
        }
    }

    /// Combobox options in display order
    pub fn choices() -> Vec<Choice> {
        [Self::A, Self::B, Self::AB, Self::O]
            .into_iter()
            .map(|g| Choice::with_tag(g.as_str(), g.as_str()))
            .collect()
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Declared properties of the photo chosen in the file input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMeta {
    pub file_name: String,
    pub media_type: String,
    pub size: u64,
}

/// Raw values of the employee form as the user typed or picked them.
///
/// Text inputs hold their text verbatim (empty means absent), comboboxes
/// hold the id or tag of the picked option. Insurance selections are owned
/// by the insurance editor and passed to validation separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub image: Option<ImageMeta>,
    pub sub_departement: Option<i64>,
    pub wage_system: Option<i64>,
    pub position: Option<i64>,
    #[serde(rename = "type")]
    pub employee_type: Option<i64>,
    pub grade: Option<i64>,
    pub name: String,
    pub sign_in: String,
    pub leave: String,
    pub wages: String,
    pub exit_statement: String,
    pub place_of_birth: String,
    pub date_of_birth: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
    pub gender: Option<String>,
    pub blood_group: Option<String>,
    pub weight: String,
    pub height: String,
    pub id_card_number: String,
    pub family_status: String,
    pub parent: String,
    pub husband_and_wife: String,
    pub religion: Option<i64>,
    pub education: Option<i64>,
    pub major: Option<i64>,
}

// ============================================================================
// Validated record
// ============================================================================

/// Employee record that passed validation, ready to be sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub image: Option<ImageMeta>,
    pub sub_departement: u64,
    pub wage_system: u64,
    pub position: u64,
    #[serde(rename = "type")]
    pub employee_type: u64,
    pub grade: Option<u64>,
    pub name: String,
    pub sign_in: String,
    pub leave: Option<String>,
    pub wages: u64,
    pub exit_statement: Option<String>,
    pub place_of_birth: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub blood_group: Option<BloodGroup>,
    pub weight: Option<u64>,
    pub height: Option<u64>,
    pub id_card_number: Option<String>,
    pub family_status: Option<String>,
    pub parent: Option<String>,
    pub husband_and_wife: Option<String>,
    pub religion: Option<u64>,
    pub education: Option<u64>,
    pub major: Option<u64>,
    pub insurances: Vec<u64>,
}

impl EmployeeRecord {
    /// Text parts of the multipart body, in form order.
    ///
    /// Absent optional values are omitted; each insurance id becomes its own
    /// `insurances[]` part. The image travels as a separate file part.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                fields.push((key.to_string(), value));
            }
        };

        push("sub_departement", Some(self.sub_departement.to_string()));
        push("wage_system", Some(self.wage_system.to_string()));
        push("position", Some(self.position.to_string()));
        push("type", Some(self.employee_type.to_string()));
        push("grade", self.grade.map(|v| v.to_string()));
        push("name", Some(self.name.clone()));
        push("sign_in", Some(self.sign_in.clone()));
        push("leave", self.leave.clone());
        push("wages", Some(self.wages.to_string()));
        push("exit_statement", self.exit_statement.clone());
        push("place_of_birth", self.place_of_birth.clone());
        push("date_of_birth", self.date_of_birth.clone());
        push("address", self.address.clone());
        push("city", self.city.clone());
        push("postal_code", self.postal_code.clone());
        push("phone", self.phone.clone());
        push("gender", self.gender.map(|g| g.as_str().to_string()));
        push("blood_group", self.blood_group.map(|g| g.as_str().to_string()));
        push("weight", self.weight.map(|v| v.to_string()));
        push("height", self.height.map(|v| v.to_string()));
        push("id_card_number", self.id_card_number.clone());
        push("family_status", self.family_status.clone());
        push("parent", self.parent.clone());
        push("husband_and_wife", self.husband_and_wife.clone());
        push("religion", self.religion.map(|v| v.to_string()));
        push("education", self.education.map(|v| v.to_string()));
        push("major", self.major.map(|v| v.to_string()));
        for id in &self.insurances {
            push("insurances[]", Some(id.to_string()));
        }

        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_tags_round_trip() {
        for tag in Gender::TAGS {
            assert_eq!(Gender::from_tag(tag).map(|g| g.as_str()), Some(*tag));
        }
        for tag in BloodGroup::TAGS {
            assert_eq!(BloodGroup::from_tag(tag).map(|g| g.as_str()), Some(*tag));
        }
        assert_eq!(Gender::from_tag("Male"), None);
        assert_eq!(BloodGroup::from_tag("ab"), None);
    }

    #[test]
    fn test_blood_group_choice_order() {
        let names: Vec<String> = BloodGroup::choices().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["A", "B", "AB", "O"]);
    }

    #[test]
    fn test_draft_uses_type_on_the_wire() {
        let draft = EmployeeDraft {
            employee_type: Some(3),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["type"], 3);
    }
}
