//! Field metadata of the employee form
//!
//! Field order matches the form layout; validation reports errors in the
//! same order.

use crate::shared::metadata::{FieldMetadata, FieldUiMetadata, ValidationRules};

use super::aggregate::{BloodGroup, Gender};

pub const SUPPORTED_IMAGE_FORMATS: &[&str] = &["image/jpg", "image/jpeg"];

const fn field(
    name: &'static str,
    label: &'static str,
    validation: ValidationRules,
) -> FieldMetadata {
    FieldMetadata {
        name,
        ui: FieldUiMetadata::labeled(label),
        validation,
    }
}

const REQUIRED_ID: ValidationRules = ValidationRules::required().positive_integer();
const OPTIONAL_ID: ValidationRules = ValidationRules::none().positive_integer();

pub const IMAGE: FieldMetadata = field(
    "image",
    "Photo",
    ValidationRules::none().media_types(SUPPORTED_IMAGE_FORMATS, "Unsupported Format"),
);
pub const SUB_DEPARTEMENT: FieldMetadata =
    field("sub_departement", "Sub departement", REQUIRED_ID);
pub const WAGE_SYSTEM: FieldMetadata =
    field("wage_system", "Wage System", REQUIRED_ID);
pub const POSITION: FieldMetadata = field("position", "Position", REQUIRED_ID);
pub const TYPE: FieldMetadata = field("type", "Type", REQUIRED_ID);
pub const GRADE: FieldMetadata = field("grade", "Grade", OPTIONAL_ID);
pub const NAME: FieldMetadata = field(
    "name",
    "Name",
    ValidationRules::required().max_length(50),
);
pub const SIGN_IN: FieldMetadata = FieldMetadata {
    ui: FieldUiMetadata::labeled("Sign In").with_placeholder("dd/mm/yyyy"),
    ..field("sign_in", "", ValidationRules::required())
};
pub const LEAVE: FieldMetadata = FieldMetadata {
    ui: FieldUiMetadata::labeled("Leave").with_placeholder("dd/mm/yyyy"),
    ..field("leave", "", ValidationRules::none())
};
pub const WAGES: FieldMetadata = field(
    "wages",
    "Wages",
    ValidationRules::required().positive_integer().coerce_display(),
);
pub const EXIT_STATEMENT: FieldMetadata =
    field("exit_statement", "Exit statement", ValidationRules::none());
pub const PLACE_OF_BIRTH: FieldMetadata =
    field("place_of_birth", "Place of birth", ValidationRules::none());
pub const DATE_OF_BIRTH: FieldMetadata =
    field("date_of_birth", "Date of birth", ValidationRules::none());
pub const ADDRESS: FieldMetadata =
    field("address", "Address", ValidationRules::none());
pub const CITY: FieldMetadata = field(
    "city",
    "City",
    ValidationRules::none().max_length(50),
);
pub const POSTAL_CODE: FieldMetadata = field(
    "postal_code",
    "Postal Code",
    ValidationRules::none().max_length(15),
);
pub const PHONE: FieldMetadata = field(
    "phone",
    "Phone",
    ValidationRules::none().max_length(15),
);
pub const GENDER: FieldMetadata = field(
    "gender",
    "Gender",
    ValidationRules::none().one_of(Gender::TAGS),
);
pub const BLOOD_GROUP: FieldMetadata = field(
    "blood_group",
    "Blood Type",
    ValidationRules::none().one_of(BloodGroup::TAGS),
);
pub const WEIGHT: FieldMetadata = field("weight", "Weight", OPTIONAL_ID);
pub const HEIGHT: FieldMetadata = field("height", "Height", OPTIONAL_ID);
pub const ID_CARD_NUMBER: FieldMetadata = field(
    "id_card_number",
    "ID Card",
    ValidationRules::none().max_length(50),
);
pub const FAMILY_STATUS: FieldMetadata = field(
    "family_status",
    "Family Status",
    ValidationRules::none().max_length(20),
);
pub const PARENT: FieldMetadata = field(
    "parent",
    "Parent",
    ValidationRules::none().max_length(50),
);
pub const HUSBAND_AND_WIFE: FieldMetadata = field(
    "husband_and_wife",
    "Husband & Wife",
    ValidationRules::none().max_length(50),
);
pub const RELIGION: FieldMetadata = field("religion", "Religion", OPTIONAL_ID);
pub const EDUCATION: FieldMetadata =
    field("education", "Education", OPTIONAL_ID);
pub const MAJOR: FieldMetadata = field("major", "Major", OPTIONAL_ID);
pub const INSURANCES: FieldMetadata =
    field("insurances", "Insurance", OPTIONAL_ID);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let form = [
            IMAGE, SUB_DEPARTEMENT, WAGE_SYSTEM, POSITION, TYPE, GRADE, NAME, SIGN_IN, LEAVE,
            WAGES, EXIT_STATEMENT, PLACE_OF_BIRTH, DATE_OF_BIRTH, ADDRESS, CITY, POSTAL_CODE,
            PHONE, GENDER, BLOOD_GROUP, WEIGHT, HEIGHT, ID_CARD_NUMBER, FAMILY_STATUS, PARENT,
            HUSBAND_AND_WIFE, RELIGION, EDUCATION, MAJOR, INSURANCES,
        ];
        let required: Vec<&str> = form
            .iter()
            .filter(|f| f.validation.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(
            required,
            vec!["sub_departement", "wage_system", "position", "type", "name", "sign_in", "wages"]
        );
    }

    #[test]
    fn test_date_placeholder() {
        assert_eq!(SIGN_IN.label(), "Sign In");
        assert_eq!(SIGN_IN.ui.placeholder, Some("dd/mm/yyyy"));
        assert_eq!(LEAVE.ui.placeholder, Some("dd/mm/yyyy"));
        assert_eq!(NAME.ui.placeholder, None);
    }
}
