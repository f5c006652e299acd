//! Validation schema of the employee form

use crate::shared::metadata::{FieldMetadata, ValidationErrors};

use super::aggregate::{BloodGroup, EmployeeDraft, EmployeeRecord, Gender};
use super::metadata::*;

/// Collects violations while individual fields are checked
struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    fn new() -> Self {
        Self {
            errors: ValidationErrors::new(),
        }
    }

    fn record<T>(&mut self, field: &FieldMetadata, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.errors.push(field.name, message);
                None
            }
        }
    }

    fn reference(&mut self, field: &FieldMetadata, value: Option<i64>) -> Option<u64> {
        let result = field.validation.validate_id(value, field.name);
        self.record(field, result).flatten().map(|v| v as u64)
    }

    fn number(&mut self, field: &FieldMetadata, raw: &str) -> Option<u64> {
        let result = field.validation.validate_number(raw, field.name);
        self.record(field, result).flatten().map(|v| v as u64)
    }

    /// Checked text, `None` when empty or invalid
    fn text(&mut self, field: &FieldMetadata, value: &str) -> Option<String> {
        let result = field.validation.validate_string(value, field.name);
        self.record(field, result)?;
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn tag<T>(
        &mut self,
        field: &FieldMetadata,
        value: Option<&str>,
        parse: fn(&str) -> Option<T>,
    ) -> Option<T> {
        let result = field.validation.validate_tag(value, field.name);
        self.record(field, result)?;
        value.and_then(parse)
    }
}

/// Validate the draft together with the ids picked in the insurance slots.
///
/// Every rule is evaluated; violations come back in form order. On success
/// the returned record carries the coerced values (wages as a number,
/// enumerations as enums, empty optional text as `None`).
pub fn validate_employee(
    draft: &EmployeeDraft,
    insurances: &[i64],
) -> Result<EmployeeRecord, ValidationErrors> {
    let mut v = Validator::new();

    let media_type = draft.image.as_ref().map(|i| i.media_type.as_str());
    let image_result = IMAGE.validation.validate_media_type(media_type, IMAGE.name);
    v.record(&IMAGE, image_result);

    let sub_departement = v.reference(&SUB_DEPARTEMENT, draft.sub_departement);
    let wage_system = v.reference(&WAGE_SYSTEM, draft.wage_system);
    let position = v.reference(&POSITION, draft.position);
    let employee_type = v.reference(&TYPE, draft.employee_type);
    let grade = v.reference(&GRADE, draft.grade);
    let name = v.text(&NAME, &draft.name);
    let sign_in = v.text(&SIGN_IN, &draft.sign_in);
    let leave = v.text(&LEAVE, &draft.leave);
    let wages = v.number(&WAGES, &draft.wages);
    let exit_statement = v.text(&EXIT_STATEMENT, &draft.exit_statement);
    let place_of_birth = v.text(&PLACE_OF_BIRTH, &draft.place_of_birth);
    let date_of_birth = v.text(&DATE_OF_BIRTH, &draft.date_of_birth);
    let address = v.text(&ADDRESS, &draft.address);
    let city = v.text(&CITY, &draft.city);
    let postal_code = v.text(&POSTAL_CODE, &draft.postal_code);
    let phone = v.text(&PHONE, &draft.phone);
    let gender = v.tag(&GENDER, draft.gender.as_deref(), Gender::from_tag);
    let blood_group = v.tag(&BLOOD_GROUP, draft.blood_group.as_deref(), BloodGroup::from_tag);
    let weight = v.number(&WEIGHT, &draft.weight);
    let height = v.number(&HEIGHT, &draft.height);
    let id_card_number = v.text(&ID_CARD_NUMBER, &draft.id_card_number);
    let family_status = v.text(&FAMILY_STATUS, &draft.family_status);
    let parent = v.text(&PARENT, &draft.parent);
    let husband_and_wife = v.text(&HUSBAND_AND_WIFE, &draft.husband_and_wife);
    let religion = v.reference(&RELIGION, draft.religion);
    let education = v.reference(&EDUCATION, draft.education);
    let major = v.reference(&MAJOR, draft.major);
    let insurances: Vec<u64> = insurances
        .iter()
        .filter_map(|id| v.reference(&INSURANCES, Some(*id)))
        .collect();

    if !v.errors.is_empty() {
        return Err(v.errors);
    }

    match (sub_departement, wage_system, position, employee_type, name, sign_in, wages) {
        (
            Some(sub_departement),
            Some(wage_system),
            Some(position),
            Some(employee_type),
            Some(name),
            Some(sign_in),
            Some(wages),
        ) => Ok(EmployeeRecord {
            image: draft.image.clone(),
            sub_departement,
            wage_system,
            position,
            employee_type,
            grade,
            name,
            sign_in,
            leave,
            wages,
            exit_statement,
            place_of_birth,
            date_of_birth,
            address,
            city,
            postal_code,
            phone,
            gender,
            blood_group,
            weight,
            height,
            id_card_number,
            family_status,
            parent,
            husband_and_wife,
            religion,
            education,
            major,
            insurances,
        }),
        // Required rules already reported every missing value above
        _ => Err(v.errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_employee::aggregate::ImageMeta;

    fn valid_draft() -> EmployeeDraft {
        EmployeeDraft {
            sub_departement: Some(1),
            wage_system: Some(2),
            position: Some(3),
            employee_type: Some(4),
            name: "Siti Rahma".to_string(),
            sign_in: "01/02/2023".to_string(),
            wages: "4,500,000".to_string(),
            ..Default::default()
        }
    }

    fn image(media_type: &str) -> Option<ImageMeta> {
        Some(ImageMeta {
            file_name: "photo".to_string(),
            media_type: media_type.to_string(),
            size: 1024,
        })
    }

    #[test]
    fn test_minimal_valid_draft() {
        let record = validate_employee(&valid_draft(), &[]).unwrap();
        assert_eq!(record.wages, 4_500_000);
        assert_eq!(record.employee_type, 4);
        assert_eq!(record.leave, None);
        assert_eq!(record.gender, None);
        assert!(record.insurances.is_empty());
    }

    #[test]
    fn test_empty_draft_names_every_required_field() {
        let errors = validate_employee(&EmployeeDraft::default(), &[]).unwrap_err();
        for field in ["sub_departement", "wage_system", "position", "type", "name", "sign_in", "wages"] {
            let message = errors.message_for(field).unwrap();
            assert!(message.contains(field), "{message}");
        }
        assert_eq!(errors.len(), 7);
    }

    fn clear_field(field: &str, draft: &mut EmployeeDraft) {
        match field {
            "sub_departement" => draft.sub_departement = None,
            "wage_system" => draft.wage_system = None,
            "position" => draft.position = None,
            "type" => draft.employee_type = None,
            "name" => draft.name.clear(),
            "sign_in" => draft.sign_in.clear(),
            "wages" => draft.wages.clear(),
            other => panic!("unexpected field {other}"),
        }
    }

    #[test]
    fn test_each_missing_required_field_fails() {
        for field in ["sub_departement", "wage_system", "position", "type", "name", "sign_in", "wages"] {
            let mut draft = valid_draft();
            clear_field(field, &mut draft);
            let errors = validate_employee(&draft, &[]).unwrap_err();
            assert_eq!(errors.len(), 1, "{field}");
            assert!(errors.message_for(field).unwrap().contains(field));
        }
    }

    #[test]
    fn test_wages_coercion() {
        let mut draft = valid_draft();
        draft.wages = "1,000".to_string();
        assert_eq!(validate_employee(&draft, &[]).unwrap().wages, 1000);

        draft.wages = "0".to_string();
        let errors = validate_employee(&draft, &[]).unwrap_err();
        assert_eq!(errors.message_for("wages"), Some("wages must be a positive number"));

        draft.wages = "99999999999999999999".to_string();
        let errors = validate_employee(&draft, &[]).unwrap_err();
        assert_eq!(errors.message_for("wages"), Some("wages is too large"));

        draft.wages = String::new();
        let errors = validate_employee(&draft, &[]).unwrap_err();
        assert_eq!(errors.message_for("wages"), Some("wages is a required field"));
    }

    #[test]
    fn test_image_format() {
        let mut draft = valid_draft();
        draft.image = image("image/png");
        let errors = validate_employee(&draft, &[]).unwrap_err();
        assert_eq!(errors.message_for("image"), Some("Unsupported Format"));

        draft.image = image("image/jpeg");
        assert!(validate_employee(&draft, &[]).is_ok());

        draft.image = image("image/jpg");
        assert!(validate_employee(&draft, &[]).is_ok());

        draft.image = None;
        assert!(validate_employee(&draft, &[]).is_ok());
    }

    #[test]
    fn test_length_caps() {
        let mut draft = valid_draft();
        draft.name = "x".repeat(51);
        draft.family_status = "y".repeat(21);
        draft.postal_code = "1".repeat(15);
        draft.address = "z".repeat(500);
        let errors = validate_employee(&draft, &[]).unwrap_err();
        assert_eq!(errors.messages(), vec![
            "name must be at most 50 characters".to_string(),
            "family_status must be at most 20 characters".to_string(),
        ]);
    }

    #[test]
    fn test_enumerations() {
        let mut draft = valid_draft();
        draft.gender = Some("female".to_string());
        draft.blood_group = Some("AB".to_string());
        let record = validate_employee(&draft, &[]).unwrap();
        assert_eq!(record.gender, Some(Gender::Female));
        assert_eq!(record.blood_group, Some(BloodGroup::AB));

        draft.gender = Some("unknown".to_string());
        draft.blood_group = Some("C".to_string());
        let errors = validate_employee(&draft, &[]).unwrap_err();
        assert!(errors.message_for("gender").is_some());
        assert_eq!(
            errors.message_for("blood_group"),
            Some("blood_group must be one of the following values: A, B, O, AB")
        );
    }

    #[test]
    fn test_optional_identifiers_and_numbers() {
        let mut draft = valid_draft();
        draft.grade = Some(0);
        draft.religion = Some(-2);
        draft.weight = "0".to_string();
        draft.height = "172".to_string();
        let errors = validate_employee(&draft, &[5, 0]).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["grade", "weight", "religion", "insurances"]);

        draft.grade = Some(9);
        draft.religion = None;
        draft.weight = String::new();
        let record = validate_employee(&draft, &[5, 6]).unwrap();
        assert_eq!(record.grade, Some(9));
        assert_eq!(record.weight, None);
        assert_eq!(record.height, Some(172));
        assert_eq!(record.insurances, vec![5, 6]);
    }

    #[test]
    fn test_form_fields_omit_absent_values() {
        let mut draft = valid_draft();
        draft.city = "Bandung".to_string();
        draft.gender = Some("male".to_string());
        let record = validate_employee(&draft, &[11, 12]).unwrap();
        let fields = record.form_fields();

        let get = |key: &str| -> Vec<&str> {
            fields
                .iter()
                .filter(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .collect()
        };
        assert_eq!(get("wages"), vec!["4500000"]);
        assert_eq!(get("type"), vec!["4"]);
        assert_eq!(get("city"), vec!["Bandung"]);
        assert_eq!(get("gender"), vec!["male"]);
        assert_eq!(get("insurances[]"), vec!["11", "12"]);
        assert!(get("grade").is_empty());
        assert!(get("leave").is_empty());
    }
}
