//! Form state of the employee create page
//!
//! Everything the page renders lives in [`EmployeeFormState`]; the view
//! model wraps it in a signal and feeds it [`FormAction`]s.

use std::collections::BTreeMap;

use contracts::domain::a001_employee::metadata::{self as fields};
use contracts::domain::a001_employee::{
    validate_employee, BloodGroup, EmployeeDraft, EmployeeRecord, Gender, ImageMeta, StoreStatus,
};
use contracts::domain::a002_reference_data::ReferenceKind;
use contracts::domain::common::Choice;
use contracts::shared::metadata::{FieldMetadata, ValidationErrors};

use super::insurance::InsuranceEditor;
use crate::shared::date_utils::{digits_only, mask_date};
use crate::shared::number_format::{format_wages, unformat_wages};

// ============================================================================
// Fields
// ============================================================================

/// Comboboxes of the form (everything except the insurance slots)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComboField {
    SubDepartement,
    WageSystem,
    Position,
    Type,
    Grade,
    Gender,
    BloodGroup,
    Religion,
    Education,
    Major,
}

impl ComboField {
    pub fn metadata(&self) -> &'static FieldMetadata {
        match self {
            Self::SubDepartement => &fields::SUB_DEPARTEMENT,
            Self::WageSystem => &fields::WAGE_SYSTEM,
            Self::Position => &fields::POSITION,
            Self::Type => &fields::TYPE,
            Self::Grade => &fields::GRADE,
            Self::Gender => &fields::GENDER,
            Self::BloodGroup => &fields::BLOOD_GROUP,
            Self::Religion => &fields::RELIGION,
            Self::Education => &fields::EDUCATION,
            Self::Major => &fields::MAJOR,
        }
    }

    /// Lookup list behind the combobox; `None` for fixed enumerations
    pub fn reference_kind(&self) -> Option<ReferenceKind> {
        match self {
            Self::SubDepartement => Some(ReferenceKind::SubDepartements),
            Self::WageSystem => Some(ReferenceKind::WageSystems),
            Self::Position => Some(ReferenceKind::Positions),
            Self::Type => Some(ReferenceKind::Types),
            Self::Grade => Some(ReferenceKind::Grades),
            Self::Religion => Some(ReferenceKind::Religions),
            Self::Education => Some(ReferenceKind::Educations),
            Self::Major => Some(ReferenceKind::Majors),
            Self::Gender | Self::BloodGroup => None,
        }
    }

    fn write(&self, draft: &mut EmployeeDraft, choice: &Choice) {
        let id = choice.key.as_id();
        let tag = choice.key.as_tag().map(str::to_string);
        match self {
            Self::SubDepartement => draft.sub_departement = id,
            Self::WageSystem => draft.wage_system = id,
            Self::Position => draft.position = id,
            Self::Type => draft.employee_type = id,
            Self::Grade => draft.grade = id,
            Self::Religion => draft.religion = id,
            Self::Education => draft.education = id,
            Self::Major => draft.major = id,
            Self::Gender => draft.gender = tag,
            Self::BloodGroup => draft.blood_group = tag,
        }
    }
}

/// Free-text inputs of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    SignIn,
    Leave,
    Wages,
    ExitStatement,
    PlaceOfBirth,
    DateOfBirth,
    Address,
    City,
    PostalCode,
    Phone,
    Weight,
    Height,
    IdCardNumber,
    FamilyStatus,
    Parent,
    HusbandAndWife,
}

impl TextField {
    pub fn metadata(&self) -> &'static FieldMetadata {
        match self {
            Self::Name => &fields::NAME,
            Self::SignIn => &fields::SIGN_IN,
            Self::Leave => &fields::LEAVE,
            Self::Wages => &fields::WAGES,
            Self::ExitStatement => &fields::EXIT_STATEMENT,
            Self::PlaceOfBirth => &fields::PLACE_OF_BIRTH,
            Self::DateOfBirth => &fields::DATE_OF_BIRTH,
            Self::Address => &fields::ADDRESS,
            Self::City => &fields::CITY,
            Self::PostalCode => &fields::POSTAL_CODE,
            Self::Phone => &fields::PHONE,
            Self::Weight => &fields::WEIGHT,
            Self::Height => &fields::HEIGHT,
            Self::IdCardNumber => &fields::ID_CARD_NUMBER,
            Self::FamilyStatus => &fields::FAMILY_STATUS,
            Self::Parent => &fields::PARENT,
            Self::HusbandAndWife => &fields::HUSBAND_AND_WIFE,
        }
    }

    /// Digits-only inputs get the numeric on-screen keyboard
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::SignIn | Self::Leave | Self::Wages | Self::PostalCode | Self::Weight | Self::Height
        )
    }

    /// Apply the input mask to typed text, giving the value kept in the draft
    pub fn normalize(&self, input: &str) -> String {
        match self {
            Self::SignIn | Self::Leave => mask_date(input),
            Self::Wages => unformat_wages(input),
            Self::PostalCode | Self::Weight | Self::Height => digits_only(input),
            _ => input.to_string(),
        }
    }

    /// What the input shows for the stored value
    pub fn display(&self, draft: &EmployeeDraft) -> String {
        match self {
            Self::Wages => format_wages(&draft.wages),
            _ => self.value(draft).to_string(),
        }
    }

    pub fn value<'a>(&self, draft: &'a EmployeeDraft) -> &'a str {
        match self {
            Self::Name => &draft.name,
            Self::SignIn => &draft.sign_in,
            Self::Leave => &draft.leave,
            Self::Wages => &draft.wages,
            Self::ExitStatement => &draft.exit_statement,
            Self::PlaceOfBirth => &draft.place_of_birth,
            Self::DateOfBirth => &draft.date_of_birth,
            Self::Address => &draft.address,
            Self::City => &draft.city,
            Self::PostalCode => &draft.postal_code,
            Self::Phone => &draft.phone,
            Self::Weight => &draft.weight,
            Self::Height => &draft.height,
            Self::IdCardNumber => &draft.id_card_number,
            Self::FamilyStatus => &draft.family_status,
            Self::Parent => &draft.parent,
            Self::HusbandAndWife => &draft.husband_and_wife,
        }
    }

    fn slot<'a>(&self, draft: &'a mut EmployeeDraft) -> &'a mut String {
        match self {
            Self::Name => &mut draft.name,
            Self::SignIn => &mut draft.sign_in,
            Self::Leave => &mut draft.leave,
            Self::Wages => &mut draft.wages,
            Self::ExitStatement => &mut draft.exit_statement,
            Self::PlaceOfBirth => &mut draft.place_of_birth,
            Self::DateOfBirth => &mut draft.date_of_birth,
            Self::Address => &mut draft.address,
            Self::City => &mut draft.city,
            Self::PostalCode => &mut draft.postal_code,
            Self::Phone => &mut draft.phone,
            Self::Weight => &mut draft.weight,
            Self::Height => &mut draft.height,
            Self::IdCardNumber => &mut draft.id_card_number,
            Self::FamilyStatus => &mut draft.family_status,
            Self::Parent => &mut draft.parent,
            Self::HusbandAndWife => &mut draft.husband_and_wife,
        }
    }
}

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComboState {
    pub query: String,
    pub selected: Option<Choice>,
}

#[derive(Debug, Clone)]
pub enum FormAction {
    SetText(TextField, String),
    SetQuery(ComboField, String),
    Select(ComboField, Choice),
    SetImage(Option<ImageMeta>),
    ReferenceLoaded(ReferenceKind, Vec<Choice>),
    ReferenceFailed(ReferenceKind, String),
    AppendInsurance,
    SetInsuranceQuery(usize, String),
    SelectInsurance(usize, Choice),
    RemoveInsurance(usize),
    DismissStatus,
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeFormState {
    pub draft: EmployeeDraft,
    pub combos: BTreeMap<ComboField, ComboState>,
    pub insurance: InsuranceEditor,
    pub reference: BTreeMap<ReferenceKind, Vec<Choice>>,
    /// Messages of the error banner: validation or server rejection
    pub errors: Vec<String>,
    pub field_errors: ValidationErrors,
    pub status: Option<String>,
    pub banner_open: bool,
    pub submitting: bool,
}

impl EmployeeFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(&mut self, action: FormAction) {
        match action {
            FormAction::SetText(field, input) => {
                *field.slot(&mut self.draft) = field.normalize(&input);
                self.field_errors.clear_field(field.metadata().name);
            }
            FormAction::SetQuery(field, query) => {
                self.combos.entry(field).or_default().query = query;
            }
            FormAction::Select(field, choice) => {
                field.write(&mut self.draft, &choice);
                let combo = self.combos.entry(field).or_default();
                combo.selected = Some(choice);
                combo.query.clear();
                self.field_errors.clear_field(field.metadata().name);
            }
            FormAction::SetImage(image) => {
                self.draft.image = image;
                self.field_errors.clear_field(fields::IMAGE.name);
            }
            FormAction::ReferenceLoaded(kind, list) => {
                self.reference.insert(kind, list);
            }
            FormAction::ReferenceFailed(kind, message) => {
                self.reference.entry(kind).or_default();
                self.errors
                    .push(format!("Failed to load {}: {}", kind.label(), message));
            }
            FormAction::AppendInsurance => {
                self.insurance.append();
            }
            FormAction::SetInsuranceQuery(index, query) => {
                self.insurance.set_query(index, query);
            }
            FormAction::SelectInsurance(index, choice) => {
                if self.insurance.select(index, choice) {
                    self.field_errors.clear_field(fields::INSURANCES.name);
                }
            }
            FormAction::RemoveInsurance(index) => {
                self.insurance.remove(index);
            }
            FormAction::DismissStatus => {
                self.banner_open = false;
            }
        }
    }

    /// Full option list of a combobox, before query filtering
    pub fn options(&self, field: ComboField) -> Vec<Choice> {
        match field {
            ComboField::Gender => Gender::choices(),
            ComboField::BloodGroup => BloodGroup::choices(),
            _ => field
                .reference_kind()
                .and_then(|kind| self.reference.get(&kind).cloned())
                .unwrap_or_default(),
        }
    }

    pub fn insurance_options(&self) -> Vec<Choice> {
        self.reference
            .get(&ReferenceKind::Insurances)
            .cloned()
            .unwrap_or_default()
    }

    pub fn combo(&self, field: ComboField) -> ComboState {
        self.combos.get(&field).cloned().unwrap_or_default()
    }

    pub fn field_error(&self, name: &str) -> Option<String> {
        self.field_errors.message_for(name).map(str::to_string)
    }

    /// Status message while the success banner is open
    pub fn visible_status(&self) -> Option<String> {
        if self.banner_open {
            self.status.clone()
        } else {
            None
        }
    }

    /// Validate the form and mark it as submitting.
    ///
    /// Returns the record to send, or `None` when validation failed or a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<EmployeeRecord> {
        if self.submitting {
            return None;
        }

        self.errors.clear();
        self.field_errors = ValidationErrors::new();

        match validate_employee(&self.draft, &self.insurance.selected_ids()) {
            Ok(record) => {
                self.submitting = true;
                Some(record)
            }
            Err(errors) => {
                self.errors = errors.messages();
                self.field_errors = errors;
                None
            }
        }
    }

    /// Apply the outcome of the store request
    pub fn finish_submit(&mut self, outcome: Result<StoreStatus, Vec<String>>) {
        self.submitting = false;
        match outcome {
            Ok(status) => {
                self.draft.image = None;
                self.status = Some(status.message);
                self.banner_open = true;
            }
            Err(messages) => {
                self.errors = messages;
            }
        }
    }
}
