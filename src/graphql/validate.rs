/// Input validation for mutations
///
/// One explicit function per input type, each returning either the parsed
/// domain value or the full list of field-level issues. Validation always
/// runs before any store call; the first issue's message becomes the
/// BAD_USER_INPUT error message.

use crate::clinic::types::{
    AppointmentPatch, AppointmentStatus, DateTime, NewAppointment, NewPatient, PatientPatch,
    StepSpec,
};
use crate::graphql::appointments::{CreateAppointmentInput, UpdateAppointmentInput};
use crate::graphql::patients::{CreatePatientInput, UpdatePatientInput};
use crate::graphql::workflow::SaveWorkflowInput;

/// A single field-level validation issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

impl FieldIssue {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a patient name: 2-255 characters
fn check_name(name: &str, issues: &mut Vec<FieldIssue>) {
    if name.chars().count() < 2 {
        issues.push(FieldIssue::new("name", "Name must be at least 2 characters"));
    } else if name.chars().count() > 255 {
        issues.push(FieldIssue::new("name", "Name must be at most 255 characters"));
    }
}

/// Validate an email: non-empty local part, dotted domain, no whitespace
fn check_email(email: &str, issues: &mut Vec<FieldIssue>) {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        issues.push(FieldIssue::new("email", "Please enter a valid email"));
    }
}

/// Validate a phone number: 10-20 characters
fn check_phone(phone: &str, issues: &mut Vec<FieldIssue>) {
    if phone.chars().count() < 10 {
        issues.push(FieldIssue::new("phone", "Please enter a valid phone number"));
    } else if phone.chars().count() > 20 {
        issues.push(FieldIssue::new("phone", "Phone number is too long"));
    }
}

/// Validate a date of birth: must not be in the future
fn check_date_of_birth(dob: DateTime, issues: &mut Vec<FieldIssue>) {
    if dob > DateTime::now() {
        issues.push(FieldIssue::new(
            "dateOfBirth",
            "Date of birth cannot be in the future",
        ));
    }
}

/// Validate an address: 5-500 characters
fn check_address(address: &str, issues: &mut Vec<FieldIssue>) {
    if address.chars().count() < 5 {
        issues.push(FieldIssue::new("address", "Please enter a complete address"));
    } else if address.chars().count() > 500 {
        issues.push(FieldIssue::new("address", "Address is too long"));
    }
}

/// Validate patient creation input
///
/// Name is required; the optional fields are validated only when present
/// (the schema already guarantees gender is a valid enum value).
pub fn validate_create_patient(input: CreatePatientInput) -> Result<NewPatient, Vec<FieldIssue>> {
    let mut issues = Vec::new();

    check_name(&input.name, &mut issues);
    if let Some(email) = &input.email {
        check_email(email, &mut issues);
    }
    if let Some(phone) = &input.phone {
        check_phone(phone, &mut issues);
    }
    if let Some(dob) = input.date_of_birth {
        check_date_of_birth(dob, &mut issues);
    }
    if let Some(address) = &input.address {
        check_address(address, &mut issues);
    }

    if !issues.is_empty() {
        return Err(issues);
    }

    Ok(NewPatient {
        name: input.name,
        email: input.email,
        phone: input.phone,
        date_of_birth: input.date_of_birth,
        gender: input.gender,
        address: input.address,
    })
}

/// Validate patient update input: every field optional, absent means unchanged
pub fn validate_update_patient(input: UpdatePatientInput) -> Result<PatientPatch, Vec<FieldIssue>> {
    let mut issues = Vec::new();

    if let Some(name) = &input.name {
        check_name(name, &mut issues);
    }
    if let Some(email) = &input.email {
        check_email(email, &mut issues);
    }
    if let Some(phone) = &input.phone {
        check_phone(phone, &mut issues);
    }
    if let Some(dob) = input.date_of_birth {
        check_date_of_birth(dob, &mut issues);
    }
    if let Some(address) = &input.address {
        check_address(address, &mut issues);
    }

    if !issues.is_empty() {
        return Err(issues);
    }

    Ok(PatientPatch {
        name: input.name,
        email: input.email,
        phone: input.phone,
        date_of_birth: input.date_of_birth,
        gender: input.gender,
        address: input.address,
    })
}

/// Validate appointment creation input
///
/// patientId, startTime, and endTime are required by the schema itself.
/// No invariant relates endTime to startTime.
pub fn validate_create_appointment(
    input: CreateAppointmentInput,
) -> Result<NewAppointment, Vec<FieldIssue>> {
    let mut issues = Vec::new();

    if input.title.is_empty() {
        issues.push(FieldIssue::new("title", "Title is required"));
    }

    if !issues.is_empty() {
        return Err(issues);
    }

    Ok(NewAppointment {
        patient_id: input.patient_id.to_string(),
        title: input.title,
        description: input.description,
        start_time: input.start_time,
        end_time: input.end_time,
        status: input.status.unwrap_or(AppointmentStatus::Scheduled),
    })
}

/// Validate appointment update input
pub fn validate_update_appointment(
    input: UpdateAppointmentInput,
) -> Result<AppointmentPatch, Vec<FieldIssue>> {
    let mut issues = Vec::new();

    if let Some(title) = &input.title {
        if title.is_empty() {
            issues.push(FieldIssue::new("title", "Title is required"));
        }
    }

    if !issues.is_empty() {
        return Err(issues);
    }

    Ok(AppointmentPatch {
        title: input.title,
        description: input.description,
        start_time: input.start_time,
        end_time: input.end_time,
        status: input.status,
    })
}

/// Validate a workflow save: every step needs a non-empty label
///
/// The advisory order values are discarded here; the reconciler persists
/// each step's position in the submitted list.
pub fn validate_save_workflow(input: SaveWorkflowInput) -> Result<Vec<StepSpec>, Vec<FieldIssue>> {
    let mut issues = Vec::new();

    for step in &input.steps {
        if step.label.is_empty() {
            issues.push(FieldIssue::new("label", "Label is required"));
        }
    }

    if !issues.is_empty() {
        return Err(issues);
    }

    Ok(input
        .steps
        .into_iter()
        .map(|step| StepSpec {
            id: step.id.map(|id| id.to_string()),
            label: step.label,
        })
        .collect())
}
