use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Identifying information about the person answering the questionnaire.
///
/// Constructed once from validated form input; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondentInfo {
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub phone: String,
    pub location: String,
}

/// Gender options offered by the intake form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Option at `index`, or `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Self::Male => 0,
            Self::Female => 1,
            Self::Other => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// A free-text field of the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Age,
    Phone,
    Location,
}

impl FormField {
    /// Text fields in the order they are validated and chained.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Age,
        FormField::Phone,
        FormField::Location,
    ];

    /// Label shown above the field.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name *",
            Self::Age => "Age *",
            Self::Phone => "Phone Number *",
            Self::Location => "Survey Location *",
        }
    }

    /// Placeholder shown while the field is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Age => "Age",
            Self::Phone => "Phone Number",
            Self::Location => "Survey Location",
        }
    }

    /// Field that receives focus when Return is pressed in this one.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Name => Some(Self::Age),
            Self::Age => Some(Self::Phone),
            Self::Phone => Some(Self::Location),
            Self::Location => None,
        }
    }

    fn rejection(self) -> &'static str {
        match self {
            Self::Name => "Please enter name",
            Self::Age => "Please enter a valid age",
            Self::Phone => "Please enter phone number",
            Self::Location => "Please enter survey location",
        }
    }
}

/// Which text field, if any, is being edited.
///
/// Handlers take the current state and return the next one instead of
/// tracking an "active field" globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusState {
    focused: Option<FormField>,
}

impl FocusState {
    /// Nothing focused.
    pub fn none() -> Self {
        Self { focused: None }
    }

    pub fn on(field: FormField) -> Self {
        Self {
            focused: Some(field),
        }
    }

    pub fn focused(self) -> Option<FormField> {
        self.focused
    }

    pub fn is_focused(self, field: FormField) -> bool {
        self.focused == Some(field)
    }

    /// Return key: chain to the next field, or resign after the last one.
    pub fn on_return(self) -> Self {
        Self {
            focused: self.focused.and_then(FormField::next),
        }
    }
}

/// A form field failed validation. The message is meant for the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: FormField,
    pub message: String,
}

impl ValidationError {
    fn rejected(field: FormField) -> Self {
        Self {
            field,
            message: field.rejection().to_string(),
        }
    }
}

/// The single result of an intake screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    Submitted(RespondentInfo),
    Cancelled,
}

impl IntakeOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The submitted info, if the respondent did not cancel.
    pub fn into_info(self) -> Option<RespondentInfo> {
        match self {
            Self::Submitted(info) => Some(info),
            Self::Cancelled => None,
        }
    }
}

/// Raw, unvalidated intake input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RespondentForm {
    name: String,
    age: String,
    phone: String,
    location: String,
    gender: Gender,
}

impl RespondentForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill a field.
    pub fn with_value(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Age => &self.age,
            FormField::Phone => &self.phone,
            FormField::Location => &self.location,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Age => &mut self.age,
            FormField::Phone => &mut self.phone,
            FormField::Location => &mut self.location,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    /// Select a gender by option index. Out-of-range indices are ignored.
    pub fn select_gender_index(&mut self, index: usize) -> bool {
        match Gender::from_index(index) {
            Some(gender) => {
                self.gender = gender;
                true
            }
            None => false,
        }
    }

    /// Validate the input and build the record.
    ///
    /// Fields are checked in order name, age, phone, location; the first
    /// failure is returned.
    pub fn validate(&self) -> Result<RespondentInfo, ValidationError> {
        let name = required(&self.name, FormField::Name)?;
        let age = self
            .age
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::rejected(FormField::Age))?;
        let phone = required(&self.phone, FormField::Phone)?;
        let location = required(&self.location, FormField::Location)?;

        debug!("Respondent form validated for '{name}'");
        Ok(RespondentInfo {
            name: name.to_string(),
            age,
            gender: self.gender.label().to_string(),
            phone: phone.to_string(),
            location: location.to_string(),
        })
    }
}

fn required(value: &str, field: FormField) -> Result<&str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        warn!("Respondent form rejected: {:?} is empty", field);
        return Err(ValidationError::rejected(field));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RespondentForm {
        RespondentForm::new()
            .with_value(FormField::Name, " Ana ")
            .with_value(FormField::Age, "29")
            .with_value(FormField::Phone, "555-1212")
            .with_value(FormField::Location, "Clinic A")
    }

    #[test]
    fn valid_input_builds_trimmed_record() {
        let mut form = filled();
        assert!(form.select_gender_index(1));

        let info = form.validate().unwrap();
        assert_eq!(
            info,
            RespondentInfo {
                name: "Ana".to_string(),
                age: 29,
                gender: "Female".to_string(),
                phone: "555-1212".to_string(),
                location: "Clinic A".to_string(),
            }
        );
    }

    #[test]
    fn empty_name_rejected_first() {
        let form = RespondentForm::new().with_value(FormField::Name, "   ");
        let err = form.validate().unwrap_err();
        assert_eq!(err.field, FormField::Name);
        assert_eq!(err.to_string(), "Please enter name");
    }

    #[test]
    fn age_must_be_an_integer() {
        for age in ["", "  ", "abc", "29.5", "2 9"] {
            let form = filled().with_value(FormField::Age, age);
            let err = form.validate().unwrap_err();
            assert_eq!(err.field, FormField::Age, "age input {age:?}");
            assert_eq!(err.message, "Please enter a valid age");
        }

        let form = filled().with_value(FormField::Age, " 41 ");
        assert_eq!(form.validate().unwrap().age, 41);
    }

    #[test]
    fn phone_and_location_required() {
        let err = filled()
            .with_value(FormField::Phone, "")
            .validate()
            .unwrap_err();
        assert_eq!(err.message, "Please enter phone number");

        let err = filled()
            .with_value(FormField::Location, "\n")
            .validate()
            .unwrap_err();
        assert_eq!(err.message, "Please enter survey location");
    }

    #[test]
    fn default_gender_is_first_option() {
        let info = filled().validate().unwrap();
        assert_eq!(info.gender, "Male");

        let mut form = filled();
        assert!(!form.select_gender_index(3));
        assert_eq!(form.gender(), Gender::Male);
    }

    #[test]
    fn return_key_chains_text_fields() {
        let mut focus = FocusState::on(FormField::Name);
        let mut visited = Vec::new();
        while let Some(field) = focus.focused() {
            visited.push(field);
            focus = focus.on_return();
        }
        assert_eq!(visited, FormField::ALL.to_vec());
        assert_eq!(focus, FocusState::none());
        assert_eq!(FocusState::none().on_return(), FocusState::none());
    }

    #[test]
    fn outcome_accessors() {
        assert!(IntakeOutcome::Cancelled.is_cancelled());
        assert!(IntakeOutcome::Cancelled.into_info().is_none());

        let info = filled().validate().unwrap();
        let outcome = IntakeOutcome::Submitted(info.clone());
        assert_eq!(outcome.into_info(), Some(info));
    }
}
