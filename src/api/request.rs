//! Request types for the pay estimator API.
//!
//! Form values arrive as typed by the user, so amounts and working weeks may be
//! JSON strings or numbers. They are sanitised by the input layer rather than
//! rejected here.

use serde::{Deserialize, Serialize};

use crate::input::InputForm;
use crate::models::EmploymentKind;

/// A form value that may be sent as a JSON string or number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A value sent as a string, e.g. `"$95,000"`.
    Text(String),
    /// A value sent as a number, e.g. `95000`.
    Number(serde_json::Number),
}

impl RawValue {
    /// Returns the value as text for the input layer to parse.
    pub fn into_text(self) -> String {
        match self {
            RawValue::Text(text) => text,
            RawValue::Number(number) => number.to_string(),
        }
    }
}

/// The fields of one pay form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormFields {
    /// The quoted rate.
    #[serde(default)]
    pub amount: Option<RawValue>,
    /// The frequency name (e.g. "hourly").
    #[serde(default)]
    pub frequency: Option<String>,
    /// Whether the rate includes super (permanent only).
    #[serde(default)]
    pub super_included: Option<bool>,
    /// Working weeks per year (contractor only).
    #[serde(default)]
    pub working_weeks: Option<RawValue>,
}

impl FormFields {
    /// Converts the fields into an input form for an employment kind.
    pub fn into_form(self, employment_kind: EmploymentKind) -> InputForm {
        InputForm {
            employment_kind,
            amount: self.amount.map(RawValue::into_text),
            frequency: self.frequency,
            super_included: self.super_included,
            working_weeks: self.working_weeks.map(RawValue::into_text),
        }
    }
}

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Permanent employee or contractor.
    pub employment_type: EmploymentKind,
    /// The form fields.
    #[serde(flatten)]
    pub fields: FormFields,
}

impl From<CalculationRequest> for InputForm {
    fn from(req: CalculationRequest) -> Self {
        req.fields.into_form(req.employment_type)
    }
}

/// Request body for the `/compare` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    /// The permanent employee form.
    #[serde(default)]
    pub permanent: FormFields,
    /// The contractor form.
    #[serde(default)]
    pub contractor: FormFields,
}
