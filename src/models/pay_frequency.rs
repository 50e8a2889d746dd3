//! Pay frequency model.
//!
//! A [`PayFrequency`] states how often the quoted rate is paid and therefore
//! which formula is used to annualise it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How often a quoted rate is paid.
///
/// # Example
///
/// ```
/// use pay_estimator::models::PayFrequency;
///
/// assert_eq!(PayFrequency::from_name("weekly"), Some(PayFrequency::Weekly));
/// assert_eq!(PayFrequency::Fortnightly.to_string(), "Fortnightly");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// Rate per hour worked.
    Hourly,
    /// Rate per day worked.
    Daily,
    /// Rate per week worked.
    Weekly,
    /// Rate per fortnight worked.
    Fortnightly,
    /// Rate per calendar month.
    Monthly,
    /// Rate per year.
    Annually,
}

impl PayFrequency {
    /// Every frequency, in the order a form presents them.
    pub const ALL: [PayFrequency; 6] = [
        PayFrequency::Hourly,
        PayFrequency::Daily,
        PayFrequency::Weekly,
        PayFrequency::Fortnightly,
        PayFrequency::Monthly,
        PayFrequency::Annually,
    ];

    /// Returns the display name of the frequency.
    pub fn name(self) -> &'static str {
        match self {
            PayFrequency::Hourly => "Hourly",
            PayFrequency::Daily => "Daily",
            PayFrequency::Weekly => "Weekly",
            PayFrequency::Fortnightly => "Fortnightly",
            PayFrequency::Monthly => "Monthly",
            PayFrequency::Annually => "Annually",
        }
    }

    /// Looks up a frequency by name, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything that is not one of the six frequency names.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|frequency| frequency.name().eq_ignore_ascii_case(name))
    }

    /// Returns true if annualising this frequency depends on working weeks.
    ///
    /// Monthly and annual rates are treated as already covering a full year.
    pub fn uses_working_weeks(self) -> bool {
        !matches!(self, PayFrequency::Monthly | PayFrequency::Annually)
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
