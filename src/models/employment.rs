//! Employment kind model and related types.
//!
//! This module defines the [`EmploymentKind`] enum and the [`SuperTreatment`]
//! it selects for the superannuation split.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the type of engagement being estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentKind {
    /// Permanent employee with leave entitlements.
    Permanent,
    /// Contractor whose quoted rate covers everything, including super.
    Contractor,
}

/// How superannuation relates to the quoted rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuperTreatment {
    /// The rate is a package that already contains super.
    Inclusive,
    /// The rate is a base salary and super is paid on top.
    OnTop,
}

impl EmploymentKind {
    /// Selects the super treatment for this kind of engagement.
    ///
    /// Contractors are always treated as quoting a super-inclusive rate, so the
    /// `super_included` flag only matters for permanent employees.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_estimator::models::{EmploymentKind, SuperTreatment};
    ///
    /// assert_eq!(EmploymentKind::Permanent.super_treatment(false), SuperTreatment::OnTop);
    /// assert_eq!(EmploymentKind::Contractor.super_treatment(false), SuperTreatment::Inclusive);
    /// ```
    pub fn super_treatment(self, super_included: bool) -> SuperTreatment {
        match self {
            EmploymentKind::Contractor => SuperTreatment::Inclusive,
            EmploymentKind::Permanent if super_included => SuperTreatment::Inclusive,
            EmploymentKind::Permanent => SuperTreatment::OnTop,
        }
    }

    /// Returns the kind matching the `is_contractor` flag.
    pub fn from_contractor_flag(is_contractor: bool) -> Self {
        if is_contractor {
            EmploymentKind::Contractor
        } else {
            EmploymentKind::Permanent
        }
    }

    /// Returns the display name of the employment kind.
    pub fn name(self) -> &'static str {
        match self {
            EmploymentKind::Permanent => "Permanent",
            EmploymentKind::Contractor => "Contractor",
        }
    }
}

impl fmt::Display for EmploymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
