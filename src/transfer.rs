//! Value transfer types.
//!
//! Flat, ownerless records that carry results back to the host. Text fields
//! are owned copies, never borrows of host storage, so a record stays valid
//! after the host frees or mutates the objects it was computed from.

use serde::Serialize;

/// BMI bucket. The discriminants are part of the C ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum BmiCategory {
    Underweight = 0,
    Normal = 1,
    Overweight = 2,
}

/// Result of summarizing a person.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonSummary {
    pub is_adult: bool,
    /// Length of the name in characters
    pub name_length: usize,
    /// Copy of the city from the person's contact address
    pub city: String,
    pub bmi_category: BmiCategory,
}

/// Result of a health analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthAnalysis {
    pub bmi: f64,
    pub risk_score: f64,
    pub city_risk_factor: f64,
    pub recommendation: String,
}
