//! C layouts of the value transfer types.

use crate::text::BridgeOwnedText;
use crate::transfer::{HealthAnalysis, PersonSummary};

/// `PersonSummary` as seen by the host. `city` is owned by the host once
/// returned; release it with `bridge_person_summary_free`.
#[repr(C)]
#[derive(Debug)]
pub struct BridgePersonSummary {
    pub is_adult: bool,
    pub name_length: usize,
    pub city: BridgeOwnedText,
    /// 0 = underweight, 1 = normal, 2 = overweight
    pub bmi_category: u8,
}

impl BridgePersonSummary {
    pub const fn empty() -> Self {
        Self {
            is_adult: false,
            name_length: 0,
            city: BridgeOwnedText::empty(),
            bmi_category: 0,
        }
    }
}

impl From<PersonSummary> for BridgePersonSummary {
    fn from(summary: PersonSummary) -> Self {
        Self {
            is_adult: summary.is_adult,
            name_length: summary.name_length,
            city: BridgeOwnedText::from_string(summary.city),
            bmi_category: summary.bmi_category as u8,
        }
    }
}

/// `HealthAnalysis` as seen by the host. Release with
/// `bridge_health_analysis_free`.
#[repr(C)]
#[derive(Debug)]
pub struct BridgeHealthAnalysis {
    pub bmi: f64,
    pub risk_score: f64,
    pub city_risk_factor: f64,
    pub recommendation: BridgeOwnedText,
}

impl BridgeHealthAnalysis {
    pub const fn empty() -> Self {
        Self {
            bmi: 0.0,
            risk_score: 0.0,
            city_risk_factor: 0.0,
            recommendation: BridgeOwnedText::empty(),
        }
    }
}

impl From<HealthAnalysis> for BridgeHealthAnalysis {
    fn from(analysis: HealthAnalysis) -> Self {
        Self {
            bmi: analysis.bmi,
            risk_score: analysis.risk_score,
            city_risk_factor: analysis.city_risk_factor,
            recommendation: BridgeOwnedText::from_string(analysis.recommendation),
        }
    }
}
