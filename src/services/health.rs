//! Health analysis over a person's accessors.

use crate::accessor::{address_of, city_of, contact_of, height_of, PersonAccess};
use crate::transfer::{BmiCategory, HealthAnalysis};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Lower bound of the normal BMI range (inclusive).
pub const NORMAL_BMI_MIN: f64 = 18.5;
/// Upper bound of the normal BMI range (exclusive).
pub const NORMAL_BMI_MAX: f64 = 25.0;

const NORMAL_BMI_MIDPOINT: f64 = (NORMAL_BMI_MIN + NORMAL_BMI_MAX) / 2.0;
const NORMAL_BMI_HALF_WIDTH: f64 = (NORMAL_BMI_MAX - NORMAL_BMI_MIN) / 2.0;

const DEFAULT_CITY_RISK: f64 = 1.0;

static CITY_RISK_FACTORS: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| HashMap::from([("New York", 1.2), ("Los Angeles", 1.1)]));

/// Body mass index: `weight / height²`, or 0 when the height is not positive.
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> f64 {
    if height_m <= 0.0 {
        return 0.0;
    }
    weight_kg / (height_m * height_m)
}

pub fn categorize_bmi(bmi: f64) -> BmiCategory {
    if bmi < NORMAL_BMI_MIN {
        BmiCategory::Underweight
    } else if bmi < NORMAL_BMI_MAX {
        BmiCategory::Normal
    } else {
        BmiCategory::Overweight
    }
}

/// Distance of `bmi` from the middle of the normal range, in half-widths of
/// that range. Below 1.0 means inside the normal range.
pub fn risk_score(bmi: f64) -> f64 {
    (bmi - NORMAL_BMI_MIDPOINT).abs() / NORMAL_BMI_HALF_WIDTH
}

/// Exact-match lookup; unknown cities get 1.0.
pub fn city_risk_factor(city: &str) -> f64 {
    CITY_RISK_FACTORS
        .get(city)
        .copied()
        .unwrap_or(DEFAULT_CITY_RISK)
}

pub fn recommendation_for(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => {
            "Below the healthy weight range. Consider a nutrition consultation."
        }
        BmiCategory::Normal => "Excellent health profile. Maintain current lifestyle.",
        BmiCategory::Overweight => {
            "Above the healthy weight range. Recommend consultation with healthcare provider."
        }
    }
}

/// Analyze `person` for the given weight in kilograms.
pub fn analyze_health<P: PersonAccess + ?Sized>(person: &P, weight_kg: f64) -> HealthAnalysis {
    let bmi = calculate_bmi(weight_kg, height_of(person));
    let category = categorize_bmi(bmi);
    let city_risk = city_risk_factor(city_of(address_of(contact_of(person))));

    let analysis = HealthAnalysis {
        bmi,
        risk_score: risk_score(bmi),
        city_risk_factor: city_risk,
        recommendation: recommendation_for(category).to_string(),
    };

    tracing::debug!(
        bmi = analysis.bmi,
        category = ?category,
        risk_score = analysis.risk_score,
        city_risk_factor = analysis.city_risk_factor,
        "Health analysis completed"
    );

    analysis
}
