//! Person summaries.

use super::health::{calculate_bmi, categorize_bmi};
use crate::accessor::{address_of, age_of, city_of, contact_of, height_of, name_of, PersonAccess};
use crate::config::DEFAULT_ASSUMED_WEIGHT_KG;
use crate::domain::ADULT_AGE;
use crate::text::char_length;
use crate::transfer::PersonSummary;

/// Summarize `person`, deriving the BMI category from the default assumed weight.
pub fn summarize<P: PersonAccess + ?Sized>(person: &P) -> PersonSummary {
    summarize_with_weight(person, DEFAULT_ASSUMED_WEIGHT_KG)
}

/// Summarize `person`, deriving the BMI category from `weight_kg`.
pub fn summarize_with_weight<P: PersonAccess + ?Sized>(
    person: &P,
    weight_kg: f64,
) -> PersonSummary {
    let city = city_of(address_of(contact_of(person)));
    let bmi = calculate_bmi(weight_kg, height_of(person));

    let summary = PersonSummary {
        is_adult: age_of(person) >= ADULT_AGE,
        name_length: char_length(name_of(person)),
        city: city.to_owned(),
        bmi_category: categorize_bmi(bmi),
    };

    tracing::debug!(
        is_adult = summary.is_adult,
        name_length = summary.name_length,
        city = %summary.city,
        bmi_category = ?summary.bmi_category,
        "Person summarized"
    );

    summary
}
