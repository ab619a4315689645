//! Consumer computations.
//!
//! Pure functions over the accessor traits. Each call reads the host's objects
//! through a shared borrow and returns a value transfer type; nothing here keeps
//! state between calls.

mod greeting;
mod health;
mod summary;
mod validation;

pub use greeting::greet;
pub use health::{
    analyze_health, calculate_bmi, categorize_bmi, city_risk_factor, recommendation_for,
    risk_score, NORMAL_BMI_MAX, NORMAL_BMI_MIN,
};
pub use summary::{summarize, summarize_with_weight};
pub use validation::{is_valid_email, validate_contact};
