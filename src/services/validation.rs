//! Contact validation.

use crate::accessor::{
    address_of, city_of, email_of, phone_of, postal_code_of, street_of, ContactAccess,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// Exactly one '@' with something on both sides.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+$").expect("Failed to compile email regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// True when the email is well formed and phone, street, city and postal code
/// are all non-empty.
pub fn validate_contact<C: ContactAccess + ?Sized>(contact: &C) -> bool {
    let address = address_of(contact);

    let email_valid = is_valid_email(email_of(contact));
    let phone_valid = !phone_of(contact).is_empty();
    let street_valid = !street_of(address).is_empty();
    let city_valid = !city_of(address).is_empty();
    let postal_valid = !postal_code_of(address).is_empty();

    let valid = email_valid && phone_valid && street_valid && city_valid && postal_valid;

    tracing::debug!(
        email_valid,
        phone_valid,
        street_valid,
        city_valid,
        postal_valid,
        valid,
        "Contact validated"
    );

    valid
}
