//! Address entity.

/// Postal address owned by the host.
///
/// Usually held behind an `Arc` so several [`ContactInfo`](super::ContactInfo)
/// values can share it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    street: String,
    city: String,
    postal_code: String,
}

impl Address {
    /// Create a new address.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            postal_code: postal_code.into(),
        }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn set_street(&mut self, street: impl Into<String>) {
        self.street = street.into();
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn set_postal_code(&mut self, postal_code: impl Into<String>) {
        self.postal_code = postal_code.into();
    }
}

/// Factory returning a uniquely owned address.
pub fn create_address(
    street: impl Into<String>,
    city: impl Into<String>,
    postal_code: impl Into<String>,
) -> Box<Address> {
    Box::new(Address::new(street, city, postal_code))
}
