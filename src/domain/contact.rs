//! ContactInfo entity.

use super::address::Address;
use std::sync::Arc;

/// Shared handle to an [`Address`]; the address lives as long as its longest holder.
pub type AddressRef = Arc<Address>;

/// Email, phone and a shared postal address.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactInfo {
    email: String,
    phone: String,
    address: AddressRef,
}

impl ContactInfo {
    /// Create contact information that shares `address` with any other holder.
    pub fn new(email: impl Into<String>, phone: impl Into<String>, address: AddressRef) -> Self {
        Self {
            email: email.into(),
            phone: phone.into(),
            address,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Another owning handle to the shared address.
    pub fn address_ref(&self) -> AddressRef {
        Arc::clone(&self.address)
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    /// Point this contact at a different shared address.
    pub fn set_address(&mut self, address: AddressRef) {
        self.address = address;
    }

    /// Mutable access to the address.
    ///
    /// Copy-on-write: when the address is shared, this contact receives its own
    /// copy first and the other holders keep the original.
    pub fn address_mut(&mut self) -> &mut Address {
        Arc::make_mut(&mut self.address)
    }
}

/// Factory returning uniquely owned contact information.
pub fn create_contact_info(
    email: impl Into<String>,
    phone: impl Into<String>,
    address: AddressRef,
) -> Box<ContactInfo> {
    Box::new(ContactInfo::new(email, phone, address))
}
