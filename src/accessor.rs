//! Read-only accessor table.
//!
//! These traits are the only way consumer computations reach host-owned state.
//! Every accessor takes `&self`, has no side effects and returns either a
//! `Copy` value or a borrow tied to the input borrow, so nothing read here can
//! outlive the call that received the object.
//!
//! Computations are generic over these traits and never name a concrete
//! owner type: the native [`crate::domain`] model and the C ABI adapters in
//! [`crate::ffi`] both plug in here.

use crate::domain::{Address, ContactInfo, Person};

/// Read access to an address.
pub trait AddressAccess {
    fn street(&self) -> &str;
    fn city(&self) -> &str;
    fn postal_code(&self) -> &str;
}

/// Read access to contact information and its nested address.
pub trait ContactAccess {
    type Address: AddressAccess + ?Sized;

    fn email(&self) -> &str;
    fn phone(&self) -> &str;
    fn address(&self) -> &Self::Address;
}

/// Read access to a person and its nested contact information.
pub trait PersonAccess {
    type Contact: ContactAccess + ?Sized;

    fn age(&self) -> u32;
    /// Height in meters.
    fn height(&self) -> f64;
    fn name(&self) -> &str;
    fn contact(&self) -> &Self::Contact;
}

impl AddressAccess for Address {
    fn street(&self) -> &str {
        Address::street(self)
    }

    fn city(&self) -> &str {
        Address::city(self)
    }

    fn postal_code(&self) -> &str {
        Address::postal_code(self)
    }
}

impl ContactAccess for ContactInfo {
    type Address = Address;

    fn email(&self) -> &str {
        ContactInfo::email(self)
    }

    fn phone(&self) -> &str {
        ContactInfo::phone(self)
    }

    fn address(&self) -> &Address {
        ContactInfo::address(self)
    }
}

impl PersonAccess for Person {
    type Contact = ContactInfo;

    fn age(&self) -> u32 {
        Person::age(self)
    }

    fn height(&self) -> f64 {
        Person::height(self)
    }

    fn name(&self) -> &str {
        Person::name(self)
    }

    fn contact(&self) -> &ContactInfo {
        Person::contact(self)
    }
}

pub fn age_of<P: PersonAccess + ?Sized>(person: &P) -> u32 {
    person.age()
}

pub fn height_of<P: PersonAccess + ?Sized>(person: &P) -> f64 {
    person.height()
}

pub fn name_of<P: PersonAccess + ?Sized>(person: &P) -> &str {
    person.name()
}

pub fn contact_of<P: PersonAccess + ?Sized>(person: &P) -> &P::Contact {
    person.contact()
}

pub fn email_of<C: ContactAccess + ?Sized>(contact: &C) -> &str {
    contact.email()
}

pub fn phone_of<C: ContactAccess + ?Sized>(contact: &C) -> &str {
    contact.phone()
}

pub fn address_of<C: ContactAccess + ?Sized>(contact: &C) -> &C::Address {
    contact.address()
}

pub fn street_of<A: AddressAccess + ?Sized>(address: &A) -> &str {
    address.street()
}

pub fn city_of<A: AddressAccess + ?Sized>(address: &A) -> &str {
    address.city()
}

pub fn postal_code_of<A: AddressAccess + ?Sized>(address: &A) -> &str {
    address.postal_code()
}
