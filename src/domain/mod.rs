//! Host-owned domain model.
//!
//! `Address → ContactInfo → Person`, with nested objects shared through `Arc`.
//! All state is private: the owner mutates through `&mut self` setters, and
//! consumers read through the traits in [`crate::accessor`].

pub mod address;
pub mod contact;
pub mod person;

pub use address::{create_address, Address};
pub use contact::{create_contact_info, AddressRef, ContactInfo};
pub use person::{create_person, ContactRef, Person, ADULT_AGE};
