//! Person entity.

use super::contact::ContactInfo;
use std::sync::Arc;

/// Shared handle to a [`ContactInfo`].
pub type ContactRef = Arc<ContactInfo>;

/// Age from which a person counts as an adult.
pub const ADULT_AGE: u32 = 18;

/// A person owned by the host, with shared contact information.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    age: u32,
    height: f64,
    name: String,
    contact: ContactRef,
}

impl Person {
    /// Create a person. `height` is in meters.
    pub fn new(age: u32, height: f64, name: impl Into<String>, contact: ContactRef) -> Self {
        Self {
            age,
            height,
            name: name.into(),
            contact,
        }
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    /// Another owning handle to the shared contact information.
    pub fn contact_ref(&self) -> ContactRef {
        Arc::clone(&self.contact)
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_contact(&mut self, contact: ContactRef) {
        self.contact = contact;
    }

    /// Mutable access to the contact information, copy-on-write when shared.
    pub fn contact_mut(&mut self) -> &mut ContactInfo {
        Arc::make_mut(&mut self.contact)
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    /// Body mass index for the given weight; 0 when the height is not positive.
    pub fn calculate_bmi(&self, weight_kg: f64) -> f64 {
        if self.height <= 0.0 {
            return 0.0;
        }
        weight_kg / (self.height * self.height)
    }
}

/// Factory returning a uniquely owned person.
pub fn create_person(
    age: u32,
    height: f64,
    name: impl Into<String>,
    contact: ContactRef,
) -> Box<Person> {
    Box::new(Person::new(age, height, name, contact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Address;

    fn sample_contact() -> ContactRef {
        let address = Arc::new(Address::new("123 Main St", "New York", "10001"));
        Arc::new(ContactInfo::new("bob@example.com", "555-1234", address))
    }

    #[test]
    fn test_person_accessors() {
        let person = create_person(25, 1.75, "Bob Johnson", sample_contact());
        assert_eq!(person.age(), 25);
        assert_eq!(person.height(), 1.75);
        assert_eq!(person.name(), "Bob Johnson");
        assert_eq!(person.contact().address().city(), "New York");
    }

    #[test]
    fn test_is_adult_boundary() {
        let mut person = Person::new(17, 1.7, "Teen", sample_contact());
        assert!(!person.is_adult());
        person.set_age(18);
        assert!(person.is_adult());
    }

    #[test]
    fn test_calculate_bmi() {
        let person = Person::new(25, 1.75, "Bob Johnson", sample_contact());
        assert!((person.calculate_bmi(75.0) - 24.489_795).abs() < 1e-5);
    }

    #[test]
    fn test_calculate_bmi_non_positive_height() {
        let mut person = Person::new(25, 0.0, "Nobody", sample_contact());
        assert_eq!(person.calculate_bmi(75.0), 0.0);
        person.set_height(-1.0);
        assert_eq!(person.calculate_bmi(75.0), 0.0);
    }

    #[test]
    fn test_contact_shared_between_people() {
        let contact = sample_contact();
        let alice = Person::new(30, 1.6, "Alice", Arc::clone(&contact));
        let mut bob = Person::new(32, 1.8, "Bob", Arc::clone(&contact));

        bob.contact_mut().set_phone("555-9999");

        assert_eq!(alice.contact().phone(), "555-1234");
        assert_eq!(bob.contact().phone(), "555-9999");
        // Detached contact still shares the original address.
        assert!(std::ptr::eq(
            alice.contact().address(),
            bob.contact().address()
        ));
    }

    #[test]
    fn test_setters() {
        let mut person = Person::new(25, 1.75, "Bob", sample_contact());
        person.set_name("Robert");
        person.set_height(1.8);
        person.set_contact(Arc::new(ContactInfo::new(
            "robert@example.com",
            "555-0000",
            Arc::new(Address::new("1 Elm St", "Austin", "73301")),
        )));
        assert_eq!(person.name(), "Robert");
        assert_eq!(person.height(), 1.8);
        assert_eq!(person.contact().email(), "robert@example.com");
        assert_eq!(Arc::strong_count(&person.contact_ref()), 2);
    }
}
