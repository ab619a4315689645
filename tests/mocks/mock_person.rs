use person_bridge::accessor::{AddressAccess, ContactAccess, PersonAccess};
use std::cell::RefCell;
use std::collections::HashMap;

/// Call counter shared by the mock objects.
///
/// Records every accessor the consumer touches so tests can verify that
/// computations only go through the accessor table.
#[allow(dead_code)]
#[derive(Default)]
pub struct CallLog {
    counts: RefCell<HashMap<&'static str, usize>>,
}

#[allow(dead_code)]
impl CallLog {
    fn track(&self, accessor: &'static str) {
        *self.counts.borrow_mut().entry(accessor).or_insert(0) += 1;
    }

    /// Get the number of times an accessor was called.
    pub fn get_call_count(&self, accessor: &str) -> usize {
        *self.counts.borrow().get(accessor).unwrap_or(&0)
    }

    /// Total number of accessor calls.
    pub fn total(&self) -> usize {
        self.counts.borrow().values().sum()
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.counts.borrow_mut().clear();
    }
}

/// Mock address backed by plain strings.
#[allow(dead_code)]
pub struct MockAddress<'log> {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub log: &'log CallLog,
}

impl AddressAccess for MockAddress<'_> {
    fn street(&self) -> &str {
        self.log.track("street");
        &self.street
    }

    fn city(&self) -> &str {
        self.log.track("city");
        &self.city
    }

    fn postal_code(&self) -> &str {
        self.log.track("postal_code");
        &self.postal_code
    }
}

/// Mock contact information.
#[allow(dead_code)]
pub struct MockContact<'log> {
    pub email: String,
    pub phone: String,
    pub address: MockAddress<'log>,
    pub log: &'log CallLog,
}

impl<'log> ContactAccess for MockContact<'log> {
    type Address = MockAddress<'log>;

    fn email(&self) -> &str {
        self.log.track("email");
        &self.email
    }

    fn phone(&self) -> &str {
        self.log.track("phone");
        &self.phone
    }

    fn address(&self) -> &MockAddress<'log> {
        self.log.track("address");
        &self.address
    }
}

/// Mock person.
#[allow(dead_code)]
pub struct MockPerson<'log> {
    pub age: u32,
    pub height: f64,
    pub name: String,
    pub contact: MockContact<'log>,
    pub log: &'log CallLog,
}

impl<'log> PersonAccess for MockPerson<'log> {
    type Contact = MockContact<'log>;

    fn age(&self) -> u32 {
        self.log.track("age");
        self.age
    }

    fn height(&self) -> f64 {
        self.log.track("height");
        self.height
    }

    fn name(&self) -> &str {
        self.log.track("name");
        &self.name
    }

    fn contact(&self) -> &MockContact<'log> {
        self.log.track("contact");
        &self.contact
    }
}

/// Bob Johnson from New York, wired to `log`.
#[allow(dead_code)]
pub fn mock_bob(log: &CallLog) -> MockPerson<'_> {
    MockPerson {
        age: 25,
        height: 1.75,
        name: "Bob Johnson".to_string(),
        contact: MockContact {
            email: "bob@example.com".to_string(),
            phone: "555-1234".to_string(),
            address: MockAddress {
                street: "123 Main St".to_string(),
                city: "New York".to_string(),
                postal_code: "10001".to_string(),
                log,
            },
            log,
        },
        log,
    }
}
