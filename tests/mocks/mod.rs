//! Mock owners for exercising the consumer computations.

pub mod host_person;
pub mod mock_person;

#[allow(unused_imports)]
pub use mock_person::{mock_bob, CallLog, MockAddress, MockContact, MockPerson};
