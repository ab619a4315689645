//! Person Bridge - opaque object bridge between a host runtime and Rust.
//!
//! A host owns a `Person → ContactInfo → Address` object graph. Rust
//! computations read that graph only through read-only accessors, never see its
//! layout, and hand back plain value records whose text is always copied.
//!
//! # Architecture
//!
//! - **domain**: Native host model with private state, setters and factories
//! - **accessor**: Read-only accessor traits and per-field accessor functions
//! - **transfer**: Value transfer types returned to the host
//! - **services**: Consumer computations (summary, health, validation, BMI, greeting)
//! - **text**: Text marshalling between host and Rust representations
//! - **ffi**: C ABI for hosts written in other languages
//! - **error** / **config** / **logging**: Error types, environment configuration, tracing setup

pub mod accessor;
pub mod config;
pub mod domain;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod services;
pub mod text;
pub mod transfer;

pub use accessor::{AddressAccess, ContactAccess, PersonAccess};
pub use config::Config;
pub use domain::{Address, ContactInfo, Person};
pub use error::{BridgeError, BridgeResult, ConfigError, ConfigResult};
pub use services::{
    analyze_health, calculate_bmi, greet, summarize, summarize_with_weight, validate_contact,
};
pub use transfer::{BmiCategory, HealthAnalysis, PersonSummary};
