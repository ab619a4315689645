//! Person Bridge demo host.
//!
//! Builds a few host-owned object graphs, hands them to the Rust computations
//! and prints what comes back.

use anyhow::Result;
use person_bridge::domain::{create_address, Address, ContactInfo, Person};
use person_bridge::{
    analyze_health, calculate_bmi, greet, logging, summarize_with_weight, validate_contact,
    Config, HealthAnalysis, PersonSummary,
};
use std::sync::Arc;
use tracing::info;

fn print_summary(name: &str, summary: &PersonSummary) -> Result<()> {
    println!("\n=== Person summary: {} ===", name);
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

fn print_analysis(name: &str, analysis: &HealthAnalysis) -> Result<()> {
    println!("\n=== Health analysis: {} ===", name);
    println!("{}", serde_json::to_string_pretty(analysis)?);
    Ok(())
}

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    if let Err(e) = logging::init(&config) {
        eprintln!("Logging setup failed: {}", e);
    }
    info!(assumed_weight_kg = config.assumed_weight_kg, "Configuration loaded");

    println!("--- Greeting ---");
    println!("Returned name length: {}", greet("Alice"));

    // Bob and his spouse share one address.
    let home = Arc::new(Address::new("123 Main St", "New York", "10001"));
    let bob_contact = Arc::new(ContactInfo::new(
        "bob@example.com",
        "555-1234",
        Arc::clone(&home),
    ));
    let ann_contact = Arc::new(ContactInfo::new("ann@example.com", "555-4321", home));
    let bob = Person::new(25, 1.75, "Bob Johnson", Arc::clone(&bob_contact));
    let ann = Person::new(27, 1.65, "Ann Johnson", ann_contact);

    print_summary(bob.name(), &summarize_with_weight(&bob, config.assumed_weight_kg))?;
    print_analysis(bob.name(), &analyze_health(&bob, 75.0))?;
    print_summary(ann.name(), &summarize_with_weight(&ann, config.assumed_weight_kg))?;

    let charlie = Person::new(
        16,
        1.60,
        "Charlie Smith",
        Arc::new(ContactInfo::new(
            "charlie@example.com",
            "555-5678",
            Arc::new(Address::new("456 Oak Ave", "Boston", "02101")),
        )),
    );
    print_summary(
        charlie.name(),
        &summarize_with_weight(&charlie, config.assumed_weight_kg),
    )?;
    print_analysis(charlie.name(), &analyze_health(&charlie, 55.0))?;

    println!("\n--- Contact validation ---");
    let invalid = ContactInfo::new(
        "bademail",
        "123",
        Arc::new(Address::new("", "", "123")),
    );
    for (label, contact) in [
        (bob.name(), bob.contact()),
        (charlie.name(), charlie.contact()),
        ("Invalid User", &invalid),
    ] {
        let verdict = if validate_contact(contact) {
            "VALID"
        } else {
            "INVALID"
        };
        println!("{}'s contact is {}", label, verdict);
    }

    println!("\n--- Host methods alongside Rust computations ---");
    println!("Bob is adult (host method): {}", bob.is_adult());
    println!("Bob's BMI (host method): {:.2}", bob.calculate_bmi(75.0));
    println!(
        "Bob's BMI (Rust computation): {:.2}",
        calculate_bmi(75.0, bob.height())
    );

    let office = create_address("789 Pine Rd", "San Francisco", "94102");
    println!("Created address via factory: {}", office.city());

    Ok(())
}
