//! # Billing Console Harness
//!
//! Demonstrates billing-core against a handful of hardcoded subscribers.
//!
//! ## Program Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       billing-console                               │
//! │                                                                     │
//! │  1. Initialize tracing (RUST_LOG respected, INFO default)           │
//! │  2. Validate a throwaway subscriber, print the outcome              │
//! │  3. Price three demo subscribers:                                   │
//! │     • Trial user with a birth date on record                        │
//! │     • Long-tenure Pro with four devices                             │
//! │     • Student with a birth date on record                           │
//! │  4. Run the negative validation cases:                              │
//! │     tenure -5, region "Unknown", devices 0                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The billing date is read from the local clock exactly once, here at the
//! edge; billing-core itself never touches a clock.

use billing_core::{
    BillingResult, BillingService, BirthDate, Money, Subscriber, SubscriptionStatus,
};
use chrono::{Local, NaiveDate};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> BillingResult<()> {
    init_tracing();

    let billing = BillingService::new();
    let today = Local::now().date_naive();
    info!(%today, "Starting billing console demo");

    // -------------------------------------------------------------------------
    // 1. Validation outcome as a plain Result
    // -------------------------------------------------------------------------
    let temp = Subscriber::new(
        "temp",
        "EU",
        SubscriptionStatus::Basic,
        5,
        1,
        Money::from_cents(1000),
        Some(BirthDate::new(1, 1)?),
    )?;

    match billing.validate(Some(&temp)) {
        Ok(()) => println!("Validation demo: OK"),
        Err(e) => println!("Validation demo: Error='{e}'"),
    }
    println!();

    // -------------------------------------------------------------------------
    // 2. Demo subscribers
    // -------------------------------------------------------------------------
    let trial_user = Subscriber::new(
        "A001",
        "EU",
        SubscriptionStatus::Trial,
        2,
        1,
        Money::from_cents(1000), // 10.00
        Some(BirthDate::new(1, 12)?),
    )?;

    let loyal_pro = Subscriber::new(
        "B002",
        "US",
        SubscriptionStatus::Pro,
        36,
        4,
        Money::from_cents(1500), // 15.00
        Some(BirthDate::new(5, 7)?),
    )?;

    let student = Subscriber::new(
        "C003",
        "EU",
        SubscriptionStatus::Student,
        10,
        2,
        Money::from_cents(1200), // 12.00
        Some(BirthDate::new(1, 12)?),
    )?;

    // -------------------------------------------------------------------------
    // 3. Price each one
    // -------------------------------------------------------------------------
    demo("Trial user (birthday on record)", &billing, &trial_user, today);
    demo("Pro long-term with many devices", &billing, &loyal_pro, today);
    demo("Student + birthday discount", &billing, &student, today);

    // -------------------------------------------------------------------------
    // 4. Negative validation cases
    // -------------------------------------------------------------------------
    println!("\nNegative tests:");

    let negative_tenure = Subscriber::new(
        "X",
        "EU",
        SubscriptionStatus::Basic,
        -5,
        2,
        Money::from_cents(1000),
        None,
    )?;
    report_invalid("Tenure < 0", &billing, &negative_tenure);

    let unknown_region = Subscriber::new(
        "Y",
        "Unknown",
        SubscriptionStatus::Basic,
        3,
        2,
        Money::from_cents(1000),
        None,
    )?;
    report_invalid("Invalid region", &billing, &unknown_region);

    let no_devices = Subscriber::new(
        "Z",
        "US",
        SubscriptionStatus::Basic,
        3,
        0,
        Money::from_cents(1000),
        None,
    )?;
    report_invalid("Devices < 1", &billing, &no_devices);

    Ok(())
}

/// Validates and prices one subscriber, printing the itemized outcome.
fn demo(title: &str, billing: &BillingService, subscriber: &Subscriber, today: NaiveDate) {
    println!("--- {title} ---");

    let quote = match billing.quote(Some(subscriber), today) {
        Ok(quote) => quote,
        Err(e) => {
            println!("Validation failed: {e}\n");
            return;
        }
    };

    debug!(?quote, "Computed quote");

    if quote.is_birthday {
        println!(
            "Happy birthday, {}! {} off today.",
            quote.subscriber_id, quote.birthday_discount
        );
    }
    println!("Total price for {}: {}\n", quote.subscriber_id, quote.total);
}

/// Prints the validation error a bad record produces.
fn report_invalid(case: &str, billing: &BillingService, subscriber: &Subscriber) {
    match billing.validate(Some(subscriber)) {
        Ok(()) => println!("{case} -> OK (unexpected)"),
        Err(e) => println!("{case} -> Error='{e}'"),
    }
}

/// Initializes tracing with an env-filter subscriber.
///
/// Default level is INFO; override with `RUST_LOG` (e.g. `RUST_LOG=debug`
/// to see the per-stage quote breakdown).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
