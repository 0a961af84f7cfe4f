//! # billing-core: Pure Business Logic for Subscription Billing
//!
//! This crate is the **heart** of the billing system. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Subscription Billing Architecture                 │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                    apps/console                               │  │
//! │  │     demo subscribers ──► validate ──► quote ──► stdout        │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │              ★ billing-core (THIS CRATE) ★                    │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐  ┌─────────┐  ┌────────────┐  ┌──────────────┐   │  │
//! │  │  │  types  │  │  money  │  │ validation │  │   billing    │   │  │
//! │  │  │Subscrbr │  │  Money  │  │   rules    │  │ 4-stage      │   │  │
//! │  │  │ Status  │  │ TaxCalc │  │   checks   │  │ pipeline     │   │  │
//! │  │  └─────────┘  └─────────┘  └────────────┘  └──────────────┘   │  │
//! │  │                                                               │  │
//! │  │  NO I/O • NO CLOCK READS • NO DATABASE • PURE FUNCTIONS       │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Subscriber, SubscriptionStatus, BirthDate, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Construction guards and billing-rule validation
//! - [`billing`] - BillingService: validate + four-stage pricing pipeline
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: the billing date is a parameter, never a clock read,
//!    so the same input always prices the same
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use billing_core::{BillingService, Money, Subscriber, SubscriptionStatus};
//! use chrono::NaiveDate;
//!
//! let billing = BillingService::new();
//!
//! let subscriber = Subscriber::new(
//!     "A001",
//!     "EU",
//!     SubscriptionStatus::Basic,
//!     5,                       // months of tenure
//!     1,                       // devices
//!     Money::from_cents(1000), // 10.00 base price
//!     None,                    // no birth date on record
//! )?;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
//! let total = billing.calc_total(Some(&subscriber), today)?;
//!
//! // 10.00 + 21% EU tax = 12.10
//! assert_eq!(total.cents(), 1210);
//! # Ok::<(), billing_core::BillingError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use billing_core::Money` instead of
// `use billing_core::money::Money`

pub use billing::{BillingService, Quote};
pub use error::{BillingError, BillingResult};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Regions the billing service can charge in.
///
/// ## Why a constant?
/// Tax registration exists for exactly these regions. A subscriber from
/// anywhere else is representable (region is a plain string) but fails
/// [`BillingService::validate`] with a user-facing message.
pub const SUPPORTED_REGIONS: &[&str] = &["EU", "US"];

/// Flat surcharge, in cents, for plans spanning many devices.
pub const DEVICE_SURCHARGE_CENTS: i64 = 499;

/// Device count above which the surcharge applies.
///
/// ## Business Reason
/// Up to three devices is the normal household case; beyond that the plan
/// is treated as multi-device and pays the flat surcharge.
pub const MULTI_DEVICE_THRESHOLD: i64 = 3;
