//! # Error Types
//!
//! Domain-specific error types for billing-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  Construction guards (Subscriber::new, BirthDate::new)              │
//! │  ├── InvalidIdentity   - empty id                                   │
//! │  ├── InvalidRegion     - empty region                               │
//! │  ├── InvalidPrice      - negative base price                        │
//! │  └── InvalidBirthDate  - day/month out of range                     │
//! │                                                                     │
//! │  Billing rules (BillingService::validate)                           │
//! │  ├── MissingSubscriber   - no record supplied                       │
//! │  ├── InvalidDeviceCount  - fewer than one device                    │
//! │  ├── InvalidTenure       - negative tenure                          │
//! │  └── UnsupportedRegion   - region outside the billing set           │
//! │                                                                     │
//! │  calc_total never invents its own errors: it re-runs validate and   │
//! │  propagates whatever that returns.                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (region, device count, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each variant's message is the user-facing text

use thiserror::Error;

// =============================================================================
// Billing Error
// =============================================================================

/// Errors raised by subscriber construction and the billing rules.
///
/// Construction-time variants fail fast from the `Subscriber`/`BirthDate`
/// factories. Rule variants are recoverable results from
/// [`validate`](crate::BillingService::validate) so callers can surface
/// user-facing messages instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    /// No subscriber record was supplied at all.
    #[error("No subscriber")]
    MissingSubscriber,

    /// Subscriber id is empty or whitespace.
    #[error("Subscriber id is required")]
    InvalidIdentity,

    /// Region is empty or whitespace.
    #[error("Region is required")]
    InvalidRegion,

    /// Base price is negative.
    #[error("Base price cannot be negative: {cents} cents")]
    InvalidPrice { cents: i64 },

    /// Subscriber has fewer devices than billing requires.
    ///
    /// ## When This Occurs
    /// Every plan covers at least one device; a count of zero means the
    /// record was never finished, not that nothing is billed.
    #[error("Quantity of devices cannot be less than 1")]
    InvalidDeviceCount { devices: i64 },

    /// Tenure is negative, which no real subscription can be.
    #[error("Tenure months cannot be negative")]
    InvalidTenure { months: i64 },

    /// Region is well-formed but outside the set billing supports.
    #[error("Billing service in your region is not supported")]
    UnsupportedRegion { region: String },

    /// Birth date components are outside calendar ranges.
    #[error("Invalid birth date: day {day}, month {month}")]
    InvalidBirthDate { day: u32, month: u32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BillingError.
pub type BillingResult<T> = Result<T, BillingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_error_messages() {
        assert_eq!(BillingError::MissingSubscriber.to_string(), "No subscriber");
        assert_eq!(
            BillingError::InvalidDeviceCount { devices: 0 }.to_string(),
            "Quantity of devices cannot be less than 1"
        );
        assert_eq!(
            BillingError::InvalidTenure { months: -5 }.to_string(),
            "Tenure months cannot be negative"
        );
        assert_eq!(
            BillingError::UnsupportedRegion {
                region: "Unknown".to_string()
            }
            .to_string(),
            "Billing service in your region is not supported"
        );
    }

    #[test]
    fn test_construction_error_messages() {
        assert_eq!(
            BillingError::InvalidIdentity.to_string(),
            "Subscriber id is required"
        );
        assert_eq!(
            BillingError::InvalidPrice { cents: -100 }.to_string(),
            "Base price cannot be negative: -100 cents"
        );
        assert_eq!(
            BillingError::InvalidBirthDate { day: 32, month: 1 }.to_string(),
            "Invalid birth date: day 32, month 1"
        );
    }
}
