//! # Validation Module
//!
//! Field-level validators for subscriber records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Construction guards (Subscriber::new, BirthDate::new)     │
//! │  ├── validate_subscriber_id  - non-empty id                         │
//! │  ├── validate_region_name    - non-empty region                     │
//! │  ├── validate_price          - non-negative base price              │
//! │  └── validate_birth_date     - calendar-range day/month             │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Billing rules (BillingService::validate)                  │
//! │  ├── validate_device_count     - at least one device                │
//! │  ├── validate_tenure_months    - non-negative tenure                │
//! │  └── validate_region_supported - region in the billing set          │
//! │                                                                     │
//! │  A malformed record never exists; an unbillable one is a            │
//! │  recoverable error with a user-facing message.                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{BillingError, BillingResult};
use crate::money::Money;
use crate::SUPPORTED_REGIONS;

// =============================================================================
// Construction Guards
// =============================================================================

/// Validates a subscriber id.
///
/// ## Rules
/// - Must not be empty or whitespace
///
/// ## Returns
/// The trimmed id.
pub fn validate_subscriber_id(id: &str) -> BillingResult<String> {
    let id = id.trim();

    if id.is_empty() {
        return Err(BillingError::InvalidIdentity);
    }

    Ok(id.to_string())
}

/// Validates a region name is present.
///
/// Whether the region is *supported* is a separate billing rule
/// ([`validate_region_supported`]); unknown-but-present regions are
/// representable so the tax stage can pass them through unchanged.
///
/// ## Returns
/// The trimmed region.
pub fn validate_region_name(region: &str) -> BillingResult<String> {
    let region = region.trim();

    if region.is_empty() {
        return Err(BillingError::InvalidRegion);
    }

    Ok(region.to_string())
}

/// Validates a base price.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (fully discounted plans)
pub fn validate_price(price: Money) -> BillingResult<()> {
    if price.is_negative() {
        return Err(BillingError::InvalidPrice {
            cents: price.cents(),
        });
    }

    Ok(())
}

/// Validates birth date components.
///
/// ## Rules
/// - Day between 1 and 31, month between 1 and 12
/// - An impossible pair could never match a real date, so it is rejected
///   up front instead of silently disabling the discount
pub fn validate_birth_date(day: u32, month: u32) -> BillingResult<()> {
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return Err(BillingError::InvalidBirthDate { day, month });
    }

    Ok(())
}

// =============================================================================
// Billing Rules
// =============================================================================

/// Validates the device count before billing.
///
/// ## Rules
/// - Must be at least 1 (every plan covers one device)
///
/// ## Example
/// ```rust
/// use billing_core::validation::validate_device_count;
///
/// assert!(validate_device_count(1).is_ok());
/// assert!(validate_device_count(0).is_err());
/// ```
pub fn validate_device_count(devices: i64) -> BillingResult<()> {
    if devices < 1 {
        return Err(BillingError::InvalidDeviceCount { devices });
    }

    Ok(())
}

/// Validates tenure before billing.
///
/// ## Rules
/// - Must be non-negative; zero months (brand-new subscriber) is fine
pub fn validate_tenure_months(months: i64) -> BillingResult<()> {
    if months < 0 {
        return Err(BillingError::InvalidTenure { months });
    }

    Ok(())
}

/// Validates that the region is one billing supports.
///
/// ## Example
/// ```rust
/// use billing_core::validation::validate_region_supported;
///
/// assert!(validate_region_supported("EU").is_ok());
/// assert!(validate_region_supported("US").is_ok());
/// assert!(validate_region_supported("Unknown").is_err());
/// ```
pub fn validate_region_supported(region: &str) -> BillingResult<()> {
    if !SUPPORTED_REGIONS.contains(&region) {
        return Err(BillingError::UnsupportedRegion {
            region: region.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
