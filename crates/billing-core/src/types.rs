//! # Domain Types
//!
//! Core domain types for subscription billing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌──────────────────┐   ┌────────────────────┐   ┌──────────────┐   │
//! │  │   Subscriber     │   │ SubscriptionStatus │   │   TaxRate    │   │
//! │  │  ─────────────   │   │  ───────────────── │   │  ──────────  │   │
//! │  │  id              │   │  Trial             │   │  bps (u32)   │   │
//! │  │  region          │   │  Basic             │   │  2100 = 21%  │   │
//! │  │  status          │   │  Pro               │   └──────────────┘   │
//! │  │  tenure_months   │   │  Student           │                      │
//! │  │  devices         │   └────────────────────┘   ┌──────────────┐   │
//! │  │  base_price      │                            │  BirthDate   │   │
//! │  │  birth_date?     │                            │  ──────────  │   │
//! │  └──────────────────┘                            │  day, month  │   │
//! │                                                  └──────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Subscriber` is create-once, read-many: the factory validates identity,
//! region and price, and no mutation is possible afterwards.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::BillingResult;
use crate::money::Money;
use crate::validation::{
    validate_birth_date, validate_price, validate_region_name, validate_subscriber_id,
};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2100 bps = 21% (EU VAT-style rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Subscription Status
// =============================================================================

/// The tier a subscriber is on.
///
/// A closed enum rather than a string: the status discount matches on it
/// exhaustively, so adding a tier is a compile error until every rule
/// handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Free trial period, nothing billed.
    Trial,
    /// Standard plan at full price.
    Basic,
    /// Paid plan with tenure-based loyalty discounts.
    Pro,
    /// Student plan at half price.
    Student,
}

// =============================================================================
// Birth Date
// =============================================================================

/// A (day, month) pair used only for the birthday discount.
///
/// Deliberately year-less: the discount recurs annually. An unset birth
/// date is `Option::<BirthDate>::None` on the subscriber, which never
/// matches any date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    day: u32,
    month: u32,
}

impl BirthDate {
    /// Creates a birth date, rejecting out-of-range components.
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::types::BirthDate;
    ///
    /// assert!(BirthDate::new(5, 7).is_ok());
    /// assert!(BirthDate::new(32, 1).is_err());
    /// assert!(BirthDate::new(1, 13).is_err());
    /// ```
    pub fn new(day: u32, month: u32) -> BillingResult<Self> {
        validate_birth_date(day, month)?;
        Ok(BirthDate { day, month })
    }

    /// Day of the month (1-31). Also the discount amount in whole
    /// currency units when the birthday matches.
    #[inline]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Month of the year (1-12).
    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Checks whether the given calendar date is this birthday.
    #[inline]
    pub fn matches(&self, date: NaiveDate) -> bool {
        date.day() == self.day && date.month() == self.month
    }
}

// =============================================================================
// Subscriber
// =============================================================================

/// An immutable subscriber record, validated at construction.
///
/// ## Construction Guards
/// - `id` must be non-empty (trimmed)
/// - `region` must be non-empty (trimmed); membership in the supported
///   billing set is a *billing rule*, checked later by
///   [`validate`](crate::BillingService::validate)
/// - `base_price` must be non-negative
///
/// Tenure and device count are intentionally NOT guarded here: records
/// arrive from upstream systems in that state, and the billing rules
/// reject them with recoverable, user-facing errors instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscriber {
    id: String,
    region: String,
    status: SubscriptionStatus,
    tenure_months: i64,
    devices: i64,
    base_price: Money,
    birth_date: Option<BirthDate>,
}

impl Subscriber {
    /// Creates a subscriber, failing fast on malformed identity, region
    /// or price.
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::money::Money;
    /// use billing_core::types::{Subscriber, SubscriptionStatus};
    ///
    /// let s = Subscriber::new(
    ///     "A001",
    ///     "EU",
    ///     SubscriptionStatus::Basic,
    ///     5,
    ///     1,
    ///     Money::from_cents(1000),
    ///     None,
    /// )
    /// .unwrap();
    /// assert_eq!(s.id(), "A001");
    /// ```
    pub fn new(
        id: &str,
        region: &str,
        status: SubscriptionStatus,
        tenure_months: i64,
        devices: i64,
        base_price: Money,
        birth_date: Option<BirthDate>,
    ) -> BillingResult<Self> {
        let id = validate_subscriber_id(id)?;
        let region = validate_region_name(region)?;
        validate_price(base_price)?;

        Ok(Subscriber {
            id,
            region,
            status,
            tenure_months,
            devices,
            base_price,
            birth_date,
        })
    }

    /// Business identifier, non-empty.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Billing region code, e.g. "EU" or "US".
    #[inline]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Subscription tier.
    #[inline]
    pub const fn status(&self) -> SubscriptionStatus {
        self.status
    }

    /// Months the subscription has been held.
    #[inline]
    pub const fn tenure_months(&self) -> i64 {
        self.tenure_months
    }

    /// Number of devices on the plan.
    #[inline]
    pub const fn devices(&self) -> i64 {
        self.devices
    }

    /// Monthly base price before any rules apply.
    #[inline]
    pub const fn base_price(&self) -> Money {
        self.base_price
    }

    /// Birth date, if the subscriber provided one.
    #[inline]
    pub const fn birth_date(&self) -> Option<BirthDate> {
        self.birth_date
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BillingError;

    fn basic_subscriber(id: &str, region: &str, price_cents: i64) -> BillingResult<Subscriber> {
        Subscriber::new(
            id,
            region,
            SubscriptionStatus::Basic,
            5,
            1,
            Money::from_cents(price_cents),
            None,
        )
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(2100);
        assert_eq!(rate.bps(), 2100);
        assert!(!rate.is_zero());
        assert!(TaxRate::zero().is_zero());
    }

    #[test]
    fn test_subscriber_construction() {
        let s = basic_subscriber("A001", "EU", 1000).unwrap();
        assert_eq!(s.id(), "A001");
        assert_eq!(s.region(), "EU");
        assert_eq!(s.base_price().cents(), 1000);
        assert!(s.birth_date().is_none());
    }

    #[test]
    fn test_subscriber_trims_identity_and_region() {
        let s = basic_subscriber("  A001  ", " EU ", 1000).unwrap();
        assert_eq!(s.id(), "A001");
        assert_eq!(s.region(), "EU");
    }

    #[test]
    fn test_subscriber_rejects_empty_id() {
        assert_eq!(
            basic_subscriber("", "EU", 1000).unwrap_err(),
            BillingError::InvalidIdentity
        );
        assert_eq!(
            basic_subscriber("   ", "EU", 1000).unwrap_err(),
            BillingError::InvalidIdentity
        );
    }

    #[test]
    fn test_subscriber_rejects_empty_region() {
        assert_eq!(
            basic_subscriber("A001", "", 1000).unwrap_err(),
            BillingError::InvalidRegion
        );
    }

    #[test]
    fn test_subscriber_rejects_negative_price() {
        assert_eq!(
            basic_subscriber("A001", "EU", -1).unwrap_err(),
            BillingError::InvalidPrice { cents: -1 }
        );
        // Zero is a valid price (fully discounted plans exist)
        assert!(basic_subscriber("A001", "EU", 0).is_ok());
    }

    #[test]
    fn test_subscriber_allows_unsupported_region_at_construction() {
        // Region support is a billing rule, not a construction guard
        assert!(basic_subscriber("A001", "Unknown", 1000).is_ok());
    }

    #[test]
    fn test_birth_date_ranges() {
        assert!(BirthDate::new(1, 1).is_ok());
        assert!(BirthDate::new(31, 12).is_ok());

        assert_eq!(
            BirthDate::new(0, 5).unwrap_err(),
            BillingError::InvalidBirthDate { day: 0, month: 5 }
        );
        assert_eq!(
            BirthDate::new(32, 5).unwrap_err(),
            BillingError::InvalidBirthDate { day: 32, month: 5 }
        );
        assert_eq!(
            BirthDate::new(5, 0).unwrap_err(),
            BillingError::InvalidBirthDate { day: 5, month: 0 }
        );
        assert_eq!(
            BirthDate::new(5, 13).unwrap_err(),
            BillingError::InvalidBirthDate { day: 5, month: 13 }
        );
    }

    #[test]
    fn test_birth_date_matches() {
        let bd = BirthDate::new(5, 7).unwrap();
        let birthday = NaiveDate::from_ymd_opt(2026, 7, 5).unwrap();
        let other_day = NaiveDate::from_ymd_opt(2026, 7, 6).unwrap();
        let other_month = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();

        assert!(bd.matches(birthday));
        assert!(!bd.matches(other_day));
        assert!(!bd.matches(other_month));
    }
}
