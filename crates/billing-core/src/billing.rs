//! # Billing Service
//!
//! Rule validation and the four-stage pricing pipeline.
//!
//! ## The Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     calc_total(subscriber, today)                   │
//! │                                                                     │
//! │  validate ──► refuses to price an unbillable record                 │
//! │      │                                                              │
//! │      ▼                                                              │
//! │  1. Status discount   (on base price)                               │
//! │     Trial → 0   Student → 50%   Pro ≥24mo → 85%   Pro ≥12mo → 90%   │
//! │      │                                                              │
//! │      ▼                                                              │
//! │  2. Device surcharge  (flat 4.99 when devices > 3)                  │
//! │      │                                                              │
//! │      ▼                                                              │
//! │  3. Regional tax      (EU +21%, US +7%)                             │
//! │      │                                                              │
//! │      ▼                                                              │
//! │  4. Birthday discount (day-of-month in whole units, matching day)   │
//! │      │                                                              │
//! │      ▼                                                              │
//! │  Quote { per-stage amounts, is_birthday, total }                    │
//! │                                                                     │
//! │  ORDER MATTERS: each stage operates on the running total, not the   │
//! │  base price. The surcharge is taxed; the birthday discount is not.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `today` is an explicit parameter so the birthday rule is deterministic
//! under test; this crate never reads the clock.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{BillingError, BillingResult};
use crate::money::Money;
use crate::types::{BirthDate, Subscriber, SubscriptionStatus, TaxRate};
use crate::validation::{validate_device_count, validate_region_supported, validate_tenure_months};
use crate::{DEVICE_SURCHARGE_CENTS, MULTI_DEVICE_THRESHOLD};

// =============================================================================
// Rule Constants
// =============================================================================

/// Student plans pay half price.
const STUDENT_DISCOUNT_BPS: u32 = 5000;

/// Pro discount after [`PRO_LOYAL_TENURE_MONTHS`]: 15% off.
const PRO_LOYAL_DISCOUNT_BPS: u32 = 1500;

/// Pro discount after [`PRO_ESTABLISHED_TENURE_MONTHS`]: 10% off.
const PRO_ESTABLISHED_DISCOUNT_BPS: u32 = 1000;

/// Tenure threshold (inclusive) for the larger Pro discount.
const PRO_LOYAL_TENURE_MONTHS: i64 = 24;

/// Tenure threshold (inclusive) for the smaller Pro discount.
const PRO_ESTABLISHED_TENURE_MONTHS: i64 = 12;

/// EU value-added tax: 21%.
const EU_TAX_BPS: u32 = 2100;

/// US sales tax: 7%.
const US_TAX_BPS: u32 = 700;

// =============================================================================
// Quote
// =============================================================================

/// An itemized price computation.
///
/// Holds the running total after each stage so callers can show a
/// breakdown (and so tests can pin each rule individually). `total` is
/// the amount to charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Subscriber the quote was computed for.
    pub subscriber_id: String,
    /// Price before any rules.
    pub base_price: Money,
    /// Running total after the status discount.
    pub after_status_discount: Money,
    /// Running total after the device surcharge.
    pub after_device_surcharge: Money,
    /// Running total after regional tax.
    pub after_region_tax: Money,
    /// Amount subtracted by the birthday rule (zero on any other day).
    pub birthday_discount: Money,
    /// Whether the billing date matched the subscriber's birth date.
    /// Callers use this to emit the congratulatory message.
    pub is_birthday: bool,
    /// Final amount to charge.
    pub total: Money,
}

// =============================================================================
// Billing Service
// =============================================================================

/// Validates subscribers and computes their subscription price.
///
/// Stateless: every call is independent and side-effect-free.
#[derive(Debug, Clone, Copy, Default)]
pub struct BillingService;

impl BillingService {
    /// Creates a billing service.
    pub fn new() -> Self {
        BillingService
    }

    /// Checks a subscriber against the billing rules.
    ///
    /// Rules run in a fixed order and the first failure wins:
    /// 1. a subscriber must be supplied at all,
    /// 2. device count must be at least 1,
    /// 3. tenure must be non-negative,
    /// 4. the region must be one billing supports.
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::{BillingError, BillingService, Money, Subscriber, SubscriptionStatus};
    ///
    /// let billing = BillingService::new();
    /// assert_eq!(
    ///     billing.validate(None),
    ///     Err(BillingError::MissingSubscriber)
    /// );
    ///
    /// let s = Subscriber::new(
    ///     "A001", "EU", SubscriptionStatus::Basic, 5, 1,
    ///     Money::from_cents(1000), None,
    /// )
    /// .unwrap();
    /// assert!(billing.validate(Some(&s)).is_ok());
    /// ```
    pub fn validate(&self, subscriber: Option<&Subscriber>) -> BillingResult<()> {
        let s = subscriber.ok_or(BillingError::MissingSubscriber)?;

        validate_device_count(s.devices())?;
        validate_tenure_months(s.tenure_months())?;
        validate_region_supported(s.region())?;

        Ok(())
    }

    /// Computes an itemized quote for the given billing date.
    ///
    /// Validation runs first; an unbillable subscriber yields the
    /// validation error, never a price.
    pub fn quote(&self, subscriber: Option<&Subscriber>, today: NaiveDate) -> BillingResult<Quote> {
        self.validate(subscriber)?;
        // validate() guarantees presence
        let s = subscriber.ok_or(BillingError::MissingSubscriber)?;

        let after_status = status_discount(s.status(), s.tenure_months(), s.base_price());
        let after_devices = device_surcharge(s.devices(), after_status);
        let after_tax = region_tax(s.region(), after_devices);
        let birthday = birthday_discount(s.birth_date(), today);

        Ok(Quote {
            subscriber_id: s.id().to_string(),
            base_price: s.base_price(),
            after_status_discount: after_status,
            after_device_surcharge: after_devices,
            after_region_tax: after_tax,
            birthday_discount: birthday,
            is_birthday: !birthday.is_zero(),
            total: after_tax - birthday,
        })
    }

    /// Computes the amount to charge for the given billing date.
    ///
    /// Equivalent to [`quote`](Self::quote) keeping only the total.
    pub fn calc_total(
        &self,
        subscriber: Option<&Subscriber>,
        today: NaiveDate,
    ) -> BillingResult<Money> {
        self.quote(subscriber, today).map(|q| q.total)
    }
}

// =============================================================================
// Pipeline Stages
// =============================================================================

/// Stage 1: tier and tenure discount on the base price.
///
/// Exhaustive over [`SubscriptionStatus`]: a new tier will not compile
/// until it is priced.
fn status_discount(status: SubscriptionStatus, tenure_months: i64, base: Money) -> Money {
    match status {
        SubscriptionStatus::Trial => Money::zero(),
        SubscriptionStatus::Student => base.apply_discount_bps(STUDENT_DISCOUNT_BPS),
        SubscriptionStatus::Pro if tenure_months >= PRO_LOYAL_TENURE_MONTHS => {
            base.apply_discount_bps(PRO_LOYAL_DISCOUNT_BPS)
        }
        SubscriptionStatus::Pro if tenure_months >= PRO_ESTABLISHED_TENURE_MONTHS => {
            base.apply_discount_bps(PRO_ESTABLISHED_DISCOUNT_BPS)
        }
        SubscriptionStatus::Pro | SubscriptionStatus::Basic => base,
    }
}

/// Stage 2: flat surcharge for plans spanning many devices.
fn device_surcharge(devices: i64, amount: Money) -> Money {
    if devices > MULTI_DEVICE_THRESHOLD {
        amount + Money::from_cents(DEVICE_SURCHARGE_CENTS)
    } else {
        amount
    }
}

/// Stage 3: regional tax on the running total (surcharge included).
///
/// Unsupported regions pass through unchanged; validate() has already
/// rejected them before this stage runs.
fn region_tax(region: &str, amount: Money) -> Money {
    match region {
        "EU" => amount + amount.tax(TaxRate::from_bps(EU_TAX_BPS)),
        "US" => amount + amount.tax(TaxRate::from_bps(US_TAX_BPS)),
        _ => amount,
    }
}

/// Stage 4: the discount subtracted on the subscriber's birthday.
///
/// Worth the day-of-month in whole currency units (born on the 5th →
/// 5.00 off). Unset birth dates never match.
fn birthday_discount(birth_date: Option<BirthDate>, today: NaiveDate) -> Money {
    match birth_date {
        Some(bd) if bd.matches(today) => Money::from_major_minor(bd.day() as i64, 0),
        _ => Money::zero(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn subscriber(
        region: &str,
        status: SubscriptionStatus,
        tenure: i64,
        devices: i64,
        price_cents: i64,
    ) -> Subscriber {
        Subscriber::new(
            "TEST-1",
            region,
            status,
            tenure,
            devices,
            Money::from_cents(price_cents),
            None,
        )
        .unwrap()
    }

    fn any_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    // -------------------------------------------------------------------------
    // Stage 1: status discount
    // -------------------------------------------------------------------------

    #[test]
    fn test_trial_is_free() {
        assert_eq!(
            status_discount(SubscriptionStatus::Trial, 2, Money::from_cents(1000)),
            Money::zero()
        );
    }

    #[test]
    fn test_student_pays_half() {
        assert_eq!(
            status_discount(SubscriptionStatus::Student, 10, Money::from_cents(1200)).cents(),
            600
        );
    }

    #[test]
    fn test_basic_pays_full_price() {
        assert_eq!(
            status_discount(SubscriptionStatus::Basic, 100, Money::from_cents(1000)).cents(),
            1000
        );
    }

    #[test]
    fn test_pro_tenure_thresholds_are_inclusive() {
        let base = Money::from_cents(1000);

        // 24 months: 85% of base
        assert_eq!(status_discount(SubscriptionStatus::Pro, 24, base).cents(), 850);
        // 23 months: still the 90% band
        assert_eq!(status_discount(SubscriptionStatus::Pro, 23, base).cents(), 900);
        // 12 months: 90% of base
        assert_eq!(status_discount(SubscriptionStatus::Pro, 12, base).cents(), 900);
        // 11 months: full price
        assert_eq!(status_discount(SubscriptionStatus::Pro, 11, base).cents(), 1000);
    }

    // -------------------------------------------------------------------------
    // Stage 2: device surcharge
    // -------------------------------------------------------------------------

    #[test]
    fn test_surcharge_only_above_three_devices() {
        let amount = Money::from_cents(1000);

        assert_eq!(device_surcharge(1, amount).cents(), 1000);
        assert_eq!(device_surcharge(3, amount).cents(), 1000);
        assert_eq!(device_surcharge(4, amount).cents(), 1499);
    }

    #[test]
    fn test_surcharge_applies_after_status_discount() {
        // Trial with 5 devices: surcharge lands on 0, not on base price
        let after_status = status_discount(SubscriptionStatus::Trial, 1, Money::from_cents(1000));
        assert_eq!(device_surcharge(5, after_status).cents(), 499);
    }

    // -------------------------------------------------------------------------
    // Stage 3: regional tax
    // -------------------------------------------------------------------------

    #[test]
    fn test_region_tax_rates() {
        let amount = Money::from_cents(1000);

        assert_eq!(region_tax("EU", amount).cents(), 1210);
        assert_eq!(region_tax("US", amount).cents(), 1070);
        assert_eq!(region_tax("Unknown", amount).cents(), 1000);
    }

    // -------------------------------------------------------------------------
    // Stage 4: birthday discount
    // -------------------------------------------------------------------------

    #[test]
    fn test_birthday_discount_on_matching_day() {
        let bd = BirthDate::new(5, 7).unwrap();
        let birthday = NaiveDate::from_ymd_opt(2026, 7, 5).unwrap();

        // Born on the 5th: 5.00 off
        assert_eq!(birthday_discount(Some(bd), birthday).cents(), 500);
    }

    #[test]
    fn test_no_birthday_discount_otherwise() {
        let bd = BirthDate::new(5, 7).unwrap();

        assert!(birthday_discount(Some(bd), any_day()).is_zero());
        assert!(birthday_discount(None, any_day()).is_zero());
    }

    // -------------------------------------------------------------------------
    // Validation rules
    // -------------------------------------------------------------------------

    #[test]
    fn test_validate_missing_subscriber() {
        let billing = BillingService::new();
        assert_eq!(
            billing.validate(None),
            Err(BillingError::MissingSubscriber)
        );
    }

    #[test]
    fn test_validate_rejects_each_rule_distinctly() {
        let billing = BillingService::new();

        let no_devices = subscriber("US", SubscriptionStatus::Basic, 3, 0, 1000);
        assert_eq!(
            billing.validate(Some(&no_devices)),
            Err(BillingError::InvalidDeviceCount { devices: 0 })
        );

        let negative_tenure = subscriber("EU", SubscriptionStatus::Basic, -1, 2, 1000);
        assert_eq!(
            billing.validate(Some(&negative_tenure)),
            Err(BillingError::InvalidTenure { months: -1 })
        );

        let bad_region = subscriber("Unknown", SubscriptionStatus::Basic, 3, 2, 1000);
        assert_eq!(
            billing.validate(Some(&bad_region)),
            Err(BillingError::UnsupportedRegion {
                region: "Unknown".to_string()
            })
        );
    }

    #[test]
    fn test_validate_first_failure_wins() {
        // Both devices and region are invalid; the device rule runs first
        let billing = BillingService::new();
        let s = subscriber("Unknown", SubscriptionStatus::Basic, 3, 0, 1000);
        assert_eq!(
            billing.validate(Some(&s)),
            Err(BillingError::InvalidDeviceCount { devices: 0 })
        );
    }

    #[test]
    fn test_validate_accepts_boundary_values() {
        let billing = BillingService::new();

        let s = subscriber("EU", SubscriptionStatus::Basic, 0, 1, 1000);
        assert!(billing.validate(Some(&s)).is_ok());

        let s = subscriber("US", SubscriptionStatus::Basic, 0, 1, 1000);
        assert!(billing.validate(Some(&s)).is_ok());
    }

    // -------------------------------------------------------------------------
    // End to end
    // -------------------------------------------------------------------------

    #[test]
    fn test_basic_eu_subscriber() {
        // 10.00 × 1.21 = 12.10
        let billing = BillingService::new();
        let s = subscriber("EU", SubscriptionStatus::Basic, 5, 1, 1000);

        let total = billing.calc_total(Some(&s), any_day()).unwrap();
        assert_eq!(total.cents(), 1210);
        assert_eq!(total.to_string(), "12.10");
    }

    #[test]
    fn test_long_tenure_pro_with_many_devices() {
        // 15.00 × 0.85 = 12.75; + 4.99 = 17.74; × 1.07 = 18.9818 → 18.98
        let billing = BillingService::new();
        let s = subscriber("US", SubscriptionStatus::Pro, 36, 4, 1500);

        let quote = billing.quote(Some(&s), any_day()).unwrap();
        assert_eq!(quote.after_status_discount.cents(), 1275);
        assert_eq!(quote.after_device_surcharge.cents(), 1774);
        assert_eq!(quote.after_region_tax.cents(), 1898);
        assert!(!quote.is_birthday);
        assert_eq!(quote.total.to_string(), "18.98");
    }

    #[test]
    fn test_student_with_birthday() {
        // 12.00 × 0.5 = 6.00; × 1.21 = 7.26; − 1.00 birthday = 6.26
        let billing = BillingService::new();
        let s = Subscriber::new(
            "C003",
            "EU",
            SubscriptionStatus::Student,
            10,
            2,
            Money::from_cents(1200),
            Some(BirthDate::new(1, 12).unwrap()),
        )
        .unwrap();

        let birthday = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
        let quote = billing.quote(Some(&s), birthday).unwrap();
        assert!(quote.is_birthday);
        assert_eq!(quote.birthday_discount.cents(), 100);
        assert_eq!(quote.total.cents(), 626);

        // Same subscriber, any other day: no discount
        let quote = billing.quote(Some(&s), any_day()).unwrap();
        assert!(!quote.is_birthday);
        assert_eq!(quote.total.cents(), 726);
    }

    #[test]
    fn test_calc_total_refuses_invalid_subscriber() {
        let billing = BillingService::new();
        let s = subscriber("Unknown", SubscriptionStatus::Basic, 3, 2, 1000);

        assert_eq!(
            billing.calc_total(Some(&s), any_day()),
            Err(BillingError::UnsupportedRegion {
                region: "Unknown".to_string()
            })
        );
        assert_eq!(
            billing.calc_total(None, any_day()),
            Err(BillingError::MissingSubscriber)
        );
    }

    #[test]
    fn test_quote_serializes_for_downstream_consumers() {
        let billing = BillingService::new();
        let s = subscriber("EU", SubscriptionStatus::Basic, 5, 1, 1000);
        let quote = billing.quote(Some(&s), any_day()).unwrap();

        let json: serde_json::Value = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["subscriber_id"], "TEST-1");
        assert_eq!(json["total"], 1210);
        assert_eq!(json["is_birthday"], false);
    }

    #[test]
    fn test_quote_ids_the_subscriber() {
        let billing = BillingService::new();
        let s = subscriber("EU", SubscriptionStatus::Basic, 5, 1, 1000);
        let quote = billing.quote(Some(&s), any_day()).unwrap();
        assert_eq!(quote.subscriber_id, "TEST-1");
        assert_eq!(quote.base_price.cents(), 1000);
    }
}
