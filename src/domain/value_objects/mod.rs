//! Value objects of the catalog domain.
//!
//! All three types are immutable and compared structurally; "mutation" always
//! produces a new value. Validation happens in the constructors, so a value
//! that exists is a value that holds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, Result};

/// Supported currencies. Closed set: anything outside it is rejected at the
/// `from_code` boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Try,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Try => "TRY",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Try => "Turkish Lira",
            Self::Usd => "US Dollar",
            Self::Eur => "Euro",
            Self::Gbp => "British Pound",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Try => "₺",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
        }
    }

    /// Resolve a currency from its code, ignoring case and surrounding
    /// whitespace.
    pub fn from_code(code: &str) -> Result<Self> {
        let normalized = code.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(CatalogError::invalid("currency code must not be blank"));
        }
        match normalized.as_str() {
            "TRY" => Ok(Self::Try),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            _ => Err(CatalogError::invalid(format!(
                "unsupported currency: {code}"
            ))),
        }
    }

    /// Mirrors `from_code`'s acceptance set without ever failing.
    pub fn is_supported(code: &str) -> bool {
        Self::from_code(code).is_ok()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.code(), self.display_name(), self.symbol())
    }
}

impl FromStr for Currency {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

/// A monetary amount in a single currency. Amounts are exact decimals, never
/// binary floats, so repeated percentage adjustments do not drift.
///
/// Deliberately not `Deserialize`: the only way in is `new`, so the
/// non-negativity invariant cannot be bypassed by decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Price {
    amount: Decimal,
    currency: Currency,
}

impl Price {
    pub fn new(amount: Decimal, currency: Currency) -> Result<Self> {
        if amount < Decimal::ZERO {
            return Err(CatalogError::invalid("price amount must not be negative"));
        }
        Ok(Self { amount, currency })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_greater_than(&self, other: &Price) -> Result<bool> {
        self.require_same_currency(other)?;
        Ok(self.amount > other.amount)
    }

    pub fn is_less_than(&self, other: &Price) -> Result<bool> {
        self.require_same_currency(other)?;
        Ok(self.amount < other.amount)
    }

    /// Returns a new price raised by `percentage` percent.
    pub fn increase_by_percentage(&self, percentage: Decimal) -> Result<Self> {
        let multiplier = Decimal::ONE + Self::percentage_fraction(percentage)?;
        Self::new(self.amount * multiplier, self.currency)
    }

    /// Returns a new price lowered by `percentage` percent.
    pub fn decrease_by_percentage(&self, percentage: Decimal) -> Result<Self> {
        let multiplier = Decimal::ONE - Self::percentage_fraction(percentage)?;
        Self::new(self.amount * multiplier, self.currency)
    }

    fn percentage_fraction(percentage: Decimal) -> Result<Decimal> {
        if percentage < Decimal::ZERO {
            return Err(CatalogError::invalid("percentage must not be negative"));
        }
        Ok(percentage / Decimal::from(100))
    }

    fn require_same_currency(&self, other: &Price) -> Result<()> {
        if self.currency != other.currency {
            return Err(CatalogError::invalid(format!(
                "cannot compare prices in different currencies: {} vs {}",
                self.currency.code(),
                other.currency.code()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency.code())
    }
}

/// A non-negative on-hand quantity. Like `Price`, constructible only through
/// `new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Stock {
    quantity: i64,
}

impl Stock {
    pub fn new(quantity: i64) -> Result<Self> {
        if quantity < 0 {
            return Err(CatalogError::invalid("stock quantity must not be negative"));
        }
        Ok(Self { quantity })
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    pub fn has_enough(&self, requested: i64) -> Result<bool> {
        if requested < 0 {
            return Err(CatalogError::invalid(
                "requested quantity must not be negative",
            ));
        }
        Ok(self.quantity >= requested)
    }

    pub fn reduce(&self, amount: i64) -> Result<Self> {
        if amount < 0 {
            return Err(CatalogError::invalid(
                "quantity to reduce must not be negative",
            ));
        }
        if amount > self.quantity {
            return Err(CatalogError::invalid(format!(
                "insufficient stock: available {}, requested {}",
                self.quantity, amount
            )));
        }
        Self::new(self.quantity - amount)
    }

    pub fn add(&self, amount: i64) -> Result<Self> {
        if amount < 0 {
            return Err(CatalogError::invalid(
                "quantity to add must not be negative",
            ));
        }
        let total = self
            .quantity
            .checked_add(amount)
            .ok_or_else(|| CatalogError::invalid("stock quantity overflow"))?;
        Self::new(total)
    }

    /// Replaces the quantity wholesale.
    pub fn update(&self, new_quantity: i64) -> Result<Self> {
        Self::new(new_quantity)
    }

    pub fn is_greater_than(&self, other: &Stock) -> bool {
        self.quantity > other.quantity
    }

    pub fn is_less_than(&self, other: &Stock) -> bool {
        self.quantity < other.quantity
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn usd(amount: i64) -> Price {
        Price::new(Decimal::from(amount), Currency::Usd).unwrap()
    }

    #[test]
    fn currency_code_is_case_and_whitespace_insensitive() {
        let a = Currency::from_code("try").unwrap();
        let b = Currency::from_code("TRY").unwrap();
        let c = Currency::from_code(" try ").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.code(), "TRY");
    }

    #[test]
    fn unknown_or_blank_currency_is_rejected() {
        assert!(matches!(
            Currency::from_code("XYZ"),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(matches!(
            Currency::from_code("  "),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(Currency::is_supported("eur"));
        assert!(!Currency::is_supported("XYZ"));
        assert!(!Currency::is_supported(""));
    }

    #[test]
    fn negative_price_is_rejected() {
        assert!(Price::new(Decimal::from(-1), Currency::Usd).is_err());
        assert!(Price::new(Decimal::ZERO, Currency::Usd).is_ok());
    }

    #[test]
    fn price_comparison_requires_same_currency() {
        let dollars = usd(100);
        let lira = Price::new(Decimal::from(100), Currency::Try).unwrap();
        assert!(matches!(
            dollars.is_greater_than(&lira),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(usd(200).is_greater_than(&dollars).unwrap());
        assert!(dollars.is_less_than(&usd(200)).unwrap());
    }

    #[test]
    fn percentage_adjustments_are_asymmetric() {
        let raised = usd(100).increase_by_percentage(Decimal::from(10)).unwrap();
        assert_eq!(raised.amount(), Decimal::from(110));

        let lowered = raised.decrease_by_percentage(Decimal::from(10)).unwrap();
        assert_eq!(lowered.amount(), Decimal::from(99));
    }

    #[test]
    fn negative_percentage_is_rejected() {
        assert!(usd(100).increase_by_percentage(Decimal::from(-5)).is_err());
        assert!(usd(100).decrease_by_percentage(Decimal::from(-5)).is_err());
    }

    #[test]
    fn stock_reduce_checks_bounds() {
        let stock = Stock::new(5).unwrap();
        assert!(stock.reduce(-1).is_err());
        let err = stock.reduce(6).unwrap_err();
        assert!(err.to_string().contains("insufficient stock"));
        assert_eq!(stock.reduce(5).unwrap().quantity(), 0);
    }

    #[test]
    fn stock_add_rejects_overflow() {
        let stock = Stock::new(i64::MAX).unwrap();
        let err = stock.add(1).unwrap_err();
        assert!(err.to_string().contains("overflow"));
        assert_eq!(stock.add(0).unwrap().quantity(), i64::MAX);
    }

    #[test]
    fn stock_update_replaces_quantity_wholesale() {
        let stock = Stock::new(5).unwrap();
        assert_eq!(stock.update(12).unwrap().quantity(), 12);
        assert_eq!(stock.update(0).unwrap().quantity(), 0);
        assert!(stock.update(-1).is_err());
        // the original value is untouched
        assert_eq!(stock.quantity(), 5);
    }

    #[test]
    fn stock_queries() {
        let stock = Stock::new(3).unwrap();
        assert!(!stock.is_out_of_stock());
        assert!(stock.has_enough(3).unwrap());
        assert!(!stock.has_enough(4).unwrap());
        assert!(stock.has_enough(-1).is_err());
        assert!(Stock::new(0).unwrap().is_out_of_stock());
        assert!(stock.is_greater_than(&Stock::new(1).unwrap()));
        assert!(stock.is_less_than(&Stock::new(9).unwrap()));
    }

    proptest! {
        #[test]
        fn price_construction_accepts_all_non_negative_amounts(cents in 0i64..1_000_000_000) {
            let amount = Decimal::new(cents, 2);
            prop_assert!(Price::new(amount, Currency::Eur).is_ok());
        }

        #[test]
        fn stock_reduce_then_add_round_trips(quantity in 0i64..10_000, taken in 0i64..10_000) {
            let taken = taken.min(quantity);
            let stock = Stock::new(quantity).unwrap();
            let back = stock.reduce(taken).unwrap().add(taken).unwrap();
            prop_assert_eq!(back, stock);
        }
    }
}
