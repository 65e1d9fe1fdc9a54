//! Fixed-point money amounts.
//!
//! Costs are kept as whole cents so that adding toppings never drifts:
//! `4.00 + 0.50 + 0.35` is exactly `4.85`.
//!
//! `Display` prints the shortest decimal form (`4`, `4.5`, `4.85`); the
//! alternate form `{:#}` always prints two decimals (`4.00`, `4.50`) and is
//! what serialisation uses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use crate::error::Error;

/// A signed currency amount in cents.
///
/// Negative values are allowed so that a decorator can carry a discount;
/// base items reject them on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "PriceRepr", into = "String")]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Largest magnitude accepted from text, numbers and floats: one trillion
    /// units. Millions of such amounts still sum without leaving `i64`.
    pub const LIMIT: Price = Price(100_000_000_000_000);

    pub const fn from_cents(cents: i64) -> Self {
        Price(cents)
    }

    /// `Price::new(4, 85)` is `4.85`. The sign of `units` applies to the whole amount.
    ///
    /// Saturates at the `i64` cent range instead of overflowing.
    pub const fn new(units: i64, cents: u8) -> Self {
        let whole = units.saturating_mul(100);
        if units < 0 {
            Price(whole.saturating_sub(cents as i64))
        } else {
            Price(whole.saturating_add(cents as i64))
        }
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn is_within_limit(self) -> bool {
        self.0.unsigned_abs() <= Self::LIMIT.0.unsigned_abs()
    }

    pub fn checked_add(self, rhs: Price) -> Option<Price> {
        self.0.checked_add(rhs.0).map(Price)
    }

    /// Rounds to the nearest cent, halves away from zero. Amounts beyond
    /// [`Price::LIMIT`] are rejected.
    pub fn from_f64(value: f64) -> Result<Self, Error> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents.abs() > Self::LIMIT.0 as f64 {
            return Err(Error::InvalidPrice(value.to_string()));
        }
        Ok(Price(cents as i64))
    }

    fn limited(self, text: impl FnOnce() -> String) -> Result<Self, Error> {
        if self.is_within_limit() {
            Ok(self)
        } else {
            Err(Error::InvalidPrice(text()))
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let (units, cents) = (abs / 100, abs % 100);
        if f.alternate() {
            write!(f, "{}{}.{:02}", sign, units, cents)
        } else if cents == 0 {
            write!(f, "{}{}", sign, units)
        } else if cents % 10 == 0 {
            write!(f, "{}{}.{}", sign, units, cents / 10)
        } else {
            write!(f, "{}{}.{:02}", sign, units, cents)
        }
    }
}

impl FromStr for Price {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPrice(s.to_string());
        let text = s.trim();

        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (units, fraction) = match digits.split_once('.') {
            Some((units, fraction)) => (units, fraction),
            None => (digits, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if units.is_empty() || !all_digits(units) || !all_digits(fraction) || fraction.len() > 2 {
            return Err(invalid());
        }
        if digits.contains('.') && fraction.is_empty() {
            return Err(invalid());
        }

        let units: i64 = units.parse().map_err(|_| invalid())?;
        let cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse::<i64>().map_err(|_| invalid())?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(invalid)?;

        Price(if negative { -total } else { total }).limited(|| s.to_string())
    }
}

// Operators saturate; use checked_add where leaving the range must be reported.
impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Price {
    type Output = Price;

    fn sub(self, rhs: Price) -> Price {
        Price(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Price {
    type Output = Price;

    fn neg(self) -> Price {
        Price(self.0.saturating_neg())
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

impl From<Price> for String {
    fn from(price: Price) -> String {
        format!("{:#}", price)
    }
}

// Menu files may write prices as "0.35", 0.35 or 4.
#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Text(String),
    Whole(i64),
    Decimal(f64),
}

impl TryFrom<PriceRepr> for Price {
    type Error = Error;

    fn try_from(repr: PriceRepr) -> Result<Self, Self::Error> {
        match repr {
            PriceRepr::Text(text) => text.parse(),
            PriceRepr::Whole(units) => units
                .checked_mul(100)
                .map(Price)
                .ok_or_else(|| Error::InvalidPrice(units.to_string()))?
                .limited(|| units.to_string()),
            PriceRepr::Decimal(value) => Price::from_f64(value),
        }
    }
}
