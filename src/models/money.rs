//! Money type for representing currency amounts
//!
//! Internally stores amounts in hundredths of the currency unit (i64) so
//! that summing many entries never drifts. On disk an amount is a plain
//! number of whole units (`35000`, `12.5`), which keeps stored records in
//! the same shape as the entry forms produce them.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::currency::Currency;

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use thuchi::models::Money;
    /// let amount = Money::from_minor(1050); // 10.50
    /// assert_eq!(amount.major(), 10);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use thuchi::models::Money;
    /// let amount = Money::from_major(35_000);
    /// assert_eq!(amount.minor(), 3_500_000);
    /// ```
    pub const fn from_major(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Whole units, or `None` if the value does not fit
    pub fn checked_from_major(units: u64) -> Option<Self> {
        i64::try_from(units).ok()?.checked_mul(100).map(Self)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional portion in hundredths (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount in whole units as a float
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// `self / whole`, or `0.0` when `whole` is zero
    pub fn ratio_of(&self, whole: Money) -> f64 {
        if whole.is_zero() {
            0.0
        } else {
            self.0 as f64 / whole.0 as f64
        }
    }

    /// Multiply by a count (e.g. a daily limit by a number of days)
    pub fn times(&self, count: usize) -> Self {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        Self(self.0.saturating_mul(count))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "150000", "12.50", "12.5", "-3"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, body) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let (whole, fraction) = body.split_once('.').unwrap_or((body, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        // Pad or truncate the fraction to 2 digits
        let hundredths: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };

        let minor = units
            .checked_mul(100)
            .and_then(|m| m.checked_add(hundredths))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -minor } else { minor }))
    }

    /// Format for display in the given currency
    pub fn format(&self, currency: Currency) -> String {
        currency.format(*self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = self.0.unsigned_abs() / 100;
        if self.minor_part() == 0 {
            write!(f, "{}{}", sign, units)
        } else {
            write!(f, "{}{}.{:02}", sign, units, self.minor_part())
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.minor_part() == 0 {
            serializer.serialize_i64(self.major())
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a number of currency units")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(100)
            .map(Money)
            .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Money::checked_from_major(v).ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        let minor = (v * 100.0).round();
        if !minor.is_finite() || minor.abs() >= i64::MAX as f64 {
            return Err(E::custom(format!("amount out of range: {}", v)));
        }
        Ok(Money(minor as i64))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
