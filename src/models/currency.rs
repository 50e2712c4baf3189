//! Display currencies
//!
//! The ledger never converts between currencies; the selected currency only
//! controls how amounts are rendered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Vnd,
    Usd,
    Idr,
    Krw,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Vnd, Currency::Usd, Currency::Idr, Currency::Krw];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Vnd => "VND",
            Self::Usd => "USD",
            Self::Idr => "IDR",
            Self::Krw => "KRW",
        }
    }

    /// Number of fraction digits shown
    pub fn fraction_digits(&self) -> u32 {
        match self {
            Self::Usd => 2,
            Self::Vnd | Self::Idr | Self::Krw => 0,
        }
    }

    fn group_separator(&self) -> char {
        match self {
            Self::Vnd | Self::Idr => '.',
            Self::Usd | Self::Krw => ',',
        }
    }

    /// Render an amount, e.g. `35.000 ₫`, `$12.50`, `Rp 35.000`, `₩35,000`
    pub fn format(&self, amount: Money) -> String {
        let abs = amount.minor().unsigned_abs();
        let body = if self.fraction_digits() == 0 {
            // Round half up to whole units
            group_thousands((abs + 50) / 100, self.group_separator())
        } else {
            format!(
                "{}.{:02}",
                group_thousands(abs / 100, self.group_separator()),
                abs % 100
            )
        };

        let rendered = match self {
            Self::Vnd => format!("{} ₫", body),
            Self::Usd => format!("${}", body),
            Self::Idr => format!("Rp {}", body),
            Self::Krw => format!("₩{}", body),
        };

        if amount.is_negative() && abs != 0 {
            format!("-{}", rendered)
        } else {
            rendered
        }
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown currency: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vnd() {
        assert_eq!(Currency::Vnd.format(Money::from_major(35_000)), "35.000 ₫");
        assert_eq!(Currency::Vnd.format(Money::from_major(15_000_000)), "15.000.000 ₫");
        assert_eq!(Currency::Vnd.format(Money::from_major(-920)), "-920 ₫");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(Currency::Usd.format(Money::from_minor(123_450)), "$1,234.50");
        assert_eq!(Currency::Usd.format(Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_other() {
        assert_eq!(Currency::Idr.format(Money::from_major(5_000)), "Rp 5.000");
        assert_eq!(Currency::Krw.format(Money::from_major(1_000_000)), "₩1,000,000");
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("VND".parse::<Currency>().unwrap(), Currency::Vnd);
        assert!("EUR".parse::<Currency>().is_err());
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Currency::Krw).unwrap(), "\"KRW\"");
        let back: Currency = serde_json::from_str("\"IDR\"").unwrap();
        assert_eq!(back, Currency::Idr);
    }
}
