use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::str::FromStr;

/// Largest exponent `Decimal` can absorb without losing the value entirely.
const MAX_EXPONENT: u32 = 28;

/// Result of reading a number out of a page field.
///
/// A field the user left empty or typed garbage into is not an error: it is an
/// `Invalid` figure that flows through the arithmetic and shows up on screen,
/// the same way a NaN would. Any operation with an `Invalid` operand is
/// `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numeric<T> {
    Valid(T),
    Invalid,
}

impl<T> Numeric<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Numeric::Valid(_))
    }

    pub fn valid(self) -> Option<T> {
        match self {
            Numeric::Valid(value) => Some(value),
            Numeric::Invalid => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Numeric<U> {
        match self {
            Numeric::Valid(value) => Numeric::Valid(f(value)),
            Numeric::Invalid => Numeric::Invalid,
        }
    }

    /// Combines two figures. `f` returning `None` (overflow) also yields `Invalid`.
    pub fn combine<U, V>(
        self,
        other: Numeric<U>,
        f: impl FnOnce(T, U) -> Option<V>,
    ) -> Numeric<V> {
        match (self, other) {
            (Numeric::Valid(a), Numeric::Valid(b)) => f(a, b).into(),
            _ => Numeric::Invalid,
        }
    }
}

impl<T> From<Option<T>> for Numeric<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Numeric::Valid(value),
            None => Numeric::Invalid,
        }
    }
}

/// Serializes like an `Option`: invalid figures become `null`.
impl<T: Serialize> Serialize for Numeric<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Numeric::Valid(value) => serializer.serialize_some(value),
            Numeric::Invalid => serializer.serialize_none(),
        }
    }
}

/// Reads the longest leading decimal number from `raw`, ignoring leading
/// whitespace and any trailing junk (`"12.5kg"` reads as `12.5`).
///
/// Accepts an optional sign, digits with an optional fractional part, and an
/// optional exponent. Values outside the range of `Decimal` are `Invalid`.
pub fn parse_decimal(raw: &str) -> Numeric<Decimal> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &s[frac_start..end];
        if !int_digits.is_empty() || !frac_digits.is_empty() {
            pos = end;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return Numeric::Invalid;
    }

    let mut exponent: i32 = 0;
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        let exp_negative = match bytes.get(end) {
            Some(b'-') => {
                end += 1;
                true
            }
            Some(b'+') => {
                end += 1;
                false
            }
            _ => false,
        };
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        // A bare "e" without digits is trailing junk, not an exponent.
        if end > digits_start {
            match s[digits_start..end].parse::<i32>() {
                Ok(value) if exp_negative => exponent = -value,
                Ok(value) => exponent = value,
                Err(_) => return Numeric::Invalid,
            }
        }
    }

    let int_part = if int_digits.is_empty() { "0" } else { int_digits };
    let mantissa = if frac_digits.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_digits}")
    };

    let Ok(mut value) = Decimal::from_str(&mantissa) else {
        return Numeric::Invalid;
    };
    if exponent != 0 {
        let magnitude = exponent.unsigned_abs();
        if magnitude > MAX_EXPONENT {
            return Numeric::Invalid;
        }
        let Ok(power) = Decimal::try_from_i128_with_scale(10_i128.pow(magnitude), 0) else {
            return Numeric::Invalid;
        };
        let scaled = if exponent > 0 {
            value.checked_mul(power)
        } else {
            value.checked_div(power)
        };
        match scaled {
            Some(scaled) => value = scaled,
            None => return Numeric::Invalid,
        }
    }

    if negative {
        value.set_sign_negative(true);
    }
    Numeric::Valid(value)
}

/// Reads the longest leading integer from `raw`. A fractional part is cut off
/// (`"3.7"` reads as `3`).
pub fn parse_integer(raw: &str) -> Numeric<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = match bytes.first() {
        Some(b'-') | Some(b'+') => 1,
        _ => 0,
    };
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return Numeric::Invalid;
    }
    s[..end].parse::<i64>().ok().into()
}
