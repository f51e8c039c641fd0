//! Money is kept as whole cents. On the wire it is a JSON number (or numeric
//! string) with two decimals at most.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ServiceError;

/// Largest storable amount, 99,999,999.99, the range of a `DECIMAL(10, 2)`.
pub const MAX_AMOUNT_CENTS: i64 = 9_999_999_999;

/// Converts a decimal amount to cents, rounding half away from zero.
/// `None` when the result doesn't fit an `i64`.
pub fn to_cents(value: Decimal) -> Option<i64> {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(Decimal::ONE_HUNDRED)?
        .to_i64()
}

pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Rejects negative amounts and amounts above [`MAX_AMOUNT_CENTS`].
pub fn check_amount(cents: i64, field: &str) -> Result<(), ServiceError> {
    if cents < 0 {
        return Err(ServiceError::Validation(format!("{} can't be negative", field)));
    }
    if cents > MAX_AMOUNT_CENTS {
        return Err(ServiceError::Validation(format!(
            "{} can't exceed 99999999.99",
            field
        )));
    }

    Ok(())
}

/// Serde adapter for `i64` cent fields.
pub mod cents {
    use rust_decimal::Decimal;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(cents: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(super::from_cents(*cents))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        super::to_cents(value).ok_or_else(|| D::Error::custom("amount is out of range"))
    }
}

/// Serializer for sums of cent amounts, which may exceed `i64`.
pub fn serialize_wide_cents<S: serde::Serializer>(
    cents: &i128,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(*cents as f64 / 100.0)
}
