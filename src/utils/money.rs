// Conversions between major and minor currency units

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Price in major units to integer minor units (`19.99` -> `1999`).
///
/// Sub-cent remainders round half away from zero. `None` for negative
/// prices or values that do not fit in an `i64`.
pub fn to_minor_units(price: Decimal) -> Option<i64> {
    if price.is_sign_negative() && !price.is_zero() {
        return None;
    }
    price
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

pub fn format_minor_units(amount: i64, currency: &str) -> String {
    let major = Decimal::new(amount, 2);
    format!("{major} {currency}")
}
