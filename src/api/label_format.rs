use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ScatterError, ScatterResult};

pub const TOOLTIP_DATE_FORMAT: &str = "%A, %B %d, %Y";
pub const LEGEND_TICK_FORMAT: &str = "%b";

/// Months labelled under the legend gradient.
pub(super) const LEGEND_TICK_MONTHS: [u32; 3] = [4, 7, 10];

/// Year used to turn tick months into dates; only month names are printed.
const LEGEND_TICK_YEAR: i32 = 2000;

/// Formats a tooltip date as e.g. `Tuesday, January 02, 2018`.
#[must_use]
pub fn format_tooltip_date(date: NaiveDate) -> String {
    date.format(TOOLTIP_DATE_FORMAT).to_string()
}

/// Formats a temperature with exactly one decimal, rounding halves toward
/// positive infinity (`-3.25` reads `-3.2`, `48.25` reads `48.3`).
pub fn format_temperature(value: f64) -> ScatterResult<String> {
    let decimal = Decimal::from_f64(value).ok_or_else(|| {
        ScatterError::InvalidData(format!("temperature {value} is not representable"))
    })?;
    let strategy = if decimal.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    let mut rounded = decimal.round_dp_with_strategy(1, strategy);
    rounded.rescale(1);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    Ok(rounded.to_string())
}

/// Axis tick value: integers without a fractional part, others as-is.
#[must_use]
pub fn format_axis_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Abbreviated month name for a legend tick, `None` for months outside 1..=12.
#[must_use]
pub fn format_legend_tick(month: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(LEGEND_TICK_YEAR, month, 1)
        .map(|date| date.format(LEGEND_TICK_FORMAT).to_string())
}
