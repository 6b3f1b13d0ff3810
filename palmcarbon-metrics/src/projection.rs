//! Multi-year Projections
//!
//! Two deliberately distinct projection models sit side by side here:
//!
//! - [`calculate_growth_projection`] produces the year-by-year forward
//!   sequence shown on the dashboard chart, compounding at the optimistic
//!   5 %/yr default ([`DEFAULT_GROWTH_RATE`]).
//! - [`calculate_cumulative_sequestration`] produces the single multi-year
//!   summary total quoted in reports, compounding at the conservative
//!   2 %/yr ([`CUMULATIVE_GROWTH_RATE`]).
//!
//! The differing assumptions are intentional and documented; do not
//! consolidate the two without sign-off from the methodology owner.

use palmcarbon_core::values::{round2, FloatValue};

/// Default year-on-year growth rate for forward projections (5 %/yr).
pub const DEFAULT_GROWTH_RATE: FloatValue = 0.05;

/// Year-on-year growth rate for cumulative summary totals (2 %/yr).
pub const CUMULATIVE_GROWTH_RATE: FloatValue = 0.02;

/// Project an annual figure forward over `years`, compounding at
/// `growth_rate` per year.
///
/// Returns an eagerly computed sequence of `years` values. The first entry
/// is the current figure itself; each subsequent entry grows by
/// `1 + growth_rate`. Every entry is rounded to two decimal places, but the
/// compounding itself runs on the unrounded accumulator so rounding error
/// does not build up.
///
/// `calculate_growth_projection(100.0, 3, 0.05)` yields
/// `[100.0, 105.0, 110.25]`.
pub fn calculate_growth_projection(
    current: FloatValue,
    years: usize,
    growth_rate: FloatValue,
) -> Vec<FloatValue> {
    let mut values = Vec::with_capacity(years);
    let mut value = current;
    for _ in 0..years {
        values.push(round2(value));
        value *= 1.0 + growth_rate;
    }
    values
}

/// Total CO2 sequestered over `years`, starting from `annual_rate` and
/// compounding at the conservative [`CUMULATIVE_GROWTH_RATE`].
///
/// Returns a single rounded total. This is the figure used for multi-year
/// summary lines, not the forward chart; see the module docs for why the
/// compounding assumption differs from [`calculate_growth_projection`].
pub fn calculate_cumulative_sequestration(annual_rate: FloatValue, years: usize) -> FloatValue {
    calculate_cumulative_sequestration_with(annual_rate, years, CUMULATIVE_GROWTH_RATE)
}

/// Cumulative total with an explicit compounding rate, for deployments that
/// override [`crate::parameters::ProjectionParameters`].
pub fn calculate_cumulative_sequestration_with(
    annual_rate: FloatValue,
    years: usize,
    growth_rate: FloatValue,
) -> FloatValue {
    let mut total = 0.0;
    let mut annual = annual_rate;
    for _ in 0..years {
        total += annual;
        annual *= 1.0 + growth_rate;
    }
    round2(total)
}
