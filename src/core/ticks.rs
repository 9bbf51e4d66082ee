//! Nice tick generation and tick label formatting for linear axes.

use smallvec::SmallVec;

pub type TickValues = SmallVec<[f64; 16]>;

/// Tick count used by both scatter axes.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Largest tick count an axis may request; larger requests are capped.
pub const MAX_TICK_COUNT: usize = 100;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// `Math.round` semantics: halves round towards positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Returns `(first_index, last_index, increment)` for an ascending domain.
///
/// A negative increment encodes a fractional step as `1 / -increment`, which
/// keeps the generated values exact multiples of the step.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let positive_inc = 10f64.powf(-power) / factor;
        i1 = round_half_up(start * positive_inc);
        i2 = round_half_up(stop * positive_inc);
        if i1 / positive_inc < start {
            i1 += 1.0;
        }
        if i2 / positive_inc > stop {
            i2 -= 1.0;
        }
        inc = -positive_inc;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = round_half_up(start / inc);
        i2 = round_half_up(stop / inc);
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Evenly spaced "nice" values (multiples of 1, 2 or 5 times a power of ten)
/// inside `[start, stop]`, in domain order.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> TickValues {
    let count = count.min(MAX_TICK_COUNT);
    let mut ticks = TickValues::new();
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return ticks;
    }
    if start == stop {
        ticks.push(start);
        return ticks;
    }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    if i1.is_nan() || i2.is_nan() || i2 < i1 {
        return ticks;
    }

    let n = (i2 - i1) as usize + 1;
    for i in 0..n {
        let index = if reverse { i2 - i as f64 } else { i1 + i as f64 };
        ticks.push(if inc < 0.0 { index / -inc } else { index * inc });
    }
    ticks
}

/// Signed spacing between the ticks `nice_ticks` would produce.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let count = count.min(MAX_TICK_COUNT);
    if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
        return 0.0;
    }
    let reverse = stop < start;
    let (_, _, inc) = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    let magnitude = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -magnitude } else { magnitude }
}

/// Fixed decimals needed so labels spaced by `step` stay distinct.
#[must_use]
pub fn precision_for_step(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    // Scientific notation gives the exact decimal exponent; `log10` can land
    // just below an integer for steps such as 0.1.
    let exponent = format!("{step:e}")
        .split_once('e')
        .and_then(|(_, exponent)| exponent.parse::<i32>().ok())
        .unwrap_or(0);
    if exponent >= 0 { 0 } else { exponent.unsigned_abs() as usize }
}

/// Formats a tick value with thousands grouping and step-derived precision.
#[must_use]
pub fn format_tick_label(value: f64, step: f64) -> String {
    format_grouped_fixed(value, precision_for_step(step))
}

/// Fixed-point formatting with `,` thousands separators. Negative zero and
/// values that round to zero are printed without a sign.
#[must_use]
pub fn format_grouped_fixed(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = format!("{:.*}", precision, value.abs());
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(digits.len() + integer.len() / 3 + 1);
    let is_zero = digits.chars().all(|ch| ch == '0' || ch == '.');
    if value < 0.0 && !is_zero {
        grouped.push('-');
    }
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::{MAX_TICK_COUNT, format_grouped_fixed, format_tick_label, nice_ticks, tick_step};

    #[test]
    fn ticks_use_five_step_for_thirty_three() {
        let ticks = nice_ticks(0.0, 33.0, 10);
        assert_eq!(ticks.as_slice(), &[0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0]);
        assert_eq!(tick_step(0.0, 33.0, 10), 5.0);
    }

    #[test]
    fn ticks_use_two_step_for_twenty_two() {
        let ticks = nice_ticks(0.0, 22.0, 10);
        assert_eq!(
            ticks.as_slice(),
            &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0]
        );
    }

    #[test]
    fn fractional_ticks_are_exact_multiples() {
        let ticks = nice_ticks(0.0, 1.1, 10);
        assert_eq!(ticks.len(), 12);
        assert_eq!(ticks[3], 0.3);
        assert_eq!(format_tick_label(ticks[3], tick_step(0.0, 1.1, 10)), "0.3");
    }

    #[test]
    fn reversed_domain_yields_descending_ticks() {
        let ticks = nice_ticks(10.0, 0.0, 5);
        assert_eq!(ticks.as_slice(), &[10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
        assert_eq!(tick_step(10.0, 0.0, 5), -2.0);
    }

    #[test]
    fn degenerate_and_empty_requests() {
        assert_eq!(nice_ticks(0.0, 0.0, 10).as_slice(), &[0.0]);
        assert!(nice_ticks(0.0, 10.0, 0).is_empty());
        assert!(nice_ticks(0.0, f64::NAN, 10).is_empty());
    }

    #[test]
    fn oversized_counts_are_capped() {
        let capped = nice_ticks(0.0, 1.0e6, MAX_TICK_COUNT);
        assert_eq!(nice_ticks(0.0, 1.0e6, 5_000_000).as_slice(), capped.as_slice());
        assert!(capped.len() <= 2 * MAX_TICK_COUNT + 1);
        assert_eq!(
            tick_step(0.0, 1.0e6, usize::MAX),
            tick_step(0.0, 1.0e6, MAX_TICK_COUNT)
        );
    }

    #[test]
    fn grouped_formatting() {
        assert_eq!(format_grouped_fixed(1234567.0, 0), "1,234,567");
        assert_eq!(format_grouped_fixed(-1500.26, 1), "-1,500.3");
        assert_eq!(format_grouped_fixed(-0.0, 1), "0.0");
        assert_eq!(format_grouped_fixed(-0.01, 1), "0.0");
        assert_eq!(format_grouped_fixed(999.0, 0), "999");
    }
}
