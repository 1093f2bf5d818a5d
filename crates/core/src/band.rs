//! Quantizing continuous values into ordered buckets.

use crate::error::GeometryError;
use crate::log::debug;
use crate::random::RandomSource;

/// Picks the item whose position in `items` matches where `value` sits
/// between `lower` and `upper`.
///
/// The value is mapped linearly onto `[0, items.len() - 1]` and rounded half
/// to even. With `fuzz`, one draw nudges the index down (draw ≤ 0.25) or up
/// (draw ≥ 0.75). Out-of-range indices are clamped to the first or last item.
///
/// ```
/// use geometriq_core::band::band;
///
/// let buckets = [0, 1, 2, 3, 4];
/// assert_eq!(band(&buckets, 50.0, 100.0, 0.0, None).unwrap(), &2);
/// assert_eq!(band(&buckets, 150.0, 100.0, 0.0, None).unwrap(), &4);
/// ```
pub fn band<'a, T>(
    items: &'a [T],
    value: f64,
    upper: f64,
    lower: f64,
    fuzz: Option<&mut dyn RandomSource>,
) -> Result<&'a T, GeometryError> {
    let index = band_index(items.len(), value, upper, lower, fuzz)?;
    Ok(&items[index])
}

/// The index [`band`] would pick from a sequence of `len` items.
pub fn band_index(
    len: usize,
    value: f64,
    upper: f64,
    lower: f64,
    fuzz: Option<&mut dyn RandomSource>,
) -> Result<usize, GeometryError> {
    if len == 0 {
        return Err(GeometryError::EmptyBand);
    }
    let percentile = percentile(value, lower, upper)?;
    let last = (len - 1) as i64;
    // One step of headroom either side so a fuzz nudge still lands back in range.
    let position = (percentile * last as f64).clamp(-1.0, last as f64 + 1.0);
    let mut index = position.round_ties_even() as i64;
    if let Some(rng) = fuzz {
        let sway = rng.next_f64();
        if sway <= 0.25 {
            index -= 1;
        } else if sway >= 0.75 {
            index += 1;
        }
        debug!(sway, index, "fuzzed band index");
    }
    Ok(index.clamp(0, last) as usize)
}

/// Maps `value` from `[in_start, in_stop]` onto `[out_start, out_stop]`.
///
/// Values outside the input range extrapolate.
pub fn remap(
    value: f64,
    in_start: f64,
    in_stop: f64,
    out_start: f64,
    out_stop: f64,
) -> Result<f64, GeometryError> {
    let t = percentile(value, in_start, in_stop)?;
    Ok(out_start + (out_stop - out_start) * t)
}

fn percentile(value: f64, lower: f64, upper: f64) -> Result<f64, GeometryError> {
    finite("value", value)?;
    finite("lower bound", lower)?;
    finite("upper bound", upper)?;
    if upper == lower {
        return Err(GeometryError::DegenerateRange { bound: upper });
    }
    Ok((value - lower) / (upper - lower))
}

fn finite(what: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { what, value })
    }
}
