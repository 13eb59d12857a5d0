//! Duration scheduling: stretch nominal per-slide durations so the deck spans
//! exactly the audio track's length.

use crate::foundation::error::{DeckcastError, DeckcastResult};

/// Scale `nominal` durations proportionally so they sum to `target_total`.
///
/// The output preserves pairwise ratios of the input (`out[i] / out[j] ==
/// nominal[i] / nominal[j]`) and sums to `target_total` within floating-point
/// tolerance. Slides keep their input order.
///
/// A deck whose nominal durations sum to zero cannot be scheduled; that is a
/// [`DeckcastError::Scheduling`] rather than a NaN/infinite schedule.
pub fn schedule(nominal: &[f64], target_total: f64) -> DeckcastResult<Vec<f64>> {
    if nominal.is_empty() {
        return Err(DeckcastError::scheduling("deck has no slides to schedule"));
    }
    if nominal.iter().any(|d| !d.is_finite() || *d < 0.0) {
        return Err(DeckcastError::scheduling(
            "nominal durations must be finite and non-negative",
        ));
    }
    if !target_total.is_finite() || target_total <= 0.0 {
        return Err(DeckcastError::scheduling(format!(
            "target duration must be positive, got {target_total}"
        )));
    }

    let nominal_total: f64 = nominal.iter().sum();
    if nominal_total <= 0.0 {
        return Err(DeckcastError::scheduling(
            "total nominal duration must be positive",
        ));
    }

    let multiplier = target_total / nominal_total;
    Ok(nominal.iter().map(|d| d * multiplier).collect())
}

#[cfg(test)]
#[path = "../tests/unit/schedule.rs"]
mod tests;
