//! Size reporting helpers shared by the single and batch compressors.

use crate::constants::{SIZE_FACTOR, SIZE_UNITS};

/// Scale a byte count to a human-readable binary-unit string.
///
/// Walks the 1024-based unit sequence and stops at the first unit where the
/// scaled value drops below 1024, e.g. `1253656` => `"1.20MB"` and
/// `1253656678` => `"1.17GB"`. Values that exhaust the sequence are rendered
/// with the terminal "Y" unit.
pub fn get_size_format(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in SIZE_UNITS {
        if size < SIZE_FACTOR {
            return format!("{:.2}{}B", size, unit);
        }
        size /= SIZE_FACTOR;
    }
    format!("{:.2}YB", size)
}

/// Percentage size change from `original_size` to `new_size`.
///
/// Negative when the file shrank, positive when it grew. Callers rely on this
/// sign convention; do not flip it.
pub fn size_change_percent(original_size: u64, new_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    (new_size as f64 - original_size as f64) / original_size as f64 * 100.0
}
