//! Domain Services
//!
//! Pure aggregate computation.

/// `round(100 * completed / total)`, half-up, in integer arithmetic
///
/// Returns 0 for an empty course and never exceeds 100.
pub fn progress_percentage(completed: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }

    let completed = completed.min(total);
    ((200 * completed + total) / (2 * total)) as u8
}
