//! Shared primitive types used across the entire simulation.

/// A simulation step. One month = one `advance()` call.
pub type Month = u64;

/// The canonical run identifier.
pub type RunId = String;

/// Simulated months per year of age.
pub const MONTHS_PER_YEAR: f64 = 12.0;
