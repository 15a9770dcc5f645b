//! Packer trait and configuration.

use crate::result::PlacementResult;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default tolerance for floating point comparisons on stock dimensions.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Immutable configuration passed into every packer call.
///
/// `spacing` is the gap kept between neighbouring sheet pieces (2D);
/// `kerf` is the material lost to the saw blade at each internal cut (1D).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PackingConfig {
    /// Spacing between sheet pieces.
    pub spacing: f64,

    /// Saw kerf per internal bar cut.
    pub kerf: f64,

    /// Tolerance for length conservation checks and full-width detection.
    pub tolerance: f64,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            spacing: 0.0,
            kerf: 0.0,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl PackingConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the spacing between sheet pieces.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the saw kerf.
    pub fn with_kerf(mut self, kerf: f64) -> Self {
        self.kerf = kerf;
        self
    }

    /// Sets the comparison tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Rejects negative or non-finite spacing, kerf and tolerance.
    pub fn validate(&self) -> Result<()> {
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(Error::ConfigError(format!(
                "spacing must be zero or positive, got {}",
                self.spacing
            )));
        }
        if !self.kerf.is_finite() || self.kerf < 0.0 {
            return Err(Error::ConfigError(format!(
                "kerf must be zero or positive, got {}",
                self.kerf
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::ConfigError(format!(
                "tolerance must be zero or positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Progress callback for long-running packs.
pub type ProgressCallback = Box<dyn Fn(ProgressInfo) + Send + Sync>;

/// Progress information reported while packing.
#[derive(Debug, Clone, Default)]
pub struct ProgressInfo {
    /// Number of pieces processed so far (placed or dropped).
    pub items_processed: usize,
    /// Total number of pieces.
    pub total_items: usize,
    /// Number of bins opened so far.
    pub bins_open: usize,
    /// Elapsed time in milliseconds.
    pub elapsed_ms: u64,
    /// Current phase description.
    pub phase: String,
    /// Whether the packer is still running.
    pub running: bool,
}

impl ProgressInfo {
    /// Creates a new progress info with default values.
    pub fn new() -> Self {
        Self {
            running: true,
            ..Default::default()
        }
    }

    /// Sets the processed/total item counts.
    pub fn with_items(mut self, processed: usize, total: usize) -> Self {
        self.items_processed = processed;
        self.total_items = total;
        self
    }

    /// Sets the number of open bins.
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins_open = bins;
        self
    }

    /// Sets the elapsed time.
    pub fn with_elapsed(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }

    /// Sets the phase description.
    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = phase.into();
        self
    }

    /// Marks the packer as finished.
    pub fn finished(mut self) -> Self {
        self.running = false;
        self
    }

    /// Fraction of items processed (0.0 to 1.0).
    pub fn progress_fraction(&self) -> f64 {
        if self.total_items > 0 {
            self.items_processed as f64 / self.total_items as f64
        } else {
            0.0
        }
    }
}

/// Trait for cutting-stock packers.
///
/// Packers are stateless across invocations: every call validates its
/// input, builds a fresh [`PlacementResult`] and discards nothing but its
/// own scratch state.
pub trait Packer {
    /// The piece spec type this packer consumes.
    type Spec;
    /// The stock type this packer fills.
    type Stock;
    /// The bin type produced (sheet or bar).
    type Bin;

    /// Validates, normalizes and packs the given specs.
    fn pack(&self, specs: &[Self::Spec], stock: &Self::Stock)
        -> Result<PlacementResult<Self::Bin>>;

    /// Packs with a progress callback.
    fn pack_with_progress(
        &self,
        specs: &[Self::Spec],
        stock: &Self::Stock,
        callback: ProgressCallback,
    ) -> Result<PlacementResult<Self::Bin>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PackingConfig::default();
        assert_eq!(config.spacing, 0.0);
        assert_eq!(config.kerf, 0.0);
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = PackingConfig::new().with_spacing(5.0).with_kerf(3.0);
        assert_eq!(config.spacing, 5.0);
        assert_eq!(config.kerf, 3.0);
    }

    #[test]
    fn test_negative_kerf_rejected() {
        let err = PackingConfig::new().with_kerf(-1.0).validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_negative_spacing_rejected() {
        assert!(PackingConfig::new().with_spacing(-0.5).validate().is_err());
        assert!(PackingConfig::new().with_spacing(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_progress_fraction() {
        let info = ProgressInfo::new().with_items(5, 20);
        assert!(info.running);
        assert!((info.progress_fraction() - 0.25).abs() < 1e-12);
        assert_eq!(ProgressInfo::new().progress_fraction(), 0.0);
        assert!(!ProgressInfo::new().finished().running);
    }
}
