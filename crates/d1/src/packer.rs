//! First-Fit-Decreasing bar packer.

use crate::bar::Bar;
use std::time::Instant;
use stockcut_core::normalize::normalize_1d;
use stockcut_core::{
    BarStock, Packer, PackingConfig, PieceSpec1D, PlacementResult, PlacementWarning,
    ProgressCallback, ProgressInfo, Result, Segment,
};

/// Result of a bar packing run.
pub type BarPlan = PlacementResult<Bar>;

/// First-Fit-Decreasing packer with kerf accounting.
///
/// Each segment goes into the first bar, in creation order, with enough
/// length left for the segment plus one kerf (no kerf for the first cut of
/// a bar). Otherwise a new bar is opened.
#[derive(Debug, Clone, Default)]
pub struct LinearPacker {
    config: PackingConfig,
}

impl LinearPacker {
    /// Creates a packer with the given configuration.
    pub fn new(config: PackingConfig) -> Self {
        Self { config }
    }

    pub fn default_config() -> Self {
        Self::new(PackingConfig::default())
    }

    pub fn config(&self) -> &PackingConfig {
        &self.config
    }

    /// Packs segments that were already normalized.
    ///
    /// Segments are taken in the given order; sort them longest first for
    /// FFD behaviour.
    pub fn pack_segments(&self, segments: Vec<Segment>, stock: &BarStock) -> BarPlan {
        self.pack_inner(segments, stock, None)
    }

    fn pack_inner(
        &self,
        segments: Vec<Segment>,
        stock: &BarStock,
        callback: Option<&ProgressCallback>,
    ) -> BarPlan {
        let start = Instant::now();
        let mut plan = BarPlan::new();
        let total = segments.len();
        let tolerance = self.config.tolerance;

        if let Some(cb) = callback {
            cb(ProgressInfo::new().with_phase("FFD").with_items(0, total));
        }

        for (processed, segment) in segments.into_iter().enumerate() {
            if let Some(bar) = plan
                .bins
                .iter_mut()
                .find(|bar| bar.fits(segment.length, tolerance))
            {
                bar.push(segment);
            } else if segment.length <= stock.length + tolerance {
                let mut bar = Bar::new(stock, self.config.kerf);
                log::debug!("opened bar {} for segment {}", plan.bins.len() + 1, segment.label);
                bar.push(segment);
                plan.bins.push(bar);
            } else {
                let warning = PlacementWarning::oversized_segment(
                    segment.id,
                    segment.spec_id,
                    segment.label,
                    segment.length,
                    stock.length,
                );
                log::warn!("{}", warning.message);
                plan.warnings.push(warning);
            }

            if let Some(cb) = callback {
                cb(ProgressInfo::new()
                    .with_phase("FFD")
                    .with_items(processed + 1, total)
                    .with_bins(plan.bins.len())
                    .with_elapsed(start.elapsed().as_millis() as u64));
            }
        }

        plan.computation_time_ms = start.elapsed().as_millis() as u64;

        if let Some(cb) = callback {
            cb(ProgressInfo::new()
                .with_phase("Complete")
                .with_items(total, total)
                .with_bins(plan.bins.len())
                .with_elapsed(plan.computation_time_ms)
                .finished());
        }

        plan
    }
}

impl Packer for LinearPacker {
    type Spec = PieceSpec1D;
    type Stock = BarStock;
    type Bin = Bar;

    fn pack(&self, specs: &[PieceSpec1D], stock: &BarStock) -> Result<BarPlan> {
        let segments = normalize_1d(specs, stock, &self.config)?;
        Ok(self.pack_inner(segments, stock, None))
    }

    fn pack_with_progress(
        &self,
        specs: &[PieceSpec1D],
        stock: &BarStock,
        callback: ProgressCallback,
    ) -> Result<BarPlan> {
        let segments = normalize_1d(specs, stock, &self.config)?;
        Ok(self.pack_inner(segments, stock, Some(&callback)))
    }
}
