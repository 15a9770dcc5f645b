//! # stockcut
//!
//! Cutting-stock planning for sheets and bars.
//!
//! This crate provides:
//! - **Sheet cutting (2D)**: shelf packing of rectangular pieces onto stock
//!   sheets, plus an interactive layout editor
//! - **Bar cutting (1D)**: First-Fit-Decreasing cutting of segments from
//!   stock bars, with kerf accounting
//!
//! ## Quick Start
//!
//! ```rust
//! use stockcut::d2::ShelfPacker;
//! use stockcut::{Packer, PackingConfig, PieceSpec2D, SheetStock};
//!
//! let packer = ShelfPacker::new(PackingConfig::new().with_spacing(4.0));
//! let plan = packer
//!     .pack(&[PieceSpec2D::new(600.0, 400.0).with_quantity(6)], &SheetStock::new(2750.0, 1850.0))
//!     .unwrap();
//! println!("{} sheets at {:.1}%", plan.bin_count(), plan.sheet_summary().utilization_percent);
//! ```
//!
//! ## Feature Flags
//!
//! - `d2` (default): sheet packing and layout editing
//! - `d1` (default): bar packing
//! - `serde`: Serialization support

/// Shared types, normalization, geometry predicates and statistics.
pub use stockcut_core as core;

/// Sheet packing and layout editing.
#[cfg(feature = "d2")]
pub use stockcut_d2 as d2;

/// Bar packing.
#[cfg(feature = "d1")]
pub use stockcut_d1 as d1;

// Re-export commonly used types at root level
pub use stockcut_core::{
    BarStock, BarSummary, Error, Packer, PackingConfig, PieceId, PieceSpec1D, PieceSpec2D,
    PlacementResult, PlacementWarning, PlanTask, Result, SheetStock, SheetSummary,
};
