//! # stockcut core
//!
//! Shared types and pure functions for the stockcut cutting-stock planner.
//!
//! This crate provides the pieces used by both the 2D sheet packer
//! (`stockcut-d2`) and the 1D bar packer (`stockcut-d1`):
//!
//! - **Input**: [`PieceSpec2D`], [`PieceSpec1D`], [`SheetStock`], [`BarStock`]
//! - **Configuration**: [`PackingConfig`] - immutable, passed into every pack
//! - **Normalization**: [`normalize_2d`], [`normalize_1d`] - validation,
//!   quantity expansion and packing order
//! - **Geometry**: [`Rect`], [`collides`], [`out_of_bounds`] - the layout
//!   predicates shared by the packer and the layout editor
//! - **Results**: [`PlacementResult`], [`PlacementWarning`]
//! - **Statistics**: [`summarize_sheets`], [`summarize_bars`]
//! - **Background runs**: [`PlanTask`]
//!
//! ## Configuration
//!
//! ```rust
//! use stockcut_core::PackingConfig;
//!
//! let config = PackingConfig::new().with_spacing(4.0).with_kerf(3.2);
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod aggregate;
pub mod error;
pub mod geometry;
pub mod normalize;
pub mod piece;
pub mod result;
pub mod solver;
pub mod stock;
pub mod task;

// Re-exports
pub use aggregate::{
    area_utilization_percent, summarize_bars, summarize_sheets, utilization_percent, AreaBin,
    BarSummary, LengthBin, SheetSummary,
};
pub use error::{Error, Result};
pub use geometry::{collides, out_of_bounds, Rect};
pub use normalize::{normalize_1d, normalize_2d};
pub use piece::{Orientation, Piece, PieceId, PieceSpec1D, PieceSpec2D, Segment, SpecId};
pub use result::{Bin, PlacementResult, PlacementWarning};
pub use solver::{Packer, PackingConfig, ProgressCallback, ProgressInfo, DEFAULT_TOLERANCE};
pub use stock::{BarStock, SheetStock};
pub use task::PlanTask;
