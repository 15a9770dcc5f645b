//! # stockcut 1D
//!
//! Linear cutting for the stockcut planner: segments are cut from stock
//! bars of fixed length with First-Fit-Decreasing, accounting for the
//! material the saw removes at every internal cut.
//!
//! ## Quick Start
//!
//! ```rust
//! use stockcut_d1::{LinearPacker, LengthBin};
//! use stockcut_core::{BarStock, Packer, PackingConfig, PieceSpec1D};
//!
//! let specs = vec![
//!     PieceSpec1D::new(600.0),
//!     PieceSpec1D::new(500.0),
//!     PieceSpec1D::new(300.0),
//! ];
//! let packer = LinearPacker::new(PackingConfig::new().with_kerf(10.0));
//! let plan = packer.pack(&specs, &BarStock::new(1000.0)).unwrap();
//!
//! assert_eq!(plan.bin_count(), 2);
//! assert_eq!(plan.bins[0].cut_lengths(), vec![600.0, 300.0]);
//! assert_eq!(plan.bins[0].remainder(), 90.0);
//! println!("efficiency: {:.2}%", plan.bar_summary().efficiency_percent);
//! ```

pub mod bar;
pub mod packer;

pub use bar::{Bar, Cut};
pub use packer::{BarPlan, LinearPacker};

// Re-export core types
pub use stockcut_core::{
    BarStock, Error, LengthBin, Packer, PackingConfig, PieceId, PieceSpec1D, Result,
};
