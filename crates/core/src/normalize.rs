//! Input normalization: validation, quantity expansion and packing order.
//!
//! Both packers are greedy, so the order in which units arrive decides the
//! layout. The orders produced here are:
//!
//! - **2D**: pieces whose width or height equals the sheet width first (they
//!   claim whole shelves), then by longest side, descending.
//! - **1D**: by length, descending (the First-Fit-Decreasing precondition).
//!
//! Both sorts are stable, so equal keys keep their input order.

use crate::piece::{Piece, PieceId, PieceSpec1D, PieceSpec2D, Segment, SpecId};
use crate::solver::PackingConfig;
use crate::stock::{BarStock, SheetStock};
use crate::{Error, Result};
use std::cmp::Ordering;

/// Validates the sheet specs and expands them into sorted piece units.
pub fn normalize_2d(
    specs: &[PieceSpec2D],
    stock: &SheetStock,
    config: &PackingConfig,
) -> Result<Vec<Piece>> {
    config.validate()?;
    stock.validate()?;
    for (index, spec) in specs.iter().enumerate() {
        spec.validate(index)?;
    }

    let mut pieces = expand_2d(specs)?;
    sort_for_shelves(&mut pieces, stock.width, config.tolerance);

    log::debug!(
        "normalized {} sheet specs into {} pieces",
        specs.len(),
        pieces.len()
    );
    Ok(pieces)
}

/// Validates the bar specs and expands them into segments, longest first.
pub fn normalize_1d(
    specs: &[PieceSpec1D],
    stock: &BarStock,
    config: &PackingConfig,
) -> Result<Vec<Segment>> {
    config.validate()?;
    stock.validate()?;
    for (index, spec) in specs.iter().enumerate() {
        spec.validate(index)?;
    }

    let mut segments = expand_1d(specs)?;
    sort_decreasing(&mut segments);

    log::debug!(
        "normalized {} bar specs into {} segments",
        specs.len(),
        segments.len()
    );
    Ok(segments)
}

/// Returns an empty vector with room for every unit, or an error naming
/// the spec whose quantity cannot be held.
fn reserve_units<T>(quantities: impl Iterator<Item = usize>) -> Result<Vec<T>> {
    let mut total = 0usize;
    let mut largest = (0, 0);
    for (index, quantity) in quantities.enumerate() {
        total = total
            .checked_add(quantity)
            .ok_or_else(|| Error::piece(index, "total quantity overflows"))?;
        if quantity > largest.1 {
            largest = (index, quantity);
        }
    }
    let mut units = Vec::new();
    units
        .try_reserve_exact(total)
        .map_err(|_| Error::piece(largest.0, format!("cannot allocate {} units", total)))?;
    Ok(units)
}

/// Expands quantities in input order; ids are assigned sequentially.
fn expand_2d(specs: &[PieceSpec2D]) -> Result<Vec<Piece>> {
    let mut pieces = reserve_units(specs.iter().map(|s| s.quantity))?;
    for (index, spec) in specs.iter().enumerate() {
        let spec_id = SpecId(index);
        let label = spec.label.clone().unwrap_or_else(|| spec_id.to_string());
        for _ in 0..spec.quantity {
            pieces.push(Piece {
                id: PieceId(pieces.len()),
                spec_id,
                width: spec.width,
                height: spec.height,
                label: label.clone(),
            });
        }
    }
    Ok(pieces)
}

fn expand_1d(specs: &[PieceSpec1D]) -> Result<Vec<Segment>> {
    let mut segments = reserve_units(specs.iter().map(|s| s.quantity))?;
    for (index, spec) in specs.iter().enumerate() {
        let spec_id = SpecId(index);
        let label = spec.label.clone().unwrap_or_else(|| spec_id.to_string());
        for _ in 0..spec.quantity {
            segments.push(Segment {
                id: PieceId(segments.len()),
                spec_id,
                length: spec.length,
                label: label.clone(),
            });
        }
    }
    Ok(segments)
}

/// Returns true if either side of the piece spans the full sheet width.
pub fn is_full_width(piece: &Piece, sheet_width: f64, tolerance: f64) -> bool {
    (piece.width - sheet_width).abs() <= tolerance || (piece.height - sheet_width).abs() <= tolerance
}

/// Sorts pieces into shelf-packing order (stable).
pub fn sort_for_shelves(pieces: &mut [Piece], sheet_width: f64, tolerance: f64) {
    pieces.sort_by(|a, b| {
        let a_full = is_full_width(a, sheet_width, tolerance);
        let b_full = is_full_width(b, sheet_width, tolerance);
        match (a_full, b_full) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => {
                let a_long = a.width.max(a.height);
                let b_long = b.width.max(b.height);
                b_long.total_cmp(&a_long)
            }
        }
    });
}

/// Sorts segments by length, descending (stable).
pub fn sort_decreasing(segments: &mut [Segment]) {
    segments.sort_by(|a, b| b.length.total_cmp(&a.length));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn dims(pieces: &[Piece]) -> Vec<(f64, f64)> {
        pieces.iter().map(|p| (p.width, p.height)).collect()
    }

    #[test]
    fn test_expand_quantities() {
        let specs = vec![
            PieceSpec2D::new(100.0, 50.0).with_quantity(3),
            PieceSpec2D::new(20.0, 20.0).with_quantity(2),
        ];
        let stock = SheetStock::new(1000.0, 1000.0);
        let pieces = normalize_2d(&specs, &stock, &PackingConfig::default()).unwrap();

        assert_eq!(pieces.len(), 5);
        assert_eq!(pieces.iter().filter(|p| p.spec_id == SpecId(0)).count(), 3);
        assert_eq!(pieces.iter().filter(|p| p.spec_id == SpecId(1)).count(), 2);

        let mut ids: Vec<usize> = pieces.iter().map(|p| p.id.0).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_full_width_sorted_first() {
        let specs = vec![
            PieceSpec2D::new(400.0, 300.0).with_quantity(2),
            PieceSpec2D::new(900.0, 900.0),
            PieceSpec2D::new(1000.0, 200.0),
            PieceSpec2D::new(150.0, 1000.0),
        ];
        let stock = SheetStock::new(1000.0, 2000.0);
        let pieces = normalize_2d(&specs, &stock, &PackingConfig::default()).unwrap();

        assert_eq!(
            dims(&pieces),
            vec![
                (1000.0, 200.0),
                (150.0, 1000.0),
                (900.0, 900.0),
                (400.0, 300.0),
                (400.0, 300.0),
            ]
        );
    }

    #[test]
    fn test_longest_side_descending() {
        let specs = vec![
            PieceSpec2D::new(50.0, 300.0),
            PieceSpec2D::new(200.0, 200.0),
            PieceSpec2D::new(400.0, 10.0),
        ];
        let stock = SheetStock::new(1000.0, 1000.0);
        let pieces = normalize_2d(&specs, &stock, &PackingConfig::default()).unwrap();
        assert_eq!(
            dims(&pieces),
            vec![(400.0, 10.0), (50.0, 300.0), (200.0, 200.0)]
        );
    }

    #[test]
    fn test_segments_descending() {
        let specs = vec![
            PieceSpec1D::new(300.0),
            PieceSpec1D::new(600.0),
            PieceSpec1D::new(500.0).with_quantity(2),
        ];
        let segments =
            normalize_1d(&specs, &BarStock::new(1000.0), &PackingConfig::default()).unwrap();
        let lengths: Vec<f64> = segments.iter().map(|s| s.length).collect();
        assert_eq!(lengths, vec![600.0, 500.0, 500.0, 300.0]);
    }

    #[test]
    fn test_labels_default_to_spec_id() {
        let specs = vec![
            PieceSpec1D::new(10.0),
            PieceSpec1D::new(20.0).with_label("rail"),
        ];
        let segments =
            normalize_1d(&specs, &BarStock::new(100.0), &PackingConfig::default()).unwrap();
        assert_eq!(segments[0].label, "rail");
        assert_eq!(segments[1].label, "P1");
    }

    #[test]
    fn test_invalid_inputs_rejected_before_packing() {
        let stock = SheetStock::new(100.0, 100.0);
        let specs = vec![PieceSpec2D::new(10.0, 10.0), PieceSpec2D::new(10.0, 0.0)];
        match normalize_2d(&specs, &stock, &PackingConfig::default()) {
            Err(Error::InvalidPiece { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidPiece, got {:?}", other),
        }

        let bad_stock = SheetStock::new(100.0, 0.0);
        assert!(matches!(
            normalize_2d(&[], &bad_stock, &PackingConfig::default()),
            Err(Error::InvalidStock(_))
        ));

        let bad_kerf = PackingConfig::new().with_kerf(-2.0);
        assert!(matches!(
            normalize_1d(&[], &BarStock::new(10.0), &bad_kerf),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_huge_quantities_rejected_without_panic() {
        let stock = SheetStock::new(100.0, 100.0);
        let huge = vec![PieceSpec2D::new(10.0, 10.0).with_quantity(usize::MAX)];
        let err = normalize_2d(&huge, &stock, &PackingConfig::default()).unwrap_err();
        assert!(err.is_validation());

        let overflowing = vec![
            PieceSpec1D::new(10.0),
            PieceSpec1D::new(20.0).with_quantity(usize::MAX),
        ];
        match normalize_1d(&overflowing, &BarStock::new(100.0), &PackingConfig::default()) {
            Err(Error::InvalidPiece { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidPiece, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_specs() {
        let pieces = normalize_2d(
            &[],
            &SheetStock::new(10.0, 10.0),
            &PackingConfig::default(),
        )
        .unwrap();
        assert!(pieces.is_empty());
    }
}
