// ─────────────────────────────────────────────────────────────────────
// Reservoir Diffusivity — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::ops::Index;

use ndarray::{Array1, Array2, ArrayView1};

use crate::error::{DiffusivityError, DiffusivityResult};

/// Pressure field over time and space [psi].
///
/// Rows are time indices 0..=nt, columns are section indices 0..=n.
/// Column 0 is the injection well, column n the production well.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureGrid {
    pressure: Array2<f64>, // [nt + 1, n + 1]
    pub dt: f64,           // hours per row
    pub dx: f64,           // feet per column
}

impl PressureGrid {
    pub fn from_array(pressure: Array2<f64>, dt: f64, dx: f64) -> Self {
        PressureGrid { pressure, dt, dx }
    }

    /// Number of rows (nt + 1).
    pub fn time_steps(&self) -> usize {
        self.pressure.nrows()
    }

    /// Number of columns (n + 1).
    pub fn sections(&self) -> usize {
        self.pressure.ncols()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.pressure.dim()
    }

    pub fn get(&self, time_index: usize, section_index: usize) -> DiffusivityResult<f64> {
        self.pressure
            .get([time_index, section_index])
            .copied()
            .ok_or(DiffusivityError::GridOutOfBounds {
                row: time_index,
                col: section_index,
            })
    }

    /// Pressure across all sections at one time index.
    pub fn profile(&self, time_index: usize) -> DiffusivityResult<ArrayView1<'_, f64>> {
        if time_index >= self.time_steps() {
            return Err(DiffusivityError::GridOutOfBounds {
                row: time_index,
                col: 0,
            });
        }
        Ok(self.pressure.row(time_index))
    }

    /// Pressure at one section over all time indices.
    pub fn history(&self, section_index: usize) -> DiffusivityResult<ArrayView1<'_, f64>> {
        if section_index >= self.sections() {
            return Err(DiffusivityError::GridOutOfBounds {
                row: 0,
                col: section_index,
            });
        }
        Ok(self.pressure.column(section_index))
    }

    /// Elapsed time of each row [hours].
    pub fn times_hours(&self) -> Array1<f64> {
        Array1::from_shape_fn(self.time_steps(), |i| i as f64 * self.dt)
    }

    /// Distance of each column from the injection well [ft].
    pub fn positions_ft(&self) -> Array1<f64> {
        Array1::from_shape_fn(self.sections(), |j| j as f64 * self.dx)
    }

    /// (min, max) over the whole grid, ignoring NaN. None for an all-NaN grid.
    pub fn pressure_range(&self) -> Option<(f64, f64)> {
        self.pressure
            .iter()
            .filter(|p| !p.is_nan())
            .fold(None, |acc, &p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
            })
    }

    /// (section index, time index, pressure) for every cell, row-major.
    pub fn surface_points(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.pressure
            .indexed_iter()
            .map(|((time, section), &p)| (section, time, p))
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.pressure
    }

    pub fn into_array(self) -> Array2<f64> {
        self.pressure
    }
}

impl Index<(usize, usize)> for PressureGrid {
    type Output = f64;

    fn index(&self, (time_index, section_index): (usize, usize)) -> &f64 {
        &self.pressure[[time_index, section_index]]
    }
}
