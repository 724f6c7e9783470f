// ─────────────────────────────────────────────────────────────────────
// Reservoir Diffusivity — Explicit Scheme
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Forward-time, central-space (FTCS) scheme with Dirichlet boundaries.
//!
//! The update for interior section j at time row i is:
//!   P[i,j] = (dt/λ) (P[i-1,j+1] - 2 P[i-1,j] + P[i-1,j-1]) / dx² + P[i-1,j]
//!
//! Column 0 holds the injection pressure and column n the production
//! pressure for every row, row 0 included. The boundary columns are
//! imprinted after the initial row, so the two corner cells of row 0 carry
//! the well pressures rather than the initial reservoir pressure.

use diffusivity_types::constants::STABILITY_LIMIT;
use diffusivity_types::error::{DiffusivityError, DiffusivityResult};
use diffusivity_types::state::PressureGrid;
use ndarray::Array2;

/// Dimensionless number r = dt / (λ dx²). The scheme is bounded for r <= 0.5.
pub fn stability_number(dt: f64, lambda: f64, dx: f64) -> f64 {
    dt / (lambda * dx * dx)
}

/// Fill a (nt + 1) × (n + 1) pressure grid with the explicit scheme.
///
/// - `n`: number of sections (columns 0..=n)
/// - `nt`: number of time steps (rows 0..=nt)
/// - `dt`: time step [hours]
/// - `dx`: section spacing [ft]
/// - `lambda`: diffusivity coefficient [hr/ft²]
/// - `p0`, `p_inj`, `p_prod`: initial, injection and production pressure [psi]
///
/// Fails with `InvalidCoefficientInput` if dx is zero, or if λ is zero and
/// the grid has interior cells to advance (n >= 2 and nt >= 1). Without
/// interior updates dt/λ is never formed and the grid holds only the
/// initial and boundary values. Other inputs, negative ones included, are
/// computed literally. Violating the stability limit only logs a warning;
/// the grid is still produced.
#[allow(clippy::too_many_arguments)]
pub fn solve(
    n: usize,
    nt: usize,
    dt: f64,
    dx: f64,
    lambda: f64,
    p0: f64,
    p_inj: f64,
    p_prod: f64,
) -> DiffusivityResult<PressureGrid> {
    if dx == 0.0 {
        return Err(DiffusivityError::InvalidCoefficientInput(
            "dx must be non-zero".into(),
        ));
    }
    let advances = n >= 2 && nt >= 1;
    if advances && lambda == 0.0 {
        return Err(DiffusivityError::InvalidCoefficientInput(
            "diffusivity coefficient must be non-zero".into(),
        ));
    }

    let r = stability_number(dt, lambda, dx);
    if advances && r > STABILITY_LIMIT {
        log::warn!(
            "explicit scheme unstable: dt/(lambda*dx^2) = {:.4} exceeds {} (dt={}, dx={}, lambda={:.6e})",
            r,
            STABILITY_LIMIT,
            dt,
            dx,
            lambda
        );
    }
    log::debug!(
        "solving {}x{} pressure grid, stability number {:.4}",
        nt + 1,
        n + 1,
        r
    );

    let mut pressure = Array2::<f64>::zeros((nt + 1, n + 1));

    // Initial condition, then Dirichlet columns on top of it.
    pressure.row_mut(0).fill(p0);
    pressure.column_mut(0).fill(p_inj);
    pressure.column_mut(n).fill(p_prod);

    let coeff = dt / lambda;
    let dx_sq = dx * dx;

    for i in 0..=nt {
        for j in 1..n {
            if i == 0 {
                pressure[[i, j]] = p0;
            } else {
                pressure[[i, j]] = ftcs_point(
                    pressure[[i - 1, j - 1]],
                    pressure[[i - 1, j]],
                    pressure[[i - 1, j + 1]],
                    coeff,
                    dx_sq,
                );
            }
        }
    }

    Ok(PressureGrid::from_array(pressure, dt, dx))
}

/// Advance one interior cell from its previous-row neighbours.
#[inline(always)]
fn ftcs_point(left: f64, centre: f64, right: f64, coeff: f64, dx_sq: f64) -> f64 {
    coeff * ((right - 2.0 * centre + left) / dx_sq) + centre
}
