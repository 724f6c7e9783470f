// ─────────────────────────────────────────────────────────────────────
// Reservoir Diffusivity — Solver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Parameter-driven pressure diffusivity solver.
//!
//! Computes λ once from `ReservoirParameters` and runs the explicit scheme.

use crate::coefficient::diffusivity_coefficient;
use crate::explicit::{solve, stability_number};
use diffusivity_types::config::ReservoirParameters;
use diffusivity_types::constants::STABILITY_LIMIT;
use diffusivity_types::error::DiffusivityResult;
use diffusivity_types::state::PressureGrid;

/// Output of one run.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub lambda: f64,
    pub stability_number: f64,
    pub grid: PressureGrid,
}

impl SimulationResult {
    pub fn is_stable(&self) -> bool {
        self.stability_number <= STABILITY_LIMIT
    }
}

/// 1D injector-to-producer pressure diffusivity solver.
#[derive(Debug, Clone)]
pub struct DiffusivitySolver {
    params: ReservoirParameters,
    lambda: f64,
}

impl DiffusivitySolver {
    /// Fails with `InvalidCoefficientInput` when permeability is zero.
    /// No other validation; call `ReservoirParameters::validate` first
    /// to reject non-physical input.
    pub fn new(params: ReservoirParameters) -> DiffusivityResult<Self> {
        let lambda = diffusivity_coefficient(
            params.porosity,
            params.viscosity,
            params.compressibility,
            params.permeability,
        )?;
        Ok(DiffusivitySolver { params, lambda })
    }

    pub fn params(&self) -> &ReservoirParameters {
        &self.params
    }

    /// Diffusivity coefficient λ [hr/ft²].
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn stability_number(&self) -> f64 {
        stability_number(self.params.dt, self.lambda, self.params.dx)
    }

    pub fn is_stable(&self) -> bool {
        self.stability_number() <= STABILITY_LIMIT
    }

    /// Largest dt [hours] that keeps the scheme within the stability limit.
    pub fn max_stable_dt(&self) -> f64 {
        STABILITY_LIMIT * self.lambda * self.params.dx * self.params.dx
    }

    pub fn run(&self) -> DiffusivityResult<SimulationResult> {
        let p = &self.params;
        let grid = solve(
            p.sections,
            p.time_steps,
            p.dt,
            p.dx,
            self.lambda,
            p.initial_pressure,
            p.injection_pressure,
            p.production_pressure,
        )?;
        Ok(SimulationResult {
            lambda: self.lambda,
            stability_number: self.stability_number(),
            grid,
        })
    }
}
