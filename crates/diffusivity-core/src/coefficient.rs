// ─────────────────────────────────────────────────────────────────────
// Reservoir Diffusivity — Coefficient
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Diffusivity coefficient of the field-units pressure equation.
//!
//!   d²P/dx² = λ dP/dt,   λ = Φ μ Ct / (0.000264 k)

use diffusivity_types::constants::FIELD_UNITS_FACTOR;
use diffusivity_types::error::{DiffusivityError, DiffusivityResult};

/// Compute λ [hr/ft²] from porosity, viscosity [cP], compressibility [1/psi]
/// and permeability [mD].
///
/// Only k = 0 is rejected. Non-physical porosity, viscosity or
/// compressibility are evaluated as given.
pub fn diffusivity_coefficient(
    porosity: f64,
    viscosity: f64,
    compressibility: f64,
    permeability: f64,
) -> DiffusivityResult<f64> {
    if permeability == 0.0 {
        return Err(DiffusivityError::InvalidCoefficientInput(
            "permeability must be non-zero".into(),
        ));
    }
    Ok((porosity * viscosity * compressibility) / (FIELD_UNITS_FACTOR * permeability))
}
