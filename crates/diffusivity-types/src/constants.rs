// ─────────────────────────────────────────────────────────────────────
// Reservoir Diffusivity — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Field-units conversion factor in the diffusivity equation.
/// Converts mD·psi/(cP·ft²) to 1/hour so λ comes out in hr/ft².
pub const FIELD_UNITS_FACTOR: f64 = 0.000264;

/// Upper bound on dt/(λ·dx²) for the explicit FTCS scheme to stay bounded.
pub const STABILITY_LIMIT: f64 = 0.5;

// Sample inputs of the reference parameter form.

/// Porosity (fraction)
pub const DEFAULT_POROSITY: f64 = 0.15;

/// Permeability (mD)
pub const DEFAULT_PERMEABILITY: f64 = 5.0;

/// Viscosity (cP)
pub const DEFAULT_VISCOSITY: f64 = 0.6;

/// Total compressibility (1/psi)
pub const DEFAULT_COMPRESSIBILITY: f64 = 0.000003;

/// Injector-to-producer distance (ft)
pub const DEFAULT_LENGTH: f64 = 1000.0;

/// Number of sections
pub const DEFAULT_SECTIONS: usize = 10;

/// Section spacing (ft)
pub const DEFAULT_DX: f64 = 100.0;

/// Time step (hours)
pub const DEFAULT_DT: f64 = 1.0;

/// Number of time steps
pub const DEFAULT_TIME_STEPS: usize = 10;

/// Initial reservoir pressure (psi)
pub const DEFAULT_INITIAL_PRESSURE: f64 = 4000.0;

/// Injection well pressure (psi)
pub const DEFAULT_INJECTION_PRESSURE: f64 = 570.0;

/// Production well pressure (psi)
pub const DEFAULT_PRODUCTION_PRESSURE: f64 = 3000.0;
