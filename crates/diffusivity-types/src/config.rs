// ─────────────────────────────────────────────────────────────────────
// Reservoir Diffusivity — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{DiffusivityError, DiffusivityResult};

/// Physical and grid inputs for one pressure diffusivity run.
///
/// Units are oilfield units: mD, cP, 1/psi, ft, hours, psi.
/// Every field falls back to the sample reservoir when absent from JSON,
/// so a partial file such as `{"permeability": 12.0}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservoirParameters {
    /// Porosity Φ (fraction, 0-1)
    #[serde(default = "default_porosity")]
    pub porosity: f64,
    /// Permeability k (mD)
    #[serde(default = "default_permeability")]
    pub permeability: f64,
    /// Viscosity μ (cP)
    #[serde(default = "default_viscosity")]
    pub viscosity: f64,
    /// Total compressibility Ct (1/psi)
    #[serde(default = "default_compressibility")]
    pub compressibility: f64,
    /// Distance between injection and production well (ft)
    #[serde(default = "default_length")]
    pub length: f64,
    /// Number of spatial sections n; the grid has n + 1 columns.
    #[serde(default = "default_sections", alias = "n")]
    pub sections: usize,
    /// Section spacing dx (ft)
    #[serde(default = "default_dx")]
    pub dx: f64,
    /// Time step dt (hours)
    #[serde(default = "default_dt")]
    pub dt: f64,
    /// Number of time steps nt; the grid has nt + 1 rows.
    #[serde(default = "default_time_steps", alias = "nt")]
    pub time_steps: usize,
    /// Initial reservoir pressure P0 (psi)
    #[serde(default = "default_initial_pressure")]
    pub initial_pressure: f64,
    /// Injection boundary pressure Pinj (psi)
    #[serde(default = "default_injection_pressure")]
    pub injection_pressure: f64,
    /// Production boundary pressure Pprod (psi)
    #[serde(default = "default_production_pressure")]
    pub production_pressure: f64,
}

fn default_porosity() -> f64 {
    DEFAULT_POROSITY
}
fn default_permeability() -> f64 {
    DEFAULT_PERMEABILITY
}
fn default_viscosity() -> f64 {
    DEFAULT_VISCOSITY
}
fn default_compressibility() -> f64 {
    DEFAULT_COMPRESSIBILITY
}
fn default_length() -> f64 {
    DEFAULT_LENGTH
}
fn default_sections() -> usize {
    DEFAULT_SECTIONS
}
fn default_dx() -> f64 {
    DEFAULT_DX
}
fn default_dt() -> f64 {
    DEFAULT_DT
}
fn default_time_steps() -> usize {
    DEFAULT_TIME_STEPS
}
fn default_initial_pressure() -> f64 {
    DEFAULT_INITIAL_PRESSURE
}
fn default_injection_pressure() -> f64 {
    DEFAULT_INJECTION_PRESSURE
}
fn default_production_pressure() -> f64 {
    DEFAULT_PRODUCTION_PRESSURE
}

impl Default for ReservoirParameters {
    fn default() -> Self {
        ReservoirParameters {
            porosity: default_porosity(),
            permeability: default_permeability(),
            viscosity: default_viscosity(),
            compressibility: default_compressibility(),
            length: default_length(),
            sections: default_sections(),
            dx: default_dx(),
            dt: default_dt(),
            time_steps: default_time_steps(),
            initial_pressure: default_initial_pressure(),
            injection_pressure: default_injection_pressure(),
            production_pressure: default_production_pressure(),
        }
    }
}

impl ReservoirParameters {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> DiffusivityResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> DiffusivityResult<Self> {
        let params: Self = serde_json::from_str(json)?;
        Ok(params)
    }

    pub fn to_json_string(&self) -> DiffusivityResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Spacing implied by splitting `length` into `sections` equal parts.
    pub fn nominal_dx(&self) -> DiffusivityResult<f64> {
        if self.sections == 0 {
            return Err(DiffusivityError::ConfigError(
                "nominal dx requires sections >= 1".into(),
            ));
        }
        Ok(self.length / self.sections as f64)
    }

    /// Number of whole sections of width `dx` that fit in `length`.
    pub fn sections_from_length(&self) -> DiffusivityResult<usize> {
        if self.dx == 0.0 {
            return Err(DiffusivityError::InvalidCoefficientInput(
                "dx must be non-zero to derive the section count".into(),
            ));
        }
        let ratio = self.length / self.dx;
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(DiffusivityError::ConfigError(format!(
                "length/dx = {ratio} is not a valid section count"
            )));
        }
        Ok(ratio.trunc() as usize)
    }

    /// Reject inputs outside the physical domain: Φ and Ct in (0, 1],
    /// k, μ, L, dx, dt > 0, pressures >= 0, n >= 1, and a finite λ > 0.
    ///
    /// The solver itself computes non-physical inputs literally; callers that
    /// want a guard at the boundary run this first.
    pub fn validate(&self) -> DiffusivityResult<()> {
        let scalars = [
            ("porosity", self.porosity),
            ("permeability", self.permeability),
            ("viscosity", self.viscosity),
            ("compressibility", self.compressibility),
            ("length", self.length),
            ("dx", self.dx),
            ("dt", self.dt),
            ("initial_pressure", self.initial_pressure),
            ("injection_pressure", self.injection_pressure),
            ("production_pressure", self.production_pressure),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(DiffusivityError::PhysicsViolation(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        require_fraction("porosity", self.porosity)?;
        require_fraction("compressibility", self.compressibility)?;
        require_positive("porosity", self.porosity)?;
        require_positive("compressibility", self.compressibility)?;
        require_positive("permeability", self.permeability)?;
        require_positive("viscosity", self.viscosity)?;
        require_positive("length", self.length)?;
        require_positive("dx", self.dx)?;
        require_positive("dt", self.dt)?;
        require_non_negative("initial_pressure", self.initial_pressure)?;
        require_non_negative("injection_pressure", self.injection_pressure)?;
        require_non_negative("production_pressure", self.production_pressure)?;

        if self.sections == 0 {
            return Err(DiffusivityError::PhysicsViolation(
                "sections must be >= 1".into(),
            ));
        }

        // Positive inputs can still underflow the product to zero.
        let lambda = (self.porosity * self.viscosity * self.compressibility)
            / (FIELD_UNITS_FACTOR * self.permeability);
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(DiffusivityError::PhysicsViolation(format!(
                "diffusivity coefficient must be finite and > 0, got {lambda}"
            )));
        }
        Ok(())
    }
}

fn require_fraction(name: &str, value: f64) -> DiffusivityResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(DiffusivityError::PhysicsViolation(format!(
            "{name} must be in [0, 1], got {value}"
        )));
    }
    Ok(())
}

fn require_positive(name: &str, value: f64) -> DiffusivityResult<()> {
    if value <= 0.0 {
        return Err(DiffusivityError::PhysicsViolation(format!(
            "{name} must be > 0, got {value}"
        )));
    }
    Ok(())
}

fn require_non_negative(name: &str, value: f64) -> DiffusivityResult<()> {
    if value < 0.0 {
        return Err(DiffusivityError::PhysicsViolation(format!(
            "{name} must be >= 0, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/diffusivity-types/,
    /// so the workspace root is two levels up.
    fn config_path(relative: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join(relative)
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_load_sample_config() {
        let cfg = ReservoirParameters::from_file(&config_path("configs/sample_reservoir.json"))
            .unwrap();
        assert_eq!(cfg, ReservoirParameters::default());
        assert_eq!(cfg.sections, 10);
        assert_eq!(cfg.time_steps, 10);
        assert!((cfg.compressibility - 3e-6).abs() < 1e-18);
    }

    #[test]
    fn test_load_tight_config() {
        let cfg = ReservoirParameters::from_file(&config_path("configs/tight_reservoir.json"))
            .unwrap();
        assert!((cfg.permeability - 0.5).abs() < 1e-12);
        assert_eq!(cfg.sections, 20);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ReservoirParameters::from_file(&config_path("configs/does_not_exist.json"))
            .unwrap_err();
        assert!(matches!(err, DiffusivityError::Io(_)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg = ReservoirParameters::from_json_str(r#"{"permeability": 12.0, "nt": 4}"#)
            .unwrap();
        assert!((cfg.permeability - 12.0).abs() < 1e-12);
        assert_eq!(cfg.time_steps, 4);
        assert!((cfg.porosity - DEFAULT_POROSITY).abs() < 1e-12);
        assert_eq!(cfg.sections, DEFAULT_SECTIONS);
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = ReservoirParameters::from_json_str("{ porosity: }").unwrap_err();
        assert!(matches!(err, DiffusivityError::Json(_)));
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = ReservoirParameters {
            permeability: 42.0,
            sections: 7,
            ..ReservoirParameters::default()
        };
        let json = cfg.to_json_string().unwrap();
        let cfg2 = ReservoirParameters::from_json_str(&json).unwrap();
        assert_eq!(cfg, cfg2);
    }

    #[test]
    fn test_derived_grid_spacing() {
        let cfg = ReservoirParameters::default();
        assert!((cfg.nominal_dx().unwrap() - 100.0).abs() < 1e-12);
        assert_eq!(cfg.sections_from_length().unwrap(), 10);

        let uneven = ReservoirParameters {
            length: 1050.0,
            ..ReservoirParameters::default()
        };
        assert_eq!(uneven.sections_from_length().unwrap(), 10);
    }

    #[test]
    fn test_derived_spacing_guards() {
        let zero_dx = ReservoirParameters {
            dx: 0.0,
            ..ReservoirParameters::default()
        };
        assert!(matches!(
            zero_dx.sections_from_length(),
            Err(DiffusivityError::InvalidCoefficientInput(_))
        ));

        let zero_sections = ReservoirParameters {
            sections: 0,
            ..ReservoirParameters::default()
        };
        assert!(zero_sections.nominal_dx().is_err());
    }

    #[test]
    fn test_validate_defaults_ok() {
        assert!(ReservoirParameters::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_permeability() {
        let cfg = ReservoirParameters {
            permeability: 0.0,
            ..ReservoirParameters::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("permeability"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_fields() {
        let cases = [
            ReservoirParameters {
                porosity: 1.2,
                ..ReservoirParameters::default()
            },
            ReservoirParameters {
                compressibility: -1e-6,
                ..ReservoirParameters::default()
            },
            ReservoirParameters {
                dx: 0.0,
                ..ReservoirParameters::default()
            },
            ReservoirParameters {
                dt: -1.0,
                ..ReservoirParameters::default()
            },
            ReservoirParameters {
                sections: 0,
                ..ReservoirParameters::default()
            },
            ReservoirParameters {
                injection_pressure: f64::NAN,
                ..ReservoirParameters::default()
            },
            ReservoirParameters {
                porosity: 0.0,
                ..ReservoirParameters::default()
            },
            ReservoirParameters {
                viscosity: 0.0,
                ..ReservoirParameters::default()
            },
            ReservoirParameters {
                compressibility: 0.0,
                ..ReservoirParameters::default()
            },
            ReservoirParameters {
                length: 0.0,
                ..ReservoirParameters::default()
            },
            ReservoirParameters {
                porosity: 1e-120,
                viscosity: 1e-120,
                compressibility: 1e-120,
                ..ReservoirParameters::default()
            },
        ];
        for cfg in &cases {
            assert!(
                matches!(cfg.validate(), Err(DiffusivityError::PhysicsViolation(_))),
                "expected rejection for {cfg:?}"
            );
        }
    }
}
