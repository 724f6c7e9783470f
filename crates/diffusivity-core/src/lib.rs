//! Pressure diffusivity solver for a 1D reservoir between two wells.
//!
//! Coefficient, explicit FTCS scheme, and the parameter-driven solver.

pub mod coefficient;
pub mod explicit;
pub mod solver;
