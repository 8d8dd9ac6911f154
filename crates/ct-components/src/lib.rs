//! ct-components: flow models for capillary tube sizing.
//!
//! Provides:
//! - Energy-balance vapor quality solver with physical root selection
//! - Explicit Colebrook-type Darcy friction factor
//! - Homogeneous two-phase flow state (blended properties, velocity, Re, f)
//!
//! All models are deterministic functions of their inputs. Physically invalid
//! states are reported as errors; nothing falls back to a sentinel value.
//!
//! # Example
//!
//! ```no_run
//! use ct_components::{FlowState, FrictionModel, QualitySolver};
//! use ct_core::units::inch;
//! use ct_fluids::{SaturationModel, sample_table};
//!
//! let table = sample_table().unwrap();
//! let inlet = table.lookup(40).unwrap();
//! let outlet = table.lookup(30).unwrap();
//!
//! let friction = FrictionModel::legacy(inch(0.094)).unwrap();
//! let g = 5717.9;
//! let solver = QualitySolver::from_inlet(&inlet, g).unwrap();
//! let x = solver.solve(&outlet).unwrap();
//! let state = FlowState::evaluate(&outlet, x, g, &friction).unwrap();
//! println!("x = {x:.3}, V = {:.2} m/s", state.velocity);
//! ```

pub mod common;
pub mod error;
pub mod flow_state;
pub mod friction;
pub mod quality;

// Re-exports
pub use error::{ComponentError, ComponentResult};
pub use flow_state::FlowState;
pub use friction::{FrictionCorrelation, FrictionModel, reynolds_number};
pub use quality::{QualitySolver, QuadraticCoefficients, select_quality_root};
