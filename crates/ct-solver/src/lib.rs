//! Capillary tube length by temperature marching.
//!
//! A sweep walks the saturation curve one degree at a time from the
//! condensing to the evaporating temperature, solving the homogeneous-flow
//! energy balance for quality and the momentum balance for the length of
//! each step. The result is the cumulative tube length plus the per-step
//! diagnostic series.

pub mod error;
pub mod march;
pub mod params;
pub mod result;

pub use error::{SolverError, SolverResult};
pub use march::{MarchingIntegrator, march};
pub use params::{MissingRecordPolicy, RunParameters};
pub use result::{InletState, MarchResult, MarchStep};

/// Version tag folded into cached run ids.
pub const SOLVER_VERSION: &str = env!("CARGO_PKG_VERSION");
