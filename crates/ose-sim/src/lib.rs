//! # ose-sim
//!
//! Single realizations of the AR(1) process described by a [`ModelSpec`]:
//!
//! ```text
//! x[0] = initial value (0 or a N(0, 1) draw)
//! x[i] = eps[i] + rho * x[i - 1],   eps[i] ~ N(0, 1) i.i.d.
//! ```
//!
//! The simulator only accepts `&ModelSpec`, which exists only in the
//! validated state, so an unvalidated or foreign record cannot reach it.

pub mod ar1;

pub use ar1::Ar1Simulator;
pub use ose_core::config::InitialValue;
pub use ose_spec::ModelSpec;
