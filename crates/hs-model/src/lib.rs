//! Single-zone thermal step simulation for buildings.
//!
//! Provides:
//! - Building parameters (heat-loss coefficient, specific heat)
//! - Domain-checked loss blending with an explicit degeneracy policy
//! - Per-step energy/temperature recurrence
//! - Room temperature trajectory with optional loss/energy detail

pub mod blend;
pub mod error;
pub mod params;
pub mod sim;
pub mod step;

// Re-exports for public API
pub use blend::{DegeneracyPolicy, LossBlend, blend_losses};
pub use error::{SimError, SimResult};
pub use params::HeatModelParams;
pub use sim::{SimDetail, SimOptions, SimOutput, simulate_room_temperature, trace_steps};
pub use step::{HeatModel, RoomState, ThermalStep};
