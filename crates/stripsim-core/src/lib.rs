//! # StripSim Core Library
//!
//! Core functionality for the StripSim drag racing simulator.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Physics telemetry types shared with the simulation loop
//! - AI physics correction client (remote scoring endpoint)
//! - Correction factor types with a guaranteed neutral fallback
//! - Demo mode: simulated quarter-mile runs for testing without a live sim
//!
//! ## Example
//!
//! ```rust,ignore
//! use stripsim_core::{ai_physics::AiPhysicsClient, demo::DragRunSimulator};
//!
//! let client = AiPhysicsClient::new("http://localhost:8080");
//! let mut run = DragRunSimulator::new();
//!
//! // Sample the simulated run and ask the AI endpoint for corrections
//! let snapshot = run.update(250);
//! let corrections = client.fetch_corrections(&snapshot).await;
//! println!("grip x{}", corrections.factors().grip_multiplier);
//! ```

pub mod ai_physics;
pub mod correction;
pub mod demo;
pub mod telemetry;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::ai_physics::{AiPhysicsClient, AiPhysicsError};
    pub use crate::correction::{CorrectionFactors, CorrectionSource};
    pub use crate::demo::DragRunSimulator;
    pub use crate::telemetry::{EcuConfig, PhysicsSnapshot};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
