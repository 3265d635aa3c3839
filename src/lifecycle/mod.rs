//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse CLI → Load config → Validate → Init logging/metrics → Start monitor
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Broadcast → monitor finishes its current cycle → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, before the first pass
//! - No deadline on shutdown: a pass is bounded by its per-check timeouts

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
