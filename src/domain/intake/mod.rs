//! Intake dialogue engine.
//!
//! The stage machine, the accumulating shopping profile, the per-turn
//! payload contract, and the session controller that ties them together.

mod engine;
mod payload;
mod profile;
mod stage;

pub use engine::{EngineFault, Session};
pub use payload::{CleanDebug, Expect, Payload, Snapshot};
pub use profile::{BodyProfile, Mode, Occasion, ProfileData};
pub use stage::Stage;
