//! Platform layer
//!
//! Everything between the deterministic simulation and the outside world:
//! - Input sources drained once per frame
//! - Frame pacing against the wall clock
//! - The frame loop tying input, `sim::tick` and the renderer together

pub mod input;
pub mod runner;
pub mod time;

pub use input::{ChannelInput, InputSource, ScriptedInput, forward_keys, input_channel};
pub use runner::{GameLoop, RunSummary};
pub use time::FramePacer;
