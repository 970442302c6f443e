//! Platform abstraction layer
//!
//! Browser glue kept out of the simulation:
//! - Input: key to command mapping (platform independent, tested natively)
//! - DOM: score display and message overlay (WASM only)

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod input;

pub use input::command_for_key;
