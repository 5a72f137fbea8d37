//! Controller state machine
//!
//! The controller's lifecycle is explicit, finite and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
