//! Hardware-agnostic core of the vocabulary trainer
//!
//! This crate contains all application logic that does not depend on
//! the board link:
//!
//! - Vocabulary store and accent remapping
//! - Selection policy (no immediate repeat, sentence insertion, replay)
//! - Session state and the controller state machine
//! - Display controller applying one command at a time
//! - Input event router and shutdown coordinator
//! - Indicator trait

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod controller;
pub mod lifecycle;
pub mod policy;
pub mod router;
pub mod session;
pub mod state;
pub mod traits;
pub mod vocabulary;

#[cfg(test)]
mod testing;

pub use command::Command;
pub use controller::{Controller, ControllerConfig, ControllerError, Greeting, Outcome};
pub use lifecycle::{ShutdownCoordinator, TerminationSignal};
pub use policy::{PolicyError, Reason, Selection, SelectionPolicy};
pub use router::{CommandSink, Dispatch, InputEvent, Router};
pub use session::{MissedItem, Session};
pub use state::{Event, State};
pub use traits::{Indicator, IndicatorError};
pub use vocabulary::{Item, ItemKind, RenderedText, Vocabulary, VocabularyError};
