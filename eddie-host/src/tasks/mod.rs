//! Host tasks
//!
//! Async tasks share the executor with the controller loop; blocking I/O
//! (serial reads, signal waits) runs on its own thread.

pub mod controller;
pub mod input;
pub mod reader;
pub mod signals;

pub use controller::controller_task;
pub use input::{button_task, rotary_task};
pub use reader::{spawn_reader, wait_for_board, Handshake, PinRoutes};
pub use signals::spawn_signal_listener;
