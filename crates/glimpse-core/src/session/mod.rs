//! Interactive session state.

pub mod model;

pub use model::{ChatMessage, MessageRole, Session};
