//! App layer - central state management and command processing
//!
//! The App actor receives submitted lines and network responses,
//! updates the conversation, and emits network commands and render events.

pub mod state;
pub mod actor;
pub mod classify;

pub use state::AppState;
pub use actor::AppActor;
pub use classify::classify;
