//! Search coordinator actor.
//!
//! Reacts to settled queries from the debouncer and to user selections,
//! dispatches catalog fetches, and reconciles their completions with the
//! UI state. The coordinator runs as an actor processing messages
//! sequentially, which eliminates lock contention and keeps every state
//! transition in one place.

mod actor;
mod commands;
mod core;
mod handle;
mod state;

#[cfg(test)]
mod test_mocks;

pub use actor::spawn_search_engine;
pub use commands::SearchCommand;
pub use handle::SearchEngineHandle;
pub use state::{DetailPhase, SearchPhase, SearchSnapshot};
