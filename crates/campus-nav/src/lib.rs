//! Campus services built on the `campus-core` containers.
//!
//! Provides the navigator (route queries over the campus graph), the event
//! search index, the undoable event list and the FIFO task scheduler. Each
//! service owns its container; nothing here is process-global.

pub mod events;
pub mod navigator;
pub mod priority;
pub mod scheduler;
pub mod search;

pub use priority::Priority;
