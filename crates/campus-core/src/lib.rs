//! Core containers for the campus planner.
//!
//! Provides the weighted campus graph ([`graph::WeightedGraph`]), the ordered
//! event index ([`index::OrderedIndex`]), the positional event list
//! ([`list::PositionalList`]), bounded stack/queue primitives, plus the
//! configuration and campus-map storage used to populate them.

pub mod arena;
pub mod bounded;
pub mod config;
pub mod error;
pub mod graph;
pub mod index;
pub mod list;
pub mod storage;
