//! In-memory DOM: slotmap-backed node arena implementing the mount host.

pub mod node;
pub mod query;
pub mod serialize;
pub mod tags;
pub mod tree;

pub use node::{NodeData, NodeId};
pub use tree::Dom;
