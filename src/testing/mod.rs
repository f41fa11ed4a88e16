//! Test helpers: a recording host with fault injection, snapshot outlines.
//!
//! Use [`RecordingHost`] to check which toolkit calls a mount makes, in what
//! order, and how it recovers when one of them fails. Use [`tree_to_string`]
//! to capture a subtree as text for snapshot-style assertions.

pub mod recording;
pub mod snapshot;

pub use recording::{Fault, HostCall, RecordingHost};
pub use snapshot::{dom_to_string, tree_to_string};
