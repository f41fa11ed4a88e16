//! # tagmount
//!
//! A minimal declarative element renderer: turn a plain descriptor (tag, open
//! attribute set, flat content) into a live node and append it to a container,
//! in one all-or-nothing call.
//!
//! ```
//! use tagmount::{mount, Dom, ElementDescriptor, NodeData};
//!
//! let mut dom = Dom::new();
//! dom.insert(NodeData::new("div").with_id("root"));
//! let root = dom.query_selector("#root").unwrap().unwrap();
//!
//! let link = ElementDescriptor::new("a")
//!     .attr("href", "https://example.com")
//!     .attr("target", "_blank")
//!     .text("Click here");
//! mount(&mut dom, &link, root).unwrap();
//!
//! assert_eq!(dom.children(root).len(), 1);
//! ```
//!
//! ## Modules
//!
//! - **[`element`]** — `ElementDescriptor` and `Content`
//! - **[`mount`]** — `mount` / `unmount`
//! - **[`host`]** — the `Host` trait the mounter drives
//! - **[`dom`]** — slotmap-backed in-memory DOM implementing `Host`
//! - **[`selector`]** — logos-tokenized CSS selectors for locating containers
//! - **[`config`]** — attribute strictness and custom element registration
//! - **[`error`]** — `MountError`
//! - **[`testing`]** — recording host with fault injection, snapshot outlines

// Data
pub mod element;
pub mod error;

// Mounting
pub mod host;
pub mod mount;

// In-memory host
pub mod config;
pub mod dom;
pub mod selector;

// Test support
pub mod testing;

pub use config::DomConfig;
pub use dom::{Dom, NodeData, NodeId};
pub use element::{Content, ElementDescriptor};
pub use error::MountError;
pub use host::Host;
pub use mount::{mount, unmount};

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use tagmount_macros::element;
