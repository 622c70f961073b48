//! Box model for texbox.
//!
//! This crate provides the layout engine at the heart of texbox: a TeX-style
//! tree of boxes, glue and kerns whose aggregate width, height and depth
//! determine how a symbol, word or formula occupies space before rendering.
//!
//! - **Nodes**: a closed set of node kinds ([`Node`]) with uniform
//!   width/height/depth accessors
//! - **Packing**: horizontal and vertical list packing ([`hpack`], [`vpack`])
//! - **Centering**: horizontal and vertical centering constructors
//! - **Glue**: glue kinds and their stretch/shrink specifications
//!
//! Only *natural* dimensions are computed. Glue contributes nothing to them;
//! its specification is kept for a later stretch-resolution stage.
//!
//! # Example
//!
//! ```
//! use texbox_core::Node;
//!
//! let list = Node::hlist(
//!     vec![Node::vbox(10.0, 20.0), Node::kern(15.0), Node::hbox(30.0)],
//!     true,
//! );
//!
//! assert_eq!(list.width(), 45.0);
//! assert_eq!(list.height(), 10.0);
//! assert_eq!(list.depth(), 20.0);
//!
//! let stack = Node::vlist(vec![Node::vbox(10.0, 20.0), Node::hbox(30.0)]);
//! assert_eq!(stack.width(), 30.0);
//! assert_eq!(stack.height(), 30.0);
//! assert_eq!(stack.depth(), 0.0);
//! ```

mod glue;
pub mod logging;
mod node;
mod pack;

pub use glue::{GlueKind, GlueSpec, ParseGlueError};
pub use node::{Dimensions, HList, Node, PackMode};
pub use pack::{hpack, vpack};

// Dimension queries may run on any thread without synchronization.
static_assertions::assert_impl_all!(Node: Send, Sync, Clone);
