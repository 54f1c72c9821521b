//! Document model types.
//!
//! This module defines both sides of the renderer: the parsed document tree
//! handed over by the upstream parser ([`Node`]) and the presentational tree
//! the renderer produces ([`RenderedNode`]). Post front-matter used by the
//! feed lives here as well.

mod attributes;
mod node;
mod post;
mod rendered;

pub use attributes::{AttrValue, Attributes};
pub use node::{HeadingLevel, Node};
pub use post::{display_date, sort_newest_first, PostEntry};
pub use rendered::{Element, RenderedNode, Tag};
