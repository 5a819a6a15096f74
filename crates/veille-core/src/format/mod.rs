//! Markdown-subset formatter for finding reports.
//!
//! Turns raw report text into one [`Block`] per input line. Recognized syntax
//! is deliberately small:
//!
//! ```text
//! ## Heading          -> heading2
//! ### Heading         -> heading3
//! - item / * item     -> list_item
//! (whitespace only)   -> blank
//! anything else       -> paragraph
//!
//! inline: [label](uri) -> link, **bold** -> emphasis
//! ```
//!
//! Prefixes are matched on the untrimmed line, so indented markers fall
//! through to `paragraph`. Formatting is total: every input produces output.

mod block;
mod inline;

pub use block::{Block, BlockKind, format_content};
pub use inline::{Inline, parse_inlines};
