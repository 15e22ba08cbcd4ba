//! Directive rendering into format-specific output trees.
//!
//! This crate turns parsed input [`Node`]s into output element trees for one
//! or more [`OutputFormat`]s.
//!
//! # Architecture
//!
//! - [`Directive`]: a transformer for one kind of node. Per-format rendering
//!   lives in [`XhtmlDirective`] and [`DocbookDirective`]; a directive exposes
//!   the formats it supports through capability queries.
//! - [`TreeBuilder`] and [`Cursor`]: the output tree contract. Directives
//!   only see a cursor, never a concrete tree.
//! - [`Document`]: in-memory tree implementing [`TreeBuilder`], serialized to
//!   markup with [`Document::to_markup`].
//! - [`Converter`]: the document driver. Resolves a directive for every node
//!   through a [`quill_dispatch::Registry`] and renders it once per format.
//!
//! # Example
//!
//! ```
//! use quill_directive::{ConvertOptions, Converter, Node, OutputFormat, SerializeOptions};
//!
//! let node = Node::new("code-block").with_token("a = 1\n");
//! let converter = Converter::standard(ConvertOptions::default());
//! let rendered = converter.convert(&[node]).unwrap();
//!
//! let xhtml = rendered.iter().find(|r| r.format == OutputFormat::Xhtml).unwrap();
//! assert_eq!(
//!     xhtml.document.to_markup(&SerializeOptions::default()),
//!     "<body><pre><code>a = 1</code></pre></body>"
//! );
//! ```

mod converter;
mod directive;
mod error;
mod format;
mod node;
mod tree;

pub use converter::{ConvertOptions, Converter, DirectiveRegistry, Rendered, UnresolvedPolicy};
pub use directive::{
    CodeBlockDirective, Directive, DirectiveName, DocbookDirective, ParagraphDirective,
    XhtmlDirective,
};
pub use error::{ConvertError, FormatError};
pub use format::OutputFormat;
pub use node::{Node, Token};
pub use tree::{Cursor, Document, Element, ElementId, SerializeOptions, TreeBuilder};
