//! Directive traits.
//!
//! A [`Directive`] renders one kind of [`Node`] into an output tree. Each
//! output format has its own rendering trait:
//!
//! - [`XhtmlDirective`]: renders into an XHTML tree
//! - [`DocbookDirective`]: renders into a `DocBook` tree
//!
//! A directive implements the subset of format traits it supports and
//! advertises them through [`Directive::as_xhtml`] and
//! [`Directive::as_docbook`]. Callers check the capability before rendering;
//! unsupported formats are never invoked.
//!
//! # Example
//!
//! ```
//! use quill_directive::{
//!     Cursor, Directive, Document, Node, OutputFormat, SerializeOptions, XhtmlDirective,
//! };
//!
//! struct RubricDirective;
//!
//! impl Directive for RubricDirective {
//!     fn name(&self) -> &str { "rubric" }
//!     fn as_xhtml(&self) -> Option<&dyn XhtmlDirective> { Some(self) }
//! }
//!
//! impl XhtmlDirective for RubricDirective {
//!     fn to_xhtml(&self, node: &Node, cursor: &mut Cursor<'_>) {
//!         let heading = cursor.create_text_element("p", node.content().trim());
//!         cursor.set_attribute(heading, "class", "rubric");
//!         cursor.append(heading);
//!     }
//! }
//!
//! let node = Node::new("rubric").with_token("Notes\n");
//! let mut document = Document::new("body");
//!
//! assert!(RubricDirective.render(OutputFormat::Xhtml, &node, &mut document.cursor()));
//! assert!(!RubricDirective.render(OutputFormat::Docbook, &node, &mut document.cursor()));
//! assert_eq!(
//!     document.to_markup(&SerializeOptions::default()),
//!     r#"<body><p class="rubric">Notes</p></body>"#
//! );
//! ```

mod code_block;
mod paragraph;

pub use code_block::CodeBlockDirective;
pub use paragraph::ParagraphDirective;

use quill_dispatch::Matcher;

use crate::{Cursor, Node, OutputFormat};

/// Transformer for one kind of node.
///
/// Directives are stateless with respect to previous render calls and are
/// shared between threads once wired into a registry.
pub trait Directive: Send + Sync {
    /// Directive name, used in diagnostics.
    fn name(&self) -> &str;

    /// XHTML rendering, if supported.
    fn as_xhtml(&self) -> Option<&dyn XhtmlDirective> {
        None
    }

    /// `DocBook` rendering, if supported.
    fn as_docbook(&self) -> Option<&dyn DocbookDirective> {
        None
    }

    /// Whether this directive can render into `format`.
    fn supports(&self, format: OutputFormat) -> bool {
        match format {
            OutputFormat::Xhtml => self.as_xhtml().is_some(),
            OutputFormat::Docbook => self.as_docbook().is_some(),
        }
    }

    /// Render `node` at the cursor's position if `format` is supported.
    ///
    /// Returns `false`, leaving the tree untouched, when the directive does
    /// not implement `format`.
    fn render(&self, format: OutputFormat, node: &Node, cursor: &mut Cursor<'_>) -> bool {
        let rendered = match format {
            OutputFormat::Xhtml => self.as_xhtml().map(|d| d.to_xhtml(node, cursor)),
            OutputFormat::Docbook => self.as_docbook().map(|d| d.to_docbook(node, cursor)),
        };
        rendered.is_some()
    }
}

/// Rendering into an XHTML tree.
pub trait XhtmlDirective {
    /// Append the XHTML rendering of `node` at the cursor's current element.
    fn to_xhtml(&self, node: &Node, cursor: &mut Cursor<'_>);
}

/// Rendering into a `DocBook` tree.
pub trait DocbookDirective {
    /// Append the `DocBook` rendering of `node` at the cursor's current element.
    fn to_docbook(&self, node: &Node, cursor: &mut Cursor<'_>);
}

/// Matcher selecting nodes by directive name.
///
/// # Example
///
/// ```
/// use quill_directive::{DirectiveName, Node};
/// use quill_dispatch::Matcher;
///
/// let matcher = DirectiveName::any_of(["code", "code-block"]);
/// assert!(matcher.matches(&Node::new("code-block")));
/// assert!(!matcher.matches(&Node::new("note")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectiveName {
    names: Vec<String>,
}

impl DirectiveName {
    /// Match a single directive name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
        }
    }

    /// Match any of the given names.
    #[must_use]
    pub fn any_of<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Matcher<Node> for DirectiveName {
    fn matches(&self, node: &Node) -> bool {
        self.names.iter().any(|name| name == node.name())
    }
}
