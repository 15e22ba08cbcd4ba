//! Paragraph directive, the default rendering for unrecognized nodes.

use super::{Directive, DocbookDirective, XhtmlDirective};
use crate::{Cursor, Node};

/// Directive rendering a node's text as a plain paragraph.
///
/// Tokens are concatenated and surrounding whitespace is trimmed. Renders
/// `<p>` for XHTML and `<para>` for `DocBook`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParagraphDirective;

impl ParagraphDirective {
    fn render_paragraph(element: &str, node: &Node, cursor: &mut Cursor<'_>) {
        let content = node.content();
        let paragraph = cursor.create_text_element(element, content.trim());
        cursor.append(paragraph);
    }
}

impl Directive for ParagraphDirective {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn as_xhtml(&self) -> Option<&dyn XhtmlDirective> {
        Some(self)
    }

    fn as_docbook(&self) -> Option<&dyn DocbookDirective> {
        Some(self)
    }
}

impl XhtmlDirective for ParagraphDirective {
    fn to_xhtml(&self, node: &Node, cursor: &mut Cursor<'_>) {
        Self::render_paragraph("p", node, cursor);
    }
}

impl DocbookDirective for ParagraphDirective {
    fn to_docbook(&self, node: &Node, cursor: &mut Cursor<'_>) {
        Self::render_paragraph("para", node, cursor);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Document, SerializeOptions};

    #[test]
    fn test_xhtml_paragraph_trimmed() {
        let node = Node::new("note").with_tokens(["  Remember\n", "this.\n\n"]);
        let mut document = Document::new("body");
        ParagraphDirective.to_xhtml(&node, &mut document.cursor());

        assert_eq!(
            document.to_markup(&SerializeOptions::default()),
            "<body><p>Remember\nthis.</p></body>"
        );
    }

    #[test]
    fn test_docbook_para() {
        let node = Node::new("note").with_token("Hi");
        let mut document = Document::new("article");
        ParagraphDirective.to_docbook(&node, &mut document.cursor());

        assert_eq!(
            document.to_markup(&SerializeOptions::default()),
            "<article><para>Hi</para></article>"
        );
    }

    #[test]
    fn test_whitespace_only_renders_empty_element() {
        let node = Node::new("note").with_tokens([" \n", "\t"]);
        let mut document = Document::new("body");
        ParagraphDirective.to_xhtml(&node, &mut document.cursor());

        let root = document.root();
        let p = document.element(document.children(root)[0]);
        assert_eq!(p.text(), Some(""));
    }
}
