//! Code block directive.
//!
//! Wraps the verbatim body of a `code-block` directive in a preformatted
//! block.

use super::{Directive, DocbookDirective, XhtmlDirective};
use crate::{Cursor, ElementId, Node};

/// Directive rendering a node's tokens as a preformatted code block.
///
/// Token contents are concatenated without separator and trailing `\n`
/// characters are stripped. Leading and embedded newlines are kept.
///
/// | format  | output |
/// |---------|--------|
/// | XHTML   | `<pre><code>text</code></pre>` |
/// | `DocBook` | `<programlisting><code>text</code></programlisting>` |
///
/// When the node has an argument it is taken as the language: XHTML gets
/// `class="language-{arg}"` on `code`, `DocBook` gets `language="{arg}"` on
/// `programlisting`.
///
/// # Example
///
/// ```
/// use quill_directive::{
///     CodeBlockDirective, Directive, Document, Node, OutputFormat, SerializeOptions,
/// };
///
/// let node = Node::new("code-block").with_tokens(["foo\n", "bar\n"]);
/// let mut document = Document::new("body");
/// CodeBlockDirective.render(OutputFormat::Xhtml, &node, &mut document.cursor());
///
/// assert_eq!(
///     document.to_markup(&SerializeOptions::default()),
///     "<body><pre><code>foo\nbar</code></pre></body>"
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CodeBlockDirective;

impl CodeBlockDirective {
    /// Append `<container><code>text</code></container>` at the cursor.
    fn render_block(container: &str, node: &Node, cursor: &mut Cursor<'_>) -> CodeBlock {
        let content = node.content();
        let text = content.trim_end_matches('\n');

        let block = cursor.create_element(container);
        cursor.append(block);
        let code = cursor.create_text_element("code", text);
        cursor.append_to(block, code);

        CodeBlock { block, code }
    }
}

struct CodeBlock {
    block: ElementId,
    code: ElementId,
}

impl Directive for CodeBlockDirective {
    fn name(&self) -> &'static str {
        "code-block"
    }

    fn as_xhtml(&self) -> Option<&dyn XhtmlDirective> {
        Some(self)
    }

    fn as_docbook(&self) -> Option<&dyn DocbookDirective> {
        Some(self)
    }
}

impl XhtmlDirective for CodeBlockDirective {
    fn to_xhtml(&self, node: &Node, cursor: &mut Cursor<'_>) {
        let rendered = Self::render_block("pre", node, cursor);
        if let Some(lang) = node.argument() {
            cursor.set_attribute(rendered.code, "class", &format!("language-{lang}"));
        }
    }
}

impl DocbookDirective for CodeBlockDirective {
    fn to_docbook(&self, node: &Node, cursor: &mut Cursor<'_>) {
        let rendered = Self::render_block("programlisting", node, cursor);
        if let Some(lang) = node.argument() {
            cursor.set_attribute(rendered.block, "language", lang);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Document, OutputFormat, SerializeOptions};

    fn render_xhtml(node: &Node) -> Document {
        let mut document = Document::new("body");
        CodeBlockDirective.to_xhtml(node, &mut document.cursor());
        document
    }

    fn code_text(document: &Document) -> String {
        let root = document.root();
        let pre = *document.children(root).last().unwrap();
        let code = document.children(pre)[0];
        document.element(code).text().unwrap().to_owned()
    }

    #[test]
    fn test_tokens_concatenated_and_trailing_newlines_stripped() {
        let node = Node::new("code-block").with_tokens(["foo\n", "bar\n"]);
        assert_eq!(code_text(&render_xhtml(&node)), "foo\nbar");
    }

    #[test]
    fn test_all_trailing_newlines_stripped() {
        let node = Node::new("code-block").with_tokens(["x = 1\n", "\n", "\n"]);
        assert_eq!(code_text(&render_xhtml(&node)), "x = 1");
    }

    #[test]
    fn test_leading_and_embedded_newlines_kept() {
        let node = Node::new("code-block").with_tokens(["\n", "a\n\n", "b"]);
        assert_eq!(code_text(&render_xhtml(&node)), "\na\n\nb");
    }

    #[test]
    fn test_trailing_carriage_return_kept() {
        let node = Node::new("code-block").with_tokens(["a\r\n", "\n"]);
        assert_eq!(code_text(&render_xhtml(&node)), "a\r");
    }

    #[test]
    fn test_trailing_spaces_kept() {
        let node = Node::new("code-block").with_token("a  \n");
        assert_eq!(code_text(&render_xhtml(&node)), "a  ");
    }

    #[test]
    fn test_empty_node_renders_empty_block() {
        let document = render_xhtml(&Node::new("code-block"));
        assert_eq!(
            document.to_markup(&SerializeOptions::default()),
            "<body><pre><code></code></pre></body>"
        );
        assert_eq!(code_text(&document), "");
    }

    #[test]
    fn test_block_appended_as_last_child_with_single_code() {
        let mut document = Document::new("body");
        let root = document.root();
        let mut cursor = document.cursor();
        let existing = cursor.create_text_element("p", "intro");
        cursor.append(existing);

        CodeBlockDirective.to_xhtml(&Node::new("code-block").with_token("x"), &mut cursor);

        let children = document.children(root);
        assert_eq!(children.len(), 2);
        assert_eq!(children[0], existing);

        let pre = document.element(children[1]);
        assert_eq!(pre.name(), "pre");
        assert_eq!(pre.children().len(), 1);

        let code = document.element(pre.children()[0]);
        assert_eq!(code.name(), "code");
        assert!(code.children().is_empty());
        assert_eq!(code.text(), Some("x"));
    }

    #[test]
    fn test_text_not_interpreted() {
        let node = Node::new("code-block").with_token("<?php echo '&'; ?>\n");
        assert_eq!(code_text(&render_xhtml(&node)), "<?php echo '&'; ?>");
    }

    #[test]
    fn test_xhtml_language_class() {
        let node = Node::new("code-block")
            .with_argument("php")
            .with_token("echo 1;\n");
        assert_eq!(
            render_xhtml(&node).to_markup(&SerializeOptions::default()),
            r#"<body><pre><code class="language-php">echo 1;</code></pre></body>"#
        );
    }

    #[test]
    fn test_docbook_programlisting() {
        let node = Node::new("code-block")
            .with_argument("php")
            .with_tokens(["echo 1;\n", "echo 2;\n"]);
        let mut document = Document::for_format(OutputFormat::Docbook);
        CodeBlockDirective.to_docbook(&node, &mut document.cursor());

        assert_eq!(
            document.to_markup(&SerializeOptions::default()),
            concat!(
                r#"<article xmlns="http://docbook.org/ns/docbook" version="5.0">"#,
                r#"<programlisting language="php"><code>echo 1;"#,
                "\necho 2;</code></programlisting></article>"
            )
        );
    }

    #[test]
    fn test_supports_both_formats() {
        assert!(CodeBlockDirective.supports(OutputFormat::Xhtml));
        assert!(CodeBlockDirective.supports(OutputFormat::Docbook));
    }

    #[test]
    fn test_renders_are_independent() {
        let node = Node::new("code-block").with_token("same\n");
        let first = render_xhtml(&node);
        let second = render_xhtml(&node);
        assert_eq!(first, second);
    }
}
