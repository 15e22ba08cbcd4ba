//! Output cursor.

use super::{ElementId, TreeBuilder};

/// Mutable insertion point into an output tree.
///
/// A cursor borrows the tree exclusively for one render call; directives
/// cannot keep it afterwards. New content is appended to the
/// [`current`](Self::current) element.
///
/// # Example
///
/// ```
/// use quill_directive::{Document, SerializeOptions};
///
/// let mut document = Document::new("body");
/// let mut cursor = document.cursor();
///
/// let pre = cursor.create_element("pre");
/// cursor.append(pre);
/// let code = cursor.create_text_element("code", "x = 1");
/// cursor.append_to(pre, code);
///
/// assert_eq!(
///     document.to_markup(&SerializeOptions::default()),
///     "<body><pre><code>x = 1</code></pre></body>"
/// );
/// ```
pub struct Cursor<'a> {
    builder: &'a mut dyn TreeBuilder,
    current: ElementId,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at `current`.
    pub fn new(builder: &'a mut dyn TreeBuilder, current: ElementId) -> Self {
        Self { builder, current }
    }

    /// Element new content is appended to.
    pub fn current(&self) -> ElementId {
        self.current
    }

    /// Create a detached element.
    pub fn create_element(&mut self, name: &str) -> ElementId {
        self.builder.create_element(name)
    }

    /// Create a detached element whose sole content is `text`.
    pub fn create_text_element(&mut self, name: &str, text: &str) -> ElementId {
        let element = self.builder.create_element(name);
        self.builder.set_text(element, text);
        element
    }

    /// Append `child` to the current element.
    pub fn append(&mut self, child: ElementId) {
        self.builder.append_child(self.current, child);
    }

    /// Append `child` to `parent`.
    pub fn append_to(&mut self, parent: ElementId, child: ElementId) {
        self.builder.append_child(parent, child);
    }

    /// Replace the text content of `element`.
    pub fn set_text(&mut self, element: ElementId, text: &str) {
        self.builder.set_text(element, text);
    }

    /// Set an attribute on `element`.
    pub fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        self.builder.set_attribute(element, name, value);
    }

    /// Reborrow the tree with a cursor positioned at `element`.
    pub fn descend(&mut self, element: ElementId) -> Cursor<'_> {
        Cursor {
            builder: &mut *self.builder,
            current: element,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{Document, SerializeOptions};

    #[test]
    fn test_append_targets_current_element() {
        let mut document = Document::new("body");
        let root = document.root();
        let mut cursor = document.cursor();

        let p = cursor.create_text_element("p", "hello");
        cursor.append(p);

        assert_eq!(cursor.current(), root);
        assert_eq!(document.children(root), &[p]);
    }

    #[test]
    fn test_descend_appends_inside_element() {
        let mut document = Document::new("body");
        let mut cursor = document.cursor();

        let section = cursor.create_element("section");
        cursor.append(section);
        {
            let mut inner = cursor.descend(section);
            let p = inner.create_text_element("p", "nested");
            inner.append(p);
        }
        let after = cursor.create_element("hr");
        cursor.append(after);

        assert_eq!(
            document.to_markup(&SerializeOptions::default()),
            "<body><section><p>nested</p></section><hr></hr></body>"
        );
    }

    #[test]
    fn test_set_attribute_and_text() {
        let mut document = Document::new("body");
        let mut cursor = document.cursor();

        let code = cursor.create_element("code");
        cursor.set_attribute(code, "class", "language-rust");
        cursor.set_text(code, "fn main() {}");
        cursor.append(code);

        assert_eq!(
            document.to_markup(&SerializeOptions::default()),
            r#"<body><code class="language-rust">fn main() {}</code></body>"#
        );
    }
}
