//! In-memory output document.

use super::{Cursor, ElementId, TreeBuilder};
use crate::OutputFormat;

/// Element of a [`Document`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<ElementId>,
    parent: Option<ElementId>,
}

impl Element {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
            parent: None,
        }
    }

    /// Element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in the order they were first set.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Value of the named attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Text content, if set.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Child elements in append order.
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Parent element, or `None` for the root and detached elements.
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }
}

/// Arena-backed element tree.
///
/// Elements are stored flat and referenced by [`ElementId`]. The root
/// element is created with the document.
///
/// # Panics
///
/// Accessors and [`TreeBuilder`] methods panic when given an [`ElementId`]
/// created by a different document. [`TreeBuilder::append_child`] panics when
/// the child is the root or already has a parent, so the tree reachable from
/// the root never contains a cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    elements: Vec<Element>,
    root: ElementId,
}

impl Document {
    /// Create a document with a root element named `root_name`.
    #[must_use]
    pub fn new(root_name: &str) -> Self {
        Self {
            elements: vec![Element::new(root_name)],
            root: ElementId(0),
        }
    }

    /// Create an empty document rooted the way `format` expects.
    #[must_use]
    pub fn for_format(format: OutputFormat) -> Self {
        let mut document = Self::new(format.root_element());
        let root = document.root;
        for (name, value) in format.root_attributes() {
            document.set_attribute(root, name, value);
        }
        document
    }

    /// Root element handle.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Look up an element.
    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    /// Children of an element.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.element(id).children()
    }

    /// Cursor positioned at the root element.
    pub fn cursor(&mut self) -> Cursor<'_> {
        let root = self.root;
        Cursor::new(self, root)
    }

    fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }
}

impl TreeBuilder for Document {
    fn create_element(&mut self, name: &str) -> ElementId {
        self.elements.push(Element::new(name));
        ElementId(self.elements.len() - 1)
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        assert_ne!(child, self.root, "root element cannot be appended");
        assert_ne!(parent, child, "element appended to itself");
        let attached = self.element_mut(child);
        assert!(attached.parent.is_none(), "element appended twice");
        attached.parent = Some(parent);
        self.element_mut(parent).children.push(child);
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        self.element_mut(element).text = Some(text.to_owned());
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        let attributes = &mut self.element_mut(element).attributes;
        if let Some((_, existing)) = attributes.iter_mut().find(|(key, _)| key == name) {
            value.clone_into(existing);
        } else {
            attributes.push((name.to_owned(), value.to_owned()));
        }
    }
}
