//! Tree builder trait.

/// Handle to an element created by a [`TreeBuilder`].
///
/// Handles are only meaningful for the builder that created them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

/// Primitives for building an output element tree.
///
/// Elements are created detached and become part of the tree once appended
/// to a parent. Each element is appended at most once.
///
/// Implementations own escaping: text and attribute values are passed
/// verbatim.
pub trait TreeBuilder {
    /// Create a detached element.
    fn create_element(&mut self, name: &str) -> ElementId;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: ElementId, child: ElementId);

    /// Replace the text content of `element`.
    fn set_text(&mut self, element: ElementId, text: &str);

    /// Set an attribute on `element`, replacing any previous value.
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);
}
