//! Output tree contract and the in-memory document.
//!
//! Directives never touch a concrete tree. They receive a [`Cursor`], which
//! borrows a [`TreeBuilder`] for the duration of one render call and exposes
//! the primitives every format shares: create an element, append a child, set
//! text and attributes.
//!
//! [`Document`] is the in-memory [`TreeBuilder`] used by the converter and in
//! tests. It serializes to markup with [`Document::to_markup`].

mod builder;
mod cursor;
mod document;
mod serialize;

pub use builder::{ElementId, TreeBuilder};
pub use cursor::Cursor;
pub use document::{Document, Element};
pub use serialize::SerializeOptions;
