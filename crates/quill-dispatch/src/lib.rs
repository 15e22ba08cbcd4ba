//! Ordered registry that resolves arbitrary criteria to a transformer.
//!
//! A [`Registry`] holds `(matcher, transformer)` bindings in two tiers:
//!
//! - **Primary** bindings, registered with [`Registry::register`]
//! - **Fallback** bindings, registered with [`Registry::register_fallback`]
//!
//! Resolution scans the primary tier in insertion order, then the fallback
//! tier, and returns the transformer of the first matcher that accepts the
//! criteria. A miss is `None`, never an error.
//!
//! # Example
//!
//! ```
//! use quill_dispatch::{Always, Registry};
//!
//! let registry = Registry::<str, &str>::new()
//!     .with_fallback(Always, "default")
//!     .with(|name: &str| name == "code-block", "code");
//!
//! assert_eq!(registry.resolve("code-block"), Some(&"code"));
//! assert_eq!(registry.resolve("note"), Some(&"default"));
//! ```

mod matcher;
mod registry;

pub use matcher::{Always, Matcher};
pub use registry::{Registry, Resolved, Tier};
