//! Matcher trait.
//!
//! Matchers are the predicates a [`Registry`](crate::Registry) evaluates
//! against criteria.

/// Pure boolean test over criteria.
///
/// Implemented for every `Fn(&C) -> bool`, so closures can be registered
/// directly. Named matchers implement the trait on their own type.
///
/// Matchers receive the criteria by shared reference and must return the same
/// answer for the same criteria within one resolution.
///
/// # Example
///
/// ```
/// use quill_dispatch::Matcher;
///
/// struct Prefix(&'static str);
///
/// impl Matcher<str> for Prefix {
///     fn matches(&self, criteria: &str) -> bool {
///         criteria.starts_with(self.0)
///     }
/// }
///
/// assert!(Prefix("code").matches("code-block"));
/// assert!(!Prefix("code").matches("note"));
/// ```
pub trait Matcher<C: ?Sized> {
    /// Whether the bound transformer handles `criteria`.
    fn matches(&self, criteria: &C) -> bool;
}

impl<C: ?Sized, F> Matcher<C> for F
where
    F: Fn(&C) -> bool,
{
    fn matches(&self, criteria: &C) -> bool {
        self(criteria)
    }
}

/// Matcher that accepts any criteria.
///
/// Usually bound in the fallback tier as the catch-all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Always;

impl<C: ?Sized> Matcher<C> for Always {
    fn matches(&self, _criteria: &C) -> bool {
        true
    }
}
