//! Two-tier dispatch registry.

use std::fmt;

use crate::Matcher;

type BoxedMatcher<C> = Box<dyn Matcher<C> + Send + Sync>;

/// A registered `(matcher, transformer)` pair.
struct Binding<C: ?Sized, T> {
    matcher: BoxedMatcher<C>,
    transformer: T,
}

/// Binding tier a transformer was resolved from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Bindings added with [`Registry::register`].
    Primary,
    /// Bindings added with [`Registry::register_fallback`].
    Fallback,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// Successful resolution with the location of the matching binding.
#[derive(Debug, PartialEq, Eq)]
pub struct Resolved<'a, T> {
    /// The bound transformer.
    pub transformer: &'a T,
    /// Tier the binding lives in.
    pub tier: Tier,
    /// Zero-based position of the binding within its tier.
    pub index: usize,
}

/// Ordered registry mapping criteria to transformers.
///
/// Bindings are split into a primary and a fallback tier. Each tier keeps
/// insertion order, and the first matching binding wins. The fallback tier is
/// only consulted after every primary matcher rejected the criteria, so a
/// catch-all fallback never shadows a specific rule regardless of which one
/// was registered first.
///
/// Registration happens during wiring. After that the registry is only read,
/// and it is `Send + Sync` whenever `T` is, so concurrent [`resolve`](Self::resolve)
/// calls need no locking.
///
/// Matchers are not guarded: a panicking matcher propagates out of `resolve`.
///
/// # Example
///
/// ```
/// use quill_dispatch::{Always, Registry};
///
/// let mut registry = Registry::<u32, &str>::new();
/// registry.register(|n: &u32| n % 2 == 0, "even");
/// registry.register_fallback(Always, "odd");
///
/// assert_eq!(registry.resolve(&4), Some(&"even"));
/// assert_eq!(registry.resolve(&7), Some(&"odd"));
/// ```
pub struct Registry<C: ?Sized, T> {
    primary: Vec<Binding<C, T>>,
    fallback: Vec<Binding<C, T>>,
}

impl<C: ?Sized, T> Default for Registry<C, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized, T> Registry<C, T> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            primary: Vec::new(),
            fallback: Vec::new(),
        }
    }

    /// Append a binding to the primary tier.
    ///
    /// No uniqueness check is made; an earlier overlapping binding wins.
    pub fn register<M>(&mut self, matcher: M, transformer: T)
    where
        M: Matcher<C> + Send + Sync + 'static,
    {
        self.primary.push(Binding {
            matcher: Box::new(matcher),
            transformer,
        });
    }

    /// Append a binding to the fallback tier.
    ///
    /// Fallback bindings are tried only when no primary binding matches.
    pub fn register_fallback<M>(&mut self, matcher: M, transformer: T)
    where
        M: Matcher<C> + Send + Sync + 'static,
    {
        self.fallback.push(Binding {
            matcher: Box::new(matcher),
            transformer,
        });
    }

    /// Register a primary binding (builder form of [`register`](Self::register)).
    #[must_use]
    pub fn with<M>(mut self, matcher: M, transformer: T) -> Self
    where
        M: Matcher<C> + Send + Sync + 'static,
    {
        self.register(matcher, transformer);
        self
    }

    /// Register a fallback binding (builder form of [`register_fallback`](Self::register_fallback)).
    #[must_use]
    pub fn with_fallback<M>(mut self, matcher: M, transformer: T) -> Self
    where
        M: Matcher<C> + Send + Sync + 'static,
    {
        self.register_fallback(matcher, transformer);
        self
    }

    /// Resolve criteria to a transformer.
    ///
    /// Returns `None` when no binding in either tier matches.
    pub fn resolve(&self, criteria: &C) -> Option<&T> {
        self.resolve_binding(criteria).map(|r| r.transformer)
    }

    /// Resolve criteria and report which binding matched.
    pub fn resolve_binding(&self, criteria: &C) -> Option<Resolved<'_, T>> {
        let resolved = first_match(&self.primary, criteria, Tier::Primary)
            .or_else(|| first_match(&self.fallback, criteria, Tier::Fallback));

        match &resolved {
            Some(r) => tracing::trace!(tier = %r.tier, index = r.index, "Resolved transformer"),
            None => tracing::trace!(
                primary = self.primary.len(),
                fallback = self.fallback.len(),
                "No transformer matched"
            ),
        }

        resolved
    }

    /// Total number of bindings in both tiers.
    pub fn len(&self) -> usize {
        self.primary.len() + self.fallback.len()
    }

    /// Whether no bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.fallback.is_empty()
    }

    /// Number of primary bindings.
    pub fn primary_len(&self) -> usize {
        self.primary.len()
    }

    /// Number of fallback bindings.
    pub fn fallback_len(&self) -> usize {
        self.fallback.len()
    }
}

impl<C: ?Sized, T> fmt::Debug for Registry<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("primary", &self.primary.len())
            .field("fallback", &self.fallback.len())
            .finish()
    }
}

fn first_match<'a, C: ?Sized, T>(
    bindings: &'a [Binding<C, T>],
    criteria: &C,
    tier: Tier,
) -> Option<Resolved<'a, T>> {
    bindings
        .iter()
        .position(|b| b.matcher.matches(criteria))
        .map(|index| Resolved {
            transformer: &bindings[index].transformer,
            tier,
            index,
        })
}
