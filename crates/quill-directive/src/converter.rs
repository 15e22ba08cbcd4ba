//! Document conversion driver.
//!
//! Resolves a directive for every node and renders the nodes into one
//! [`Document`] per requested [`OutputFormat`].

use std::sync::Arc;

use quill_dispatch::{Always, Registry};

use crate::{
    CodeBlockDirective, ConvertError, Directive, DirectiveName, Document, Node, OutputFormat,
    ParagraphDirective,
};

/// Registry resolving input nodes to directives.
pub type DirectiveRegistry = Registry<Node, Arc<dyn Directive>>;

/// Directive names handled by [`CodeBlockDirective`] in the standard wiring.
const CODE_BLOCK_NAMES: [&str; 3] = ["code-block", "code", "sourcecode"];

/// What to do with a node no directive is registered for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnresolvedPolicy {
    /// Leave the node out of every output document.
    #[default]
    Skip,
    /// Abort conversion with [`ConvertError::Unresolved`].
    Error,
}

/// Options for [`Converter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Formats to generate, one document each, in this order.
    pub formats: Vec<OutputFormat>,
    /// Handling of nodes without a matching directive.
    pub on_unresolved: UnresolvedPolicy,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            formats: OutputFormat::ALL.to_vec(),
            on_unresolved: UnresolvedPolicy::default(),
        }
    }
}

impl ConvertOptions {
    /// Set the formats to generate.
    #[must_use]
    pub fn with_formats(mut self, formats: impl Into<Vec<OutputFormat>>) -> Self {
        self.formats = formats.into();
        self
    }

    /// Set the unresolved-node policy.
    #[must_use]
    pub fn with_on_unresolved(mut self, policy: UnresolvedPolicy) -> Self {
        self.on_unresolved = policy;
        self
    }
}

/// Output tree generated for one format.
#[derive(Debug)]
pub struct Rendered {
    /// Format of the document.
    pub format: OutputFormat,
    /// The populated output tree.
    pub document: Document,
}

/// Converts parsed nodes into output documents.
///
/// Every node is resolved once through the registry (the node itself is the
/// criteria). The resolved directive is then invoked once per configured
/// format. Formats a directive does not support are skipped for that
/// directive only.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use quill_directive::{
///     CodeBlockDirective, ConvertOptions, Converter, DirectiveName, DirectiveRegistry, Node,
///     OutputFormat,
/// };
///
/// let registry = DirectiveRegistry::new()
///     .with(DirectiveName::new("code-block"), Arc::new(CodeBlockDirective));
/// let options = ConvertOptions::default().with_formats([OutputFormat::Docbook]);
/// let converter = Converter::new(registry, options);
///
/// let rendered = converter
///     .convert(&[Node::new("code-block").with_token("x\n")])
///     .unwrap();
///
/// assert_eq!(rendered.len(), 1);
/// assert_eq!(rendered[0].format, OutputFormat::Docbook);
/// ```
#[derive(Debug)]
pub struct Converter {
    registry: DirectiveRegistry,
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter from an already wired registry.
    #[must_use]
    pub fn new(registry: DirectiveRegistry, options: ConvertOptions) -> Self {
        Self { registry, options }
    }

    /// Create a converter with the built-in directives.
    ///
    /// `code-block`, `code` and `sourcecode` nodes render as code blocks;
    /// every other node falls back to a paragraph.
    #[must_use]
    pub fn standard(options: ConvertOptions) -> Self {
        Self::new(standard_registry(), options)
    }

    /// The registry nodes are resolved against.
    pub fn registry(&self) -> &DirectiveRegistry {
        &self.registry
    }

    /// Conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert `nodes` into one document per configured format.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Unresolved`] for the first node without a
    /// matching directive when the policy is [`UnresolvedPolicy::Error`].
    pub fn convert(&self, nodes: &[Node]) -> Result<Vec<Rendered>, ConvertError> {
        let resolved = self.resolve_all(nodes)?;

        let rendered = self
            .options
            .formats
            .iter()
            .map(|&format| Rendered {
                format,
                document: render_document(format, &resolved),
            })
            .collect();

        Ok(rendered)
    }

    /// Resolve every node, applying the unresolved policy to misses.
    fn resolve_all<'a>(
        &'a self,
        nodes: &'a [Node],
    ) -> Result<Vec<(&'a Node, &'a dyn Directive)>, ConvertError> {
        let mut resolved = Vec::with_capacity(nodes.len());

        for (position, node) in nodes.iter().enumerate() {
            match self.registry.resolve_binding(node) {
                Some(binding) => {
                    tracing::debug!(
                        node = node.name(),
                        directive = binding.transformer.name(),
                        tier = %binding.tier,
                        "Resolved directive"
                    );
                    resolved.push((node, &**binding.transformer));
                }
                None => match self.options.on_unresolved {
                    UnresolvedPolicy::Skip => {
                        tracing::warn!(
                            node = node.name(),
                            position,
                            "No directive for node, skipping"
                        );
                    }
                    UnresolvedPolicy::Error => {
                        return Err(ConvertError::Unresolved {
                            name: node.name().to_owned(),
                        });
                    }
                },
            }
        }

        Ok(resolved)
    }
}

fn render_document(format: OutputFormat, resolved: &[(&Node, &dyn Directive)]) -> Document {
    let mut document = Document::for_format(format);

    for (node, directive) in resolved {
        if !directive.render(format, node, &mut document.cursor()) {
            tracing::debug!(
                directive = directive.name(),
                %format,
                "Directive does not support format, skipping"
            );
        }
    }

    document
}

fn standard_registry() -> DirectiveRegistry {
    DirectiveRegistry::new()
        .with(
            DirectiveName::any_of(CODE_BLOCK_NAMES),
            Arc::new(CodeBlockDirective),
        )
        .with_fallback(Always, Arc::new(ParagraphDirective))
}
