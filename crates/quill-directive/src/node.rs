//! Parsed input nodes.
//!
//! Nodes are produced by an external parser. A node names the directive it
//! was written with and carries the directive body as an ordered sequence of
//! literal [`Token`]s.

/// Literal text fragment of a node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Token {
    content: String,
}

impl Token {
    /// Create a token from its literal text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Literal text of the token.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl From<&str> for Token {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Token {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

/// Parsed directive block.
///
/// # Example
///
/// ```
/// use quill_directive::Node;
///
/// let node = Node::new("code-block")
///     .with_argument("php")
///     .with_tokens(["<?php\n", "echo 1;\n"]);
///
/// assert_eq!(node.name(), "code-block");
/// assert_eq!(node.argument(), Some("php"));
/// assert_eq!(node.content(), "<?php\necho 1;\n");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    name: String,
    argument: Option<String>,
    tokens: Vec<Token>,
}

impl Node {
    /// Create a node for the named directive with no tokens.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument: None,
            tokens: Vec::new(),
        }
    }

    /// Set the directive argument (e.g., the language of a code block).
    #[must_use]
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.argument = Some(argument.into());
        self
    }

    /// Append a token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<Token>) -> Self {
        self.tokens.push(token.into());
        self
    }

    /// Append several tokens in order.
    #[must_use]
    pub fn with_tokens<I>(mut self, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Token>,
    {
        self.tokens.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// Directive name the node was written with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directive argument, if any.
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    /// Tokens in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Concatenation of all token contents, without separators.
    pub fn content(&self) -> String {
        self.tokens.iter().map(Token::content).collect()
    }
}
