//! Markup serialization for [`Document`].

use quick_xml::escape::escape;

use super::{Document, ElementId};
use crate::OutputFormat;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Options for [`Document::to_markup`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Prefix the output with an XML declaration.
    pub xml_declaration: bool,
    /// Write elements with no text and no children as `<name/>`.
    ///
    /// XHTML served as HTML needs explicit end tags, so this is off by default.
    pub self_closing_empty: bool,
}

impl SerializeOptions {
    /// Defaults suited to `format`.
    ///
    /// `DocBook` output gets an XML declaration and self-closing empty elements.
    #[must_use]
    pub fn for_format(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Xhtml => Self::default(),
            OutputFormat::Docbook => Self {
                xml_declaration: true,
                self_closing_empty: true,
            },
        }
    }

    /// Set whether to write an XML declaration.
    #[must_use]
    pub fn with_xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }
}

impl Document {
    /// Serialize the tree as compact markup.
    ///
    /// No whitespace is inserted between elements, so preformatted content
    /// round-trips exactly. Text and attribute values are escaped.
    pub fn to_markup(&self, options: &SerializeOptions) -> String {
        let mut out = String::new();
        if options.xml_declaration {
            out.push_str(XML_DECLARATION);
        }
        self.write_element(self.root(), *options, &mut out);
        out
    }

    fn write_element(&self, id: ElementId, options: SerializeOptions, out: &mut String) {
        let element = self.element(id);

        out.push('<');
        out.push_str(element.name());
        for (name, value) in element.attributes() {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value.as_str()));
            out.push('"');
        }

        let text = element.text().unwrap_or_default();
        if options.self_closing_empty && text.is_empty() && element.children().is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        out.push_str(&escape(text));
        for &child in element.children() {
            self.write_element(child, options, out);
        }
        out.push_str("</");
        out.push_str(element.name());
        out.push('>');
    }
}
