//! Generic markup node model and the recursive serializer.

use indexmap::IndexMap;

use crate::attr::{to_kebab, Value};

/// Options for markup serialization.
#[derive(Debug, Clone, Default)]
pub struct MarkupOptions {
    /// Escape XML metacharacters in attribute values and text payloads.
    ///
    /// Off by default: values pass through verbatim, so markup-unsafe
    /// input propagates to the output unchanged. Turn this on when the
    /// payload is not trusted.
    pub escape: bool,
}

impl MarkupOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether values and text payloads are XML-escaped.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }
}

/// A tree node representing one markup element: a tag name, an ordered
/// attribute mapping, and owned children.
///
/// Children are owned values, so a node can only ever sit in one place in
/// one tree and cycles cannot be expressed.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: IndexMap<String, Value>,
    children: Vec<Element>,
    content: Option<String>,
}

impl Element {
    /// Create an element with the given tag, no attributes, no children.
    ///
    /// The tag must be non-empty and cannot change afterwards.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        debug_assert!(!tag.is_empty(), "element tag must be non-empty");
        Element {
            tag,
            attributes: IndexMap::new(),
            children: Vec::new(),
            content: None,
        }
    }

    /// The element's tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The element's children, in append order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Iterate the attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Append a child element.
    pub fn append_child(&mut self, child: impl Into<Element>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Consuming variant of [`append_child`](Self::append_child) for
    /// construction chains.
    pub fn with_child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Insert or overwrite an attribute.
    ///
    /// Overwriting an existing key keeps its original position; new keys
    /// append at the end.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Consuming variant of [`set_attribute`](Self::set_attribute).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Insert or overwrite several attributes at once.
    pub fn set_attributes<K, V>(&mut self, attrs: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in attrs {
            self.attributes.insert(name.into(), value.into());
        }
        self
    }

    /// Look up an attribute by its stored key.
    pub fn get_attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Set the raw text payload.
    ///
    /// An element with a payload always serializes in open/close form with
    /// the payload as its body; any children are not rendered.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.content = Some(text.into());
        self
    }

    /// The raw text payload, if set.
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Serialize this element and its subtree to markup.
    ///
    /// Zero children produce the self-closing form `<tag attrs />`; one or
    /// more children produce `<tag attrs>...</tag>` with the children
    /// concatenated in order. Serialization is a pure read.
    pub fn to_markup(&self) -> String {
        self.to_markup_with(&MarkupOptions::default())
    }

    /// Serialize with explicit options.
    pub fn to_markup_with(&self, options: &MarkupOptions) -> String {
        let mut out = String::new();
        self.write_markup(&mut out, options);
        out
    }

    fn write_markup(&self, out: &mut String, options: &MarkupOptions) {
        out.push('<');
        out.push_str(&self.tag);

        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(&to_kebab(key));
            out.push_str("=\"");
            let rendered = value.to_string();
            if options.escape {
                out.push_str(&escape_xml(&rendered));
            } else {
                out.push_str(&rendered);
            }
            out.push('"');
        }

        if let Some(content) = &self.content {
            out.push('>');
            if options.escape {
                out.push_str(&escape_xml(content));
            } else {
                out.push_str(content);
            }
            out.push_str("</");
            out.push_str(&self.tag);
            out.push('>');
        } else if self.children.is_empty() {
            out.push_str(" />");
        } else {
            out.push('>');
            for child in &self.children {
                child.write_markup(out, options);
            }
            out.push_str("</");
            out.push_str(&self.tag);
            out.push('>');
        }
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_element_is_self_closing() {
        assert_eq!(Element::new("rect").to_markup(), "<rect />");
    }

    #[test]
    fn test_children_force_container_form() {
        let mut group = Element::new("g");
        group.append_child(Element::new("rect"));
        assert_eq!(group.to_markup(), "<g><rect /></g>");
    }

    #[test]
    fn test_children_serialize_in_append_order() {
        let group = Element::new("g")
            .with_child(Element::new("rect"))
            .with_child(Element::new("circle"))
            .with_child(Element::new("line"));
        assert_eq!(group.to_markup(), "<g><rect /><circle /><line /></g>");
    }

    #[test]
    fn test_attributes_serialize_in_insertion_order() {
        let mut element = Element::new("rect");
        element
            .set_attribute("x", 1.0)
            .set_attribute("y", 2.0)
            .set_attribute("fill", "red");
        assert_eq!(element.to_markup(), r#"<rect x="1" y="2" fill="red" />"#);
    }

    #[test]
    fn test_overwrite_keeps_original_position() {
        let mut element = Element::new("rect");
        element
            .set_attribute("x", 1.0)
            .set_attribute("fill", "red")
            .set_attribute("x", 9.0);
        assert_eq!(element.to_markup(), r#"<rect x="9" fill="red" />"#);
    }

    #[test]
    fn test_camel_case_keys_render_hyphenated() {
        let mut element = Element::new("rect");
        element.set_attribute("strokeWidth", 2.0);
        assert_eq!(element.to_markup(), r#"<rect stroke-width="2" />"#);
    }

    #[test]
    fn test_set_attributes_bulk_insert() {
        let mut element = Element::new("line");
        element.set_attributes([("x1", 0.0), ("y1", 0.0), ("x2", 10.0)]);
        assert_eq!(element.to_markup(), r#"<line x1="0" y1="0" x2="10" />"#);
    }

    #[test]
    fn test_get_attribute_roundtrip() {
        let mut element = Element::new("rect");
        element.set_attribute("fill", "blue");
        assert_eq!(element.get_attribute("fill"), Some(&Value::from("blue")));
        assert_eq!(element.get_attribute("stroke"), None);
    }

    #[test]
    fn test_text_payload_forces_open_close_form() {
        let mut element = Element::new("text");
        element.set_text("hello");
        assert_eq!(element.to_markup(), "<text>hello</text>");
    }

    #[test]
    fn test_empty_text_payload_still_open_close() {
        let mut element = Element::new("text");
        element.set_text("");
        assert_eq!(element.to_markup(), "<text></text>");
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let mut element = Element::new("g");
        element.append_child(Element::new("rect"));
        let first = element.to_markup();
        assert_eq!(element.to_markup(), first);
    }

    #[test]
    fn test_values_pass_through_unescaped_by_default() {
        let mut element = Element::new("text");
        element.set_attribute("data-note", "a < b");
        element.set_text("fish & chips");
        assert_eq!(
            element.to_markup(),
            r#"<text data-note="a < b">fish & chips</text>"#
        );
    }

    #[test]
    fn test_escaping_is_opt_in() {
        let mut element = Element::new("text");
        element.set_attribute("data-note", "a < b");
        element.set_text("fish & chips");
        let options = MarkupOptions::new().with_escaping(true);
        assert_eq!(
            element.to_markup_with(&options),
            r#"<text data-note="a &lt; b">fish &amp; chips</text>"#
        );
    }

    #[test]
    fn test_escape_xml_covers_metacharacters() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
    }
}
