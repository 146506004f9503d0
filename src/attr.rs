//! Attribute values, the typed override bag, and key translation.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;

use crate::element::Element;

/// An attribute value: raw text or a number.
///
/// Numbers render in JavaScript `Number#toString()` form, so whole values
/// print without a trailing `.0`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl Value {
    /// The text payload, if this value is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Number(_) => None,
        }
    }

    /// The numeric payload, if this value is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Text(_) => None,
            Value::Number(number) => Some(*number),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Number(number) => {
                let mut buf = ryu_js::Buffer::new();
                f.write_str(buf.format(*number))
            }
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Value::Number(number as f64)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Number(number as f64)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Number(number as f64)
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Value::Number(number as f64)
    }
}

/// Presentation attribute overrides accepted by every shape constructor.
///
/// The recognized set is typed; anything else passes through `extra`
/// verbatim (keys may be camelCase, e.g. `fontFamily`). Overrides are
/// applied after the derived geometry attributes, so a caller can replace
/// a computed `x` or `width` without special-casing.
#[derive(Debug, Clone, Default)]
pub struct Attrs {
    pub id: Option<String>,
    pub class: Option<String>,
    pub style: Option<String>,
    pub transform: Option<String>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
    /// Open passthrough for caller-defined attributes, in insertion order.
    pub extra: IndexMap<String, Value>,
}

impl Attrs {
    /// Create an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = Some(transform.into());
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Add an arbitrary attribute to the passthrough set.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Write the overrides into `element`, recognized fields first, then
    /// the passthrough set in insertion order.
    pub(crate) fn apply_to(self, element: &mut Element) {
        if let Some(id) = self.id {
            element.set_attribute("id", id);
        }
        if let Some(class) = self.class {
            element.set_attribute("class", class);
        }
        if let Some(style) = self.style {
            element.set_attribute("style", style);
        }
        if let Some(transform) = self.transform {
            element.set_attribute("transform", transform);
        }
        if let Some(fill) = self.fill {
            element.set_attribute("fill", fill);
        }
        if let Some(stroke) = self.stroke {
            element.set_attribute("stroke", stroke);
        }
        if let Some(stroke_width) = self.stroke_width {
            element.set_attribute("strokeWidth", stroke_width);
        }
        if let Some(opacity) = self.opacity {
            element.set_attribute("opacity", opacity);
        }
        for (name, value) in self.extra {
            element.set_attribute(name, value);
        }
    }
}

/// SVG attribute names that are camelCase in the SVG grammar itself.
///
/// The hyphenation rule would mangle these into names no SVG consumer
/// recognizes (`viewBox` -> `view-box`), so they pass through verbatim.
const SVG_CAMEL_ATTRIBUTES: &[&str] = &[
    "baseFrequency",
    "clipPathUnits",
    "diffuseConstant",
    "gradientTransform",
    "gradientUnits",
    "kernelMatrix",
    "kernelUnitLength",
    "lengthAdjust",
    "markerHeight",
    "markerUnits",
    "markerWidth",
    "maskContentUnits",
    "maskUnits",
    "numOctaves",
    "pathLength",
    "patternContentUnits",
    "patternTransform",
    "patternUnits",
    "preserveAspectRatio",
    "primitiveUnits",
    "refX",
    "refY",
    "repeatCount",
    "repeatDur",
    "specularConstant",
    "specularExponent",
    "spreadMethod",
    "startOffset",
    "stdDeviation",
    "surfaceScale",
    "tableValues",
    "textLength",
    "viewBox",
];

/// Translate a stored attribute key into its serialized form.
///
/// Every ASCII upper-case letter becomes a hyphen followed by its
/// lower-case form (`strokeWidth` -> `stroke-width`). Keys with no
/// upper-case letters, and SVG's own camelCase names, pass through
/// unchanged.
pub(crate) fn to_kebab(key: &str) -> Cow<'_, str> {
    if !key.bytes().any(|b| b.is_ascii_uppercase()) || SVG_CAMEL_ATTRIBUTES.contains(&key) {
        return Cow::Borrowed(key);
    }

    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translates_single_boundary() {
        assert_eq!(to_kebab("strokeWidth"), "stroke-width");
        assert_eq!(to_kebab("fontFamily"), "font-family");
    }

    #[test]
    fn test_translates_every_boundary() {
        assert_eq!(to_kebab("strokeDashArray"), "stroke-dash-array");
    }

    #[test]
    fn test_lowercase_keys_pass_through() {
        assert_eq!(to_kebab("fill"), "fill");
        assert_eq!(to_kebab("stroke-width"), "stroke-width");
    }

    #[test]
    fn test_translation_is_idempotent() {
        let once = to_kebab("strokeWidth").into_owned();
        assert_eq!(to_kebab(&once), once);
    }

    #[test]
    fn test_svg_camel_names_are_preserved() {
        assert_eq!(to_kebab("viewBox"), "viewBox");
        assert_eq!(to_kebab("preserveAspectRatio"), "preserveAspectRatio");
        assert_eq!(to_kebab("gradientUnits"), "gradientUnits");
    }

    #[test]
    fn test_number_values_display_like_javascript() {
        assert_eq!(Value::from(50.0).to_string(), "50");
        assert_eq!(Value::from(0.5).to_string(), "0.5");
        assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_text_values_display_verbatim() {
        assert_eq!(Value::from("24px").to_string(), "24px");
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::from("blue").as_str(), Some("blue"));
        assert_eq!(Value::from("blue").as_number(), None);
        assert_eq!(Value::from(2.0).as_number(), Some(2.0));
    }

    #[test]
    fn test_attrs_apply_in_fixed_order() {
        let mut element = Element::new("rect");
        Attrs::new()
            .with_opacity(0.5)
            .with_fill("blue")
            .with_id("box")
            .apply_to(&mut element);

        let keys: Vec<&str> = element.attributes().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["id", "fill", "opacity"]);
    }

    #[test]
    fn test_extra_attrs_keep_insertion_order() {
        let mut element = Element::new("text");
        Attrs::new()
            .with_attr("fontSize", "24px")
            .with_attr("fontFamily", "Arial")
            .apply_to(&mut element);

        let keys: Vec<&str> = element.attributes().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["fontSize", "fontFamily"]);
    }
}
