//! Document root wrapper and the fluent builder facade.

use std::fmt::{self, Display};

use crate::attr::Attrs;
use crate::element::{Element, MarkupOptions};
use crate::error::SaveError;
use crate::fmt as numfmt;
use crate::geometry::Size;
use crate::storage::{FileSink, StorageSink};

/// The fixed XML namespace carried by every document root.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// The literal declaration line prefixed to full-document output.
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A complete SVG document: a root `svg` element plus the XML prologue.
///
/// The root always carries `width`, `height` and the fixed namespace;
/// caller overrides apply after those, so they can be replaced like any
/// derived attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Create a document of the given size.
    pub fn new(size: Size) -> Self {
        Self::with_attrs(size, Attrs::new())
    }

    /// Create a document with attribute overrides on the root.
    pub fn with_attrs(size: Size, attrs: Attrs) -> Self {
        let mut root = Element::new("svg");
        root.set_attribute("width", size.width)
            .set_attribute("height", size.height)
            .set_attribute("xmlns", SVG_NAMESPACE);
        attrs.apply_to(&mut root);
        Document { root }
    }

    /// Write the `viewBox` attribute as four space-joined numbers.
    pub fn set_view_box(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        let mut view_box = String::new();
        for (i, value) in [x, y, width, height].iter().enumerate() {
            if i > 0 {
                view_box.push(' ');
            }
            numfmt::push_number(&mut view_box, *value);
        }
        self.root.set_attribute("viewBox", view_box);
        self
    }

    /// Append a child to the root element.
    pub fn append(&mut self, child: impl Into<Element>) -> &mut Self {
        self.root.append_child(child);
        self
    }

    /// The root `svg` element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Mutable access to the root `svg` element.
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Markup of the root element only, without the XML declaration.
    pub fn to_svg(&self) -> String {
        self.root.to_markup()
    }

    /// Root-element markup with explicit serialization options.
    pub fn to_svg_with(&self, options: &MarkupOptions) -> String {
        self.root.to_markup_with(options)
    }

    /// Write the full document to a file.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), SaveError> {
        let name = path.as_ref().to_string_lossy().into_owned();
        FileSink.write(&name, &self.to_string())
    }

    /// Write the full document through an injected storage sink.
    pub fn save_to(&self, sink: &mut dyn StorageSink, name: &str) -> Result<(), SaveError> {
        sink.write(name, &self.to_string())
    }
}

impl Display for Document {
    /// Full-document form: the XML declaration line, a newline, then the
    /// root element markup.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", XML_DECLARATION, self.root.to_markup())
    }
}

/// Fluent facade over a single [`Document`].
///
/// Trades direct tree access for a narrow `add`/`set_view_box`/serialize
/// surface; the underlying document stays reachable through
/// [`document`](Self::document) and [`root`](Self::root).
#[derive(Debug, Clone, PartialEq)]
pub struct SvgBuilder {
    document: Document,
}

impl SvgBuilder {
    /// Create a builder around a new document of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_attrs(width, height, Attrs::new())
    }

    /// Create a builder with attribute overrides on the document root.
    pub fn with_attrs(width: f64, height: f64, attrs: Attrs) -> Self {
        SvgBuilder {
            document: Document::with_attrs(Size::new(width, height), attrs),
        }
    }

    /// Append an element to the document root.
    pub fn add(&mut self, element: impl Into<Element>) -> &mut Self {
        self.document.append(element);
        self
    }

    /// Write the document's `viewBox` attribute.
    pub fn set_view_box(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.document.set_view_box(x, y, width, height);
        self
    }

    /// The wrapped document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The document's root element.
    pub fn root(&self) -> &Element {
        self.document.root()
    }

    /// Mutable access to the document's root element.
    pub fn root_mut(&mut self) -> &mut Element {
        self.document.root_mut()
    }

    /// Root-element markup, without the XML declaration.
    pub fn to_svg(&self) -> String {
        self.document.to_svg()
    }

    /// Write the full document to a file.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), SaveError> {
        self.document.save(path)
    }

    /// Write the full document through an injected storage sink.
    pub fn save_to(&self, sink: &mut dyn StorageSink, name: &str) -> Result<(), SaveError> {
        self.document.save_to(sink, name)
    }
}

impl Display for SvgBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.document.fmt(f)
    }
}
