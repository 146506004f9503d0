//! The `path` element and its incremental path-data accumulator.

use crate::attr::Attrs;
use crate::element::Element;
use crate::fmt;

/// A `path` element built by sequential drawing commands.
///
/// Commands append to a private data accumulator; after every mutating
/// call the trimmed accumulator is mirrored into the element's `d`
/// attribute, so the element is always consistent with the commands
/// issued so far. Commands are append-only; there is no undo.
#[derive(Debug, Clone)]
pub struct Path {
    element: Element,
    data: String,
}

impl Path {
    /// Create an empty path. No `d` attribute is written until the first
    /// command.
    pub fn new(attrs: Attrs) -> Self {
        let mut element = Element::new("path");
        attrs.apply_to(&mut element);
        Path {
            element,
            data: String::new(),
        }
    }

    /// Move the pen to `(x, y)` without drawing.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push_command('M', &[x, y]);
        self
    }

    /// Draw a straight line to `(x, y)`.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push_command('L', &[x, y]);
        self
    }

    /// Draw a cubic Bezier curve through two control points to `(x, y)`.
    pub fn curve_to(
        &mut self,
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.push_command('C', &[cp1x, cp1y, cp2x, cp2y, x, y]);
        self
    }

    /// Close the current subpath.
    pub fn close_path(&mut self) -> &mut Self {
        self.data.push_str("Z ");
        self.sync();
        self
    }

    /// Replace the accumulator with a raw path-data string, verbatim.
    ///
    /// Bypasses the command protocol: no validation, no trimming. The `d`
    /// attribute takes the string exactly as given.
    pub fn set_data(&mut self, data: impl Into<String>) -> &mut Self {
        self.data = data.into();
        self.element.set_attribute("d", self.data.clone());
        self
    }

    /// The raw accumulator, trailing separator included.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// The underlying element.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Serialize the path element.
    pub fn to_markup(&self) -> String {
        self.element.to_markup()
    }

    fn push_command(&mut self, op: char, args: &[f64]) {
        self.data.push(op);
        for arg in args {
            self.data.push(' ');
            fmt::push_number(&mut self.data, *arg);
        }
        self.data.push(' ');
        self.sync();
    }

    fn sync(&mut self) {
        let trimmed = self.data.trim().to_string();
        self.element.set_attribute("d", trimmed);
    }
}

impl From<Path> for Element {
    fn from(path: Path) -> Element {
        path.element
    }
}
