//! Shape constructors layered on the node model.
//!
//! Each constructor is a pure mapping from semantic geometry plus an
//! [`Attrs`] override bag into an [`Element`] with a fixed tag and derived
//! attributes. Overrides apply after the derived attributes, so a caller
//! can replace a computed value like `x` without special-casing.

mod path;

pub use path::Path;

use crate::attr::Attrs;
use crate::element::Element;
use crate::fmt;
use crate::geometry::{Point, Size};

impl Element {
    /// A `rect` with derived `x`, `y`, `width`, `height`.
    pub fn rect(position: Point, size: Size, attrs: Attrs) -> Element {
        let mut element = Element::new("rect");
        element
            .set_attribute("x", position.x)
            .set_attribute("y", position.y)
            .set_attribute("width", size.width)
            .set_attribute("height", size.height);
        attrs.apply_to(&mut element);
        element
    }

    /// A `circle` with derived `cx`, `cy`, `r`.
    pub fn circle(center: Point, radius: f64, attrs: Attrs) -> Element {
        let mut element = Element::new("circle");
        element
            .set_attribute("cx", center.x)
            .set_attribute("cy", center.y)
            .set_attribute("r", radius);
        attrs.apply_to(&mut element);
        element
    }

    /// An `ellipse` with derived `cx`, `cy`, `rx`, `ry`.
    pub fn ellipse(center: Point, radius_x: f64, radius_y: f64, attrs: Attrs) -> Element {
        let mut element = Element::new("ellipse");
        element
            .set_attribute("cx", center.x)
            .set_attribute("cy", center.y)
            .set_attribute("rx", radius_x)
            .set_attribute("ry", radius_y);
        attrs.apply_to(&mut element);
        element
    }

    /// A `line` from `start` to `end`.
    pub fn line(start: Point, end: Point, attrs: Attrs) -> Element {
        let mut element = Element::new("line");
        element
            .set_attribute("x1", start.x)
            .set_attribute("y1", start.y)
            .set_attribute("x2", end.x)
            .set_attribute("y2", end.y);
        attrs.apply_to(&mut element);
        element
    }

    /// A `polyline` through `points`, encoded as space-joined `x,y` pairs.
    pub fn polyline(points: &[Point], attrs: Attrs) -> Element {
        let mut element = Element::new("polyline");
        element.set_attribute("points", join_points(points));
        attrs.apply_to(&mut element);
        element
    }

    /// A closed `polygon` through `points`, encoded as space-joined `x,y`
    /// pairs.
    pub fn polygon(points: &[Point], attrs: Attrs) -> Element {
        let mut element = Element::new("polygon");
        element.set_attribute("points", join_points(points));
        attrs.apply_to(&mut element);
        element
    }

    /// A `g` container with no derived attributes.
    pub fn group(attrs: Attrs) -> Element {
        let mut element = Element::new("g");
        attrs.apply_to(&mut element);
        element
    }

    /// A `text` element at `position` carrying a raw text payload.
    ///
    /// The payload renders as the element body, so `text` always
    /// serializes in open/close form.
    pub fn text(position: Point, content: impl Into<String>, attrs: Attrs) -> Element {
        let mut element = Element::new("text");
        element
            .set_attribute("x", position.x)
            .set_attribute("y", position.y);
        attrs.apply_to(&mut element);
        element.set_text(content);
        element
    }
}

fn join_points(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        fmt::push_number(&mut out, point.x);
        out.push(',');
        fmt::push_number(&mut out, point.y);
    }
    out
}
