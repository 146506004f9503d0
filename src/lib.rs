//! svg-composer - a programmatic SVG document builder
//!
//! This library provides a small node model for assembling SVG shape
//! elements into a tree, and a serializer that renders the tree to SVG
//! markup.
//!
//! # Example
//!
//! ```rust
//! use svg_composer::{Attrs, Element, Point, Size, SvgBuilder};
//!
//! let mut svg = SvgBuilder::new(400.0, 300.0);
//! svg.set_view_box(0.0, 0.0, 400.0, 300.0);
//! svg.add(Element::rect(
//!     Point::new(50.0, 50.0),
//!     Size::new(100.0, 80.0),
//!     Attrs::new().with_fill("blue").with_stroke("black").with_stroke_width(2.0),
//! ));
//!
//! let markup = svg.to_string();
//! assert!(markup.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
//! assert!(markup.contains(r#"<rect x="50" y="50" width="100" height="80" fill="blue""#));
//! ```
//!
//! Shape constructors take semantic geometry plus an [`Attrs`] override
//! bag; overrides are applied after the derived attributes, so callers
//! can replace any computed value. The [`Path`] shape builds its `d`
//! attribute incrementally through drawing commands:
//!
//! ```rust
//! use svg_composer::{Attrs, Path};
//!
//! let mut path = Path::new(Attrs::new().with_fill("none").with_stroke("black"));
//! path.move_to(0.0, 0.0).line_to(10.0, 0.0).line_to(10.0, 10.0).close_path();
//!
//! assert_eq!(
//!     path.to_markup(),
//!     r#"<path fill="none" stroke="black" d="M 0 0 L 10 0 L 10 10 Z" />"#
//! );
//! ```

pub mod attr;
pub mod document;
pub mod element;
pub mod error;
mod fmt;
pub mod geometry;
pub mod shape;
pub mod storage;
pub mod style;

pub use attr::{Attrs, Value};
pub use document::{Document, SvgBuilder, SVG_NAMESPACE};
pub use element::{Element, MarkupOptions};
pub use error::SaveError;
pub use geometry::{Point, Size};
pub use shape::Path;
pub use storage::{FileSink, NoStorage, StorageSink};
