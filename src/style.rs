//! Transform-string and color-string formatters.
//!
//! Plain templating over the SVG `transform` and CSS color grammars. No
//! validation is performed; out-of-range inputs format as given.

use crate::fmt;

/// `translate(x y)` transform.
pub fn translate(x: f64, y: f64) -> String {
    format!("translate({} {})", fmt::number(x), fmt::number(y))
}

/// `rotate(angle)` transform around the origin. The angle is in degrees,
/// per the SVG transform grammar.
pub fn rotate(angle: f64) -> String {
    format!("rotate({})", fmt::number(angle))
}

/// `rotate(angle cx cy)` transform around an explicit center.
pub fn rotate_about(angle: f64, cx: f64, cy: f64) -> String {
    format!(
        "rotate({} {} {})",
        fmt::number(angle),
        fmt::number(cx),
        fmt::number(cy)
    )
}

/// Uniform `scale(factor)` transform.
pub fn scale(factor: f64) -> String {
    format!("scale({})", fmt::number(factor))
}

/// Non-uniform `scale(x y)` transform.
pub fn scale_xy(x: f64, y: f64) -> String {
    format!("scale({} {})", fmt::number(x), fmt::number(y))
}

/// Join several transform strings with single spaces.
pub fn combine<I, S>(transforms: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, transform) in transforms.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(transform.as_ref());
    }
    out
}

/// `rgb(r,g,b)` color string.
pub fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("rgb({},{},{})", r, g, b)
}

/// `rgba(r,g,b,a)` color string.
pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({},{},{},{})", r, g, b, fmt::number(a))
}

/// `hsl(h,s%,l%)` color string.
pub fn hsl(h: f64, s: f64, l: f64) -> String {
    format!(
        "hsl({},{}%,{}%)",
        fmt::number(h),
        fmt::number(s),
        fmt::number(l)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_formatters() {
        assert_eq!(translate(10.0, 20.0), "translate(10 20)");
        assert_eq!(rotate(45.0), "rotate(45)");
        assert_eq!(rotate_about(45.0, 100.0, 100.0), "rotate(45 100 100)");
        assert_eq!(scale(2.0), "scale(2)");
        assert_eq!(scale_xy(2.0, 0.5), "scale(2 0.5)");
    }

    #[test]
    fn test_combine_joins_with_single_spaces() {
        let combined = combine([translate(5.0, 5.0), rotate(90.0)]);
        assert_eq!(combined, "translate(5 5) rotate(90)");
    }

    #[test]
    fn test_combine_of_one_has_no_separator() {
        assert_eq!(combine(["scale(3)"]), "scale(3)");
    }

    #[test]
    fn test_color_formatters() {
        assert_eq!(rgb(255, 0, 0), "rgb(255,0,0)");
        assert_eq!(rgba(255, 0, 0, 0.7), "rgba(255,0,0,0.7)");
        assert_eq!(hsl(210.0, 50.0, 40.0), "hsl(210,50%,40%)");
    }
}
