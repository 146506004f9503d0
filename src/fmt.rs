//! Float formatting for markup output.
//!
//! SVG tooling in the wild stringifies coordinates the way JavaScript's
//! `Number#toString()` does: whole numbers carry no fractional part and
//! everything else is the shortest round-trippable decimal. `ryu-js`
//! implements exactly those semantics, including `NaN` and `Infinity`
//! spellings.

/// Format a float as JavaScript would.
pub(crate) fn number(value: f64) -> String {
    let mut out = String::new();
    push_number(&mut out, value);
    out
}

/// Append a float to `out` in JavaScript form.
pub(crate) fn push_number(out: &mut String, value: f64) {
    let mut buf = ryu_js::Buffer::new();
    out.push_str(buf.format(value));
}
