//! HTML escaping utilities.
//!
//! Fast-path optimized: scans for first escapable character,
//! then bulk-copies segments between escapes.
//!
//! Message text arrives from Slack already entity-escaped, so only values
//! that come from the caller's lookup tables (display names) go through here.

use memchr::{memchr, memchr3};

/// Lookup table for escapable characters in text content.
/// Index by byte value, true if needs escaping.
const TEXT_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table
};

/// Escape HTML text content into output buffer.
///
/// Escapes `<`, `>`, `&` and `"` to their HTML entity equivalents.
///
/// # Example
/// ```
/// use slackdown::escape::escape_text_into;
///
/// let mut out = String::new();
/// escape_text_into(&mut out, "<script>");
/// assert_eq!(out, "&lt;script&gt;");
/// ```
pub fn escape_text_into(out: &mut String, input: &str) {
    let bytes = input.as_bytes();
    let Some(first) = first_text_escape(bytes) else {
        out.push_str(input);
        return;
    };

    out.reserve(input.len() + input.len() / 8);
    out.push_str(&input[..first]);

    // Escapable bytes are ASCII, so every split point is a char boundary.
    let mut copied = first;
    for (pos, &b) in bytes.iter().enumerate().skip(first) {
        if !TEXT_ESCAPE_TABLE[b as usize] {
            continue;
        }
        let escape_seq = match b {
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'&' => "&amp;",
            b'"' => "&quot;",
            _ => unreachable!(),
        };
        out.push_str(&input[copied..pos]);
        out.push_str(escape_seq);
        copied = pos + 1;
    }
    out.push_str(&input[copied..]);
}

#[inline]
fn first_text_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr(b'"', input);
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
