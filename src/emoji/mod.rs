//! `:shortcode:` expansion.
//!
//! Names resolve through the caller's custom table first, then the
//! built-in one. A value is either hyphen-joined hex code points
//! (`0023-FE0F-20E3`), an image URL, or `alias:<name>` pointing at
//! another entry.

pub mod table;

use memchr::memchr;
use tracing::debug;

use crate::limits::MAX_EMOJI_ALIAS_DEPTH;
use crate::options::Options;
use crate::render::HtmlWriter;

const ALIAS_PREFIX: &str = "alias:";

/// A shortcode occurrence: `start` is the opening `:`, `end` is one past
/// the closing `:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcode {
    pub start: usize,
    pub end: usize,
}

impl Shortcode {
    /// The name between the colons.
    #[inline]
    pub fn name<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start + 1..self.end - 1]
    }
}

/// Leftmost-longest shortcode at or after `from`.
///
/// Starting from the first `:`, the shortcode closes at the last `:` of
/// the same whitespace-free run, provided at least one byte lies between
/// the two colons.
pub fn find_shortcode(text: &str, from: usize) -> Option<Shortcode> {
    let bytes = text.as_bytes();
    let mut pos = from;
    while pos < bytes.len() {
        let start = pos + memchr(b':', &bytes[pos..])?;
        let name_start = start + 1;
        let run = &text[name_start..];
        let run_end = name_start
            + run
                .char_indices()
                .find(|(_, c)| c.is_whitespace())
                .map_or(run.len(), |(i, _)| i);
        if let Some(close) = memchr::memrchr(b':', &bytes[name_start..run_end]) {
            if close > 0 {
                return Some(Shortcode {
                    start,
                    end: name_start + close + 1,
                });
            }
        }
        pos = name_start;
    }
    None
}

/// Resolve `name` to a terminal table value, following aliases.
pub fn resolve<'a>(name: &str, options: &'a Options) -> Option<&'a str> {
    let lookup = |key: &str| -> Option<&'a str> {
        options
            .custom_emoji
            .get(key)
            .map(String::as_str)
            .or_else(|| table::lookup(key))
    };

    let mut value = lookup(name)?;
    for _ in 0..MAX_EMOJI_ALIAS_DEPTH {
        match value.strip_prefix(ALIAS_PREFIX) {
            Some(target) => value = lookup(target)?,
            None => return Some(value),
        }
    }
    debug!(name, depth = MAX_EMOJI_ALIAS_DEPTH, "emoji alias chain cut off");
    None
}

/// Write the replacement for `name`. Returns `false`, writing nothing,
/// when the name does not resolve to something renderable.
pub fn write_emoji(out: &mut HtmlWriter, name: &str, options: &Options) -> bool {
    let Some(value) = resolve(name, options) else {
        return false;
    };
    if value.starts_with("http://") || value.starts_with("https://") {
        out.emoji_image(name, value);
        return true;
    }
    if !value.split('-').all(is_code_point) {
        return false;
    }
    out.code_point_refs(value.split('-'));
    true
}

fn is_code_point(code: &str) -> bool {
    !code.is_empty() && code.len() <= 6 && code.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Expand shortcodes in `text`.
///
/// Only the first shortcode is considered unless
/// [`Options::expand_all_emoji`] is set. Unknown names stay as written.
///
/// # Example
/// ```
/// use slackdown::{Options, emoji::expand_emoji};
///
/// assert_eq!(expand_emoji("hi :wave:", &Options::default()), "hi &#x1F44B");
/// ```
pub fn expand_emoji(text: &str, options: &Options) -> String {
    let mut out = HtmlWriter::with_capacity_for(text.len());
    expand_emoji_into(&mut out, text, options);
    out.into_string()
}

/// Expand shortcodes in `text`, appending to `out`.
pub fn expand_emoji_into(out: &mut HtmlWriter, text: &str, options: &Options) {
    let mut copied = 0;
    let mut pos = 0;
    while let Some(shortcode) = find_shortcode(text, pos) {
        out.write_str(&text[copied..shortcode.start]);
        if !write_emoji(out, shortcode.name(text), options) {
            out.write_str(&text[shortcode.start..shortcode.end]);
        }
        copied = shortcode.end;
        pos = shortcode.end;
        if !options.expand_all_emoji {
            break;
        }
    }
    out.write_str(&text[copied..]);
}
