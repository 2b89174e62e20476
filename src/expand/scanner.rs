//! Delimiter scanning inside one window.
//!
//! Finds the first opening delimiter whose left context is a valid
//! boundary, then the best closing occurrence for it:
//! - the first occurrence whose right context is a valid boundary, then
//! - greedily any later valid occurrence, as long as no whitespace lies
//!   between the adopted closing and the next one.
//!
//! This is what lets `*bold*word*` close at the last `*` while
//! `*a* normal *b*` still resolves as two separate matches.

use memchr::{memchr, memmem};

use crate::window::Window;

/// Bytes that may directly precede an opening delimiter
/// (besides whitespace and start of text).
///
/// `>` lets a delimiter follow a tag emitted by an earlier pass.
pub static OPENING_CONTEXT: [bool; 256] = {
    let mut table = [false; 256];
    table[b'*' as usize] = true;
    table[b'_' as usize] = true;
    table[b'~' as usize] = true;
    table[b'>' as usize] = true;
    table[b'`' as usize] = true;
    table
};

/// Bytes that may directly follow a closing delimiter
/// (besides whitespace, end of text and a triple backtick).
///
/// `<` lets a delimiter close right before a tag emitted by an earlier pass.
pub static CLOSING_CONTEXT: [bool; 256] = {
    let mut table = [false; 256];
    table[b'*' as usize] = true;
    table[b'_' as usize] = true;
    table[b'~' as usize] = true;
    table[b'<' as usize] = true;
    table
};

const TRIPLE_BACKTICK: &[u8] = b"```";

/// Terminator of an asymmetric construct. Never consumed by the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// End of the text buffer only.
    EndOfText,
    /// The next newline, or end of the text buffer.
    LineOrEnd,
}

/// What ended a closing match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// The closing delimiter itself (consumed).
    Delimiter,
    /// A newline (left in place).
    Newline,
    /// End of the text buffer.
    EndOfText,
}

/// An accepted opening delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opening {
    /// Byte offset of the delimiter.
    pub index: usize,
    /// Bytes consumed from `index`: the delimiter plus any padding after it.
    pub len: usize,
    /// Bytes of whitespace captured in front of `index` (space-padded passes).
    pub leading_whitespace: usize,
}

/// An accepted closing delimiter or terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Closing {
    /// Byte offset of the closing delimiter or terminator.
    pub index: usize,
    /// Bytes consumed from `index` (zero for terminators).
    pub len: usize,
    pub terminator: Terminator,
}

/// A matched delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterMatch {
    pub opening: Opening,
    pub closing: Closing,
}

impl DelimiterMatch {
    /// The bytes the replacement overwrites, captured whitespace included.
    #[inline]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.opening.index - self.opening.leading_whitespace..self.closing.index + self.closing.len
    }

    /// Whitespace captured in front of the opening delimiter.
    #[inline]
    pub fn leading(&self) -> std::ops::Range<usize> {
        self.opening.index - self.opening.leading_whitespace..self.opening.index
    }

    /// The bytes between the delimiters.
    #[inline]
    pub fn inner(&self) -> std::ops::Range<usize> {
        self.opening.index + self.opening.len..self.closing.index
    }
}

/// Scanner for one delimiter literal.
///
/// Holds no reference to the text so one scanner can serve a whole pass
/// while the pass keeps rewriting its buffer.
pub struct Scanner {
    finder: memmem::Finder<'static>,
    delimiter_len: usize,
    space_padded: bool,
    ending: Option<Ending>,
}

impl Scanner {
    /// Create a scanner for `delimiter`.
    ///
    /// With an `ending`, the construct is asymmetric: it is closed by the
    /// terminator instead of a second delimiter.
    pub fn new(delimiter: &'static str, space_padded: bool, ending: Option<Ending>) -> Self {
        debug_assert!(!delimiter.is_empty() && delimiter.is_ascii());
        Self {
            finder: memmem::Finder::new(delimiter),
            delimiter_len: delimiter.len(),
            space_padded,
            ending,
        }
    }

    /// Find the next match in `window`, searching from byte offset `from`.
    ///
    /// An opening rejected for an empty interior (`**`, an empty `&gt;`
    /// line) leaves the scan running after it. An opening with no closing
    /// at all ends the scan: any later opening would search a subset of
    /// the same range.
    pub fn scan(&self, text: &str, window: Window, from: usize) -> Option<DelimiterMatch> {
        if window.is_empty() || from >= window.end || window.end > text.len() {
            return None;
        }
        let mut from = from.max(window.start);
        loop {
            let opening = self.find_opening(text, from, window.end)?;
            let search = match self.ending {
                Some(ending) => find_terminator(text, &opening, window, ending),
                None => self.find_closing(text, &opening, window),
            };
            match search {
                ClosingSearch::Found(closing) => return Some(DelimiterMatch { opening, closing }),
                ClosingSearch::RetryFrom(pos) => from = pos,
                ClosingSearch::Exhausted => return None,
            }
        }
    }

    /// First delimiter occurrence in `[from, end)` with a valid left context.
    pub fn find_opening(&self, text: &str, from: usize, end: usize) -> Option<Opening> {
        let bytes = text.as_bytes();
        let mut pos = from;
        while pos < end {
            let index = pos + self.finder.find(&bytes[pos..end])?;
            if let Some(opening) = self.opening_at(text, index, end) {
                return Some(opening);
            }
            pos = index + 1;
        }
        None
    }

    fn opening_at(&self, text: &str, index: usize, end: usize) -> Option<Opening> {
        let before = text[..index].chars().next_back();
        let leading_whitespace = if self.space_padded {
            match before {
                None | Some('>') => 0,
                Some(c) if c.is_whitespace() => c.len_utf8(),
                Some(_) => return None,
            }
        } else {
            if !opens_after(before) {
                return None;
            }
            0
        };

        let mut len = self.delimiter_len;
        // Asymmetric markers swallow one space or tab: `&gt; quote`.
        if self.ending.is_some()
            && index + len < end
            && matches!(text.as_bytes()[index + len], b' ' | b'\t')
        {
            len += 1;
        }

        Some(Opening {
            index,
            len,
            leading_whitespace,
        })
    }

    /// Best closing delimiter for `opening`, bounded by the window end.
    fn find_closing(&self, text: &str, opening: &Opening, window: Window) -> ClosingSearch {
        let bytes = text.as_bytes();
        let ceiling = window.end;
        let delimiter_len = self.delimiter_len;
        let inner_start = opening.index + opening.len;

        let mut pos = inner_start;
        let mut best = loop {
            if pos >= ceiling {
                return ClosingSearch::Exhausted;
            }
            let Some(relative) = self.finder.find(&bytes[pos..ceiling]) else {
                return ClosingSearch::Exhausted;
            };
            let index = pos + relative;
            if closes_before(text, index + delimiter_len) {
                break index;
            }
            pos = index + 1;
        };

        // An empty pair stays literal, both delimiters included.
        if best == inner_start {
            return ClosingSearch::RetryFrom(best + delimiter_len);
        }

        // Greedy extension: stop at the first whitespace.
        pos = best + delimiter_len;
        while pos < ceiling {
            let Some(relative) = self.finder.find(&bytes[pos..ceiling]) else {
                break;
            };
            let index = pos + relative;
            if contains_whitespace(&text[best + delimiter_len..index]) {
                break;
            }
            if closes_before(text, index + delimiter_len) {
                best = index;
                pos = best + delimiter_len;
            } else {
                pos = index + 1;
            }
        }

        ClosingSearch::Found(Closing {
            index: best,
            len: delimiter_len,
            terminator: Terminator::Delimiter,
        })
    }
}

/// Outcome of a closing search for one opening.
enum ClosingSearch {
    Found(Closing),
    /// This opening fails; a later one starting at the offset still may not.
    RetryFrom(usize),
    /// No opening at or after this one can close inside the window.
    Exhausted,
}

/// Terminator for an asymmetric construct. End of text is only reachable
/// from the final window.
fn find_terminator(text: &str, opening: &Opening, window: Window, ending: Ending) -> ClosingSearch {
    let inner_start = opening.index + opening.len;
    let ceiling = window.end;
    if inner_start >= ceiling {
        return ClosingSearch::Exhausted;
    }

    let newline = match ending {
        Ending::LineOrEnd => memchr(b'\n', &text.as_bytes()[inner_start..ceiling]),
        Ending::EndOfText => None,
    };
    let (index, terminator) = match newline {
        // Empty line: the next line may still hold a quote.
        Some(0) => return ClosingSearch::RetryFrom(inner_start),
        Some(relative) => (inner_start + relative, Terminator::Newline),
        None if ceiling == text.len() => (ceiling, Terminator::EndOfText),
        None => return ClosingSearch::Exhausted,
    };

    ClosingSearch::Found(Closing {
        index,
        len: 0,
        terminator,
    })
}

/// Valid left context for an opening delimiter.
#[inline]
pub fn opens_after(before: Option<char>) -> bool {
    match before {
        None => true,
        Some(c) if c.is_ascii() => OPENING_CONTEXT[c as usize] || c.is_ascii_whitespace(),
        Some(c) => c.is_whitespace(),
    }
}

/// Valid right context for a closing delimiter ending at byte offset `end`.
#[inline]
pub fn closes_before(text: &str, end: usize) -> bool {
    match text[end..].chars().next() {
        None => true,
        Some(c) if c.is_whitespace() => true,
        Some(c) if c.is_ascii() && CLOSING_CONTEXT[c as usize] => true,
        Some(_) => text.as_bytes()[end..].starts_with(TRIPLE_BACKTICK),
    }
}

#[inline]
fn contains_whitespace(text: &str) -> bool {
    text.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_all(text: &str, delimiter: &'static str) -> Option<DelimiterMatch> {
        Scanner::new(delimiter, false, None).scan(text, Window::new(0, text.len()), 0)
    }

    #[test]
    fn test_simple_pair() {
        let found = scan_all("this is *bold*", "*").unwrap();
        assert_eq!(found.span(), 8..14);
        assert_eq!(found.inner(), 9..13);
        assert_eq!(found.closing.terminator, Terminator::Delimiter);
    }

    #[test]
    fn test_unmatched_delimiter() {
        assert!(scan_all("a lone * here", "*").is_none());
    }

    #[test]
    fn test_mid_word_delimiters_rejected() {
        assert!(scan_all("a*b*c", "*").is_none());
    }

    #[test]
    fn test_mid_word_opening_skipped_for_later_one() {
        let text = "x*y then *z*";
        let found = scan_all(text, "*").unwrap();
        assert_eq!(&text[found.inner()], "z");
    }

    #[test]
    fn test_mid_word_closing_skipped() {
        let text = "*bold*word* tail";
        let found = scan_all(text, "*").unwrap();
        assert_eq!(&text[found.inner()], "bold*word");
    }

    #[test]
    fn test_greedy_extension_within_word() {
        // `*` after `a` is a valid closing, but the later one is adopted.
        let text = "*a**b*";
        let found = scan_all(text, "*").unwrap();
        assert_eq!(&text[found.inner()], "a**b");
    }

    #[test]
    fn test_greedy_extension_stops_at_whitespace() {
        let text = "*a* normal *b*";
        let found = scan_all(text, "*").unwrap();
        assert_eq!(found.span(), 0..3);
    }

    #[test]
    fn test_invalid_first_closing_is_skipped() {
        let text = "_snake_case_ done";
        let found = scan_all(text, "_").unwrap();
        assert_eq!(&text[found.inner()], "snake_case");
    }

    #[test]
    fn test_empty_interior_rejected() {
        assert!(scan_all("**", "*").is_none());
        assert!(scan_all("``", "`").is_none());
    }

    #[test]
    fn test_closing_before_tag() {
        let text = "*bold*<span class=\"slack_code\">x</span>";
        let found = scan_all(text, "*").unwrap();
        assert_eq!(found.span(), 0..6);
    }

    #[test]
    fn test_closing_before_triple_backtick() {
        let text = "*bold*```code```";
        let found = scan_all(text, "*").unwrap();
        assert_eq!(found.span(), 0..6);
    }

    #[test]
    fn test_closing_before_punctuation_rejected() {
        assert!(scan_all("*bold*.", "*").is_none());
    }

    #[test]
    fn test_opening_after_tag() {
        let text = "<span class=\"slack_bold\">_x_</span>";
        let found = Scanner::new("_", true, None)
            .scan(text, Window::new(0, text.len()), 0)
            .unwrap();
        assert_eq!(&text[found.inner()], "x");
        assert_eq!(found.opening.leading_whitespace, 0);
    }

    #[test]
    fn test_space_padded_captures_leading_whitespace() {
        let text = "this is _italic_";
        let found = Scanner::new("_", true, None)
            .scan(text, Window::new(0, text.len()), 0)
            .unwrap();
        assert_eq!(found.opening.leading_whitespace, 1);
        assert_eq!(&text[found.leading()], " ");
        assert_eq!(found.span(), 7..16);
    }

    #[test]
    fn test_space_padded_rejects_punctuation_context() {
        let text = "~_x_";
        let padded = Scanner::new("_", true, None).scan(text, Window::new(0, text.len()), 0);
        assert!(padded.is_none());
    }

    #[test]
    fn test_unicode_whitespace_boundary() {
        let text = "a\u{00A0}*b*";
        let found = scan_all(text, "*").unwrap();
        assert_eq!(&text[found.inner()], "b");
    }

    #[test]
    fn test_multibyte_interior() {
        let text = "*héllo wörld*";
        let found = scan_all(text, "*").unwrap();
        assert_eq!(&text[found.inner()], "héllo wörld");
    }

    #[test]
    fn test_closing_bounded_by_window() {
        let text = "*a b* c";
        let scanner = Scanner::new("*", false, None);
        assert!(scanner.scan(text, Window::new(0, 4), 0).is_none());
        assert!(scanner.scan(text, Window::new(0, 5), 0).is_some());
    }

    #[test]
    fn test_scan_starts_at_offset() {
        let text = "*a* *b*";
        let scanner = Scanner::new("*", false, None);
        let found = scanner.scan(text, Window::new(0, text.len()), 3).unwrap();
        assert_eq!(found.span(), 4..7);
    }

    #[test]
    fn test_line_terminator_not_consumed() {
        let text = "&gt; quote\nnext";
        let found = Scanner::new("&gt;", false, Some(Ending::LineOrEnd))
            .scan(text, Window::new(0, text.len()), 0)
            .unwrap();
        assert_eq!(&text[found.inner()], "quote");
        assert_eq!(found.closing.terminator, Terminator::Newline);
        assert_eq!(found.closing.len, 0);
        assert_eq!(found.span(), 0..10);
    }

    #[test]
    fn test_end_of_text_terminator() {
        let text = "&gt;&gt;&gt;quoted\nlines";
        let found = Scanner::new("&gt;&gt;&gt;", false, Some(Ending::EndOfText))
            .scan(text, Window::new(0, text.len()), 0)
            .unwrap();
        assert_eq!(&text[found.inner()], "quoted\nlines");
        assert_eq!(found.closing.terminator, Terminator::EndOfText);
    }

    #[test]
    fn test_end_of_text_unreachable_from_inner_window() {
        let text = "&gt;&gt;&gt;quoted<div class=\"slack_code\">x</div>";
        let scanner = Scanner::new("&gt;&gt;&gt;", false, Some(Ending::EndOfText));
        assert!(scanner.scan(text, Window::new(0, 18), 0).is_none());
    }

    #[test]
    fn test_asymmetric_empty_interior_rejected() {
        let scanner = Scanner::new("&gt;", false, Some(Ending::LineOrEnd));
        assert!(scanner.scan("&gt;\nx", Window::new(0, 6), 0).is_none());
        assert!(scanner.scan("&gt; ", Window::new(0, 5), 0).is_none());
    }

    #[test]
    fn test_empty_pair_stays_literal_and_scan_moves_on() {
        let text = "** and *b*";
        let found = scan_all(text, "*").unwrap();
        assert_eq!(found.span(), 7..10);
        assert_eq!(&text[found.inner()], "b");
    }

    #[test]
    fn test_adjacent_closing_not_skipped() {
        assert!(scan_all("**a", "*").is_none());
        assert!(scan_all("***", "*").is_none());
    }

    #[test]
    fn test_empty_quote_line_does_not_end_scan() {
        let text = "&gt;\n&gt; x";
        let found = Scanner::new("&gt;", false, Some(Ending::LineOrEnd))
            .scan(text, Window::new(0, text.len()), 0)
            .unwrap();
        assert_eq!(found.opening.index, 5);
        assert_eq!(&text[found.inner()], "x");
        assert_eq!(found.closing.terminator, Terminator::EndOfText);
    }

    #[test]
    fn test_blank_quote_line_with_trailing_space() {
        let text = "&gt; \n&gt; b\n";
        let found = Scanner::new("&gt;", false, Some(Ending::LineOrEnd))
            .scan(text, Window::new(0, text.len()), 0)
            .unwrap();
        assert_eq!(&text[found.inner()], "b");
        assert_eq!(found.closing.terminator, Terminator::Newline);
    }

    #[test]
    fn test_context_tables() {
        assert!(opens_after(None));
        assert!(opens_after(Some(' ')));
        assert!(opens_after(Some('`')));
        assert!(!opens_after(Some('a')));
        assert!(!opens_after(Some('<')));
        assert!(CLOSING_CONTEXT[b'<' as usize]);
        assert!(!CLOSING_CONTEXT[b'>' as usize]);
    }
}
