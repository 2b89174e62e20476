//! One delimiter-pair pass over the whole window set.
//!
//! The executor walks windows with an explicit `(index, offset)` cursor.
//! Every step either applies a match or moves past a window, so the loop
//! runs at most `matches + windows` times. Openings that fail inside a
//! window are retried by the scanner itself.

use tracing::{debug, trace};

use super::scanner::{DelimiterMatch, Ending, Scanner};
use super::PipelineState;
use crate::render::HtmlWriter;
use crate::window::Window;

/// Everything a pass needs to know about its construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassConfig {
    /// Name used in log events.
    pub name: &'static str,
    /// Opening marker (and closing marker for symmetric constructs).
    pub delimiter: &'static str,
    pub opening_replacement: &'static str,
    pub closing_replacement: &'static str,
    /// Capture the whitespace in front of the opening delimiter and
    /// re-emit it ahead of the replacement.
    pub space_padded: bool,
    /// Seal the replacement off from every later pass.
    pub partition_on_match: bool,
    /// Asymmetric construct: closed by this terminator, not the delimiter.
    pub ending: Option<Ending>,
    /// Render interior newlines as `<br>`.
    pub replace_newlines: bool,
    /// Cap on matches applied by one run of the pass.
    pub max_replacements: Option<usize>,
}

impl PassConfig {
    /// Symmetric, unbounded, non-partitioning defaults.
    pub const DEFAULT: PassConfig = PassConfig {
        name: "",
        delimiter: "",
        opening_replacement: "",
        closing_replacement: "",
        space_padded: false,
        partition_on_match: false,
        ending: None,
        replace_newlines: false,
        max_replacements: None,
    };

    /// Replace the budget of a bounded pass. Unbounded passes stay unbounded.
    pub const fn with_budget(mut self, budget: usize) -> Self {
        if self.max_replacements.is_some() {
            self.max_replacements = Some(budget);
        }
        self
    }

    fn scanner(&self) -> Scanner {
        Scanner::new(self.delimiter, self.space_padded, self.ending)
    }

    /// Replacement text for a match: captured whitespace, opening tag,
    /// interior, closing tag.
    fn replacement(&self, text: &str, found: &DelimiterMatch) -> String {
        let inner = &text[found.inner()];
        let mut writer = HtmlWriter::with_capacity(
            found.opening.leading_whitespace
                + self.opening_replacement.len()
                + inner.len()
                + self.closing_replacement.len(),
        );
        writer.write_str(&text[found.leading()]);
        writer.write_str(self.opening_replacement);
        if self.replace_newlines {
            writer.write_with_line_breaks(inner);
        } else {
            writer.write_str(inner);
        }
        writer.write_str(self.closing_replacement);
        writer.into_string()
    }
}

/// Apply `config` across every window of `state`.
pub fn run_pass(state: PipelineState, config: &PassConfig) -> PipelineState {
    let PipelineState { mut text, mut windows } = state;
    let scanner = config.scanner();
    let mut remaining = config.max_replacements.unwrap_or(usize::MAX);
    let mut index = 0;
    let mut offset = 0;

    while remaining > 0 {
        let Some(window) = windows.get(index) else {
            break;
        };
        let found = if window.is_empty() {
            None
        } else {
            scanner.scan(&text, window, window.start + offset)
        };
        let Some(found) = found else {
            index += 1;
            offset = 0;
            continue;
        };

        let span = found.span();
        let replacement = config.replacement(&text, &found);
        let delta = replacement.len() as isize - span.len() as isize;
        let replaced_end = span.start + replacement.len();
        trace!(
            pass = config.name,
            start = span.start,
            end = span.end,
            delta,
            "applied replacement"
        );

        text.replace_range(span.clone(), &replacement);
        windows.stretch_end(index, delta);
        windows.advance_offsets(index, delta);

        if config.partition_on_match {
            let window_end = windows.get(index).map_or(replaced_end, |w| w.end);
            windows.partition(index, span.start, Window::new(replaced_end, window_end));
            index += 1;
            offset = 0;
        } else {
            offset = replaced_end - window.start;
            remaining -= 1;
        }
    }

    if budget_exhausted(config, remaining) {
        debug!(
            pass = config.name,
            budget = ?config.max_replacements,
            "replacement budget exhausted"
        );
    }

    PipelineState { text, windows }
}

/// A bounded pass that applied at least one match and ran out of budget.
fn budget_exhausted(config: &PassConfig, remaining: usize) -> bool {
    remaining == 0 && config.max_replacements.is_some_and(|budget| budget > 0)
}
