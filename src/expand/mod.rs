//! Markup expansion engine.
//!
//! Seven passes run in a fixed order over one `(text, windows)` state.
//! The two code passes run first and partition their matches out of the
//! window set, so nothing later can style a code payload.

pub mod pass;
pub mod scanner;

use tracing::debug;

use crate::limits::MAX_PASS_REPLACEMENTS;
use crate::window::WindowSet;
use pass::{PassConfig, run_pass};
use scanner::Ending;

/// Working buffer and the windows of it that are still open for expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineState {
    pub text: String,
    pub windows: WindowSet,
}

impl PipelineState {
    /// Fresh state with one window over all of `text`.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            windows: WindowSet::covering(text.len()),
        }
    }
}

pub const CODE_BLOCK: PassConfig = PassConfig {
    name: "code_block",
    delimiter: "```",
    opening_replacement: "<div class=\"slack_code\">",
    closing_replacement: "</div>",
    partition_on_match: true,
    replace_newlines: true,
    ..PassConfig::DEFAULT
};

pub const INLINE_CODE: PassConfig = PassConfig {
    name: "inline_code",
    delimiter: "`",
    opening_replacement: "<span class=\"slack_code\">",
    closing_replacement: "</span>",
    partition_on_match: true,
    ..PassConfig::DEFAULT
};

pub const BOLD: PassConfig = PassConfig {
    name: "bold",
    delimiter: "*",
    opening_replacement: "<span class=\"slack_bold\">",
    closing_replacement: "</span>",
    max_replacements: Some(MAX_PASS_REPLACEMENTS),
    ..PassConfig::DEFAULT
};

pub const STRIKETHROUGH: PassConfig = PassConfig {
    name: "strikethrough",
    delimiter: "~",
    opening_replacement: "<span class=\"slack_strikethrough\">",
    closing_replacement: "</span>",
    max_replacements: Some(MAX_PASS_REPLACEMENTS),
    ..PassConfig::DEFAULT
};

pub const ITALIC: PassConfig = PassConfig {
    name: "italic",
    delimiter: "_",
    opening_replacement: "<span class=\"slack_italics\">",
    closing_replacement: "</span>",
    space_padded: true,
    max_replacements: Some(MAX_PASS_REPLACEMENTS),
    ..PassConfig::DEFAULT
};

pub const BLOCK_QUOTE: PassConfig = PassConfig {
    name: "block_quote",
    delimiter: "&gt;&gt;&gt;",
    opening_replacement: "<div class=\"slack_block\">",
    closing_replacement: "</div>",
    ending: Some(Ending::EndOfText),
    replace_newlines: true,
    max_replacements: Some(MAX_PASS_REPLACEMENTS),
    ..PassConfig::DEFAULT
};

pub const LINE_QUOTE: PassConfig = PassConfig {
    name: "line_quote",
    delimiter: "&gt;",
    opening_replacement: "<span class=\"slack_block\">",
    closing_replacement: "</span>",
    ending: Some(Ending::LineOrEnd),
    max_replacements: Some(MAX_PASS_REPLACEMENTS),
    ..PassConfig::DEFAULT
};

/// Every pass, in execution order.
pub const PASSES: [PassConfig; 7] = [
    CODE_BLOCK,
    INLINE_CODE,
    BOLD,
    STRIKETHROUGH,
    ITALIC,
    BLOCK_QUOTE,
    LINE_QUOTE,
];

/// Expand Slack markup in `text` with the default replacement budget.
///
/// # Example
/// ```
/// let html = slackdown::expand_markdown("this is *bold*");
/// assert_eq!(html, "this is <span class=\"slack_bold\">bold</span>");
/// ```
pub fn expand_markdown(text: &str) -> String {
    expand_markdown_with_budget(text, MAX_PASS_REPLACEMENTS)
}

/// Expand Slack markup, capping each styling pass at `budget` matches.
///
/// Code passes are never capped.
pub fn expand_markdown_with_budget(text: &str, budget: usize) -> String {
    let state = PASSES
        .iter()
        .fold(PipelineState::new(text), |state, config| {
            run_pass(state, &config.with_budget(budget))
        });
    debug!(
        input_len = text.len(),
        output_len = state.text.len(),
        windows = state.windows.as_slice().len(),
        "expanded markup"
    );
    state.text
}
