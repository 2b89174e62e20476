//! slackdown: Slack message markup to HTML fragments
//!
//! Renders the text of a Slack message (already entity-escaped by Slack)
//! as an HTML fragment in three stages:
//!
//! 1. markup expansion (`*bold*`, `_italic_`, `~strike~`, `` `code` ``,
//!    fenced code, `&gt;` quotes), when enabled;
//! 2. control sequences (`<@U123>`, `<#C123>`, links, `<!here>`);
//! 3. `:shortcode:` emoji.
//!
//! # Design Principles
//! - No regex: byte-level delimiter scanning
//! - Code payloads are sealed off from every later pass
//! - Bounded work on adversarial input: styling passes carry a match budget
//! - Rendering never fails; malformed markup stays literal text
//!
//! # Example
//! ```
//! use slackdown::Options;
//!
//! let mut options = Options::markdown();
//! options.users.insert("U123".into(), "someone".into());
//!
//! let html = slackdown::render("*hi* <@U123> :wave:", &options);
//! assert_eq!(html, "<span class=\"slack_bold\">hi</span> @someone &#x1F44B");
//! ```

pub mod control;
pub mod emoji;
pub mod error;
pub mod escape;
pub mod expand;
pub mod limits;
pub mod options;
pub mod render;
pub mod window;

// Re-export primary types
pub use error::{Error, Result};
pub use expand::{expand_markdown, expand_markdown_with_budget};
pub use options::Options;
pub use render::HtmlWriter;
pub use window::{Window, WindowSet};

/// Render message text to HTML.
///
/// Markup is expanded only when [`Options::markdown`] is set. `None`
/// renders as the empty string.
///
/// # Example
/// ```
/// use slackdown::Options;
///
/// assert_eq!(slackdown::render("<!here>", &Options::default()), "@here");
/// assert_eq!(slackdown::render(None, &Options::default()), "");
/// ```
pub fn render<'a>(text: impl Into<Option<&'a str>>, options: &Options) -> String {
    let mut out = String::new();
    render_into(text, &mut out, options);
    out
}

/// Render message text to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its capacity is reused.
pub fn render_into<'a>(text: impl Into<Option<&'a str>>, out: &mut String, options: &Options) {
    render_to_buffer(text.into().unwrap_or_default(), out, options, options.markdown);
}

/// Control sequences and emoji only, whatever [`Options::markdown`] says.
pub fn escape_for_slack<'a>(text: impl Into<Option<&'a str>>, options: &Options) -> String {
    let mut out = String::new();
    render_to_buffer(text.into().unwrap_or_default(), &mut out, options, false);
    out
}

/// Markup expansion, then control sequences and emoji.
pub fn escape_for_slack_with_markdown<'a>(
    text: impl Into<Option<&'a str>>,
    options: &Options,
) -> String {
    let mut out = String::new();
    render_to_buffer(text.into().unwrap_or_default(), &mut out, options, true);
    out
}

fn render_to_buffer(text: &str, out: &mut String, options: &Options, markdown: bool) {
    out.clear();
    if text.is_empty() {
        return;
    }

    let expanded;
    let text = if markdown {
        expanded = expand_markdown_with_budget(text, options.max_replacements);
        expanded.as_str()
    } else {
        text
    };

    let mut escaped = HtmlWriter::with_capacity_for(text.len());
    control::escape_control_sequences_into(&mut escaped, text, options);

    let mut writer = HtmlWriter::with_capacity(0);
    // Use the provided buffer directly
    std::mem::swap(writer.buffer_mut(), out);
    emoji::expand_emoji_into(&mut writer, escaped.as_str(), options);
    std::mem::swap(writer.buffer_mut(), out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_markdown_keeps_markup() {
        assert_eq!(render("*bold*", &Options::default()), "*bold*");
    }

    #[test]
    fn test_render_with_markdown() {
        assert_eq!(
            render("*bold*", &Options::markdown()),
            "<span class=\"slack_bold\">bold</span>"
        );
    }

    #[test]
    fn test_escape_for_slack_ignores_markdown_flag() {
        assert_eq!(escape_for_slack("*bold*", &Options::markdown()), "*bold*");
    }

    #[test]
    fn test_escape_for_slack_with_markdown_forces_expansion() {
        assert_eq!(
            escape_for_slack_with_markdown("_hi_", &Options::default()),
            "<span class=\"slack_italics\">hi</span>"
        );
    }

    #[test]
    fn test_stages_compose() {
        let html = escape_for_slack_with_markdown(
            "`<@U1|x>` *<https://x.co|site>* :wave:",
            &Options::default(),
        );
        assert_eq!(
            html,
            "<span class=\"slack_code\">@x</span> <span class=\"slack_bold\">\
             <a href=\"https://x.co\" target=\"_blank\" rel=\"noopener noreferrer\">site</a>\
             </span> &#x1F44B"
        );
    }

    #[test]
    fn test_render_into_reuses_buffer() {
        let mut out = String::from("stale");
        render_into("<!channel>", &mut out, &Options::default());
        assert_eq!(out, "@channel");
        render_into(None, &mut out, &Options::default());
        assert_eq!(out, "");
    }

    #[test]
    fn test_budget_from_options() {
        let options = Options {
            markdown: true,
            max_replacements: 1,
            ..Options::default()
        };
        assert_eq!(
            render("~a~ ~b~", &options),
            "<span class=\"slack_strikethrough\">a</span> ~b~"
        );
    }
}
