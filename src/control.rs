//! Slack control sequences.
//!
//! Slack encodes mentions, links and broadcast commands as `<...>` spans
//! in otherwise entity-escaped message text:
//!
//! | Sequence                  | Output                          |
//! |---------------------------|---------------------------------|
//! | `<@U123\|name>`           | `@name`                         |
//! | `<#C123\|name>`           | `#name`                         |
//! | `<https://x.co\|label>`   | `<a href="https://x.co" ...>`   |
//! | `<mailto:a@x.co\|label>`  | `<a href="mailto:a@x.co" ...>`  |
//! | `<!subteam^S123\|name>`   | `name`                          |
//! | `<!here>`                 | `@here`                         |
//!
//! A label is optional everywhere. Without one, IDs are looked up in the
//! caller's tables; IDs that resolve to nothing are copied through as is.
//! Any other `<...>` span, including tags emitted by markup expansion,
//! is left alone.

use memchr::{memchr, memchr2};

use crate::options::Options;
use crate::render::HtmlWriter;

/// Commands rendered as `@command`. Their label is ignored.
const BROADCAST_COMMANDS: [&str; 4] = ["here", "channel", "group", "everyone"];

const SUBTEAM_PREFIX: &str = "subteam^";

/// One parsed `<...>` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSequence<'a> {
    User { id: &'a str, label: Option<&'a str> },
    Channel { id: &'a str, label: Option<&'a str> },
    Link { url: &'a str, label: Option<&'a str> },
    MailTo { address: &'a str, label: Option<&'a str> },
    Subteam { id: &'a str, label: Option<&'a str> },
    Command { name: &'a str, label: Option<&'a str> },
}

impl<'a> ControlSequence<'a> {
    /// Parse the text between `<` and `>`.
    pub fn parse(body: &'a str) -> Option<Self> {
        let (target, label) = split_label(body)?;
        let sequence = if let Some(id) = target.strip_prefix('@') {
            Self::User {
                id: prefixed_id(id, 'U')?,
                label,
            }
        } else if let Some(id) = target.strip_prefix('#') {
            Self::Channel {
                id: prefixed_id(id, 'C')?,
                label,
            }
        } else if let Some(address) = target.strip_prefix("mailto:") {
            if address.is_empty() {
                return None;
            }
            Self::MailTo { address, label }
        } else if is_web_url(target) {
            Self::Link { url: target, label }
        } else if let Some(command) = target.strip_prefix('!') {
            if command.is_empty() {
                return None;
            }
            match command.strip_prefix(SUBTEAM_PREFIX) {
                Some(id) => Self::Subteam {
                    id: prefixed_id(id, 'S')?,
                    label,
                },
                None => Self::Command {
                    name: command,
                    label,
                },
            }
        } else {
            return None;
        };
        Some(sequence)
    }

    /// Write the rendered sequence. Returns `false`, writing nothing, when
    /// an unlabeled ID has no entry in its table.
    pub fn write(&self, out: &mut HtmlWriter, options: &Options) -> bool {
        match *self {
            Self::User { id, label } => {
                mention(out, '@', label, || options.users.get(id).map(String::as_str))
            }
            Self::Channel { id, label } => {
                mention(out, '#', label, || options.channels.get(id).map(String::as_str))
            }
            Self::Link { url, label } => {
                out.anchor("", url, label.unwrap_or(url));
                true
            }
            Self::MailTo { address, label } => {
                out.anchor("mailto:", address, label.unwrap_or(address));
                true
            }
            Self::Subteam { id, label } => match (label, options.usergroups.get(id)) {
                (Some(label), _) => {
                    out.write_str(label);
                    true
                }
                (None, Some(name)) => {
                    out.write_escaped_text(name);
                    true
                }
                (None, None) => false,
            },
            Self::Command { name, label } => {
                if BROADCAST_COMMANDS.contains(&name) {
                    out.write_char('@');
                    out.write_str(name);
                } else {
                    out.write_char('<');
                    out.write_str(label.unwrap_or(name));
                    out.write_char('>');
                }
                true
            }
        }
    }
}

fn mention<'t>(
    out: &mut HtmlWriter,
    sigil: char,
    label: Option<&str>,
    lookup: impl FnOnce() -> Option<&'t str>,
) -> bool {
    if let Some(label) = label {
        out.write_char(sigil);
        out.write_str(label);
        return true;
    }
    let Some(name) = lookup() else {
        return false;
    };
    out.write_char(sigil);
    out.write_escaped_text(name);
    true
}

/// Split `target|label`. A present label must be non-empty and may itself
/// contain `|`.
fn split_label(body: &str) -> Option<(&str, Option<&str>)> {
    match memchr(b'|', body.as_bytes()) {
        None => Some((body, None)),
        Some(bar) => {
            let label = &body[bar + 1..];
            (!label.is_empty()).then_some((&body[..bar], Some(label)))
        }
    }
}

/// An ID with its kind prefix (`U`, `C`, `S`) and at least one more byte.
fn prefixed_id(id: &str, kind: char) -> Option<&str> {
    (id.len() > 1 && id.starts_with(kind)).then_some(id)
}

fn is_web_url(target: &str) -> bool {
    ["http:", "https:"]
        .iter()
        .any(|scheme| target.len() > scheme.len() && target.starts_with(scheme))
}

/// Rewrite every control sequence in `text`.
///
/// # Example
/// ```
/// use slackdown::{Options, control::escape_control_sequences};
///
/// let html = escape_control_sequences("hi <@U123|someone>", &Options::default());
/// assert_eq!(html, "hi @someone");
/// ```
pub fn escape_control_sequences(text: &str, options: &Options) -> String {
    let mut out = HtmlWriter::with_capacity_for(text.len());
    escape_control_sequences_into(&mut out, text, options);
    out.into_string()
}

/// Rewrite every control sequence in `text`, appending to `out`.
pub fn escape_control_sequences_into(out: &mut HtmlWriter, text: &str, options: &Options) {
    let bytes = text.as_bytes();
    let mut copied = 0;
    let mut pos = 0;

    while let Some(relative) = memchr(b'<', &bytes[pos..]) {
        let open = pos + relative;
        let Some(length) = memchr2(b'<', b'>', &bytes[open + 1..]) else {
            break;
        };
        let close = open + 1 + length;
        if bytes[close] == b'<' {
            pos = close;
            continue;
        }
        pos = close + 1;

        let Some(sequence) = ControlSequence::parse(&text[open + 1..close]) else {
            continue;
        };
        out.write_str(&text[copied..open]);
        if !sequence.write(out, options) {
            out.write_str(&text[open..pos]);
        }
        copied = pos;
    }
    out.write_str(&text[copied..]);
}
