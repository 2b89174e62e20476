//! slackdown CLI - render Slack message text as HTML

use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use slackdown::{Options, Result};

#[derive(Debug, Parser)]
#[command(name = "slackdown", version, about = "Render Slack message markup as HTML")]
struct Cli {
    /// Message file to render; `-` or nothing reads stdin
    input: Option<PathBuf>,

    /// Expand markup (*bold*, `code`, &gt; quotes, ...)
    #[arg(long)]
    markdown: bool,

    /// JSON options file (users, channels, usergroups, customEmoji, ...)
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Replace every :shortcode:, not only the first
    #[arg(long)]
    all_emoji: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut options = match &cli.options {
        Some(path) => Options::from_path(path)?,
        None => Options::default(),
    };
    options.markdown |= cli.markdown;
    options.expand_all_emoji |= cli.all_emoji;

    let input = match &cli.input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let html = slackdown::render(input.as_str(), &options);
    io::stdout().write_all(html.as_bytes())?;

    Ok(())
}
