use slackdown::{escape_for_slack, escape_for_slack_with_markdown, render, render_into, Options};

#[test]
fn none_renders_empty() {
    assert_eq!(escape_for_slack(None, &Options::default()), "");
    assert_eq!(escape_for_slack_with_markdown(None, &Options::default()), "");
    assert_eq!(render(None, &Options::markdown()), "");
}

#[test]
fn empty_renders_empty() {
    assert_eq!(escape_for_slack("", &Options::default()), "");
    assert_eq!(escape_for_slack_with_markdown("", &Options::default()), "");
    assert_eq!(render(Some(""), &Options::markdown()), "");
}

#[test]
fn none_clears_reused_buffer() {
    let mut out = String::from("previous message");
    render_into(None, &mut out, &Options::default());
    assert!(out.is_empty());
}

#[test]
fn whitespace_only_passes_through() {
    assert_eq!(escape_for_slack_with_markdown(" \n\t", &Options::default()), " \n\t");
}
