//! Summary Markdown
//!
//! Renders namespace and project summaries with pulldown-cmark. Raw HTML in
//! a summary is shown as text, never injected.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Parse a summary into HTML
pub fn render_summary(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

/// Single-line variant without the wrapping paragraph
pub fn render_summary_inline(text: &str) -> String {
    let html = render_summary(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph() {
        assert_eq!(render_summary("Core *packages*").trim(), "<p>Core <em>packages</em></p>");
    }

    #[test]
    fn test_inline_strips_paragraph() {
        assert_eq!(render_summary_inline("**base** system"), "<strong>base</strong> system");
    }

    #[test]
    fn test_raw_html_escaped() {
        let html = render_summary("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_strikethrough() {
        assert!(render_summary("~~old~~").contains("<del>old</del>"));
    }
}
