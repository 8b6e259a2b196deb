//! Markdown-to-HTML rendering.

use pulldown_cmark::{html as md_html, Options, Parser};

/// Converts a CommonMark markdown string to an HTML string.
///
/// Enables strikethrough and tables (GFM extensions). The result is raw
/// HTML; the frontend treats rendered note HTML as trusted same-origin
/// content. Rendering is deterministic: identical input yields identical
/// output.
pub fn render_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(text, options);
    let mut html_output = String::new();
    md_html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let html = render_html("# Hello\n\nSome *emphasis*.");
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn test_gfm_extensions_enabled() {
        let html = render_html("~~gone~~\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let input = "# Title\n\n- one\n- two\n";
        assert_eq!(render_html(input), render_html(input));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_html(""), "");
    }
}
