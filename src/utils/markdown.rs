/// Markdown rendering for blog posts
use pulldown_cmark::{html, Options, Parser};

/// Average adult reading speed used for the "min read" badge
const WORDS_PER_MINUTE: usize = 220;

/// Render markdown to sanitized HTML
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    sanitize_html(&html_output)
}

/// Strip anything outside the blog's tag allowlist
pub fn sanitize_html(html: &str) -> String {
    use ammonia::Builder;
    use maplit::{hashmap, hashset};

    Builder::default()
        .tags(hashset![
            "h2", "h3", "h4",
            "p", "br", "hr",
            "strong", "em",
            "a",
            "ul", "ol", "li",
            "blockquote",
            "table", "thead", "tbody", "tr", "th", "td",
            "img",
            "sup",
        ])
        // "rel" is set by link_rel() below
        .tag_attributes(hashmap![
            "a" => hashset!["href", "title"],
            "img" => hashset!["src", "alt", "title"],
            "h2" => hashset!["id"],
            "h3" => hashset!["id"],
            "th" => hashset!["align"],
            "td" => hashset!["align"],
        ])
        .url_schemes(hashset!["https", "mailto"])
        .link_rel(Some("noopener noreferrer"))
        .clean(html)
        .to_string()
}

/// Plain text of a markdown document
pub fn markdown_to_text(markdown: &str) -> String {
    use pulldown_cmark::{Event, Tag};

    let mut text = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => {
                text.push_str(&t);
                text.push(' ');
            }
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::Start(Tag::Paragraph) => {
                if !text.is_empty() && !text.ends_with(' ') {
                    text.push(' ');
                }
            }
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Estimated reading time, never less than one minute
pub fn reading_time_minutes(markdown: &str) -> usize {
    let words = markdown_to_text(markdown).split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_headings_and_emphasis() {
        let html = render_markdown("## Degaussing\n\nThis is **not** a wipe.");
        assert!(html.contains("<h2>"));
        assert!(html.contains("<strong>"));
    }

    #[test]
    fn test_heading_ids_survive_sanitizing() {
        let html = render_markdown("## What is degaussing? {#what-is-degaussing}");
        assert!(html.contains("id=\"what-is-degaussing\""));
    }

    #[test]
    fn test_sanitize_script_tags() {
        let safe = sanitize_html("<p>Safe</p><script>alert('xss')</script>");
        assert!(!safe.contains("<script"));
        assert!(safe.contains("<p>"));
    }

    #[test]
    fn test_links_get_rel() {
        let html = render_markdown("[NIST SP 800-88](https://csrc.nist.gov/pubs/sp/800/88/r1/final)");
        assert!(html.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn test_javascript_urls_are_dropped() {
        let html = render_markdown("[click](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_markdown_to_text() {
        let text = markdown_to_text("# Title\n\nSome **bold** text.");
        assert_eq!(text, "Title Some bold text.");
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time_minutes(""), 1);
        let long = "word ".repeat(450);
        assert_eq!(reading_time_minutes(&long), 3);
    }
}
