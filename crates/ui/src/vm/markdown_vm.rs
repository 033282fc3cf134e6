use std::collections::{HashMap, HashSet};

/// Render a bot message as sanitized HTML.
///
/// Model output is untrusted; only inline formatting, lists and links survive.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "br", "em", "strong", "b", "i", "del", "code", "ul", "ol", "li", "a",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{markdown_to_html, sanitize_html};

    #[test]
    fn markdown_to_html_keeps_emphasis() {
        let html = markdown_to_html("¿Por qué te preocupa **el clima**?");
        assert!(html.contains("<strong>el clima</strong>"), "{html}");
    }

    #[test]
    fn markdown_to_html_sanitizes_links() {
        let html = markdown_to_html("[Link](javascript:alert(1))");
        assert!(html.contains("Link"));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn sanitize_html_drops_scripts_and_headings() {
        let html = sanitize_html("<h1>Hola</h1><script>alert(1)</script><p>ok</p>");
        assert!(!html.contains("<script"));
        assert!(!html.contains("<h1>"));
        assert!(html.contains("<p>ok</p>"));
    }
}
