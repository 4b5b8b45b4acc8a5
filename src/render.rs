//! Shared rendering helpers: escaping, archive URLs, excerpting.

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Build an archive URL from a listing base, a section and a slug.
/// e.g. archive_url("https://example.com/blog", "tag", "rust")
///        => "https://example.com/blog/tag/rust"
///      archive_url("", "author", "jane") => "/author/jane"
pub fn archive_url(base: &str, section: &str, slug: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{}/{}/{}", base, section, slug)
}

/// Strip markup from an HTML fragment, decode the common entities, and
/// collapse runs of whitespace into single spaces.
pub fn strip_html_to_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Plain-text excerpt of an HTML-bearing body, at most `max_chars`
/// characters, breaking at a word boundary. The trailing ellipsis is
/// counted inside the budget, so output never exceeds `max_chars`.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let text = strip_html_to_text(html);
    if text.chars().count() <= max_chars {
        return text;
    }

    let mut out = String::new();
    let mut used = 0;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let sep = usize::from(!out.is_empty());
        // Reserve one character for the ellipsis.
        if used + sep + word_len + 1 > max_chars {
            break;
        }
        if sep == 1 {
            out.push(' ');
        }
        out.push_str(word);
        used += sep + word_len;
    }
    out.push('…');
    out
}
