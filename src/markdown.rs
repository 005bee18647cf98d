//! Markdown rendering for the intro and for captions.
//!
//! The intro is written by whoever owns the gallery and is rendered as-is,
//! raw HTML included. Captions end up inside a `data-title` attribute that
//! Lightbox turns back into markup, so raw HTML in a caption is demoted to
//! text and escaped like any other character data. Link and image targets in
//! captions are limited to relative URLs and `http`, `https` and `mailto`;
//! anything else (`javascript:`, `data:`) is replaced by an empty target.

use pulldown_cmark::{CowStr, Event, Parser, Tag, html as md_html};

const CAPTION_URL_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Render Markdown to HTML, passing raw HTML through.
pub fn render(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out.trim_end().to_string()
}

/// Render a caption to HTML. Inline formatting survives; raw HTML does not.
pub fn render_caption(markdown: &str) -> String {
    let parser = Parser::new(markdown).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: caption_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: caption_url(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out.trim_end().to_string()
}

fn caption_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_allowed_url(&url) {
        url
    } else {
        log::warn!("Dropping caption link target {}: scheme not allowed", &*url);
        CowStr::Borrowed("")
    }
}

/// Relative URLs pass, as do absolute ones with an allowed scheme.
fn is_allowed_url(url: &str) -> bool {
    // Browsers ignore whitespace and control characters inside a scheme.
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    match cleaned.find([':', '/', '?', '#']) {
        Some(i) if cleaned[i..].starts_with(':') => {
            let scheme = cleaned[..i].to_ascii_lowercase();
            CAPTION_URL_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}
