//! HTML parsing: extract outgoing links and image references from a page.
//!
//! This module is deliberately synchronous — `scraper::Html` is backed by
//! `Rc` nodes and must never be held across an await point — so callers
//! parse a fetched document in one shot and get back owned address lists.

use scraper::{Html, Selector};
use url::Url;

use crate::utils::url_utils::is_http_url;

/// Extract anchor and image addresses from an HTML document.
///
/// Every `a[href]` and `img[src]` reference is resolved against `base`
/// (the address the document was fetched from) to an absolute URL.
/// References that cannot be resolved, and schemes that cannot be fetched
/// over HTTP (`mailto:`, `javascript:`, `data:`, …), are dropped.
///
/// No deduplication happens here; a page that references the same image
/// twice yields it twice. The engine's visited sets own dedup policy.
#[must_use]
pub fn extract_links_and_images(html: &str, base: &Url) -> (Vec<String>, Vec<String>) {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a[href]").expect("static selector");
    let imgs = Selector::parse("img[src]").expect("static selector");

    let mut links = Vec::new();
    for element in document.select(&anchors) {
        if let Some(href) = element.value().attr("href")
            && let Some(absolute) = resolve(base, href)
        {
            links.push(absolute);
        }
    }

    let mut images = Vec::new();
    for element in document.select(&imgs) {
        if let Some(src) = element.value().attr("src")
            && let Some(absolute) = resolve(base, src)
        {
            images.push(absolute);
        }
    }

    (links, images)
}

/// Resolve a possibly-relative reference to an absolute http(s) address.
fn resolve(base: &Url, reference: &str) -> Option<String> {
    match base.join(reference) {
        Ok(url) if is_http_url(&url) => Some(url.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/gallery/page.html").unwrap()
    }

    #[test]
    fn extracts_absolute_links_and_images() {
        let html = r#"<html><body>
            <a href="https://other.com/next">next</a>
            <img src="https://cdn.example.com/cat.jpg">
        </body></html>"#;
        let (links, images) = extract_links_and_images(html, &base());
        assert_eq!(links, vec!["https://other.com/next".to_string()]);
        assert_eq!(images, vec!["https://cdn.example.com/cat.jpg".to_string()]);
    }

    #[test]
    fn resolves_relative_references_against_the_page() {
        let html = r#"<a href="/docs"></a><img src="pics/dog.png">"#;
        let (links, images) = extract_links_and_images(html, &base());
        assert_eq!(links, vec!["https://example.com/docs".to_string()]);
        assert_eq!(
            images,
            vec!["https://example.com/gallery/pics/dog.png".to_string()]
        );
    }

    #[test]
    fn drops_non_http_schemes() {
        let html = r#"
            <a href="mailto:me@example.com"></a>
            <a href="javascript:void(0)"></a>
            <img src="data:image/png;base64,AAAA">
        "#;
        let (links, images) = extract_links_and_images(html, &base());
        assert!(links.is_empty());
        assert!(images.is_empty());
    }

    #[test]
    fn drops_unresolvable_references() {
        let html = r#"<a href="http://[broken"></a>"#;
        let (links, _) = extract_links_and_images(html, &base());
        assert!(links.is_empty());
    }

    #[test]
    fn duplicates_are_preserved() {
        let html = r#"<img src="/a.png"><img src="/a.png">"#;
        let (_, images) = extract_links_and_images(html, &base());
        assert_eq!(images.len(), 2);
    }
}
