//! HTML to markdown conversion for documentation pages.
//!
//! AWS documentation pages ship with a large amount of chrome: navigation
//! bars, feedback widgets, cookie banners, and custom `awsdocs-*` elements.
//! Conversion first narrows the document to its main content container,
//! detaches known chrome elements, and only then hands the remaining HTML to
//! the markdown converter with script/style/navigation tags stripped.

use htmd::HtmlToMarkdown;
use scraper::{Html, Selector};
use thiserror::Error;
use tracing::warn;

/// Selectors tried in order to locate the main content container.
const CONTENT_SELECTORS: &[&str] = &[
    "main",
    "article",
    "#main-content",
    ".main-content",
    "#content",
    ".content",
    "div[role='main']",
    "#awsdocs-content",
    ".awsui-article",
];

/// Chrome elements removed from the document before conversion.
const NAV_SELECTORS: &[&str] = &[
    "noscript",
    ".prev-next",
    "#main-col-footer",
    ".awsdocs-page-utilities",
    "#quick-feedback-yes",
    "#quick-feedback-no",
    ".page-loading-indicator",
    "#tools-panel",
    ".doc-cookie-banner",
    "awsdocs-copyright",
    "awsdocs-thumb-feedback",
];

/// Tags dropped entirely during markdown conversion.
const STRIP_TAGS: &[&str] = &[
    "script",
    "style",
    "noscript",
    "meta",
    "link",
    "footer",
    "nav",
    "aside",
    "header",
    "awsdocs-cookie-consent-container",
    "awsdocs-feedback-container",
    "awsdocs-page-header",
    "awsdocs-page-header-container",
    "awsdocs-filter-selector",
    "awsdocs-breadcrumb-container",
    "awsdocs-page-footer",
    "awsdocs-page-footer-container",
    "awsdocs-footer",
    "awsdocs-cookie-banner",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HtmlExtractError {
    #[error("Empty HTML content")]
    Empty,

    #[error("Page failed to be simplified from HTML")]
    NoContent,

    #[error("Error converting HTML to Markdown: {0}")]
    Conversion(String),
}

/// Determines whether a fetched body should be treated as HTML.
///
/// Pages are considered HTML when the body opens with an `<html` tag, the
/// Content-Type says so, or the server sent no Content-Type at all.
pub fn is_html_content(page_raw: &str, content_type: &str) -> bool {
    let head: String = page_raw.chars().take(100).collect();
    head.contains("<html") || content_type.contains("text/html") || content_type.is_empty()
}

/// Converts a documentation page to markdown.
pub fn extract_content_from_html(html: &str) -> Result<String, HtmlExtractError> {
    if html.is_empty() {
        return Err(HtmlExtractError::Empty);
    }

    let mut document = Html::parse_document(html);
    remove_chrome_elements(&mut document);

    let main_content = select_main_content(&document);

    let converter = HtmlToMarkdown::builder()
        .skip_tags(STRIP_TAGS.to_vec())
        .build();
    let markdown = converter
        .convert(&main_content)
        .map_err(|e| HtmlExtractError::Conversion(e.to_string()))?;

    if markdown.trim().is_empty() {
        return Err(HtmlExtractError::NoContent);
    }

    Ok(markdown)
}

/// Converts HTML to markdown, folding failures into the `<e>…</e>` sentinel
/// form that documentation results carry inline.
pub fn extract_or_sentinel(html: &str) -> String {
    match extract_content_from_html(html) {
        Ok(content) => content,
        Err(e) => format!("<e>{e}</e>"),
    }
}

fn remove_chrome_elements(document: &mut Html) {
    for selector in NAV_SELECTORS {
        let Ok(parsed) = Selector::parse(selector) else {
            warn!("Skipping unparseable chrome selector: {selector}");
            continue;
        };

        let ids: Vec<_> = document.select(&parsed).map(|el| el.id()).collect();
        for id in ids {
            if let Some(mut node) = document.tree.get_mut(id) {
                node.detach();
            }
        }
    }
}

fn select_main_content(document: &Html) -> String {
    for selector in CONTENT_SELECTORS {
        let Ok(parsed) = Selector::parse(selector) else {
            continue;
        };
        if let Some(element) = document.select(&parsed).next() {
            return element.html();
        }
    }

    if let Ok(body) = Selector::parse("body") {
        if let Some(element) = document.select(&body).next() {
            return element.html();
        }
    }

    document.root_element().html()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_tag_in_content() {
        let content = "<html><body>Test content</body></html>";
        assert!(is_html_content(content, ""));
    }

    #[test]
    fn test_html_content_type() {
        assert!(is_html_content("Some content", "text/html; charset=utf-8"));
    }

    #[test]
    fn test_empty_content_type() {
        assert!(is_html_content("Some content without HTML tags", ""));
    }

    #[test]
    fn test_non_html_content() {
        assert!(!is_html_content("Plain text content", "text/plain"));
    }

    #[test]
    fn test_empty_html_is_error() {
        assert_eq!(extract_content_from_html(""), Err(HtmlExtractError::Empty));
        assert_eq!(extract_or_sentinel(""), "<e>Empty HTML content</e>");
    }

    #[test]
    fn test_simple_page() {
        let html = "<html><body><h1>Test</h1><p>This is a test.</p></body></html>";
        let markdown = extract_content_from_html(html).unwrap();
        assert!(markdown.contains("Test"));
        assert!(markdown.contains("This is a test."));
    }

    #[test]
    fn test_main_content_preferred_over_body() {
        let html = "<html><body>\
            <div class=\"sidebar\">Navigation junk</div>\
            <main><p>Main content here</p></main>\
            </body></html>";
        let markdown = extract_content_from_html(html).unwrap();
        assert!(markdown.contains("Main content here"));
        assert!(!markdown.contains("Navigation junk"));
    }

    #[test]
    fn test_scripts_are_stripped() {
        let html = "<html><body><main>\
            <p>Visible text</p>\
            <script>console.log('hidden');</script>\
            </main></body></html>";
        let markdown = extract_content_from_html(html).unwrap();
        assert!(markdown.contains("Visible text"));
        assert!(!markdown.contains("console.log"));
    }

    #[test]
    fn test_chrome_elements_removed() {
        let html = "<html><body><div id=\"main-content\">\
            <p>Real documentation</p>\
            <div class=\"prev-next\">Previous | Next</div>\
            <div id=\"main-col-footer\">Footer links</div>\
            </div></body></html>";
        let markdown = extract_content_from_html(html).unwrap();
        assert!(markdown.contains("Real documentation"));
        assert!(!markdown.contains("Previous | Next"));
        assert!(!markdown.contains("Footer links"));
    }

    #[test]
    fn test_whitespace_only_page_is_no_content() {
        let html = "<html><body><main>   </main></body></html>";
        assert_eq!(
            extract_content_from_html(html),
            Err(HtmlExtractError::NoContent)
        );
    }
}
