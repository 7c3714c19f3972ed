//! Pagination of documentation content.
//!
//! Documentation pages routinely exceed what a client wants in one response,
//! so reads are windowed: the caller passes a start index and maximum length,
//! and the formatted result tells it how to fetch the next window. Indices
//! are character offsets, not byte offsets.

/// Formats a documentation page for return to the client, slicing out the
/// requested window and appending a continuation hint when content remains.
pub fn format_documentation_result(
    url: &str,
    content: &str,
    start_index: usize,
    max_length: usize,
) -> String {
    let total_chars = content.chars().count();

    if start_index >= total_chars {
        return format!("AWS Documentation from {url}:\n\n<e>No more content available.</e>");
    }

    let end_index = start_index.saturating_add(max_length).min(total_chars);
    let window: String = content
        .chars()
        .skip(start_index)
        .take(end_index - start_index)
        .collect();

    if window.is_empty() {
        return format!("AWS Documentation from {url}:\n\n<e>No more content available.</e>");
    }

    let window_chars = window.chars().count();
    let remaining = total_chars - (start_index + window_chars);

    let mut result = format!("AWS Documentation from {url}:\n\n{window}");

    if remaining > 0 {
        let next_start = start_index + window_chars;
        result.push_str(&format!(
            "\n\n<e>Content truncated. Call the read_documentation tool with start_index={next_start} to get more content.</e>"
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    const URL: &str = "https://docs.aws.amazon.com/test";

    #[test]
    fn test_normal_content() {
        let result = format_documentation_result(URL, "Test content", 0, 100);
        assert_eq!(result, format!("AWS Documentation from {URL}:\n\nTest content"));
    }

    #[parameterized(
        beyond_content = { 100, 100 },
        at_content_end = { 12, 100 }
    )]
    fn test_no_more_content(start_index: usize, max_length: usize) {
        let result = format_documentation_result(URL, "Test content", start_index, max_length);
        assert!(result.contains("<e>No more content available.</e>"));
    }

    #[test]
    fn test_truncated_with_more_available() {
        let content = "A".repeat(200);
        let result = format_documentation_result(URL, &content, 0, 100);
        assert!(result.contains(&"A".repeat(100)));
        assert!(result.contains("start_index=100"));
        assert!(result.contains("Content truncated"));
    }

    #[parameterized(
        exact_fit = { 100, 0, 100 },
        shorter_than_window = { 50, 0, 100 },
        partial_at_end = { 150, 100, 100 }
    )]
    fn test_not_truncated(content_len: usize, start_index: usize, max_length: usize) {
        let content = "A".repeat(content_len);
        let result = format_documentation_result(URL, &content, start_index, max_length);
        assert!(!result.contains("Content truncated"));
    }

    #[test]
    fn test_partial_window_with_remaining() {
        let content = "A".repeat(300);
        let result = format_documentation_result(URL, &content, 100, 100);
        assert!(result.contains(&"A".repeat(100)));
        assert!(result.contains("start_index=200"));
        assert!(result.contains("Content truncated"));
    }

    #[test]
    fn test_multibyte_content_sliced_by_chars() {
        let content = "日本語のドキュメント";
        let result = format_documentation_result(URL, content, 3, 4);
        assert!(result.contains("のドキュ"));
        assert!(result.contains("start_index=7"));
    }

    #[test]
    fn test_unbounded_window() {
        let content = "A".repeat(500);
        let result = format_documentation_result(URL, &content, 0, usize::MAX);
        assert!(result.contains(&"A".repeat(500)));
        assert!(!result.contains("Content truncated"));
    }
}
