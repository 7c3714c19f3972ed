//! Bounded cache of recent search results.
//!
//! When a client reads a page it previously found through search, the read
//! request carries the search query id so the documentation service can
//! correlate the two. The cache keeps the last few search result lists with
//! the newest in front, so for a URL that appeared in several searches the
//! most recent query id wins.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::models::SearchResult;

const DEFAULT_CAPACITY: usize = 3;

/// Most-recent-first store of search result lists, safe for concurrent use.
pub struct SearchResultCache {
    entries: Mutex<VecDeque<Vec<SearchResult>>>,
    capacity: usize,
}

impl SearchResultCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Records a search result list at the front of the cache, evicting the
    /// oldest list when the cache is full.
    pub fn record(&self, results: Vec<SearchResult>) {
        let mut entries = self.entries.lock().expect("search cache lock poisoned");
        entries.push_front(results);
        entries.truncate(self.capacity);
    }

    /// Looks up the query id for a URL, scanning newest results first.
    pub fn query_id_for(&self, url: &str) -> Option<String> {
        let entries = self.entries.lock().expect("search cache lock poisoned");
        for results in entries.iter() {
            for result in results {
                if result.url == url {
                    return Some(result.query_id.clone());
                }
            }
        }
        None
    }
}

impl Default for SearchResultCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(url: &str, query_id: &str) -> SearchResult {
        SearchResult {
            rank_order: 1,
            url: url.to_string(),
            title: format!("Title for {url}"),
            query_id: query_id.to_string(),
            context: None,
        }
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let cache = SearchResultCache::new();
        cache.record(vec![result("https://docs.aws.amazon.com/a.html", "query1")]);

        assert_eq!(
            cache.query_id_for("https://docs.aws.amazon.com/a.html"),
            Some("query1".to_string())
        );
        assert_eq!(cache.query_id_for("https://docs.aws.amazon.com/missing.html"), None);
    }

    #[test]
    fn test_oldest_entry_evicted() {
        let cache = SearchResultCache::new();
        cache.record(vec![result("https://docs.aws.amazon.com/1.html", "query1")]);
        cache.record(vec![result("https://docs.aws.amazon.com/2.html", "query2")]);
        cache.record(vec![result("https://docs.aws.amazon.com/3.html", "query3")]);
        cache.record(vec![result("https://docs.aws.amazon.com/4.html", "query4")]);

        assert_eq!(cache.query_id_for("https://docs.aws.amazon.com/1.html"), None);
        assert_eq!(
            cache.query_id_for("https://docs.aws.amazon.com/3.html"),
            Some("query3".to_string())
        );
        assert_eq!(
            cache.query_id_for("https://docs.aws.amazon.com/4.html"),
            Some("query4".to_string())
        );
    }

    #[test]
    fn test_most_recent_query_id_wins_for_duplicate_urls() {
        let url = "https://docs.aws.amazon.com/dup.html";
        let cache = SearchResultCache::new();
        cache.record(vec![result(url, "old-query")]);
        cache.record(vec![result(url, "new-query")]);

        assert_eq!(cache.query_id_for(url), Some("new-query".to_string()));
    }

    #[test]
    fn test_scans_all_results_within_entry() {
        let cache = SearchResultCache::new();
        cache.record(vec![
            result("https://docs.aws.amazon.com/a.html", "query2"),
            result("https://docs.aws.amazon.com/b.html", "query2"),
        ]);

        assert_eq!(
            cache.query_id_for("https://docs.aws.amazon.com/b.html"),
            Some("query2".to_string())
        );
    }
}
