use unicode_segmentation::UnicodeSegmentation;

use crate::LibraryRecord;

/// Naive catalog search: every query word must appear in the record's title
/// or author, case-insensitive. An empty query returns the whole catalog.
pub fn search_library(records: &[LibraryRecord], query: &str) -> Vec<LibraryRecord> {
    let terms = tokenize(query);
    if terms.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| {
            let haystack = format!("{} {}", record.title, record.author).to_lowercase();
            terms.iter().all(|term| haystack.contains(term.as_str()))
        })
        .cloned()
        .collect()
}

fn tokenize(input: &str) -> Vec<String> {
    input
        .unicode_words()
        .map(|word| word.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_library;

    #[test]
    fn finds_by_author() {
        let hits = search_library(&sample_library(), "cormen");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Introduction to Algorithms");
    }

    #[test]
    fn finds_by_partial_title_any_case() {
        let hits = search_library(&sample_library(), "Design PATTERNS");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].author, "Gamma et al.");
    }

    #[test]
    fn unmatched_query_returns_empty() {
        assert!(search_library(&sample_library(), "quantum basket weaving").is_empty());
    }

    #[test]
    fn empty_query_returns_full_catalog() {
        assert_eq!(search_library(&sample_library(), "  ").len(), 3);
    }
}
