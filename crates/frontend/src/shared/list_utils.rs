/// List utilities for comboboxes (search filtering, match highlighting)
use contracts::domain::common::Choice;
use leptos::prelude::*;

/// Trait for items that can be narrowed down by a search query
pub trait Searchable {
    /// Checks whether the item matches an already lowercased query
    fn matches_filter(&self, filter_lower: &str) -> bool;
}

impl Searchable for Choice {
    fn matches_filter(&self, filter_lower: &str) -> bool {
        self.name.to_lowercase().contains(filter_lower)
    }
}

/// Filters a list by a search query (case-insensitive substring match).
///
/// An empty query returns the list unchanged; otherwise the matching items
/// are returned in their original order.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }

    let filter_lower = filter.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&filter_lower))
        .cloned()
        .collect()
}

/// Splits `text` into `(segment, is_match)` parts around case-insensitive
/// occurrences of `filter`.
pub fn match_segments(text: &str, filter: &str) -> Vec<(String, bool)> {
    if filter.is_empty() {
        return vec![(text.to_string(), false)];
    }

    let text_chars: Vec<char> = text.chars().collect();
    let text_lower: Vec<String> = text_chars
        .iter()
        .map(|c| c.to_lowercase().collect())
        .collect();
    let filter_lower: Vec<String> = filter
        .chars()
        .map(|c| c.to_lowercase().collect())
        .collect();

    let mut parts: Vec<(String, bool)> = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < text_chars.len() {
        let end = i + filter_lower.len();
        if end <= text_chars.len() && text_lower[i..end] == filter_lower[..] {
            if !plain.is_empty() {
                parts.push((std::mem::take(&mut plain), false));
            }
            parts.push((text_chars[i..end].iter().collect(), true));
            i = end;
        } else {
            plain.push(text_chars[i]);
            i += 1;
        }
    }

    if !plain.is_empty() {
        parts.push((plain, false));
    }

    parts
}

/// Highlight matches in text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts = match_segments(text, filter)
        .into_iter()
        .map(|(segment, is_match)| {
            if is_match {
                view! { <mark class="combobox__match">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect::<Vec<_>>();

    view! { <>{parts}</> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<Choice> {
        vec![
            Choice::with_id(1, "Finance"),
            Choice::with_id(2, "Human Resources"),
            Choice::with_id(3, "Field Engineering"),
            Choice::with_id(4, "IT Support"),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        assert_eq!(filter_list(&options(), ""), options());
    }

    #[test]
    fn test_case_insensitive_substring() {
        let ids: Vec<i64> = filter_list(&options(), "fI")
            .into_iter()
            .filter_map(|c| c.key.as_id())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let all = options();
        for query in ["e", "ur", "SUPPORT", "zzz", " "] {
            let filtered = filter_list(&all, query);
            let mut cursor = all.iter();
            for item in &filtered {
                assert!(item.name.to_lowercase().contains(&query.to_lowercase()));
                assert!(cursor.any(|c| c == item), "order broken for {query}");
            }
        }
        assert!(filter_list(&all, "zzz").is_empty());
    }

    #[test]
    fn test_whitespace_query_is_not_ignored() {
        let filtered = filter_list(&options(), " ");
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_match_segments() {
        assert_eq!(
            match_segments("Human Resources", "res"),
            vec![("Human ".to_string(), false), ("Res".to_string(), true), ("ources".to_string(), false)]
        );
        assert_eq!(
            match_segments("AB", ""),
            vec![("AB".to_string(), false)]
        );
        assert_eq!(
            match_segments("aaa", "a"),
            vec![("a".to_string(), true), ("a".to_string(), true), ("a".to_string(), true)]
        );
    }
}
