//! fuzzy-matcher（skim アルゴリズム）によるあいまい検索

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::ports::outbound::FuzzyFilter;

#[derive(Default)]
pub struct SkimFuzzyFilter {
    matcher: SkimMatcherV2,
}

impl SkimFuzzyFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FuzzyFilter for SkimFuzzyFilter {
    fn filter(&self, query: &str, titles: &[&str]) -> Vec<usize> {
        let mut scored: Vec<(i64, usize)> = titles
            .iter()
            .enumerate()
            .filter_map(|(i, title)| self.matcher.fuzzy_match(title, query).map(|s| (s, i)))
            .collect();
        // 同点は元の順序を保つ（sort_by は安定）
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, i)| i).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsequence_matches() {
        let filter = SkimFuzzyFilter::new();
        let hits = filter.filter("wrk", &["Mail", "Work", "Personal"]);
        assert_eq!(hits, vec![1]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let filter = SkimFuzzyFilter::new();
        assert!(filter.filter("zzz", &["Mail", "Work"]).is_empty());
    }

    #[test]
    fn test_case_insensitive_for_lowercase_query() {
        let filter = SkimFuzzyFilter::new();
        assert_eq!(filter.filter("mail", &["Mail", "Work"]), vec![0]);
    }
}
