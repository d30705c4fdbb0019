//! Predicate helpers shared by all catalog filter criteria.

/// Case-insensitive substring match against a set of identifying fields.
///
/// An empty (or whitespace-only) needle matches everything, so callers can
/// feed the raw search box value straight through.
pub fn text_matches(needle: &str, haystacks: &[&str]) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    haystacks.iter().any(|h| h.to_lowercase().contains(&needle))
}

/// Membership semantics for tag/certification filters.
///
/// Each catalog kind fixes one mode: products and manufacturers match on
/// **any** requested label, materials require **all** of them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LabelMatch {
    Any,
    All,
}

/// Does the record's label list satisfy the requested set?
///
/// An empty request is no filter at all and matches everything.
pub fn labels_match(have: &[String], wanted: &[String], mode: LabelMatch) -> bool {
    if wanted.is_empty() {
        return true;
    }
    match mode {
        LabelMatch::Any => wanted.iter().any(|w| have.iter().any(|h| h == w)),
        LabelMatch::All => wanted.iter().all(|w| have.iter().any(|h| h == w)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(text_matches("", &["Organic Flour"]));
        assert!(text_matches("   ", &["Organic Flour"]));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        assert!(text_matches("FLOUR", &["Organic Flour", "RAW-001"]));
        assert!(text_matches("raw-0", &["Organic Flour", "RAW-001"]));
        assert!(!text_matches("sugar", &["Organic Flour", "RAW-001"]));
    }

    #[test]
    fn any_mode_needs_one_overlap() {
        let have = labels(&["Organic", "Non-GMO"]);
        assert!(labels_match(&have, &labels(&["Organic", "Kosher"]), LabelMatch::Any));
        assert!(!labels_match(&have, &labels(&["Kosher"]), LabelMatch::Any));
    }

    #[test]
    fn all_mode_needs_full_coverage() {
        let have = labels(&["Organic", "Non-GMO"]);
        assert!(labels_match(&have, &labels(&["Organic", "Non-GMO"]), LabelMatch::All));
        assert!(!labels_match(&have, &labels(&["Organic", "Kosher"]), LabelMatch::All));
    }

    #[test]
    fn empty_request_is_no_filter() {
        assert!(labels_match(&[], &[], LabelMatch::Any));
        assert!(labels_match(&[], &[], LabelMatch::All));
    }
}
