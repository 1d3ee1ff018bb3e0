//! Fuzzy string matching for "did you mean" suggestions, plus the kebab-case
//! check icon identifiers must pass.

/// Find the closest candidate by Levenshtein distance. Returns `None` when
/// the best distance exceeds half the longer string (too dissimilar).
pub(crate) fn fuzzy_match<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let input_lower = input.to_lowercase();
    let mut best: Option<(&str, usize)> = None;

    for &candidate in candidates {
        let dist = levenshtein(&input_lower, &candidate.to_lowercase());
        match best {
            None => best = Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => best = Some((candidate, dist)),
            _ => {}
        }
    }

    best.and_then(|(name, dist)| {
        let max_len = input.len().max(name.len());
        if dist <= max_len / 2 {
            Some(name)
        } else {
            None
        }
    })
}

/// Levenshtein edit distance between two strings.
pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let n = b.len();

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for j in 1..=n {
            let cost = if *ca == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// `^[a-z0-9]+(-[a-z0-9]+)*$`
pub(crate) fn is_kebab_case(s: &str) -> bool {
    !s.is_empty()
        && s.split('-').all(|part| {
            !part.is_empty() && part.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Icon;

    #[test]
    fn levenshtein_basic() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
    }

    #[test]
    fn fuzzy_match_finds_close_icon() {
        assert_eq!(fuzzy_match("brefcase", Icon::KNOWN), Some("briefcase"));
        assert_eq!(fuzzy_match("Coffe", Icon::KNOWN), Some("coffee"));
        assert_eq!(fuzzy_match("shoping-cart", Icon::KNOWN), Some("shopping-cart"));
    }

    #[test]
    fn fuzzy_match_rejects_distant() {
        assert_eq!(fuzzy_match("xxxxxxxxxxxxxxxx", Icon::KNOWN), None);
    }

    #[test]
    fn kebab_case() {
        assert!(is_kebab_case("shopping-cart"));
        assert!(is_kebab_case("sun"));
        assert!(is_kebab_case("icon-2"));
        assert!(!is_kebab_case(""));
        assert!(!is_kebab_case("-sun"));
        assert!(!is_kebab_case("sun-"));
        assert!(!is_kebab_case("shopping--cart"));
        assert!(!is_kebab_case("ShoppingCart"));
        assert!(!is_kebab_case("shopping_cart"));
    }
}
