//! Category inference from free-text queries and provider type tags.

use std::sync::LazyLock;

use regex::Regex;
use rivalrank_core::CategorySpec;

/// Text-pattern rules: `(pattern, category type, refining keyword)`.
///
/// This is a priority list, not a best-match search: the first pattern that
/// matches the lowercased query wins, so specific cuisines must stay above
/// the generic terms that would also match (e.g. "trattoria" above
/// "ristorante", every cuisine above the bare "restaurant" rule).
const CATEGORY_RULES: &[(&str, &str, &str)] = &[
    ("pizz", "restaurant", "pizzeria"),
    ("sushi|japanese", "restaurant", "sushi"),
    ("burger|hamburger", "restaurant", "burger"),
    ("kebab", "restaurant", "kebab"),
    ("trattoria", "restaurant", "trattoria"),
    ("ristorante|italian", "restaurant", "italian"),
    ("steak|grill", "restaurant", "steakhouse"),
    ("caf[eè]|coffee|espresso", "cafe", "coffee"),
    ("bakery|pasticceria|patisserie|boulangerie", "bakery", ""),
    ("cocktail|\\bpub\\b|\\bbar\\b", "bar", ""),
    ("hotel|hostel|b&b|bed\\s*(and|&)\\s*breakfast", "lodging", ""),
    ("restaurant|dinner|lunch|brunch|food", "restaurant", ""),
];

/// [`CATEGORY_RULES`] with the patterns compiled once, in table order.
static COMPILED_RULES: LazyLock<Vec<(Regex, &'static str, &'static str)>> =
    LazyLock::new(|| {
        CATEGORY_RULES
            .iter()
            .map(|&(pattern, category_type, keyword)| {
                (
                    Regex::new(pattern).expect("valid category regex"),
                    category_type,
                    keyword,
                )
            })
            .collect()
    });

/// Known provider categories checked against the type tags when no text
/// pattern matched, most specific first.
const TAG_PRIORITY: &[&str] = &["lodging", "bar", "cafe", "bakery", "restaurant"];

/// Infers the search category for a lookup.
///
/// 1. First-match-wins scan of [`CATEGORY_RULES`] against the lowercased
///    query text.
/// 2. Fallback: the first [`TAG_PRIORITY`] entry present in the lowercased
///    provider tags, with an empty keyword.
/// 3. Default: `{restaurant, ""}`.
///
/// Pure and deterministic; the same inputs always produce the same spec.
#[must_use]
pub fn classify(query_text: &str, type_tags: &[String]) -> CategorySpec {
    let query = query_text.to_lowercase();
    for (re, category_type, keyword) in COMPILED_RULES.iter() {
        if re.is_match(&query) {
            return CategorySpec::new(category_type, keyword);
        }
    }

    for known in TAG_PRIORITY {
        if type_tags.iter().any(|tag| tag.to_lowercase() == *known) {
            return CategorySpec::new(known, "");
        }
    }

    CategorySpec::new("restaurant", "")
}
