//! Small helpers shared by the lookup tables and the CLI.

use strsim::levenshtein;

/// Maximum allowed Levenshtein distance as a percentage of target length for suggestions.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Find up to three known names close to `target`, closest first.
///
/// Used to enrich missing-key errors; never used to pick a fallback value.
pub fn find_similar_names<'a, I>(target: &str, available: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let max_distance = (target.len() * SIMILARITY_THRESHOLD_PERCENT / 100).max(1);

    let mut scored: Vec<(&str, usize)> =
        available.into_iter().map(|name| (name, levenshtein(target, name))).collect();

    scored.sort_by(|(a_name, a_dist), (b_name, b_dist)| {
        a_dist.cmp(b_dist).then_with(|| a_name.cmp(b_name))
    });

    scored
        .into_iter()
        .filter(|(_, dist)| *dist <= max_distance)
        .take(3)
        .map(|(name, _)| name.to_string())
        .collect()
}
