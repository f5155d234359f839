//! Position and leaderboard computation for a target among its candidates.

use std::cmp::Ordering;

use rivalrank_core::{
    CategorySpec, Coordinate, Place, RankPosition, RankingResult, ScoredCandidate,
};
use rivalrank_places::{retrieve, PlacesClient, RetrievalPolicy};

use crate::geo::distance_meters;
use crate::score::score;

/// Ranks `target` against retrieved competitors for the inferred category.
///
/// Retrieval degrading to an empty candidate list means "no competitor data
/// available": the position is reported as unknown, not as an error.
pub async fn rank(
    client: &PlacesClient,
    target: &Place,
    center: Coordinate,
    category: &CategorySpec,
    policy: &RetrievalPolicy,
    display_cap: usize,
) -> RankingResult {
    let candidates = retrieve(client, center, category, policy).await;

    if candidates.is_empty() {
        tracing::info!(
            target = %target.name,
            category = %category.category_type,
            "no competitor data available — reporting unknown position"
        );
        return RankingResult {
            position: RankPosition::Unknown,
            competitors_ahead: vec![],
        };
    }

    rank_candidates(target, candidates, center, display_cap)
}

/// Pure ranking of a target within its candidate set.
///
/// 1. The target enters the set exactly once, with distance fixed at 0;
///    candidates sharing its identity are dropped so a retrieval echo can
///    never double-count the business.
/// 2. Every entry is scored, then sorted descending by score. The sort is
///    stable and there is no secondary key: ties keep insertion order,
///    which is the target followed by candidates in retrieval order.
/// 3. The leaderboard is the prefix strictly ahead of the target, capped
///    at `display_cap`.
#[must_use]
pub fn rank_candidates(
    target: &Place,
    candidates: Vec<Place>,
    center: Coordinate,
    display_cap: usize,
) -> RankingResult {
    let mut entries: Vec<(bool, ScoredCandidate)> = Vec::with_capacity(candidates.len() + 1);
    entries.push((
        true,
        ScoredCandidate {
            place: target.clone(),
            distance_meters: 0.0,
            score: score(target.rating, target.review_count, 0.0),
        },
    ));

    for candidate in candidates {
        if target.same_business(&candidate) {
            tracing::debug!(name = %candidate.name, "dropping retrieval echo of the target");
            continue;
        }
        let distance = distance_meters(Some(center), candidate.location);
        let s = score(candidate.rating, candidate.review_count, distance);
        entries.push((
            false,
            ScoredCandidate {
                place: candidate,
                distance_meters: distance,
                score: s,
            },
        ));
    }

    // Stable sort: equal scores keep insertion order.
    entries.sort_by(|a, b| {
        b.1.score
            .partial_cmp(&a.1.score)
            .unwrap_or(Ordering::Equal)
    });

    // The target is inserted above, so this lookup cannot fail; the
    // unknown branch is kept as a guard against future refactors.
    let Some(index) = entries.iter().position(|(is_target, _)| *is_target) else {
        return RankingResult {
            position: RankPosition::Unknown,
            competitors_ahead: vec![],
        };
    };

    let competitors_ahead = entries
        .iter()
        .take(index)
        .take(display_cap)
        .map(|(_, scored)| scored.clone())
        .collect();

    RankingResult {
        position: RankPosition::Known(index + 1),
        competitors_ahead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> Coordinate {
        Coordinate {
            lat: 45.07,
            lng: 7.69,
        }
    }

    fn place(id: &str, name: &str, rating: f64, reviews: u32) -> Place {
        Place {
            place_id: id.to_string(),
            name: name.to_string(),
            rating,
            review_count: reviews,
            location: Some(center()),
            address: None,
            type_tags: vec![],
        }
    }

    #[test]
    fn target_alone_ranks_first() {
        let target = place("t", "Target", 4.0, 10);
        let result = rank_candidates(&target, vec![], center(), 7);
        assert_eq!(result.position, RankPosition::Known(1));
        assert!(result.competitors_ahead.is_empty());
    }

    #[test]
    fn stronger_competitor_pushes_target_down() {
        let target = place("t", "Target", 4.5, 120);
        let rival = place("c1", "Rival", 4.8, 50);
        let weaker = place("c2", "Weaker", 3.0, 5);

        let result = rank_candidates(&target, vec![rival, weaker], center(), 7);
        assert_eq!(result.position, RankPosition::Known(2));
        assert_eq!(result.competitors_ahead.len(), 1);
        assert_eq!(result.competitors_ahead[0].place.name, "Rival");
    }

    #[test]
    fn retrieval_echo_of_target_is_counted_once() {
        let target = place("t", "Target", 4.5, 120);
        // Echo comes back with a sparser record; the detail record wins.
        let mut echo = place("t", "Target", 0.0, 0);
        echo.location = None;
        let rival = place("c1", "Rival", 4.9, 300);

        let result = rank_candidates(&target, vec![echo, rival], center(), 7);
        assert_eq!(result.position, RankPosition::Known(2));
        assert_eq!(result.competitors_ahead.len(), 1);
        assert_eq!(result.competitors_ahead[0].place.name, "Rival");
    }

    #[test]
    fn dedup_falls_back_to_name_when_target_id_empty() {
        let target = place("", "Target", 4.5, 120);
        let echo = place("provider-id", "Target", 4.5, 118);

        let result = rank_candidates(&target, vec![echo], center(), 7);
        assert_eq!(result.position, RankPosition::Known(1));
        assert!(result.competitors_ahead.is_empty());
    }

    #[test]
    fn score_tie_ranks_target_ahead() {
        let target = place("t", "Target", 4.0, 10);
        let twin = place("c1", "Twin", 4.0, 10);

        let result = rank_candidates(&target, vec![twin], center(), 7);
        assert_eq!(result.position, RankPosition::Known(1));
    }

    #[test]
    fn tied_competitors_keep_retrieval_order() {
        let target = place("t", "Target", 1.0, 0);
        let first = place("c1", "First", 4.0, 10);
        let second = place("c2", "Second", 4.0, 10);

        let result = rank_candidates(&target, vec![first, second], center(), 7);
        assert_eq!(result.position, RankPosition::Known(3));
        assert_eq!(result.competitors_ahead[0].place.name, "First");
        assert_eq!(result.competitors_ahead[1].place.name, "Second");
    }

    #[test]
    fn leaderboard_is_capped_at_display_limit() {
        let target = place("t", "Target", 1.0, 0);
        let rivals: Vec<Place> = (0..10)
            .map(|i| place(&format!("c{i}"), &format!("Rival {i}"), 4.5, 100))
            .collect();

        let result = rank_candidates(&target, rivals, center(), 7);
        assert_eq!(result.position, RankPosition::Known(11));
        assert_eq!(result.competitors_ahead.len(), 7);
    }

    #[test]
    fn distant_competitor_is_penalized() {
        let target = place("t", "Target", 4.0, 50);
        // Same rating and reviews but ~5.5 km away: the distance penalty
        // should put it below the target.
        let mut far = place("c1", "Far Twin", 4.0, 50);
        far.location = Some(Coordinate {
            lat: 45.12,
            lng: 7.69,
        });

        let result = rank_candidates(&target, vec![far], center(), 7);
        assert_eq!(result.position, RankPosition::Known(1));
    }

    #[test]
    fn candidate_without_location_gets_zero_distance() {
        let target = place("t", "Target", 4.0, 50);
        let mut unknown_loc = place("c1", "Mystery", 4.0, 51);
        unknown_loc.location = None;

        // Distance defaults to 0, so the extra review wins the tie-free
        // comparison.
        let result = rank_candidates(&target, vec![unknown_loc], center(), 7);
        assert_eq!(result.position, RankPosition::Known(2));
        assert!((result.competitors_ahead[0].distance_meters - 0.0).abs() < f64::EPSILON);
    }
}
