use std::cmp::Ordering;

use locus_core::models::PlaceCandidate;

/// Stable descending sort by the product of each candidate's category
/// weights. Categories `weight_of` doesn't know count as `1.0`.
///
/// Scores stay local to the sort; callers only see the new order.
pub fn rerank_by_weight<F>(candidates: Vec<PlaceCandidate>, weight_of: F) -> Vec<PlaceCandidate>
where
    F: Fn(&str) -> Option<f64>,
{
    let mut scored: Vec<(f64, PlaceCandidate)> = candidates
        .into_iter()
        .map(|c| {
            let score = c
                .types
                .iter()
                .map(|tag| weight_of(tag).unwrap_or(1.0))
                .product::<f64>();
            (score, c)
        })
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.into_iter().map(|(_, c)| c).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use locus_core::models::{PlaceCandidate, RemotePrediction};

    use super::*;

    fn remote(id: &str, types: &[&str]) -> PlaceCandidate {
        PlaceCandidate::from_remote(RemotePrediction {
            place_id: id.to_string(),
            description: id.to_string(),
            main_text: id.to_string(),
            secondary_text: String::new(),
            types: types.iter().map(|t| t.to_string()).collect(),
        })
    }

    fn ids(list: &[PlaceCandidate]) -> Vec<&str> {
        list.iter().map(|c| c.place_id.as_str()).collect()
    }

    #[test]
    fn preferred_categories_move_up() {
        let weights = HashMap::from([("restaurant", 1.5), ("lodging", 0.6)]);
        let ranked = rerank_by_weight(
            vec![
                remote("hotel", &["lodging"]),
                remote("church", &["church"]),
                remote("trattoria", &["restaurant"]),
            ],
            |t| weights.get(t).copied(),
        );
        assert_eq!(ids(&ranked), vec!["trattoria", "church", "hotel"]);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let ranked = rerank_by_weight(
            vec![remote("a", &[]), remote("b", &["x"]), remote("c", &["y"])],
            |_| None,
        );
        assert_eq!(ids(&ranked), vec!["a", "b", "c"]);
    }

    #[test]
    fn weights_multiply_across_tags() {
        let weights = HashMap::from([("food", 1.2), ("restaurant", 1.2), ("cafe", 1.4)]);
        let ranked = rerank_by_weight(
            vec![remote("cafe", &["cafe"]), remote("trattoria", &["food", "restaurant"])],
            |t| weights.get(t).copied(),
        );
        // 1.44 beats 1.4
        assert_eq!(ids(&ranked), vec!["trattoria", "cafe"]);
    }
}
