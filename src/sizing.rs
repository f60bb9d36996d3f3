use crate::evaluator::Strength;

/// Score breakpoints and the raise (in big blinds) used at or above each.
const TIERS: [(u8, u32); 3] = [(19, 25), (15, 8), (11, 3)];
const MIN_RAISE_BB: u32 = 1;

/// Suggested raise size in big blinds for a strength score.
///
/// ```
/// use holdem_helper::evaluator::Strength;
/// use holdem_helper::sizing::raise_size;
///
/// assert_eq!(raise_size(Strength::new(10)), 1);
/// assert_eq!(raise_size(Strength::new(24)), 25);
/// ```
pub fn raise_size(strength: Strength) -> u32 {
    TIERS
        .iter()
        .find(|(floor, _)| strength.value() >= *floor)
        .map_or(MIN_RAISE_BB, |&(_, bb)| bb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_exact() {
        let expected = [(10, 1), (11, 3), (14, 3), (15, 8), (18, 8), (19, 25), (29, 25)];
        for (score, bb) in expected {
            assert_eq!(raise_size(Strength::new(score)), bb, "score {score}");
        }
    }

    #[test]
    fn lowest_scores_raise_one_bb() {
        assert_eq!(raise_size(Strength::new(0)), 1);
        assert_eq!(raise_size(Strength::new(7)), 1);
    }
}
