use holdem_helper::cards::{Card, Rank, Suit};
use holdem_helper::evaluator::{evaluate_hand, Strength};
use holdem_helper::hand::{Board, HoleCards};
use holdem_helper::sizing::raise_size;
use proptest::prelude::*;

fn any_rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Clubs), Just(Suit::Diamonds), Just(Suit::Hearts), Just(Suit::Spades),]
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_rank(), any_suit()).prop_map(|(r, s)| Card::new(r, s))
}

fn any_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(any_card(), 0..=5).prop_map(|cards| Board::try_new(cards).unwrap())
}

proptest! {
    #[test]
    fn order_of_hole_cards_does_not_matter(a in any_card(), b in any_card(), board in any_board()) {
        let hole = HoleCards::new(a, b);
        prop_assert_eq!(evaluate_hand(&hole, &board), evaluate_hand(&HoleCards::new(b, a), &board));
    }

    #[test]
    fn pairs_score_rank_plus_ten(rank in any_rank(), s1 in any_suit(), s2 in any_suit(), board in any_board()) {
        let hole = HoleCards::new(Card::new(rank, s1), Card::new(rank, s2));
        let expected = rank.value() + 10 + if s1 == s2 { 5 } else { 0 };
        prop_assert_eq!(evaluate_hand(&hole, &board).value(), expected);
    }

    #[test]
    fn offsuit_pairs_score_exactly_rank_plus_ten(rank in any_rank(), board in any_board()) {
        let hole = HoleCards::new(Card::new(rank, Suit::Clubs), Card::new(rank, Suit::Hearts));
        prop_assert_eq!(evaluate_hand(&hole, &board).value(), rank.value() + 10);
    }

    #[test]
    fn board_never_changes_the_score(a in any_card(), b in any_card(), board in any_board()) {
        let hole = HoleCards::new(a, b);
        prop_assert_eq!(evaluate_hand(&hole, &board), evaluate_hand(&hole, &Board::new()));
    }

    #[test]
    fn score_stays_in_range(a in any_card(), b in any_card()) {
        let score = evaluate_hand(&HoleCards::new(a, b), &Board::new()).value();
        prop_assert!((3..=29).contains(&score), "score {}", score);
        prop_assert!(score >= a.rank().max(b.rank()).value());
    }

    #[test]
    fn raise_size_is_monotonic(x in 0u8..=40, y in 0u8..=40) {
        let (lo, hi) = (x.min(y), x.max(y));
        prop_assert!(raise_size(Strength::new(lo)) <= raise_size(Strength::new(hi)));
    }
}

#[test]
fn raise_size_only_changes_at_breakpoints() {
    let mut changes = Vec::new();
    for score in 1u8..=40 {
        if raise_size(Strength::new(score)) != raise_size(Strength::new(score - 1)) {
            changes.push(score);
        }
    }
    assert_eq!(changes, vec![11, 15, 19]);
}
