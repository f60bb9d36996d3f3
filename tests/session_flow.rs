use holdem_helper::advisor::{Advisor, AdvisorProfile, Recommendation};
use holdem_helper::bluff::{FixedRoll, ScriptedRoll};
use holdem_helper::console::{Console, InputError};
use holdem_helper::game::{Position, Street};
use holdem_helper::round::RoundError;
use holdem_helper::session::{Session, SessionError, SessionOutcome};
use std::io::Cursor;

type TestSession<B> = Session<Cursor<Vec<u8>>, Vec<u8>, B>;

fn session_with<B: holdem_helper::bluff::BluffRoll>(input: &str, roll: B) -> TestSession<B> {
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    Session::new(console, Advisor::with_roll(AdvisorProfile::default(), roll))
}

fn session(input: &str) -> TestSession<FixedRoll> {
    session_with(input, FixedRoll::NEVER)
}

fn run(input: &str) -> (Result<SessionOutcome, SessionError>, String) {
    let mut s = session(input);
    let result = s.run();
    let text = String::from_utf8(s.into_output()).unwrap();
    (result, text)
}

#[test]
fn full_hand_completes() {
    let input = "Ah\nAd\nBTN\n0\nn\nKs\n7c\n2d\n4\nn\n9h\n0\nn\n3s\n10\nn\n";
    let (result, text) = run(input);
    assert_eq!(result.unwrap(), SessionOutcome::Completed);

    for street in ["Pre-flop", "Flop", "Turn", "River"] {
        assert!(text.contains(&format!("=== {street} Recommendation ===")), "{street}");
    }
    assert!(text.contains("The play is to RAISE 25 BB (strong hand)!"));
    assert!(text.contains("The play is to RE-RAISE to 25 BB!"));
    assert!(text.trim_end().ends_with("Game complete."));
}

#[test]
fn fold_on_flop_skips_turn_and_river() {
    let input = "2c 7d UTG 0 n Ks Qh 9s 5\nthis-is-never-read\n";
    let mut s = session(input);
    assert_eq!(s.run().unwrap(), SessionOutcome::Folded(Street::Flop));
    assert_eq!(s.board().len(), 3);
    assert_eq!(s.history().len(), 2);
    assert_eq!(s.history()[1].recommendations, vec![Recommendation::Fold { facing: 5 }]);

    let text = String::from_utf8(s.into_output()).unwrap();
    assert!(text.contains("The play is to FOLD (fold to 5 BB)."));
    assert!(!text.contains("Enter turn card"));
    assert!(!text.contains("Enter river card"));
    assert!(!text.contains("Game complete."));
}

#[test]
fn fold_preflop_never_asks_for_flop() {
    let (result, text) = run("2c 7d SB 3\n");
    assert_eq!(result.unwrap(), SessionOutcome::Folded(Street::Preflop));
    assert!(!text.contains("Enter flop card"));
}

#[test]
fn invalid_card_aborts_session() {
    let (result, text) = run("Ah Ad BTN 0 n Ks 1c\n");
    assert!(matches!(result, Err(SessionError::Card(_))));
    assert!(text.contains("Enter flop card 2: "));
    assert!(!text.contains("Enter flop card 3: "));
}

#[test]
fn invalid_bet_is_distinct_from_fold() {
    let (result, text) = run("Ah Ad BTN five\n");
    match result {
        Err(SessionError::Round { street, source: RoundError::InvalidBet(token) }) => {
            assert_eq!(street, Street::Preflop);
            assert_eq!(token, "five");
        }
        other => panic!("expected invalid bet, got {other:?}"),
    }
    assert!(!text.contains("Recommendation"));
}

#[test]
fn running_out_of_input_is_an_error() {
    let (result, _) = run("Ah Ad BTN 0 n Ks 7c\n");
    assert!(matches!(result, Err(SessionError::Input(InputError::Eof))));
}

#[test]
fn reraise_cycles_are_followed_on_the_same_street() {
    let input = "Th 9c BB 0 y 2 y 6 n Ks 7c 2d 0 n 9h 0 n 3s 0 n";
    let mut s = session(input);
    assert_eq!(s.run().unwrap(), SessionOutcome::Completed);
    assert_eq!(s.position(), Some(&Position::BigBlind));
    assert_eq!(
        s.history()[0].recommendations,
        vec![
            Recommendation::Raise { raise: 8 },
            Recommendation::Reraise { to: 8 },
            Recommendation::Reraise { to: 8 },
        ]
    );
}

#[test]
fn unrecognized_answer_is_asked_again() {
    let (result, text) = run("Ah Ad BTN 0 q n Ks 7c 2d 0 n 9h 0 n 3s 0 n");
    assert_eq!(result.unwrap(), SessionOutcome::Completed);
    assert_eq!(text.matches("Please enter 'y' or 'n'.").count(), 1);
}

#[test]
fn bluff_roll_can_rescue_a_weak_hand() {
    // Pre-flop bluffs, flop rolls high and folds.
    let mut s = session_with("2c 7d BTN 4 n Ks Qh 9s 4", ScriptedRoll::new([0], 99));
    assert_eq!(s.run().unwrap(), SessionOutcome::Folded(Street::Flop));
    assert_eq!(s.history()[0].recommendations, vec![Recommendation::BluffReraise { to: 1 }]);
    let text = String::from_utf8(s.into_output()).unwrap();
    assert!(text.contains("The play is to BLUFF and RAISE to 1 BB!"));
}

#[test]
fn strength_is_the_same_on_every_street() {
    let mut s = session("Qs Js CO 0 n 2h 3h 4h 0 n 5h 0 n 6h 0 n");
    assert_eq!(s.run().unwrap(), SessionOutcome::Completed);
    assert_eq!(s.position(), Some(&Position::Other("CO".to_string())));
    let strengths: Vec<u8> = s.history().iter().map(|r| r.strength.value()).collect();
    assert_eq!(strengths, vec![22, 22, 22, 22]);
}
