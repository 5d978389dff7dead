//! Tests for the phase typestates and the session wrapper.

use imposter_core::{
    Advance, FixedRoll, GameSession, Phase, PlayerCount, PlayerNumber, Role, SecretWord,
    SetupPhase,
};

fn deal(players: u32, imposter: usize) -> imposter_core::AwaitingReveal {
    SetupPhase::new().start(
        PlayerCount::new(players).unwrap(),
        SecretWord::new("Pizza").unwrap(),
        &mut FixedRoll(imposter),
    )
}

#[test]
fn test_typestate_lifecycle() {
    let awaiting = deal(3, 1);
    assert_eq!(awaiting.current_player(), PlayerNumber::FIRST);
    assert!(!awaiting.is_last_player());

    let revealing = awaiting.reveal();
    assert_eq!(revealing.role(), Role::Imposter);

    let awaiting = match revealing.advance() {
        Advance::NextPlayer(next) => next,
        Advance::AllRevealed(_) => panic!("three players, only one has looked"),
    };
    assert_eq!(awaiting.current_player().get(), 2);

    let revealing = awaiting.reveal();
    assert_eq!(revealing.role(), Role::Crewmate("Pizza"));
    let awaiting = match revealing.advance() {
        Advance::NextPlayer(next) => next,
        Advance::AllRevealed(_) => panic!("third player has not looked"),
    };
    assert!(awaiting.is_last_player());

    let pending = match awaiting.reveal().advance() {
        Advance::AllRevealed(pending) => pending,
        Advance::NextPlayer(_) => panic!("everyone has looked"),
    };

    let complete = pending.reveal_results();
    let results = complete.results();
    assert_eq!(results.secret_word(), "Pizza");
    assert_eq!(results.imposter(), PlayerNumber::FIRST);

    let setup = complete.reset();
    assert_eq!(GameSession::from(setup), GameSession::new());
}

#[test]
fn test_out_of_range_roll_clamped_to_table() {
    let mut phase = deal(4, 40).reveal();
    loop {
        match phase.advance() {
            Advance::NextPlayer(next) => phase = next.reveal(),
            Advance::AllRevealed(pending) => {
                let results = pending.reveal_results();
                assert_eq!(results.results().imposter().get(), 4);
                break;
            }
        }
    }
}

#[test]
fn test_session_phase_and_visibility() {
    let awaiting = deal(3, 2);
    let session = GameSession::from(awaiting.clone());
    assert_eq!(session.phase(), Phase::AwaitingReveal);
    assert!(!session.word_visible());
    assert_eq!(session.current_role(), None);
    assert_eq!(session.player_count().map(PlayerCount::get), Some(3));

    let session = GameSession::from(awaiting.reveal());
    assert_eq!(session.phase(), Phase::Revealing);
    assert!(session.word_visible());
    assert_eq!(session.current_role(), Some(Role::Crewmate("Pizza")));
    assert_eq!(session.results(), None);
}

#[test]
fn test_setup_session_has_no_deal() {
    let session = GameSession::new();
    assert_eq!(session.phase(), Phase::Setup);
    assert_eq!(session.current_player(), PlayerNumber::FIRST);
    assert_eq!(session.player_count(), None);
    assert!(!session.is_last_player());
}

#[test]
fn test_deal_debug_hides_secrets() {
    let awaiting = deal(5, 3);
    let printed = format!("{awaiting:?}");
    assert!(!printed.contains("Pizza"));
    assert!(printed.contains("<hidden>"));
}

#[test]
fn test_roles_visible_only_after_first_reveal() {
    use strum::IntoEnumIterator;

    let visible: Vec<Phase> = Phase::iter().filter(|p| p.roles_visible()).collect();
    assert_eq!(
        visible,
        [Phase::Revealing, Phase::PendingFinish, Phase::Complete]
    );
}
