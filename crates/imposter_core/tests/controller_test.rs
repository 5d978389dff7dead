//! Tests for the game controller state machine.

use imposter_core::{
    Action, Dice, FixedRoll, GameController, GameError, InvariantSet, MAX_PLAYERS, MIN_PLAYERS,
    Phase, PlayerNumber, Role, SessionInvariants, ValidationError,
};

fn play_reveal_cycle<S: imposter_core::RandomSource>(game: &mut GameController<S>, players: u8) {
    for _ in 0..players {
        assert_eq!(game.phase(), Phase::AwaitingReveal);
        game.reveal_word().expect("reveal in AwaitingReveal");
        game.advance().expect("advance in Revealing");
    }
}

#[test]
fn test_every_valid_count_deals_an_imposter_on_the_table() {
    for count in MIN_PLAYERS..=MAX_PLAYERS {
        for round in 0..5u64 {
            let dice = Dice::seeded(u64::from(count) * 100 + round);
            let mut game = GameController::with_dice(dice);
            game.start_game(&count.to_string(), "Hospital").expect("valid setup");
            assert_eq!(game.phase(), Phase::AwaitingReveal);
            assert_eq!(game.current_player(), PlayerNumber::FIRST);

            play_reveal_cycle(&mut game, count);
            game.reveal_results().unwrap();
            let imposter = game.results().unwrap().imposter().get();
            assert!((1..=count).contains(&imposter), "imposter {imposter} of {count}");
        }
    }
}

#[test]
fn test_out_of_range_counts_rejected() {
    for input in ["2", "68", "0", "", "abc", "three", "-5"] {
        let mut game = GameController::with_dice(FixedRoll(1));
        let err = game.start_game(input, "Beach").unwrap_err();
        assert_eq!(
            err,
            GameError::Validation(ValidationError::PlayerCountOutOfRange),
            "input {input:?}"
        );
        assert_eq!(game.phase(), Phase::Setup);
        assert_eq!(game.player_count(), None);
        assert_eq!(game.error_message(), Some("player count out of range"));
    }
}

#[test]
fn test_blank_word_rejected() {
    for word in ["", " ", "\t\n  "] {
        let mut game = GameController::with_dice(FixedRoll(1));
        let err = game.start_game("4", word).unwrap_err();
        assert_eq!(err.validation(), Some(ValidationError::SecretWordRequired));
        assert_eq!(game.phase(), Phase::Setup);
        assert_eq!(game.error_message(), Some("secret word required"));
    }
}

#[test]
fn test_dismiss_error_clears_message_only() {
    let mut game = GameController::with_dice(FixedRoll(1));
    let _ = game.start_game("99", "Beach");
    assert!(game.error_message().is_some());

    game.dismiss_error();
    assert_eq!(game.error_message(), None);
    assert_eq!(game.phase(), Phase::Setup);

    // Still usable after the failure.
    assert_eq!(game.start_game("3", "Beach"), Ok(Phase::AwaitingReveal));
}

#[test]
fn test_full_cycle_lands_on_pending_finish() {
    for count in [3u8, 4, 12, 67] {
        let mut game = GameController::with_dice(FixedRoll(2));
        game.start_game(&count.to_string(), "School").unwrap();
        play_reveal_cycle(&mut game, count);
        assert_eq!(game.phase(), Phase::PendingFinish);
        assert_eq!(game.current_player().get(), count);
        assert!(!game.word_visible());
    }
}

#[test]
fn test_word_visible_only_while_revealing() {
    let mut game = GameController::with_dice(FixedRoll(1));
    assert!(!game.word_visible());
    game.start_game("3", "Pizza").unwrap();
    assert!(!game.word_visible());
    game.reveal_word().unwrap();
    assert!(game.word_visible());
    game.advance().unwrap();
    assert!(!game.word_visible());
    assert_eq!(game.current_player().get(), 2);
}

#[test]
fn test_roles_match_the_deal() {
    let mut game = GameController::with_dice(FixedRoll(4));
    game.start_game("6", "  Library ").unwrap();
    game.reveal_word().unwrap();

    let imposter = PlayerNumber::new(4).unwrap();
    assert_eq!(game.role_for(imposter), Some(Role::Imposter));
    for player in game.player_count().unwrap().players() {
        if player != imposter {
            assert_eq!(game.role_for(player), Some(Role::Crewmate("Library")));
        }
    }
    assert_eq!(game.role_for(PlayerNumber::new(7).unwrap()), None);
}

#[test]
fn test_roles_hidden_before_first_reveal() {
    let mut game = GameController::with_dice(FixedRoll(1));
    assert_eq!(game.role_for(PlayerNumber::FIRST), None);
    game.start_game("3", "Beach").unwrap();
    assert_eq!(game.role_for(PlayerNumber::FIRST), None);
    assert_eq!(game.current_role(), None);
    assert_eq!(game.results(), None);
}

#[test]
fn test_current_role_follows_the_device() {
    let mut game = GameController::with_dice(FixedRoll(2));
    game.start_game("3", "Beach").unwrap();

    game.reveal_word().unwrap();
    assert_eq!(game.current_role(), Some(Role::Crewmate("Beach")));
    game.advance().unwrap();

    game.reveal_word().unwrap();
    assert_eq!(game.current_role(), Some(Role::Imposter));
    assert_eq!(game.current_role().and_then(|r| r.secret_word()), None);
}

#[test]
fn test_last_player_flag() {
    let mut game = GameController::with_dice(FixedRoll(1));
    game.start_game("3", "Beach").unwrap();
    let mut flags = Vec::new();
    for _ in 0..3 {
        flags.push(game.is_last_player());
        game.reveal_word().unwrap();
        game.advance().unwrap();
    }
    assert_eq!(flags, [false, false, true]);
    assert!(!game.is_last_player());
}

#[test]
fn test_out_of_phase_actions_leave_state_untouched() {
    let mut game = GameController::with_dice(FixedRoll(1));
    game.start_game("3", "Beach").unwrap();
    let before = game.view();

    for (result, action) in [
        (game.advance(), Action::Advance),
        (game.reveal_results(), Action::RevealResults),
        (game.reset(), Action::Reset),
        (game.start_game("4", "Moon"), Action::StartGame),
    ] {
        assert_eq!(
            result,
            Err(GameError::OutOfPhase {
                action,
                phase: Phase::AwaitingReveal
            })
        );
    }
    assert_eq!(game.view(), before);
}

#[test]
fn test_reset_matches_fresh_controller() {
    let mut game = GameController::with_dice(FixedRoll(3));
    game.start_game("4", "Beach").unwrap();
    play_reveal_cycle(&mut game, 4);
    game.reveal_results().unwrap();
    assert_eq!(game.phase(), Phase::Complete);

    assert_eq!(game.reset(), Ok(Phase::Setup));
    let fresh = GameController::with_dice(FixedRoll(3));
    assert_eq!(game.view(), fresh.view());
    assert_eq!(game.session(), fresh.session());
    assert_eq!(game.role_for(PlayerNumber::FIRST), None);
    assert_eq!(game.results(), None);
}

#[test]
fn test_beach_scenario() {
    let mut game = GameController::with_dice(FixedRoll(3));
    assert_eq!(game.start_game("5", "Beach"), Ok(Phase::AwaitingReveal));

    for player in 1..=5u8 {
        assert_eq!(game.current_player().get(), player);
        game.reveal_word().unwrap();
        let expected = if player == 3 {
            Role::Imposter
        } else {
            Role::Crewmate("Beach")
        };
        assert_eq!(game.current_role(), Some(expected));
        let next = game.advance().unwrap();
        if player < 5 {
            assert_eq!(next, Phase::AwaitingReveal);
        } else {
            assert_eq!(next, Phase::PendingFinish);
        }
    }

    assert_eq!(game.reveal_results(), Ok(Phase::Complete));
    let results = game.results().unwrap();
    assert_eq!(results.secret_word(), "Beach");
    assert_eq!(results.imposter().label(), "Player 3");
}

#[test]
fn test_invariants_hold_at_every_step() {
    let mut game = GameController::with_dice(Dice::seeded(9));
    assert!(SessionInvariants::check_all(game.session()).is_ok());
    game.start_game("7", "Pizza").unwrap();
    while game.phase() != Phase::PendingFinish {
        game.reveal_word().unwrap();
        assert!(SessionInvariants::check_all(game.session()).is_ok());
        game.advance().unwrap();
        assert!(SessionInvariants::check_all(game.session()).is_ok());
    }
}
