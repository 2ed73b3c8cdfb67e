//! Integration tests: full games driven the way a web front end drives
//! them: open a session, start a game, post guesses, then ask which page
//! to render after every step.

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordguess_core::GameStatus;
use wordguess_session::{
    FixedWord, Flash, Page, SessionError, SessionManager, WordList,
};

// =========================================================================
// Helpers
// =========================================================================

/// One "POST /guess" followed by "GET /show": returns the flash and the
/// page the player ends up on.
fn post_guess(
    mgr: &mut SessionManager,
    id: &wordguess_session::SessionId,
    input: &str,
) -> (Option<Flash>, Page) {
    let session = mgr.get_mut(id).expect("session exists");
    let flash = session.guess(Some(input));
    (flash, session.visit(Page::Show))
}

// =========================================================================
// Tests
// =========================================================================

#[test]
fn test_play_to_win() {
    let mut mgr = SessionManager::default();
    let id = mgr.open();
    mgr.get_mut(&id)
        .unwrap()
        .create(Some("banana"), &mut FixedWord::new("unused"))
        .unwrap();

    assert_eq!(post_guess(&mut mgr, &id, "b"), (None, Page::Show));
    assert_eq!(mgr.get(&id).unwrap().game().word_with_guesses(), "b-----");

    assert_eq!(post_guess(&mut mgr, &id, "z"), (None, Page::Show));
    assert_eq!(post_guess(&mut mgr, &id, "n"), (None, Page::Show));
    assert_eq!(post_guess(&mut mgr, &id, "a"), (None, Page::Win));

    let session = mgr.get(&id).unwrap();
    assert_eq!(session.game().word_with_guesses(), "banana");
    assert_eq!(session.visit(Page::Win), Page::Win);
    assert_eq!(session.visit(Page::Lose), Page::Win);
}

#[test]
fn test_play_to_lose() {
    let mut mgr = SessionManager::default();
    let id = mgr.open();
    mgr.get_mut(&id)
        .unwrap()
        .create(Some("cat"), &mut FixedWord::new("unused"))
        .unwrap();

    for letter in ["x", "y", "z", "q", "r", "s"] {
        assert_eq!(post_guess(&mut mgr, &id, letter), (None, Page::Show));
    }
    assert_eq!(post_guess(&mut mgr, &id, "w"), (None, Page::Lose));
    assert_eq!(mgr.get(&id).unwrap().status(), GameStatus::Lose);
    assert_eq!(mgr.get(&id).unwrap().visit(Page::Win), Page::Lose);
}

#[test]
fn test_flashes_do_not_advance_the_game() {
    let mut mgr = SessionManager::default();
    let id = mgr.open();
    mgr.get_mut(&id)
        .unwrap()
        .create(Some("cat"), &mut FixedWord::new("unused"))
        .unwrap();

    for letter in ["x", "y", "z", "q", "r", "s"] {
        post_guess(&mut mgr, &id, letter);
    }

    // Repeats and junk never count as the seventh wrong guess.
    assert_eq!(
        post_guess(&mut mgr, &id, "x"),
        (Some(Flash::AlreadyUsed), Page::Show)
    );
    assert_eq!(
        post_guess(&mut mgr, &id, "%"),
        (Some(Flash::InvalidGuess), Page::Show)
    );
    assert_eq!(
        post_guess(&mut mgr, &id, ""),
        (Some(Flash::InvalidGuess), Page::Show)
    );
    assert_eq!(mgr.get(&id).unwrap().game().wrong_guesses().len(), 6);
}

#[test]
fn test_new_game_from_word_list() {
    let words = ["apple", "grape", "melon"];
    let mut source = WordList::with_rng(words, StdRng::seed_from_u64(3));

    let mut mgr = SessionManager::default();
    let id = mgr.open();

    // Before a game starts the placeholder game is already "won"; a front
    // end sends the player to the new-game page instead of showing it.
    assert_eq!(mgr.get(&id).unwrap().visit(Page::New), Page::New);

    let game = mgr.get_mut(&id).unwrap().create(None, &mut source).unwrap();
    assert!(words.contains(&game.word()));
    assert_eq!(game.check_win_or_lose(), GameStatus::Play);
}

#[test]
fn test_new_game_with_empty_word_list_fails() {
    let mut source = WordList::new(Vec::<String>::new());
    let mut mgr = SessionManager::default();
    let id = mgr.open();

    let err = mgr.get_mut(&id).unwrap().create(None, &mut source).unwrap_err();
    assert!(matches!(err, SessionError::EmptyWordList));
    assert_eq!(mgr.get(&id).unwrap().game().word(), "");
}

#[test]
fn test_restart_mid_game() {
    let mut mgr = SessionManager::default();
    let id = mgr.open();
    let mut source = FixedWord::new("second");

    mgr.get_mut(&id)
        .unwrap()
        .create(Some("first"), &mut source)
        .unwrap();
    post_guess(&mut mgr, &id, "f");
    post_guess(&mut mgr, &id, "q");

    mgr.get_mut(&id).unwrap().create(None, &mut source).unwrap();
    let game = mgr.get(&id).unwrap().game();
    assert_eq!(game.word(), "second");
    assert_eq!(game.word_with_guesses(), "------");
    assert_eq!(game.guesses_remaining(), 7);
}
