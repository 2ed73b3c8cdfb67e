//! Line-based front end: one guess per input line, plain text out.
//!
//! Generic over `BufRead`/`Write` so the same loop serves stdin/stdout and
//! in-memory buffers in tests.

use std::io::{BufRead, Write};

use tracing::debug;
use wordguess_core::Game;
use wordguess_session::{Page, Session};

use crate::WordguessError;

/// Writes the current state of `game` for the given page.
///
/// `Show` prints the reveal, the wrong guesses and how many are left;
/// `Win`/`Lose` print the verdict with the secret word.
pub fn render<W: Write>(
    out: &mut W,
    game: &Game,
    page: Page,
) -> Result<(), WordguessError> {
    match page {
        Page::New => writeln!(out, "Start a new game.")?,
        Page::Show => {
            let wrong: String = game.wrong_guesses().iter().collect();
            writeln!(out, "Word: {}", game.word_with_guesses())?;
            writeln!(out, "Wrong guesses: {wrong}")?;
            writeln!(out, "Guesses left: {}", game.guesses_remaining())?;
        }
        Page::Win => writeln!(out, "You win! The word was {}.", game.word())?,
        Page::Lose => {
            writeln!(out, "Sorry, you lose! The word was {}.", game.word())?
        }
    }
    Ok(())
}

/// Plays the session's current game to the end.
///
/// Each input line is one guess (only its first character counts). After
/// every line the matching flash, if any, and the resolved page are
/// written out. Returns the final page: `Win` or `Lose`, or `Show` if
/// the input ran out first.
///
/// # Errors
/// Returns [`WordguessError::Io`] if reading or writing fails.
pub fn play<R, W>(
    session: &mut Session,
    input: R,
    mut out: W,
) -> Result<Page, WordguessError>
where
    R: BufRead,
    W: Write,
{
    let mut page = session.visit(Page::Show);
    render(&mut out, session.game(), page)?;

    let mut lines = input.lines();
    while page == Page::Show {
        write!(out, "Guess a letter: ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            debug!("input closed mid-game");
            writeln!(out)?;
            break;
        };

        if let Some(flash) = session.guess(Some(line.as_str())) {
            writeln!(out, "{flash}")?;
        }
        page = session.visit(Page::Show);
        render(&mut out, session.game(), page)?;
    }

    out.flush()?;
    Ok(page)
}
