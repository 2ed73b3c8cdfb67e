//! Session layer for Wordguess.
//!
//! The engine ([`wordguess_core`]) only knows the rules. This crate is the
//! layer a front end talks to:
//!
//! 1. **Word sources**: where a secret word comes from ([`WordSource`] trait)
//! 2. **Sessions**: one game per player, replaced wholesale when a new game
//!    starts, with guess results turned into [`Flash`] messages and page
//!    requests resolved into the [`Page`] that should actually be shown
//! 3. **Session tracking**: many independent sessions keyed by a random id
//!    ([`SessionManager`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Front end (above)     ← reads input, renders the Page it is told to
//!     ↕
//! Session layer (this crate)  ← owns games, maps results to messages
//!     ↕
//! Engine (below)        ← Game rules
//! ```

mod error;
mod manager;
mod session;
mod word_source;

pub use error::SessionError;
pub use manager::{SessionId, SessionManager};
pub use session::{Flash, Page, Session};
pub use word_source::{FixedWord, WordList, WordSource};
