//! Turn rules: the session state machine and what it returns.
//!
//! `GameSession` owns all game state. Operations are all-or-nothing:
//! they either complete a transition and return an outcome, or return a
//! `GameError` and leave the session as it was.

pub mod error;
pub mod outcome;
pub mod session;
pub mod view;

pub use error::GameError;
pub use outcome::{DrawOutcome, GameResult, RequestOutcome, RequestResult, SessionStatus};
pub use session::GameSession;
pub use view::PlayerView;
