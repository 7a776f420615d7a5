//! Short-poll quiz client implementation.

mod api;
mod error;
mod formatter;
mod phase;
mod session;

pub use api::ApiClient;
pub use error::ClientError;
pub use phase::{LEADERBOARD_POLL_MS, LOBBY_POLL_MS, Phase, QUESTION_SECONDS, phase_after_poll};
pub use session::{ClientMode, run_client_session};
