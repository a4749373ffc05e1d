//! # Spotify Integration Module
//!
//! Everything that talks to the Spotify Web API lives here. The module is
//! read-only: it exchanges a refresh token for an access token and asks the
//! player endpoints what the account is listening to.
//!
//! ## Architecture
//!
//! ```text
//! HTTP surface / CLI
//!          ↓
//!     TrackResolver  ──→ AssetEncoder (album art)
//!          ↓
//!      AuthClient
//!          ↓
//!   Transport (reqwest, or a stub in tests)
//!          ↓
//!   Spotify Web API
//! ```
//!
//! ## Submodules
//!
//! - [`transport`] - the [`transport::Transport`] seam, its `reqwest`
//!   implementation and the typed lookup errors.
//! - [`auth`] - refresh-token grant with a process-lifetime token cache.
//! - [`player`] - current / recently played lookups with fallback to a
//!   static default track.
//!
//! ## Failure Model
//!
//! Every upstream call is bounded by its own short timeout and there are no
//! retries. A failed lookup is logged with `warning!` and the resolver moves
//! on to the next source, so callers always receive a renderable
//! [`crate::types::Track`].
//!
//! ## API Coverage
//!
//! - `POST /api/token` (refresh-token grant)
//! - `GET /me/player/currently-playing`
//! - `GET /me/player/recently-played?limit=10`

pub mod auth;
pub mod player;
pub mod transport;

pub use auth::AuthClient;
pub use player::TrackResolver;
pub use transport::{FetchError, HttpResponse, ReqwestTransport, Transport, TransportError};
