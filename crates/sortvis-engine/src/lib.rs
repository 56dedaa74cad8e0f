//! Session sequencing and paced playback for sortvis.
//!
//! - [`Session`]: one algorithm over one array, pulled event by event.
//!   Each pull resumes the procedure on its producer thread exactly up to
//!   its next event and applies it to the session's array.
//! - [`Player`]: the playback controller. Enforces one running session,
//!   sleeps at suspension points, forwards steps and stats to a
//!   [`Renderer`](sortvis_core::Renderer), and handles cancellation.
//! - [`PlaybackConfig`] / [`ArrayConfig`]: pacing, tuning, and random
//!   input generation.
//!
//! # Examples
//!
//! ```
//! use sortvis_core::{Algorithm, NullRenderer};
//! use sortvis_engine::{Outcome, Player};
//!
//! let player = Player::unpaced();
//! let outcome = player
//!     .start_session(Algorithm::Bubble, vec![5, 3, 4, 1, 2], &mut NullRenderer)
//!     .unwrap();
//! let Outcome::Completed(report) = outcome else { panic!("not completed") };
//! assert_eq!(report.final_array, vec![1, 2, 3, 4, 5]);
//! assert_eq!(report.stats.comparisons, 10);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod player;
pub mod session;

pub use config::{ArrayConfig, Pacing, PlaybackConfig, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};
pub use error::{ConfigError, EngineError};
pub use player::{Outcome, PlaybackState, Player, Rejection, SessionReport};
pub use session::{Advance, Session};
