//! [`Player`]: the paced playback controller.
//!
//! # State machine
//!
//! ```text
//!            start_session()
//!   Idle ───────────────────────► Running ──► Completed
//!     ▲                              │
//!     │                              └──────► Cancelled
//!     └── (a new start_session() leaves either end state)
//! ```
//!
//! At most one session runs per player. `start_session()` blocks the
//! calling thread until the session ends; every other method takes
//! `&self`, so a host shares the player (for example in an `Arc`) to
//! cancel or change speed from elsewhere. A start request while a session
//! is running, whether from another thread or from inside a renderer
//! callback, is rejected without side effects.
//!
//! # Pacing and cancellation
//!
//! The player sleeps for the current interval at every suspension point
//! and checks for cancellation on both sides of the sleep, so a cancel
//! takes effect at most one interval after it is requested. Inside an
//! atomic write region the player keeps pulling (without sleeping) until
//! the region closes, so a cancelled array is always a permutation of its
//! input. Unpaced procedures never suspend and always run to completion.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use sortvis_core::{Algorithm, CancelToken, Renderer, SessionId, Stats, Step, Value};

use crate::config::{Pacing, PlaybackConfig};
use crate::error::{ConfigError, EngineError};
use crate::session::{Advance, Session};

/// Lifecycle of a [`Player`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// No session has run yet.
    Idle,
    /// A session is in progress.
    Running,
    /// The last session ran to completion.
    Completed,
    /// The last session was cancelled.
    Cancelled,
}

/// Why a start request was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Another session is running.
    SessionActive,
    /// The input array is empty.
    EmptyArray,
}

/// Summary of a finished session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionReport {
    /// Session id.
    pub id: SessionId,
    /// Algorithm that ran.
    pub algorithm: Algorithm,
    /// Final counters and elapsed time.
    pub stats: Stats,
    /// The array when the session stopped.
    pub final_array: Vec<Value>,
    /// Steps applied, excluding the closing full-array mark.
    pub steps_applied: u64,
}

/// Result of [`Player::start_session`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Ran to completion; the array is sorted.
    Completed(SessionReport),
    /// Stopped by [`Player::cancel`]; the array is a permutation of the
    /// input.
    Cancelled(SessionReport),
    /// Not started. Nothing changed.
    Rejected(Rejection),
}

impl Outcome {
    /// The report, unless rejected.
    pub fn report(&self) -> Option<&SessionReport> {
        match self {
            Self::Completed(r) | Self::Cancelled(r) => Some(r),
            Self::Rejected(_) => None,
        }
    }

    /// Whether the session was rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Paced playback controller.
#[derive(Debug)]
pub struct Player {
    config: PlaybackConfig,
    interval_nanos: AtomicU64,
    state: Mutex<PlaybackState>,
    cancel: CancelToken,
}

impl Player {
    /// A player with the given config.
    pub fn new(config: PlaybackConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    /// A player that never sleeps. For tests and headless hosts.
    pub fn unpaced() -> Self {
        Self::with_valid_config(PlaybackConfig::with_pacing(Pacing::Fixed(Duration::ZERO)))
    }

    fn with_valid_config(config: PlaybackConfig) -> Self {
        let interval = duration_nanos(config.pacing.interval());
        Self {
            config,
            interval_nanos: AtomicU64::new(interval),
            state: Mutex::new(PlaybackState::Idle),
            cancel: CancelToken::new(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PlaybackState {
        *self.lock_state()
    }

    /// Current pacing interval.
    pub fn interval(&self) -> Duration {
        Duration::from_nanos(self.interval_nanos.load(Ordering::Relaxed))
    }

    /// Change pacing. Takes effect at the next suspension point.
    pub fn set_pacing(&self, pacing: Pacing) {
        self.interval_nanos
            .store(duration_nanos(pacing.interval()), Ordering::Relaxed);
    }

    /// Change the speed setting, clamped into `1..=100`.
    pub fn set_speed(&self, speed: u8) {
        self.set_pacing(Pacing::Speed(speed));
    }

    /// Request cancellation of the running session.
    ///
    /// No-op unless a session is running.
    pub fn cancel(&self) {
        let state = self.lock_state();
        if *state == PlaybackState::Running {
            self.cancel.cancel();
        }
    }

    /// A token that cancels this player's sessions.
    ///
    /// The token is reset at the start of each session, so cancelling
    /// through it while idle has no effect on the next run.
    pub fn cancel_handle(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Run `algorithm` over `values`, rendering each step, until it
    /// completes or is cancelled.
    ///
    /// Returns `Ok(Outcome::Rejected(..))`, with no state change and no
    /// renderer calls, if a session is already running or `values` is
    /// empty.
    ///
    /// # Errors
    ///
    /// [`EngineError::Spawn`] if the producer thread cannot be started;
    /// the player returns to its previous state.
    ///
    /// # Panics
    ///
    /// Re-raises a panic from the sort procedure or the renderer. The
    /// player is left `Idle` and can start a new session.
    pub fn start_session<R>(
        &self,
        algorithm: Algorithm,
        values: Vec<Value>,
        renderer: &mut R,
    ) -> Result<Outcome, EngineError>
    where
        R: Renderer + ?Sized,
    {
        let guard = match self.claim(values.is_empty()) {
            Ok(guard) => guard,
            Err(rejection) => {
                tracing::debug!(%algorithm, ?rejection, "session rejected");
                return Ok(Outcome::Rejected(rejection));
            }
        };

        let procedure = self.config.procedure(algorithm)?;
        let mut session = Session::with_procedure(algorithm, procedure, values)?;
        tracing::info!(
            session = %session.id(),
            %algorithm,
            len = session.len(),
            "session started"
        );
        renderer.on_stats(&session.stats());

        let cancelled = self.drive(&mut session, renderer);

        let stats = session.stats();
        let report = SessionReport {
            id: session.id(),
            algorithm,
            stats,
            final_array: session.values().to_vec(),
            steps_applied: session.steps_applied(),
        };
        if cancelled {
            tracing::info!(
                session = %report.id,
                comparisons = stats.comparisons,
                swaps = stats.swaps,
                elapsed_ms = stats.elapsed_ms(),
                "session cancelled"
            );
        } else {
            debug_assert_parity(&session);
            renderer.on_step(&Step::MarkSorted(0..session.len()), session.values());
            tracing::info!(
                session = %report.id,
                comparisons = stats.comparisons,
                swaps = stats.swaps,
                elapsed_ms = stats.elapsed_ms(),
                "session completed"
            );
        }
        // Detach and join the producer before anyone can start again.
        drop(session);

        guard.finish(if cancelled {
            PlaybackState::Cancelled
        } else {
            PlaybackState::Completed
        });
        renderer.on_stats(&report.stats);
        renderer.on_session_end(&report.final_array, cancelled);

        Ok(if cancelled {
            Outcome::Cancelled(report)
        } else {
            Outcome::Completed(report)
        })
    }

    /// Pull, apply, render and pace until exhausted or cancelled.
    /// Returns whether the session was cancelled.
    fn drive<R>(&self, session: &mut Session, renderer: &mut R) -> bool
    where
        R: Renderer + ?Sized,
    {
        loop {
            match session.advance() {
                None => return false,
                Some(Advance::Step(step)) => {
                    renderer.on_step(&step, session.values());
                    if matches!(step, Step::Compare(..)) || step.is_mutation() {
                        renderer.on_stats(&session.stats());
                    }
                }
                Some(Advance::Suspend) => {
                    if self.should_stop(session) {
                        return true;
                    }
                    // A pending cancel inside a region runs it out unpaced.
                    let interval = self.interval();
                    if !self.cancel.is_cancelled() && !interval.is_zero() {
                        thread::sleep(interval);
                        renderer.on_stats(&session.stats());
                        if self.should_stop(session) {
                            return true;
                        }
                    }
                }
                Some(Advance::RegionClosed) => {
                    if self.should_stop(session) {
                        return true;
                    }
                }
                Some(Advance::RegionOpened) => {}
            }
        }
    }

    fn should_stop(&self, session: &Session) -> bool {
        self.cancel.is_cancelled() && !session.in_region()
    }

    /// Move `Idle | Completed | Cancelled` to `Running`, or reject.
    fn claim(&self, empty: bool) -> Result<RunningGuard<'_>, Rejection> {
        let mut state = self.lock_state();
        if *state == PlaybackState::Running {
            return Err(Rejection::SessionActive);
        }
        if empty {
            return Err(Rejection::EmptyArray);
        }
        let previous = *state;
        *state = PlaybackState::Running;
        self.cancel.reset();
        Ok(RunningGuard {
            state: &self.state,
            restore: Some(previous),
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, PlaybackState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::with_valid_config(PlaybackConfig::default())
    }
}

/// Holds `Running` for the duration of a session.
///
/// Dropped without [`finish`](Self::finish) (an error or a panic), it
/// restores the state the player had before the session was claimed.
#[derive(Debug)]
struct RunningGuard<'a> {
    state: &'a Mutex<PlaybackState>,
    restore: Option<PlaybackState>,
}

impl RunningGuard<'_> {
    fn finish(mut self, end: PlaybackState) {
        self.restore = Some(end);
    }
}

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        if let Some(next) = self.restore.take() {
            let next = if thread::panicking() {
                PlaybackState::Idle
            } else {
                next
            };
            *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
        }
    }
}

fn duration_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

fn debug_assert_parity(session: &Session) {
    if let Some(report) = session.producer_report() {
        debug_assert_eq!(report.array.values(), session.values());
        debug_assert_eq!(report.counters(), session.stats().counters());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortvis_core::NullRenderer;

    #[test]
    fn starts_idle_and_completes() {
        let player = Player::unpaced();
        assert_eq!(player.state(), PlaybackState::Idle);
        let outcome = player
            .start_session(Algorithm::Bubble, vec![3, 1, 2], &mut NullRenderer)
            .unwrap();
        let report = outcome.report().unwrap();
        assert_eq!(report.final_array, vec![1, 2, 3]);
        assert!(matches!(outcome, Outcome::Completed(_)));
        assert_eq!(player.state(), PlaybackState::Completed);
    }

    #[test]
    fn empty_array_is_rejected_without_state_change() {
        let player = Player::unpaced();
        let outcome = player
            .start_session(Algorithm::Merge, Vec::new(), &mut NullRenderer)
            .unwrap();
        assert_eq!(outcome, Outcome::Rejected(Rejection::EmptyArray));
        assert_eq!(player.state(), PlaybackState::Idle);
    }

    #[test]
    fn cancel_while_idle_does_not_poison_next_run() {
        let player = Player::unpaced();
        player.cancel();
        player.cancel_handle().cancel();
        let outcome = player
            .start_session(Algorithm::Insertion, vec![2, 1], &mut NullRenderer)
            .unwrap();
        assert!(matches!(outcome, Outcome::Completed(_)));
    }

    #[test]
    fn speed_changes_interval() {
        let player = Player::new(PlaybackConfig::default()).unwrap();
        assert_eq!(player.interval(), Duration::from_millis(55));
        player.set_speed(100);
        assert_eq!(player.interval(), Duration::from_millis(5));
        player.set_pacing(Pacing::Fixed(Duration::ZERO));
        assert!(player.interval().is_zero());
    }

    #[test]
    fn invalid_config_is_refused() {
        let config = PlaybackConfig::with_pacing(Pacing::Speed(101));
        assert_eq!(
            Player::new(config).unwrap_err(),
            ConfigError::SpeedOutOfRange { speed: 101 }
        );
    }

    #[test]
    fn guard_restores_previous_state_on_early_drop() {
        let player = Player::unpaced();
        {
            let _guard = player.claim(false).unwrap();
            assert_eq!(player.state(), PlaybackState::Running);
            assert_eq!(player.claim(false).unwrap_err(), Rejection::SessionActive);
        }
        assert_eq!(player.state(), PlaybackState::Idle);
    }
}
