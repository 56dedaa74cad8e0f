//! sortvis: a step-by-step sorting algorithm engine for visualizers.
//!
//! This is the facade crate that re-exports the public API from every
//! sortvis sub-crate.
//!
//! # Quick start
//!
//! ```rust
//! use sortvis::prelude::*;
//!
//! /// Counts swaps as they are rendered.
//! #[derive(Default)]
//! struct SwapCounter(usize);
//!
//! impl Renderer for SwapCounter {
//!     fn on_step(&mut self, step: &Step, _array: &[Value]) {
//!         if matches!(step, Step::Swap(..)) {
//!             self.0 += 1;
//!         }
//!     }
//! }
//!
//! let values = ArrayConfig { size: 20, seed: Some(3), ..Default::default() }.generate();
//! let player = Player::unpaced();
//! let mut renderer = SwapCounter::default();
//! let outcome = player
//!     .start_session(Algorithm::Selection, values, &mut renderer)
//!     .unwrap();
//! let report = outcome.report().unwrap();
//! assert!(report.final_array.windows(2).all(|w| w[0] <= w[1]));
//! assert_eq!(renderer.0 as u64, report.stats.swaps);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sortvis-core` | Array model, steps, stats, algorithm catalog, renderer trait |
//! | [`step`] | `sortvis-step` | Sort procedure trait, context, step logs and streams |
//! | [`algorithms`] | `sortvis-algorithms` | The eleven procedures |
//! | [`engine`] | `sortvis-engine` | Sessions, the player, configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the renderer trait (`sortvis-core`).
pub use sortvis_core as types;

/// Step sequencing (`sortvis-step`).
///
/// Implement [`step::SortProcedure`] to add an algorithm; run it
/// synchronously with [`step::execute`] into a [`step::StepLog`].
pub use sortvis_step as step;

/// The eleven sort procedures (`sortvis-algorithms`).
pub use sortvis_algorithms as algorithms;

/// Sessions and paced playback (`sortvis-engine`).
pub use sortvis_engine as engine;

/// Common imports for typical sortvis usage.
///
/// ```rust
/// use sortvis::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use sortvis_core::{
        Algorithm, ArrayState, CancelToken, NullRenderer, Renderer, Stats, Step, Value,
    };

    // Procedures
    pub use sortvis_step::{Halted, SortContext, SortProcedure};

    // Engine
    pub use sortvis_engine::{
        ArrayConfig, Outcome, Pacing, PlaybackConfig, PlaybackState, Player, Session,
        SessionReport,
    };
}
