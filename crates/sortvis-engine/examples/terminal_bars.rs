//! Terminal bars: animate one sort as rows of `#` in the terminal.
//!
//! Demonstrates:
//!   1. Generating a seeded array with `ArrayConfig`
//!   2. Implementing a `Renderer`
//!   3. Running a paced session with a `Player`
//!   4. Cancelling from another thread after a deadline
//!
//! Run with:
//!   cargo run --example terminal_bars -- [algorithm] [speed] [size]
//!
//! `algorithm` is a selector key or name (`quickSortHoare`, `heap`, ..),
//! default `bubbleSort`. Set `RUST_LOG=sortvis_engine=debug` for logs.

use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use sortvis_core::{Algorithm, Renderer, Stats, Step, Value};
use sortvis_engine::{ArrayConfig, Outcome, Pacing, PlaybackConfig, Player};
use tracing_subscriber::EnvFilter;

// ─── Renderer ───────────────────────────────────────────────────

/// Redraws the whole array after every mutation, one row per element.
struct Bars {
    highlighted: Vec<usize>,
    stats: Stats,
    out: io::Stdout,
}

impl Bars {
    fn draw(&mut self, array: &[Value]) {
        let mut out = self.out.lock();
        // Clear screen, home cursor.
        let _ = write!(out, "\x1b[2J\x1b[H");
        for (i, &v) in array.iter().enumerate() {
            let mark = if self.highlighted.contains(&i) { '>' } else { ' ' };
            let _ = writeln!(out, "{mark}{:>4} {}", v, "#".repeat(v as usize / 2));
        }
        let _ = writeln!(
            out,
            "\ncomparisons {}  swaps {}  {:.0} ms",
            self.stats.comparisons,
            self.stats.swaps,
            self.stats.elapsed_ms()
        );
        let _ = out.flush();
    }
}

impl Renderer for Bars {
    fn on_step(&mut self, step: &Step, array: &[Value]) {
        match step {
            Step::Highlight(ix) => self.highlighted.extend(ix.iter().copied()),
            Step::Unhighlight(ix) => self.highlighted.retain(|i| !ix.contains(i)),
            Step::Swap(..) | Step::Overwrite { .. } => self.draw(array),
            _ => {}
        }
    }

    fn on_stats(&mut self, stats: &Stats) {
        self.stats = *stats;
    }

    fn on_session_end(&mut self, final_array: &[Value], cancelled: bool) {
        self.highlighted.clear();
        self.draw(final_array);
        println!("{}", if cancelled { "cancelled" } else { "done" });
    }
}

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let algorithm: Algorithm = args.next().as_deref().unwrap_or("bubbleSort").parse()?;
    let speed: u8 = args.next().as_deref().unwrap_or("90").parse()?;
    let size: usize = args.next().as_deref().unwrap_or("24").parse()?;

    let array = ArrayConfig {
        size,
        seed: Some(2024),
        ..ArrayConfig::default()
    };
    array.validate()?;

    let player = Arc::new(Player::new(PlaybackConfig::with_pacing(Pacing::Speed(speed)))?);

    // Give up after 20 seconds.
    let watchdog = Arc::clone(&player);
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(20));
        watchdog.cancel();
    });

    let mut bars = Bars {
        highlighted: Vec::new(),
        stats: Stats::default(),
        out: io::stdout(),
    };
    match player.start_session(algorithm, array.generate(), &mut bars)? {
        Outcome::Completed(report) | Outcome::Cancelled(report) => {
            println!(
                "{} on {} elements: {} comparisons, {} swaps, {} steps",
                report.algorithm,
                size,
                report.stats.comparisons,
                report.stats.swaps,
                report.steps_applied
            );
        }
        Outcome::Rejected(rejection) => println!("not started: {rejection:?}"),
    }
    Ok(())
}
