//! Wall-clock timing for a render

use std::time::{Duration, Instant};

/// Run `f` and return its result together with the elapsed time
pub fn timed<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// `Execution time: 0.1234 seconds`
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Execution time: {:.4} seconds", elapsed.as_secs_f64())
}
