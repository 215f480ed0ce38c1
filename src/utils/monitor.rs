use std::time::{Duration, Instant};

/// Comparison count paired with the wall-clock time of one algorithm run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub comparisons: u64,
    pub elapsed: Duration,
}

impl Measurement {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Value returned by a timed body together with its duration.
#[derive(Debug, Clone, Copy)]
pub struct Measured<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Times `body` on the monotonic clock. Only the body is inside the window.
pub fn measure<T, F>(body: F) -> Measured<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = body();
    let elapsed = start.elapsed();

    Measured { value, elapsed }
}

/// Times an algorithm that reports its own comparison count.
pub fn measure_comparisons<F>(phase: &str, body: F) -> Measurement
where
    F: FnOnce() -> u64,
{
    let Measured { value, elapsed } = measure(body);

    tracing::debug!(
        "📊 {} - comparisons: {}, time: {:?}",
        phase,
        value,
        elapsed
    );

    Measurement {
        comparisons: value,
        elapsed,
    }
}
