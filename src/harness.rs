//! Timing harness: measures a single invocation of a fallible operation.

use std::time::{Duration, Instant};

/// Execute `op` exactly once, synchronously, on the calling thread, and
/// return how long the invocation took.
///
/// Both monotonic clock readings are taken whether the operation succeeds or
/// fails. A failure is then propagated unchanged: the harness never catches,
/// retries, or substitutes a sample, and a failed invocation produces no
/// duration. Sub-clock-resolution invocations report zero, never rounded up.
pub fn time_once<E>(op: impl FnOnce() -> Result<(), E>) -> Result<Duration, E> {
    let start = Instant::now();
    let outcome = op();
    let elapsed = start.elapsed();
    outcome?;
    Ok(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn returns_elapsed_time_on_success() {
        let elapsed = time_once(|| -> Result<(), Infallible> {
            std::thread::sleep(Duration::from_millis(2));
            Ok(())
        })
        .unwrap();
        assert!(elapsed >= Duration::from_millis(2));
    }

    #[test]
    fn propagates_the_operation_error() {
        let result = time_once(|| Err::<(), &str>("boom"));
        assert_eq!(result.unwrap_err(), "boom");
    }
}
