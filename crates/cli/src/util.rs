use std::time::{Duration, Instant};

pub(crate) fn time_operation<T, F: FnOnce() -> T>(operation: F) -> (T, Duration) {
    let start = Instant::now();
    let result = operation();
    (result, start.elapsed())
}
