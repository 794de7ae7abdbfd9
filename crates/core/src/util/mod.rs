pub mod range;
pub mod unit;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, and evaluates to the value of the expression. The elapsed time
/// is logged at the given level (debug by default).
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} µs", $label, elapsed.as_micros());
        value
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_timed_returns_value() {
        let value = timed!("Addition", 2 + 2);
        assert_eq!(value, 4);
    }
}
