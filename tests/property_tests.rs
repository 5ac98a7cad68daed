//! Property-based tests for plugin_logging using proptest

use parking_lot::Mutex;
use plugin_logging::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;

#[derive(Clone, Default)]
struct CountingSink {
    count: Arc<Mutex<usize>>,
}

impl Sink for CountingSink {
    fn write(&mut self, _rendered: &Rendered) -> plugin_logging::Result<()> {
        *self.count.lock() += 1;
        Ok(())
    }

    fn flush(&mut self) -> plugin_logging::Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "counting"
    }
}

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]
}

fn counting_logger(threshold: LogLevel) -> (Logger, CountingSink) {
    let sink = CountingSink::default();
    let logger = Logger::builder()
        .threshold(threshold)
        .sink(sink.clone())
        .build()
        .unwrap();
    (logger, sink)
}

proptest! {
    /// Level names round-trip through parsing
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Enum ordering agrees with numeric ranks
    #[test]
    fn test_level_ordering_matches_ranks(level1 in any_level(), level2 in any_level()) {
        prop_assert_eq!(level1 <= level2, level1.rank() <= level2.rank());
        prop_assert_eq!(level1 < level2, level1.rank() < level2.rank());
        prop_assert_eq!(level1.is_at_least(level2), level1.rank() >= level2.rank());
    }

    /// A call reaches the sink exactly when its rank clears the threshold
    #[test]
    fn test_gating_follows_ranks(call in any_level(), threshold in any_level()) {
        let (logger, sink) = counting_logger(threshold);
        logger.log(call, "message", None, None).unwrap();

        let expected = if call.rank() >= threshold.rank() { 1 } else { 0 };
        prop_assert_eq!(*sink.count.lock(), expected);
    }

    /// Applying the same threshold repeatedly gates identically to once
    #[test]
    fn test_set_level_idempotent(target in any_level(), call in any_level(), repeats in 1usize..5) {
        let (logger, sink) = counting_logger(LogLevel::Info);
        for _ in 0..repeats {
            logger.set_level(target);
        }
        logger.log(call, "message", None, None).unwrap();

        let expected = if call.is_at_least(target) { 1 } else { 0 };
        prop_assert_eq!(*sink.count.lock(), expected);
        prop_assert_eq!(logger.get_level(), target);
    }

    /// Parsing is case-insensitive over the known names
    #[test]
    fn test_parse_case_insensitive(level in any_level(), use_lower in any::<bool>()) {
        let name = if use_lower {
            level.to_str().to_lowercase()
        } else {
            level.to_str().to_string()
        };
        let parsed: LogLevel = name.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Unknown names never parse and always enumerate the valid set
    #[test]
    fn test_unknown_names_rejected(name in "[A-Z]{1,8}") {
        prop_assume!(!["TRACE", "DEBUG", "INFO", "WARN", "ERROR"].contains(&name.as_str()));
        let err = name.parse::<LogLevel>().unwrap_err();
        prop_assert!(err.to_string().contains("expected one of TRACE, DEBUG, INFO, WARN, ERROR"));
    }
}
