//! Tests for logger level selection

#[cfg(test)]
mod tests {
    use blockplan::io::logging::{init_logging, level_for};
    use log::LevelFilter;

    // Tests debug wins over quiet
    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false, false), LevelFilter::Info);
        assert_eq!(level_for(true, false), LevelFilter::Warn);
        assert_eq!(level_for(false, true), LevelFilter::Debug);
        assert_eq!(level_for(true, true), LevelFilter::Debug);
    }

    // Tests repeated initialization does not panic
    #[test]
    fn test_init_twice() {
        init_logging(LevelFilter::Warn);
        init_logging(LevelFilter::Debug);
        log::info!("logger installed");
    }
}
