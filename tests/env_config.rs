//! Reads the real `LVLOG_*` environment. Kept in its own test binary with a
//! single test so no other thread reads the environment while it changes.

use lvlog::{ConfigBuilder, EnvConfig, LogError, Severity, Target};

const VARS: [&str; 4] = [
    "LVLOG_TARGET",
    "LVLOG_LEVEL",
    "LVLOG_PATH",
    "LVLOG_FLUSH_INTERVAL_MS",
];

fn set(key: &str, value: &str) {
    // SAFETY: this binary runs one test on one thread.
    unsafe { std::env::set_var(key, value) };
}

fn clear() {
    for key in VARS {
        // SAFETY: see `set`.
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
fn test_config_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("env.log");

    clear();
    set("LVLOG_TARGET", "file");
    set("LVLOG_LEVEL", "warn");
    set("LVLOG_PATH", path.to_str().unwrap());
    let logger = ConfigBuilder::from_env().unwrap().build().unwrap();
    assert_eq!(logger.target(), Target::File);
    assert_eq!(logger.threshold(), Severity::Warning);
    assert_eq!(logger.path(), Some(path.as_path()));
    logger.info("hidden");
    logger.error("shown");
    drop(logger);
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[ERROR] shown\n"));
    assert!(!content.contains("hidden"));

    clear();
    let config = EnvConfig::load().unwrap();
    assert_eq!(config.TARGET, Target::Terminal);
    assert_eq!(config.LEVEL, Severity::Debug);
    assert_eq!(config.PATH, None);
    assert_eq!(config.FLUSH_INTERVAL_MS, 0);

    set("LVLOG_LEVEL", "fatal");
    assert!(matches!(EnvConfig::load(), Err(LogError::Env(_))));
    assert!(matches!(ConfigBuilder::from_env(), Err(LogError::Env(_))));
    clear();
}
