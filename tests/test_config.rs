use coyote::config::Config;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.session_cookie, "JSESSIONID");
    assert_eq!(cfg.max_body_bytes, 1024 * 1024);
    assert_eq!(cfg.tracing_level(), tracing::Level::INFO);
}

#[test]
fn test_config_from_yaml_partial() {
    let cfg = Config::from_yaml_str("listen_addr: \"0.0.0.0:3000\"\nlog_level: debug\n").unwrap();

    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.tracing_level(), tracing::Level::DEBUG);
    // Unset fields keep their defaults
    assert_eq!(cfg.session_cookie, "JSESSIONID");
}

#[test]
fn test_config_from_yaml_rejects_bad_types() {
    assert!(Config::from_yaml_str("max_body_bytes: lots\n").is_err());
}

#[test]
fn test_config_unknown_log_level_falls_back() {
    let cfg = Config {
        log_level: "chatty".to_string(),
        ..Config::default()
    };
    assert_eq!(cfg.tracing_level(), tracing::Level::INFO);
}

#[test]
fn test_config_from_missing_file() {
    assert!(Config::from_file("/definitely/not/here.yaml").is_err());
}

// Environment variables are process-wide, so every env-driven case lives in
// this one test.
#[test]
fn test_config_env_overrides() {
    unsafe {
        std::env::remove_var("COYOTE_CONFIG");
        std::env::set_var("LISTEN", "0.0.0.0:5000");
        std::env::set_var("SESSION_COOKIE", "SID");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "0.0.0.0:5000");
    assert_eq!(cfg.session_cookie, "SID");

    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("SESSION_COOKIE");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.session_cookie, "JSESSIONID");
}
