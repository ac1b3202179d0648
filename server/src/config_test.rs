use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("SITE_DIR");
    }
}

// =============================================================
// parse_port
// =============================================================

#[test]
fn parse_port_defaults_when_missing_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("")), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_numbers() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 80 ")), Ok(80));
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("eighty")), Err(ConfigError::InvalidPort("eighty".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

// =============================================================
// from_env
// =============================================================

#[test]
fn from_env_uses_defaults() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.site_dir.ends_with("public"));
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "4321");
        std::env::set_var("SITE_DIR", "/srv/kapricho");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4321);
    assert_eq!(cfg.site_dir, PathBuf::from("/srv/kapricho"));

    unsafe { clear_server_env() };
}

#[test]
fn config_error_message() {
    assert_eq!(ConfigError::InvalidPort("x".into()).to_string(), "invalid PORT value: x");
}
