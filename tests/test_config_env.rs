//! Kept as the only test in its binary: it mutates process environment.

use std::path::PathBuf;

use gatehouse::config::Config;

#[test]
fn test_config_env_overrides() {
    unsafe {
        std::env::remove_var("GATEHOUSE_CONFIG");
        std::env::set_var("LISTEN", "0.0.0.0:5000");
        std::env::set_var("DOCUMENT_ROOT", "/var/www");
        std::env::set_var("BASE_URL", "http://example.org:5000");
    }
    let cfg = Config::load().unwrap();
    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("DOCUMENT_ROOT");
        std::env::remove_var("BASE_URL");
    }

    assert_eq!(cfg.listen_addr, "0.0.0.0:5000");
    assert_eq!(cfg.document_root, PathBuf::from("/var/www"));
    assert_eq!(cfg.base_url, "http://example.org:5000");
}
