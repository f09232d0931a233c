use microhttp::config::{Config, DEFAULT_LISTEN_ADDR};
use std::path::PathBuf;

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_config_default_directory_is_cwd() {
    let cfg = Config::from_args(args(&[]));
    assert_eq!(cfg.directory, PathBuf::from("."));
}

#[test]
fn test_config_directory_flag() {
    let cfg = Config::from_args(args(&["--directory", "/tmp/served"]));
    assert_eq!(cfg.directory, PathBuf::from("/tmp/served"));
}

#[test]
fn test_config_ignores_unknown_args() {
    let cfg = Config::from_args(args(&["--verbose", "--directory", "/data", "extra"]));
    assert_eq!(cfg.directory, PathBuf::from("/data"));
}

#[test]
fn test_config_listen_addr_is_fixed() {
    let cfg = Config::from_args(args(&["--directory", "/data"]));
    assert_eq!(cfg.listen_addr, DEFAULT_LISTEN_ADDR);
    assert_eq!(cfg.listen_addr, "127.0.0.1:4221");
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::from_args(args(&["--directory", "/data"]));
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.directory, cfg2.directory);
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
}
