//! Tests for config overrides from flags.

use super::parse;
use shotname_core::config::ShotnameConfig;

#[test]
fn cli_parse_overrides() {
    let cli = parse(&[
        "shotname",
        "--model",
        "gpt-4o",
        "--max-len",
        "40",
        "--pause-ms",
        "0",
        "a.png",
    ]);
    assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
    assert_eq!(cli.max_len, Some(40));
    assert_eq!(cli.pause_ms, Some(0));
}

#[test]
fn overrides_replace_config_values() {
    let cli = parse(&["shotname", "--model", "gpt-4o", "--max-len", "40", "a.png"]);
    let cfg = cli.apply_overrides(ShotnameConfig::default()).unwrap();
    assert_eq!(cfg.model, "gpt-4o");
    assert_eq!(cfg.max_filename_len, 40);
    assert_eq!(cfg.pause_ms, 200);
}

#[test]
fn no_overrides_keep_config() {
    let cli = parse(&["shotname", "a.png"]);
    let base = ShotnameConfig {
        pause_ms: 50,
        ..Default::default()
    };
    let cfg = cli.apply_overrides(base.clone()).unwrap();
    assert_eq!(cfg, base);
}

#[test]
fn override_below_fallback_length_is_rejected() {
    let cli = parse(&["shotname", "--max-len", "3", "a.png"]);
    assert!(cli.apply_overrides(ShotnameConfig::default()).is_err());
}

#[test]
fn override_past_name_limit_is_rejected() {
    let cli = parse(&["shotname", "--max-len", "400", "a.png"]);
    let err = cli.apply_overrides(ShotnameConfig::default()).unwrap_err();
    assert!(err.to_string().contains("max_filename_len"));
}
