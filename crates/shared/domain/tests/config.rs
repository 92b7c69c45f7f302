use kiln_domain::config::BootstrapConfig;
use kiln_domain::flags::Flags;
use serde_json::json;
use std::path::PathBuf;

#[test]
fn config_defaults_are_sane() {
    let cfg = BootstrapConfig::default();
    assert_eq!(cfg.extension, "kiln");
    assert!(cfg.source_root.is_none());
    assert_eq!(cfg.flags, Flags::DEFAULTS);
}

#[test]
fn bootstrap_config_deserializes() {
    let raw = json!({ "source_root": "/opt/kiln/src", "extension": "kl" });

    let cfg: BootstrapConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.source_root, Some(PathBuf::from("/opt/kiln/src")));
    assert_eq!(cfg.extension, "kl");
    assert_eq!(cfg.flags, Flags::DEFAULTS, "flags never come from the config file");
}

#[test]
fn builders_replace_fields_without_touching_the_original() {
    let base = BootstrapConfig::default();
    let derived = base.clone().with_flags(Flags::DUMP).with_source_root("units");

    assert_eq!(base.flags, Flags::DEFAULTS);
    assert!(base.source_root.is_none());
    assert_eq!(derived.flags, Flags::DUMP);
    assert_eq!(derived.source_root.as_deref(), Some(std::path::Path::new("units")));
}
