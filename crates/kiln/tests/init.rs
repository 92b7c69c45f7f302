use kiln::domain::config::BootstrapConfig;
use kiln::domain::flags::Flags;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

// The published session is process-wide, so the whole lifecycle runs in one test.
#[test]
#[serial]
fn init_publishes_the_first_successful_session_only() {
    let missing = TempDir::new().unwrap();
    let failed = kiln::init(BootstrapConfig::default().with_source_root(missing.path().join("gone")));
    assert!(failed.is_err());
    assert!(kiln::session().is_none());

    let first = TempDir::new().unwrap();
    fs::write(first.path().join("int_array.kiln"), "class IntArray\nend\n").unwrap();
    let settings = first.path().join("kiln.toml");
    fs::write(&settings, format!("source_root = {:?}\n", first.path().display().to_string()))
        .unwrap();

    let session = kiln::bootstrap_from_env(Some(&settings), &[("DUMP", "1"), ("UNIFY", "0")])
        .unwrap();
    assert_eq!(session.units().len(), 1);
    assert!(session.flags().dump());
    assert!(!session.flags().unify());

    let second = TempDir::new().unwrap();
    let again = kiln::init(
        BootstrapConfig::default().with_source_root(second.path()).with_flags(Flags::empty()),
    )
    .unwrap();

    assert!(std::ptr::eq(session, again));
    assert!(std::ptr::eq(kiln::session().unwrap(), again));
    assert!(again.unit_for("IntArray").is_some());
}
