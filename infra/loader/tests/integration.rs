use kiln_loader::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, body: &[u8]) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, body).unwrap();
    path
}

fn fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "prelude.kiln", b"require \"std\"\n");
    write(temp.path(), "std/int.kiln", b"class Int\nend\n");
    write(temp.path(), "std/array.kiln", b"class Array\nend\n");
    write(temp.path(), "std/README.md", b"not a unit");
    write(temp.path(), "std/nested/deep/pointer.kiln", b"class Pointer\nend\n");
    temp
}

fn relative(root: &Path, paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn test_discovery_is_recursive_filtered_and_sorted() {
    let temp = fixture();
    let registry = UnitRegistry::builder().root(temp.path()).build().unwrap();

    let found = registry.discover().unwrap();
    assert_eq!(
        relative(registry.root(), &found),
        ["prelude.kiln", "std/array.kiln", "std/int.kiln", "std/nested/deep/pointer.kiln"]
    );
}

#[test]
fn test_custom_extension() {
    let temp = fixture();
    let registry = UnitRegistry::builder().root(temp.path()).extension("md").build().unwrap();

    let found = registry.discover().unwrap();
    assert_eq!(relative(registry.root(), &found), ["std/README.md"]);
}

#[test]
fn test_load_all_runs_loader_once_per_unit() {
    let temp = fixture();
    let mut seen = Vec::new();
    let mut registry = UnitRegistry::builder()
        .root(temp.path())
        .loader(|unit: &SourceUnit| -> Result<(), LoaderError> {
            seen.push(unit.text().lines().next().unwrap_or_default().to_owned());
            Ok(())
        })
        .build()
        .unwrap();

    assert_eq!(registry.load_all().unwrap(), 4);
    assert_eq!(registry.load_all().unwrap(), 0);
    assert_eq!(registry.units().len(), 4);
    drop(registry);

    assert_eq!(seen, ["require \"std\"", "class Array", "class Int", "class Pointer"]);
}

#[test]
fn test_manifest_with_duplicates_loads_each_path_once() {
    let temp = fixture();
    let int = temp.path().join("std/int.kiln");
    let detour = temp.path().join("std/nested/../int.kiln");
    let mut count = 0;
    let mut registry = UnitRegistry::builder()
        .root(temp.path())
        .loader(|_: &SourceUnit| -> Result<(), LoaderError> {
            count += 1;
            Ok(())
        })
        .build()
        .unwrap();

    let loaded = registry.load_paths([&int, &int, &detour]).unwrap();
    assert_eq!(loaded, 1);
    assert!(registry.is_loaded(&detour));
    drop(registry);
    assert_eq!(count, 1);
}

#[cfg(unix)]
#[test]
fn test_symlinked_unit_is_not_loaded_twice() {
    let temp = fixture();
    std::os::unix::fs::symlink(temp.path().join("std/int.kiln"), temp.path().join("alias.kiln"))
        .unwrap();

    let mut registry = UnitRegistry::builder().root(temp.path()).build().unwrap();
    assert_eq!(registry.discover().unwrap().len(), 5);
    assert_eq!(registry.load_all().unwrap(), 4);
}

#[test]
fn test_malformed_unit_aborts_with_its_path() {
    let temp = fixture();
    let bad = write(temp.path(), "std/broken.kiln", &[0x63, 0x6c, 0xff, 0xfe]);

    let mut registry = UnitRegistry::builder().root(temp.path()).build().unwrap();
    let err = registry.load_all().unwrap_err();

    assert!(matches!(err, LoaderError::Malformed { .. }));
    assert_eq!(err.path(), Some(bad.canonicalize().unwrap().as_path()));
    assert!(err.to_string().contains("broken.kiln"));
}

#[test]
fn test_rejecting_loader_aborts_the_load() {
    let temp = fixture();
    let mut registry = UnitRegistry::builder()
        .root(temp.path())
        .loader(|unit: &SourceUnit| -> Result<(), LoaderError> {
            if unit.text().starts_with("class Int") {
                return Err(LoaderError::Unit {
                    path: unit.path().to_path_buf(),
                    message: "duplicate definition".into(),
                    context: None,
                });
            }
            Ok(())
        })
        .build()
        .unwrap();

    let err = registry.load_all().unwrap_err();
    assert!(err.path().is_some_and(|p| p.ends_with("int.kiln")));
    assert!(err.to_string().contains("Failed to load unit"));
    // prelude and array sort before int and were loaded; pointer was never reached
    assert_eq!(registry.units().len(), 2);
}

#[test]
fn test_missing_root_is_rejected() {
    let temp = TempDir::new().unwrap();
    let err = UnitRegistry::builder().root(temp.path().join("nope")).build().unwrap_err();
    assert!(matches!(err, LoaderError::RootNotFound { .. }));
}

#[test]
fn test_load_all_units_freezes_the_result() {
    let temp = fixture();
    let units = load_all_units(temp.path()).unwrap();

    assert_eq!(units.len(), 4);
    assert!(!units.is_empty());
    let int = units.get(units.root().join("std/int.kiln")).unwrap();
    assert_eq!(int.text(), "class Int\nend\n");
    assert_eq!(units.iter().count(), (&units).into_iter().count());
}

#[test]
fn test_empty_root_loads_nothing() {
    let temp = TempDir::new().unwrap();
    let units = load_all_units(temp.path()).unwrap();
    assert!(units.is_empty());
}
