#[test]
fn kiln_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/kiln_error_pass.rs");
}
