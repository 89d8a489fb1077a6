#[test]
fn register_derive_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/custom_register.rs");
}
