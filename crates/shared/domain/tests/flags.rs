use kiln_domain::flags::Flags;

#[test]
fn defaults_enable_unify_and_cache_only() {
    let flags = Flags::default();
    assert!(flags.unify());
    assert!(flags.cache());
    assert!(!flags.dump());
    assert!(!flags.log());
}

#[test]
fn getters_read_single_bits() {
    let flags = Flags::DUMP | Flags::LOG;
    assert!(flags.dump());
    assert!(flags.log());
    assert!(!flags.unify());
    assert!(!flags.cache());
    assert!(!Flags::empty().dump());
}
