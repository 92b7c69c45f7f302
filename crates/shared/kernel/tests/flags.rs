use kiln_kernel::config::{FlagRule, resolve_flag, resolve_flags};
use kiln_kernel::domain::flags::Flags;

#[test]
fn dump_requires_exactly_one() {
    for (value, expected) in [("1", true), ("0", false), ("true", false), ("11", false), ("", false)] {
        assert_eq!(resolve_flags(&[("DUMP", value)]).dump(), expected, "DUMP={value:?}");
    }
    assert!(!resolve_flags(&[("UNRELATED", "1")]).dump());
}

#[test]
fn unify_defaults_on_unless_zero() {
    assert!(resolve_flags(&[("OTHER", "x")]).unify());
    assert!(resolve_flags(&[("UNIFY", "1")]).unify());
    assert!(resolve_flags(&[("UNIFY", "false")]).unify());
    assert!(!resolve_flags(&[("UNIFY", "0")]).unify());
}

#[test]
fn log_and_cache_follow_their_rules() {
    let flags = resolve_flags(&[("LOG", "1"), ("CACHE", "0")]);
    assert!(flags.log());
    assert!(!flags.cache());
    assert_eq!(flags, Flags::LOG | Flags::UNIFY);
}

#[test]
fn custom_rules_apply_to_any_variable() {
    let env = [("MODE", "fast")];
    assert!(resolve_flag(&env, "MODE", FlagRule::Equals("fast")));
    assert!(!resolve_flag(&env, "MODE", FlagRule::NotEquals("fast")));
    assert!(resolve_flag(&env, "MISSING", FlagRule::NotEquals("fast")));
}
