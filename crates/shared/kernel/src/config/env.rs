use kiln_domain::constants::{CACHE, DUMP, LOG, UNIFY};
use kiln_domain::flags::Flags;
use std::collections::HashMap;
use std::fmt::Debug;

/// Read-only view of environment variables.
pub trait EnvSource: Debug {
    /// Value of `name`, or `None` when unset or not valid UTF-8.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for [(&str, &str)] {
    fn var(&self, name: &str) -> Option<String> {
        self.iter().find(|(key, _)| *key == name).map(|(_, value)| (*value).to_owned())
    }
}

impl<const N: usize> EnvSource for [(&str, &str); N] {
    fn var(&self, name: &str) -> Option<String> {
        self.as_slice().var(name)
    }
}

/// Literal comparison deciding a flag from its variable's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagRule {
    /// On iff the value is exactly the literal.
    Equals(&'static str),
    /// On unless the value is exactly the literal.
    NotEquals(&'static str),
}

impl FlagRule {
    #[must_use]
    pub fn eval(self, value: &str) -> bool {
        match self {
            Self::Equals(literal) => value == literal,
            Self::NotEquals(literal) => value != literal,
        }
    }
}

/// Reads `name` from `env` and applies `rule`. An unset variable compares as `""`.
pub fn resolve_flag(env: &(impl EnvSource + ?Sized), name: &str, rule: FlagRule) -> bool {
    rule.eval(env.var(name).as_deref().unwrap_or_default())
}

const RULES: [(&str, Flags, FlagRule); 4] = [
    (DUMP, Flags::DUMP, FlagRule::Equals("1")),
    (UNIFY, Flags::UNIFY, FlagRule::NotEquals("0")),
    (LOG, Flags::LOG, FlagRule::Equals("1")),
    (CACHE, Flags::CACHE, FlagRule::NotEquals("0")),
];

/// Derives the full flag set from `env`. Never fails.
pub fn resolve_flags(env: &(impl EnvSource + ?Sized)) -> Flags {
    RULES
        .iter()
        .filter(|(name, _, rule)| resolve_flag(env, name, *rule))
        .fold(Flags::empty(), |flags, (_, flag, _)| flags | *flag)
}
