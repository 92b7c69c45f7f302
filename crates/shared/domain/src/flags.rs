use bitflags::bitflags;

bitflags! {
    /// Process-wide switches derived once from the environment.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Flags: u32 {
        const DUMP = 1 << 0;
        const UNIFY = 1 << 1;
        const LOG = 1 << 2;
        const CACHE = 1 << 3;
    }
}

impl Flags {
    /// The set in effect when no environment variable is present.
    pub const DEFAULTS: Self = Self::UNIFY.union(Self::CACHE);

    #[must_use]
    pub const fn dump(self) -> bool {
        self.contains(Self::DUMP)
    }

    #[must_use]
    pub const fn unify(self) -> bool {
        self.contains(Self::UNIFY)
    }

    #[must_use]
    pub const fn log(self) -> bool {
        self.contains(Self::LOG)
    }

    #[must_use]
    pub const fn cache(self) -> bool {
        self.contains(Self::CACHE)
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::DEFAULTS
    }
}
