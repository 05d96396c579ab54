use core::fmt::{self, Display, Formatter};

/// How long an instance produced by a registration lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Lifetime {
    /// New instance on every resolution.
    Transient,
    /// One instance per request scope.
    Scoped,
    /// One instance for the whole container.
    Singleton,
}

impl Lifetime {
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Lifetime::Transient => "transient",
            Lifetime::Scoped => "scoped",
            Lifetime::Singleton => "singleton",
        }
    }
}

impl Display for Lifetime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a candidate is exposed in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterMode {
    /// Concrete type only, interfaces are ignored.
    SelfOnly,
    /// First introduced interface.
    FirstInterface,
    /// Every introduced interface, or the explicitly requested subset.
    AllInterfaces,
}
