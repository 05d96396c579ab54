use crate::{
    any::TypeInfo,
    declaration::Declaration,
    lifetime::{Lifetime, RegisterMode},
};

/// Optional value whose first assignment wins; later assignments are no-ops.
#[derive(Debug, Clone, Copy)]
pub struct SetOnce<T>(Option<T>);

impl<T> SetOnce<T> {
    /// Stores `value` if the cell is empty. Returns whether it was stored.
    pub fn set(&mut self, value: T) -> bool {
        if self.0.is_some() {
            return false;
        }
        self.0 = Some(value);
        true
    }

    #[inline]
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

impl<T> Default for SetOnce<T> {
    fn default() -> Self {
        Self(None)
    }
}

/// Per-candidate configuration accumulated before the build step.
///
/// Created once per candidate when the builder is constructed, mutated only
/// by configuration calls and consumed exactly once at build time.
#[derive(Default)]
pub(crate) struct RegistrationIntent {
    pub(crate) lifetime: SetOnce<Lifetime>,
    /// First declared lifetime disagreeing with the one already set.
    pub(crate) conflicting_lifetime: Option<Lifetime>,
    pub(crate) force_self: bool,
    pub(crate) mode: SetOnce<RegisterMode>,
    /// Explicit interface requests; additive across calls.
    pub(crate) interfaces: Vec<TypeInfo>,
}

impl RegistrationIntent {
    pub(crate) fn from_declaration(declaration: &Declaration) -> Self {
        let mut intent = Self::default();
        for &lifetime in &declaration.lifetimes {
            intent.declare_lifetime(lifetime);
        }
        if declaration.force_self {
            intent.force_self = true;
        }
        intent.interfaces.extend(declaration.interfaces.iter().copied());
        intent
    }

    /// Marker-path assignment: remembers the first disagreeing lifetime so
    /// the resolver can reject the candidate.
    pub(crate) fn declare_lifetime(&mut self, lifetime: Lifetime) {
        if self.lifetime.set(lifetime) {
            return;
        }
        if self.conflicting_lifetime.is_none() && self.lifetime.get() != Some(&lifetime) {
            self.conflicting_lifetime = Some(lifetime);
        }
    }

    /// Fluent-path assignment: plain first-wins.
    pub(crate) fn assign_lifetime(&mut self, lifetime: Lifetime) {
        let _ = self.lifetime.set(lifetime);
    }
}
