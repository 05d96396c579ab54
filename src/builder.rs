use tracing::{debug, info_span};

use crate::{
    adapter,
    any::TypeInfo,
    candidate::Candidate,
    discovery::{self, DiscoveryScope},
    errors::AmbiguousLifetimeError,
    intent::RegistrationIntent,
    lifetime::{Lifetime, RegisterMode},
    registry::Registry,
    resolver,
};

/// Fluent configuration surface over a candidate set.
///
/// All decisions are deferred until [`RegistrationBuilder::build`]; until
/// then the builder only accumulates per-candidate intents. Lifetime and
/// mode assignments are first-wins; explicit interface requests are
/// additive. Predicates receive the candidate, "all candidates" is spelled
/// `|_| true`.
pub struct RegistrationBuilder {
    candidates: Vec<(Candidate, RegistrationIntent)>,
}

impl RegistrationBuilder {
    /// Starts from the candidates covered by a discovery scope.
    #[must_use]
    pub fn discover(scope: DiscoveryScope<'_>) -> Self {
        Self::from_candidates(discovery::discover(scope))
    }

    /// Starts from an explicit candidate table.
    #[must_use]
    pub fn from_candidates(candidates: impl IntoIterator<Item = Candidate>) -> Self {
        Self {
            candidates: candidates
                .into_iter()
                .map(|candidate| {
                    let intent = RegistrationIntent::from_declaration(&candidate.declaration);
                    (candidate, intent)
                })
                .collect(),
        }
    }

    /// Narrows the live candidate set. Destructive: later calls only see
    /// the retained candidates.
    #[must_use]
    pub fn filter(mut self, predicate: impl Fn(&Candidate) -> bool) -> Self {
        self.candidates.retain(|(candidate, _)| predicate(candidate));
        self
    }

    /// Forces matching candidates to register under their concrete type.
    #[must_use]
    pub fn use_self(self, predicate: impl Fn(&Candidate) -> bool) -> Self {
        self.apply(predicate, |intent| intent.force_self = true)
    }

    #[must_use]
    pub fn use_transient(self, predicate: impl Fn(&Candidate) -> bool) -> Self {
        self.use_lifetime(Lifetime::Transient, predicate)
    }

    #[must_use]
    pub fn use_scoped(self, predicate: impl Fn(&Candidate) -> bool) -> Self {
        self.use_lifetime(Lifetime::Scoped, predicate)
    }

    #[must_use]
    pub fn use_singleton(self, predicate: impl Fn(&Candidate) -> bool) -> Self {
        self.use_lifetime(Lifetime::Singleton, predicate)
    }

    /// Assigns a lifetime to matching candidates, first assignment wins.
    #[must_use]
    pub fn use_lifetime(self, lifetime: Lifetime, predicate: impl Fn(&Candidate) -> bool) -> Self {
        self.apply(predicate, |intent| intent.assign_lifetime(lifetime))
    }

    /// Fixes the registration mode of matching candidates, first wins.
    #[must_use]
    pub fn use_mode(self, mode: RegisterMode, predicate: impl Fn(&Candidate) -> bool) -> Self {
        self.apply(predicate, |intent| {
            let _ = intent.mode.set(mode);
        })
    }

    /// Appends explicit interface requests to matching candidates;
    /// multiple calls accumulate.
    #[must_use]
    pub fn use_interfaces(self, predicate: impl Fn(&Candidate) -> bool, interfaces: impl IntoIterator<Item = TypeInfo>) -> Self {
        let interfaces: Vec<TypeInfo> = interfaces.into_iter().collect();
        self.apply(predicate, |intent| intent.interfaces.extend(interfaces.iter().copied()))
    }

    /// Single-interface convenience over [`RegistrationBuilder::use_interfaces`].
    #[must_use]
    pub fn use_interface<I>(self, predicate: impl Fn(&Candidate) -> bool) -> Self
    where
        I: ?Sized + 'static,
    {
        self.use_interfaces(predicate, [TypeInfo::of::<I>()])
    }

    fn apply(mut self, predicate: impl Fn(&Candidate) -> bool, mut effect: impl FnMut(&mut RegistrationIntent)) -> Self {
        for (candidate, intent) in &mut self.candidates {
            if predicate(candidate) {
                effect(intent);
            }
        }
        self
    }

    /// Resolves every candidate and issues the registrations.
    ///
    /// The build is atomic: every candidate is validated before the first
    /// registry call, so a failing candidate leaves the registry untouched.
    ///
    /// # Errors
    /// Returns [`AmbiguousLifetimeError`] if any candidate declared more
    /// than one distinct lifetime.
    pub fn build(self, registry: &mut Registry) -> Result<(), AmbiguousLifetimeError> {
        let span = info_span!("build", candidates = self.candidates.len());
        let _guard = span.enter();

        let mut plans = Vec::with_capacity(self.candidates.len());
        for (candidate, intent) in &self.candidates {
            let plan = resolver::resolve(candidate, intent)?;
            if plan.is_empty() {
                debug!(candidate = candidate.name(), "No lifetime assigned, skipped");
            }
            plans.push(plan);
        }

        for ((candidate, _), plan) in self.candidates.iter().zip(&plans) {
            for binding in plan {
                adapter::bind(registry, candidate, binding);
            }
        }

        Ok(())
    }
}
