use tracing::warn;

use crate::{
    candidate::Candidate,
    errors::AmbiguousLifetimeError,
    intent::RegistrationIntent,
    lifetime::{Lifetime, RegisterMode},
};

/// Where one planned binding points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindingTarget {
    SelfType,
    /// Index into the candidate's interface bindings.
    Interface(usize),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PlannedBinding {
    pub(crate) lifetime: Lifetime,
    pub(crate) target: BindingTarget,
}

/// Decides the registration targets for one candidate.
///
/// An empty plan means the candidate opted out by not declaring a lifetime;
/// that is not an error. Explicit interface requests are intersected with
/// the introduced set, and an intersection that comes up empty falls back
/// to the first introduced interface with a warning.
///
/// # Errors
/// Returns [`AmbiguousLifetimeError`] if the candidate declared more than
/// one distinct lifetime.
pub(crate) fn resolve(candidate: &Candidate, intent: &RegistrationIntent) -> Result<Vec<PlannedBinding>, AmbiguousLifetimeError> {
    let Some(&lifetime) = intent.lifetime.get() else {
        return Ok(Vec::new());
    };
    if let Some(conflicting) = intent.conflicting_lifetime {
        return Err(AmbiguousLifetimeError {
            candidate: candidate.name(),
            first: lifetime,
            second: conflicting,
        });
    }

    let plan = |target| PlannedBinding { lifetime, target };

    if intent.force_self || intent.mode.get() == Some(&RegisterMode::SelfOnly) {
        return Ok(vec![plan(BindingTarget::SelfType)]);
    }

    let introduced: Vec<usize> = candidate.introduced().map(|(index, _)| index).collect();
    let Some(&first) = introduced.first() else {
        return Ok(vec![plan(BindingTarget::SelfType)]);
    };

    if intent.mode.get() == Some(&RegisterMode::FirstInterface) {
        return Ok(vec![plan(BindingTarget::Interface(first))]);
    }

    // Intersection order follows introduction order, not request order.
    let requested: Vec<usize> = introduced
        .iter()
        .copied()
        .filter(|&index| intent.interfaces.contains(&candidate.interfaces[index].type_info))
        .collect();

    if intent.mode.get() == Some(&RegisterMode::AllInterfaces) {
        let targets = if requested.is_empty() { introduced } else { requested };
        return Ok(targets.into_iter().map(|index| plan(BindingTarget::Interface(index))).collect());
    }

    if intent.interfaces.is_empty() {
        return Ok(vec![plan(BindingTarget::Interface(first))]);
    }
    if requested.is_empty() {
        warn!(
            candidate = candidate.name(),
            "explicit interface request matches no introduced interface, falling back to the first introduced one"
        );
        return Ok(vec![plan(BindingTarget::Interface(first))]);
    }

    Ok(requested.into_iter().map(|index| plan(BindingTarget::Interface(index))).collect())
}

#[cfg(test)]
mod tests {
    use super::{resolve, BindingTarget};
    use crate::{
        candidate::Candidate,
        intent::RegistrationIntent,
        lifetime::{Lifetime, RegisterMode},
        TypeInfo,
    };

    trait First: Send + Sync {}
    trait Second: Send + Sync {}

    struct Plain;

    struct Service;
    impl First for Service {}
    impl Second for Service {}

    fn service() -> Candidate {
        Candidate::of(|| Service)
            .implements::<dyn First>(|service| service)
            .implements::<dyn Second>(|service| service)
            .build()
    }

    fn scoped_intent() -> RegistrationIntent {
        let mut intent = RegistrationIntent::default();
        intent.assign_lifetime(Lifetime::Scoped);
        intent
    }

    fn targets(candidate: &Candidate, intent: &RegistrationIntent) -> Vec<BindingTarget> {
        resolve(candidate, intent).unwrap().into_iter().map(|planned| planned.target).collect()
    }

    #[test]
    fn test_no_lifetime_skips() {
        assert!(resolve(&service(), &RegistrationIntent::default()).unwrap().is_empty());
    }

    #[test]
    fn test_conflicting_lifetimes_fail() {
        let mut intent = RegistrationIntent::default();
        intent.declare_lifetime(Lifetime::Scoped);
        intent.declare_lifetime(Lifetime::Transient);

        let err = resolve(&service(), &intent).unwrap_err();
        assert_eq!(err.first, Lifetime::Scoped);
        assert_eq!(err.second, Lifetime::Transient);
        assert!(err.candidate.ends_with("Service"));
    }

    #[test]
    fn test_force_self_bypasses_interfaces() {
        let mut intent = scoped_intent();
        intent.force_self = true;
        intent.interfaces.push(TypeInfo::of::<dyn Second>());

        assert_eq!(targets(&service(), &intent), [BindingTarget::SelfType]);
    }

    #[test]
    fn test_no_interfaces_registers_self() {
        let candidate = Candidate::of(|| Plain).build();
        assert_eq!(targets(&candidate, &scoped_intent()), [BindingTarget::SelfType]);
    }

    #[test]
    fn test_default_is_first_introduced_interface() {
        assert_eq!(targets(&service(), &scoped_intent()), [BindingTarget::Interface(0)]);
    }

    #[test]
    fn test_explicit_request_narrows() {
        let mut intent = scoped_intent();
        intent.interfaces.push(TypeInfo::of::<dyn Second>());

        assert_eq!(targets(&service(), &intent), [BindingTarget::Interface(1)]);
    }

    #[test]
    fn test_invalid_request_falls_back_to_first() {
        let mut intent = scoped_intent();
        intent.interfaces.push(TypeInfo::of::<dyn Send>());

        assert_eq!(targets(&service(), &intent), [BindingTarget::Interface(0)]);
    }

    #[test]
    fn test_all_interfaces_mode() {
        let mut intent = scoped_intent();
        let _ = intent.mode.set(RegisterMode::AllInterfaces);

        assert_eq!(
            targets(&service(), &intent),
            [BindingTarget::Interface(0), BindingTarget::Interface(1)]
        );
    }

    #[test]
    fn test_inherited_interfaces_are_not_introduced() {
        let candidate = Candidate::of(|| Service)
            .implements_inherited::<dyn First>(|service| service)
            .implements::<dyn Second>(|service| service)
            .build();

        assert_eq!(targets(&candidate, &scoped_intent()), [BindingTarget::Interface(1)]);
    }
}
