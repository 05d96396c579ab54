use tracing::debug;

use crate::{
    candidate::Candidate,
    lifetime::Lifetime,
    registry::{ProviderScope, Registry},
    resolver::{BindingTarget, PlannedBinding},
};

/// Maps a lifetime onto the container's native primitives.
///
/// Transient lives in the app scope so it stays resolvable from anywhere;
/// it is simply never cached.
pub(crate) fn lifetime_primitives(lifetime: Lifetime) -> (ProviderScope, bool) {
    match lifetime {
        Lifetime::Transient => (ProviderScope::App, false),
        Lifetime::Scoped => (ProviderScope::Request, true),
        Lifetime::Singleton => (ProviderScope::App, true),
    }
}

/// Issues one planned binding into the registry.
pub(crate) fn bind(registry: &mut Registry, candidate: &Candidate, binding: &PlannedBinding) {
    let (key, factory) = match binding.target {
        BindingTarget::SelfType => (candidate.type_info(), candidate.factory.clone()),
        BindingTarget::Interface(index) => {
            let interface = &candidate.interfaces[index];
            (interface.type_info, interface.factory.clone())
        }
    };
    debug!(
        candidate = candidate.name(),
        key = key.name,
        lifetime = %binding.lifetime,
        "Bound"
    );
    registry.insert_provider(key, candidate.type_info(), factory, binding.lifetime);
}
