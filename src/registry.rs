use core::any::TypeId;
use std::{collections::BTreeMap, sync::Arc};

use crate::{
    adapter,
    any::{RcAny, TypeInfo},
    candidate::BoxedFactory,
    lifetime::Lifetime,
};

/// The container's native scoping primitives. The adapter maps the three
/// lifetimes onto these plus the per-provider cache flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProviderScope {
    /// Process lifetime.
    App,
    /// One logical operation.
    Request,
}

impl ProviderScope {
    #[inline]
    #[must_use]
    pub(crate) fn name(self) -> &'static str {
        match self {
            ProviderScope::App => "app",
            ProviderScope::Request => "request",
        }
    }
}

#[derive(Clone)]
pub(crate) struct Provider {
    /// Concrete type behind the registration, for diagnostics.
    pub(crate) provides: TypeInfo,
    pub(crate) factory: BoxedFactory,
    pub(crate) scope: ProviderScope,
    /// Uncached providers instantiate on every resolution.
    pub(crate) cache_provides: bool,
}

/// Provider table keyed by exposed type: a concrete type or a trait object.
/// The last registration for a key wins.
#[derive(Default)]
pub struct Registry {
    pub(crate) providers: BTreeMap<TypeId, Provider>,
}

impl Registry {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a concrete type under itself.
    pub fn register<T, F>(&mut self, lifetime: Lifetime, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let factory: BoxedFactory = Arc::new(move || Arc::new(factory()) as RcAny);
        self.insert_provider(TypeInfo::of::<T>(), TypeInfo::of::<T>(), factory, lifetime);
    }

    /// Registers a concrete type under an interface, usually a trait object
    /// type such as `dyn Greeter`.
    pub fn register_interface<I, T, F>(&mut self, lifetime: Lifetime, factory: F, upcast: fn(Arc<T>) -> Arc<I>)
    where
        I: ?Sized + Send + Sync + 'static,
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let factory: BoxedFactory = Arc::new(move || Arc::new(upcast(Arc::new(factory()))) as RcAny);
        self.insert_provider(TypeInfo::of::<I>(), TypeInfo::of::<T>(), factory, lifetime);
    }

    pub(crate) fn insert_provider(&mut self, key: TypeInfo, provides: TypeInfo, factory: BoxedFactory, lifetime: Lifetime) {
        let (scope, cache_provides) = adapter::lifetime_primitives(lifetime);
        self.providers.insert(
            key.id,
            Provider {
                provides,
                factory,
                scope,
                cache_provides,
            },
        );
    }

    #[inline]
    pub(crate) fn get(&self, type_id: &TypeId) -> Option<&Provider> {
        self.providers.get(type_id)
    }
}
