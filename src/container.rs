use core::any::{type_name, TypeId};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, info_span};

use crate::{
    any::RcAny,
    cache::Cache,
    errors::ResolveErrorKind,
    registry::{ProviderScope, Registry},
};

/// A built container scope.
///
/// [`Container::new`] gives the app (process) scope; [`Container::enter_request`]
/// opens a request scope on top of it. Clones share the same scope and cache.
#[derive(Clone)]
pub struct Container {
    inner: Arc<ContainerInner>,
}

struct ContainerInner {
    registry: Arc<Registry>,
    cache: Mutex<Cache>,
    scope: ProviderScope,
    parent: Option<Container>,
}

impl Container {
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(ContainerInner {
                registry: Arc::new(registry),
                cache: Mutex::new(Cache::default()),
                scope: ProviderScope::App,
                parent: None,
            }),
        }
    }

    /// Opens a request scope. App-scoped providers keep resolving through
    /// the parent; request-scoped providers cache here.
    #[must_use]
    pub fn enter_request(&self) -> Self {
        Self {
            inner: Arc::new(ContainerInner {
                registry: self.inner.registry.clone(),
                cache: Mutex::new(Cache::default()),
                scope: ProviderScope::Request,
                parent: Some(self.clone()),
            }),
        }
    }

    /// Resolves a registration made under a concrete type.
    ///
    /// # Errors
    /// - [`ResolveErrorKind::NoProvider`] if the type was never registered
    /// - [`ResolveErrorKind::NotAccessible`] if the provider is request-scoped
    ///   and this is the app scope
    pub fn get<T>(&self) -> Result<Arc<T>, ResolveErrorKind>
    where
        T: Send + Sync + 'static,
    {
        let value = self.resolve_keyed(TypeId::of::<T>(), type_name::<T>())?;
        value.downcast::<T>().map_err(|value| incorrect_type::<T>(&value))
    }

    /// Resolves a registration made under an interface; `I` is usually a
    /// trait object type such as `dyn Greeter`.
    ///
    /// # Errors
    /// Same as [`Container::get`].
    pub fn get_interface<I>(&self) -> Result<Arc<I>, ResolveErrorKind>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let value = self.resolve_keyed(TypeId::of::<I>(), type_name::<I>())?;
        match value.downcast::<Arc<I>>() {
            Ok(value) => Ok((*value).clone()),
            Err(value) => Err(incorrect_type::<Arc<I>>(&value)),
        }
    }

    fn resolve_keyed(&self, type_id: TypeId, name: &str) -> Result<RcAny, ResolveErrorKind> {
        let span = info_span!("resolve", dependency = name, scope = self.inner.scope.name());
        let _guard = span.enter();

        let Some(provider) = self.inner.registry.get(&type_id) else {
            let err = ResolveErrorKind::NoProvider;
            error!("{err}");
            return Err(err);
        };

        if provider.scope == ProviderScope::App {
            if let Some(parent) = &self.inner.parent {
                return parent.resolve_keyed(type_id, name);
            }
        } else if self.inner.parent.is_none() {
            let err = ResolveErrorKind::NotAccessible {
                provides: provider.provides,
            };
            error!("{err}");
            return Err(err);
        }

        if provider.cache_provides {
            // The lock is held across the factory call so concurrent
            // resolutions of one key cannot observe distinct instances.
            // Factories take no arguments and never re-enter the container.
            let mut cache = self.inner.cache.lock();
            if let Some(value) = cache.get(&type_id) {
                debug!("Found in cache");
                return Ok(value);
            }
            debug!("Not found in cache");

            let value = (provider.factory)();
            cache.insert(type_id, value.clone());
            debug!("Cached");
            return Ok(value);
        }

        Ok((provider.factory)())
    }
}

fn incorrect_type<Expected>(value: &RcAny) -> ResolveErrorKind
where
    Expected: ?Sized + 'static,
{
    ResolveErrorKind::IncorrectType {
        expected: TypeId::of::<Expected>(),
        actual: (**value).type_id(),
    }
}
