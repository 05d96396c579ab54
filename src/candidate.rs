use std::sync::Arc;

use crate::{
    any::{RcAny, TypeInfo},
    declaration::Declaration,
    lifetime::Lifetime,
};

pub(crate) type BoxedFactory = Arc<dyn Fn() -> RcAny + Send + Sync>;

/// An interface a candidate can be registered under.
#[derive(Clone)]
pub(crate) struct InterfaceBinding {
    pub(crate) type_info: TypeInfo,
    /// Produces the instance already upcast to `Arc<dyn I>`.
    pub(crate) factory: BoxedFactory,
    pub(crate) inherited: bool,
}

/// A concrete service type eligible for registration.
///
/// Immutable once built; the builder and resolver only read it.
#[derive(Clone)]
pub struct Candidate {
    pub(crate) type_info: TypeInfo,
    pub(crate) unit: &'static str,
    pub(crate) factory: BoxedFactory,
    pub(crate) interfaces: Vec<InterfaceBinding>,
    pub(crate) declaration: Declaration,
}

impl Candidate {
    /// Starts building a candidate from the factory of its concrete type.
    #[must_use]
    pub fn of<T, F>(factory: F) -> CandidateBuilder<T>
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        CandidateBuilder {
            factory: Arc::new(factory),
            unit: "",
            interfaces: Vec::new(),
            declaration: Declaration::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.type_info.name
    }

    #[inline]
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        self.type_info.short_name()
    }

    #[inline]
    #[must_use]
    pub fn unit(&self) -> &'static str {
        self.unit
    }

    /// Tags the candidate with a code unit unless one was already set.
    #[must_use]
    pub fn in_unit(mut self, unit: &'static str) -> Self {
        if self.unit.is_empty() {
            self.unit = unit;
        }
        self
    }

    /// Interfaces this candidate introduces itself, in declaration order.
    pub(crate) fn introduced(&self) -> impl Iterator<Item = (usize, &InterfaceBinding)> {
        self.interfaces.iter().enumerate().filter(|(_, binding)| !binding.inherited)
    }
}

/// Typed builder for a [`Candidate`]; erased on [`CandidateBuilder::build`].
pub struct CandidateBuilder<T> {
    factory: Arc<dyn Fn() -> T + Send + Sync>,
    unit: &'static str,
    interfaces: Vec<InterfaceBinding>,
    declaration: Declaration,
}

impl<T> CandidateBuilder<T>
where
    T: Send + Sync + 'static,
{
    /// Declares an interface this type introduces. Declaration order is
    /// kept: the first `implements` call names the default interface.
    #[must_use]
    pub fn implements<I>(self, upcast: fn(Arc<T>) -> Arc<I>) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
    {
        self.push_interface(upcast, false)
    }

    /// Declares an interface the parent type already exposes. It stays out
    /// of interface resolution for this candidate.
    #[must_use]
    pub fn implements_inherited<I>(self, upcast: fn(Arc<T>) -> Arc<I>) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
    {
        self.push_interface(upcast, true)
    }

    fn push_interface<I>(mut self, upcast: fn(Arc<T>) -> Arc<I>, inherited: bool) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let factory = self.factory.clone();
        self.interfaces.push(InterfaceBinding {
            type_info: TypeInfo::of::<I>(),
            factory: Arc::new(move || Arc::new(upcast(Arc::new(factory()))) as RcAny),
            inherited,
        });
        self
    }

    /// Declares a lifetime marker. Markers append: a second distinct
    /// lifetime is rejected at build time, not here.
    #[must_use]
    pub fn lifetime(mut self, lifetime: Lifetime) -> Self {
        self.declaration.lifetimes.push(lifetime);
        self
    }

    #[must_use]
    pub fn transient(self) -> Self {
        self.lifetime(Lifetime::Transient)
    }

    #[must_use]
    pub fn scoped(self) -> Self {
        self.lifetime(Lifetime::Scoped)
    }

    #[must_use]
    pub fn singleton(self) -> Self {
        self.lifetime(Lifetime::Singleton)
    }

    /// Forces registration under the concrete type, bypassing interfaces.
    #[must_use]
    pub fn register_self(mut self) -> Self {
        self.declaration.force_self = true;
        self
    }

    /// Requests registration under a specific interface. Requests naming
    /// interfaces the candidate does not introduce are ignored at build.
    #[must_use]
    pub fn with_interface<I>(mut self) -> Self
    where
        I: ?Sized + 'static,
    {
        self.declaration.interfaces.push(TypeInfo::of::<I>());
        self
    }

    #[must_use]
    pub fn in_unit(mut self, unit: &'static str) -> Self {
        self.unit = unit;
        self
    }

    #[must_use]
    pub fn build(self) -> Candidate {
        let factory = self.factory;
        Candidate {
            type_info: TypeInfo::of::<T>(),
            unit: self.unit,
            factory: Arc::new(move || Arc::new(factory()) as RcAny),
            interfaces: self.interfaces,
            declaration: self.declaration,
        }
    }
}
