use core::any::TypeId;

use crate::{any::TypeInfo, lifetime::Lifetime};

/// A candidate declared more than one distinct lifetime.
///
/// This is the only hard failure the build step raises; every other anomaly
/// degrades to a documented fallback.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("ambiguous lifetime for candidate `{candidate}`: `{first}` conflicts with `{second}`")]
pub struct AmbiguousLifetimeError {
    pub candidate: &'static str,
    pub first: Lifetime,
    pub second: Lifetime,
}

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("provider not found in registry")]
    NoProvider,
    #[error("request-scoped provider `{}` is not accessible from the app scope", provides.name)]
    NotAccessible { provides: TypeInfo },
    #[error("incorrect provider value type. Actual: {actual:?}, expected: {expected:?}")]
    IncorrectType { expected: TypeId, actual: TypeId },
}
