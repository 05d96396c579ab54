use crate::{any::TypeInfo, lifetime::Lifetime};

/// Marker data attached to a candidate at construction time.
///
/// This is the declarative front-end collapsed onto plain data: what the
/// source system read from class attributes is recorded here per candidate.
/// Conflicts between declared lifetimes are allowed at this stage and
/// rejected by the resolver at build time.
#[derive(Debug, Default, Clone)]
pub struct Declaration {
    pub(crate) lifetimes: Vec<Lifetime>,
    pub(crate) force_self: bool,
    pub(crate) interfaces: Vec<TypeInfo>,
}
