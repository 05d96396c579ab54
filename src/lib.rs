pub(crate) mod adapter;
pub(crate) mod any;
pub(crate) mod builder;
pub(crate) mod cache;
pub(crate) mod candidate;
pub(crate) mod container;
pub(crate) mod declaration;
pub(crate) mod errors;
pub(crate) mod intent;
pub(crate) mod lifetime;
pub(crate) mod registry;
pub(crate) mod resolver;

pub mod discovery;

pub use any::TypeInfo;
pub use builder::RegistrationBuilder;
pub use candidate::{Candidate, CandidateBuilder};
pub use container::Container;
pub use declaration::Declaration;
pub use discovery::{discover, DiscoveryScope};
pub use errors::{AmbiguousLifetimeError, ResolveErrorKind};
pub use intent::SetOnce;
pub use lifetime::{Lifetime, RegisterMode};
pub use registry::Registry;
