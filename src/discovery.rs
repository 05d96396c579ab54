use tracing::debug;

use crate::candidate::Candidate;

pub use linkme::{self, distributed_slice};

/// Every candidate submitted through [`submit_candidate!`](crate::submit_candidate).
#[distributed_slice]
pub static CANDIDATES: [fn() -> Candidate];

/// Which code units a discovery call covers.
#[derive(Debug, Clone, Copy)]
pub enum DiscoveryScope<'a> {
    /// Every submitted candidate in the binary.
    All,
    /// Candidates tagged with the given unit.
    Unit(&'a str),
    /// Candidates tagged with any of the given units.
    Units(&'a [&'a str]),
}

impl DiscoveryScope<'_> {
    fn covers(&self, unit: &str) -> bool {
        match self {
            DiscoveryScope::All => true,
            DiscoveryScope::Unit(name) => unit == *name,
            DiscoveryScope::Units(names) => names.contains(&unit),
        }
    }
}

/// Materialises the candidates covered by `scope`, in submission order.
///
/// The order carries no meaning but is stable for the lifetime of the
/// process, so repeated calls over an unchanged scope return structurally
/// equal candidate sets.
#[must_use]
pub fn discover(scope: DiscoveryScope<'_>) -> Vec<Candidate> {
    let candidates: Vec<Candidate> = CANDIDATES
        .iter()
        .map(|getter| getter())
        .filter(|candidate| scope.covers(candidate.unit()))
        .collect();
    debug!(count = candidates.len(), "Discovered candidates");
    candidates
}

/// Submits a candidate getter to the global discovery slice, tagging the
/// candidate with the submitting module as its code unit unless the getter
/// already set one.
#[macro_export]
macro_rules! submit_candidate {
    ($getter:expr) => {
        const _: () = {
            use $crate::discovery::distributed_slice;

            #[distributed_slice($crate::discovery::CANDIDATES)]
            #[linkme(crate = $crate::discovery::linkme)]
            static __CANDIDATE: fn() -> $crate::Candidate = {
                fn getter() -> $crate::Candidate {
                    ($getter)().in_unit(::core::module_path!())
                }
                getter
            };
        };
    };
}
