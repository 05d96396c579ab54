use core::any::TypeId;
use std::collections::BTreeMap;

use crate::any::RcAny;

/// Instance cache of one container scope.
#[derive(Default)]
pub(crate) struct Cache {
    map: BTreeMap<TypeId, RcAny>,
}

impl Cache {
    #[must_use]
    pub(crate) fn get(&self, type_id: &TypeId) -> Option<RcAny> {
        self.map.get(type_id).cloned()
    }

    pub(crate) fn insert(&mut self, type_id: TypeId, value: RcAny) {
        self.map.insert(type_id, value);
    }
}
