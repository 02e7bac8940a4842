//! Per-item mutation serialization.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Registry of item ids with a mutation currently in flight.
///
/// At most one mutation per id at a time; a second attempt while the first
/// guard lives is refused, and the caller drops it rather than queuing.
#[derive(Default)]
pub(crate) struct InFlight {
    active: DashMap<String, ()>,
}

impl InFlight {
    /// Claims `id`, returning a guard that releases it on drop, or `None`
    /// if a mutation for `id` is already running.
    pub fn begin(&self, id: &str) -> Option<MutationGuard<'_>> {
        match self.active.entry(id.to_string()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(vacant) => {
                vacant.insert(());
                Some(MutationGuard {
                    registry: self,
                    id: id.to_string(),
                })
            }
        }
    }
}

pub(crate) struct MutationGuard<'a> {
    registry: &'a InFlight,
    id: String,
}

impl Drop for MutationGuard<'_> {
    fn drop(&mut self) {
        self.registry.active.remove(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_refused_while_guard_lives() {
        let registry = InFlight::default();
        let guard = registry.begin("abc123");
        assert!(guard.is_some());
        assert!(registry.begin("abc123").is_none());
    }

    #[test]
    fn claim_released_on_drop() {
        let registry = InFlight::default();
        drop(registry.begin("abc123"));
        assert!(registry.begin("abc123").is_some());
    }

    #[test]
    fn distinct_ids_are_independent() {
        let registry = InFlight::default();
        let _first = registry.begin("abc123");
        assert!(registry.begin("def456").is_some());
    }
}
