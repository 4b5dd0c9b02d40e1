//! Strategy compilation and the process-wide procedure cache.
//!
//! A [`Strategy<T>`] is the compiled clone procedure for one concrete
//! planned type: its member enumeration partitioned once and replayed for
//! every later clone. Procedures are published into a process-wide map
//! keyed by [`std::any::TypeId`]; entries are created lazily on first
//! encounter and never evicted.
//!
//! The cache policy is get-or-add: concurrent first encounters of the same
//! type may each compile, which is wasteful but harmless — only the first
//! published procedure is retained, and every caller observes that single
//! entry afterwards. Compilation runs outside any lock; only the publish
//! step is atomic.

use std::any::{Any, TypeId};
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

use crate::{MemberPlan, Structure, Visited};

/// Compiled clone procedure for one concrete type.
///
/// Immutable once published: the member plan is computed at compile time
/// and every later clone of the type replays it.
pub struct Strategy<T> {
    plan: MemberPlan<T>,
}

impl<T: Structure> Strategy<T> {
    /// Fold the type's member enumeration into a reusable procedure.
    fn compile() -> Self {
        let plan = MemberPlan::new(T::members());
        tracing::debug!(
            ty = %std::any::type_name::<T>(),
            deep = plan.deep().len(),
            shallow = plan.shallow().len(),
            "compiled clone strategy"
        );
        Strategy { plan }
    }

    /// Clone `original` by replaying the plan over a default instance.
    ///
    /// Every planned member is overwritten, so nothing of the default
    /// payload survives in the result.
    pub fn apply(&self, original: &T, visited: &mut Visited) -> T {
        let mut clone = T::default();
        self.plan.apply(original, &mut clone, visited);
        clone
    }

    /// The cached member partition.
    pub fn plan(&self) -> &MemberPlan<T> {
        &self.plan
    }
}

/// Published procedures, erased for heterogeneous storage.
static STRATEGIES: OnceLock<DashMap<TypeId, Arc<dyn Any + Send + Sync>>> = OnceLock::new();

/// How many times each type's strategy has been compiled.
static COMPILATIONS: OnceLock<DashMap<TypeId, usize>> = OnceLock::new();

fn strategies() -> &'static DashMap<TypeId, Arc<dyn Any + Send + Sync>> {
    STRATEGIES.get_or_init(DashMap::new)
}

fn compilations() -> &'static DashMap<TypeId, usize> {
    COMPILATIONS.get_or_init(DashMap::new)
}

fn record_compilation(key: TypeId) {
    let counters = compilations();
    let mut entry = counters.entry(key).or_insert(0);
    let next = entry.saturating_add(1);
    *entry = next;
}

/// Get the published procedure for `T`, compiling it on first encounter.
pub fn get_or_compile<T: Structure>() -> Arc<Strategy<T>> {
    let cache = strategies();
    let key = TypeId::of::<T>();

    if let Some(entry) = cache.get(&key) {
        if let Ok(published) = Arc::clone(entry.value()).downcast::<Strategy<T>>() {
            tracing::trace!(ty = %std::any::type_name::<T>(), "strategy cache hit");
            return published;
        }
    }

    let compiled = Arc::new(Strategy::<T>::compile());
    record_compilation(key);

    let erased: Arc<dyn Any + Send + Sync> = compiled.clone();
    let published = cache.entry(key).or_insert(erased).value().clone();
    // The key is TypeId::of::<T>, so the stored value can only be a
    // Strategy<T>; the fallback keeps the losing racer functional anyway.
    published.downcast::<Strategy<T>>().unwrap_or(compiled)
}

/// Times `T`'s strategy has been compiled (0 if never encountered).
///
/// Stays put once a procedure is published; concurrent first encounters
/// may transiently compile more than once, but never publish more than
/// one procedure.
pub fn compilations_of<T: Structure>() -> usize {
    compilations()
        .get(&TypeId::of::<T>())
        .map_or(0, |entry| *entry.value())
}

/// Whether a procedure for `T` has been published.
pub fn is_compiled<T: Structure>() -> bool {
    strategies().contains_key(&TypeId::of::<T>())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
