use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::hash::Hash;

pub trait DashMapExtension<K: Eq + Hash, V: Clone> {
  /// Returns the value already stored under `key`, or stores `value` and returns it.
  /// The flag is `true` when an existing value was loaded.
  fn load_or_store(&self, key: K, value: V) -> (V, bool);

  /// Like [`DashMapExtension::load_or_store`], but computes the value only on a miss.
  ///
  /// The computation runs without holding a shard lock, so two racing callers may both
  /// compute; only the first stored value becomes visible and both receive it.
  /// Errors are returned as-is and nothing is stored.
  fn load_or_try_compute<E, F>(&self, key: K, compute: F) -> Result<V, E>
  where
    F: FnOnce() -> Result<V, E>;
}

impl<K: Eq + Hash, V: Clone> DashMapExtension<K, V> for DashMap<K, V> {
  fn load_or_store(&self, key: K, value: V) -> (V, bool) {
    match self.entry(key) {
      Entry::Occupied(entry) => (entry.get().clone(), true),
      Entry::Vacant(entry) => (entry.insert(value).clone(), false),
    }
  }

  fn load_or_try_compute<E, F>(&self, key: K, compute: F) -> Result<V, E>
  where
    F: FnOnce() -> Result<V, E>, {
    if let Some(existing) = self.get(&key) {
      return Ok(existing.value().clone());
    }
    let computed = compute()?;
    let (value, _) = self.load_or_store(key, computed);
    Ok(value)
  }
}
