//! Configuration mapping helpers.

use std::collections::HashMap;
use std::hash::Hash;

/// Merges an ordered sequence of mappings into a fresh one.
///
/// Keys from later mappings override earlier ones. Inputs are borrowed and
/// never mutated; an empty sequence yields an empty map.
pub fn merge_maps<'a, K, V, I>(maps: I) -> HashMap<K, V>
where
    I: IntoIterator<Item = &'a HashMap<K, V>>,
    K: Eq + Hash + Clone + 'a,
    V: Clone + 'a,
{
    let mut merged = HashMap::new();
    for map in maps {
        merged.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    merged
}
