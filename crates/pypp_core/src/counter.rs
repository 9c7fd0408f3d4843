use std::borrow::Borrow;
use std::collections::hash_map::{self, HashMap, RandomState};
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// Per-key tally. Signed because callers may decrement through
/// [`Counter::get_or_insert_default`]; counts built by the counter itself only grow.
pub type Count = i64;

/// A multiset of hashable keys, in the spirit of Python's `collections.Counter`.
///
/// A key stays enumerable once inserted, even if its count later drops to 0.
/// The hash strategy is pluggable through `S`, the same way it is for
/// [`HashMap`].
#[derive(Clone)]
pub struct Counter<K, S = RandomState> {
    counts: HashMap<K, Count, S>,
}

impl<K> Counter<K, RandomState>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<K, S> Counter<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            counts: HashMap::with_hasher(hasher),
        }
    }

    /// Add one occurrence of `key`.
    pub fn increment(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Add one occurrence for every item of `keys`.
    pub fn update<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.increment(key);
        }
    }

    /// Mutable slot for `key`, inserting a zero count when the key is new.
    ///
    /// Unlike [`Counter::count`], this makes `key` part of the counter even if
    /// the slot is only read.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut Count {
        self.counts.entry(key).or_insert(0)
    }

    /// Current count for `key`; 0 for keys never inserted. Does not insert.
    pub fn count<Q>(&self, key: &Q) -> Count
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, saturating at the bounds of [`Count`].
    pub fn total(&self) -> Count {
        self.counts
            .values()
            .fold(0, |total, count| total.saturating_add(*count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, Count)> + '_ {
        self.counts.iter().map(|(key, count)| (key, *count))
    }

    /// Replace the contents with `map`.
    pub fn assign(&mut self, map: HashMap<K, Count, S>) {
        self.counts = map;
    }

    pub fn as_map(&self) -> &HashMap<K, Count, S> {
        &self.counts
    }

    pub fn into_map(self) -> HashMap<K, Count, S> {
        self.counts
    }

    /// Borrowed pairs ordered by count, highest first. The sort is stable, so
    /// equal counts keep map iteration order.
    fn ranked(&self) -> Vec<(&K, Count)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl<K, S> Counter<K, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Snapshot of all key/count pairs in map iteration order.
    pub fn items(&self) -> Vec<(K, Count)> {
        self.iter().map(|(key, count)| (key.clone(), count)).collect()
    }

    /// Keys in the same order as [`Counter::items`].
    pub fn keys(&self) -> Vec<K> {
        self.items().into_iter().map(|(key, _)| key).collect()
    }

    /// Counts in the same order as [`Counter::items`].
    pub fn values(&self) -> Vec<Count> {
        self.items().into_iter().map(|(_, count)| count).collect()
    }

    /// The `n` most common keys with their counts, highest first.
    ///
    /// `n == 0` (or any `n` at least [`Counter::len`]) returns every pair.
    pub fn most_common(&self, n: usize) -> Vec<(K, Count)> {
        let ranked = self.ranked();
        let keep = if n == 0 { ranked.len() } else { n.min(ranked.len()) };
        ranked
            .into_iter()
            .take(keep)
            .map(|(key, count)| (key.clone(), count))
            .collect()
    }

    /// Every key repeated `count` times, in [`Counter::most_common`] order.
    /// Keys with a count of zero or less are skipped.
    pub fn elements(&self) -> Vec<K> {
        let mut elements = Vec::with_capacity(usize::try_from(self.total()).unwrap_or(0));
        for (key, count) in self.ranked() {
            for _ in 0..count.max(0) {
                elements.push(key.clone());
            }
        }
        elements
    }
}

impl<K, S> Default for Counter<K, S>
where
    S: Default,
{
    fn default() -> Self {
        Self {
            counts: HashMap::default(),
        }
    }
}

impl<K, S> fmt::Debug for Counter<K, S>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.counts.iter()).finish()
    }
}

/// One `key: count` line per key, most common first.
impl<K, S> fmt::Display for Counter<K, S>
where
    K: Eq + Hash + fmt::Display,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, count) in self.ranked() {
            writeln!(f, "{key}: {count}")?;
        }
        Ok(())
    }
}

impl<K, S> PartialEq for Counter<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<K, S> Eq for Counter<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
}

impl<K, S> FromIterator<K> for Counter<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::default();
        counter.update(iter);
        counter
    }
}

impl<K, S> Extend<K> for Counter<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.update(iter);
    }
}

impl<K, S> From<HashMap<K, Count, S>> for Counter<K, S> {
    fn from(counts: HashMap<K, Count, S>) -> Self {
        Self { counts }
    }
}

impl<K, S> IntoIterator for Counter<K, S> {
    type Item = (K, Count);
    type IntoIter = hash_map::IntoIter<K, Count>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
