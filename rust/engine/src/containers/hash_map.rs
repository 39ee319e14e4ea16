use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};
use std::mem;

use rustc_hash::FxHasher;
use tracing::debug;

pub const INITIAL_CAPACITY: usize = 16;
pub const LOAD_FACTOR: f64 = 0.75;

type Bucket<K, V> = Option<Box<Entry<K, V>>>;

struct Entry<K, V> {
    key: K,
    value: V,
    next: Bucket<K, V>,
}

/// Associative map with separate chaining.
///
/// Buckets start at [`INITIAL_CAPACITY`] and double whenever a *new* key
/// arrives while `len >= capacity * LOAD_FACTOR`. Updates to an existing key
/// never grow the table, and neither do `get` or `remove`. Growth relinks the
/// existing entries into the new bucket array without reallocating them.
///
/// Bucket index is `(hash & 0x7FFF_FFFF) % capacity`. The default hasher is
/// `FxHasher`, which is deterministic across runs.
///
/// # Examples
///
/// ```
/// use blackjack_engine::containers::ChainedMap;
///
/// let mut wins: ChainedMap<String, u32> = ChainedMap::new();
/// wins.put("Ana".to_string(), 1);
/// wins.put("Ana".to_string(), 2);
/// assert_eq!(wins.len(), 1);
/// assert_eq!(wins.get("Ana"), Some(&2));
/// assert_eq!(wins.get("Dealer"), None);
/// ```
pub struct ChainedMap<K, V, S = BuildHasherDefault<FxHasher>> {
    buckets: Vec<Bucket<K, V>>,
    len: usize,
    threshold: usize,
    hasher: S,
}

fn threshold_for(capacity: usize) -> usize {
    (capacity as f64 * LOAD_FACTOR) as usize
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Bucket<K, V>> {
    (0..capacity).map(|_| None).collect()
}

impl<K, V> ChainedMap<K, V> {
    pub fn new() -> Self {
        Self::with_hasher(BuildHasherDefault::default())
    }
}

impl<K, V, S> ChainedMap<K, V, S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            buckets: empty_buckets(INITIAL_CAPACITY),
            len: 0,
            threshold: threshold_for(INITIAL_CAPACITY),
            hasher,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Iterates entries in bucket order, each chain front to back.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Removes every entry but keeps the current capacity.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            let mut chain = bucket.take();
            while let Some(mut entry) = chain {
                chain = entry.next.take();
            }
        }
        self.len = 0;
    }
}

impl<K, V, S> ChainedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        let hash = self.hasher.hash_one(key);
        ((hash & 0x7FFF_FFFF) as usize) % self.buckets.len()
    }

    /// Inserts or overwrites. Returns the previous value when the key was present.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.get_mut(&key) {
            return Some(mem::replace(slot, value));
        }
        if self.len >= self.threshold {
            self.grow();
        }
        let idx = self.bucket_index(&key);
        let next = self.buckets[idx].take();
        self.buckets[idx] = Some(Box::new(Entry { key, value, next }));
        self.len += 1;
        None
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut cursor = self.buckets[self.bucket_index(key)].as_deref();
        while let Some(entry) = cursor {
            if entry.key.borrow() == key {
                return Some(&entry.value);
            }
            cursor = entry.next.as_deref();
        }
        None
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        let mut cursor = self.buckets[idx].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.key.borrow() == key {
                return Some(&mut entry.value);
            }
            cursor = entry.next.as_deref_mut();
        }
        None
    }

    /// Presence of the key itself; independent of what value it maps to.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Unlinks the first matching entry from its chain.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        let mut cursor = &mut self.buckets[idx];
        while cursor
            .as_ref()
            .is_some_and(|entry| entry.key.borrow() != key)
        {
            cursor = &mut cursor.as_mut()?.next;
        }
        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        self.len -= 1;
        Some(removed.value)
    }

    fn grow(&mut self) {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity * 2;
        let old = mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        self.threshold = threshold_for(new_capacity);
        for mut chain in old {
            while let Some(mut entry) = chain {
                chain = entry.next.take();
                let idx = self.bucket_index(&entry.key);
                entry.next = self.buckets[idx].take();
                self.buckets[idx] = Some(entry);
            }
        }
        debug!(
            old_capacity,
            new_capacity,
            len = self.len,
            "hash table grew"
        );
    }
}

impl<K, V, S: Default> Default for ChainedMap<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

pub struct Iter<'a, K, V> {
    buckets: std::slice::Iter<'a, Bucket<K, V>>,
    chain: Option<&'a Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain {
                self.chain = entry.next.as_deref();
                return Some((&entry.key, &entry.value));
            }
            self.chain = self.buckets.next()?.as_deref();
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ChainedMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// One line per occupied bucket: `3: [k=>v] -> [k2=>v2]`.
impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for ChainedMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ChainedMap[len={}]", self.len)?;
        for (idx, bucket) in self.buckets.iter().enumerate() {
            let Some(first) = bucket.as_deref() else {
                continue;
            };
            write!(f, "{}: ", idx)?;
            let mut cursor = Some(first);
            while let Some(entry) = cursor {
                write!(f, "[{}=>{}]", entry.key, entry.value)?;
                cursor = entry.next.as_deref();
                if cursor.is_some() {
                    write!(f, " -> ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
