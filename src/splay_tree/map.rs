use crate::entry::Entry;
use crate::splay_tree::node::Node;
use crate::splay_tree::tree;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that
/// recently accessed items are quick to access again. Every lookup, insertion and removal
/// "splays" the tree: the node holding the key, or the last node visited while searching for
/// it, is rotated up to the root. Because lookups restructure the tree, `get` and `contains_key`
/// take `&mut self`. Use `peek` for a lookup through a shared reference.
///
/// # Examples
///
/// ```
/// use splay_bst::splay_tree::SplayMap;
///
/// let mut map = SplayMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map.get(&0), Some(&1));
/// assert_eq!(map.root(), Some((&0, &1)));
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct SplayMap<T, U> {
    tree: tree::Tree<T, U>,
    len: usize,
}

impl<T, U> SplayMap<T, U> {
    /// Constructs a new, empty `SplayMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let map: SplayMap<u32, u32> = SplayMap::new();
    /// ```
    pub fn new() -> Self {
        SplayMap { tree: None, len: 0 }
    }

    /// Inserts a key-value pair into the map. The inserted key ends up at the root of the tree.
    /// If the key already exists in the map, it will return and replace the old key-value pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<(T, U)>
    where
        T: Ord,
    {
        let SplayMap { tree, len } = self;
        let new_node = Node::new(key, value);
        *len += 1;
        tree::insert(tree, new_node).map(|entry| {
            *len -= 1;
            entry.into_pair()
        })
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None`. The tree is splayed either
    /// way.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let SplayMap { tree, len } = self;
        tree::remove(tree, key).map(|entry| {
            *len -= 1;
            entry.into_pair()
        })
    }

    /// Checks if a key exists in the map. The tree is splayed on `key` whether or not it is
    /// present.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map. The tree is splayed on `key` whether
    /// or not it is present, so a miss brings the closest key on the search path to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.root(), Some((&1, &1)));
    /// assert_eq!(map.get(&3), None);
    /// assert_eq!(map.root(), Some((&2, &2)));
    /// ```
    pub fn get<V>(&mut self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get_mut(&mut self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns an immutable reference to the value associated with a particular key without
    /// splaying the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// assert_eq!(map.peek(&1), Some(&1));
    /// assert_eq!(map.root(), Some((&2, &2)));
    /// ```
    pub fn peek<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns the key-value pair currently at the root of the tree. This is the most recently
    /// splayed entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// assert_eq!(map.root(), None);
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// assert_eq!(map.root(), Some((&2, &2)));
    /// ```
    pub fn root(&self) -> Option<(&T, &U)> {
        self.tree.as_ref().map(|node| (&node.entry.key, &node.entry.value))
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let map: SplayMap<u32, u32> = SplayMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes reachable from the root. Unlike `len`, this walks the entire
    /// tree on every call.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// assert_eq!(map.size(), 2);
    /// ```
    pub fn size(&self) -> usize {
        tree::size(&self.tree)
    }

    /// Returns the number of edges on the longest path from the root to a leaf. An empty map
    /// has a height of `-1` and a map with a single entry has a height of `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// assert_eq!(map.height(), -1);
    /// map.insert(1, 1);
    /// assert_eq!(map.height(), 0);
    /// map.insert(2, 2);
    /// assert_eq!(map.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        tree::height(&self.tree)
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        tree::clear(&mut self.tree);
        self.len = 0;
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist. Note that `floor` does not splay the tree in order to use a
    /// non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::floor(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist. Note that `ceil` does not splay the tree in order to use a
    /// non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::ceil(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty. Note that `min`
    /// does not splay the tree in order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty. Note that `max`
    /// does not splay the tree in order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree).map(|entry| &entry.key)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SplayMapIter<'_, T, U> {
        SplayMapIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs using
    /// in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bst::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// for (key, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> SplayMapIterMut<'_, T, U> {
        SplayMapIterMut {
            current: self.tree.as_deref_mut(),
            stack: Vec::new(),
        }
    }
}

impl<T, U> Drop for SplayMap<T, U> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<T, U> IntoIterator for SplayMap<T, U> {
    type IntoIter = SplayMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(mut self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree.take(),
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a SplayMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = SplayMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U> IntoIterator for &'a mut SplayMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = SplayMapIterMut<'a, T, U>;
    type Item = (&'a T, &'a mut U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `SplayMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct SplayMapIntoIter<T, U> {
    current: tree::Tree<T, U>,
    stack: Vec<Node<T, U>>,
}

impl<T, U> Iterator for SplayMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { entry, right, .. } = node;
            self.current = right;
            entry.into_pair()
        })
    }
}

impl<T, U> Drop for SplayMapIntoIter<T, U> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

/// An iterator for `SplayMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct SplayMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: &'a tree::Tree<T, U>,
    stack: Vec<&'a Node<T, U>>,
}

impl<'a, T, U> Iterator for SplayMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { key, value },
                right,
                ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

type BorrowedIterEntryMut<'a, T, U> = (&'a mut Entry<T, U>, BorrowedTreeMut<'a, T, U>);
type BorrowedTreeMut<'a, T, U> = Option<&'a mut Node<T, U>>;

/// A mutable iterator for `SplayMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields mutable references.
pub struct SplayMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: BorrowedTreeMut<'a, T, U>,
    stack: Vec<BorrowedIterEntryMut<'a, T, U>>,
}

impl<'a, T, U> Iterator for SplayMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a mut U);

    fn next(&mut self) -> Option<Self::Item> {
        let SplayMapIterMut { current, stack } = self;
        while let Some(node) = current.take() {
            let Node { entry, left, right } = node;
            *current = left.as_deref_mut();
            stack.push((entry, right.as_deref_mut()));
        }
        stack.pop().map(|(entry, right)| {
            let Entry { key, value } = entry;
            *current = right;
            (&*key, value)
        })
    }
}

impl<T, U> Default for SplayMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> Clone for SplayMap<T, U>
where
    T: Clone,
    U: Clone,
{
    fn clone(&self) -> Self {
        SplayMap {
            tree: tree::clone(&self.tree),
            len: self.len,
        }
    }
}

impl<T, U> fmt::Debug for SplayMap<T, U>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, U> PartialEq for SplayMap<T, U>
where
    T: PartialEq,
    U: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, U> Eq for SplayMap<T, U>
where
    T: Eq,
    U: Eq,
{
}

impl<T, U> FromIterator<(T, U)> for SplayMap<T, U>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut map = SplayMap::new();
        map.extend(iter);
        map
    }
}

impl<T, U> Extend<(T, U)> for SplayMap<T, U>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, T, U, V> Index<&'a V> for SplayMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &'a V) -> &Self::Output {
        self.peek(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, V> IndexMut<&'a V> for SplayMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    fn index_mut(&mut self, key: &'a V) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

impl<T, U> Serialize for SplayMap<T, U>
where
    T: Serialize,
    U: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct SplayMapVisitor<T, U> {
    marker: PhantomData<fn() -> SplayMap<T, U>>,
}

impl<'de, T, U> Visitor<'de> for SplayMapVisitor<T, U>
where
    T: Deserialize<'de> + Ord,
    U: Deserialize<'de>,
{
    type Value = SplayMap<T, U>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut map = SplayMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, T, U> Deserialize<'de> for SplayMap<T, U>
where
    T: Deserialize<'de> + Ord,
    U: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SplayMapVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SplayMap;
    use crate::splay_tree::tree::Tree;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use serde_test::{assert_tokens, Token};
    use std::cmp::Ordering;

    // last node visited by an ordinary binary search for `key`
    fn search_path_end(tree: &Tree<u32, u32>, key: u32) -> Option<u32> {
        let mut curr = tree;
        let mut last = None;
        while let Some(node) = curr {
            last = Some(node.entry.key);
            match key.cmp(&node.entry.key) {
                Ordering::Less => curr = &node.left,
                Ordering::Greater => curr = &node.right,
                Ordering::Equal => break,
            }
        }
        last
    }

    fn assert_in_order(map: &SplayMap<u32, u32>) {
        let keys: Vec<&u32> = map.iter().map(|(key, _)| key).collect();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_len_empty() {
        let map: SplayMap<u32, u32> = SplayMap::new();
        assert_eq!(map.len(), 0);
        assert_eq!(map.size(), 0);
        assert_eq!(map.height(), -1);
    }

    #[test]
    fn test_is_empty() {
        let map: SplayMap<u32, u32> = SplayMap::new();
        assert!(map.is_empty());
    }

    #[test]
    fn test_empty_operations() {
        let mut map: SplayMap<u32, u32> = SplayMap::new();
        assert_eq!(map.get(&1), None);
        assert!(!map.contains_key(&1));
        assert_eq!(map.remove(&1), None);
        assert_eq!(map.root(), None);
        assert!(map.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let map: SplayMap<u32, u32> = SplayMap::new();
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut map = SplayMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
        assert_eq!(map.height(), 0);
    }

    #[test]
    fn test_insert_replace() {
        let mut map = SplayMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert_eq!(map.insert(2, 2), None);
        assert_eq!(map.insert(1, 3), Some((1, 1)));
        assert_eq!(map.get(&1), Some(&3));
        assert_eq!(map.len(), 2);
        assert_eq!(map.size(), 2);
    }

    #[test]
    fn test_insert_moves_key_to_root() {
        let mut map = SplayMap::new();
        for key in &[5, 3, 8, 1, 4, 7] {
            map.insert(*key, *key * 10);
            assert_eq!(map.root(), Some((key, &(*key * 10))));
            assert_in_order(&map);
        }
    }

    #[test]
    fn test_remove() {
        let mut map = SplayMap::new();
        map.insert(1, 1);
        assert_eq!(map.remove(&1), Some((1, 1)));
        assert!(!map.contains_key(&1));
        assert_eq!(map.height(), -1);
    }

    #[test]
    fn test_remove_missing() {
        let mut map = SplayMap::new();
        map.insert(1, 1);
        map.insert(5, 5);
        assert_eq!(map.remove(&3), None);
        assert_eq!(map.len(), 2);
        assert_eq!(map.size(), 2);
    }

    #[test]
    fn test_scenario() {
        let mut map = SplayMap::new();
        for (value, key) in [5, 3, 8, 1, 4].iter().enumerate() {
            map.insert(*key, value);
        }
        assert_eq!(map.size(), 5);

        assert_eq!(map.get(&4), Some(&4));
        assert_eq!(map.root().map(|(key, _)| *key), Some(4));

        map.remove(&3);
        assert!(!map.contains_key(&3));
        assert_eq!(map.size(), 4);

        map.remove(&99);
        assert_eq!(map.size(), 4);
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_get_miss_splays() {
        let mut map = SplayMap::new();
        for key in &[10, 20, 30, 40] {
            map.insert(*key, ());
        }
        assert_eq!(map.get(&0), None);
        assert_eq!(map.root().map(|(key, _)| *key), Some(10));
        assert_eq!(map.get(&25), None);
        let root = map.root().map(|(key, _)| *key);
        assert!(root == Some(20) || root == Some(30));
        assert_eq!(map.get(&99), None);
        assert_eq!(map.root().map(|(key, _)| *key), Some(40));
    }

    #[test]
    fn test_peek_does_not_splay() {
        let mut map = SplayMap::new();
        map.insert(1, 1);
        map.insert(2, 2);
        map.insert(3, 3);
        assert_eq!(map.peek(&1), Some(&1));
        assert_eq!(map.peek(&4), None);
        assert_eq!(map.root(), Some((&3, &3)));
        assert_eq!(map[&2], 2);
    }

    #[test]
    fn test_sequential_access() {
        let mut map = SplayMap::new();
        for key in 0..1000 {
            map.insert(key, key);
        }
        assert_eq!(map.height(), 999);

        assert_eq!(map.get(&0), Some(&0));
        assert_eq!(map.root(), Some((&0, &0)));
        assert!(map.height() < 999);

        for key in 0..1000 {
            assert_eq!(map.get(&key), Some(&key));
        }
        assert_eq!(map.size(), 1000);
        assert_in_order(&map);
    }

    #[test]
    fn test_min_max() {
        let mut map = SplayMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.min(), Some(&1));
        assert_eq!(map.max(), Some(&5));
    }

    #[test]
    fn test_get_mut() {
        let mut map = SplayMap::new();
        map.insert(1, 1);
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
        map[&1] = 4;
        assert_eq!(map.get(&1), Some(&4));
    }

    #[test]
    fn test_floor_ceil() {
        let mut map = SplayMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.floor(&0), None);
        assert_eq!(map.floor(&2), Some(&1));
        assert_eq!(map.floor(&4), Some(&3));
        assert_eq!(map.floor(&6), Some(&5));

        assert_eq!(map.ceil(&0), Some(&1));
        assert_eq!(map.ceil(&2), Some(&3));
        assert_eq!(map.ceil(&4), Some(&5));
        assert_eq!(map.ceil(&6), None);
    }

    #[test]
    fn test_borrowed_keys() {
        let mut map = SplayMap::new();
        map.insert(String::from("b"), 2);
        map.insert(String::from("a"), 1);
        assert_eq!(map.get("a"), Some(&1));
        assert!(map.contains_key("b"));
        assert_eq!(map.remove("a"), Some((String::from("a"), 1)));
        assert_eq!(map.peek("a"), None);
    }

    #[test]
    fn test_clear() {
        let mut map = SplayMap::new();
        map.insert(1, 1);
        map.insert(2, 2);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.size(), 0);
        assert_eq!(map.get(&1), None);
    }

    #[test]
    fn test_into_iter() {
        let mut map = SplayMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.into_iter().collect::<Vec<(u32, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_into_iter_partial() {
        let map: SplayMap<u32, String> = (0..100).map(|key| (key, key.to_string())).collect();
        let mut iter = map.into_iter();
        assert_eq!(iter.next(), Some((0, String::from("0"))));
        assert_eq!(iter.next(), Some((1, String::from("1"))));
    }

    #[test]
    fn test_iter() {
        let mut map = SplayMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
    }

    #[test]
    fn test_iter_mut() {
        let mut map = SplayMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        for (_, value) in &mut map {
            *value += 1;
        }

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &3), (&3, &5), (&5, &7)],
        );
    }

    #[test]
    fn test_clone_eq_debug() {
        let map: SplayMap<u32, u32> = vec![(2, 20), (1, 10)].into_iter().collect();
        let mut other = map.clone();
        assert_eq!(map, other);
        assert_eq!(format!("{:?}", map), "{1: 10, 2: 20}");

        other.insert(3, 30);
        assert_ne!(map, other);
    }

    #[test]
    fn test_clone_keeps_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut map = SplayMap::new();
        for _ in 0..2_000 {
            let key = rng.gen::<u32>();
            map.insert(key, key);
        }
        let mid = *map.iter().nth(1_000).map(|(key, _)| key).unwrap();
        map.get(&mid);

        let mut copy = map.clone();
        assert_eq!(copy.height(), map.height());
        assert_eq!(copy.root(), map.root());
        assert_eq!(copy.len(), map.len());
        assert_eq!(copy, map);

        let min = *map.min().unwrap();
        assert_eq!(copy.get(&min), Some(&min));
        assert_eq!(copy.root(), Some((&min, &min)));
        assert_eq!(map.root(), Some((&mid, &mid)));
    }

    #[test]
    fn test_root_is_search_path_end() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut map = SplayMap::new();

        for _ in 0..20_000 {
            let key = rng.gen_range(0..2_000u32);
            let last = search_path_end(&map.tree, key);
            let present = map.peek(&key).is_some();

            match rng.gen_range(0..3) {
                0 => {
                    map.insert(key, key);
                    assert_eq!(map.root().map(|(key, _)| *key), Some(key));
                },
                1 => {
                    assert_eq!(map.get(&key).is_some(), present);
                    assert_eq!(map.root().map(|(key, _)| *key), last);
                },
                _ => {
                    let size = map.size();
                    assert_eq!(map.remove(&key).is_some(), present);
                    if present {
                        assert_eq!(map.size(), size - 1);
                    } else {
                        assert_eq!(map.root().map(|(key, _)| *key), last);
                        assert_eq!(map.size(), size);
                    }
                },
            }
        }
        assert_eq!(map.len(), map.size());
    }

    #[test]
    fn test_serde() {
        let mut map: SplayMap<u32, u32> = SplayMap::new();
        map.insert(3, 30);
        map.insert(1, 10);

        assert_tokens(
            &map,
            &[
                Token::Map { len: Some(2) },
                Token::U32(1),
                Token::U32(10),
                Token::U32(3),
                Token::U32(30),
                Token::MapEnd,
            ],
        );
    }
}
