use crate::{CollectionError, Vec};
use core::fmt;

/// Capacity a freshly constructed empty collection starts with.
pub const INITIAL_CAPACITY: usize = 16;

/// Growable indexed container with an explicit capacity policy.
///
/// `Collection<T>` stores elements contiguously in positional order and
/// over-allocates so that repeated appends cost amortized O(1). An empty
/// collection starts with capacity [`INITIAL_CAPACITY`]; whenever an operation
/// would push the length past the capacity, the capacity grows to
/// `max(2 * capacity, required)` before the write. Capacity never decreases.
///
/// All indexed operations are fallible and return
/// [`CollectionError::IndexOutOfRange`] instead of panicking; a failed call
/// leaves the collection completely unmodified.
///
/// # Examples
///
/// ## Building and reading
///
/// ```
/// use collection::Collection;
///
/// let mut coll = Collection::new();
/// assert_eq!(coll.len(), 0);
/// assert_eq!(coll.capacity(), 16);
///
/// coll.add(5);
/// coll.add(10);
/// coll.add(15);
///
/// assert_eq!(coll.len(), 3);
/// assert_eq!(coll.get(1), Ok(&10));
/// assert_eq!(coll.to_string(), "[5, 10, 15]");
/// ```
///
/// ## Positional edits
///
/// ```
/// use collection::Collection;
///
/// let mut coll = Collection::from_items([1, 2]);
///
/// coll.insert_at(1, 10).unwrap();
/// assert_eq!(coll.to_string(), "[1, 10, 2]");
///
/// let removed = coll.remove_at(0).unwrap();
/// assert_eq!(removed, 1);
/// assert_eq!(coll.to_string(), "[10, 2]");
/// ```
///
/// ## Nesting
///
/// ```
/// use collection::Collection;
///
/// let mut outer = Collection::new();
/// outer.add(Collection::from_items([1, 2, 3]));
/// outer.add(Collection::from_items([4, 5]));
///
/// assert_eq!(outer.to_string(), "[[1, 2, 3], [4, 5]]");
/// ```
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Collection<T> {
    /// Creates an empty collection with capacity [`INITIAL_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use collection::Collection;
    ///
    /// let coll = Collection::<u32>::new();
    /// assert!(coll.is_empty());
    /// assert_eq!(coll.capacity(), 16);
    /// ```
    pub fn new() -> Self {
        Collection {
            items: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Creates a collection holding the given items in order.
    ///
    /// The capacity starts at [`INITIAL_CAPACITY`] and follows the normal
    /// growth policy when the input is larger than that, so a single item and
    /// an empty sequence are just the N = 1 and N = 0 cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use collection::Collection;
    ///
    /// let coll = Collection::from_items([5, 10, 15]);
    /// assert_eq!(coll.len(), 3);
    /// assert_eq!(coll.get(0), Ok(&5));
    /// assert!(coll.capacity() >= coll.len());
    /// ```
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut coll = Collection::new();
        coll.add_range(items);
        coll
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the current capacity. Always at least [`Collection::len`].
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::IndexOutOfRange` if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use collection::Collection;
    ///
    /// let coll = Collection::from_items([5, 8, 10]);
    /// assert_eq!(coll.get(1), Ok(&8));
    /// assert!(coll.get(3).is_err());
    /// assert!(coll.get(500).is_err());
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.check_index(index)?;
        Ok(&self.items[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::IndexOutOfRange` if `index >= len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        self.check_index(index)?;
        Ok(&mut self.items[index])
    }

    /// Replaces the element at `index` in place.
    ///
    /// Length and capacity are unchanged. This is a convenience method
    /// equivalent to `*coll.get_mut(index)? = value`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::IndexOutOfRange` if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use collection::Collection;
    ///
    /// let mut coll = Collection::from_items([5, 8, 10]);
    /// coll.set(1, 333).unwrap();
    /// assert_eq!(coll.get(1), Ok(&333));
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        let slot = self.get_mut(index)?;
        *slot = value;
        Ok(())
    }

    /// Appends an element, growing the capacity first when full.
    ///
    /// Amortized O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use collection::Collection;
    ///
    /// let mut coll = Collection::from_items(["Tom", "Jerry"]);
    /// coll.add("Spike");
    /// assert_eq!(coll.to_string(), "[Tom, Jerry, Spike]");
    /// ```
    pub fn add(&mut self, value: T) {
        self.ensure_capacity(self.items.len() + 1);
        self.items.push(value);
    }

    /// Appends every item of the sequence, in order.
    ///
    /// Reserves for the whole input up front where the iterator reports its
    /// size, so bulk loads of millions of elements stay amortized rather than
    /// reallocating per element.
    ///
    /// # Examples
    ///
    /// ```
    /// use collection::Collection;
    ///
    /// let mut coll = Collection::new();
    /// coll.add_range([1, 2, 3]);
    /// assert_eq!(coll.to_string(), "[1, 2, 3]");
    /// ```
    pub fn add_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let iter = items.into_iter();
        let (lower, _) = iter.size_hint();
        self.ensure_capacity(self.items.len().saturating_add(lower));
        for value in iter {
            self.ensure_capacity(self.items.len() + 1);
            self.items.push(value);
        }
    }

    /// Inserts `value` at position `index`, shifting later elements right.
    ///
    /// `index == len()` is a valid append at the end.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::IndexOutOfRange` if `index > len()`. The
    /// collection is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use collection::Collection;
    ///
    /// let mut coll = Collection::from_items([1, 2]);
    /// coll.insert_at(1, 10).unwrap();
    /// assert_eq!(coll.to_string(), "[1, 10, 2]");
    ///
    /// coll.insert_at(coll.len(), 99).unwrap();
    /// assert_eq!(coll.to_string(), "[1, 10, 2, 99]");
    ///
    /// assert!(coll.insert_at(coll.len() + 1, 0).is_err());
    /// ```
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        if index > self.items.len() {
            return Err(CollectionError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.ensure_capacity(self.items.len() + 1);
        self.items.insert(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left.
    ///
    /// Capacity is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::IndexOutOfRange` if `index >= len()`. The
    /// collection is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use collection::Collection;
    ///
    /// let mut coll = Collection::from_items([1, 2, 3]);
    /// assert_eq!(coll.remove_at(1), Ok(2));
    /// assert_eq!(coll.to_string(), "[1, 3]");
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Swaps the elements at positions `i` and `j` in place.
    ///
    /// `i == j` is a legal no-op. Length and capacity are unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::IndexOutOfRange` if either index is
    /// `>= len()`; the collection is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use collection::Collection;
    ///
    /// let mut coll = Collection::from_items([1, 2, 3]);
    /// coll.exchange(0, 2).unwrap();
    /// assert_eq!(coll.to_string(), "[3, 2, 1]");
    ///
    /// assert!(coll.exchange(0, 3).is_err());
    /// ```
    pub fn exchange(&mut self, i: usize, j: usize) -> Result<(), CollectionError> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.items.swap(i, j);
        Ok(())
    }

    /// Removes all elements. Capacity is retained.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an immutable slice view of all elements.
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Returns a mutable slice view of all elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.items.as_mut_slice()
    }

    /// Returns an iterator over elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use collection::Collection;
    ///
    /// let coll = Collection::from_items([100, 200, 300]);
    /// let total: u32 = coll.iter().sum();
    /// assert_eq!(total, 600);
    /// ```
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a mutable iterator over elements.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), CollectionError> {
        if index >= self.items.len() {
            return Err(CollectionError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }

    /// Grows the capacity to `max(2 * capacity, required)` when `required`
    /// exceeds it. Existing elements and their order are preserved.
    fn ensure_capacity(&mut self, required: usize) {
        if required <= self.capacity {
            return;
        }
        let grown = self.capacity.saturating_mul(2).max(required);
        self.items.reserve(grown - self.items.len());
        self.capacity = grown;
    }
}

// Implement Index for convenient access
impl<T> core::ops::Index<usize> for Collection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("index out of bounds")
    }
}

impl<T> core::ops::IndexMut<usize> for Collection<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("index out of bounds")
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Collection::from_items(iter)
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Collection::from_items(items)
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders as `[e0, e1, ..., en-1]`, `[]` when empty. Nested collections
/// render recursively through their own `Display` impls.
impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}
