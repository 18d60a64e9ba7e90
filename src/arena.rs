//! Slab allocator used to store the nodes of linked structures.

use std::mem;
use std::ops::{Index, IndexMut};

/// A handle to an object stored in an `Arena<T>`.
///
/// A handle is a slot index paired with the generation of the slot when it was allocated, so it
/// is `Copy` and never owns the object it refers to. Freeing an object bumps the generation of its
/// slot. A handle to a freed object therefore never resolves again, even after the slot is reused.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    index: usize,
    generation: u64,
}

impl Handle {
    /// Returns the slot index this handle refers to.
    pub fn index(self) -> usize {
        self.index
    }

    /// Returns the generation of the slot this handle was issued for.
    pub fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
enum Slot<T> {
    Occupied { generation: u64, value: T },
    Vacant { generation: u64, next_free: Option<usize> },
}

/// A growable arena that stores a single type of object and addresses it through `Handle`s.
///
/// Freed slots are threaded into a free list and reused by later allocations, so a long-lived
/// arena does not grow past its peak number of live objects. Handles are checked against the
/// generation of their slot, so stale handles are rejected rather than aliasing a newer object. Everything is stored in one `Vec`
/// and no unsafe code is used.
///
/// # Examples
///
/// ```
/// use classic_collections::arena::Arena;
///
/// let mut arena = Arena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert_eq!(arena.get(x), None);
///
/// let y = arena.allocate(3);
/// assert_eq!(y.index(), x.index());
/// assert_eq!(arena.get(x), None);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::new();
    /// assert!(arena.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs a new, empty `Arena<T>` with room for `capacity` objects before reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::with_capacity(1024);
    /// assert!(arena.capacity() >= 1024);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Stores an object in the arena and returns its handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate("a");
    /// assert_eq!(arena[x], "a");
    /// ```
    pub fn allocate(&mut self, value: T) -> Handle {
        self.len += 1;
        match self.free_head {
            Some(index) => {
                let generation = match self.slots[index] {
                    Slot::Vacant { generation, next_free } => {
                        self.free_head = next_free;
                        generation
                    },
                    Slot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
                };
                self.slots[index] = Slot::Occupied { generation, value };
                Handle { index, generation }
            },
            None => {
                self.slots.push(Slot::Occupied { generation: 0, value });
                Handle {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            },
        }
    }

    /// Removes an object from the arena and returns it. The handle must not be used afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `handle` does not refer to a live object.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(x), 0);
    /// assert!(arena.is_empty());
    /// ```
    pub fn free(&mut self, handle: Handle) -> T {
        if !self.contains(handle) {
            panic!("Error: attempting to free a vacant or invalid slot.");
        }
        let vacant = Slot::Vacant {
            generation: handle.generation.wrapping_add(1),
            next_free: self.free_head,
        };
        let slot = mem::replace(&mut self.slots[handle.index], vacant);
        self.free_head = Some(handle.index);
        self.len -= 1;
        match slot {
            Slot::Occupied { value, .. } => value,
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    /// Returns `true` if `handle` refers to a live object.
    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    /// Returns an immutable reference to an object in the arena, or `None` if the handle does not
    /// refer to a live object.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(x), Some(&0));
    /// ```
    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.slots.get(handle.index) {
            Some(Slot::Occupied { generation, value }) if *generation == handle.generation => {
                Some(value)
            },
            _ => None,
        }
    }

    /// Returns a mutable reference to an object in the arena, or `None` if the handle does not
    /// refer to a live object.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// if let Some(value) = arena.get_mut(x) {
    ///     *value = 1;
    /// }
    /// assert_eq!(arena[x], 1);
    /// ```
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.slots.get_mut(handle.index) {
            Some(Slot::Occupied { generation, value }) if *generation == handle.generation => {
                Some(value)
            },
            _ => None,
        }
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of objects the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Drops every object in the arena. All outstanding handles become invalid.
    ///
    /// Slots are kept with their generations bumped, and the lowest index is handed out first.
    pub fn clear(&mut self) {
        let mut next_free = None;
        for index in (0..self.slots.len()).rev() {
            let generation = match self.slots[index] {
                Slot::Occupied { generation, .. } => generation.wrapping_add(1),
                Slot::Vacant { generation, .. } => generation,
            };
            self.slots[index] = Slot::Vacant { generation, next_free };
            next_free = Some(index);
        }
        self.free_head = next_free;
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        match self.get(handle) {
            Some(value) => value,
            None => panic!("Error: handle {} does not refer to a live slot.", handle.index),
        }
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        match self.get_mut(handle) {
            Some(value) => value,
            None => panic!("Error: handle {} does not refer to a live slot.", handle.index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, Handle};

    #[test]
    #[should_panic]
    fn test_free_invalid_slot() {
        let mut arena: Arena<u32> = Arena::new();
        arena.free(Handle {
            index: 0,
            generation: 0,
        });
    }

    #[test]
    #[should_panic]
    fn test_free_twice() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        arena.free(x);
        arena.free(x);
    }

    #[test]
    fn test_allocate() {
        let mut arena = Arena::new();
        assert_eq!(arena.allocate(0).index(), 0);
        assert_eq!(arena.allocate(0).index(), 1);
        assert_eq!(arena.allocate(0).index(), 2);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_free_reuses_slots_last_in_first_out() {
        let mut arena = Arena::new();
        let a = arena.allocate(0);
        let b = arena.allocate(1);
        arena.allocate(2);

        assert_eq!(arena.free(a), 0);
        assert_eq!(arena.free(b), 1);
        assert_eq!(arena.len(), 1);

        assert_eq!(arena.allocate(3).index(), b.index());
        assert_eq!(arena.allocate(4).index(), a.index());
        assert_eq!(arena.allocate(5).index(), 3);
    }

    #[test]
    fn test_get_vacant_slot() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        arena.free(x);
        assert_eq!(arena.get(x), None);
        assert_eq!(arena.get_mut(x), None);
        assert!(!arena.contains(x));
    }

    #[test]
    fn test_get_invalid_slot() {
        let arena: Arena<u32> = Arena::new();
        let handle = Handle {
            index: 7,
            generation: 0,
        };
        assert_eq!(arena.get(handle), None);
    }

    #[test]
    #[should_panic]
    fn test_index_freed_slot() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        arena.free(x);
        let _ = arena[x];
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.get(x), None);

        let y = arena.allocate(1);
        assert_eq!(y.index(), 0);
        assert_ne!(y, x);
        assert_eq!(arena.get(x), None);
        assert_eq!(arena[y], 1);
    }

    #[test]
    fn test_stale_handle_after_reuse() {
        let mut arena = Arena::new();
        let x = arena.allocate(1);
        arena.free(x);
        let y = arena.allocate(9);

        assert_eq!(y.index(), x.index());
        assert_eq!(y.generation(), x.generation() + 1);
        assert_eq!(arena.get(x), None);
        assert_eq!(arena.get_mut(x), None);
        assert!(!arena.contains(x));
        assert_eq!(arena[y], 9);
    }

    #[test]
    #[should_panic]
    fn test_free_stale_handle_after_reuse() {
        let mut arena = Arena::new();
        let x = arena.allocate(1);
        arena.free(x);
        arena.allocate(9);
        arena.free(x);
    }
}
