//! Last-in-first-out container.

use std::iter::FromIterator;
use std::slice;
use std::vec;

/// The capability set of a last-in-first-out container.
pub trait Stackable {
    /// The type of the stored elements.
    type Item;

    /// Returns the number of elements in the stack.
    fn len(&self) -> usize;

    /// Returns `true` if the stack contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the most recently pushed element without removing it.
    fn top(&self) -> Option<&Self::Item>;

    /// Pushes an element onto the top of the stack.
    fn push(&mut self, value: Self::Item);

    /// Removes and returns the top element of the stack. Returns `None` if the stack is empty.
    fn pop(&mut self) -> Option<Self::Item>;
}

/// A stack backed by a growable array.
///
/// Pushing is amortized `O(1)` and popping is `O(1)`. A stack built from a sequence treats the
/// first element of the sequence as the bottom of the stack.
///
/// # Examples
///
/// ```
/// use classic_collections::stack::{Stack, Stackable};
///
/// let mut names = Stack::from(vec!["Carl", "Lisa", "Stephanie", "Jeff", "Wade"]);
/// names.push("Mike");
///
/// assert_eq!(names.pop(), Some("Mike"));
/// assert_eq!(names.top(), Some(&"Wade"));
/// assert!(!names.is_empty());
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Constructs a new, empty `Stack<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::stack::Stack;
    ///
    /// let stack: Stack<u32> = Stack::new();
    /// ```
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Constructs a new, empty `Stack<T>` that can hold `capacity` elements without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns a mutable reference to the top element.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::stack::{Stack, Stackable};
    ///
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// if let Some(top) = stack.top_mut() {
    ///     *top = 2;
    /// }
    /// assert_eq!(stack.pop(), Some(2));
    /// ```
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Removes every element from the stack.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the stack from the bottom to the top.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::stack::{Stack, Stackable};
    ///
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// stack.push(2);
    ///
    /// let mut iterator = stack.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> slice::Iter<T> {
        self.items.iter()
    }
}

impl<T> Stackable for Stack<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn top(&self) -> Option<&T> {
        self.items.last()
    }

    fn push(&mut self, value: T) {
        self.items.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(items: Vec<T>) -> Self {
        Stack { items }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
