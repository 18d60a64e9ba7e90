//! First-in-first-out container.

use std::collections::vec_deque::{self, VecDeque};
use std::iter::FromIterator;

/// The capability set of a first-in-first-out container.
pub trait Queueable {
    /// The type of the stored elements.
    type Item;

    /// Returns the number of elements in the queue.
    fn len(&self) -> usize;

    /// Returns `true` if the queue contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the earliest enqueued element without removing it.
    fn front(&self) -> Option<&Self::Item>;

    /// Adds an element to the back of the queue.
    fn enqueue(&mut self, value: Self::Item);

    /// Removes and returns the front element of the queue. Returns `None` if the queue is empty.
    fn dequeue(&mut self) -> Option<Self::Item>;
}

/// A queue backed by a ring buffer.
///
/// Both `enqueue` and `dequeue` are amortized `O(1)` and never shift the remaining elements.
///
/// # Examples
///
/// ```
/// use classic_collections::queue::{Queue, Queueable};
///
/// let mut names = Queue::from(vec!["Carl", "Lisa", "Stephanie", "Jeff", "Wade"]);
/// names.enqueue("Mike");
///
/// assert_eq!(names.dequeue(), Some("Carl"));
/// assert_eq!(names.front(), Some(&"Lisa"));
/// assert!(!names.is_empty());
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Constructs a new, empty `Queue<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::queue::Queue;
    ///
    /// let queue: Queue<u32> = Queue::new();
    /// ```
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    /// Constructs a new, empty `Queue<T>` that can hold `capacity` elements without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Queue {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns the most recently enqueued element.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::queue::{Queue, Queueable};
    ///
    /// let mut queue = Queue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// assert_eq!(queue.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Removes every element from the queue.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the queue from the front to the back.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::queue::{Queue, Queueable};
    ///
    /// let mut queue = Queue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// queue.enqueue(3);
    /// queue.dequeue();
    ///
    /// let mut iterator = queue.iter();
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> QueueIter<T> {
        QueueIter {
            items: self.items.iter(),
        }
    }
}

impl<T> Queueable for Queue<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn front(&self) -> Option<&T> {
        self.items.front()
    }

    fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(items: Vec<T>) -> Self {
        Queue {
            items: VecDeque::from(items),
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = QueueIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        QueueIntoIter {
            items: self.items.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = QueueIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `Queue<T>`.
///
/// This iterator yields owned elements from the front of the queue to the back.
pub struct QueueIntoIter<T> {
    items: vec_deque::IntoIter<T>,
}

impl<T> Iterator for QueueIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

/// An iterator for `Queue<T>`.
///
/// This iterator yields immutable references from the front of the queue to the back.
pub struct QueueIter<'a, T>
where
    T: 'a,
{
    items: vec_deque::Iter<'a, T>,
}

impl<'a, T> Iterator for QueueIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}
