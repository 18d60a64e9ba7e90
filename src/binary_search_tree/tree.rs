use crate::arena::Arena;
use crate::binary_search_tree::node::{
    BinarySearchTreeIntoIter, BinarySearchTreeIter, Node, NodeId, NodeRef,
};
use std::iter::FromIterator;
use std::mem;

/// An unbalanced binary search tree whose nodes live in an arena.
///
/// Parent and child links are `NodeId` handles into the arena rather than pointers, so the tree
/// owns every node exactly once and the parent links never keep a node alive. Values that compare
/// less than a node are stored in its left subtree and all other values, including duplicates,
/// in its right subtree.
///
/// Insertion, search, and removal run in `O(h)` time where `h` is the height of the tree. No
/// rebalancing is done, so inserting sorted input degrades the tree into a list.
///
/// # Examples
///
/// ```
/// use classic_collections::binary_search_tree::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(7);
/// tree.insert(2);
/// tree.insert(5);
/// tree.insert(10);
/// tree.insert(9);
/// tree.insert(1);
///
/// assert_eq!(tree.len(), 6);
/// assert!(tree.contains(&9));
/// assert_eq!(tree.minimum().map(|n| *n.value()), Some(1));
/// assert_eq!(tree.maximum().map(|n| *n.value()), Some(10));
///
/// assert_eq!(tree.remove(&7), Some(7));
/// assert_eq!(tree.root().map(|n| *n.value()), Some(9));
/// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &2, &5, &9, &10]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BinarySearchTree<T> {
    pub(super) arena: Arena<Node<T>>,
    root: Option<NodeId>,
}

impl<T> BinarySearchTree<T> {
    /// Constructs a new, empty `BinarySearchTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::binary_search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32> = BinarySearchTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs a new, empty `BinarySearchTree<T>` with room for `capacity` nodes before the
    /// node arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        BinarySearchTree {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of nodes in the tree. Runs in `O(1)` time.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every node from the tree. All outstanding handles become invalid.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Returns the root of the tree, or `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<T>> {
        self.root.map(|id| NodeRef { tree: self, id })
    }

    /// Returns the node referred to by `id`, or `None` if the handle is no longer valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// let id = tree.insert(3);
    /// assert_eq!(tree.node(id).map(|n| *n.value()), Some(3));
    ///
    /// tree.remove_node(id);
    /// assert!(tree.node(id).is_none());
    /// ```
    pub fn node(&self, id: NodeId) -> Option<NodeRef<T>> {
        if self.arena.contains(id.0) {
            Some(NodeRef { tree: self, id })
        } else {
            None
        }
    }

    /// Returns the node with the smallest value, or `None` if the tree is empty.
    pub fn minimum(&self) -> Option<NodeRef<T>> {
        self.root().map(|root| root.minimum())
    }

    /// Returns the node with the largest value, or `None` if the tree is empty.
    pub fn maximum(&self) -> Option<NodeRef<T>> {
        self.root().map(|root| root.maximum())
    }

    /// Returns an iterator over the tree. The iterator will yield values using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> BinarySearchTreeIter<T> {
        BinarySearchTreeIter {
            arena: &self.arena,
            current: self.root,
            stack: Vec::new(),
        }
    }

    /// Visits every value in in-order. Does nothing if the tree is empty.
    pub fn traverse_in_order<'a, F>(&'a self, process: F)
    where
        F: FnMut(&'a T),
    {
        if let Some(root) = self.root() {
            root.traverse_in_order(process);
        }
    }

    /// Visits every value in pre-order. Does nothing if the tree is empty.
    pub fn traverse_pre_order<'a, F>(&'a self, process: F)
    where
        F: FnMut(&'a T),
    {
        if let Some(root) = self.root() {
            root.traverse_pre_order(process);
        }
    }

    /// Visits every value in post-order. Does nothing if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::binary_search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32> = vec![2, 1, 3].into_iter().collect();
    ///
    /// let mut visited = Vec::new();
    /// tree.traverse_post_order(|value| visited.push(*value));
    /// assert_eq!(visited, vec![1, 3, 2]);
    /// ```
    pub fn traverse_post_order<'a, F>(&'a self, process: F)
    where
        F: FnMut(&'a T),
    {
        if let Some(root) = self.root() {
            root.traverse_post_order(process);
        }
    }

    /// Applies `formula` to every value in in-order and collects the results.
    pub fn map<'a, U, F>(&'a self, formula: F) -> Vec<U>
    where
        F: FnMut(&'a T) -> U,
    {
        self.iter().map(formula).collect()
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena[id.0].left {
            id = left;
        }
        id
    }

    // Removes a node with at most one child from the arena and lets the child take its place.
    fn splice_out(&mut self, id: NodeId) -> T {
        let Node {
            value,
            parent,
            left,
            right,
        } = self.arena.free(id.0);
        let child = left.or(right);

        if let Some(child) = child {
            self.arena[child.0].parent = parent;
        }

        match parent {
            Some(parent) => {
                let parent = &mut self.arena[parent.0];
                if parent.left == Some(id) {
                    parent.left = child;
                } else {
                    parent.right = child;
                }
            },
            None => {
                debug!("replacing root {:?} with {:?}", id, child);
                self.root = child;
            },
        }

        value
    }

    /// Removes a node from the tree and returns its value together with the handle of the node
    /// that now occupies its position.
    ///
    /// - A leaf is detached from its parent and `None` is returned.
    /// - A node with one child is replaced by that child, whose handle is returned.
    /// - A node with two children takes the value of its in-order successor, and the successor
    ///   (which has no left child) is spliced out instead. The handle of the removed node stays
    ///   valid and is returned; the successor's handle is invalidated.
    ///
    /// Removing the root updates the root of the tree.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a node of this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// let root = tree.insert(2);
    /// let left = tree.insert(1);
    /// let right = tree.insert(3);
    ///
    /// assert_eq!(tree.remove_node(root), (2, Some(root)));
    /// assert_eq!(tree.node(root).map(|n| *n.value()), Some(3));
    /// assert!(tree.node(right).is_none());
    ///
    /// assert_eq!(tree.remove_node(root), (3, Some(left)));
    /// assert_eq!(tree.root().map(|n| n.id()), Some(left));
    ///
    /// assert_eq!(tree.remove_node(left), (1, None));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove_node(&mut self, id: NodeId) -> (T, Option<NodeId>) {
        let (left, right) = match self.arena.get(id.0) {
            Some(node) => (node.left, node.right),
            None => panic!("Error: {:?} does not refer to a node of this tree.", id),
        };

        match (left, right) {
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                debug!("removing {:?} by moving in successor {:?}", id, successor);
                let successor_value = self.splice_out(successor);
                let value = mem::replace(&mut self.arena[id.0].value, successor_value);
                (value, Some(id))
            },
            (child, None) | (None, child) => {
                let value = self.splice_out(id);
                (value, child)
            },
        }
    }
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Inserts a value as a new leaf and returns the handle of its node. A value equal to an
    /// existing one is placed in that node's right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// let root = tree.insert(2);
    /// let duplicate = tree.insert(2);
    ///
    /// assert_eq!(tree.node(duplicate).and_then(|n| n.parent()).map(|n| n.id()), Some(root));
    /// assert!(tree.node(duplicate).map_or(false, |n| n.is_right_child()));
    /// ```
    pub fn insert(&mut self, value: T) -> NodeId {
        let mut parent = None;
        let mut is_left = false;
        let mut current = self.root;

        while let Some(id) = current {
            let node = &self.arena[id.0];
            is_left = value < node.value;
            parent = Some(id);
            current = if is_left { node.left } else { node.right };
        }

        let id = NodeId(self.arena.allocate(Node::new(value, parent)));
        match parent {
            Some(parent) => {
                let parent = &mut self.arena[parent.0];
                if is_left {
                    parent.left = Some(id);
                } else {
                    parent.right = Some(id);
                }
            },
            None => self.root = Some(id),
        }
        id
    }

    /// Returns the highest node whose value is equal to `value`, or `None` if there is no such
    /// node.
    pub fn search(&self, value: &T) -> Option<NodeRef<T>> {
        self.root().and_then(|root| root.search(value))
    }

    /// Returns `true` if the tree contains `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Removes the highest node whose value is equal to `value` and returns its value. Returns
    /// `None` if there is no such node.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let id = self.search(value)?.id();
        Some(self.remove_node(id).0)
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for BinarySearchTree<T> {
    type Item = T;
    type IntoIter = BinarySearchTreeIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            arena: self.arena,
            current: self.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = BinarySearchTreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::BinarySearchTree;
    use crate::binary_search_tree::NodeRef;

    // Checks parent links, the ordering invariant, and that `len` matches the reachable nodes.
    fn assert_valid(tree: &BinarySearchTree<i32>) {
        let root = match tree.root() {
            Some(root) => root,
            None => {
                assert_eq!(tree.len(), 0);
                return;
            },
        };
        assert!(root.is_root());
        assert_eq!(root.count(), tree.len());

        let mut stack: Vec<NodeRef<i32>> = vec![root];
        while let Some(node) = stack.pop() {
            if let Some(left) = node.left() {
                assert_eq!(left.parent(), Some(node));
                assert!(left.maximum().value() <= node.value());
                stack.push(left);
            }
            if let Some(right) = node.right() {
                assert_eq!(right.parent(), Some(node));
                assert!(right.minimum().value() >= node.value());
                stack.push(right);
            }
        }
    }

    fn sample() -> BinarySearchTree<i32> {
        vec![7, 2, 5, 10, 9, 1].into_iter().collect()
    }

    #[test]
    fn test_len_empty() {
        let tree: BinarySearchTree<i32> = BinarySearchTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
    }

    #[test]
    fn test_min_max_empty() {
        let tree: BinarySearchTree<i32> = BinarySearchTree::new();
        assert!(tree.minimum().is_none());
        assert!(tree.maximum().is_none());
    }

    #[test]
    fn test_insert_shape() {
        let tree = sample();
        let root = tree.root().unwrap();
        assert_eq!(root.value(), &7);
        assert_eq!(root.left().map(|n| *n.value()), Some(2));
        assert_eq!(root.right().map(|n| *n.value()), Some(10));

        let two = root.left().unwrap();
        assert!(two.has_both_children());
        assert!(two.is_left_child());
        assert_eq!(two.left().map(|n| *n.value()), Some(1));
        assert_eq!(two.right().map(|n| *n.value()), Some(5));

        let ten = root.right().unwrap();
        assert!(ten.has_left_child());
        assert!(!ten.has_right_child());
        assert!(ten.is_right_child());
        assert_valid(&tree);
    }

    #[test]
    fn test_search() {
        let tree = sample();
        for value in &[7, 2, 5, 10, 9, 1] {
            assert_eq!(tree.search(value).map(|n| *n.value()), Some(*value));
        }
        assert!(tree.search(&3).is_none());
        assert!(!tree.contains(&11));
    }

    #[test]
    fn test_search_from_subtree() {
        let tree = sample();
        let two = tree.search(&2).unwrap();
        assert!(two.contains(&5));
        assert!(!two.contains(&9));
    }

    #[test]
    fn test_search_returns_highest_duplicate() {
        let mut tree = BinarySearchTree::new();
        tree.insert(5);
        let first = tree.insert(3);
        tree.insert(3);
        tree.insert(3);
        assert_eq!(tree.search(&3).map(|n| n.id()), Some(first));
    }

    #[test]
    fn test_depth() {
        let tree = sample();
        assert_eq!(tree.search(&7).unwrap().depth(), 0);
        assert_eq!(tree.search(&2).unwrap().depth(), 1);
        assert_eq!(tree.search(&9).unwrap().depth(), 2);
        assert_eq!(tree.search(&1).unwrap().depth(), 2);
    }

    #[test]
    fn test_predecessor_successor() {
        let tree = sample();
        let sorted = [1, 2, 5, 7, 9, 10];
        for (i, value) in sorted.iter().enumerate() {
            let node = tree.search(value).unwrap();
            let predecessor = node.predecessor().map(|n| *n.value());
            let successor = node.successor().map(|n| *n.value());
            assert_eq!(predecessor, if i == 0 { None } else { Some(sorted[i - 1]) });
            assert_eq!(successor, sorted.get(i + 1).cloned());
        }
    }

    #[test]
    fn test_traversals() {
        let tree = sample();
        let mut in_order = Vec::new();
        let mut pre_order = Vec::new();
        let mut post_order = Vec::new();
        tree.traverse_in_order(|value| in_order.push(*value));
        tree.traverse_pre_order(|value| pre_order.push(*value));
        tree.traverse_post_order(|value| post_order.push(*value));

        assert_eq!(in_order, vec![1, 2, 5, 7, 9, 10]);
        assert_eq!(pre_order, vec![7, 2, 1, 5, 10, 9]);
        assert_eq!(post_order, vec![1, 5, 2, 9, 10, 7]);
    }

    #[test]
    fn test_map() {
        let tree = sample();
        assert_eq!(tree.map(|value| value * 10), vec![10, 20, 50, 70, 90, 100]);
    }

    #[test]
    fn test_remove_leaf() {
        let mut tree = sample();
        let id = tree.search(&9).unwrap().id();
        assert_eq!(tree.remove_node(id), (9, None));
        assert!(!tree.search(&10).unwrap().has_any_child());
        assert_eq!(tree.len(), 5);
        assert_valid(&tree);
    }

    #[test]
    fn test_remove_one_child() {
        let mut tree = sample();
        let ten = tree.search(&10).unwrap().id();
        let nine = tree.search(&9).unwrap().id();
        assert_eq!(tree.remove_node(ten), (10, Some(nine)));
        assert_eq!(tree.node(nine).and_then(|n| n.parent()).map(|n| *n.value()), Some(7));
        assert_eq!(tree.len(), 5);
        assert_valid(&tree);
    }

    #[test]
    fn test_remove_two_children() {
        let mut tree = sample();
        let two = tree.search(&2).unwrap().id();
        assert_eq!(tree.remove_node(two), (2, Some(two)));
        assert_eq!(tree.node(two).map(|n| *n.value()), Some(5));
        assert_eq!(tree.iter().cloned().collect::<Vec<i32>>(), vec![1, 5, 7, 9, 10]);
        assert_valid(&tree);
    }

    #[test]
    fn test_remove_root_until_empty() {
        let mut tree = sample();
        let mut expected = vec![1, 2, 5, 7, 9, 10];
        while let Some(root) = tree.root().map(|n| n.id()) {
            let (value, _) = tree.remove_node(root);
            expected.retain(|v| *v != value);
            assert_eq!(tree.iter().cloned().collect::<Vec<i32>>(), expected);
            assert_valid(&tree);
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = sample();
        assert_eq!(tree.remove(&3), None);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    #[should_panic]
    fn test_remove_stale_handle() {
        let mut tree = sample();
        let id = tree.search(&1).unwrap().id();
        tree.remove_node(id);
        tree.remove_node(id);
    }

    #[test]
    fn test_stale_handle_after_slot_reuse() {
        let mut tree = BinarySearchTree::new();
        tree.insert(5);
        let stale = tree.insert(1);
        tree.remove_node(stale);
        let nine = tree.insert(9);

        assert_eq!(nine.0.index(), stale.0.index());
        assert_ne!(nine, stale);
        assert!(tree.node(stale).is_none());
        assert_eq!(tree.node(nine).map(|n| *n.value()), Some(9));
        assert_eq!(tree.iter().cloned().collect::<Vec<i32>>(), vec![5, 9]);
    }

    #[test]
    #[should_panic]
    fn test_remove_stale_handle_after_slot_reuse() {
        let mut tree = BinarySearchTree::new();
        tree.insert(5);
        let stale = tree.insert(1);
        tree.remove_node(stale);
        tree.insert(9);
        tree.remove_node(stale);
    }

    #[test]
    fn test_clear_invalidates_handles() {
        let mut tree = sample();
        let root = tree.root().unwrap().id();
        tree.clear();
        let id = tree.insert(3);

        assert!(tree.node(root).is_none());
        assert_eq!(tree.node(id).map(|n| *n.value()), Some(3));
    }

    #[test]
    fn test_degenerate_tree_traversal() {
        let tree: BinarySearchTree<i32> = (0..10_000).collect();
        assert_eq!(tree.root().unwrap().count(), 10_000);
        let mut visited = 0;
        tree.traverse_post_order(|_| visited += 1);
        assert_eq!(visited, 10_000);
        assert_eq!(tree.maximum().unwrap().depth(), 9_999);
    }

    #[test]
    fn test_into_iter() {
        let tree = sample();
        assert_eq!(tree.into_iter().collect::<Vec<i32>>(), vec![1, 2, 5, 7, 9, 10]);
    }

    #[test]
    fn test_clear() {
        let mut tree = sample();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }
}
