use crate::arena::{Arena, Handle};
use crate::binary_search_tree::tree::BinarySearchTree;
use std::fmt;
use std::ptr;

/// A handle to a node of a `BinarySearchTree<T>`.
///
/// Handles stay valid until the node they refer to is removed. Removing a node with two children
/// keeps its handle alive (the in-order successor's value moves into it) and invalidates the
/// successor's handle instead. A handle to a removed node never resolves again, even once its
/// storage is reused by a later insertion.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct NodeId(pub(super) Handle);

/// A node stored in the tree's arena. `parent` is a back-reference used only for navigation; the
/// child slots own their subtrees.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(super) struct Node<T> {
    pub value: T,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn new(value: T, parent: Option<NodeId>) -> Self {
        Node {
            value,
            parent,
            left: None,
            right: None,
        }
    }
}

/// A borrowed view of one node of a `BinarySearchTree<T>`.
///
/// Every query that walks the tree starts from the viewed node and considers only the subtree
/// rooted at it, except for `parent`, `depth`, `predecessor`, and `successor`, which may walk up
/// through ancestors.
///
/// # Examples
///
/// ```
/// use classic_collections::binary_search_tree::BinarySearchTree;
///
/// let tree: BinarySearchTree<u32> = vec![7, 2, 5, 10, 9, 1].into_iter().collect();
/// let root = tree.root().unwrap();
///
/// assert_eq!(root.value(), &7);
/// assert!(root.is_root());
/// assert_eq!(root.count(), 6);
///
/// let five = root.search(&5).unwrap();
/// assert_eq!(five.depth(), 2);
/// assert!(five.is_leaf());
/// assert!(five.is_right_child());
/// assert_eq!(five.predecessor().map(|n| *n.value()), Some(2));
/// assert_eq!(five.successor().map(|n| *n.value()), Some(7));
/// ```
pub struct NodeRef<'a, T>
where
    T: 'a,
{
    pub(super) tree: &'a BinarySearchTree<T>,
    pub(super) id: NodeId,
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> PartialEq for NodeRef<'a, T> {
    fn eq(&self, other: &NodeRef<'a, T>) -> bool {
        self.id == other.id && ptr::eq(self.tree, other.tree)
    }
}

impl<'a, T> Eq for NodeRef<'a, T> {}

impl<'a, T> fmt::Debug for NodeRef<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.value())
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    fn node(&self) -> &'a Node<T> {
        &self.tree.arena[self.id.0]
    }

    fn arena(&self) -> &'a Arena<Node<T>> {
        &self.tree.arena
    }

    fn view(&self, id: Option<NodeId>) -> Option<NodeRef<'a, T>> {
        id.map(|id| NodeRef {
            tree: self.tree,
            id,
        })
    }

    /// Returns the handle of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the value stored in this node.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    /// Returns the parent of this node, or `None` if this node is the root.
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.view(self.node().parent)
    }

    /// Returns the left child of this node.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.view(self.node().left)
    }

    /// Returns the right child of this node.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.view(self.node().right)
    }

    /// Returns `true` if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        !self.has_any_child()
    }

    /// Returns `true` if this node is the left child of its parent.
    pub fn is_left_child(&self) -> bool {
        self.parent()
            .map_or(false, |parent| parent.node().left == Some(self.id))
    }

    /// Returns `true` if this node is the right child of its parent.
    pub fn is_right_child(&self) -> bool {
        self.parent()
            .map_or(false, |parent| parent.node().right == Some(self.id))
    }

    pub fn has_left_child(&self) -> bool {
        self.node().left.is_some()
    }

    pub fn has_right_child(&self) -> bool {
        self.node().right.is_some()
    }

    pub fn has_any_child(&self) -> bool {
        self.has_left_child() || self.has_right_child()
    }

    pub fn has_both_children(&self) -> bool {
        self.has_left_child() && self.has_right_child()
    }

    /// Returns the number of nodes in the subtree rooted at this node. Runs in `O(n)` time.
    pub fn count(&self) -> usize {
        let arena = self.arena();
        let mut stack = vec![self.id];
        let mut count = 0;
        while let Some(id) = stack.pop() {
            let node = &arena[id.0];
            count += 1;
            stack.extend(node.left);
            stack.extend(node.right);
        }
        count
    }

    /// Returns the highest node in the subtree rooted at this node whose value is equal to
    /// `value`, or `None` if there is no such node. Runs in `O(h)` time.
    pub fn search(&self, value: &T) -> Option<NodeRef<'a, T>>
    where
        T: Ord,
    {
        let arena = self.arena();
        let mut current = Some(self.id);
        while let Some(id) = current {
            let node = &arena[id.0];
            if *value < node.value {
                current = node.left;
            } else if *value > node.value {
                current = node.right;
            } else {
                return self.view(Some(id));
            }
        }
        None
    }

    /// Returns `true` if the subtree rooted at this node contains `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.search(value).is_some()
    }

    /// Returns the leftmost descendant of this node, or this node if it has no left child.
    pub fn minimum(&self) -> NodeRef<'a, T> {
        let mut node = *self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// Returns the rightmost descendant of this node, or this node if it has no right child.
    pub fn maximum(&self) -> NodeRef<'a, T> {
        let mut node = *self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Returns the number of edges between this node and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = *self;
        while let Some(parent) = node.parent() {
            node = parent;
            depth += 1;
        }
        depth
    }

    /// Returns the node that precedes this node in an in-order traversal of the whole tree, or
    /// `None` if this node holds the minimum.
    pub fn predecessor(&self) -> Option<NodeRef<'a, T>> {
        if let Some(left) = self.left() {
            return Some(left.maximum());
        }
        let mut node = *self;
        while let Some(parent) = node.parent() {
            if node.is_right_child() {
                return Some(parent);
            }
            node = parent;
        }
        None
    }

    /// Returns the node that follows this node in an in-order traversal of the whole tree, or
    /// `None` if this node holds the maximum.
    pub fn successor(&self) -> Option<NodeRef<'a, T>> {
        if let Some(right) = self.right() {
            return Some(right.minimum());
        }
        let mut node = *self;
        while let Some(parent) = node.parent() {
            if node.is_left_child() {
                return Some(parent);
            }
            node = parent;
        }
        None
    }

    /// Returns an iterator over the values of the subtree rooted at this node in in-order.
    pub fn iter(&self) -> BinarySearchTreeIter<'a, T> {
        BinarySearchTreeIter {
            arena: self.arena(),
            current: Some(self.id),
            stack: Vec::new(),
        }
    }

    /// Visits the values of the subtree in in-order: left subtree, node, right subtree.
    pub fn traverse_in_order<F>(&self, mut process: F)
    where
        F: FnMut(&'a T),
    {
        for value in self.iter() {
            process(value);
        }
    }

    /// Visits the values of the subtree in pre-order: node, left subtree, right subtree.
    pub fn traverse_pre_order<F>(&self, mut process: F)
    where
        F: FnMut(&'a T),
    {
        let arena = self.arena();
        let mut stack = vec![self.id];
        while let Some(id) = stack.pop() {
            let node = &arena[id.0];
            process(&node.value);
            stack.extend(node.right);
            stack.extend(node.left);
        }
    }

    /// Visits the values of the subtree in post-order: left subtree, right subtree, node.
    pub fn traverse_post_order<F>(&self, mut process: F)
    where
        F: FnMut(&'a T),
    {
        // Reversed (node, right, left) pre-order is post-order.
        let arena = self.arena();
        let mut stack = vec![self.id];
        let mut order = Vec::new();
        while let Some(id) = stack.pop() {
            let node = &arena[id.0];
            order.push(&node.value);
            stack.extend(node.left);
            stack.extend(node.right);
        }
        for value in order.into_iter().rev() {
            process(value);
        }
    }

    /// Applies `formula` to every value of the subtree in in-order and collects the results.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::binary_search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32> = vec![2, 1, 3].into_iter().collect();
    /// let doubled = tree.root().unwrap().map(|value| value * 2);
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    pub fn map<U, F>(&self, formula: F) -> Vec<U>
    where
        F: FnMut(&'a T) -> U,
    {
        self.iter().map(formula).collect()
    }
}

/// An iterator for `BinarySearchTree<T>`.
///
/// This iterator traverses a subtree in-order and yields immutable references.
pub struct BinarySearchTreeIter<'a, T>
where
    T: 'a,
{
    pub(super) arena: &'a Arena<Node<T>>,
    pub(super) current: Option<NodeId>,
    pub(super) stack: Vec<NodeId>,
}

impl<'a, T> Iterator for BinarySearchTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = self.arena[id.0].left;
        }
        let id = self.stack.pop()?;
        let arena = self.arena;
        let node = &arena[id.0];
        self.current = node.right;
        Some(&node.value)
    }
}

/// An owning iterator for `BinarySearchTree<T>`.
///
/// This iterator traverses the tree in-order and yields owned values.
pub struct BinarySearchTreeIntoIter<T> {
    pub(super) arena: Arena<Node<T>>,
    pub(super) current: Option<NodeId>,
    pub(super) stack: Vec<NodeId>,
}

impl<T> Iterator for BinarySearchTreeIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = self.arena[id.0].left;
        }
        let id = self.stack.pop()?;
        let node = self.arena.free(id.0);
        self.current = node.right;
        Some(node.value)
    }
}
