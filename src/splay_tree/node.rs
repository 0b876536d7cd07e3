use crate::entry::Entry;
use crate::splay_tree::tree;

/// A struct representing an internal node of a splay tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            left: None,
            right: None,
        }
    }

    // precondition: the right child is `Some`
    pub fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut child = self.right.take().expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        child.left = Some(self);
        child
    }

    // precondition: the left child is `Some`
    pub fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut child = self.left.take().expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        child.right = Some(self);
        child
    }
}
