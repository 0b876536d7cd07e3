use crate::entry::Entry;
use crate::splay_tree::node::Node;
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

// Pairs of a node and its child on the search path, recorded on the way down. Each step is
// undone bottom-up with the zig-zig/zig-zag rotations, so no step recurses.
enum Step {
    LeftLeft,
    LeftRight,
    RightLeft,
    RightRight,
}

type Frame<T, U> = (Box<Node<T, U>>, Box<Node<T, U>>, Step);

// Top-down splay. Returns the new root of the subtree: the node holding `key` if it exists,
// otherwise the last node on the search path for `key`. The search path is kept on an explicit
// stack, so the depth of the tree is not bounded by the call stack.
pub fn splay<T, U, V>(tree: Tree<T, U>, key: &V) -> Tree<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut frames: Vec<Frame<T, U>> = Vec::new();
    let mut curr = tree;

    let mut ret = loop {
        let mut node = match curr {
            Some(node) => node,
            None => break None,
        };

        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => {
                let mut child = match node.left.take() {
                    Some(child) => child,
                    None => break Some(node),
                };
                match key.cmp(child.entry.key.borrow()) {
                    Ordering::Less => {
                        curr = child.left.take();
                        frames.push((node, child, Step::LeftLeft));
                    },
                    Ordering::Greater => {
                        curr = child.right.take();
                        frames.push((node, child, Step::LeftRight));
                    },
                    Ordering::Equal => {
                        node.left = Some(child);
                        break Some(node.rotate_right());
                    },
                }
            },
            Ordering::Greater => {
                let mut child = match node.right.take() {
                    Some(child) => child,
                    None => break Some(node),
                };
                match key.cmp(child.entry.key.borrow()) {
                    Ordering::Less => {
                        curr = child.left.take();
                        frames.push((node, child, Step::RightLeft));
                    },
                    Ordering::Greater => {
                        curr = child.right.take();
                        frames.push((node, child, Step::RightRight));
                    },
                    Ordering::Equal => {
                        node.right = Some(child);
                        break Some(node.rotate_left());
                    },
                }
            },
            Ordering::Equal => break Some(node),
        }
    };

    while let Some((mut node, mut child, step)) = frames.pop() {
        let splayed = ret.take();
        ret = match step {
            Step::LeftLeft => {
                child.left = splayed;
                node.left = Some(child);
                let node = node.rotate_right();
                if node.left.is_none() {
                    Some(node)
                } else {
                    Some(node.rotate_right())
                }
            },
            Step::LeftRight => {
                child.right = splayed;
                if child.right.is_some() {
                    child = child.rotate_left();
                }
                node.left = Some(child);
                Some(node.rotate_right())
            },
            Step::RightLeft => {
                child.left = splayed;
                if child.left.is_some() {
                    child = child.rotate_right();
                }
                node.right = Some(child);
                Some(node.rotate_left())
            },
            Step::RightRight => {
                child.right = splayed;
                node.right = Some(child);
                let node = node.rotate_left();
                if node.right.is_none() {
                    Some(node)
                } else {
                    Some(node.rotate_left())
                }
            },
        };
    }

    ret
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, mut new_node: Node<T, U>) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let mut node = match splay(tree.take(), &new_node.entry.key) {
        Some(node) => node,
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    match new_node.entry.key.cmp(&node.entry.key) {
        Ordering::Less => {
            new_node.left = node.left.take();
            new_node.right = Some(node);
            *tree = Some(Box::new(new_node));
            None
        },
        Ordering::Greater => {
            new_node.right = node.right.take();
            new_node.left = Some(node);
            *tree = Some(Box::new(new_node));
            None
        },
        Ordering::Equal => {
            let ret = mem::replace(&mut node.entry, new_node.entry);
            *tree = Some(node);
            Some(ret)
        },
    }
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let node = match splay(tree.take(), key) {
        Some(node) => node,
        None => return None,
    };

    if key.cmp(node.entry.key.borrow()) != Ordering::Equal {
        *tree = Some(node);
        return None;
    }

    let Node { entry, left, right } = *node;
    // every key in `left` is smaller than `key`, so splaying for it surfaces the predecessor,
    // which has no right child
    *tree = match splay(left, key) {
        Some(mut left_root) => {
            debug_assert!(left_root.right.is_none());
            left_root.right = right;
            Some(left_root)
        },
        None => right,
    };
    Some(entry)
}

// Splays the tree and returns the root entry if it holds `key`.
pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    *tree = splay(tree.take(), key);
    match tree {
        Some(node) if key.cmp(node.entry.key.borrow()) == Ordering::Equal => {
            Some(&mut node.entry)
        },
        _ => None,
    }
}

// Plain binary search that leaves the shape of the tree untouched.
pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn ceil<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    let mut ret = None;
    while let Some(node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Greater => curr = &node.right,
            Ordering::Less => {
                ret = Some(&node.entry);
                curr = &node.left;
            },
            Ordering::Equal => return Some(&node.entry),
        }
    }
    ret
}

pub fn floor<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    let mut ret = None;
    while let Some(node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                ret = Some(&node.entry);
                curr = &node.right;
            },
            Ordering::Equal => return Some(&node.entry),
        }
    }
    ret
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

// Counts every reachable node. Walks the whole tree on each call.
pub fn size<T, U>(tree: &Tree<T, U>) -> usize {
    let mut count = 0;
    let mut stack: Vec<&Node<T, U>> = tree.as_deref().into_iter().collect();
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }
    count
}

// Number of edges on the longest root-to-leaf path; `-1` for an empty tree.
pub fn height<T, U>(tree: &Tree<T, U>) -> isize {
    let mut ret = -1;
    let mut stack: Vec<(&Node<T, U>, isize)> = Vec::new();
    if let Some(node) = tree.as_deref() {
        stack.push((node, 0));
    }
    while let Some((node, depth)) = stack.pop() {
        ret = cmp::max(ret, depth);
        if let Some(left) = node.left.as_deref() {
            stack.push((left, depth + 1));
        }
        if let Some(right) = node.right.as_deref() {
            stack.push((right, depth + 1));
        }
    }
    ret
}

// Copies the tree node by node, keeping its shape. Post-order walk with an explicit stack; the
// copies of finished subtrees wait on `built` until their parent is copied.
pub fn clone<T, U>(tree: &Tree<T, U>) -> Tree<T, U>
where
    T: Clone,
    U: Clone,
{
    enum Visit<'a, T, U> {
        Enter(&'a Tree<T, U>),
        Exit(&'a Node<T, U>),
    }

    let mut stack = vec![Visit::Enter(tree)];
    let mut built: Vec<Tree<T, U>> = Vec::new();
    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(subtree) => match subtree.as_deref() {
                Some(node) => {
                    stack.push(Visit::Exit(node));
                    stack.push(Visit::Enter(&node.right));
                    stack.push(Visit::Enter(&node.left));
                },
                None => built.push(None),
            },
            Visit::Exit(node) => {
                let right = built.pop().flatten();
                let left = built.pop().flatten();
                built.push(Some(Box::new(Node {
                    entry: node.entry.clone(),
                    left,
                    right,
                })));
            },
        }
    }
    built.pop().flatten()
}

// Tears the tree down without recursing, so chain-shaped trees cannot overflow the stack.
pub fn clear<T, U>(tree: &mut Tree<T, U>) {
    let mut stack: Vec<Box<Node<T, U>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
