//! Category Index - Binary search tree keyed by category name.
//!
//! Tree nodes live in a `Vec` and point at each other by index, the same
//! way item nodes live in the arena. Nodes are never deleted, so a node
//! index stays valid for the lifetime of the index.

use crate::arena::NULL_INDEX;
use crate::item_list::{ItemList, LinkKind};

/// Index of a node in the category tree
pub type NodeIndex = u32;

/// A category and the items that belong to it.
#[derive(Clone, Debug)]
pub struct CategoryNode {
    /// BST key
    pub category: String,
    /// Items of this category, in insertion order
    pub items: ItemList,
    left: NodeIndex,
    right: NodeIndex,
}

impl CategoryNode {
    fn new(category: String) -> Self {
        Self {
            category,
            items: ItemList::new(LinkKind::Category),
            left: NULL_INDEX,
            right: NULL_INDEX,
        }
    }
}

/// Unbalanced BST over category names.
#[derive(Clone, Debug)]
pub struct CategoryIndex {
    nodes: Vec<CategoryNode>,
    root: NodeIndex,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: NULL_INDEX,
        }
    }

    /// Number of categories ever seen
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert `category`, or return the existing node if already present.
    ///
    /// # Complexity
    /// O(depth)
    pub fn insert(&mut self, category: &str) -> NodeIndex {
        let mut cursor = self.root;
        let mut parent = NULL_INDEX;
        let mut go_left = false;

        while cursor != NULL_INDEX {
            let node = &self.nodes[cursor as usize];
            match category.cmp(node.category.as_str()) {
                std::cmp::Ordering::Equal => return cursor,
                std::cmp::Ordering::Less => {
                    parent = cursor;
                    go_left = true;
                    cursor = node.left;
                }
                std::cmp::Ordering::Greater => {
                    parent = cursor;
                    go_left = false;
                    cursor = node.right;
                }
            }
        }

        let index = self.nodes.len() as NodeIndex;
        self.nodes.push(CategoryNode::new(category.to_owned()));

        if parent == NULL_INDEX {
            self.root = index;
        } else if go_left {
            self.nodes[parent as usize].left = index;
        } else {
            self.nodes[parent as usize].right = index;
        }

        index
    }

    /// Find the node for `category`.
    ///
    /// # Complexity
    /// O(depth)
    pub fn find(&self, category: &str) -> Option<NodeIndex> {
        let mut cursor = self.root;
        while cursor != NULL_INDEX {
            let node = &self.nodes[cursor as usize];
            cursor = match category.cmp(node.category.as_str()) {
                std::cmp::Ordering::Equal => return Some(cursor),
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Greater => node.right,
            };
        }
        None
    }

    #[inline]
    pub fn node(&self, index: NodeIndex) -> &CategoryNode {
        &self.nodes[index as usize]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, index: NodeIndex) -> &mut CategoryNode {
        &mut self.nodes[index as usize]
    }

    /// Items list of `category`, if the category has been seen.
    pub fn items(&self, category: &str) -> Option<&ItemList> {
        self.find(category).map(|idx| &self.node(idx).items)
    }

    /// In-order traversal: categories in ascending lexical order.
    pub fn iter(&self) -> InOrder<'_> {
        let mut iter = InOrder {
            index: self,
            stack: Vec::new(),
        };
        iter.push_left(self.root);
        iter
    }

    /// Total number of items linked under every category
    pub fn item_count(&self) -> usize {
        self.nodes.iter().map(|n| n.items.len()).sum()
    }

    /// Depth of the tree (0 when empty)
    #[cfg(test)]
    fn depth(&self) -> usize {
        fn walk(index: &CategoryIndex, node: NodeIndex) -> usize {
            if node == NULL_INDEX {
                return 0;
            }
            let n = index.node(node);
            1 + walk(index, n.left).max(walk(index, n.right))
        }
        walk(self, self.root)
    }
}

impl Default for CategoryIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// In-order iterator over category nodes, driven by an explicit stack.
pub struct InOrder<'a> {
    index: &'a CategoryIndex,
    stack: Vec<NodeIndex>,
}

impl InOrder<'_> {
    fn push_left(&mut self, mut cursor: NodeIndex) {
        while cursor != NULL_INDEX {
            self.stack.push(cursor);
            cursor = self.index.node(cursor).left;
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a CategoryNode;

    fn next(&mut self) -> Option<&'a CategoryNode> {
        let current = self.stack.pop()?;
        let node = self.index.node(current);
        self.push_left(node.right);
        Some(node)
    }
}
