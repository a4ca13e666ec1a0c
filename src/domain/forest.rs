use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::instrument;

use crate::domain::{Catalog, TimeDivision};

/// Data payload for tree nodes representing one division.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub id: String,
    /// Rendered label, e.g. "Jurassic (period, 201.3–145 Mya)"
    pub label: String,
}

impl From<&TimeDivision> for NodeData {
    fn from(division: &TimeDivision) -> Self {
        Self {
            id: division.id.clone(),
            label: division.to_string(),
        }
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TreeNode {
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in catalog order
    pub children: Vec<Index>,
}

/// Arena-based tree holding the hierarchy below one root division.
#[derive(Debug)]
pub struct HierarchyTree {
    arena: Arena<TreeNode>,
    root: Option<Index>,
}

impl Default for HierarchyTree {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchyTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node = TreeNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order traversal, children left to right.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.root.map_or(0, |root| self.calculate_depth(root))
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        self.get_node(node_idx).map_or(0, |node| {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        })
    }

    /// Ids of the finest divisions, the nodes without children.
    pub fn leaf_nodes(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(_, node)| node.data.id.clone())
            .collect()
    }

    pub fn to_tree_string(&self) -> Tree<String> {
        fn build(tree: &HierarchyTree, idx: Index) -> Tree<String> {
            let Some(node) = tree.get_node(idx) else {
                return Tree::new(String::new());
            };
            let leaves: Vec<_> = node.children.iter().map(|&c| build(tree, c)).collect();
            Tree::new(node.data.label.clone()).with_leaves(leaves)
        }

        match self.root {
            Some(root) => build(self, root),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

pub struct TreeIterator<'a> {
    tree: &'a HierarchyTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a HierarchyTree) -> Self {
        Self {
            tree,
            stack: tree.root().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let current_idx = self.stack.pop()?;
        let node = self.tree.get_node(current_idx)?;
        // Push children in reverse order for left-to-right traversal
        for &child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some((current_idx, node))
    }
}

/// One tree per root division, in catalog order.
#[instrument(level = "debug", skip(catalog))]
pub fn build_forest(catalog: &Catalog) -> Vec<HierarchyTree> {
    catalog
        .roots()
        .into_iter()
        .map(|root| build_tree(catalog, root))
        .collect()
}

fn build_tree(catalog: &Catalog, root: &TimeDivision) -> HierarchyTree {
    let mut tree = HierarchyTree::new();
    let mut stack: Vec<(&TimeDivision, Option<Index>)> = vec![(root, None)];

    while let Some((current, parent_idx)) = stack.pop() {
        let current_idx = tree.insert_node(NodeData::from(current), parent_idx);
        // Reverse so children are popped, and therefore attached, in catalog order
        for child in catalog.children_of(&current.id).into_iter().rev() {
            stack.push((child, Some(current_idx)));
        }
    }

    tree
}
