//! Arena - append-only node store for the tree calculus.

use crate::error::Defect;
use std::fmt;

/// Lightweight arena identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TreeId(pub u32);

impl TreeId {
    /// The unique leaf, present in every arena.
    pub const LEAF: TreeId = TreeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The three node shapes. Nothing else exists in the computational model;
/// booleans, lists, naturals and strings are all readings of these.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Node {
    Leaf,
    Stem(TreeId),
    Fork(TreeId, TreeId),
}

/// Append-only store of immutable nodes. Identities never move and are
/// never freed; index 0 is the one and only leaf. Children always point at
/// earlier identities, so the store is a DAG read as a tree.
#[derive(Clone)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(1024);
        nodes.push(Node::Leaf);
        Self { nodes }
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Identity of the leaf. Never allocates.
    pub fn leaf(&self) -> TreeId {
        TreeId::LEAF
    }

    pub fn stem(&mut self, u: TreeId) -> TreeId {
        debug_assert!(u.index() < self.nodes.len(), "stem child {u} out of bounds");
        self.push(Node::Stem(u))
    }

    pub fn fork(&mut self, u: TreeId, v: TreeId) -> TreeId {
        debug_assert!(u.index() < self.nodes.len(), "fork left child {u} out of bounds");
        debug_assert!(v.index() < self.nodes.len(), "fork right child {v} out of bounds");
        self.push(Node::Fork(u, v))
    }

    fn push(&mut self, node: Node) -> TreeId {
        let id = TreeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Checked shape lookup. A dangling identity is a representation defect,
    /// not a caller error: it cannot arise through this module's API.
    pub fn node(&self, id: TreeId) -> Result<Node, Defect> {
        self.nodes.get(id.index()).copied().ok_or(Defect {
            id,
            size: self.nodes.len(),
        })
    }

    /// Dispatch on the shape at `x`, invoking exactly one handler with the
    /// shape's children.
    pub fn triage<T>(
        &self,
        on_leaf: impl FnOnce() -> T,
        on_stem: impl FnOnce(TreeId) -> T,
        on_fork: impl FnOnce(TreeId, TreeId) -> T,
        x: TreeId,
    ) -> Result<T, Defect> {
        Ok(match self.node(x)? {
            Node::Leaf => on_leaf(),
            Node::Stem(u) => on_stem(u),
            Node::Fork(u, v) => on_fork(u, v),
        })
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
