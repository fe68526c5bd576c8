//! Parse-tree arena.
//!
//! Nodes are stored flat and addressed by [`NodeId`]. Each node records its
//! rule, its parent index and an ordered list of children, where a child is
//! either another node or a token index into the document's
//! [`TokenStream`](crate::TokenStream). Upward navigation (ancestor rules,
//! common ancestors) only follows parent indices; nothing is reference
//! counted.

use std::fmt;

/// Index into the parse-tree arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node of every tree.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Opaque rule tag assigned by the frontend. `0` means "no rule".
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct RuleType(u16);

impl RuleType {
    /// Absent rule (above the root, or token outside the tree).
    pub const NONE: RuleType = RuleType(0);

    #[inline]
    pub const fn new(raw: u16) -> Self {
        RuleType(raw)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleType({})", self.0)
    }
}

/// A child slot of a node.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Child {
    Node(NodeId),
    /// Index into the token stream.
    Token(u32),
}

/// One arena entry.
#[derive(Clone, Debug)]
pub struct Node {
    pub rule: RuleType,
    pub parent: Option<NodeId>,
    pub children: Vec<Child>,
}

/// Where a token sits in the tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Leaf {
    pub parent: NodeId,
    /// Position of the token among its parent's children.
    pub child_index: u32,
}

/// Arena-backed parse tree.
#[derive(Clone, Debug)]
pub struct ParseTree {
    nodes: Vec<Node>,
    /// Indexed by token index; `None` for hidden tokens.
    leaves: Vec<Option<Leaf>>,
}

impl ParseTree {
    /// Create a tree holding only a root node of `root_rule`.
    pub fn new(root_rule: RuleType) -> Self {
        ParseTree {
            nodes: vec![Node {
                rule: root_rule,
                parent: None,
                children: Vec::new(),
            }],
            leaves: Vec::new(),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of nodes (always at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Trees always contain their root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append a new node as the last child of `parent`.
    pub fn push_node(&mut self, parent: NodeId, rule: RuleType) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(Node {
            rule,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(Child::Node(id));
        id
    }

    /// Append the token at `token_index` as the last child of `parent`.
    pub fn push_token(&mut self, parent: NodeId, token_index: usize) {
        let children = &mut self.nodes[parent.index()].children;
        let child_index = u32::try_from(children.len()).unwrap_or(u32::MAX);
        children.push(Child::Token(u32::try_from(token_index).unwrap_or(u32::MAX)));
        if self.leaves.len() <= token_index {
            self.leaves.resize(token_index + 1, None);
        }
        self.leaves[token_index] = Some(Leaf {
            parent,
            child_index,
        });
    }

    /// Replace the rule of a node once the parser knows what it is.
    pub fn set_rule(&mut self, id: NodeId, rule: RuleType) {
        self.nodes[id.index()].rule = rule;
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn rule(&self, id: NodeId) -> RuleType {
        self.nodes[id.index()].rule
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[Child] {
        &self.nodes[id.index()].children
    }

    /// Tree position of the token at `token_index`, if it is in the tree.
    #[inline]
    pub fn leaf(&self, token_index: usize) -> Option<Leaf> {
        self.leaves.get(token_index).copied().flatten()
    }

    /// Iterate from `id` (inclusive) up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }

    /// Rule of the ancestor `levels` steps above `id` (`0` is `id` itself),
    /// or [`RuleType::NONE`] past the root.
    pub fn ancestor_rule(&self, id: NodeId, levels: usize) -> RuleType {
        self.ancestors(id)
            .nth(levels)
            .map_or(RuleType::NONE, |n| self.rule(n))
    }

    /// Number of edges between `id` and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count() - 1
    }

    /// Nearest node that is an ancestor of both `a` and `b` (inclusive),
    /// together with the number of steps from `a` up to it.
    pub fn common_ancestor(&self, a: NodeId, b: NodeId) -> (NodeId, usize) {
        let (mut x, mut y) = (a, b);
        let (mut dx, mut dy) = (self.depth(a), self.depth(b));
        let mut steps = 0;
        while dx > dy {
            x = self.parent(x).unwrap_or(NodeId::ROOT);
            dx -= 1;
            steps += 1;
        }
        while dy > dx {
            y = self.parent(y).unwrap_or(NodeId::ROOT);
            dy -= 1;
        }
        while x != y {
            x = self.parent(x).unwrap_or(NodeId::ROOT);
            y = self.parent(y).unwrap_or(NodeId::ROOT);
            steps += 1;
        }
        (x, steps)
    }
}

/// Iterator returned by [`ParseTree::ancestors`].
pub struct Ancestors<'a> {
    tree: &'a ParseTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}
