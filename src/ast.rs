use crate::error::ParseError;

/// Maximum number of AST nodes a single expression may allocate.
pub const NODE_CAPACITY: usize = 1024;

/// Identifies the operation (or literal) a [`Node`] represents.
///
/// Binary kinds carry their operands as child links in the node itself;
/// `IntLiteral` carries its value in the node's `value` field instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Addition: `left + right`.
    Add,
    /// Subtraction: `left - right`.
    Sub,
    /// Multiplication: `left * right`.
    Mul,
    /// Truncating integer division: `left / right`.
    Div,
    /// Exponentiation by repeated multiplication: `left ^ right`.
    Pow,
    /// A 64-bit signed integer literal.
    IntLiteral,
}

/// A handle to a node inside an [`AstArena`].
///
/// Handles are plain indices; they are only meaningful for the arena that
/// produced them and become dangling once that arena is dropped or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// An abstract syntax tree (AST) node representing part of an expression.
///
/// A node is immutable once allocated: trees are built bottom-up, so both
/// children of a binary node already exist when the parent is created.
/// Binary kinds have both `left` and `right` set; `IntLiteral` has neither
/// and stores its payload in `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    /// The operation this node performs, or `IntLiteral`.
    pub kind:  NodeKind,
    /// Left operand, present for binary kinds only.
    pub left:  Option<NodeId>,
    /// Right operand, present for binary kinds only.
    pub right: Option<NodeId>,
    /// Literal payload, meaningful for `IntLiteral` only.
    pub value: i64,
}

/// A bounded arena owning every node of one expression's AST.
///
/// Nodes are allocated by index and never individually freed; the whole
/// arena is dropped (or [`reset`](Self::reset)) after the expression has
/// been evaluated. Exceeding [`NODE_CAPACITY`] is an allocation failure,
/// not a reallocation.
pub struct AstArena {
    nodes: Vec<Node>,
}

#[allow(clippy::new_without_default)]
impl AstArena {
    /// Creates an empty arena with the full capacity preallocated.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::with_capacity(NODE_CAPACITY), }
    }

    /// Allocates one node and returns its handle.
    ///
    /// # Errors
    /// Returns [`ParseError::OutOfNodes`] when the arena is at capacity.
    pub fn alloc_node(&mut self,
                      kind: NodeKind,
                      left: Option<NodeId>,
                      right: Option<NodeId>,
                      value: i64)
                      -> Result<NodeId, ParseError> {
        if self.nodes.len() >= NODE_CAPACITY {
            return Err(ParseError::OutOfNodes);
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { kind,
                               left,
                               right,
                               value });
        Ok(id)
    }

    /// Allocates a childless node, the form every literal takes.
    ///
    /// # Errors
    /// Returns [`ParseError::OutOfNodes`] when the arena is at capacity.
    pub fn alloc_leaf(&mut self, kind: NodeKind, value: i64) -> Result<NodeId, ParseError> {
        self.alloc_node(kind, None, None, value)
    }

    /// Returns the node behind a handle.
    ///
    /// # Panics
    /// Panics if `id` did not come from this arena.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Number of nodes allocated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Discards all nodes, invalidating every outstanding handle.
    /// The preallocated capacity is kept for reuse.
    pub fn reset(&mut self) {
        self.nodes.clear();
    }
}
