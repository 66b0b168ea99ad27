use crate::action::{Move, apply_move};
use crate::board::{Board, TOTAL_SLOTS};

use anyhow::{Context, Result};
use smallvec::SmallVec;

pub type NodeId = u32;

/// Ordered children of a node, in the order they are searched.
pub type Children = SmallVec<[Child; 12]>;

/// Exploration state of one child entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Branch {
    Unexplored,
    /// Materialised and currently on the search path.
    Active(NodeId),
    /// Fully searched without reaching a single peg; its nodes are released.
    Exhausted,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Child {
    pub mov: Move,
    pub branch: Branch,
}

/// Result of one traversal step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Descend(NodeId),
    Backtrack(NodeId),
    /// The root has no unexplored children left.
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct GameNode {
    mov: Move,
    board: Board,
    parent: Option<NodeId>,
    children: Children,
}

impl GameNode {
    /// Applies `mov` to `board` and lists every jump available afterwards.
    pub fn new(parent: Option<NodeId>, mov: Move, mut board: Board) -> Result<Self> {
        apply_move(&mut board, &mov)
            .with_context(|| format!("Failed to apply generated move {mov}"))?;
        let children = board
            .all_legal_jumps()
            .into_iter()
            .flat_map(|(from, jumps)| {
                jumps.into_iter().map(move |(over, to)| Child {
                    mov: Move::Jump(from, over, to),
                    branch: Branch::Unexplored,
                })
            })
            .collect();
        Ok(Self {
            mov,
            board,
            parent,
            children,
        })
    }

    pub fn mov(&self) -> Move {
        self.mov
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }
}

/// Arena holding the nodes of the current search path.
///
/// Nodes are pushed in depth-first order, so a node's descendants always sit
/// after it in the arena and releasing a subtree is a truncation.
#[derive(Debug, Clone)]
pub struct GameTree {
    nodes: Vec<GameNode>,
}

impl GameTree {
    pub fn new(first_slot: u8) -> Result<Self> {
        let root = GameNode::new(None, Move::RemoveFirst(first_slot), Board::full())?;
        let mut nodes = Vec::with_capacity(TOTAL_SLOTS);
        nodes.push(root);
        Ok(Self { nodes })
    }

    pub fn root(&self) -> NodeId {
        0
    }

    pub fn node(&self, id: NodeId) -> &GameNode {
        &self.nodes[id as usize]
    }

    /// Number of nodes currently held.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Materialises the first unexplored child of `id`, or backs out of `id`
    /// once all of its children are exhausted.
    pub fn next_node(&mut self, id: NodeId) -> Result<Step> {
        let unexplored = self.nodes[id as usize]
            .children
            .iter()
            .position(|c| c.branch == Branch::Unexplored);
        let Some(pos) = unexplored else {
            return Ok(match self.release(id) {
                Some(parent) => Step::Backtrack(parent),
                None => Step::Exhausted,
            });
        };

        debug_assert_eq!(id as usize, self.nodes.len() - 1);
        let node = &self.nodes[id as usize];
        let mov = node.children[pos].mov;
        let board = Board::new(&node.board.removed_slots())?;
        let child = GameNode::new(Some(id), mov, board)?;
        let child_id = self.nodes.len() as NodeId;
        self.nodes.push(child);
        self.nodes[id as usize].children[pos].branch = Branch::Active(child_id);
        Ok(Step::Descend(child_id))
    }

    /// Drops `id` and everything below it, marking it exhausted in its parent.
    /// The root is never dropped. Returns the parent.
    pub fn release(&mut self, id: NodeId) -> Option<NodeId> {
        let parent = self.nodes[id as usize].parent?;
        self.nodes.truncate(id as usize);
        if let Some(child) = self.nodes[parent as usize]
            .children
            .iter_mut()
            .find(|c| c.branch == Branch::Active(id))
        {
            child.branch = Branch::Exhausted;
        }
        Some(parent)
    }

    /// Moves from the root down to `id`, opening removal first.
    pub fn history(&self, id: NodeId) -> Vec<Move> {
        let mut moves = Vec::with_capacity(TOTAL_SLOTS);
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            moves.push(node.mov);
            current = node.parent;
        }
        moves.reverse();
        moves
    }
}
