use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{BoardError, Colour, Grid, COLOUR_LIST};

/// Smallest allowed subdivision depth.
pub const MIN_DEPTH: u8 = 2;
/// Largest allowed subdivision depth. Bounds the flattened grid at 32x32.
pub const MAX_DEPTH: u8 = 5;

/// Identifies one block within a [`Board`]'s node arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockId(u32);

/// Direction for [`Board::rotate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    Clockwise,
    Counterclockwise,
}

/// Axis for [`Board::swap`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapAxis {
    Horizontal,
    Vertical,
}

#[derive(Copy, Clone, Debug)]
struct Node {
    level: u8,
    kind: NodeKind,
}

#[derive(Copy, Clone, Debug)]
enum NodeKind {
    Leaf(Colour),
    /// Children in quadrant order: upper-left, upper-right, lower-left,
    /// lower-right.
    Split([u32; 4]),
}

/// A recursively subdivided square board.
///
/// The subdivision tree is stored as a node arena with integer child
/// indices, so cloning a board for lookahead is a flat memcpy of the arena
/// rather than a pointer chase.
#[derive(Clone, Debug)]
pub struct Board {
    nodes: Vec<Node>,
    root: u32,
    max_depth: u8,
}

/// A plain tree description of a board, used to build specific positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockTree {
    Leaf(Colour),
    Split(Box<[BlockTree; 4]>),
}

impl BlockTree {
    /// Depth of the deepest subdivision, with a lone leaf at depth 0.
    pub fn depth(&self) -> u8 {
        match self {
            BlockTree::Leaf(_) => 0,
            BlockTree::Split(children) => {
                1 + children.iter().map(BlockTree::depth).max().unwrap_or(0)
            }
        }
    }
}

impl Board {
    /// Generates a random board, subdividing more aggressively near the
    /// root: a block at level `l < max_depth` splits with probability
    /// `exp(-0.25 * l)`, otherwise it becomes a leaf with a random palette
    /// colour.
    pub fn random(max_depth: u8, rng: &mut impl Rng) -> Result<Self, BoardError> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&max_depth) {
            return Err(BoardError::DepthOutOfRange { max_depth });
        }
        let mut board = Self {
            nodes: Vec::new(),
            root: 0,
            max_depth,
        };
        board.root = board.generate(0, rng);
        Ok(board)
    }

    /// Builds a board from a tree description.
    pub fn from_tree(tree: &BlockTree, max_depth: u8) -> Result<Self, BoardError> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&max_depth) {
            return Err(BoardError::DepthOutOfRange { max_depth });
        }
        let depth = tree.depth();
        if depth > max_depth {
            return Err(BoardError::TreeTooDeep { depth, max_depth });
        }
        let mut board = Self {
            nodes: Vec::new(),
            root: 0,
            max_depth,
        };
        board.root = board.build(tree, 0);
        Ok(board)
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Every block currently reachable from the root, the root included.
    ///
    /// Smashing can leave unreachable nodes behind in the arena, so this
    /// walks the tree rather than enumerating arena slots.
    pub fn block_ids(&self) -> Vec<BlockId> {
        let mut ids = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            ids.push(BlockId(id));
            if let NodeKind::Split(children) = self.nodes[id as usize].kind {
                stack.extend(children);
            }
        }
        ids
    }

    /// The subdivision level of a block; the root is at level 0.
    pub fn level(&self, id: BlockId) -> u8 {
        self.nodes[id.0 as usize].level
    }

    /// Projects the board onto a uniform grid of side `2^max_depth`.
    ///
    /// Every finest-resolution cell takes the colour of the smallest
    /// sub-block containing it. Purely a read; the board is not modified.
    pub fn flatten(&self) -> Grid {
        let side = 1usize << self.max_depth;
        let mut grid = Grid::filled(side, COLOUR_LIST[0]);
        self.paint(&mut grid, self.root, 0, 0, side);
        grid
    }

    /// Rotates a block a quarter turn, recursing into its subtrees so that
    /// their orientation follows.
    ///
    /// Rotating a leaf is a no-op.
    pub fn rotate(&mut self, id: BlockId, rotation: Rotation) {
        if let NodeKind::Split(children) = self.nodes[id.0 as usize].kind {
            let rotated = match rotation {
                Rotation::Clockwise => [children[2], children[0], children[3], children[1]],
                Rotation::Counterclockwise => [children[1], children[3], children[0], children[2]],
            };
            self.nodes[id.0 as usize].kind = NodeKind::Split(rotated);
            for child in rotated {
                self.rotate(BlockId(child), rotation);
            }
        }
    }

    /// Swaps a block's two halves along the given axis. Subtrees move
    /// intact; swapping a leaf is a no-op.
    pub fn swap(&mut self, id: BlockId, axis: SwapAxis) {
        if let NodeKind::Split(children) = self.nodes[id.0 as usize].kind {
            let swapped = match axis {
                SwapAxis::Horizontal => [children[1], children[0], children[3], children[2]],
                SwapAxis::Vertical => [children[2], children[3], children[0], children[1]],
            };
            self.nodes[id.0 as usize].kind = NodeKind::Split(swapped);
        }
    }

    /// Replaces a block with a freshly generated random subtree at the same
    /// level.
    pub fn smash(&mut self, id: BlockId, rng: &mut impl Rng) {
        let level = self.nodes[id.0 as usize].level;
        let new_id = self.generate(level, rng);
        let node = self.nodes[new_id as usize];
        self.nodes[id.0 as usize] = node;
    }

    fn generate(&mut self, level: u8, rng: &mut impl Rng) -> u32 {
        if level < self.max_depth && rng.gen::<f64>() < (-0.25 * f64::from(level)).exp() {
            let children = [
                self.generate(level + 1, rng),
                self.generate(level + 1, rng),
                self.generate(level + 1, rng),
                self.generate(level + 1, rng),
            ];
            self.push(Node {
                level,
                kind: NodeKind::Split(children),
            })
        } else {
            let colour = COLOUR_LIST[rng.gen_range(0..COLOUR_LIST.len())];
            self.push(Node {
                level,
                kind: NodeKind::Leaf(colour),
            })
        }
    }

    fn build(&mut self, tree: &BlockTree, level: u8) -> u32 {
        match tree {
            BlockTree::Leaf(colour) => self.push(Node {
                level,
                kind: NodeKind::Leaf(*colour),
            }),
            BlockTree::Split(children) => {
                let ids = [
                    self.build(&children[0], level + 1),
                    self.build(&children[1], level + 1),
                    self.build(&children[2], level + 1),
                    self.build(&children[3], level + 1),
                ];
                self.push(Node {
                    level,
                    kind: NodeKind::Split(ids),
                })
            }
        }
    }

    fn push(&mut self, node: Node) -> u32 {
        let id = self.nodes.len() as u32;
        self.nodes.push(node);
        id
    }

    fn paint(&self, grid: &mut Grid, id: u32, row: usize, col: usize, size: usize) {
        match self.nodes[id as usize].kind {
            NodeKind::Leaf(colour) => {
                for r in row..row + size {
                    for c in col..col + size {
                        grid.set(r, c, colour);
                    }
                }
            }
            NodeKind::Split(children) => {
                let half = size / 2;
                self.paint(grid, children[0], row, col, half);
                self.paint(grid, children[1], row, col + half, half);
                self.paint(grid, children[2], row + half, col, half);
                self.paint(grid, children[3], row + half, col + half, half);
            }
        }
    }
}
