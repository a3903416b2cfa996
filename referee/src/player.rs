use blocky::{BlockId, Board, Goal, Rotation, SwapAxis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One move: an action applied to a single block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub block: BlockId,
    pub action: Action,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    RotateClockwise,
    RotateCounterclockwise,
    SwapHorizontal,
    SwapVertical,
    Smash,
}

// Smash last, so that the non-smash strategies can slice it off.
const ACTIONS: [Action; 5] = [
    Action::RotateClockwise,
    Action::RotateCounterclockwise,
    Action::SwapHorizontal,
    Action::SwapVertical,
    Action::Smash,
];

/// How a computer player picks its moves.
#[derive(Copy, Clone, Debug)]
pub enum Strategy {
    /// A uniformly random block and action.
    Random,
    /// Samples `difficulty + 1` candidate moves, evaluates each on a cloned
    /// board and plays the one with the best resulting score. Never
    /// smashes.
    Smart { difficulty: usize },
}

pub struct Player {
    pub id: usize,
    pub goal: Goal,
    pub strategy: Strategy,
}

impl Player {
    pub fn new(id: usize, goal: Goal, strategy: Strategy) -> Self {
        Self { id, goal, strategy }
    }

    /// Picks this player's next move. The board itself is not modified;
    /// smart players evaluate candidates on clones.
    pub fn choose_move(&self, board: &Board, rng: &mut StdRng) -> Move {
        match self.strategy {
            Strategy::Random => random_move(board, rng, &ACTIONS),
            Strategy::Smart { difficulty } => {
                let mut best = random_move(board, rng, &ACTIONS[..4]);
                let mut best_score = self.evaluate(board, best, rng);
                for _ in 0..difficulty {
                    let candidate = random_move(board, rng, &ACTIONS[..4]);
                    let score = self.evaluate(board, candidate, rng);
                    if score > best_score {
                        best = candidate;
                        best_score = score;
                    }
                }
                best
            }
        }
    }

    fn evaluate(&self, board: &Board, mv: Move, rng: &mut StdRng) -> usize {
        let mut scratch = board.clone();
        apply_move(&mut scratch, mv, rng);
        self.goal.score(&scratch.flatten())
    }
}

fn random_move(board: &Board, rng: &mut StdRng, actions: &[Action]) -> Move {
    let ids = board.block_ids();
    Move {
        block: ids[rng.gen_range(0..ids.len())],
        action: *actions.choose(rng).unwrap(),
    }
}

/// Applies a move to the board. The RNG is only consulted for smashes.
pub fn apply_move(board: &mut Board, mv: Move, rng: &mut StdRng) {
    match mv.action {
        Action::RotateClockwise => board.rotate(mv.block, Rotation::Clockwise),
        Action::RotateCounterclockwise => board.rotate(mv.block, Rotation::Counterclockwise),
        Action::SwapHorizontal => board.swap(mv.block, SwapAxis::Horizontal),
        Action::SwapVertical => board.swap(mv.block, SwapAxis::Vertical),
        Action::Smash => board.smash(mv.block, rng),
    }
}
