use blocky::{Board, Goal, GoalKind, COLOUR_LIST};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use crate::player::{apply_move, Player, Strategy};
use crate::recording::Recorder;

/// Settings for one game.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub max_depth: u8,
    pub num_random_players: usize,
    pub smart_player_difficulties: Vec<usize>,
}

impl GameConfig {
    pub fn num_players(&self) -> usize {
        self.num_random_players + self.smart_player_difficulties.len()
    }
}

/// Final standing of one game. Scores are indexed by player.
pub struct GameOutcome {
    pub scores: Vec<usize>,
    pub winner_idx: usize,
}

pub struct Game {
    board: Board,
    players: Vec<Player>,
}

impl Game {
    /// Sets up a random board and the configured players.
    ///
    /// All players share one randomly chosen goal kind, each with a random
    /// palette colour; every goal is announced at startup. A game needs at
    /// least one player.
    pub fn new(config: &GameConfig, rng: &mut StdRng) -> anyhow::Result<Self> {
        if config.num_players() == 0 {
            anyhow::bail!("At least one player is required");
        }
        let board = Board::random(config.max_depth, rng)?;
        let kind = if rng.gen::<bool>() {
            GoalKind::Blob
        } else {
            GoalKind::Perimeter
        };

        let mut strategies = vec![Strategy::Random; config.num_random_players];
        strategies.extend(
            config
                .smart_player_difficulties
                .iter()
                .map(|&difficulty| Strategy::Smart { difficulty }),
        );

        let mut players = Vec::with_capacity(strategies.len());
        for (id, strategy) in strategies.into_iter().enumerate() {
            let colour = COLOUR_LIST[rng.gen_range(0..COLOUR_LIST.len())];
            let player = Player::new(id, Goal::new(kind, colour), strategy);
            info!(player = id + 1, goal = %player.goal.description(), "player goal");
            players.push(player);
        }

        Ok(Self { board, players })
    }

    /// Runs the game, giving each player `num_turns` turns in order.
    pub fn run(
        &mut self,
        num_turns: usize,
        rng: &mut StdRng,
        recorder: &mut Option<Recorder>,
    ) -> anyhow::Result<GameOutcome> {
        let num_players = self.players.len();
        for turn in 0..num_turns * num_players {
            let player = &self.players[turn % num_players];
            debug!(player = player.id + 1, turn = turn + 1, "turn");
            let mv = player.choose_move(&self.board, rng);
            apply_move(&mut self.board, mv, rng);
            // Score from a fresh snapshot of the board after the move.
            let score = player.goal.score(&self.board.flatten());
            debug!(player = player.id + 1, score, "score after move");
            if let Some(rec) = recorder {
                rec.store_turn(turn + 1, player.id + 1, mv, score);
            }
        }

        let scores: Vec<usize> = self
            .players
            .iter()
            .map(|player| player.goal.score(&self.board.flatten()))
            .collect();

        // Highest score wins; the earlier player on ties.
        let mut winner_idx = 0;
        for (idx, &score) in scores.iter().enumerate() {
            if score > scores[winner_idx] {
                winner_idx = idx;
            }
        }

        if let Some(rec) = recorder {
            rec.write_game_recording(&scores, winner_idx)?;
        }

        Ok(GameOutcome { scores, winner_idx })
    }
}
