use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::player::Move;

/// Writes one JSON file per game with every turn that was played.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    turns: Vec<TurnRecord>,
}

#[derive(Serialize, Deserialize)]
pub struct GameRecording {
    pub turns: Vec<TurnRecord>,
    pub scores: Vec<usize>,
    pub winner: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: usize,
    pub player: usize,
    #[serde(rename = "move")]
    pub mv: Move,
    pub score: usize,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            turns: Vec::new(),
        })
    }

    pub fn store_turn(&mut self, turn: usize, player: usize, mv: Move, score: usize) {
        self.turns.push(TurnRecord {
            turn,
            player,
            mv,
            score,
        });
    }

    pub fn write_game_recording(&mut self, scores: &[usize], winner: usize) -> anyhow::Result<()> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(filepath)?);
        let recording = GameRecording {
            turns: std::mem::take(&mut self.turns),
            scores: scores.to_vec(),
            winner,
        };
        serde_json::to_writer_pretty(writer, &recording)?;
        self.num += 1;
        Ok(())
    }
}
