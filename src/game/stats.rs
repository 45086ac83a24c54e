// src/game/stats.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Running tally of one interactive session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    pub started_at: DateTime<Utc>,
    pub rounds_submitted: u64,
    pub correct: u64,
    pub incorrect: u64,
}

impl SessionStats {
    pub fn new() -> Self {
        SessionStats {
            started_at: Utc::now(),
            rounds_submitted: 0,
            correct: 0,
            incorrect: 0,
        }
    }

    pub fn record(&mut self, correct: bool) {
        self.rounds_submitted += 1;
        if correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    pub fn save_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let stats = serde_json::from_str(&json)?;
        Ok(stats)
    }

    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(60));
        println!("SESSION RESULTS");
        println!("{}", "=".repeat(60));
        println!("Started:          {}", self.started_at);
        println!("Rounds submitted: {}", self.rounds_submitted);
        println!("Correct:          {}", self.correct);
        println!("Incorrect:        {}", self.incorrect);
        if self.rounds_submitted > 0 {
            println!(
                "Accuracy:         {:.1}%",
                100.0 * self.correct as f64 / self.rounds_submitted as f64
            );
        }
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
