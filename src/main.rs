// src/main.rs

use std::io::{self, BufRead, Write};

use chrono::Utc;
use env_logger::Env;
use log::{info, warn};

use relquiz::config::QuizConfig;
use relquiz::core::GameRandom;
use relquiz::game::{Property, Round, SessionStats};

fn main() {
    let config = QuizConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration ({}), using defaults", e);
        QuizConfig::default()
    });

    // Initialize the logger
    let env = Env::default()
        .filter_or("RELQUIZ_LOG_LEVEL", config.log_level.clone())
        .write_style_or("RELQUIZ_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    info!("starting session with set size {}", config.set_size);

    let mut rng = match config.seed {
        Some(seed) => {
            info!("using fixed seed {}", seed);
            GameRandom::from_seed(seed)
        }
        None => GameRandom::new(),
    };

    let mut stats = SessionStats::new();
    let mut round = Round::new(config.set_size, &mut rng);

    println!("\n{}", "=".repeat(60));
    println!("RELATION PROPERTIES GAME");
    println!("{}", "=".repeat(60));
    println!("Decide whether the relation below is reflexive, symmetric");
    println!("and/or transitive, then submit your answer.");
    print_help();
    print_round(&round);
    prompt();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("stdin read failed: {}", e);
                break;
            }
        };

        match line.trim() {
            "r" => round = round.with_guess_toggled(Property::Reflexive),
            "s" => round = round.with_guess_toggled(Property::Symmetric),
            "t" => round = round.with_guess_toggled(Property::Transitive),
            "submit" => {
                stats.record(round.guesses_match());
                round = round.submitted();
            }
            "new" => round = round.next_round(&mut rng),
            "quit" | "exit" => break,
            "" => {
                prompt();
                continue;
            }
            other => {
                println!("Unrecognized input: {:?}", other);
                print_help();
                prompt();
                continue;
            }
        }

        print_round(&round);
        prompt();
    }

    stats.print_summary();

    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("session_stats_{}.json", timestamp);
    match stats.save_to_file(&filename) {
        Ok(_) => println!("\nResults saved to: {}", filename),
        Err(e) => eprintln!("Error saving results: {}", e),
    }
}

fn print_help() {
    println!("\nCommands:");
    println!("  r | s | t  toggle the reflexive / symmetric / transitive guess");
    println!("  submit     check your answer");
    println!("  new        start a new round");
    println!("  quit       leave the game");
}

fn print_round(round: &Round) {
    println!("\n{}", "-".repeat(60));
    println!("Current relation ({} pairs):", round.relation.len());
    if round.relation.is_empty() {
        println!("  (empty)");
    }
    for pair in round.relation.iter() {
        println!("  {}", pair);
    }
    println!("\nYour guesses:");
    println!("  [{}] reflexive", checkbox(round.guesses.reflexive));
    println!("  [{}] symmetric", checkbox(round.guesses.symmetric));
    println!("  [{}] transitive", checkbox(round.guesses.transitive));
    if let Some(message) = &round.message {
        println!("\n{}", message);
    }
}

fn checkbox(on: bool) -> &'static str {
    if on {
        "x"
    } else {
        " "
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
