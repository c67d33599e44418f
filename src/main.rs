//! Clever Tic-Tac-Toe - Unified CLI
//!
//! Scores, analyses and plays tic-tac-toe positions by exhaustive search.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use clever_tictactoe::{
    Contestant, GameEvent, HumanContestant, NegamaxContestant, Orchestrator, PlayConfig, Player,
    report,
};
use cli::{Cli, Command};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Score { board, player } => {
            init_tracing(&PlayConfig::default());
            report::write_score(&mut std::io::stdout().lock(), &board, player)
        }
        Command::Analyse {
            board,
            player,
            json,
        } => {
            init_tracing(&PlayConfig::default());
            let mut out = std::io::stdout().lock();
            if json {
                report::write_analysis_json(&mut out, &board, player)
            } else {
                report::write_analysis(&mut out, &board, player)
            }
        }
        Command::Suggest { board, player } => {
            init_tracing(&PlayConfig::default());
            report::write_suggestion(&mut std::io::stdout().lock(), &board, player)
        }
        Command::Render { board } => {
            init_tracing(&PlayConfig::default());
            report::write_grid(&mut std::io::stdout().lock(), &board)
        }
        Command::Play { config, human } => run_play(config, human),
    }
}

/// Installs the stderr subscriber, preferring `RUST_LOG` over the config.
fn init_tracing(config: &PlayConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Runs an interactive game between the terminal user and the evaluator.
fn run_play(config_path: Option<PathBuf>, human: Option<Player>) -> Result<()> {
    let mut config = match config_path {
        Some(path) => PlayConfig::from_file(&path)?,
        None => PlayConfig::default(),
    };
    if let Some(human) = human {
        config = config.with_human_player(human);
    }
    init_tracing(&config);
    info!(human_player = %config.human_player(), "Starting interactive game");

    let human: Box<dyn Contestant> = Box::new(HumanContestant::new(
        "You",
        std::io::stdin().lock(),
        std::io::stdout(),
    ));
    let computer: Box<dyn Contestant> = if *config.show_analysis() {
        Box::new(NegamaxContestant::with_report("Computer", std::io::stdout()))
    } else {
        Box::new(NegamaxContestant::new("Computer"))
    };
    let (player_one, player_two) = match config.human_player() {
        Player::One => (human, computer),
        Player::Two => (computer, human),
    };

    let mut orchestrator = Orchestrator::new(player_one, player_two);
    println!("{}\n", orchestrator.board().grid());
    orchestrator.run(|event| {
        match event {
            GameEvent::Turn { name, player } => {
                println!("{} to move as {}.", name, player.mark());
            }
            GameEvent::MoveMade {
                player,
                index,
                board,
            } => {
                println!("{} played cell {}.\n\n{}\n", player.mark(), index, board.grid());
            }
            GameEvent::GameOver { winner: Some(winner) } => {
                println!("{} wins!", winner.mark());
            }
            GameEvent::GameOver { winner: None } => println!("It's a draw."),
        }
        Ok(())
    })?;

    Ok(())
}
