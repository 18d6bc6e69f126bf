use clap::ValueEnum;
use colored::Colorize;
use othello_core::level::N_LEVELS;
use othello_core::search::Search;
use othello_core::search::options::SearchOptions;
use othello_core::square::Square;
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::Human;
use crate::game::GameState;

const HELP: &str = "\
  d3 | 2 3     play a move (file+rank, or row col from 0)
  pass         pass when no move is available
  undo, u      take back the last move
  new, n       start a new game
  level, l N   change engine level
  mode, m M    set human colors: dark, light, both, none
  go, g        let the engine play the current move
  quit, q      exit";

pub fn ui_loop(options: SearchOptions, mut human: Human) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut game = GameState::new();
    let mut search = Search::new(&options);
    let mut force_engine = false;

    println!("Type 'help' for commands.\n");

    loop {
        game.print();
        println!();

        if game.is_game_over() {
            force_engine = false;
            println!("{}\n", "Game over. 'new' starts another game.".bright_red());
        } else if force_engine || !human.plays(game.side_to_move()) {
            force_engine = false;
            engine_move(&mut game, &mut search)?;
            continue;
        }

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => return Err(err.into()),
        };
        let _ = rl.add_history_entry(&line);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        println!();

        if let Ok(sq) = line.parse::<Square>() {
            match game.make_move(sq) {
                Ok(()) => {
                    search.sync(game.board());
                    announce_passes(&game);
                }
                Err(err) => println!("{}", err.to_string().bright_red()),
            }
            continue;
        }

        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };
        match cmd {
            "help" | "h" | "?" => println!("{HELP}\n"),
            "quit" | "q" => break,
            "new" | "n" => {
                game = GameState::new();
                search.new_game();
            }
            "undo" | "u" => {
                if !game.undo() {
                    println!("Nothing to undo.");
                }
                // Step back to a position where a human is on move.
                while human != Human::None && !human.plays(game.side_to_move()) && game.undo() {}
                search.sync(game.board());
            }
            "pass" => match game.make_pass() {
                Ok(()) => search.sync(game.board()),
                Err(err) => println!("{}", err.to_string().bright_red()),
            },
            "go" | "g" => force_engine = true,
            "level" | "l" => match parts.next().and_then(|s| s.parse::<usize>().ok()) {
                Some(level) if level < N_LEVELS => {
                    let options = SearchOptions {
                        depth_policy: SearchOptions::new(level).depth_policy,
                        ..*search.options()
                    };
                    search = Search::new(&options);
                    println!("Level changed to: {level}");
                }
                _ => println!("Invalid level. Please specify a value between 0-{}.", N_LEVELS - 1),
            },
            "mode" | "m" => match parts.next().map(|s| Human::from_str(s, true)) {
                Some(Ok(mode)) => {
                    human = mode;
                    println!("Mode changed to: {mode:?}");
                }
                _ => println!("Invalid mode. Please specify one of: dark, light, both, none."),
            },
            _ => println!("Unknown command '{cmd}'. Type 'help' for commands."),
        }
    }

    Ok(())
}

fn engine_move(game: &mut GameState, search: &mut Search) -> anyhow::Result<()> {
    let color = game.side_to_move();
    let budget = search.options().time_budget;
    let Some(decision) = search.request_move(game.board(), color, budget) else {
        game.make_pass()?;
        search.sync(game.board());
        println!("{color:?} has no legal move and passes.\n");
        return Ok(());
    };

    game.make_move(decision.square)?;
    search.sync(game.board());
    println!(
        "Computer plays {} (depth {}, value {:.1}, {:.2}s)\n",
        decision.square.to_string().bold(),
        decision.depth_used,
        decision.value,
        decision.elapsed.as_secs_f64()
    );
    announce_passes(game);
    Ok(())
}

fn announce_passes(game: &GameState) {
    if game.trailing_passes() > 0 {
        println!("{:?} has no legal move and passes.\n", game.side_to_move().opposite());
    }
}
