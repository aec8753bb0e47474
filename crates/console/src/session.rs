//! One game driven by text commands.
//!
//! Stands in for a graphical front-end: a move is a two-square selection,
//! checked against the engine's legal moves before it is applied.

use std::io::Write;

use anyhow::Result;
use chess_rules::{Board, Color, GameState, Move, RulesError, Square};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::ConsoleConfig;

/// Whether the input loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Read-only view of the game handed out by the `json` command.
#[derive(Serialize)]
struct Snapshot<'a> {
    board: &'a Board,
    side_to_move: Color,
    in_check: bool,
    history: &'a [Move],
}

pub struct Session {
    game: GameState,
    config: ConsoleConfig,
}

impl Session {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            game: GameState::new(),
            config,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Prints the opening position and prompt.
    pub fn start(&mut self, out: &mut impl Write) -> Result<()> {
        if self.config.show_board {
            writeln!(out, "{}", self.game.board())?;
        }
        self.report_turn(out)
    }

    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["quit" | "exit"] => return Ok(Flow::Quit),
            ["help"] => print_help(out)?,
            ["board"] => writeln!(out, "{}", self.game.board())?,
            ["moves"] => self.print_moves(out)?,
            ["json"] => {
                let snapshot = Snapshot {
                    board: self.game.board(),
                    side_to_move: self.game.side_to_move(),
                    in_check: self.game.in_check(),
                    history: self.game.history(),
                };
                writeln!(out, "{}", serde_json::to_string(&snapshot)?)?;
            }
            ["undo"] => match self.game.undo_move() {
                Some(mv) => {
                    writeln!(out, "took back {mv}")?;
                    self.after_change(out)?;
                }
                None => writeln!(out, "nothing to undo")?,
            },
            [both] if both.len() == 4 && both.is_ascii() => {
                self.select(&both[..2], &both[2..], out)?
            }
            [from, to] => self.select(from, to, out)?,
            _ => writeln!(out, "unknown command {line:?}, type 'help'")?,
        }
        Ok(Flow::Continue)
    }

    /// The two-click selection: build a move from the clicked squares and
    /// hand it to the engine, which accepts it only if it is legal.
    fn select(&mut self, from: &str, to: &str, out: &mut impl Write) -> Result<()> {
        let (from, to) = match (from.parse::<Square>(), to.parse::<Square>()) {
            (Ok(f), Ok(t)) => (f, t),
            (Err(e), _) | (_, Err(e)) => {
                writeln!(out, "{e}")?;
                return Ok(());
            }
        };
        let Some(mv) = Move::new(from, to, self.game.board()) else {
            writeln!(out, "no piece on {from}")?;
            return Ok(());
        };
        debug!(notation = %mv.notation(), "selected");

        match self.game.apply_move(mv) {
            Ok(applied) => {
                match applied.piece_captured {
                    Some(captured) => {
                        writeln!(out, "{} {applied} takes {captured}", applied.piece_moved)?
                    }
                    None => writeln!(out, "{} {applied}", applied.piece_moved)?,
                }
                self.after_change(out)
            }
            Err(e @ RulesError::IllegalMove { .. }) => {
                writeln!(out, "{e}")?;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn after_change(&mut self, out: &mut impl Write) -> Result<()> {
        if self.config.show_board {
            writeln!(out, "{}", self.game.board())?;
        }
        self.report_turn(out)
    }

    fn report_turn(&mut self, out: &mut impl Write) -> Result<()> {
        let side = self.game.side_to_move();
        let in_check = self.game.in_check();
        let count = self.game.valid_moves().len();
        info!(%side, in_check, legal_moves = count, ply = self.game.history().len(), "turn");

        match (in_check, count) {
            (true, 0) => writeln!(out, "{side} to move: in check, no legal moves")?,
            (false, 0) => writeln!(out, "{side} to move: no legal moves")?,
            (true, _) => writeln!(out, "{side} to move: in check")?,
            (false, _) => writeln!(out, "{side} to move")?,
        }
        if self.config.show_moves {
            self.print_moves(out)?;
        }
        Ok(())
    }

    fn print_moves(&mut self, out: &mut impl Write) -> Result<()> {
        let list: Vec<String> = self.game.valid_moves().iter().map(Move::notation).collect();
        writeln!(out, "{} legal: {}", list.len(), list.join(" "))?;
        Ok(())
    }
}

fn print_help(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  e2e4 | e2 e4   move the piece on the first square to the second")?;
    writeln!(out, "  undo           take back the last move")?;
    writeln!(out, "  moves          list legal moves")?;
    writeln!(out, "  board          print the board")?;
    writeln!(out, "  json           print the game as JSON")?;
    writeln!(out, "  quit           leave")?;
    Ok(())
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
