//! A single game driven by text commands.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use whitehat_core::Game;

use crate::command::{Command, Setting, parse_command, parse_move};
use crate::error::SessionError;

/// Configuration knobs adjustable via `set`.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Print the board after every successful command.
    pub show_board: bool,
}

/// Whether the command loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop reading commands.
    Quit,
}

/// A move-file line that was not applied.
#[derive(Debug)]
pub struct RejectedLine {
    /// 1-based line number.
    pub line: usize,
    /// The line as read, trimmed.
    pub text: String,
    /// Why it was skipped.
    pub error: SessionError,
}

/// Outcome of replaying a move file.
#[derive(Debug, Default)]
pub struct ReplayReport {
    /// Number of moves applied.
    pub applied: usize,
    /// Lines skipped, in file order.
    pub rejected: Vec<RejectedLine>,
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "applied {} moves, rejected {}",
            self.applied,
            self.rejected.len()
        )
    }
}

/// Owns one [`Game`] and applies commands to it, one caller at a time.
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// Create a session with a fresh game.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    /// Return the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Return the current configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Read commands from `input` until `quit` or end of input, writing
    /// replies to `out`.
    ///
    /// Rejected commands are reported and the loop carries on. Only I/O
    /// failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<(), SessionError> {
        info!("session started");
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let result = parse_command(trimmed)
                .map_err(SessionError::from)
                .and_then(|cmd| self.execute(cmd, &mut out));
            match result {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e @ SessionError::Io { .. }) => return Err(e),
                Err(e) => {
                    warn!(error = %e, cmd = %trimmed, "command rejected");
                    writeln!(out, "error: {e}")?;
                }
            }
        }
        info!("session finished");
        Ok(())
    }

    /// Apply one command, writing any reply to `out`.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, SessionError> {
        match command {
            Command::Move(mv) => {
                self.game.make_move(mv)?;
                self.report(out)?;
            }
            Command::Castle(mv) => {
                let side = self.game.current_side();
                if !self.game.special_moves().attempt_castling(mv, side) {
                    return Err(SessionError::SpecialMoveDeclined {
                        kind: "castling",
                        mv: mv.notation(),
                    });
                }
                self.game.complete_turn(mv);
                self.report(out)?;
            }
            Command::EnPassant(mv) => {
                let side = self.game.current_side();
                if !self.game.special_moves().attempt_en_passant(mv, side) {
                    return Err(SessionError::SpecialMoveDeclined {
                        kind: "en passant",
                        mv: mv.notation(),
                    });
                }
                self.game.complete_turn(mv);
                self.report(out)?;
            }
            Command::Promote { square, kind } => {
                self.game.special_moves().promote_pawn(square, kind)?;
                writeln!(out, "promoted {square} to {kind}")?;
                self.show_board(out)?;
            }
            Command::Load(path) => {
                let report = self.load(&path)?;
                for rejected in &report.rejected {
                    writeln!(
                        out,
                        "line {}: {}: {}",
                        rejected.line, rejected.text, rejected.error
                    )?;
                }
                writeln!(out, "{report}")?;
                self.report(out)?;
            }
            Command::Reset => {
                self.game.reset();
                info!("game reset");
                self.report(out)?;
            }
            Command::Board => writeln!(out, "{}", self.game.board().pretty())?,
            Command::Status => writeln!(out, "{}", self.game.status())?,
            Command::History => write!(out, "{}", self.game.history())?,
            Command::Set(Setting::ShowBoard(on)) => self.config.show_board = on,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(word) => {
                if !word.is_empty() {
                    warn!(command = %word, "unknown command ignored");
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Replay the move file at `path`. See [`Session::replay`].
    ///
    /// Failing to open or read the file is reported as
    /// [`SessionError::LoadFailed`], which the command loop survives.
    pub fn load(&mut self, path: &Path) -> Result<ReplayReport, SessionError> {
        let load_failed = |source| SessionError::LoadFailed {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(load_failed)?;
        info!(path = %path.display(), "loading moves");
        self.replay(BufReader::new(file)).map_err(|e| match e {
            SessionError::Io { source } => load_failed(source),
            other => other,
        })
    }

    /// Apply one move per line against the current game state.
    ///
    /// Blank lines are skipped. A line that does not parse or is refused is
    /// recorded and skipped; moves already applied stay applied.
    pub fn replay<R: BufRead>(&mut self, reader: R) -> Result<ReplayReport, SessionError> {
        let mut report = ReplayReport::default();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let text = line.trim();
            if text.is_empty() {
                continue;
            }

            let result = parse_move(text)
                .map_err(SessionError::from)
                .and_then(|mv| self.game.make_move(mv).map_err(SessionError::from));
            match result {
                Ok(()) => report.applied += 1,
                Err(error) => {
                    warn!(line = index + 1, text, %error, "move skipped");
                    report.rejected.push(RejectedLine {
                        line: index + 1,
                        text: text.to_string(),
                        error,
                    });
                }
            }
        }
        info!(applied = report.applied, rejected = report.rejected.len(), "replay finished");
        Ok(report)
    }

    fn report<W: Write>(&self, out: &mut W) -> Result<(), SessionError> {
        writeln!(out, "{}", self.game.status())?;
        self.show_board(out)
    }

    fn show_board<W: Write>(&self, out: &mut W) -> Result<(), SessionError> {
        if self.config.show_board {
            writeln!(out, "{}", self.game.board().pretty())?;
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
