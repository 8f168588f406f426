//! Session errors.

use std::path::PathBuf;

use whitehat_core::{InvalidMove, PieceKind};

/// Malformed input caught before it reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    /// Move text is not four characters of the form `e2e4`.
    #[error("move must be 4 characters like e2e4, got \"{text}\"")]
    MalformedMove {
        /// The offending text.
        text: String,
    },

    /// Square text is not of the form `e8`.
    #[error("invalid square: \"{text}\"")]
    MalformedSquare {
        /// The offending text.
        text: String,
    },

    /// A piece type name was not recognized.
    #[error("unknown piece type: \"{name}\"")]
    UnknownPieceKind {
        /// The offending name.
        name: String,
    },

    /// Pawns may not promote to this kind.
    #[error("cannot promote to {kind}")]
    ForbiddenPromotion {
        /// The requested kind.
        kind: PieceKind,
    },

    /// A command was given too few arguments.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command keyword.
        command: &'static str,
    },

    /// A `set` command named an unknown setting or a bad value.
    #[error("invalid setting: \"{text}\"")]
    InvalidSetting {
        /// The arguments after `set`.
        text: String,
    },
}

/// Errors that can occur while driving a game from text.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The input was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// The engine refused the move.
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),

    /// Castling or en passant preconditions did not hold.
    #[error("{kind} not possible for {mv}")]
    SpecialMoveDeclined {
        /// `castling` or `en passant`.
        kind: &'static str,
        /// The move text as given.
        mv: String,
    },

    /// A move file could not be opened or read.
    #[error("cannot load {}: {source}", path.display())]
    LoadFailed {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Reading input or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
