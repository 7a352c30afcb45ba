//! Error types for board construction and move parsing.

use std::fmt;

/// A square name that is not of the form `[a-h][1-8]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareParseError(pub String);

impl fmt::Display for SquareParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid square '{}'", self.0)
    }
}

impl std::error::Error for SquareParseError {}

/// Failure while parsing a FEN position string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Fewer fields than the four mandatory ones.
    MissingFields,
    /// Piece placement does not describe 8 ranks of 8 squares.
    BadPlacement(String),
    /// Unknown piece letter in the placement field.
    BadPiece(char),
    /// Side-to-move field is neither `w` nor `b`.
    BadSideToMove(String),
    /// Castling field contains a letter outside `KQkq-`.
    BadCastling(String),
    /// En-passant field is neither `-` nor a square name.
    BadEnPassant(String),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MissingFields => write!(f, "FEN has too few fields"),
            FenError::BadPlacement(s) => write!(f, "bad piece placement '{s}'"),
            FenError::BadPiece(c) => write!(f, "unknown piece letter '{c}'"),
            FenError::BadSideToMove(s) => write!(f, "bad side to move '{s}'"),
            FenError::BadCastling(s) => write!(f, "bad castling rights '{s}'"),
            FenError::BadEnPassant(s) => write!(f, "bad en passant square '{s}'"),
        }
    }
}

impl std::error::Error for FenError {}

/// Failure while parsing a coordinate-notation move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Text too short or malformed square names.
    BadFormat(String),
    /// Fifth character is not a promotion piece letter.
    BadPromotion(char),
    /// Well-formed text, but no legal move in the position matches it.
    NotLegal(String),
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::BadFormat(s) => write!(f, "malformed move '{s}'"),
            MoveParseError::BadPromotion(c) => write!(f, "bad promotion letter '{c}'"),
            MoveParseError::NotLegal(s) => write!(f, "move '{s}' is not legal here"),
        }
    }
}

impl std::error::Error for MoveParseError {}
