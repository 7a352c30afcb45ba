//! FEN position parsing and formatting.

use std::str::FromStr;

use super::error::FenError;
use super::state::{
    Board, CASTLE_BLACK_KING, CASTLE_BLACK_QUEEN, CASTLE_WHITE_KING, CASTLE_WHITE_QUEEN,
};
use super::types::{Color, Piece, Square};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn piece_from_letter(c: char) -> Option<(Color, Piece)> {
    let piece = match c.to_ascii_lowercase() {
        'p' => Piece::Pawn,
        'n' => Piece::Knight,
        'b' => Piece::Bishop,
        'r' => Piece::Rook,
        'q' => Piece::Queen,
        'k' => Piece::King,
        _ => return None,
    };
    let color = if c.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    Some((color, piece))
}

fn piece_letter(color: Color, piece: Piece) -> char {
    let c = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    match color {
        Color::White => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or(FenError::MissingFields)?;
        let side = fields.next().ok_or(FenError::MissingFields)?;
        let castling = fields.next().ok_or(FenError::MissingFields)?;
        let en_passant = fields.next().ok_or(FenError::MissingFields)?;
        let halfmove = fields.next().unwrap_or("0");
        let fullmove = fields.next().unwrap_or("1");

        let mut board = Board::empty();

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadPlacement(placement.to_string()));
        }
        for (i, rank_text) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file = 0u8;
            for c in rank_text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as u8;
                } else {
                    let (color, piece) =
                        piece_from_letter(c).ok_or(FenError::BadPiece(c))?;
                    if file > 7 {
                        return Err(FenError::BadPlacement(placement.to_string()));
                    }
                    board.pieces[color.index()][piece.index()] |=
                        Square::new(rank, file).bb();
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::BadPlacement(placement.to_string()));
            }
        }

        board.turn = match side {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(FenError::BadSideToMove(side.to_string())),
        };

        if castling != "-" {
            for c in castling.chars() {
                board.castling |= match c {
                    'K' => CASTLE_WHITE_KING,
                    'Q' => CASTLE_WHITE_QUEEN,
                    'k' => CASTLE_BLACK_KING,
                    'q' => CASTLE_BLACK_QUEEN,
                    _ => return Err(FenError::BadCastling(castling.to_string())),
                };
            }
        }

        if en_passant != "-" {
            let sq: Square = en_passant
                .parse()
                .map_err(|_| FenError::BadEnPassant(en_passant.to_string()))?;
            board.en_passant = Some(sq);
        }

        board.halfmove_clock = halfmove.parse().unwrap_or(0);
        board.fullmove_number = fullmove.parse().unwrap_or(1);

        board.refresh_occupancy();
        Ok(board)
    }
}

impl Board {
    /// Format the position as a FEN string.
    #[must_use]
    pub fn fen(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square::new(rank, file)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            out.push(char::from_digit(empty, 10).unwrap_or('8'));
                            empty = 0;
                        }
                        out.push(piece_letter(color, piece));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push(char::from_digit(empty, 10).unwrap_or('8'));
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        if self.castling == 0 {
            out.push('-');
        } else {
            for (bit, c) in [
                (CASTLE_WHITE_KING, 'K'),
                (CASTLE_WHITE_QUEEN, 'Q'),
                (CASTLE_BLACK_KING, 'k'),
                (CASTLE_BLACK_QUEEN, 'q'),
            ] {
                if self.castling & bit != 0 {
                    out.push(c);
                }
            }
        }

        match self.en_passant {
            Some(sq) => {
                out.push(' ');
                out.push_str(&sq.to_string());
            }
            None => out.push_str(" -"),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_fen_roundtrips() {
        let board: Board = START_FEN.parse().expect("valid fen");
        assert_eq!(board.fen(), START_FEN);
        assert_eq!(board.all, Board::new().all);
    }

    #[test]
    fn parses_en_passant_and_clocks() {
        let board: Board = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2"
            .parse()
            .expect("valid fen");
        assert_eq!(board.en_passant, Some(Square::new(5, 3)));
        assert_eq!(board.fullmove_number, 2);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("rnbqkbnr/pppppppp/8/8".parse::<Board>().is_err());
        assert!("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"
            .parse::<Board>()
            .is_err());
        assert!("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse::<Board>()
            .is_err());
        assert!("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBXKBNR w KQkq - 0 1"
            .parse::<Board>()
            .is_err());
    }
}
