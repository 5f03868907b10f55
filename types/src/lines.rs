use crate::{bitboard::BitBoard, square::Square};

pub const NUM_LINES: usize = 8;

/// The winning triples: rows, then columns, then diagonals.
pub const LINES: [[Square; 3]; NUM_LINES] = [
    [Square(0), Square(1), Square(2)],
    [Square(3), Square(4), Square(5)],
    [Square(6), Square(7), Square(8)],
    [Square(0), Square(3), Square(6)],
    [Square(1), Square(4), Square(7)],
    [Square(2), Square(5), Square(8)],
    [Square(0), Square(4), Square(8)],
    [Square(2), Square(4), Square(6)],
];

/// `LINES` as masks, same order.
pub const LINE_MASKS: [BitBoard; NUM_LINES] = {
    let mut masks = [BitBoard::EMPTY; NUM_LINES];
    let mut i = 0;
    while i < NUM_LINES {
        let [a, b, c] = LINES[i];
        masks[i] = BitBoard(a.bitboard().0 | b.bitboard().0 | c.bitboard().0);
        i += 1;
    }
    masks
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_match_triples() {
        for (line, mask) in LINES.iter().zip(LINE_MASKS) {
            assert_eq!(mask.len(), 3);
            assert_eq!(line.iter().copied().collect::<BitBoard>(), mask);
        }
    }

    #[test]
    fn every_square_lies_on_a_line() {
        let covered = LINE_MASKS.iter().fold(BitBoard::EMPTY, |acc, m| acc | *m);
        assert!(covered.is_full());
    }

    #[test]
    fn centre_is_on_four_lines() {
        let centre = LINE_MASKS.iter().filter(|m| m.has(Square(4))).count();
        assert_eq!(centre, 4);
    }
}
