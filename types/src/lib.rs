// NOTE Squares are stored as `u8` and boards as `u16` masks. Every index
// produced here is below 9, so the narrowing casts are lossless.
pub mod bitboard;
pub mod lines;
pub mod mark;
pub mod square;

pub use bitboard::*;
pub use lines::*;
pub use mark::*;
pub use square::*;
