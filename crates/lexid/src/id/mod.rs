mod lex_id;

pub use lex_id::*;
