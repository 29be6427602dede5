use std::num::NonZeroUsize;

// Tokenizer
pub const DEFAULT_STOP_WORDS: &[&str] = &["the", "and", "of"];
pub const TOKEN_SEPARATOR: char = ' ';

// Built-in cheat sheet, used when no `--data` file is given
pub const BUILTIN_DATASET: &str = include_str!("../data/cheatsheet.json");

// Environment
/// Set to `true` to turn on debug logging.
pub const DEBUG_ENV: &str = "H_DEBUG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Server
pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:3000";
pub const SERVER_TOP_K: NonZeroUsize = match NonZeroUsize::new(15) {
    Some(n) => n,
    None => panic!("server result limit must be non-zero"),
};
