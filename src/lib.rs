//! Cheat-sheet lookup: rank shortcut records against a free-text query.
//!
//! Three matchers score every record independently (exact shortcut,
//! word overlap, command acronym) and [`search::rank`] sums and orders them.

pub mod constants;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod output;
pub mod record;
pub mod search;
pub mod text;

pub use dataset::Dataset;
pub use error::DatasetError;
pub use record::Record;
pub use search::{rank, Hit, SearchOutcome};
