//! Landmark-based source splicing.
//!
//! Aggregator files are edited without parsing Go. A *landmark* is a line
//! containing a known substring; new lines are inserted either right after
//! it or just before the `}` closing the block it opens. Every edit is
//! checked for presence first, which makes re-running a generator a no-op.

pub mod call_list;
pub mod edit;
pub mod landmark;
mod lexer;
pub mod splice;
pub mod text;

pub use call_list::append_argument;
pub use edit::{Edit, EditKind, EditOutcome, apply_edits};
pub use landmark::{InsertionPolicy, Landmark, locate};
pub use splice::{splice_after, splice_before_close, splice_block_start};
pub use text::SourceText;
