//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O and directory listing with consistent error handling

pub mod io;
