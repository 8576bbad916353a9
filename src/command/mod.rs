//! Command Log - reversible operations with undo history
//!
//! The log owns its receiver. `execute` captures the pre-execution
//! state as an inverse record before running the command; a successful
//! run pushes the record, a failed one pushes nothing. `undo` pops the
//! most recent record (LIFO) and restores it; there is no redo stack,
//! so two undos revert two distinct prior commands.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CommandLog<R>                            │
//! │  execute() / undo() / snapshot() / restore() / inspect()    │
//! │  one Mutex around receiver + history (single critical       │
//! │  section: concurrent callers cannot interleave partially)   │
//! └─────────────────────────────────────────────────────────────┘
//!          │                               │
//!          ▼                               ▼
//! ┌──────────────────┐          ┌─────────────────────────┐
//! │   Command<R>     │          │  history: Vec<Snapshot> │
//! │  apply(&mut R)   │          │  LIFO inverse records   │
//! └──────────────────┘          └─────────────────────────┘
//! ```

mod command;
mod error;
mod log;

pub use command::{Command, CommandFault, FnCommand};
pub use error::HistoryError;
pub use log::CommandLog;
