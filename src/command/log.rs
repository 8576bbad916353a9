use std::sync::Mutex;

use crate::snapshot::{Snapshot, Snapshottable};

use super::{Command, HistoryError};

struct Inner<R: Snapshottable> {
    receiver: R,
    history: Vec<Snapshot<R>>,
}

/// Executes reversible commands against an owned receiver.
///
/// Receiver and history live behind one `Mutex`: `execute`, `undo`,
/// `snapshot`, `restore`, and `inspect` are mutually exclusive, so
/// concurrent callers interleave only at operation granularity. An
/// execute/undo pair can never observe each other half-done.
///
/// History depth equals the number of executed-but-not-undone commands:
/// after `n` successful executes and `k <= n` undos, `history_len()`
/// is `n - k`, and the next undo past zero is `EmptyHistory`.
pub struct CommandLog<R: Snapshottable> {
    inner: Mutex<Inner<R>>,
}

impl<R: Snapshottable> CommandLog<R> {
    /// Take ownership of an already-constructed receiver.
    pub fn new(receiver: R) -> Self {
        CommandLog {
            inner: Mutex::new(Inner {
                receiver,
                history: Vec::new(),
            }),
        }
    }

    /// Run a command, push its inverse record, return its output.
    ///
    /// The pre-execution state is captured before the command runs. On
    /// failure nothing is pushed (a failed execution cannot corrupt
    /// the history) and the fault surfaces as `CommandFailed`.
    pub fn execute<C: Command<R>>(&self, command: &C) -> Result<C::Output, HistoryError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| HistoryError::LockPoisoned("execute"))?;

        let record = Snapshot::capture(&inner.receiver)?;
        match command.apply(&mut inner.receiver) {
            Ok(output) => {
                inner.history.push(record);
                Ok(output)
            }
            Err(fault) => Err(HistoryError::CommandFailed {
                command: command.name().to_string(),
                fault,
            }),
        }
    }

    /// Pop the most recent inverse record and restore it (LIFO).
    ///
    /// Undo is not itself undoable: two undos in a row revert two
    /// independent prior commands.
    pub fn undo(&self) -> Result<(), HistoryError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| HistoryError::LockPoisoned("undo"))?;

        let record = inner.history.pop().ok_or(HistoryError::EmptyHistory)?;
        record.restore(&mut inner.receiver)?;
        Ok(())
    }

    /// Capture the receiver's full state as an opaque token.
    ///
    /// The caretaker holding the token cannot read the captured fields;
    /// the token is only usable via `restore`.
    pub fn snapshot(&self) -> Result<Snapshot<R>, HistoryError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| HistoryError::LockPoisoned("snapshot"))?;
        Ok(Snapshot::capture(&inner.receiver)?)
    }

    /// Restore the receiver from a snapshot token.
    ///
    /// The undo history is left as-is: restoring is a receiver-state
    /// operation, not a history one.
    pub fn restore(&self, snapshot: &Snapshot<R>) -> Result<(), HistoryError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| HistoryError::LockPoisoned("restore"))?;
        snapshot.restore(&mut inner.receiver)?;
        Ok(())
    }

    /// Read the receiver under the log's lock.
    pub fn inspect<T>(&self, f: impl FnOnce(&R) -> T) -> Result<T, HistoryError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| HistoryError::LockPoisoned("inspect"))?;
        Ok(f(&inner.receiver))
    }

    /// Number of executed-but-not-undone commands.
    pub fn history_len(&self) -> Result<usize, HistoryError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| HistoryError::LockPoisoned("history_len"))?;
        Ok(inner.history.len())
    }

    /// Unwrap the log and hand the receiver back.
    pub fn into_receiver(self) -> Result<R, HistoryError> {
        self.inner
            .into_inner()
            .map(|inner| inner.receiver)
            .map_err(|_| HistoryError::LockPoisoned("into_receiver"))
    }
}
