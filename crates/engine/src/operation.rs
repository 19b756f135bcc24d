//! Contract between editing operations and whatever drives them.
//!
//! An operation does some work per `resume` call and may hand back a
//! follow-up operation. `complete` drives a chain to the end on the calling
//! thread.

use crate::error::EditResult;

pub trait Operation {
    /// Do the next unit of work. `Ok(None)` means the chain is finished.
    fn resume(&mut self) -> EditResult<Option<Box<dyn Operation>>>;

    /// Abandon the operation. Work already applied is not rolled back.
    fn cancel(&mut self);
}

/// Operations that change blocks report how many they changed in total.
pub trait BlockChangeCount {
    fn blocks_changed(&self) -> usize;
}

/// Resume `op` and every follow-up it returns until the chain finishes or an
/// error is raised.
pub fn complete(op: &mut dyn Operation) -> EditResult<()> {
    let mut next = op.resume()?;
    while let Some(mut follow_up) = next {
        next = follow_up.resume()?;
    }
    Ok(())
}
