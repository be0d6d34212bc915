//! Two-phase optimistic updates.
//!
//! A local mutation is applied immediately and a snapshot kept. The caller
//! then settles it with the server's answer: success commits, failure
//! restores the snapshot. An update dropped without settling rolls back.

/// Pending optimistic mutation of `T`
#[must_use = "settle the update with commit, rollback or settle"]
pub struct Optimistic<'a, T: Clone> {
    target: &'a mut T,
    snapshot: Option<T>,
}

impl<'a, T: Clone> Optimistic<'a, T> {
    /// Snapshot `target`, then apply `mutate` to it
    pub fn apply(target: &'a mut T, mutate: impl FnOnce(&mut T)) -> Self {
        let snapshot = target.clone();
        mutate(target);
        Self {
            target,
            snapshot: Some(snapshot),
        }
    }

    /// Keep the mutation
    pub fn commit(mut self) {
        self.snapshot = None;
    }

    /// Restore the pre-mutation value
    pub fn rollback(self) {
        // Drop restores the snapshot
    }

    /// Commit on `Ok`, roll back on `Err`, and pass the result through
    pub fn settle<R, E>(self, result: Result<R, E>) -> Result<R, E> {
        match result {
            Ok(value) => {
                self.commit();
                Ok(value)
            }
            Err(err) => {
                self.rollback();
                Err(err)
            }
        }
    }
}

impl<T: Clone> Drop for Optimistic<'_, T> {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            *self.target = snapshot;
        }
    }
}
