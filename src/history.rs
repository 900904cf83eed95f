//! Snapshot based undo/redo.
//!
//! The history keeps two stacks of scene snapshots. The last entry of the
//! undo stack is always the state currently shown; the first entry is the
//! baseline captured when the canvas was created and can never be undone.
//!
//! Restoring a snapshot may suspend (the scene rebuilds itself from the
//! snapshot), so the history enters a *restoring* state for the duration of
//! the restore. While restoring, captures are dropped and further undo/redo
//! requests return [`Restore::Busy`] instead of queueing.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::error::{HistoryError, SceneError};

/// An immutable, serialized picture of the whole scene.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot(Arc<str>);

impl Snapshot {
    pub fn new(serialized: impl Into<Arc<str>>) -> Self {
        Self(serialized.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Snapshot")
            .field(&format!("<{} bytes>", self.0.len()))
            .finish()
    }
}

/// The drawable surface the history captures and restores.
#[allow(async_fn_in_trait)]
pub trait Scene {
    /// Serialize the current scene
    fn snapshot(&self) -> Result<Snapshot, SceneError>;

    /// Rebuild the scene from a snapshot. Resolves once the visible surface
    /// matches the snapshot.
    async fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SceneError>;
}

/// What an undo or redo request ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restore {
    /// A snapshot was restored
    Applied,
    /// Nothing to undo/redo
    Nothing,
    /// Another restore is still running; the request was dropped
    Busy,
}

#[derive(Default)]
struct Stacks {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

/// Proof that the history is restoring. Dropping it returns the history to
/// idle, whichever way the restore ends.
struct RestoreGuard<'a> {
    restoring: &'a AtomicBool,
}

impl<'a> RestoreGuard<'a> {
    fn acquire(restoring: &'a AtomicBool) -> Option<Self> {
        restoring
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { restoring })
    }
}

impl Drop for RestoreGuard<'_> {
    fn drop(&mut self) {
        self.restoring.store(false, Ordering::Release);
    }
}

/// Undo/redo stacks of scene snapshots
pub struct History {
    stacks: Mutex<Stacks>,
    restoring: AtomicBool,
}

impl std::fmt::Debug for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stacks = self.stacks.lock();
        f.debug_struct("History")
            .field("undo", &stacks.undo.len())
            .field("redo", &stacks.redo.len())
            .field("restoring", &self.is_restoring())
            .finish()
    }
}

impl History {
    /// Creates a history whose baseline is `baseline`
    pub fn new(baseline: Snapshot) -> Self {
        Self {
            stacks: Mutex::new(Stacks {
                undo: vec![baseline],
                redo: Vec::new(),
            }),
            restoring: AtomicBool::new(false),
        }
    }

    /// Forget everything and start over from `baseline`.
    ///
    /// Refused (returns `false`) while a restore is running.
    pub fn reset(&self, baseline: Snapshot) -> bool {
        let mut stacks = self.stacks.lock();
        if self.is_restoring() {
            log::warn!("Ignoring history reset during a restore");
            return false;
        }
        stacks.undo = vec![baseline];
        stacks.redo.clear();
        true
    }

    /// Record the state after a completed edit.
    ///
    /// Clears the redo stack. Dropped (returns `false`) while restoring, so the
    /// act of restoring is never recorded as a new edit.
    pub fn capture(&self, snapshot: Snapshot) -> bool {
        let mut stacks = self.stacks.lock();
        if self.is_restoring() {
            log::debug!("Dropping capture during restore");
            return false;
        }
        stacks.undo.push(snapshot);
        stacks.redo.clear();
        log::debug!(
            "Captured snapshot (undo: {}, redo: 0)",
            stacks.undo.len()
        );
        true
    }

    /// Step back to the previous snapshot.
    pub async fn undo<S: Scene>(&self, scene: &mut S) -> Result<Restore, HistoryError> {
        let (_guard, target) = {
            let mut stacks = self.stacks.lock();
            let Some(guard) = RestoreGuard::acquire(&self.restoring) else {
                log::debug!("Undo dropped: a restore is in progress");
                return Ok(Restore::Busy);
            };
            let target = match stacks.undo.as_slice() {
                [.., previous, _current] => previous.clone(),
                _ => return Ok(Restore::Nothing),
            };
            if let Some(current) = stacks.undo.pop() {
                stacks.redo.push(current);
            }
            (guard, target)
        };

        if let Err(err) = scene.restore(&target).await {
            let mut stacks = self.stacks.lock();
            if let Some(current) = stacks.redo.pop() {
                stacks.undo.push(current);
            }
            log::warn!("Undo failed, history left unchanged: {err}");
            return Err(err.into());
        }
        Ok(Restore::Applied)
    }

    /// Re-apply the most recently undone snapshot.
    pub async fn redo<S: Scene>(&self, scene: &mut S) -> Result<Restore, HistoryError> {
        let (_guard, target) = {
            let mut stacks = self.stacks.lock();
            let Some(guard) = RestoreGuard::acquire(&self.restoring) else {
                log::debug!("Redo dropped: a restore is in progress");
                return Ok(Restore::Busy);
            };
            let Some(target) = stacks.redo.pop() else {
                return Ok(Restore::Nothing);
            };
            stacks.undo.push(target.clone());
            (guard, target)
        };

        if let Err(err) = scene.restore(&target).await {
            let mut stacks = self.stacks.lock();
            if let Some(restored) = stacks.undo.pop() {
                stacks.redo.push(restored);
            }
            log::warn!("Redo failed, history left unchanged: {err}");
            return Err(err.into());
        }
        Ok(Restore::Applied)
    }

    /// True if there is an edit after the baseline to undo
    pub fn can_undo(&self) -> bool {
        self.stacks.lock().undo.len() >= 2
    }

    pub fn can_redo(&self) -> bool {
        !self.stacks.lock().redo.is_empty()
    }

    pub fn is_restoring(&self) -> bool {
        self.restoring.load(Ordering::Acquire)
    }

    /// The snapshot at the top of the undo stack
    pub fn current(&self) -> Option<Snapshot> {
        self.stacks.lock().undo.last().cloned()
    }

    pub fn undo_len(&self) -> usize {
        self.stacks.lock().undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.stacks.lock().redo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    /// Scene that just remembers the last restored snapshot
    #[derive(Default)]
    struct Recorder {
        shown: Option<Snapshot>,
        restores: usize,
    }

    impl Scene for Recorder {
        fn snapshot(&self) -> Result<Snapshot, SceneError> {
            Ok(self.shown.clone().unwrap_or_else(|| Snapshot::new("")))
        }

        async fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SceneError> {
            self.shown = Some(snapshot.clone());
            self.restores += 1;
            Ok(())
        }
    }

    fn snap(name: &str) -> Snapshot {
        Snapshot::new(name)
    }

    #[test]
    fn test_new_history_has_nothing_to_undo() {
        let history = History::new(snap("S0"));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.current(), Some(snap("S0")));
    }

    #[test]
    fn test_undo_redo_single_capture() {
        let history = History::new(snap("S0"));
        let mut scene = Recorder::default();

        assert!(history.capture(snap("S1")));
        assert!(history.can_undo());

        assert_eq!(block_on(history.undo(&mut scene)).unwrap(), Restore::Applied);
        assert_eq!(scene.shown, Some(snap("S0")));
        assert!(history.can_redo());
        assert!(!history.can_undo());

        assert_eq!(block_on(history.redo(&mut scene)).unwrap(), Restore::Applied);
        assert_eq!(scene.shown, Some(snap("S1")));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_at_baseline_is_noop() {
        let history = History::new(snap("S0"));
        let mut scene = Recorder::default();

        assert_eq!(block_on(history.undo(&mut scene)).unwrap(), Restore::Nothing);
        assert_eq!(block_on(history.redo(&mut scene)).unwrap(), Restore::Nothing);
        assert_eq!(scene.restores, 0);
        assert_eq!(history.undo_len(), 1);
        assert!(!history.is_restoring());
    }

    #[test]
    fn test_capture_clears_redo() {
        let history = History::new(snap("S0"));
        let mut scene = Recorder::default();

        history.capture(snap("S1"));
        block_on(history.undo(&mut scene)).unwrap();
        block_on(history.redo(&mut scene)).unwrap();
        block_on(history.undo(&mut scene)).unwrap();
        assert!(history.can_redo());

        history.capture(snap("S2"));
        assert!(!history.can_redo());
        assert_eq!(history.current(), Some(snap("S2")));
    }

    #[test]
    fn test_abc_sequence() {
        let history = History::new(snap("S0"));
        let mut scene = Recorder::default();

        history.capture(snap("A"));
        history.capture(snap("B"));
        history.capture(snap("C"));

        block_on(history.undo(&mut scene)).unwrap();
        assert_eq!(scene.shown, Some(snap("B")));
        block_on(history.redo(&mut scene)).unwrap();
        assert_eq!(scene.shown, Some(snap("C")));
        block_on(history.undo(&mut scene)).unwrap();
        block_on(history.undo(&mut scene)).unwrap();
        assert_eq!(scene.shown, Some(snap("A")));
        assert_eq!(history.current(), Some(snap("A")));
        assert_eq!(history.redo_len(), 2);
    }

    #[test]
    fn test_reset() {
        let history = History::new(snap("S0"));
        history.capture(snap("S1"));
        history.capture(snap("S2"));

        assert!(history.reset(snap("blank")));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.current(), Some(snap("blank")));
    }

    #[test]
    fn test_guard_released_on_drop() {
        let flag = AtomicBool::new(false);
        {
            let _guard = RestoreGuard::acquire(&flag).unwrap();
            assert!(flag.load(Ordering::Acquire));
            assert!(RestoreGuard::acquire(&flag).is_none());
        }
        assert!(!flag.load(Ordering::Acquire));
    }
}
