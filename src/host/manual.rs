//! In-process host primitives.
//!
//! Every type here is a cheap handle over shared state: keep a clone on the driving side and hand
//! another to the animator.

use super::{Container, DrawTarget, FrameHandle, FrameScheduler};
use crate::bolt::geometry::Dimensions;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

#[derive(Debug, Default)]
struct SchedulerState {
    next_id: u64,
    pending: Option<FrameHandle>,
    requested: usize,
    cancelled: usize,
}

/// A frame scheduler that fires only when its driver says so.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<SchedulerState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registration that would fire on the next frame, if any.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.state.borrow().pending
    }

    /// Consume the pending registration. The caller is expected to invoke the frame callback
    /// when this returns a handle.
    pub fn take_pending(&self) -> Option<FrameHandle> {
        self.state.borrow_mut().pending.take()
    }

    /// Total number of frames ever requested.
    pub fn requested(&self) -> usize {
        self.state.borrow().requested
    }

    /// Total number of registrations cancelled before firing.
    pub fn cancelled(&self) -> usize {
        self.state.borrow().cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        state.requested += 1;
        let handle = FrameHandle::new(state.next_id);
        state.pending = Some(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let mut state = self.state.borrow_mut();
        if state.pending == Some(handle) {
            state.pending = None;
            state.cancelled += 1;
        }
    }
}

/// A container whose size is set from the outside.
#[derive(Clone, Debug, Default)]
pub struct SharedContainer {
    size: Rc<Cell<Dimensions>>,
}

impl SharedContainer {
    pub fn new(width: f64, height: f64) -> Self {
        Self { size: Rc::new(Cell::new(Dimensions::new(width, height))) }
    }

    pub fn set_size(&self, width: f64, height: f64) {
        self.size.set(Dimensions::new(width, height));
    }
}

impl Container for SharedContainer {
    fn size(&self) -> Dimensions {
        self.size.get()
    }
}

/// A draw target that remembers the last path data set on each of its layers.
#[derive(Clone, Debug)]
pub struct RecordingTarget {
    layers: Rc<RefCell<Vec<Option<String>>>>,
    writes: Rc<Cell<usize>>,
}

impl RecordingTarget {
    pub fn new(layers: usize) -> Self {
        Self { layers: Rc::new(RefCell::new(vec![None; layers])), writes: Default::default() }
    }

    /// The path data currently set on the layer at `index`.
    pub fn layer(&self, index: usize) -> Option<String> {
        self.layers.borrow().get(index).cloned().flatten()
    }

    /// The path data of every layer.
    pub fn layers(&self) -> Vec<Option<String>> {
        self.layers.borrow().clone()
    }

    /// Total number of individual layer updates.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl DrawTarget for RecordingTarget {
    fn path_count(&self) -> usize {
        self.layers.borrow().len()
    }

    fn set_path_data(&mut self, index: usize, data: &str) {
        if let Some(layer) = self.layers.borrow_mut().get_mut(index) {
            *layer = Some(data.to_string());
            self.writes.set(self.writes.get() + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduler_single_pending() {
        let mut scheduler = ManualScheduler::new();
        let first = scheduler.request_frame().expect("not scheduled");
        let second = scheduler.request_frame().expect("not scheduled");
        assert_ne!(first, second);
        assert_eq!(scheduler.pending(), Some(second));
        assert_eq!(scheduler.take_pending(), Some(second));
        assert_eq!(scheduler.pending(), None);
    }

    #[test]
    fn test_cancel_stale_handle() {
        let mut scheduler = ManualScheduler::new();
        let first = scheduler.request_frame().expect("not scheduled");
        let second = scheduler.request_frame().expect("not scheduled");
        scheduler.cancel_frame(first);
        assert_eq!(scheduler.pending(), Some(second));
        assert_eq!(scheduler.cancelled(), 0);

        scheduler.cancel_frame(second);
        assert_eq!(scheduler.pending(), None);
        assert_eq!(scheduler.cancelled(), 1);
    }

    #[test]
    fn test_recording_target() {
        let mut target = RecordingTarget::new(2);
        let observer = target.clone();
        target.set_path_data(1, "M0,0");
        target.set_path_data(5, "M1,1");
        assert_eq!(observer.layers(), vec![None, Some("M0,0".to_string())]);
        assert_eq!(observer.writes(), 1);
    }
}
