use super::ActionScheduler;
use std::cell::RefCell;
use std::rc::Rc;

type Pending = (u64, u64, Box<dyn FnOnce()>);

#[derive(Default)]
struct ClockInner {
    now: u64,
    next_id: u64,
    pending: Vec<Pending>,
}

/// Deterministic scheduler: nothing fires until `advance` is called.
#[derive(Clone, Default)]
pub struct ManualClock {
    inner: Rc<RefCell<ClockInner>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Moves time forward, firing due callbacks in deadline order.
    pub fn advance(&self, ms: u64) {
        let target = self.inner.borrow().now + ms;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, due, _))| *due <= target)
                    .min_by_key(|(_, (id, due, _))| (*due, *id))
                    .map(|(index, _)| index);
                match due {
                    Some(index) => {
                        let (_, due, callback) = inner.pending.remove(index);
                        inner.now = due;
                        Some(callback)
                    }
                    None => None,
                }
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.inner.borrow_mut().now = target;
    }
}

impl ActionScheduler for ManualClock {
    type Task = u64;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let due = inner.now + u64::from(delay_ms);
        inner.pending.push((id, due, callback));
        id
    }

    fn cancel(&self, task: u64) {
        self.inner
            .borrow_mut()
            .pending
            .retain(|(id, _, _)| *id != task);
    }
}
