use crate::shared::error::{DashboardError, DashboardResult};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

/// Identifier of a widget that can run one simulated action at a time,
/// e.g. `"qrScanner1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetId(pub String);

impl WidgetId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for WidgetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    QrScan,
    LoginSubmit,
    RegistrationSubmit,
    SendMessage,
}

/// One configured simulated action: how long it takes and what it yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedAction {
    pub kind: ActionKind,
    pub delay_ms: u32,
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActionStatus {
    #[default]
    Idle,
    InFlight,
    Completed(String),
}

impl ActionStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, ActionStatus::InFlight)
    }
}

/// Delivered to the caller's completion callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCompletion {
    pub widget: WidgetId,
    pub kind: ActionKind,
    pub result: String,
}

/// Returned by `start`; pass it to `cancel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionHandle {
    widget: WidgetId,
    ticket: u64,
}

impl ActionHandle {
    pub fn widget(&self) -> &WidgetId {
        &self.widget
    }
}

/// Timer backend. `cancel` must prevent the callback from running; a task
/// that is dropped without `cancel` may still fire (the ticket check in the
/// handler ignores it).
pub trait ActionScheduler {
    type Task;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Task;

    fn cancel(&self, task: Self::Task);
}

struct Slot<T> {
    status: ActionStatus,
    ticket: Option<u64>,
    task: Option<T>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            status: ActionStatus::Idle,
            ticket: None,
            task: None,
        }
    }
}

struct Inner<T> {
    slots: HashMap<WidgetId, Slot<T>>,
    next_ticket: u64,
}

/// Runs at most one simulated action per widget.
///
/// Single-threaded: state lives in `Rc<RefCell<..>>` and scheduled callbacks
/// only hold a `Weak`, so dropping the handler orphans nothing.
pub struct AsyncActionHandler<S: ActionScheduler> {
    scheduler: S,
    inner: Rc<RefCell<Inner<S::Task>>>,
}

impl<S> AsyncActionHandler<S>
where
    S: ActionScheduler,
    S::Task: 'static,
{
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            inner: Rc::new(RefCell::new(Inner {
                slots: HashMap::new(),
                next_ticket: 1,
            })),
        }
    }

    pub fn status(&self, widget: &WidgetId) -> ActionStatus {
        self.inner
            .borrow()
            .slots
            .get(widget)
            .map(|slot| slot.status.clone())
            .unwrap_or_default()
    }

    /// Moves `widget` to InFlight and schedules its completion.
    ///
    /// `on_complete` runs exactly once, after `action.delay_ms`, unless the
    /// action is cancelled first. Starting a widget that is already in
    /// flight fails and leaves the running timer alone.
    pub fn start<F>(
        &self,
        widget: WidgetId,
        action: SimulatedAction,
        on_complete: F,
    ) -> DashboardResult<ActionHandle>
    where
        F: FnOnce(ActionCompletion) + 'static,
    {
        let ticket = {
            let mut inner = self.inner.borrow_mut();
            let busy = inner
                .slots
                .get(&widget)
                .is_some_and(|slot| slot.status.is_in_flight());
            if busy {
                log::warn!("start rejected: '{}' is already in flight", widget);
                return Err(DashboardError::AlreadyInFlight {
                    widget: widget.0.clone(),
                });
            }

            let ticket = inner.next_ticket;
            inner.next_ticket += 1;
            let slot = inner.slots.entry(widget.clone()).or_default();
            slot.status = ActionStatus::InFlight;
            slot.ticket = Some(ticket);
            slot.task = None;
            ticket
        };

        log::debug!(
            "'{}' started {:?}, completes in {} ms",
            widget,
            action.kind,
            action.delay_ms
        );

        let weak: Weak<RefCell<Inner<S::Task>>> = Rc::downgrade(&self.inner);
        let completion_widget = widget.clone();
        let SimulatedAction {
            kind,
            delay_ms,
            result,
        } = action;

        let callback = Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let finished_task = {
                let mut inner = inner.borrow_mut();
                let Some(slot) = inner.slots.get_mut(&completion_widget) else {
                    return;
                };
                if slot.ticket != Some(ticket) {
                    return;
                }
                slot.status = ActionStatus::Completed(result.clone());
                slot.ticket = None;
                slot.task.take()
            };
            drop(finished_task);

            log::debug!("'{}' completed with '{}'", completion_widget, result);
            on_complete(ActionCompletion {
                widget: completion_widget,
                kind,
                result,
            });
        });

        let task = self.scheduler.schedule(delay_ms, callback);

        let mut inner = self.inner.borrow_mut();
        match inner.slots.get_mut(&widget) {
            Some(slot) if slot.ticket == Some(ticket) => slot.task = Some(task),
            // The scheduler already ran the callback.
            _ => drop(task),
        }

        Ok(ActionHandle { widget, ticket })
    }

    /// Returns the widget to Idle and drops its timer. `false` when the
    /// handle no longer refers to a running action.
    pub fn cancel(&self, handle: &ActionHandle) -> bool {
        let task = {
            let mut inner = self.inner.borrow_mut();
            match inner.slots.get_mut(&handle.widget) {
                Some(slot) if slot.ticket == Some(handle.ticket) => {
                    slot.status = ActionStatus::Idle;
                    slot.ticket = None;
                    slot.task.take()
                }
                _ => return false,
            }
        };

        log::debug!("'{}' cancelled", handle.widget);
        if let Some(task) = task {
            self.scheduler.cancel(task);
        }
        true
    }

    /// Cancels every in-flight action. Called when the owning view goes away.
    pub fn cancel_all(&self) -> usize {
        let tasks: Vec<_> = {
            let mut inner = self.inner.borrow_mut();
            inner
                .slots
                .values_mut()
                .filter(|slot| slot.status.is_in_flight())
                .map(|slot| {
                    slot.status = ActionStatus::Idle;
                    slot.ticket = None;
                    slot.task.take()
                })
                .collect()
        };

        let count = tasks.len();
        for task in tasks.into_iter().flatten() {
            self.scheduler.cancel(task);
        }
        count
    }

    /// Completed -> Idle, so the widget shows its ready state again.
    pub fn reset(&self, widget: &WidgetId) {
        if let Some(slot) = self.inner.borrow_mut().slots.get_mut(widget) {
            if !slot.status.is_in_flight() {
                slot.status = ActionStatus::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::manual_clock::ManualClock;
    use super::*;
    use std::cell::Cell;

    fn qr_scan() -> SimulatedAction {
        SimulatedAction {
            kind: ActionKind::QrScan,
            delay_ms: 2000,
            result: "PRODUCT_123_QTY_100".to_string(),
        }
    }

    fn counter() -> (Rc<Cell<u32>>, Rc<RefCell<Option<ActionCompletion>>>) {
        (Rc::new(Cell::new(0)), Rc::new(RefCell::new(None)))
    }

    #[test]
    fn test_qr_scan_completes_once_after_delay() {
        let clock = ManualClock::new();
        let handler = AsyncActionHandler::new(clock.clone());
        let widget = WidgetId::new("qrScanner1");
        let (calls, last) = counter();

        let (c, l) = (calls.clone(), last.clone());
        handler
            .start(widget.clone(), qr_scan(), move |done| {
                c.set(c.get() + 1);
                *l.borrow_mut() = Some(done);
            })
            .unwrap();
        assert_eq!(handler.status(&widget), ActionStatus::InFlight);

        clock.advance(1999);
        assert_eq!(handler.status(&widget), ActionStatus::InFlight);
        assert_eq!(calls.get(), 0);

        clock.advance(1);
        assert_eq!(
            handler.status(&widget),
            ActionStatus::Completed("PRODUCT_123_QTY_100".to_string())
        );
        assert_eq!(calls.get(), 1);
        assert_eq!(
            last.borrow().as_ref().map(|d| d.result.as_str()),
            Some("PRODUCT_123_QTY_100")
        );

        clock.advance(10_000);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_second_start_rejected_without_resetting_timer() {
        let clock = ManualClock::new();
        let handler = AsyncActionHandler::new(clock.clone());
        let widget = WidgetId::new("qrScanner1");
        let (calls, _) = counter();

        let c = calls.clone();
        handler
            .start(widget.clone(), qr_scan(), move |_| c.set(c.get() + 1))
            .unwrap();

        clock.advance(1500);
        let err = handler
            .start(widget.clone(), qr_scan(), |_| panic!("must not run"))
            .unwrap_err();
        assert_eq!(
            err,
            DashboardError::AlreadyInFlight {
                widget: "qrScanner1".to_string()
            }
        );
        assert_eq!(clock.pending(), 1);

        clock.advance(500);
        assert_eq!(calls.get(), 1);
        assert!(matches!(handler.status(&widget), ActionStatus::Completed(_)));
    }

    #[test]
    fn test_widgets_are_independent() {
        let clock = ManualClock::new();
        let handler = AsyncActionHandler::new(clock.clone());

        handler.start(WidgetId::new("a"), qr_scan(), |_| {}).unwrap();
        handler.start(WidgetId::new("b"), qr_scan(), |_| {}).unwrap();
        assert_eq!(clock.pending(), 2);
    }

    #[test]
    fn test_restart_after_completion() {
        let clock = ManualClock::new();
        let handler = AsyncActionHandler::new(clock.clone());
        let widget = WidgetId::new("qrScanner1");

        handler.start(widget.clone(), qr_scan(), |_| {}).unwrap();
        clock.advance(2000);
        assert!(handler.start(widget.clone(), qr_scan(), |_| {}).is_ok());
        assert_eq!(handler.status(&widget), ActionStatus::InFlight);
    }

    #[test]
    fn test_cancel_returns_to_idle_and_drops_callback() {
        let clock = ManualClock::new();
        let handler = AsyncActionHandler::new(clock.clone());
        let widget = WidgetId::new("qrScanner1");
        let (calls, _) = counter();

        let c = calls.clone();
        let handle = handler
            .start(widget.clone(), qr_scan(), move |_| c.set(c.get() + 1))
            .unwrap();

        assert!(handler.cancel(&handle));
        assert_eq!(handler.status(&widget), ActionStatus::Idle);
        assert_eq!(clock.pending(), 0);
        assert!(!handler.cancel(&handle));

        clock.advance(5000);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_stale_handle_does_not_cancel_new_action() {
        let clock = ManualClock::new();
        let handler = AsyncActionHandler::new(clock.clone());
        let widget = WidgetId::new("qrScanner1");

        let first = handler.start(widget.clone(), qr_scan(), |_| {}).unwrap();
        clock.advance(2000);
        handler.start(widget.clone(), qr_scan(), |_| {}).unwrap();

        assert!(!handler.cancel(&first));
        assert_eq!(handler.status(&widget), ActionStatus::InFlight);
    }

    #[test]
    fn test_cancel_all_on_teardown() {
        let clock = ManualClock::new();
        let handler = AsyncActionHandler::new(clock.clone());
        let (calls, _) = counter();

        for id in ["scanner", "chat"] {
            let c = calls.clone();
            handler
                .start(WidgetId::new(id), qr_scan(), move |_| c.set(c.get() + 1))
                .unwrap();
        }
        assert_eq!(handler.cancel_all(), 2);
        clock.advance(2000);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_dropped_handler_never_calls_back() {
        let clock = ManualClock::new();
        let (calls, _) = counter();
        {
            let handler = AsyncActionHandler::new(clock.clone());
            let c = calls.clone();
            handler
                .start(WidgetId::new("qrScanner1"), qr_scan(), move |_| c.set(c.get() + 1))
                .unwrap();
        }
        clock.advance(2000);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_reset_only_touches_finished_widgets() {
        let clock = ManualClock::new();
        let handler = AsyncActionHandler::new(clock.clone());
        let widget = WidgetId::new("qrScanner1");

        handler.start(widget.clone(), qr_scan(), |_| {}).unwrap();
        handler.reset(&widget);
        assert_eq!(handler.status(&widget), ActionStatus::InFlight);

        clock.advance(2000);
        handler.reset(&widget);
        assert_eq!(handler.status(&widget), ActionStatus::Idle);
    }

    #[test]
    fn test_completion_callback_may_restart() {
        let clock = ManualClock::new();
        let handler = Rc::new(AsyncActionHandler::new(clock.clone()));
        let widget = WidgetId::new("chat");
        let restarted = Rc::new(Cell::new(false));

        let h = Rc::downgrade(&handler);
        let r = restarted.clone();
        let w = widget.clone();
        handler
            .start(widget.clone(), qr_scan(), move |_| {
                if let Some(handler) = h.upgrade() {
                    r.set(handler.start(w, qr_scan(), |_| {}).is_ok());
                }
            })
            .unwrap();

        clock.advance(2000);
        assert!(restarted.get());
        assert_eq!(handler.status(&widget), ActionStatus::InFlight);
    }
}
