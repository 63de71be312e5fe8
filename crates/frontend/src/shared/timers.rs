use contracts::shared::async_action::{ActionScheduler, AsyncActionHandler};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cell::Cell;
use std::rc::Rc;

/// Browser timer backend for `AsyncActionHandler`.
#[derive(Clone, Copy, Default)]
pub struct GlooScheduler;

pub struct GlooTask {
    cancelled: Rc<Cell<bool>>,
}

impl ActionScheduler for GlooScheduler {
    type Task = GlooTask;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> GlooTask {
        let cancelled = Rc::new(Cell::new(false));
        let flag = cancelled.clone();
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if !flag.get() {
                callback();
            }
        });
        GlooTask { cancelled }
    }

    fn cancel(&self, task: GlooTask) {
        task.cancelled.set(true);
    }
}

pub type ActionRunner = AsyncActionHandler<GlooScheduler>;

/// Handler owned by the calling component; pending actions are cancelled
/// when the component is unmounted.
pub fn use_action_runner() -> StoredValue<ActionRunner, LocalStorage> {
    let runner = StoredValue::new_local(AsyncActionHandler::new(GlooScheduler));
    on_cleanup(move || {
        let cancelled = runner.try_with_value(|r| r.cancel_all()).unwrap_or(0);
        if cancelled > 0 {
            log::debug!("cancelled {} pending action(s) on unmount", cancelled);
        }
    });
    runner
}
