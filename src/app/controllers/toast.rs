//! Transient notifications.
//!
//! At most one toast is alive. A new `show` tears the previous one down on
//! the spot (no exit animation) and starts over, so the last caller always
//! wins. Timing is driven by a single owned timer handle:
//!
//! ```text
//!           show                 visible timer              exit timer
//! Idle ───────────▶ Showing ─────────────────▶ Dismissing ─────────────▶ Idle
//!   ▲                  │ show                     │ show
//!   └──────────────────┴──── cancel, remove ──────┘  (back to Showing)
//! ```
//!
//! Each armed timer carries a `ToastTick`. A tick that no longer matches the
//! current phase belongs to a superseded toast and is ignored, so a timer that
//! fires just after being replaced can never remove the wrong message.

use std::mem;
use std::time::Duration;

use tracing::debug;

pub const VISIBLE_DURATION: Duration = Duration::from_millis(3000);
pub const EXIT_ANIMATION: Duration = Duration::from_millis(250);

/// Token delivered back when a toast timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTick {
    generation: u64,
}

/// Where toasts are drawn.
pub trait ToastView {
    fn present(&mut self, text: &str);
    fn begin_exit(&mut self);
    fn remove(&mut self);
}

/// One-shot timers that report back with the tick they were armed with.
pub trait Timers {
    type Handle;

    fn arm(&mut self, delay: Duration, tick: ToastTick) -> Self::Handle;

    /// Consumes the handle so it cannot be cancelled twice.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Anything that can surface a short message to the user.
pub trait Notify {
    fn notify(&mut self, text: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Idle,
    Showing,
    Dismissing,
}

enum Phase<H> {
    Idle,
    Showing { tick: ToastTick, timer: H },
    Dismissing { tick: ToastTick, timer: H },
}

pub struct ToastQueue<V: ToastView, T: Timers> {
    view: V,
    timers: T,
    phase: Phase<T::Handle>,
    text: Option<String>,
    next_generation: u64,
}

impl<V: ToastView, T: Timers> ToastQueue<V, T> {
    pub fn new(view: V, timers: T) -> Self {
        Self {
            view,
            timers,
            phase: Phase::Idle,
            text: None,
            next_generation: 0,
        }
    }

    pub fn show(&mut self, text: &str) {
        self.tear_down();

        self.view.present(text);
        let tick = self.next_tick();
        let timer = self.timers.arm(VISIBLE_DURATION, tick);
        self.phase = Phase::Showing { tick, timer };
        self.text = Some(text.to_string());
        debug!(text, "toast shown");
    }

    /// Route a fired timer back into the state machine.
    pub fn on_tick(&mut self, tick: ToastTick) {
        match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Showing { tick: current, .. } if current == tick => {
                self.view.begin_exit();
                let tick = self.next_tick();
                let timer = self.timers.arm(EXIT_ANIMATION, tick);
                self.phase = Phase::Dismissing { tick, timer };
            }
            Phase::Dismissing { tick: current, .. } if current == tick => {
                self.view.remove();
                self.text = None;
                debug!("toast dismissed");
            }
            other => {
                debug!(?tick, "ignoring stale toast timer");
                self.phase = other;
            }
        }
    }

    /// Drop whatever is on screen and cancel its timer.
    pub fn clear(&mut self) {
        self.tear_down();
        self.text = None;
    }

    pub fn phase(&self) -> ToastPhase {
        match self.phase {
            Phase::Idle => ToastPhase::Idle,
            Phase::Showing { .. } => ToastPhase::Showing,
            Phase::Dismissing { .. } => ToastPhase::Dismissing,
        }
    }

    /// Text of the live toast, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn tear_down(&mut self) {
        match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => {}
            Phase::Showing { timer, .. } | Phase::Dismissing { timer, .. } => {
                self.timers.cancel(timer);
                self.view.remove();
            }
        }
    }

    fn next_tick(&mut self) -> ToastTick {
        self.next_generation += 1;
        ToastTick {
            generation: self.next_generation,
        }
    }
}

impl<V: ToastView, T: Timers> Notify for ToastQueue<V, T> {
    fn notify(&mut self, text: &str) {
        self.show(text);
    }
}
