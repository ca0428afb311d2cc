use std::time::Duration;

use fltk::app::{self, Sender, TimeoutHandle};

use crate::app::controllers::toast::{Timers, ToastTick};
use crate::app::domain::Message;

/// Toast timers on the FLTK event loop. A fired timeout posts
/// `Message::ToastTick` back through the channel.
pub struct FltkTimers {
    sender: Sender<Message>,
}

impl FltkTimers {
    pub fn new(sender: Sender<Message>) -> Self {
        Self { sender }
    }
}

impl Timers for FltkTimers {
    type Handle = TimeoutHandle;

    fn arm(&mut self, delay: Duration, tick: ToastTick) -> TimeoutHandle {
        let sender = self.sender;
        app::add_timeout3(delay.as_secs_f64(), move |_| {
            sender.send(Message::ToastTick(tick));
        })
    }

    fn cancel(&mut self, handle: TimeoutHandle) {
        // Removing a timeout that already fired is a no-op in FLTK
        app::remove_timeout3(handle);
    }
}
