use std::time::Duration;

use gpui::Context;

const BLINK_INTERVAL: Duration = Duration::from_millis(530);

/// Caret visibility toggled on a timer while a field has focus.
pub struct CursorBlink {
    visible: bool,
    epoch: usize,
}

impl CursorBlink {
    pub fn new() -> Self {
        Self {
            visible: true,
            epoch: 0,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Shows the caret and restarts the timer. Stale timers see a newer
    /// epoch and stop.
    pub fn restart(&mut self, cx: &mut Context<Self>) {
        self.visible = true;
        self.epoch = self.epoch.wrapping_add(1);
        self.schedule_blink(self.epoch, cx);
    }

    pub fn stop(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.visible = true;
    }

    fn schedule_blink(&mut self, epoch: usize, cx: &mut Context<Self>) {
        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(BLINK_INTERVAL).await;
            if let Some(this) = this.upgrade() {
                this.update(cx, |blink, cx| blink.blink(epoch, cx));
            }
        })
        .detach();
    }

    fn blink(&mut self, epoch: usize, cx: &mut Context<Self>) {
        if epoch != self.epoch {
            return;
        }
        self.visible = !self.visible;
        cx.notify();
        self.schedule_blink(epoch, cx);
    }
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new()
    }
}
