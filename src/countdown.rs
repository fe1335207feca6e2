//! OTP resend cooldown.
//!
//! [`OtpCountdown`] holds the remaining seconds; [`CountdownTimer`] is the
//! scheduled tick source driving it, cancelled when the owning screen is torn
//! down.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Seconds left before another OTP may be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpCountdown {
    cooldown_secs: u32,
    remaining: u32,
}

impl OtpCountdown {
    /// Start a countdown of `cooldown_secs` seconds.
    pub fn new(cooldown_secs: u32) -> Self {
        Self {
            cooldown_secs,
            remaining: cooldown_secs,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the resend action is available.
    pub fn can_resend(&self) -> bool {
        self.remaining == 0
    }

    /// Advance by one second. Stops at zero.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Restart the cooldown if resending is allowed.
    ///
    /// # Returns
    /// * `bool` - True if a resend happened
    pub fn resend(&mut self) -> bool {
        if !self.can_resend() {
            return false;
        }
        self.remaining = self.cooldown_secs;
        true
    }

    /// Remaining time as `MM:SS`.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

/// Recurring tick source running on the tokio runtime.
///
/// Ticks are queued on a channel and drained by the UI loop. The task is
/// aborted by [`CountdownTimer::stop`] or when the timer is dropped.
#[derive(Debug)]
pub struct CountdownTimer {
    handle: JoinHandle<()>,
    ticks: mpsc::UnboundedReceiver<()>,
}

impl CountdownTimer {
    /// Spawn a timer ticking once per `period`.
    ///
    /// # Details
    /// Must be called from within a tokio runtime. The first tick arrives one
    /// full period after spawning.
    pub fn spawn(period: Duration) -> Self {
        let (tx, ticks) = mpsc::unbounded_channel();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick of an interval completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    break;
                }
            }
        });
        Self { handle, ticks }
    }

    /// Take all ticks delivered since the last call.
    ///
    /// # Returns
    /// * `u32` - Number of elapsed periods
    pub fn drain(&mut self) -> u32 {
        let mut count = 0;
        while self.ticks.try_recv().is_ok() {
            count += 1;
        }
        count
    }

    /// Cancel the timer task.
    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_reaches_zero_and_allows_resend() {
        let mut countdown = OtpCountdown::new(3);
        assert!(!countdown.can_resend());
        assert!(!countdown.resend());
        for _ in 0..5 {
            countdown.tick();
        }
        assert_eq!(countdown.remaining(), 0);
        assert!(countdown.can_resend());
        assert!(countdown.resend());
        assert_eq!(countdown.remaining(), 3);
    }

    #[test]
    fn test_countdown_display() {
        assert_eq!(OtpCountdown::new(60).display(), "01:00");
        let mut countdown = OtpCountdown::new(60);
        countdown.tick();
        assert_eq!(countdown.display(), "00:59");
        assert_eq!(OtpCountdown::new(0).display(), "00:00");
    }

    #[tokio::test]
    async fn test_timer_delivers_ticks() {
        let mut timer = CountdownTimer::spawn(Duration::from_millis(5));
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(timer.drain() >= 1);
        assert!(timer.is_running());
    }

    #[tokio::test]
    async fn test_timer_stops_on_cancel() {
        let mut timer = CountdownTimer::spawn(Duration::from_millis(5));
        timer.stop();
        tokio::time::sleep(Duration::from_millis(20)).await;
        timer.drain();
        assert!(!timer.is_running());
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(timer.drain(), 0);
    }
}
