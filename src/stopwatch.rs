use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

const TICK_PERIOD: Duration = Duration::from_millis(10);

/// Free-running elapsed-time counter in hundredths of a second.
///
/// A dedicated tick thread is the single writer of the counter; the counter
/// and the formatted display can be read from any thread. `start` and
/// `pause` only ever transition in their own direction, so repeated calls
/// are harmless.
pub struct Stopwatch {
    elapsed: Arc<AtomicU64>,
    running: Arc<AtomicBool>,
    shutdown: Arc<AtomicBool>,
    ticker: Option<JoinHandle<()>>,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            elapsed: Arc::new(AtomicU64::new(0)),
            running: Arc::new(AtomicBool::new(false)),
            shutdown: Arc::new(AtomicBool::new(false)),
            ticker: None,
        }
    }

    /// Begin accumulating. The tick thread is spawned on the first call and
    /// reused afterwards; starting an already-running stopwatch is a no-op.
    pub fn start(&mut self) {
        self.running.store(true, Ordering::Relaxed);

        if self.ticker.is_none() {
            let elapsed = Arc::clone(&self.elapsed);
            let running = Arc::clone(&self.running);
            let shutdown = Arc::clone(&self.shutdown);

            self.ticker = Some(thread::spawn(move || {
                while !shutdown.load(Ordering::Relaxed) {
                    thread::sleep(TICK_PERIOD);
                    if running.load(Ordering::Relaxed) {
                        elapsed.fetch_add(1, Ordering::Relaxed);
                    }
                }
            }));
        }
    }

    /// Stop accumulating; the counter keeps its value.
    pub fn pause(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }

    /// Zero the counter. Does not change whether the stopwatch is running.
    pub fn reset(&mut self) {
        self.elapsed.store(0, Ordering::Relaxed);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    pub fn elapsed_hundredths(&self) -> u64 {
        self.elapsed.load(Ordering::Relaxed)
    }

    pub fn formatted_time(&self) -> String {
        format_hundredths(self.elapsed_hundredths())
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(ticker) = self.ticker.take() {
            let _ = ticker.join();
        }
    }
}

/// Render a hundredths-of-a-second count as `HH:MM:SS`.
///
/// Hours wrap at 60 just like minutes and seconds, so the display rolls
/// over after sixty hours.
pub fn format_hundredths(counter: u64) -> String {
    let seconds = counter / 100;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    format!("{:02}:{:02}:{:02}", hours % 60, minutes % 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(format_hundredths(0), "00:00:00");
    }

    #[test]
    fn formats_sub_second_counts_as_zero() {
        assert_eq!(format_hundredths(99), "00:00:00");
        assert_eq!(format_hundredths(100), "00:00:01");
    }

    #[test]
    fn formats_hours_minutes_seconds() {
        // 1h 2m 3s
        assert_eq!(format_hundredths((3600 + 120 + 3) * 100), "01:02:03");
    }

    #[test]
    fn hours_roll_over_at_sixty() {
        assert_eq!(format_hundredths(60 * 3600 * 100), "00:00:00");
        assert_eq!(format_hundredths(61 * 3600 * 100), "01:00:00");
    }

    #[test]
    fn reset_reads_as_zero() {
        let mut sw = Stopwatch::new();
        sw.start();
        thread::sleep(Duration::from_millis(80));
        sw.pause();
        thread::sleep(Duration::from_millis(30));

        assert!(sw.elapsed_hundredths() > 0);
        sw.reset();
        assert_eq!(sw.formatted_time(), "00:00:00");
    }

    #[test]
    fn accumulates_only_while_running() {
        let mut sw = Stopwatch::new();
        assert_eq!(sw.elapsed_hundredths(), 0);

        sw.start();
        thread::sleep(Duration::from_millis(100));
        sw.pause();

        // Let any in-flight tick land before snapshotting.
        thread::sleep(Duration::from_millis(30));
        let at_pause = sw.elapsed_hundredths();
        assert!(at_pause > 0);

        thread::sleep(Duration::from_millis(80));
        assert_eq!(sw.elapsed_hundredths(), at_pause);

        sw.start();
        thread::sleep(Duration::from_millis(100));
        assert!(sw.elapsed_hundredths() > at_pause);
    }

    #[test]
    fn double_start_keeps_running() {
        let mut sw = Stopwatch::new();
        sw.start();
        sw.start();
        assert!(sw.is_running());

        thread::sleep(Duration::from_millis(100));
        assert!(sw.elapsed_hundredths() > 0);
    }
}
