use std::collections::VecDeque;

/// Default sliding-window length for velocity measurement.
const DEFAULT_WINDOW_MS: u64 = 100;

/// Measures drag velocity from a sliding window of `(timestamp_ms, position)` samples.
///
/// UI toolkits usually report touches as absolute positions at irregular timestamps;
/// the release velocity that seeds a fling is the average slope across the most recent
/// window of samples. Samples older than the window are evicted, so a finger that
/// stopped moving before lifting yields a release velocity of zero.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: VecDeque<(u64, f64)>,
    window_ms: u64,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::with_window_ms(DEFAULT_WINDOW_MS)
    }

    pub fn with_window_ms(window_ms: u64) -> Self {
        Self {
            samples: VecDeque::new(),
            window_ms: window_ms.max(1),
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Records a touch sample. Out-of-order timestamps are dropped.
    pub fn push(&mut self, now_ms: u64, position: f64) {
        if let Some(&(last, _)) = self.samples.back() {
            if now_ms < last {
                return;
            }
        }
        self.samples.push_back((now_ms, position));
        self.evict(now_ms);
    }

    /// The measured velocity in units/second at `now_ms`.
    ///
    /// Returns 0.0 while underdetermined (fewer than two in-window samples, or a
    /// zero-length time span).
    pub fn velocity(&mut self, now_ms: u64) -> f64 {
        self.evict(now_ms);
        let (Some(&(t0, p0)), Some(&(t1, p1))) = (self.samples.front(), self.samples.back())
        else {
            return 0.0;
        };
        if t1 <= t0 {
            return 0.0;
        }
        (p1 - p0) / (t1 - t0) as f64 * 1000.0
    }

    fn evict(&mut self, now_ms: u64) {
        let cutoff = now_ms.saturating_sub(self.window_ms);
        while let Some(&(t, _)) = self.samples.front() {
            if t >= cutoff {
                break;
            }
            self.samples.pop_front();
        }
    }
}
