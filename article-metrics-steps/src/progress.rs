// I am not using indicatif for this, because it cannot output progress to non-tty
use {
    std::time::{Duration, Instant},
    tracing::info,
};

const REPORT_INTERVAL: Duration = Duration::from_secs(10);

pub struct Progress {
    message: String,
    total: usize,
    started_at: Instant,
    reported_at: Instant,
    total_processed: usize,
}

impl Progress {
    pub fn new(message: String, total: usize) -> Self {
        Self {
            message,
            total,
            started_at: Instant::now(),
            reported_at: Instant::now(),
            total_processed: 0,
        }
    }

    pub fn update(&mut self) -> bool {
        self.total_processed += 1;

        let now = Instant::now();
        if now - self.reported_at >= REPORT_INTERVAL {
            self.reported_at = now;
            let rate = (self.total_processed as f32) / (now - self.started_at).as_secs_f32();
            info!("{}: {}/{} ({:.2}/second)", self.message, self.total_processed, self.total, rate);
            true
        } else {
            false
        }
    }

    pub fn finish(&self) {
        info!("{}: finished {}/{} in {:.2}s", self.message, self.total_processed, self.total, self.started_at.elapsed().as_secs_f32());
    }
}
