#![allow(unused)]
use std::cell::RefCell;
use std::time::Duration;

/// Wall-clock time spent per scheme step. Only collected with the `timing`
/// feature; otherwise every function here is a no-op.
#[derive(Default, Clone)]
pub struct TimingStats {
    pub step_times: Vec<Duration>,
    pub total_time: Duration,
}

impl TimingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> usize {
        self.step_times.len()
    }

    pub fn mean_step(&self) -> Duration {
        if self.step_times.is_empty() {
            return Duration::ZERO;
        }
        self.step_times.iter().sum::<Duration>() / self.step_times.len() as u32
    }

    pub fn slowest_step(&self) -> Duration {
        self.step_times.iter().copied().max().unwrap_or_default()
    }

    #[cfg(feature = "timing")]
    pub fn print_summary(&self) {
        if self.step_times.is_empty() {
            return;
        }

        let stepping: Duration = self.step_times.iter().sum();
        let overhead = self.total_time.saturating_sub(stepping);

        println!("\n{}", "=".repeat(60));
        println!("{:^60}", "SOLVER TIMING SUMMARY");
        println!("{}", "=".repeat(60));
        println!(
            "Total solve time:              {:.3}ms",
            self.total_time.as_secs_f64() * 1000.0
        );
        println!("{}", "-".repeat(60));
        println!(
            "  Stepping:                  {:>9.3}ms  (avg: {:>9.3}us)",
            stepping.as_secs_f64() * 1000.0,
            self.mean_step().as_secs_f64() * 1.0e6
        );
        println!(
            "  Slowest step:              {:>9.3}us",
            self.slowest_step().as_secs_f64() * 1.0e6
        );
        println!(
            "Overhead/Other:                {:>9.3}ms",
            overhead.as_secs_f64() * 1000.0
        );
        println!("Steps:                         {}\n", self.steps());
    }

    #[cfg(not(feature = "timing"))]
    pub fn print_summary(&self) {}
}

#[cfg(feature = "timing")]
thread_local! {
    static TIMING_STATS: RefCell<TimingStats> = RefCell::new(TimingStats::new());
}

#[cfg(feature = "timing")]
pub fn reset_timing() {
    TIMING_STATS.with(|stats| {
        *stats.borrow_mut() = TimingStats::new();
    });
}

#[cfg(not(feature = "timing"))]
pub fn reset_timing() {}

#[cfg(feature = "timing")]
pub fn record_step<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = std::time::Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    TIMING_STATS.with(|stats| {
        stats.borrow_mut().step_times.push(elapsed);
    });
    result
}

#[cfg(not(feature = "timing"))]
pub fn record_step<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    f()
}

#[cfg(feature = "timing")]
pub fn finalize_timing(total_time: Duration) -> TimingStats {
    TIMING_STATS.with(|stats| {
        let mut s = stats.borrow_mut();
        s.total_time = total_time;
        s.clone()
    })
}

#[cfg(not(feature = "timing"))]
pub fn finalize_timing(_total_time: Duration) -> TimingStats {
    TimingStats::new()
}

/// Stats of the most recent solve on this thread.
#[cfg(feature = "timing")]
pub fn current_stats() -> TimingStats {
    TIMING_STATS.with(|stats| stats.borrow().clone())
}

#[cfg(not(feature = "timing"))]
pub fn current_stats() -> TimingStats {
    TimingStats::new()
}
