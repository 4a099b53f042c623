//! Cycle counter and histogram printing for the `#[ignore]` latency tests.

use hdrhistogram::Histogram;

#[inline]
pub(crate) fn rdtscp() -> u64 {
    #[cfg(target_arch = "x86_64")]
    unsafe {
        core::arch::x86_64::__rdtscp(&mut 0)
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        use std::sync::OnceLock;
        use std::time::Instant;
        static EPOCH: OnceLock<Instant> = OnceLock::new();
        EPOCH.get_or_init(Instant::now).elapsed().as_nanos() as u64
    }
}

pub(crate) fn print_histogram(name: &str, hist: &Histogram<u64>) {
    println!(
        "{:24} p50: {:4} | p99: {:4} | p999: {:5} | min: {:4} | max: {:5}",
        name,
        hist.value_at_quantile(0.50),
        hist.value_at_quantile(0.99),
        hist.value_at_quantile(0.999),
        hist.min(),
        hist.max(),
    );
}
