pub const DEFAULT_MIN_COUNT: u64 = 1000;
pub const DEFAULT_VIEW_SIZE: usize = 20;

pub const PROFILE_ENV: &str = "NAME_STATS_PROFILE";
pub const WORKERS_ENV: &str = "NAME_STATS_WORKERS";

fn flag_enabled(value: Option<String>) -> bool {
    value
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

pub fn profile_enabled() -> bool {
    flag_enabled(std::env::var(PROFILE_ENV).ok())
}

/// Loader thread count: env override if parseable, otherwise available parallelism capped at 8.
pub fn worker_count(total_sources: usize) -> usize {
    let upper = total_sources.max(1);
    if let Ok(raw) = std::env::var(WORKERS_ENV) {
        if let Ok(n) = raw.parse::<usize>() {
            return n.clamp(1, upper);
        }
    }
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
        .clamp(1, 8)
        .min(upper)
}
