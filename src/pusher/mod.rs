//! Rate-ramping dispatch scheduler and per-window summary fold.
mod scheduler;
mod summary;


pub(crate) use scheduler::{LoadPusher, RunState, expected_total_requests, request_count};
pub(crate) use summary::WindowSummary;
