//! Request execution and per-window batch dispatch.
mod dispatch;
mod executor;


pub(crate) use dispatch::dispatch_window;
pub(crate) use executor::{HttpRequestExecutor, Outcome, RequestExecutor};
