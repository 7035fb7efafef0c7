mod args;
mod config;
mod entry;
mod error;
mod events;
mod http;
mod logger;
mod pusher;
mod shutdown;
mod shutdown_handlers;
mod spec;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
