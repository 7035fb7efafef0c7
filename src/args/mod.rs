//! CLI argument types and value parsers.
mod cli;
mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub use cli::PusherArgs;
pub(crate) use parsers::parse_header;
pub use types::HttpVerb;
