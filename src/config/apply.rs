use crate::args::{PusherArgs, parse_header};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Fills CLI fields left unset from the config file. CLI values always win.
pub(crate) fn apply_config(args: &mut PusherArgs, config: ConfigFile) -> AppResult<()> {
    if args.url.is_none() {
        args.url = config.url;
    }
    if args.duration.is_none() {
        args.duration = config.duration;
    }
    if args.start_rate.is_none() {
        args.start_rate = config.start_rate;
    }
    if args.max_rate.is_none() {
        args.max_rate = config.max_rate;
    }
    if args.timeout_ms.is_none() {
        args.timeout_ms = config.timeout_ms;
    }
    if args.verb.is_none() {
        args.verb = config.verb;
    }
    if args.data.is_none() && args.data_base64.is_none() {
        args.data = config.data;
        args.data_base64 = config.data_base64;
    }

    if let Some(headers) = config.headers {
        for entry in &headers {
            let (key, value) = parse_header(entry)
                .map_err(|err| AppError::config(ConfigError::InvalidHeader { source: err }))?;
            let already_set = args
                .headers
                .iter()
                .any(|(existing, _)| existing.eq_ignore_ascii_case(&key));
            if !already_set {
                args.headers.push((key, value));
            }
        }
    }

    if args.query_param.is_none()
        && let Some(query) = config.query
    {
        args.query_param = Some(query.param);
        args.query_values = query.values;
        if args.query_pick.is_none() {
            args.query_pick = query.pick;
        }
    }

    Ok(())
}
