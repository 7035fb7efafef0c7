//! Process entry: CLI parsing, config merge, and run orchestration.
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::Parser;
use tracing::{error, info};

use crate::args::{HttpVerb, PusherArgs};
use crate::config::{apply_config, load_config};
use crate::error::{AppError, AppResult, ValidationError};
use crate::events::{RunEventSink, TracingEventSink};
use crate::http::HttpRequestExecutor;
use crate::logger;
use crate::pusher::{LoadPusher, RunState, expected_total_requests};
use crate::shutdown_handlers::{setup_signal_shutdown_handler, shutdown_channel};
use crate::spec::{
    DEFAULT_DURATION_SECS, DEFAULT_MAX_RATE, DEFAULT_QUERY_PICK, DEFAULT_STARTING_RATE,
    DEFAULT_TIMEOUT_MS, MAX_LOGGED_RESPONSES, QueryPoolUrls, RunSpecification,
    RunSpecificationParams,
};

pub fn run() -> AppResult<()> {
    let mut args = PusherArgs::parse();
    logger::init_logging(args.verbose);

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, config)?;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_async(args))
}

async fn run_async(args: PusherArgs) -> AppResult<()> {
    let spec = build_specification(&args)?;
    let sink: Arc<dyn RunEventSink> = Arc::new(TracingEventSink);

    let expected = expected_total_requests(&spec);
    let log_responses = expected <= MAX_LOGGED_RESPONSES;
    if !log_responses {
        sink.log_info(&format!(
            "Expected request total {} exceeds {}; per-response logging disabled",
            expected, MAX_LOGGED_RESPONSES
        ));
    }

    let (shutdown_tx, _shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let executor = Arc::new(
        HttpRequestExecutor::from_spec(&spec, Arc::clone(&sink), log_responses)
            .map_err(AppError::http)?,
    );
    let mut pusher = LoadPusher::new(executor, Arc::clone(&sink));

    let result = pusher.push_load(&spec, &shutdown_tx).await;

    // Wake the signal task so it exits, then reap it.
    drop(shutdown_tx.send(()));
    drop(signal_handle.await);

    match result {
        Ok(state) => {
            if state == RunState::Cancelled {
                info!("Run cancelled by shutdown signal");
            }
            Ok(())
        }
        Err(err) => {
            error!("Run faulted: {}", err);
            Err(err)
        }
    }
}

fn build_specification(args: &PusherArgs) -> AppResult<RunSpecification> {
    let base_url = args
        .url
        .clone()
        .ok_or(AppError::Validation(ValidationError::MissingUrl))?;
    let body = resolve_body(args)?;

    let params = RunSpecificationParams {
        duration_secs: args.duration.unwrap_or(DEFAULT_DURATION_SECS),
        start_rate: args.start_rate.unwrap_or(DEFAULT_STARTING_RATE),
        max_rate: args.max_rate.unwrap_or(DEFAULT_MAX_RATE),
        base_url,
        timeout_ms: args.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
        verb: args.verb.unwrap_or(HttpVerb::Get),
        body,
        headers: args.headers.clone(),
    };

    match &args.query_param {
        Some(param) => {
            let source = QueryPoolUrls::new(
                param.clone(),
                args.query_values.clone(),
                args.query_pick.unwrap_or(DEFAULT_QUERY_PICK),
            )?;
            Ok(RunSpecification::with_url_source(params, Arc::new(source))?)
        }
        None => Ok(RunSpecification::new(params)?),
    }
}

fn resolve_body(args: &PusherArgs) -> AppResult<Option<String>> {
    if let Some(data) = &args.data {
        return Ok(Some(data.clone()));
    }
    if let Some(encoded) = &args.data_base64 {
        let decoded = STANDARD.decode(encoded).map_err(|err| {
            AppError::validation(ValidationError::InvalidBase64Body { source: err })
        })?;
        return Ok(Some(String::from_utf8(decoded)?));
    }
    Ok(None)
}
