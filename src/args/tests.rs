use clap::Parser;

use super::*;
use crate::error::AppResult;

#[test]
fn parse_header_splits_on_first_colon() -> AppResult<()> {
    let (key, value) = parse_header("X-Test: a:b")?;
    if key != "X-Test" || value != "a:b" {
        return Err(crate::error::AppError::validation(format!(
            "Unexpected header pair: {}={}",
            key, value
        )));
    }
    Ok(())
}

#[test]
fn parse_header_rejects_missing_colon() {
    assert!(parse_header("NotAHeader").is_err());
}

#[test]
fn cli_parses_run_flags() -> AppResult<()> {
    let args = PusherArgs::try_parse_from([
        "loadpush",
        "--url",
        "http://localhost:8080/api/values",
        "--duration",
        "30",
        "--start-rate",
        "5",
        "--max-rate",
        "50",
        "--timeout",
        "500",
        "-X",
        "post",
        "-d",
        "{\"x\":1}",
        "-H",
        "Content-Type: application/json",
    ])?;

    if args.url.as_deref() != Some("http://localhost:8080/api/values") {
        return Err(crate::error::AppError::validation("url not parsed"));
    }
    if args.duration != Some(30)
        || args.start_rate != Some(5)
        || args.max_rate != Some(50)
        || args.timeout_ms != Some(500)
    {
        return Err(crate::error::AppError::validation("rates not parsed"));
    }
    if args.verb != Some(HttpVerb::Post) {
        return Err(crate::error::AppError::validation("verb not parsed"));
    }
    if args.headers.len() != 1 {
        return Err(crate::error::AppError::validation("headers not parsed"));
    }
    Ok(())
}

#[test]
fn cli_rejects_data_and_data_base64_together() {
    let result = PusherArgs::try_parse_from([
        "loadpush",
        "--url",
        "http://localhost/",
        "--data",
        "x",
        "--data-base64",
        "eA==",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_query_param_requires_values() {
    let result = PusherArgs::try_parse_from([
        "loadpush",
        "--url",
        "http://localhost/",
        "--query-param",
        "ids",
    ]);
    assert!(result.is_err());
}

#[test]
fn verb_renders_uppercase() {
    assert_eq!(HttpVerb::Get.as_str(), "GET");
    assert_eq!(HttpVerb::Post.as_str(), "POST");
    assert_eq!(HttpVerb::Put.as_str(), "PUT");
}
