use std::io::Write as _;

use clap::Parser;

use super::*;
use crate::args::{HttpVerb, PusherArgs};
use crate::error::{AppError, AppResult};

fn write_config(contents: &str, extension: &str) -> AppResult<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{}", extension))
        .tempfile()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

fn expect(condition: bool, message: &'static str) -> AppResult<()> {
    if condition {
        Ok(())
    } else {
        Err(AppError::validation(message))
    }
}

#[test]
fn loads_toml_config() -> AppResult<()> {
    let file = write_config(
        r#"
url = "http://localhost:5000/api/values"
duration = 60
start_rate = 10
max_rate = 20
timeout_ms = 1000
verb = "get"
headers = ["Accept: application/json"]

[query]
param = "variantIds"
values = ["509398", "1000065", "1027456"]
pick = 2
"#,
        "toml",
    )?;

    let config = loader::load_config_file(file.path())?;
    expect(
        config.url.as_deref() == Some("http://localhost:5000/api/values"),
        "url not loaded",
    )?;
    expect(config.duration == Some(60), "duration not loaded")?;
    expect(config.max_rate == Some(20), "max_rate not loaded")?;
    let query = config.query.ok_or(AppError::validation("query not loaded"))?;
    expect(query.param == "variantIds", "query param not loaded")?;
    expect(query.values.len() == 3, "query values not loaded")?;
    Ok(())
}

#[test]
fn loads_json_config() -> AppResult<()> {
    let file = write_config(
        r#"{"url": "http://localhost/", "verb": "put", "data": "{}"}"#,
        "json",
    )?;

    let config = loader::load_config_file(file.path())?;
    expect(config.verb == Some(HttpVerb::Put), "verb not loaded")?;
    expect(config.data.as_deref() == Some("{}"), "data not loaded")?;
    Ok(())
}

#[test]
fn rejects_unknown_extension() -> AppResult<()> {
    let file = write_config("url = \"http://localhost/\"", "yaml")?;
    expect(
        loader::load_config_file(file.path()).is_err(),
        "yaml config should be rejected",
    )
}

#[test]
fn cli_values_win_over_config() -> AppResult<()> {
    let mut args = PusherArgs::try_parse_from([
        "loadpush",
        "--url",
        "http://cli/",
        "--duration",
        "5",
    ])?;
    let config = ConfigFile {
        url: Some("http://config/".to_owned()),
        duration: Some(99),
        start_rate: Some(3),
        ..ConfigFile::default()
    };

    apply_config(&mut args, config)?;

    expect(args.url.as_deref() == Some("http://cli/"), "CLI url lost")?;
    expect(args.duration == Some(5), "CLI duration lost")?;
    expect(args.start_rate == Some(3), "config start_rate not applied")
}

#[test]
fn config_headers_merge_under_cli_headers() -> AppResult<()> {
    let mut args = PusherArgs::try_parse_from([
        "loadpush",
        "--url",
        "http://localhost/",
        "-H",
        "Accept: text/plain",
    ])?;
    let config = ConfigFile {
        headers: Some(vec![
            "Accept: application/json".to_owned(),
            "X-Run: yes".to_owned(),
        ]),
        ..ConfigFile::default()
    };

    apply_config(&mut args, config)?;

    expect(args.headers.len() == 2, "headers not merged")?;
    let accept = args
        .headers
        .iter()
        .find(|(key, _)| key == "Accept")
        .ok_or(AppError::validation("accept header missing"))?;
    expect(accept.1 == "text/plain", "CLI accept header clobbered")
}

#[test]
fn config_query_pool_applies_when_cli_unset() -> AppResult<()> {
    let mut args = PusherArgs::try_parse_from(["loadpush", "--url", "http://localhost/"])?;
    let config = ConfigFile {
        query: Some(QueryPoolConfig {
            param: "ids".to_owned(),
            values: vec!["1".to_owned(), "2".to_owned()],
            pick: Some(1),
        }),
        ..ConfigFile::default()
    };

    apply_config(&mut args, config)?;

    expect(args.query_param.as_deref() == Some("ids"), "param not applied")?;
    expect(args.query_values.len() == 2, "values not applied")?;
    expect(args.query_pick == Some(1), "pick not applied")
}
