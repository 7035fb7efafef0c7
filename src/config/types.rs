use serde::Deserialize;

use crate::args::HttpVerb;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub duration: Option<u64>,
    pub start_rate: Option<u64>,
    pub max_rate: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub verb: Option<HttpVerb>,
    pub data: Option<String>,
    pub data_base64: Option<String>,
    pub headers: Option<Vec<String>>,
    pub query: Option<QueryPoolConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QueryPoolConfig {
    pub param: String,
    pub values: Vec<String>,
    pub pick: Option<usize>,
}
