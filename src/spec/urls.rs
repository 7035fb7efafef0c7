use crate::error::ValidationError;

/// Capability for producing the relative URL of each individual request.
pub(crate) trait RelativeUrlSource: Send + Sync {
    fn relative_url(&self) -> String;
}

/// Default source: every request hits the base URL as-is.
pub(crate) struct BasePathUrls;

impl RelativeUrlSource for BasePathUrls {
    fn relative_url(&self) -> String {
        String::new()
    }
}

/// Draws `pick` distinct values uniformly at random (without replacement)
/// from a fixed pool and renders them as a single query parameter.
/// Deterministic in count only, not in content.
pub(crate) struct QueryPoolUrls {
    param: String,
    values: Vec<String>,
    pick: usize,
}

impl QueryPoolUrls {
    pub(crate) fn new(
        param: String,
        values: Vec<String>,
        pick: usize,
    ) -> Result<Self, ValidationError> {
        if values.is_empty() {
            return Err(ValidationError::QueryPoolEmpty);
        }
        if pick == 0 {
            return Err(ValidationError::QueryPickZero);
        }
        if pick > values.len() {
            return Err(ValidationError::QueryPickExceedsPool {
                pick,
                pool: values.len(),
            });
        }
        Ok(Self {
            param,
            values,
            pick,
        })
    }
}

impl RelativeUrlSource for QueryPoolUrls {
    fn relative_url(&self) -> String {
        let mut rng = rand::thread_rng();
        let chosen = rand::seq::index::sample(&mut rng, self.values.len(), self.pick);
        let joined = chosen
            .iter()
            .filter_map(|index| self.values.get(index))
            .cloned()
            .collect::<Vec<String>>()
            .join(",");
        format!("?{}={}", self.param, joined)
    }
}
