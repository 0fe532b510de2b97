//! `DescribeInstances` request.

use serde_json::{Map, Value, json};

use super::{OperationRequest, RequestError, check_not_blank, check_resource_id};
use crate::instance_type::InstanceType;
use crate::transport::Operation;

const MAX_RESULTS_MIN: u32 = 5;
const MAX_RESULTS_MAX: u32 = 1000;

/// Server-side filter predicate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Filter {
    /// Filter name, for example `instance-state-name`.
    pub name: String,
    /// Accepted values; an instance matches when any value matches.
    pub values: Vec<String>,
}

impl Filter {
    /// Creates a filter on `name` accepting any of `values`.
    #[must_use]
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Matches instances of any of the given types.
    #[must_use]
    pub fn instance_type(types: impl IntoIterator<Item = InstanceType>) -> Self {
        Self::new("instance-type", types.into_iter().map(String::from))
    }

    /// Matches instances in any of the given states (`pending`, `running`, ...).
    #[must_use]
    pub fn state<I, V>(states: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self::new("instance-state-name", states)
    }

    /// Matches instances whose tag `key` has any of the given values.
    #[must_use]
    pub fn tag<I, V>(key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self::new(format!("tag:{key}"), values)
    }

    fn validate(&self) -> Result<(), RequestError> {
        if self.name.trim().is_empty() {
            return Err(RequestError::invalid_field(
                "Filters",
                self.name.as_str(),
                "filter name must not be empty",
            ));
        }
        if self
            .name
            .strip_prefix("tag:")
            .is_some_and(|key| key.trim().is_empty())
        {
            return Err(RequestError::invalid_field(
                "Filters",
                self.name.as_str(),
                "tag filters must name a key",
            ));
        }
        if self.values.is_empty() {
            return Err(RequestError::invalid_field(
                "Filters",
                self.name.as_str(),
                "filter must have at least one value",
            ));
        }
        if self.values.iter().any(|value| value.trim().is_empty()) {
            return Err(RequestError::invalid_field(
                "Filters",
                self.name.as_str(),
                "filter values must not be empty",
            ));
        }
        Ok(())
    }
}

/// Lists instances, optionally narrowed by ids and filters.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DescribeInstances {
    /// Instance ids to describe. Empty means all instances.
    pub instance_ids: Vec<String>,
    /// Filters applied by the provider.
    pub filters: Vec<Filter>,
    /// Page size. Cannot be combined with explicit instance ids.
    pub max_results: Option<u32>,
    /// Continuation token from a previous page.
    pub next_token: Option<String>,
}

impl DescribeInstances {
    /// Creates a request describing every instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an instance id.
    #[must_use]
    pub fn instance_id(mut self, id: impl Into<String>) -> Self {
        self.instance_ids.push(id.into());
        self
    }

    /// Adds a filter.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn max_results(mut self, value: u32) -> Self {
        self.max_results = Some(value);
        self
    }

    /// Sets the continuation token.
    #[must_use]
    pub fn next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }
}

impl OperationRequest for DescribeInstances {
    const OPERATION: Operation = Operation::DescribeInstances;

    fn validate(&self) -> Result<(), RequestError> {
        for id in &self.instance_ids {
            check_resource_id("InstanceIds", id, "i-")?;
        }
        for filter in &self.filters {
            filter.validate()?;
        }
        if let Some(value) = self.max_results {
            if !(MAX_RESULTS_MIN..=MAX_RESULTS_MAX).contains(&value) {
                return Err(RequestError::OutOfRange {
                    field: "MaxResults",
                    value,
                    min: MAX_RESULTS_MIN,
                    max: MAX_RESULTS_MAX,
                });
            }
            if !self.instance_ids.is_empty() {
                return Err(RequestError::invalid_field(
                    "MaxResults",
                    value.to_string(),
                    "cannot be combined with InstanceIds",
                ));
            }
        }
        if let Some(token) = &self.next_token {
            check_not_blank("NextToken", token)?;
        }
        Ok(())
    }

    fn parameters(&self) -> Map<String, Value> {
        let mut params = Map::new();
        if !self.instance_ids.is_empty() {
            params.insert(String::from("InstanceIds"), json!(self.instance_ids));
        }
        if !self.filters.is_empty() {
            let filters = self
                .filters
                .iter()
                .map(|filter| json!({ "Name": filter.name, "Values": filter.values }))
                .collect::<Vec<_>>();
            params.insert(String::from("Filters"), Value::Array(filters));
        }
        if let Some(value) = self.max_results {
            params.insert(String::from("MaxResults"), json!(value));
        }
        if let Some(token) = &self.next_token {
            params.insert(String::from("NextToken"), json!(token));
        }
        params
    }
}
