//! `TerminateInstances` request.

use serde_json::{Map, Value, json};

use super::{OperationRequest, RequestError, check_resource_id};
use crate::transport::Operation;

const MAX_TARGETS: u32 = 1000;

/// Terminates a set of instances.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TerminateInstances {
    instance_ids: Vec<String>,
}

impl TerminateInstances {
    /// Creates a request targeting `ids`. Duplicates are dropped.
    #[must_use]
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ids.into_iter()
            .fold(Self::default(), |request, id| request.instance_id(id))
    }

    /// Target instance ids, without duplicates, in insertion order.
    #[must_use]
    pub fn instance_ids(&self) -> &[String] {
        &self.instance_ids
    }

    /// Adds a target unless it is already present.
    #[must_use]
    pub fn instance_id(mut self, id: impl Into<String>) -> Self {
        let target = id.into();
        if !self.instance_ids.contains(&target) {
            self.instance_ids.push(target);
        }
        self
    }
}

impl OperationRequest for TerminateInstances {
    const OPERATION: Operation = Operation::TerminateInstances;

    fn validate(&self) -> Result<(), RequestError> {
        if self.instance_ids.is_empty() {
            return Err(RequestError::EmptyTargetSet {
                field: "InstanceIds",
            });
        }
        let count = u32::try_from(self.instance_ids.len()).unwrap_or(u32::MAX);
        if count > MAX_TARGETS {
            return Err(RequestError::OutOfRange {
                field: "InstanceIds",
                value: count,
                min: 1,
                max: MAX_TARGETS,
            });
        }
        for id in &self.instance_ids {
            check_resource_id("InstanceIds", id, "i-")?;
        }
        Ok(())
    }

    fn parameters(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert(String::from("InstanceIds"), json!(self.instance_ids));
        params
    }
}
