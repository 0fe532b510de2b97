//! Boundary between request construction and the provider client.
//!
//! The crate never performs network I/O itself. A [`Transport`] receives a
//! fully validated [`TransportCall`] and returns whatever the provider
//! answered; authentication, endpoints, and retries live behind it.

use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use serde::Serialize;
use serde_json::{Map, Value, json};

/// Provider operations addressed by the façade.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Operation {
    /// Lists instances matching optional ids and filters.
    DescribeInstances,
    /// Launches on-demand instances.
    RunInstances,
    /// Terminates instances.
    TerminateInstances,
    /// Creates an AMI from an instance. Not implemented.
    CreateImage,
    /// Creates an SSH key pair. Not implemented.
    CreateKeyPair,
    /// Snapshots an EBS volume. Not implemented.
    CreateSnapshot,
    /// Deletes an EBS snapshot. Not implemented.
    DeleteSnapshot,
    /// Cancels open spot requests. Not implemented.
    CancelSpotInstanceRequests,
    /// Requests spot instances. Not implemented.
    RequestSpotInstances,
    /// Requests a spot fleet. Not implemented.
    RequestSpotFleet,
    /// Starts stopped instances. Not implemented.
    StartInstances,
    /// Stops running instances. Not implemented.
    StopInstances,
}

impl Operation {
    /// Provider operation name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DescribeInstances => "DescribeInstances",
            Self::RunInstances => "RunInstances",
            Self::TerminateInstances => "TerminateInstances",
            Self::CreateImage => "CreateImage",
            Self::CreateKeyPair => "CreateKeyPair",
            Self::CreateSnapshot => "CreateSnapshot",
            Self::DeleteSnapshot => "DeleteSnapshot",
            Self::CancelSpotInstanceRequests => "CancelSpotInstanceRequests",
            Self::RequestSpotInstances => "RequestSpotInstances",
            Self::RequestSpotFleet => "RequestSpotFleet",
            Self::StartInstances => "StartInstances",
            Self::StopInstances => "StopInstances",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured description of one provider call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransportCall {
    /// Operation to invoke.
    pub operation: Operation,
    /// Parameters keyed by provider field name (`InstanceIds`, `MinCount`).
    pub parameters: Map<String, Value>,
}

impl TransportCall {
    /// Creates a call for `operation` with the given parameters.
    #[must_use]
    pub const fn new(operation: Operation, parameters: Map<String, Value>) -> Self {
        Self {
            operation,
            parameters,
        }
    }
}

/// Future returned by transport calls.
pub type TransportFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// The single capability required from a provider client.
pub trait Transport {
    /// Provider specific error type, surfaced to callers unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Executes `call` and returns the provider's structured response.
    fn execute(&self, call: TransportCall) -> TransportFuture<'_, Value, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Error = T::Error;

    fn execute(&self, call: TransportCall) -> TransportFuture<'_, Value, Self::Error> {
        (**self).execute(call)
    }
}

/// Transport that performs no I/O and echoes each call back as JSON.
///
/// Useful for previewing exactly what a request would send.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlanTransport;

impl Transport for PlanTransport {
    type Error = Infallible;

    fn execute(&self, call: TransportCall) -> TransportFuture<'_, Value, Self::Error> {
        Box::pin(async move {
            Ok(json!({
                "operation": call.operation.as_str(),
                "parameters": Value::Object(call.parameters),
            }))
        })
    }
}

/// Opaque settings a provider client is constructed from.
#[derive(Clone, Eq, PartialEq)]
pub struct TransportSettings {
    /// Access key id.
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
    /// Target region code.
    pub region: crate::region::AwsRegion,
    /// Optional endpoint override (for example a local emulator).
    pub endpoint: Option<String>,
}

impl fmt::Debug for TransportSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportSettings")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
