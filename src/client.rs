//! EC2 client façade.
//!
//! [`Ec2Client`] exposes one method per provider operation. Implemented
//! operations validate their request and forward it to the transport; the
//! remaining operations are named so callers can see they exist, and fail
//! with [`DispatchError::NotImplemented`] without touching the transport.

use serde_json::Value;

use crate::request::{
    DescribeInstances, DispatchError, RunInstances, TerminateInstances, dispatch,
};
use crate::transport::{Operation, Transport};

/// Result of a client call.
pub type ClientResult<T, E> = Result<T, DispatchError<E>>;

/// Dispatches EC2 operation requests through a [`Transport`].
#[derive(Clone, Debug)]
pub struct Ec2Client<T> {
    transport: T,
}

impl<T: Transport> Ec2Client<T> {
    /// Creates a client over `transport`.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Borrows the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Describes instances.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when validation or the transport fails.
    pub async fn describe_instances(
        &self,
        request: DescribeInstances,
    ) -> ClientResult<Value, T::Error> {
        dispatch(request, &self.transport).await
    }

    /// Launches on-demand instances.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when validation or the transport fails.
    pub async fn run_instances(&self, request: RunInstances) -> ClientResult<Value, T::Error> {
        dispatch(request, &self.transport).await
    }

    /// Alias for [`Ec2Client::run_instances`].
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when validation or the transport fails.
    pub async fn request_on_demand_instances(
        &self,
        request: RunInstances,
    ) -> ClientResult<Value, T::Error> {
        self.run_instances(request).await
    }

    /// Terminates instances.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when validation or the transport fails.
    pub async fn terminate_instances(
        &self,
        request: TerminateInstances,
    ) -> ClientResult<Value, T::Error> {
        dispatch(request, &self.transport).await
    }

    /// Creates an AMI. Not implemented.
    ///
    /// # Errors
    ///
    /// Always returns [`DispatchError::NotImplemented`].
    pub fn create_image(&self) -> ClientResult<Value, T::Error> {
        Self::not_implemented(Operation::CreateImage)
    }

    /// Creates a key pair. Not implemented.
    ///
    /// # Errors
    ///
    /// Always returns [`DispatchError::NotImplemented`].
    pub fn create_key_pair(&self) -> ClientResult<Value, T::Error> {
        Self::not_implemented(Operation::CreateKeyPair)
    }

    /// Snapshots a volume. Not implemented.
    ///
    /// # Errors
    ///
    /// Always returns [`DispatchError::NotImplemented`].
    pub fn create_snapshot(&self) -> ClientResult<Value, T::Error> {
        Self::not_implemented(Operation::CreateSnapshot)
    }

    /// Deletes a snapshot. Not implemented.
    ///
    /// # Errors
    ///
    /// Always returns [`DispatchError::NotImplemented`].
    pub fn delete_snapshot(&self) -> ClientResult<Value, T::Error> {
        Self::not_implemented(Operation::DeleteSnapshot)
    }

    /// Cancels spot instance requests. Not implemented.
    ///
    /// # Errors
    ///
    /// Always returns [`DispatchError::NotImplemented`].
    pub fn cancel_spot_instance_requests(&self) -> ClientResult<Value, T::Error> {
        Self::not_implemented(Operation::CancelSpotInstanceRequests)
    }

    /// Requests spot instances. Not implemented.
    ///
    /// # Errors
    ///
    /// Always returns [`DispatchError::NotImplemented`].
    pub fn request_spot_instances(&self) -> ClientResult<Value, T::Error> {
        Self::not_implemented(Operation::RequestSpotInstances)
    }

    /// Requests a spot fleet. Not implemented.
    ///
    /// # Errors
    ///
    /// Always returns [`DispatchError::NotImplemented`].
    pub fn request_spot_fleet(&self) -> ClientResult<Value, T::Error> {
        Self::not_implemented(Operation::RequestSpotFleet)
    }

    /// Starts stopped instances. Not implemented.
    ///
    /// # Errors
    ///
    /// Always returns [`DispatchError::NotImplemented`].
    pub fn start_instances(&self) -> ClientResult<Value, T::Error> {
        Self::not_implemented(Operation::StartInstances)
    }

    /// Stops running instances. Not implemented.
    ///
    /// # Errors
    ///
    /// Always returns [`DispatchError::NotImplemented`].
    pub fn stop_instances(&self) -> ClientResult<Value, T::Error> {
        Self::not_implemented(Operation::StopInstances)
    }

    fn not_implemented(operation: Operation) -> ClientResult<Value, T::Error> {
        tracing::warn!(%operation, "operation is not implemented");
        Err(DispatchError::NotImplemented(operation))
    }
}
