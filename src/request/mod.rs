//! Operation requests and their dispatch protocol.
//!
//! Every request owns the parameters of one provider operation, validates
//! them locally, and renders them into a [`TransportCall`]. The only way to
//! reach a transport is through [`Validated`], which consumes the request, so
//! an invalid request never leaves the process and a request is never sent
//! twice.

mod describe;
mod run;
mod terminate;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::transport::{Operation, Transport, TransportCall};

pub use describe::{DescribeInstances, Filter};
pub use run::{RunInstances, Tag};
pub use terminate::TerminateInstances;

/// Local precondition failures detected before any I/O.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum RequestError {
    /// Raised when an operation that targets instances was given none.
    #[error("{field} must contain at least one instance id")]
    EmptyTargetSet {
        /// Parameter that was empty.
        field: &'static str,
    },
    /// Raised when an instance count is below its minimum.
    #[error("{field} must be at least {min}, got {value}")]
    InvalidCount {
        /// Count parameter (`MinCount` or `MaxCount`).
        field: &'static str,
        /// Value supplied by the caller.
        value: u32,
        /// Smallest accepted value.
        min: u32,
    },
    /// Raised when a numeric parameter lies outside its accepted range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Parameter name.
        field: &'static str,
        /// Value supplied by the caller.
        value: u32,
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// Raised when a parameter value has the wrong shape.
    #[error("invalid {field} '{value}': {reason}")]
    InvalidField {
        /// Parameter name.
        field: &'static str,
        /// Offending value.
        value: String,
        /// What the parameter expects.
        reason: String,
    },
}

impl RequestError {
    pub(crate) fn invalid_field(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Errors returned when dispatching a request.
#[derive(Debug, Error)]
pub enum DispatchError<E>
where
    E: std::error::Error + 'static,
{
    /// Raised when the request failed validation; the transport was not
    /// called.
    #[error("invalid {operation} request: {source}")]
    Request {
        /// Operation the request was built for.
        operation: Operation,
        /// Validation failure.
        #[source]
        source: RequestError,
    },
    /// Error returned by the transport, passed through unchanged.
    #[error(transparent)]
    Transport(E),
    /// Raised for operations the façade names but does not implement yet.
    #[error("{0} is not implemented")]
    NotImplemented(Operation),
}

impl<E> DispatchError<E>
where
    E: std::error::Error + 'static,
{
    /// Returns the validation failure, if this error is one.
    #[must_use]
    pub const fn request_error(&self) -> Option<&RequestError> {
        match self {
            Self::Request { source, .. } => Some(source),
            Self::Transport(_) | Self::NotImplemented(_) => None,
        }
    }

    /// Returns the transport error, if this error is one.
    #[must_use]
    pub const fn transport_error(&self) -> Option<&E> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Request { .. } | Self::NotImplemented(_) => None,
        }
    }
}

/// Capability set shared by every provider operation.
pub trait OperationRequest: Sized {
    /// Operation this request invokes.
    const OPERATION: Operation;

    /// Checks every local precondition of the request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] naming the offending parameter.
    fn validate(&self) -> Result<(), RequestError>;

    /// Renders the request into provider parameters. Only called on
    /// requests that passed [`OperationRequest::validate`].
    fn parameters(&self) -> serde_json::Map<String, Value>;

    /// Validates the request and wraps it for dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when validation fails.
    fn validated(self) -> Result<Validated<Self>, RequestError> {
        self.validate()?;
        Ok(Validated(self))
    }
}

/// A request that passed validation and may be dispatched once.
#[derive(Debug, PartialEq)]
pub struct Validated<R>(R);

impl<R: OperationRequest> Validated<R> {
    /// Borrows the validated request.
    #[must_use]
    pub const fn request(&self) -> &R {
        &self.0
    }

    /// Converts the request into the call handed to the transport.
    #[must_use]
    pub fn into_call(self) -> TransportCall {
        TransportCall::new(R::OPERATION, self.0.parameters())
    }

    /// Sends the request through `transport`, returning its result verbatim.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn dispatch<T>(self, transport: &T) -> Result<Value, T::Error>
    where
        T: Transport + ?Sized,
    {
        let call = self.into_call();
        debug!(operation = %call.operation, "dispatching request");
        transport.execute(call).await
    }
}

/// Validates `request` and dispatches it through `transport`.
///
/// # Errors
///
/// Returns [`DispatchError::Request`] without touching the transport when
/// validation fails, or [`DispatchError::Transport`] with the transport's
/// own error.
pub async fn dispatch<R, T>(request: R, transport: &T) -> Result<Value, DispatchError<T::Error>>
where
    R: OperationRequest,
    T: Transport + ?Sized,
{
    let validated = request.validated().map_err(|source| {
        warn!(operation = %R::OPERATION, error = %source, "request rejected before dispatch");
        DispatchError::Request {
            operation: R::OPERATION,
            source,
        }
    })?;
    validated
        .dispatch(transport)
        .await
        .map_err(DispatchError::Transport)
}

/// Checks a provider resource id such as `i-0abc12345678def90`: the prefix
/// followed by 8 or 17 lowercase hex digits.
pub(crate) fn check_resource_id(
    field: &'static str,
    value: &str,
    prefix: &str,
) -> Result<(), RequestError> {
    let Some(suffix) = value.strip_prefix(prefix) else {
        return Err(RequestError::invalid_field(
            field,
            value,
            format!("expected an id starting with '{prefix}'"),
        ));
    };
    let hex = suffix
        .bytes()
        .all(|byte| byte.is_ascii_digit() || (b'a'..=b'f').contains(&byte));
    if !hex || !matches!(suffix.len(), 8 | 17) {
        return Err(RequestError::invalid_field(
            field,
            value,
            format!("expected '{prefix}' followed by 8 or 17 lowercase hex digits"),
        ));
    }
    Ok(())
}

/// Rejects empty or whitespace-only optional strings.
pub(crate) fn check_not_blank(field: &'static str, value: &str) -> Result<(), RequestError> {
    if value.trim().is_empty() {
        return Err(RequestError::invalid_field(
            field,
            value,
            "must not be empty",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
