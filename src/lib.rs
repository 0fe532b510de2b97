//! Typed façade over the EC2 compute API.
//!
//! The crate has two halves. The instance-type catalog turns a family and a
//! size tier (or a raw identifier) into an [`InstanceType`] that is known to
//! exist. The request layer models provider operations as
//! [`OperationRequest`] values that validate locally and are then handed to a
//! caller-supplied [`Transport`]; the crate itself performs no network I/O.

pub mod client;
pub mod config;
pub mod instance_type;
pub mod region;
pub mod request;
pub mod test_support;
pub mod transport;
pub mod user_data;

pub use client::{ClientResult, Ec2Client};
pub use config::{ConfigError, Ec2Config};
pub use instance_type::{CatalogError, Cpu, Family, InstanceType};
pub use region::{AwsRegion, UnknownRegion};
pub use request::{
    DescribeInstances, DispatchError, Filter, OperationRequest, RequestError, RunInstances, Tag,
    TerminateInstances, Validated, dispatch,
};
pub use transport::{
    Operation, PlanTransport, Transport, TransportCall, TransportFuture, TransportSettings,
};
pub use user_data::{UserDataError, resolve_user_data};
