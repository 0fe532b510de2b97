//! Command-line interface definitions for the `ec2kit` binary.
//!
//! This module centralises the clap parser structures so both the main binary
//! and the build script can reuse them when generating the manual page.

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI for the `ec2kit` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ec2kit",
    about = "Resolve EC2 instance types and preview provider requests",
    arg_required_else_help = true
)]
pub(crate) enum Cli {
    /// Resolve a family and size tier to an instance type.
    #[command(name = "resolve", about = "Resolve a family and size tier to an instance type")]
    Resolve(ResolveCommand),
    /// Check that an identifier names a known instance type.
    #[command(name = "check", about = "Check that an identifier is a known instance type")]
    Check(CheckCommand),
    /// List families with their tier ranges.
    #[command(name = "families", about = "List instance families and their size tiers")]
    Families,
    /// Print the call a request would send, without sending it.
    #[command(subcommand, name = "plan", about = "Preview the call a request would send")]
    Plan(PlanCommand),
}

/// Family selector accepted on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum FamilyCode {
    /// Previous-generation micro.
    T1,
    /// Burstable T2.
    T2,
    /// Burstable T3 (`--amd` selects t3a).
    T3,
    /// General purpose M5 (`--nvme` selects m5d).
    M5,
    /// General purpose M4.
    M4,
    /// Memory optimised R4.
    R4,
    /// Compute optimised C4.
    C4,
    /// Compute optimised C5 (`--nvme` selects c5d).
    C5,
    /// Compute optimised C6 (`--amd` selects c6a, otherwise c6i).
    C6,
    /// Storage optimised I2.
    I2,
}

/// Arguments for `ec2kit resolve`.
#[derive(Debug, Parser)]
pub(crate) struct ResolveCommand {
    /// Instance family.
    #[arg(value_enum)]
    pub(crate) family: FamilyCode,
    /// Size tier, starting at 1 for the smallest size.
    pub(crate) size: u32,
    /// Select the local NVMe variant (m5d, c5d).
    #[arg(long)]
    pub(crate) nvme: bool,
    /// Select the AMD variant (t3a, c6a).
    #[arg(long)]
    pub(crate) amd: bool,
}

/// Arguments for `ec2kit check`.
#[derive(Debug, Parser)]
pub(crate) struct CheckCommand {
    /// Identifier such as `m5.large`.
    pub(crate) identifier: String,
}

/// Requests that can be previewed.
#[derive(Debug, Subcommand)]
pub(crate) enum PlanCommand {
    /// Preview a `RunInstances` call.
    #[command(name = "run")]
    Run(PlanRunCommand),
    /// Preview a `TerminateInstances` call.
    #[command(name = "terminate")]
    Terminate(PlanTerminateCommand),
    /// Preview a `DescribeInstances` call.
    #[command(name = "describe")]
    Describe(PlanDescribeCommand),
}

/// Arguments for `ec2kit plan run`.
#[derive(Debug, Parser)]
pub(crate) struct PlanRunCommand {
    /// Image id. Falls back to `EC2KIT_DEFAULT_IMAGE_ID`.
    #[arg(long, value_name = "AMI")]
    pub(crate) image: Option<String>,
    /// Instance type. Falls back to `EC2KIT_DEFAULT_INSTANCE_TYPE`.
    #[arg(long = "type", value_name = "TYPE")]
    pub(crate) instance_type: Option<String>,
    /// Number of instances to launch.
    #[arg(long, default_value_t = 1)]
    pub(crate) count: u32,
    /// Key pair name. Falls back to `EC2KIT_DEFAULT_KEY_NAME`.
    #[arg(long, value_name = "NAME")]
    pub(crate) key_name: Option<String>,
    /// Inline user data (cloud-config YAML or script).
    #[arg(long, value_name = "USER_DATA", conflicts_with = "user_data_file")]
    pub(crate) user_data: Option<String>,
    /// User data read from a local file.
    #[arg(long, value_name = "PATH", conflicts_with = "user_data")]
    pub(crate) user_data_file: Option<String>,
}

/// Arguments for `ec2kit plan terminate`.
#[derive(Debug, Parser)]
pub(crate) struct PlanTerminateCommand {
    /// Instance ids to terminate.
    pub(crate) instance_ids: Vec<String>,
}

/// Arguments for `ec2kit plan describe`.
#[derive(Debug, Parser)]
pub(crate) struct PlanDescribeCommand {
    /// Restrict the listing to these instance ids.
    #[arg(long = "instance-id", value_name = "ID")]
    pub(crate) instance_ids: Vec<String>,
    /// Filter in `name=value1,value2` form. May be repeated.
    #[arg(long = "filter", value_name = "NAME=VALUES")]
    pub(crate) filters: Vec<String>,
    /// Page size (5 to 1000).
    #[arg(long, value_name = "N")]
    pub(crate) max_results: Option<u32>,
}
