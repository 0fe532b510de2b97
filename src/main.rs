//! Binary entry point for the `ec2kit` CLI.

mod cli;

use std::convert::Infallible;
use std::io::{self, Write};
use std::process;

use clap::Parser;
use serde_json::Value;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use cli::{
    CheckCommand, Cli, FamilyCode, PlanCommand, PlanDescribeCommand, PlanRunCommand,
    PlanTerminateCommand, ResolveCommand,
};
use ec2kit::{
    CatalogError, ConfigError, Cpu, DescribeInstances, DispatchError, Ec2Client, Ec2Config, Family,
    Filter, InstanceType, PlanTransport, RunInstances, TerminateInstances, UserDataError,
    resolve_user_data,
};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    UserData(#[from] UserDataError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError<Infallible>),
    #[error("--{flag} does not apply to {family} instances")]
    UnsupportedVariant { flag: &'static str, family: Family },
    #[error("missing {what}: pass --{flag} or set {env_var}")]
    MissingArgument {
        what: &'static str,
        flag: &'static str,
        env_var: &'static str,
    },
    #[error("invalid filter '{0}': expected name=value1,value2")]
    InvalidFilter(String),
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    let exit_code = match dispatch(cli, &mut io::stdout()).await {
        Ok(()) => 0,
        Err(err) => {
            report_error(&err);
            1
        }
    };

    process::exit(exit_code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn dispatch(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    match cli {
        Cli::Resolve(args) => resolve(&args, out),
        Cli::Check(args) => check(&args, out),
        Cli::Families => families(out),
        Cli::Plan(command) => {
            let planned = plan(command).await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&planned)?)?;
            Ok(())
        }
    }
}

fn resolve(args: &ResolveCommand, out: &mut impl Write) -> Result<(), CliError> {
    let family = family_for(args.family, args.nvme, args.amd)?;
    let instance_type = InstanceType::from_family_size(family, args.size)?;
    writeln!(out, "{instance_type}")?;
    Ok(())
}

fn check(args: &CheckCommand, out: &mut impl Write) -> Result<(), CliError> {
    let instance_type = InstanceType::from_string(&args.identifier)?;
    writeln!(out, "{instance_type}")?;
    Ok(())
}

fn families(out: &mut impl Write) -> Result<(), CliError> {
    for family in Family::ALL {
        let tiers = family.tiers();
        writeln!(
            out,
            "{:<4} 1-{:<3} {} .. {}",
            family.code(),
            family.max_tier(),
            tiers.first().copied().unwrap_or_default(),
            tiers.last().copied().unwrap_or_default(),
        )?;
    }
    Ok(())
}

fn family_for(code: FamilyCode, nvme: bool, amd: bool) -> Result<Family, CliError> {
    let cpu = if amd { Cpu::Amd } else { Cpu::Intel };
    let family = match code {
        FamilyCode::T1 => Family::T1,
        FamilyCode::T2 => Family::T2,
        FamilyCode::T3 => Family::T3 { cpu },
        FamilyCode::M5 => Family::GeneralPurpose { local_nvme: nvme },
        FamilyCode::M4 => Family::GeneralPurposeOld,
        FamilyCode::R4 => Family::HighMemory,
        FamilyCode::C4 => Family::ComputeOld,
        FamilyCode::C5 => Family::Compute { local_nvme: nvme },
        FamilyCode::C6 => Family::ComputeC6 { cpu },
        FamilyCode::I2 => Family::HighIo,
    };
    if amd && !matches!(code, FamilyCode::T3 | FamilyCode::C6) {
        return Err(CliError::UnsupportedVariant {
            flag: "amd",
            family,
        });
    }
    if nvme && !matches!(code, FamilyCode::M5 | FamilyCode::C5) {
        return Err(CliError::UnsupportedVariant {
            flag: "nvme",
            family,
        });
    }
    Ok(family)
}

async fn plan(command: PlanCommand) -> Result<Value, CliError> {
    let client = Ec2Client::new(PlanTransport);
    let planned = match command {
        PlanCommand::Run(args) => {
            let request = run_request(args)?;
            client.run_instances(request).await?
        }
        PlanCommand::Terminate(args) => client.terminate_instances(terminate_request(args)).await?,
        PlanCommand::Describe(args) => {
            let request = describe_request(args)?;
            client.describe_instances(request).await?
        }
    };
    Ok(planned)
}

fn run_request(args: PlanRunCommand) -> Result<RunInstances, CliError> {
    let config = Ec2Config::load_without_cli_args()?;
    let instance_type = match args.instance_type.as_deref() {
        Some(raw) => InstanceType::from_string(raw)?,
        None => config.instance_type()?,
    };
    let image_id = args
        .image
        .or_else(|| config.default_image_id.clone())
        .ok_or(CliError::MissingArgument {
            what: "image id",
            flag: "image",
            env_var: "EC2KIT_DEFAULT_IMAGE_ID",
        })?;
    let inline = resolve_user_data(args.user_data.as_deref(), args.user_data_file.as_deref())?;
    let user_data = match inline {
        Some(payload) => Some(payload),
        None => config.default_user_data()?,
    };

    let mut request = RunInstances::new(instance_type, image_id, args.count).user_data(user_data);
    if let Some(key_name) = args.key_name.or(config.default_key_name) {
        request = request.key_name(key_name);
    }
    Ok(request)
}

fn terminate_request(args: PlanTerminateCommand) -> TerminateInstances {
    TerminateInstances::new(args.instance_ids)
}

fn describe_request(args: PlanDescribeCommand) -> Result<DescribeInstances, CliError> {
    let mut request = DescribeInstances::new();
    for instance_id in args.instance_ids {
        request = request.instance_id(instance_id);
    }
    for raw in &args.filters {
        request = request.filter(parse_filter(raw)?);
    }
    if let Some(max_results) = args.max_results {
        request = request.max_results(max_results);
    }
    Ok(request)
}

fn parse_filter(raw: &str) -> Result<Filter, CliError> {
    let (name, values) = raw
        .split_once('=')
        .ok_or_else(|| CliError::InvalidFilter(raw.to_owned()))?;
    let values: Vec<&str> = values
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect();
    Ok(Filter::new(name.trim(), values))
}

fn report_error(err: &CliError) {
    write_error(io::stderr(), err);
}

fn write_error(mut target: impl Write, err: &CliError) {
    writeln!(target, "{err}").ok();
}
