//! Clap derive structures for the `avi-nat` and `avi-create-object` CLIs.
//!
//! Only depends on clap and clap_complete so `build.rs` can include it
//! directly for man page generation.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, ValueEnum};
use clap_complete::Shell;

// ── avi-nat ──────────────────────────────────────────────────────────

/// Configure NAT policies and auto NAT rules in Cisco Firepower Management Center
#[derive(Debug, Parser)]
#[command(
    name = "avi-nat",
    version,
    about = "Configure NAT policies and auto NAT rules in Cisco FMC",
    long_about = "Configure NAT policies and auto NAT rules in Cisco Firepower \
        Management Center.\n\n\
        Exactly one action runs per invocation. List actions print JSON; \
        create actions print `<status>: <body>` as returned by the controller.",
    group(ArgGroup::new("action").multiple(false))
)]
pub struct NatCli {
    #[command(flatten)]
    pub connection: ConnectionOpts,

    #[command(flatten)]
    pub common: CommonOpts,

    /// List every FTD NAT policy
    #[arg(long, group = "action")]
    pub get_ftdnatpolicies: bool,

    /// List the auto NAT rules of the named NAT policy
    #[arg(long, value_name = "POLICY", group = "action")]
    pub get_autonatrules: Option<String>,

    /// Create an FTD NAT policy with this name
    #[arg(long, value_name = "NAME", group = "action")]
    pub create_ftdnatpolicy: Option<String>,

    /// Create an auto NAT rule from a JSON draft (see --show-example)
    #[arg(long, value_name = "JSON", group = "action")]
    pub create_autonatrule: Option<String>,

    /// Print the controller software versions
    #[arg(long, group = "action")]
    pub server_version: bool,

    /// Print an example --create-autonatrule invocation and exit
    #[arg(long, group = "action")]
    pub show_example: bool,

    /// Description for a created NAT policy
    #[arg(long, default_value = DEFAULT_DESCRIPTION)]
    pub description: String,

    /// Request expanded records from list actions
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

// ── avi-create-object ────────────────────────────────────────────────

/// Create host, FQDN, network and range objects in Cisco Firepower Management Center
#[derive(Debug, Parser)]
#[command(
    name = "avi-create-object",
    version,
    about = "Create address objects in Cisco FMC"
)]
pub struct ObjectCli {
    #[command(flatten)]
    pub connection: ConnectionOpts,

    #[command(flatten)]
    pub common: CommonOpts,

    /// Name of the object
    #[arg(long, required_unless_present = "completions")]
    pub name: Option<String>,

    /// Object type; these are the FMC collection names
    #[arg(long, value_enum, required_unless_present = "completions")]
    pub object_type: Option<ObjectTypeArg>,

    /// Address, network (CIDR), range (a-b) or FQDN of the object
    #[arg(long, value_name = "VALUE")]
    pub network: Option<String>,

    /// Description of the object
    #[arg(long, default_value = DEFAULT_DESCRIPTION)]
    pub description: String,

    /// DNS resolution for FQDN objects
    #[arg(long, value_enum, default_value = "IPV4_ONLY")]
    pub dnsresolution: DnsResolutionArg,
}

pub const DEFAULT_DESCRIPTION: &str = "created by automation script";

// ── Shared options ───────────────────────────────────────────────────

/// How to reach and authenticate against the controller.
#[derive(Debug, Args)]
pub struct ConnectionOpts {
    /// FMC host, IP, or base URL (overrides profile)
    #[arg(long, env = "FMC_HOST")]
    pub fmchost: Option<String>,

    /// FMC username (overrides profile)
    #[arg(long, short = 'u', env = "FMC_USERNAME")]
    pub username: Option<String>,

    /// FMC password; prompted for when absent everywhere else
    #[arg(long, short = 'p', env = "FMC_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Target domain in FMC [default: Global]
    #[arg(long, env = "FMC_DOMAIN")]
    pub domain: Option<String>,

    /// CA certificate used to verify the controller (verification is off without it)
    #[arg(long, value_name = "PATH")]
    pub sslverify: Option<PathBuf>,

    /// Configuration profile to use
    #[arg(long, env = "FMC_PROFILE")]
    pub profile: Option<String>,

    /// Request timeout in seconds [default: 30]
    #[arg(long, env = "FMC_TIMEOUT")]
    pub timeout: Option<u64>,
}

/// Output and diagnostics.
#[derive(Debug, Args)]
pub struct CommonOpts {
    /// Output format for list actions
    #[arg(long, short = 'o', default_value = "json")]
    pub output: OutputFormat,

    /// Log file path
    #[arg(long, env = "FMC_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

// ── Value enums ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
}

/// Ordered from quietest to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lower")]
pub enum ObjectTypeArg {
    Hosts,
    Fqdns,
    Networks,
    Ranges,
}

impl ObjectTypeArg {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hosts => "hosts",
            Self::Fqdns => "fqdns",
            Self::Networks => "networks",
            Self::Ranges => "ranges",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DnsResolutionArg {
    #[value(name = "IPV4_ONLY")]
    Ipv4Only,
    #[value(name = "IPV6_ONLY")]
    Ipv6Only,
    #[value(name = "IPV4_AND_IPV6")]
    Ipv4AndIpv6,
}
