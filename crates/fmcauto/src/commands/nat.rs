//! `avi-nat` action handlers.

use tracing::{debug, info};

use fmcauto_core::{NatRuleDraft, Session};

use crate::cli::NatCli;
use crate::config::{Config, resolve_session};
use crate::error::CliError;
use crate::output;

/// The single action an invocation performs.
#[derive(Debug)]
pub enum NatAction {
    ListPolicies,
    ListRules { policy: String },
    CreatePolicy { name: String },
    CreateRule(Box<NatRuleDraft>),
    ServerVersion,
    ShowExample,
}

impl NatAction {
    /// Pick the requested action. The rule draft is parsed here, before
    /// any connection is made.
    pub fn from_cli(cli: &NatCli) -> Result<Option<Self>, CliError> {
        let action = if cli.get_ftdnatpolicies {
            Self::ListPolicies
        } else if let Some(ref policy) = cli.get_autonatrules {
            Self::ListRules {
                policy: policy.clone(),
            }
        } else if let Some(ref json) = cli.create_autonatrule {
            Self::CreateRule(Box::new(serde_json::from_str(json)?))
        } else if let Some(ref name) = cli.create_ftdnatpolicy {
            Self::CreatePolicy { name: name.clone() }
        } else if cli.server_version {
            Self::ServerVersion
        } else if cli.show_example {
            Self::ShowExample
        } else {
            return Ok(None);
        };
        Ok(Some(action))
    }
}

/// Example invocation printed by `--show-example`.
pub fn example_invocation() -> Result<String, CliError> {
    let draft = serde_json::to_string(&NatRuleDraft::example())?;
    Ok(format!(
        "avi-nat --fmchost <FMC-HOST> -u <FMC-USER> -p <FMC-PASSWORD> --create-autonatrule '{draft}'"
    ))
}

pub async fn run(cli: &NatCli, cfg: &Config) -> Result<(), CliError> {
    let Some(action) = NatAction::from_cli(cli)? else {
        info!("no action requested");
        output::print_output("Done nothing. Aborting!");
        return Ok(());
    };

    if let NatAction::ShowExample = action {
        output::print_output(&example_invocation()?);
        return Ok(());
    }

    let session_config = resolve_session(&cli.connection, cfg)?;
    let mut session = Session::establish(&session_config).await?;
    debug!(action = ?action, "dispatching");

    let format = cli.common.output;
    let rendered = match action {
        NatAction::ListPolicies => {
            let policies = session.list_nat_policies(cli.verbose).await?;
            output::render(format, &policies)?
        }
        NatAction::ListRules { policy } => {
            let rules = session.list_nat_rules(&policy, cli.verbose).await?;
            output::render(format, &rules)?
        }
        NatAction::CreatePolicy { name } => {
            let resp = session.create_nat_policy(&name, &cli.description).await?;
            info!(%resp, "create NAT policy");
            resp.to_string()
        }
        NatAction::CreateRule(draft) => {
            let resp = session.create_nat_rule(*draft).await?;
            info!(%resp, "create auto NAT rule");
            resp.to_string()
        }
        NatAction::ServerVersion => {
            let version = session.server_version().await?;
            output::render(format, &version)?
        }
        NatAction::ShowExample => example_invocation()?,
    };

    output::print_output(&rendered);
    Ok(())
}
