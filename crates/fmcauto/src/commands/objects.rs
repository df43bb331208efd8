//! `avi-create-object` handler.

use tracing::info;

use fmcauto_core::{AddressObjectDraft, DnsResolution, Session};

use crate::cli::{DnsResolutionArg, ObjectCli};
use crate::config::{Config, resolve_session};
use crate::error::CliError;
use crate::output;

impl From<DnsResolutionArg> for DnsResolution {
    fn from(arg: DnsResolutionArg) -> Self {
        match arg {
            DnsResolutionArg::Ipv4Only => Self::Ipv4Only,
            DnsResolutionArg::Ipv6Only => Self::Ipv6Only,
            DnsResolutionArg::Ipv4AndIpv6 => Self::Ipv4AndIpv6,
        }
    }
}

/// Collect the object draft from parsed flags.
pub fn draft_from_cli(cli: &ObjectCli) -> Result<AddressObjectDraft, CliError> {
    let name = cli.name.clone().ok_or_else(|| CliError::Validation {
        field: "--name".into(),
        reason: "an object name is required".into(),
    })?;
    let object_type = cli.object_type.ok_or_else(|| CliError::Validation {
        field: "--object-type".into(),
        reason: "an object type is required".into(),
    })?;

    Ok(AddressObjectDraft {
        name,
        object_type: object_type.as_str().into(),
        value: cli.network.clone(),
        description: cli.description.clone(),
        dns_resolution: cli.dnsresolution.into(),
    })
}

pub async fn run(cli: &ObjectCli, cfg: &Config) -> Result<(), CliError> {
    let draft = draft_from_cli(cli)?;

    let session_config = resolve_session(&cli.connection, cfg)?;
    let session = Session::establish(&session_config).await?;

    let resp = session.create_address_object(draft).await?;
    info!(%resp, "create address object");
    output::print_output(&resp.to_string());
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_fill_description_and_dns_resolution() {
        let cli = ObjectCli::try_parse_from([
            "avi-create-object",
            "--name",
            "web01",
            "--object-type",
            "fqdns",
            "--network",
            "www.example.com",
        ])
        .unwrap();

        let draft = draft_from_cli(&cli).unwrap();
        assert_eq!(draft.object_type, "fqdns");
        assert_eq!(draft.description, "created by automation script");
        assert_eq!(draft.dns_resolution, DnsResolution::Ipv4Only);
        assert_eq!(draft.value.as_deref(), Some("www.example.com"));
    }

    #[test]
    fn dns_resolution_accepts_upstream_spelling() {
        let cli = ObjectCli::try_parse_from([
            "avi-create-object",
            "--name",
            "web01",
            "--object-type",
            "fqdns",
            "--dnsresolution",
            "IPV4_AND_IPV6",
        ])
        .unwrap();
        assert_eq!(
            draft_from_cli(&cli).unwrap().dns_resolution,
            DnsResolution::Ipv4AndIpv6
        );
    }

    #[test]
    fn unknown_object_type_is_rejected_by_parser() {
        let err = ObjectCli::try_parse_from([
            "avi-create-object",
            "--name",
            "p80",
            "--object-type",
            "portobjects",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
