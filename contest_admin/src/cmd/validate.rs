use crate::cmd::TargetDomain;
use anyhow::{Context, Result};
use clap::Args;
use contest_admin_libs::{
    dialog::{AlertDialog, TextModal},
    validation::{validate_contest, validate_round, ContestInput, RoundInput},
    ValidationErrors,
};
use itertools::Itertools;
use std::{
    io::Write,
    path::{Path, PathBuf},
};
use tokio::io::AsyncReadExt;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    domain: TargetDomain,
    /// JSON file holding the form record. Read from stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
}

async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path).await.with_context(|| {
            let message = format!("couldn't read input file {}", path.display());
            tracing::error!(message);
            message
        }),
        None => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .with_context(|| {
                    let message = "couldn't read input from stdin";
                    tracing::error!(message);
                    message
                })?;
            Ok(buffer)
        }
    }
}

pub fn validate_record(domain: &TargetDomain, raw: &str) -> Result<ValidationErrors> {
    let errors = match domain {
        TargetDomain::Round => {
            let input: RoundInput = serde_json::from_str(raw).with_context(|| {
                let message = "input is not a valid round record";
                tracing::error!(message);
                message
            })?;
            validate_round(&input)
        }
        TargetDomain::Contest => {
            let input: ContestInput = serde_json::from_str(raw).with_context(|| {
                let message = "input is not a valid contest record";
                tracing::error!(message);
                message
            })?;
            validate_contest(&input)
        }
    };

    Ok(errors)
}

pub async fn run(args: ValidateArgs) -> Result<()> {
    tracing::info!("Validate {} record", args.domain);

    let raw = read_input(args.input.as_deref()).await?;
    let errors = validate_record(&args.domain, &raw)?;
    println!("{}", serde_json::to_string_pretty(&errors)?);

    report(&args.domain, &errors, std::io::stderr())
}

/// Show a "Validation failed" alert on `writer` and fail when `errors` is not empty.
fn report(domain: &TargetDomain, errors: &ValidationErrors, writer: impl Write) -> Result<()> {
    if errors.is_empty() {
        tracing::info!("{} record is valid", domain);
        return Ok(());
    }

    let description = errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .join("\n");
    let dialog = AlertDialog::new(true, description, || {}).title("Validation failed");
    dialog.render(&mut TextModal::new(writer));

    anyhow::bail!("{} record has {} invalid field(s)", domain, errors.len())
}
