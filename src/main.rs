use anyhow::Context;
use clap::Parser;
use email_syntax::configuration::{get_configuration, ValidatorSettings};
use email_syntax::report::Report;
use email_syntax::telemetry::{get_subscriber, init_subscriber};
use email_syntax::validate::{IdnProfile, Policy};
use email_syntax::EmailValidator;
use std::io::Write;

#[derive(Parser)]
#[command(name = "email-syntax")]
#[command(about = "Check email addresses against a syntax policy")]
#[command(version)]
struct Cli {
    /// rfc5322 (alias strict), common or simple
    #[arg(short, long)]
    policy: Option<Policy>,

    /// punycode, uts46 or strict
    #[arg(long, value_name = "PROFILE")]
    idn_profile: Option<IdnProfile>,

    #[arg(required = true, value_name = "ADDRESS")]
    addresses: Vec<String>,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = get_configuration().context("Failed to read configuration.")?;

    let subscriber = get_subscriber(
        "email-syntax".into(),
        config.application.log_level.clone(),
        std::io::stderr,
    );
    init_subscriber(subscriber);

    let mut stdout = std::io::stdout().lock();
    let all_valid = run(&cli, config.validator, &mut stdout)?;
    stdout.flush().context("Failed to flush reports")?;

    if !all_valid {
        std::process::exit(1);
    }

    Ok(())
}

/// Writes one JSON report per address. Returns whether every address passed.
fn run(
    cli: &Cli,
    mut settings: ValidatorSettings,
    out: &mut impl Write,
) -> Result<bool, anyhow::Error> {
    settings.override_with(cli.policy, cli.idn_profile);
    let validator = EmailValidator::from(settings);

    let mut all_valid = true;
    for input in &cli.addresses {
        let report = Report::new(&validator, input);
        all_valid &= report.valid;

        serde_json::to_writer(&mut *out, &report).context("Failed to write report")?;
        writeln!(out).context("Failed to write report")?;
    }

    Ok(all_valid)
}
