use anyhow::{bail, Context};
use clap::Parser;
use dhcp_qualifier::utils::logger;
use dhcp_qualifier::{
    CheckReport, CliConfig, Command, IntegerQualifier, QualifierType, ValueCheck, ValueType,
    ValuesFile,
};

const QUALIFIER: IntegerQualifier = IntegerQualifier::new();

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    match config.command {
        Command::Parse { text } => match QUALIFIER.try_parse(&text) {
            Ok(value) => println!("{}", value),
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        Command::Format { text } => match QUALIFIER.format_value(Some(&text)) {
            Some(canonical) => println!("{}", canonical),
            None => {
                eprintln!("❌ Not a valid {}: {:?}", QUALIFIER.value_type(), text);
                std::process::exit(1);
            }
        },
        Command::Type => println!("{}", QUALIFIER.value_type()),
        Command::Check { file, json } => {
            let values = ValuesFile::from_file(&file)
                .with_context(|| format!("failed to load values file {}", file.display()))?;

            let report = match values.value_type {
                ValueType::Integer => ValueCheck::new(QUALIFIER).check(&values.values),
                other => bail!("no qualifier available for value type {}", other),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }

            if !report.is_all_valid() {
                std::process::exit(2);
            }
        }
    }

    Ok(())
}

fn print_report(report: &CheckReport) {
    for outcome in &report.outcomes {
        match &outcome.canonical {
            Some(canonical) => println!("✅ {} = {}", outcome.name, canonical),
            None => match &outcome.input {
                Some(input) => println!("❌ {}: invalid {} {:?}", outcome.name, report.value_type, input),
                None => println!("❌ {}: no value", outcome.name),
            },
        }
    }
    println!(
        "📊 {} valid, {} invalid",
        report.valid_count, report.invalid_count
    );
}
