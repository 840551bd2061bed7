//! # Moto CLI Application
//!
//! Terminal front end for the motorcycle component calculators.
//!
//! ```text
//! moto_cli list
//! moto_cli fields clutch
//! moto_cli run clutch max_engine_torque=60 outer_diameter=140 ... [--json]
//! moto_cli run clutch --examples max_engine_torque=95
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use moto_core::{CalcError, FieldKind, FormValues, Report, Tool};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "moto_cli", version, about = "Motorcycle component design calculators")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the available tools
    List,
    /// Show the input fields of a tool
    Fields {
        /// Tool slug, e.g. `clutch`
        tool: String,
    },
    /// Run a tool
    Run {
        /// Tool slug, e.g. `clutch`
        tool: String,
        /// Inputs as `name=value`
        #[arg(value_parser = parse_pair)]
        values: Vec<(String, String)>,
        /// Start from each field's example value
        #[arg(long)]
        examples: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .ok_or_else(|| format!("expected name=value, got `{}`", raw))
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}

fn rule() {
    println!("═══════════════════════════════════════");
}

fn print_list() {
    println!("Motorcycle Design Tools");
    println!("=======================");
    for tool in Tool::ALL {
        println!("  {:<15} {}", tool.slug(), tool.title());
    }
}

fn print_fields(tool: Tool) {
    println!("{} inputs:", tool.title());
    for field in tool.fields() {
        let kind = match field.kind {
            FieldKind::Float => "number".to_string(),
            FieldKind::Int => "integer".to_string(),
            FieldKind::Choice(options) => format!("one of {}", options.join("|")),
        };
        let unit = if field.unit.is_empty() {
            String::new()
        } else {
            format!(" [{}]", field.unit)
        };
        println!(
            "  {:<36} {}{} ({}, e.g. {})",
            field.name, field.label, unit, kind, field.example
        );
    }
}

fn print_report(report: &Report) {
    rule();
    println!("  {} RESULTS", report.tool.title().to_uppercase());
    rule();
    println!();
    for row in &report.rows {
        println!("  {:<28} {}", format!("{}:", row.label), row.value);
    }

    // Classification rows read as pass/fail
    let class = report
        .text_of("viability_class")
        .or(report.text_of("compatibility_class"));
    if let Some(class) = class {
        println!();
        rule();
        let pass = class == "viable" || class == "ideal" || class == "acceptable";
        println!("  RESULT: {} {}", class, status_icon(pass));
    }
    rule();
}

/// Returns `false` when the inputs were rejected.
fn run_tool(
    slug: &str,
    values: Vec<(String, String)>,
    examples: bool,
    json: bool,
) -> anyhow::Result<bool> {
    let tool = Tool::from_slug(slug)?;

    let mut form = if examples {
        FormValues::examples(tool.fields())
    } else {
        FormValues::new()
    };
    for (name, value) in values {
        form.insert(name, value);
    }
    debug!(tool = tool.slug(), fields = form.len(), "running tool");

    match tool.run(&form) {
        Ok(report) => {
            if json {
                let out = serde_json::to_string_pretty(&report).context("serializing report")?;
                println!("{}", out);
            } else {
                print_report(&report);
            }
            Ok(true)
        }
        Err(e @ CalcError::InvalidInput { .. }) => {
            eprintln!("Error: {}", e);
            if json {
                if let Ok(err_json) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", err_json);
                }
            }
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            print_list();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Fields { tool } => {
            print_fields(Tool::from_slug(&tool)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run { tool, values, examples, json } => {
            let accepted = run_tool(&tool, values, examples, json)?;
            Ok(if accepted { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            parse_pair("safety_factor=1.3").unwrap(),
            ("safety_factor".to_string(), "1.3".to_string())
        );
        assert_eq!(parse_pair("note=a=b").unwrap().1, "a=b");
        assert!(parse_pair("safety_factor").is_err());
    }

    #[test]
    fn test_cli_parses_run() {
        let cli =
            Cli::try_parse_from(["moto_cli", "run", "rim", "tyre_width_mm=120", "--json"]).unwrap();
        match cli.command {
            Commands::Run { tool, values, json, examples } => {
                assert_eq!(tool, "rim");
                assert_eq!(values, vec![("tyre_width_mm".to_string(), "120".to_string())]);
                assert!(json);
                assert!(!examples);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let values = vec![("outer_diameter".into(), "wide".into())];
        let accepted = run_tool("clutch", values, false, true).unwrap();
        assert!(!accepted);
    }

    #[test]
    fn test_unknown_tool_is_an_error() {
        assert!(run_tool("sidecar", Vec::new(), true, false).is_err());
    }

    #[test]
    fn test_examples_run_succeeds() {
        let values = vec![("number_of_gears".into(), "5".into())];
        assert!(run_tool("gearbox", values, true, false).unwrap());
    }
}
