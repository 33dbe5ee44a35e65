mod logic;
mod util;
mod watch;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::Instant;

use logic::{CheckContext, LogicTester, Scenario, ScenarioResult};
use util::{parse_seeds, split_csv};
use vitrin_core::Catalog;

#[derive(Debug, Parser)]
#[command(name = "vitrin-tester", version = "0.1.0")]
#[command(about = "Property sweeps for the Vitrin limited-offer countdown and catalog")]
struct Args {
    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed
    #[arg(long, default_value_t = 200)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console", "csv"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Validate this catalog JSON instead of the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Follow the live offer countdown for N ticks instead of running scenarios
    #[arg(long, value_name = "N")]
    watch: Option<u32>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    let catalog = load_catalog(args.catalog.as_deref());

    if let Some(ticks) = args.watch {
        let catalog = catalog.map_err(anyhow::Error::msg)?;
        let mut output_target = OutputTarget::new(args.output.clone())?;
        watch::run_watch(&mut output_target, &catalog, ticks).await?;
        output_target.flush_inner()?;
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let seeds = parse_seeds(&args.seeds)?;
    let ctx = CheckContext { catalog };
    let results = run_scenarios(&args, &scenarios, &seeds, &ctx);

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for scenario in Scenario::ALL {
        writeln!(
            output_target.writer(),
            "  {:25} - {}",
            scenario.key(),
            scenario.description()
        )?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🛍  Vitrin Offer Tester".bright_cyan().bold());
    println!("{}", "=======================".cyan());
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    let loaded = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
            .and_then(|json| {
                Catalog::from_json(&json)
                    .with_context(|| format!("invalid catalog {}", path.display()))
            }),
        None => Catalog::builtin().context("built-in catalog"),
    };
    loaded.map_err(|err| {
        log::warn!("catalog unavailable: {err:#}");
        format!("{err:#}")
    })
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for scenario in Scenario::ALL {
            if !scenarios.iter().any(|s| s == scenario.key()) {
                scenarios.push(scenario.key().to_string());
            }
        }
    }
    scenarios
}

fn run_scenarios(
    args: &Args,
    scenarios: &[String],
    seeds: &[u64],
    ctx: &CheckContext,
) -> Vec<ScenarioResult> {
    println!("{}", "🧠 Running Offer Logic Checks".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let tester = LogicTester::new(args.verbose);
    let mut results = Vec::new();
    for name in scenarios {
        match Scenario::from_key(name) {
            Some(scenario) => {
                results.extend(tester.run_scenario(scenario, ctx, seeds, args.iterations));
            }
            None => eprintln!("⚠️  Unknown scenario: {}", name.yellow()),
        }
    }
    results
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => logic::reports::generate_json_report(&mut output_target, results)?,
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Vitrin Offer Logic Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        "csv" => logic::reports::generate_csv_report(&mut output_target, results)?,
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            scenarios: "all".to_string(),
            list_scenarios: false,
            seeds: "1337".to_string(),
            iterations: 5,
            report: "json".to_string(),
            verbose: false,
            output: None,
            catalog: None,
            watch: None,
        }
    }

    #[test]
    fn all_expands_without_duplicates() {
        let expanded = expand_scenarios("concrete,all");
        assert_eq!(expanded.len(), Scenario::ALL.len());
        assert_eq!(expanded[0], "concrete");
    }

    #[test]
    fn unknown_scenarios_are_skipped() {
        let ctx = CheckContext {
            catalog: load_catalog(None),
        };
        let names = vec!["concrete".to_string(), "nope".to_string()];
        let results = run_scenarios(&base_args(), &names, &[1], &ctx);
        assert_eq!(results.len(), 1);
        assert!(results[0].passed);
    }

    #[test]
    fn missing_catalog_file_is_reported_not_fatal() {
        let err = load_catalog(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(err.contains("failed to read"));
    }

    #[test]
    fn report_written_to_file() {
        let path = std::env::temp_dir().join(format!("vitrin-report-{}.json", std::process::id()));
        let mut args = base_args();
        args.output = Some(path.clone());
        let ctx = CheckContext {
            catalog: load_catalog(None),
        };
        let results = run_scenarios(&args, &["expired".to_string()], &[7], &ctx);
        write_reports(&args, &results, Instant::now()).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<ScenarioResult> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].scenario_name, "expired");
        let _ = std::fs::remove_file(path);
    }
}
