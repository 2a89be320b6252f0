use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rayon::prelude::*;

use pipenet_bench::cases::{self, Case};
use pipenet_bench::catalog::{self, Category, Scenario};
use pipenet_bench::metrics;
use pipenet_bench::report::{self, CaseReport, FullReport};

#[derive(Parser)]
#[command(name = "pipenet-bench", about = "pipenet regression harness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run built-in scenarios and output results.
    Run {
        /// Filter by category name.
        #[arg(long)]
        category: Option<String>,
        /// Filter by scenario name pattern (substring match).
        #[arg(long)]
        scenario: Option<String>,
        /// Output format: terminal, json.
        #[arg(long, default_value = "terminal")]
        format: String,
        /// Only show failures.
        #[arg(long)]
        quiet: bool,
    },
    /// List available scenarios.
    List {
        /// Filter by category.
        #[arg(long)]
        category: Option<String>,
    },
    /// Run all scenarios and exit with code 1 on any failure.
    Regression {
        /// Filter by category.
        #[arg(long)]
        category: Option<String>,
    },
    /// Check every `<name>.in` / `<name>.out` pair in a directory.
    Check {
        /// Directory holding the case files.
        dir: PathBuf,
        /// Output format: terminal, json.
        #[arg(long, default_value = "terminal")]
        format: String,
        /// Only show failures.
        #[arg(long)]
        quiet: bool,
    },
    /// Check the cases of a TOML suite file.
    Suite {
        /// Suite file.
        file: PathBuf,
        /// Output format: terminal, json.
        #[arg(long, default_value = "terminal")]
        format: String,
        /// Only show failures.
        #[arg(long)]
        quiet: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            category,
            scenario,
            format,
            quiet,
        } => cmd_run(category, scenario, &format, quiet),
        Command::List { category } => cmd_list(category),
        Command::Regression { category } => cmd_regression(category),
        Command::Check { dir, format, quiet } => {
            cmd_cases(&dir, cases::load_dir(&dir), &format, quiet)
        }
        Command::Suite {
            file,
            format,
            quiet,
        } => cmd_cases(&file, cases::load_suite(&file), &format, quiet),
    }
}

fn filter_scenarios(category: Option<String>, scenario: Option<String>) -> Vec<Scenario> {
    let mut scenarios = if let Some(cat_name) = &category {
        let cat =
            Category::from_name(cat_name).unwrap_or_else(|| panic!("unknown category: {cat_name}"));
        catalog::scenarios_for_category(cat)
    } else {
        catalog::all_scenarios()
    };

    if let Some(pattern) = &scenario {
        scenarios.retain(|s| s.name.contains(pattern.as_str()));
    }

    scenarios
}

fn run_scenarios(scenarios: &[Scenario]) -> Vec<CaseReport> {
    scenarios
        .par_iter()
        .map(|s| {
            let result = metrics::evaluate(&s.build());
            report::case_report(&s.name, s.category.name(), &result, s.expected)
        })
        .collect()
}

fn print(full: &FullReport, format: &str) {
    match format {
        "json" => println!("{}", report::to_json(full)),
        _ => report::print_terminal(full),
    }
}

fn cmd_run(category: Option<String>, scenario: Option<String>, format: &str, quiet: bool) {
    let scenarios = filter_scenarios(category, scenario);
    let mut reports = run_scenarios(&scenarios);
    if quiet {
        reports.retain(|r| !r.passed);
    }
    print(&FullReport::from_cases(reports), format);
}

fn cmd_list(category: Option<String>) {
    let scenarios = filter_scenarios(category, None);
    println!("{:<30} {:<13} Description", "Name", "Category");
    println!("{}", "-".repeat(80));
    for s in &scenarios {
        println!("{:<30} {:<13} {}", s.name, s.category.name(), s.description);
    }
    println!("\nTotal: {} scenarios", scenarios.len());
}

fn cmd_regression(category: Option<String>) {
    let scenarios = filter_scenarios(category, None);
    let full = FullReport::from_cases(run_scenarios(&scenarios));
    report::print_terminal(&full);

    if !full.all_passed() {
        std::process::exit(1);
    }
}

fn cmd_cases(
    source: &Path,
    loaded: Result<Vec<Case>, cases::CaseError>,
    format: &str,
    quiet: bool,
) {
    let cases = match loaded {
        Ok(cases) => cases,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    if !quiet {
        eprintln!("checking {} cases from {}", cases.len(), source.display());
    }

    let mut reports: Vec<CaseReport> = cases
        .par_iter()
        .map(|c| {
            let result = metrics::evaluate(&c.problem);
            if !quiet && result.answer.is_some() && !result.spanning {
                eprintln!("  {}: network is not connected, solved as a forest", c.name);
            }
            report::case_report(&c.name, "case", &result, c.expected)
        })
        .collect();

    let all_passed = reports.iter().all(|r| r.passed);
    if quiet {
        reports.retain(|r| !r.passed);
    }
    print(&FullReport::from_cases(reports), format);

    if !all_passed {
        std::process::exit(1);
    }
}
