use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use pipenet::parse::{parse_answer, parse_problem};
use pipenet::{solve, Solution};

/// Pipe network solver — minimum number of new pipes in a discounted
/// minimum spanning tree
#[derive(Parser)]
#[command(name = "pipenet", version)]
struct Args {
    /// Problem files ("-" or none reads standard input)
    inputs: Vec<String>,

    /// Print the full solution as JSON instead of the bare answer
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Suppress diagnostics on stderr
    #[arg(short, long)]
    quiet: bool,

    /// Compare the answer with an expected-output file; exit 1 on mismatch
    #[arg(long, value_name = "FILE")]
    expect: Option<PathBuf>,
}

#[derive(Serialize)]
struct OutputResult<'a> {
    file: &'a str,
    nodes: usize,
    pipes: usize,
    discount: i64,
    #[serde(flatten)]
    solution: &'a Solution,
}

fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read standard input")?;
        Ok(text)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("failed to read {source}"))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let inputs = if args.inputs.is_empty() {
        vec!["-".to_string()]
    } else {
        args.inputs.clone()
    };

    if args.expect.is_some() && inputs.len() != 1 {
        bail!("--expect needs exactly one input");
    }

    let mut answers = Vec::with_capacity(inputs.len());
    for source in &inputs {
        let text = read_input(source)?;
        let problem =
            parse_problem(&text).with_context(|| format!("malformed problem in {source}"))?;
        let network = problem
            .network()
            .with_context(|| format!("invalid network in {source}"))?;

        if !args.quiet {
            eprintln!(
                "solving {} ({} facilities, {} pipes, discount {})",
                source,
                network.nodes(),
                network.pipe_count(),
                network.discount()
            );
        }

        let solution = solve(&network);

        if !args.quiet {
            if !solution.spanning {
                eprintln!("  warning: network is not connected, solved as a forest");
            }
            if let Some(trace) = &solution.search {
                eprintln!(
                    "  alternative search: {} rebuilds, stopped: {:?}",
                    trace.iterations, trace.stop
                );
            }
        }

        if args.json {
            let result = OutputResult {
                file: source,
                nodes: network.nodes(),
                pipes: network.pipe_count(),
                discount: network.discount(),
                solution: &solution,
            };
            let json = if args.pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{json}");
        } else {
            println!("{}", solution.answer);
        }
        answers.push(solution.answer);
    }

    if let Some(path) = &args.expect {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let expected = parse_answer(&text)
            .with_context(|| format!("malformed expected answer in {}", path.display()))?;
        let actual = answers[0];
        if actual != expected {
            if !args.quiet {
                eprintln!("wrong: got {actual}, expected {expected}");
            }
            std::process::exit(1);
        }
        if !args.quiet {
            eprintln!("pass: {actual}");
        }
    }

    Ok(())
}
