use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::str::FromStr;

use dpmark::harness::{run_scorer_batch, run_scorer_suite, run_square_suite};
use dpmark::report::{
    render_chart, square_chart_points, write_alignment_records, write_square_records, ChartSeries,
};
use sysinfo::{get_current_pid, ProcessExt, ProcessRefreshKind, System, SystemExt};

const DEFAULT_SEED: u64 = 123;
const DEFAULT_N: usize = 2000;
const DEFAULT_M: usize = 2500;
const DEFAULT_P_ONE: f64 = 0.4;
const DEFAULT_CHART_PREFIX: &str = "square_plot";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let command = match Command::parse(&args) {
        Ok(cmd) => cmd,
        Err(err) => {
            eprintln!("bench_suite: {err}");
            print_usage();
            process::exit(2);
        }
    };

    if let Err(err) = command.run() {
        eprintln!("bench_suite: output error: {err}");
        process::exit(1);
    }
}

enum Command {
    /// Scorer suite then square suite with defaults, both to stdout.
    Full,
    Scorer {
        n: usize,
        m: usize,
        seed: u64,
        out: Option<String>,
    },
    Batch {
        seed: u64,
        out: Option<String>,
    },
    Square {
        p_one: f64,
        seed: u64,
        out: Option<String>,
    },
    Chart {
        p_one: f64,
        seed: u64,
        prefix: String,
    },
}

impl Command {
    fn parse(args: &[String]) -> Result<Self, String> {
        let Some(name) = args.first() else {
            return Ok(Command::Full);
        };
        if name == "--help" || name == "-h" {
            print_usage();
            process::exit(0);
        }
        let rest = &args[1..];
        match name.as_str() {
            "scorer" => Ok(Command::Scorer {
                n: parse_at(rest, 0, DEFAULT_N, "sequence length n")?,
                m: parse_at(rest, 1, DEFAULT_M, "sequence length m")?,
                seed: parse_at(rest, 2, DEFAULT_SEED, "seed")?,
                out: rest.get(3).cloned(),
            }),
            "batch" => Ok(Command::Batch {
                seed: parse_at(rest, 0, DEFAULT_SEED, "seed")?,
                out: rest.get(1).cloned(),
            }),
            "square" => Ok(Command::Square {
                p_one: parse_at(rest, 0, DEFAULT_P_ONE, "density p_one")?,
                seed: parse_at(rest, 1, DEFAULT_SEED, "seed")?,
                out: rest.get(2).cloned(),
            }),
            "chart" => Ok(Command::Chart {
                p_one: parse_at(rest, 0, DEFAULT_P_ONE, "density p_one")?,
                seed: parse_at(rest, 1, DEFAULT_SEED, "seed")?,
                prefix: rest
                    .get(2)
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_CHART_PREFIX.to_owned()),
            }),
            other => Err(format!("unrecognized command '{other}'")),
        }
    }

    fn run(&self) -> io::Result<()> {
        match self {
            Command::Full => {
                let stdout = io::stdout();
                let mut out = BufWriter::new(stdout.lock());
                let records = with_rss_diagnostic("scorer", || {
                    run_scorer_suite(DEFAULT_N, DEFAULT_M, DEFAULT_SEED)
                });
                write_alignment_records(&mut out, &records)?;
                writeln!(out)?;
                let records =
                    with_rss_diagnostic("square", || run_square_suite(DEFAULT_P_ONE, DEFAULT_SEED));
                write_square_records(&mut out, &records)?;
                out.flush()
            }
            Command::Scorer { n, m, seed, out } => {
                let records = with_rss_diagnostic("scorer", || run_scorer_suite(*n, *m, *seed));
                let mut dest = open_output(out.as_deref())?;
                write_alignment_records(&mut dest, &records)?;
                dest.flush()
            }
            Command::Batch { seed, out } => {
                let suites = with_rss_diagnostic("batch", || run_scorer_batch(*seed));
                let mut dest = open_output(out.as_deref())?;
                for (idx, suite) in suites.iter().enumerate() {
                    if idx > 0 {
                        writeln!(dest)?;
                    }
                    write_alignment_records(&mut dest, suite)?;
                }
                dest.flush()
            }
            Command::Square { p_one, seed, out } => {
                let records = with_rss_diagnostic("square", || run_square_suite(*p_one, *seed));
                let mut dest = open_output(out.as_deref())?;
                write_square_records(&mut dest, &records)?;
                dest.flush()
            }
            Command::Chart {
                p_one,
                seed,
                prefix,
            } => {
                let records = with_rss_diagnostic("square", || run_square_suite(*p_one, *seed));
                let mut csv = BufWriter::new(File::create(format!("{prefix}.csv"))?);
                write_square_records(&mut csv, &records)?;
                csv.flush()?;

                let (time_points, mem_points) = square_chart_points(&records);
                let mut time_svg = BufWriter::new(File::create(format!("{prefix}_time.svg"))?);
                render_chart(
                    &mut time_svg,
                    &ChartSeries {
                        title: "Zero-square time vs m*n",
                        label: "time_ms",
                        points: &time_points,
                    },
                )?;
                time_svg.flush()?;

                let mut mem_svg = BufWriter::new(File::create(format!("{prefix}_mem.svg"))?);
                render_chart(
                    &mut mem_svg,
                    &ChartSeries {
                        title: "Zero-square memory vs m*n",
                        label: "mem_bytes",
                        points: &mem_points,
                    },
                )?;
                mem_svg.flush()
            }
        }
    }
}

/// Parse positional argument `idx`, falling back to `default` when absent.
fn parse_at<T: FromStr>(args: &[String], idx: usize, default: T, what: &str) -> Result<T, String> {
    match args.get(idx) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| format!("invalid {what} '{raw}'")),
        None => Ok(default),
    }
}

fn open_output(path: Option<&str>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(p) => Ok(Box::new(BufWriter::new(File::create(p)?))),
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Run a suite closure and report the process RSS delta to stderr.
///
/// This is an operator diagnostic only; the records keep the documented
/// estimator figures.
fn with_rss_diagnostic<T>(label: &str, suite: impl FnOnce() -> T) -> T {
    let mut sys = System::new();
    let before = rss_kib(&mut sys);
    let value = suite();
    let after = rss_kib(&mut sys);
    eprintln!(
        "{label} suite RSS delta: {} KiB",
        after.saturating_sub(before)
    );
    value
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory()
    } else {
        0
    }
}

fn print_usage() {
    println!(
        "\
Usage: cargo run --bin bench_suite [-- <command> [args]]

Commands:
  scorer [n] [m] [seed] [out.csv]   weighted local scoring suite (defaults: 2000 2500 123, stdout)
  batch  [seed] [out.csv]           scoring suite across the built-in size table
  square [p_one] [seed] [out.csv]   zero-square suite (defaults: 0.4 123, stdout)
  chart  [p_one] [seed] [prefix]    square suite plus SVG time/memory charts (default prefix: square_plot)

With no command, runs `scorer` then `square` with defaults to stdout.

Examples:
  cargo run --bin bench_suite
  cargo run --bin bench_suite -- scorer 1000 1500 42 results_p1.csv
  cargo run --bin bench_suite -- batch 42 p1_all.csv
  cargo run --bin bench_suite -- chart 0.4 42 square_plot
"
    );
}
