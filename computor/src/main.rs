mod error;
mod present;

use anyhow::{Context, Result};
use clap::Parser;
use computor_compute::{
    fmt::{FormatOptions, Order, ReducedForm},
    resolve,
    Resolution,
    SolveOptions,
};
use computor_parser::Equation;
use error::InputErrors;
use rustyline::{error::ReadlineError, DefaultEditor};
use serde::Serialize;
use std::{io::{self, BufRead, IsTerminal, Write}, process::ExitCode};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "computor",
    version,
    about = "Solves polynomial equations of degree 2 or lower",
    long_about = "Solves polynomial equations of degree 2 or lower.\n\n\
        Equations are read from the arguments, from stdin (one per line), or interactively when \
        stdin is a terminal. Example: computor \"5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0\""
)]
struct Cli {
    /// Equations to solve, such as "5 * X^0 + 4 * X^1 = 4 * X^0"
    #[arg(allow_hyphen_values = true)]
    equations: Vec<String>,

    /// Write reduced forms lowest exponent first
    #[arg(long)]
    ascending: bool,

    /// Treat a discriminant within this distance of zero as zero
    #[arg(long, default_value_t = 0.0)]
    epsilon: f64,

    /// Print each result as one line of JSON
    #[arg(long)]
    json: bool,
}

/// The settings shared by every equation of one run.
#[derive(Debug, Clone, Copy)]
struct Settings {
    solve: SolveOptions,
    format: FormatOptions,
    json: bool,
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            solve: SolveOptions { epsilon: cli.epsilon },
            format: FormatOptions {
                order: if cli.ascending { Order::Ascending } else { Order::Descending },
                ..Default::default()
            },
            json: cli.json,
        }
    }
}

/// One line of `--json` output.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum JsonReport<'a> {
    Solved {
        equation: &'a str,
        reduced_form: String,
        resolution: &'a Resolution,
    },
    Invalid {
        equation: &'a str,
        errors: Vec<String>,
    },
}

/// Reads and solves one equation, writing the result to `out` and any errors to stderr (or to
/// `out` in JSON mode).
///
/// Returns `false` if the equation could not be read.
fn run_equation(src_id: &str, input: &str, settings: Settings, out: &mut impl Write) -> Result<bool> {
    debug!(src_id, input, "solving equation");

    let equation = match Equation::parse(input) {
        Ok(equation) => equation,
        Err(errs) => {
            let errs = InputErrors::from(errs);
            if settings.json {
                let errors = errs.render_plain(src_id, input)?;
                serde_json::to_writer(&mut *out, &JsonReport::Invalid { equation: input, errors })?;
                writeln!(out)?;
            } else {
                errs.report_to_stderr(src_id, input)?;
            }
            return Ok(false);
        },
    };

    let resolution = resolve(&equation, settings.solve);
    if settings.json {
        let reduced_form = ReducedForm::new(&resolution.reduced, settings.format).to_string();
        serde_json::to_writer(&mut *out, &JsonReport::Solved {
            equation: input,
            reduced_form,
            resolution: &resolution,
        })?;
        writeln!(out)?;
    } else {
        for line in present::present(&resolution, settings.format) {
            writeln!(out, "{}", line)?;
        }
    }

    Ok(true)
}

/// Solves every equation in turn. Returns `false` if any of them could not be read.
fn run_batch<'a>(
    equations: impl IntoIterator<Item = (String, &'a str)>,
    settings: Settings,
    out: &mut impl Write,
) -> Result<bool> {
    let mut all_ok = true;

    for (i, (src_id, input)) in equations.into_iter().enumerate() {
        if i > 0 && !settings.json {
            writeln!(out)?;
        }
        all_ok &= run_equation(&src_id, input, settings, &mut *out)?;
    }

    Ok(all_ok)
}

/// Pairs each non-blank line with a source name holding its line number.
fn stdin_equations(lines: &[String]) -> impl Iterator<Item = (String, &str)> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (format!("stdin:{}", i + 1), line.as_str()))
}

/// Runs the interactive mode until the user exits.
fn run_repl(settings: Settings) -> Result<()> {
    let mut rl = DefaultEditor::new().context("failed to start the line editor")?;

    fn process_line(rl: &mut DefaultEditor, settings: Settings) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        let mut out = io::stdout().lock();
        if let Err(err) = run_equation("repl", &input, settings, &mut out) {
            eprintln!("{:#}", err);
        }
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, settings) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }

    Ok(())
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::from(&cli);

    let all_ok = if !cli.equations.is_empty() {
        let single = cli.equations.len() == 1;
        run_batch(
            cli.equations.iter().enumerate().map(|(i, equation)| {
                let src_id = if single { "input".to_string() } else { format!("input #{}", i + 1) };
                (src_id, equation.as_str())
            }),
            settings,
            &mut io::stdout().lock(),
        )?
    } else if !io::stdin().is_terminal() {
        // one equation per line
        let lines = io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("failed to read equations from stdin")?;
        run_batch(stdin_equations(&lines), settings, &mut io::stdout().lock())?
    } else {
        run_repl(settings)?;
        true
    };

    Ok(if all_ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use super::*;

    fn settings(args: &[&str]) -> Settings {
        Settings::from(&Cli::parse_from(["computor"].iter().chain(args)))
    }

    fn run(input: &str, settings: Settings) -> (bool, String) {
        let mut out = Vec::new();
        let ok = run_equation("input", input, settings, &mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn flags_become_settings() {
        let parsed = settings(&["--ascending", "--epsilon", "1e-9", "--json"]);
        assert_eq!(parsed.format.order, Order::Ascending);
        assert_eq!(parsed.solve, SolveOptions { epsilon: 1e-9 });
        assert!(parsed.json);

        let defaults = settings(&[]);
        assert_eq!(defaults.format.order, Order::Descending);
        assert_eq!(defaults.solve, SolveOptions::default());
        assert!(!defaults.json);
    }

    #[test]
    fn leading_minus_is_an_equation() {
        let cli = Cli::parse_from(["computor", "-X = 2"]);
        assert_eq!(cli.equations, vec!["-X = 2".to_string()]);
    }

    #[test]
    fn solved_equation_is_presented() {
        let (ok, out) = run("5 * X^0 + 4 * X^1 = 4 * X^0", settings(&[]));
        assert!(ok);
        assert_eq!(out, "Reduced form: 4 * X^1 + 1 * X^0 = 0\n\
            Polynomial degree: 1\n\
            The solution is: -0.25\n");
    }

    #[test]
    fn unsupported_degree_is_not_a_failure() {
        let (ok, out) = run("8 * X^0 - 6 * X^1 + 0 * X^2 - 5.6 * X^3 = 3 * X^0", settings(&[]));
        assert!(ok);
        assert!(out.ends_with("The polynomial degree is strictly greater than 2, I can't solve.\n"), "{}", out);
    }

    #[test]
    fn malformed_equation_is_a_failure() {
        let (ok, out) = run("5 * X^0", settings(&[]));
        assert!(!ok);
        // the report goes to stderr
        assert_eq!(out, "");
    }

    #[test]
    fn json_solved_line() {
        let (ok, out) = run("1 * X^2 + 3 * X^1 + 2 * X^0 = 0", settings(&["--json"]));
        assert!(ok);
        assert_eq!(out.lines().count(), 1);

        let report: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(report["status"], "solved");
        assert_eq!(report["equation"], "1 * X^2 + 3 * X^1 + 2 * X^0 = 0");
        assert_eq!(report["reduced_form"], "1 * X^2 + 3 * X^1 + 2 * X^0 = 0");
        assert_eq!(report["resolution"]["degree"], 2);
        assert_eq!(report["resolution"]["reduced"], serde_json::json!([2.0, 3.0, 1.0]));

        let solved = &report["resolution"]["outcome"]["Ok"];
        assert_eq!(solved["discriminant"], 1.0);
        assert_eq!(solved["solution"]["kind"], "two_real");
        assert_eq!(solved["solution"]["x1"], -2.0);
        assert_eq!(solved["solution"]["x2"], -1.0);
    }

    #[test]
    fn json_invalid_line() {
        let (ok, out) = run("3 * X^-2 = 1", settings(&["--json"]));
        assert!(!ok);

        let report: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(report["status"], "invalid");
        let errors = report["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].as_str().unwrap().contains("invalid exponent `-2`"), "{}", errors[0]);
    }

    #[test]
    fn batch_fails_if_any_equation_fails() {
        let mut out = Vec::new();
        let ok = run_batch(
            [("input #1".to_string(), "X = 1"), ("input #2".to_string(), "X ="), ("input #3".to_string(), "2 = 2")],
            settings(&[]),
            &mut out,
        ).unwrap();
        assert!(!ok);

        // results are separated by blank lines
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Reduced form: 1 * X^1 - 1 * X^0 = 0\n"), "{}", out);
        assert!(out.ends_with("\nAll real numbers are solutions\n"), "{}", out);
        assert!(out.contains("\n\n"), "{}", out);
    }

    #[test]
    fn batch_of_valid_equations_succeeds() {
        let mut out = Vec::new();
        let ok = run_batch([("input".to_string(), "X^2 = 4")], settings(&["--json"]), &mut out).unwrap();
        assert!(ok);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[test]
    fn stdin_skips_blank_lines() {
        let lines = ["X = 1", "", "   ", "2 * X = 4"].map(String::from);
        let equations = stdin_equations(&lines).collect::<Vec<_>>();
        assert_eq!(equations, vec![
            ("stdin:1".to_string(), "X = 1"),
            ("stdin:4".to_string(), "2 * X = 4"),
        ]);
    }
}
