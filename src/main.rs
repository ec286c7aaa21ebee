use anyhow::Context;
use clap::Parser;
use std::io::Write;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "mindcheck")]
#[command(about = "Score a ten-item mental health self-check (answers 0-3)", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Explain the score on stderr: per-item points, category and advice
    #[arg(short, long)]
    explain: bool,

    /// Disable colors in the explanation
    #[arg(long)]
    no_color: bool,

    /// The ten answers, in questionnaire order
    #[arg(value_name = "ANSWER", num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    answers: Vec<String>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match (e.use_stderr(), e.print()) {
                (false, Ok(())) => EXIT_SUCCESS,
                _ => EXIT_FAILURE,
            };
            std::process::exit(code);
        }
    };

    if let Err(e) = mindcheck::telemetry::init(cli.verbose) {
        eprintln!("mindcheck error: {}", e);
        std::process::exit(EXIT_FAILURE);
    }

    let result = match mindcheck::score_arguments(&cli.answers) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("mindcheck error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    if let Err(e) = print_score(&result) {
        eprintln!("mindcheck error: {:#}", e);
        std::process::exit(EXIT_FAILURE);
    }

    if cli.explain {
        let use_colors = !cli.no_color && mindcheck::output::should_use_colors();
        eprintln!(
            "{}",
            mindcheck::output::format_breakdown(&result, use_colors)
        );
        eprintln!(
            "{}",
            mindcheck::output::format_category(result.category(), use_colors)
        );
    }

    std::process::exit(EXIT_SUCCESS);
}

fn print_score(result: &mindcheck::ScoreResult) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", mindcheck::output::format_score(result))
        .context("Failed to write score to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}
