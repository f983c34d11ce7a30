//! pwd-audit: interactive password strength checker CLI

use clap::Parser;
use colored::Colorize;
use pwd_audit::{analyze, default_list_path, AnalysisReport, BreachList, Strength};
use secrecy::SecretString;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Check password strength against entropy, weak patterns, and breach lists
#[derive(Parser, Debug)]
#[command(name = "pwd-audit")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the breach list file (default: $PWD_BREACH_LIST_PATH or ./assets/pwned-top100k.txt)
    #[arg(long, short)]
    list: Option<PathBuf>,

    /// Download the breach list to the list path before starting
    #[cfg(feature = "fetch")]
    #[arg(long)]
    download: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let list_path = args.list.clone().unwrap_or_else(default_list_path);

    #[cfg(feature = "fetch")]
    if args.download {
        println!("Downloading breach list to {}...", list_path.display());
        if let Err(e) = pwd_audit::download_breach_list(&list_path) {
            eprintln!("{} {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
        println!("Download complete.");
    }

    // Load failure is a warning, not a fatal error: analysis still runs,
    // just without breach-rank checks.
    let breach = match BreachList::load_from_path(&list_path) {
        Ok(list) => {
            println!(
                "Loaded {} known-breached passwords from {}.",
                list.len(),
                list_path.display()
            );
            Some(list)
        }
        Err(e) => {
            eprintln!("{} {}", "warning:".yellow().bold(), e);
            eprintln!("Continuing without breach-list checks.");
            None
        }
    };

    println!("Defensive checks only; no password is stored or printed.");

    let stdin = io::stdin();
    loop {
        print!("\nEnter password to check (or just press Enter to exit): ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            println!("Exiting.");
            break;
        }

        let password = SecretString::new(trimmed.to_string().into());
        let report = analyze(&password, breach.as_ref());
        render(&report);
    }

    ExitCode::SUCCESS
}

fn render(report: &AnalysisReport) {
    println!();
    println!("{}", "=== Analysis ===".bold());
    println!("Estimated entropy (bits): {}", report.entropy_display());
    println!("Strength: {}", strength_colored(report.strength));

    if let Some(rank) = report.breach_rank {
        println!(
            "{}",
            format!("!! Warning: this password appears in breach lists (rank {rank}) !!")
                .red()
                .bold()
        );
    }

    println!(
        "Estimated time to compromise (very coarse): {}",
        report.crack_time
    );

    if report.suggestions.is_empty() {
        println!("No immediate suggestions. Consider a password manager and 2FA.");
    } else {
        println!();
        println!("{}", "Suggestions (non-revealing):".bold());
        for suggestion in &report.suggestions {
            println!("- {suggestion}");
        }
    }
}

fn strength_colored(strength: Strength) -> colored::ColoredString {
    match strength {
        Strength::Weak => strength.label().red().bold(),
        Strength::Moderate => strength.label().yellow().bold(),
        Strength::Strong => strength.label().green().bold(),
        Strength::VeryStrong => strength.label().bright_green().bold(),
    }
}
