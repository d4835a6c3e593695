mod config;
mod error;
mod logging;
mod records;
mod status;
mod summary;
mod timefmt;
mod ui;
mod utils;
mod week;

use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, Result};
use chrono::prelude::*;
use clap::{Parser, Subcommand};

use config::Config;
use records::RecordSet;
use status::{classify, DayStatus, ThresholdPolicy};
use summary::summarize;
use timefmt::{to_decimal, to_hhmm};
use utils::{
    day_label, format_hours, get_weekday_name, normalize_date, parse_day_label, truncate_string,
    validate_date, validate_hours, WEEK_DAY_LABELS,
};
use week::compute_week_window;

#[derive(Parser)]
#[command(name = "worktime")]
#[command(about = "Weekly working time summary tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the Monday-to-Sunday week window containing a date
    Week {
        /// Reference date (YYYY-MM-DD, YYYY.MM.DD, or YYYY/MM/DD format, default: today)
        #[arg(short = 'D', long)]
        date: Option<String>,

        /// Verbose output (per-date rows and the ISO week number)
        #[arg(short = 'v', long)]
        verbose: bool,
    },
    /// Convert between "HH:MM" text and decimal hours
    Convert {
        /// Value to convert: "HH:MM" converts to decimal hours, a plain number to "HH:MM"
        value: String,
    },
    /// Classify recorded hours against the configured threshold for a day
    Classify {
        /// Day label (Mon, Tue, Wed, Thu, Fri, Sat, Sun)
        #[arg(short = 'd', long, default_value = "Mon")]
        day: String,

        /// Recorded decimal hours (omit to classify an absent day)
        #[arg(short = 'H', long)]
        hours: Option<f64>,

        /// Verbose output
        #[arg(short = 'v', long)]
        verbose: bool,
    },
    /// Print the weekly working time table for a records file
    Show {
        /// Records file (JSON array of weekly records)
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,

        /// Reference date (default: today)
        #[arg(short = 'D', long)]
        date: Option<String>,

        /// Verbose output (marks below-threshold cells with '!')
        #[arg(short = 'v', long)]
        verbose: bool,
    },
    /// Launch the interactive weekly table
    Interactive {
        /// Records file (JSON array of weekly records)
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    logging::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => (),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default()?;
    let policy = ThresholdPolicy::from_config(&config)?;

    match cli.command {
        Some(Commands::Week { date, verbose }) => handle_week_command(date, verbose),
        Some(Commands::Convert { value }) => handle_convert_command(&value),
        Some(Commands::Classify {
            day,
            hours,
            verbose,
        }) => handle_classify_command(&day, hours, &policy, verbose),
        Some(Commands::Show {
            file,
            date,
            verbose,
        }) => handle_show_command(file, date, &config, &policy, verbose),
        Some(Commands::Interactive { file }) => {
            let records = match file.or_else(|| config.data_file.clone()) {
                Some(path) => RecordSet::from_file(&path)?,
                None => RecordSet::new(),
            };
            ui::run_tui(records, policy)
        }
        None => {
            // Default action when no command is provided
            println!("No command specified. Use --help for available commands.");
            Ok(())
        }
    }
}

/// Resolves the reference date from an optional CLI argument, defaulting to
/// today's local date
fn resolve_reference_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(text) => {
            validate_date(text)?;
            let normalized = normalize_date(text);
            Ok(NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")?)
        }
        None => Ok(Local::now().date_naive()),
    }
}

fn handle_week_command(date: Option<String>, verbose: bool) -> Result<()> {
    let reference = resolve_reference_date(date.as_deref())?;
    let window = compute_week_window(reference);

    println!("\n=== WEEK WINDOW for {} ===", reference.format("%Y-%m-%d"));
    println!("Period: {}", window.period_string());
    println!("Start:  {} (Monday)", window.start.format("%Y-%m-%d"));
    println!("End:    {} (Sunday)", window.end.format("%Y-%m-%d"));
    println!("Week number (within month): {}", window.week_number);

    if verbose {
        // Informational only; WeekWindow itself carries the within-month ordinal
        println!("ISO week: {}", window.start.iso_week().week());
        println!("\nDates in window:");
        for date in &window.dates {
            println!(
                "  {} {} ({})",
                day_label(date.weekday()),
                date.format("%Y-%m-%d"),
                get_weekday_name(date)
            );
        }
    }

    Ok(())
}

fn handle_convert_command(value: &str) -> Result<()> {
    if value.contains(':') {
        let decimal = to_decimal(value)?;
        println!("{}", decimal);
    } else {
        let hours: f64 = value
            .parse()
            .map_err(|_| anyhow!("Invalid decimal hours value: {}", value))?;
        println!("{}", to_hhmm(hours)?);
    }

    Ok(())
}

fn handle_classify_command(
    day: &str,
    hours: Option<f64>,
    policy: &ThresholdPolicy,
    verbose: bool,
) -> Result<()> {
    let weekday = parse_day_label(day).ok_or_else(|| {
        anyhow!(
            "Unknown day label: {}. Expected one of {}",
            day,
            WEEK_DAY_LABELS.join(", ")
        )
    })?;

    if let Some(h) = hours {
        validate_hours(h)?;
    }

    let threshold = policy.threshold_for(weekday);
    let status = classify(day, hours, threshold);

    println!("Day: {} (threshold {})", day, to_hhmm(threshold)?);
    println!("Status: {}", status);

    if verbose {
        match hours {
            Some(h) => println!("Recorded: {} decimal hours ({})", h, to_hhmm(h)?),
            None => println!("Recorded: absent"),
        }
    }

    Ok(())
}

fn handle_show_command(
    file: Option<PathBuf>,
    date: Option<String>,
    config: &Config,
    policy: &ThresholdPolicy,
    verbose: bool,
) -> Result<()> {
    let path = file
        .or_else(|| config.data_file.clone())
        .ok_or_else(|| anyhow!("No records file. Pass -f or set data_file in the config."))?;

    let reference = resolve_reference_date(date.as_deref())?;
    let window = compute_week_window(reference);
    let records = RecordSet::from_file(&path)?;
    let summaries = summarize(&window, &records, policy)?;

    println!("\n=== WEEKLY WORKING TIME ===");
    println!(
        "Period: {} (week {})",
        window.period_string(),
        window.week_number
    );

    if verbose {
        println!(
            "Records: {} employees from {}",
            records.len(),
            path.display()
        );
    }

    // Header row: name column, one "label dd" column per day, total
    print!("\n{:<20}", "Name");
    for date in &window.dates {
        print!(
            " {:>8}",
            format!("{} {:02}", day_label(date.weekday()), date.day())
        );
    }
    println!(" {:>8}", "Total");
    println!("{}", "-".repeat(20 + 9 * 8));

    for summary in &summaries {
        print!("{:<20}", truncate_string(&summary.employee_name, 18));
        for day in &summary.days {
            let cell = if verbose && day.status == DayStatus::BelowThreshold {
                format!("{}!", day.display)
            } else {
                day.display.clone()
            };
            print!(" {:>8}", cell);
        }
        println!(" {:>8}", to_hhmm(summary.total_hours)?);
    }

    println!("{}", "-".repeat(20 + 9 * 8));
    println!(
        "Found {} employees across {} days",
        summaries.len(),
        window.dates.len()
    );

    if verbose {
        let combined: f64 = summaries.iter().map(|s| s.total_hours).sum();
        println!("Combined: {}", format_hours(combined));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_reference_date() {
        let date = resolve_reference_date(Some("2025-09-17")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 9, 17).unwrap());

        let date = resolve_reference_date(Some("2025.09.17")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 9, 17).unwrap());

        let date = resolve_reference_date(Some("2025/09/17")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 9, 17).unwrap());

        assert!(resolve_reference_date(Some("not-a-date")).is_err());
    }

    #[test]
    fn test_resolve_reference_date_defaults_to_today() {
        let date = resolve_reference_date(None).unwrap();
        assert_eq!(date, Local::now().date_naive());
    }
}
