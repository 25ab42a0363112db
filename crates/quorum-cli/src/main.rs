//! `quorum` CLI — run the availability matching engine from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Find meeting windows for a group (stdin → stdout)
//! cat participants.json | quorum run
//!
//! # From file to file, with explicit options
//! quorum run -i participants.json -o result.json \
//!     --duration-minutes 60 --min-participants 2 --timezone Europe/Berlin
//!
//! # Normalize a raw interval set (drop malformed, merge overlaps)
//! quorum normalize -i intervals.json
//!
//! # Render a match result as a per-slot coverage grid
//! quorum coverage -i result.json \
//!     --start 2026-09-01T00:00:00Z --end 2026-09-14T00:00:00Z
//! ```
//!
//! Input and output are JSON; instants are ISO-8601 strings. The engine
//! itself never touches I/O — this binary is the request layer.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use quorum_engine::{
    coverage_grid, interval, CoverageOptions, MatchOptions, MatchResult, ParticipantAvailability,
    TimeInterval,
};

#[derive(Parser)]
#[command(
    name = "quorum",
    version,
    about = "Availability matching for group scheduling"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute meeting-time candidates from participant availabilities
    Run {
        /// Input file with a JSON array of participant records (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file for the match result (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Exact meeting length in minutes
        #[arg(long, default_value_t = 30)]
        duration_minutes: u32,
        /// Minimum attendees a partial window must cover
        #[arg(long, default_value_t = 1)]
        min_participants: usize,
        /// IANA timezone used for time-of-day scoring
        #[arg(long, default_value = "UTC")]
        timezone: Tz,
    },
    /// Merge a raw interval set into sorted, non-overlapping form
    Normalize {
        /// Input file with a JSON array of intervals (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Expand a match result into a per-slot coverage grid
    Coverage {
        /// Input file with a match result (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Start of the date range (ISO-8601)
        #[arg(long)]
        start: DateTime<Utc>,
        /// End of the date range (ISO-8601)
        #[arg(long)]
        end: DateTime<Utc>,
        /// Slot size in minutes
        #[arg(long, default_value_t = 30)]
        slot_minutes: u32,
        /// First hour of the operating band (inclusive, local)
        #[arg(long, default_value_t = 12)]
        hour_start: u32,
        /// Last hour of the operating band (exclusive, local)
        #[arg(long, default_value_t = 22)]
        hour_end: u32,
        /// IANA timezone whose local days the grid is laid out on
        #[arg(long, default_value = "UTC")]
        timezone: Tz,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            output,
            duration_minutes,
            min_participants,
            timezone,
        } => {
            let json = read_input(input.as_deref())?;
            let participants: Vec<ParticipantAvailability> =
                serde_json::from_str(&json).context("Failed to parse participant records")?;

            let options = MatchOptions {
                duration_minutes,
                min_participants,
                reference_timezone: timezone,
            };
            let result: MatchResult = quorum_engine::run_match(&participants, &options)
                .context("Matching failed")?;

            let pretty = serde_json::to_string_pretty(&result)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Normalize { input, output } => {
            let json = read_input(input.as_deref())?;
            let intervals: Vec<TimeInterval> =
                serde_json::from_str(&json).context("Failed to parse intervals")?;

            let well_formed: Vec<TimeInterval> = intervals
                .into_iter()
                .filter(TimeInterval::is_well_formed)
                .collect();
            let merged = interval::merge(&well_formed);

            let pretty = serde_json::to_string_pretty(&merged)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Coverage {
            input,
            output,
            start,
            end,
            slot_minutes,
            hour_start,
            hour_end,
            timezone,
        } => {
            let json = read_input(input.as_deref())?;
            let result: MatchResult =
                serde_json::from_str(&json).context("Failed to parse match result")?;

            let options = CoverageOptions {
                slot_minutes,
                hour_start,
                hour_end,
                reference_timezone: timezone,
            };
            let cells = coverage_grid(&result.windows, start, end, &options)
                .context("Coverage grid failed")?;

            let pretty = serde_json::to_string_pretty(&cells)?;
            write_output(output.as_deref(), &pretty)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
