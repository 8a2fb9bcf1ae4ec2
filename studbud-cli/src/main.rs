use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;
use studbud_core::{
    known_subjects, plan_study, render_schedule, render_summary, time, KeywordScorer,
    LayeredCatalog, PlanInput, PlanRequest, RandomDurations, StudentProfile, TopicCatalog,
};

mod calendar;
mod config;
mod setup;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "studbud",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("STUDBUD_BUILD_SHA"), ")"),
    about = "Studbud study planner"
)]
struct Cli {
    /// Debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One-time interactive setup: capture your study profile
    Setup,

    /// Build a day-by-day study plan up to the exam
    Plan {
        /// Subject name, e.g. "12th grade math"
        #[arg(long)]
        subject: String,

        /// First plan day, YYYY-MM-DD (default: today in the configured timezone)
        #[arg(long)]
        current_date: Option<String>,

        /// Exam date, YYYY-MM-DD (the plan ends the day before)
        #[arg(long)]
        exam_date: String,

        /// Daily start time, HH:MM
        #[arg(long, default_value = "09:00")]
        start_time: String,

        /// Comma-separated weekday names, e.g. "Saturday, Sunday"
        #[arg(long, default_value = "")]
        break_days: String,

        /// Equal Distribution | Prioritize Difficult Topics | Include Revision Days
        #[arg(long, default_value = "")]
        preference: String,

        /// Seed for task durations (reproducible plans)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the schedule as JSON
        #[arg(long)]
        json: bool,

        /// Also write the plan as an ICS calendar
        #[arg(long)]
        ics: Option<PathBuf>,
    },

    /// List the syllabus topics for a subject
    Topics {
        /// Subject name; omit to list builtin subjects
        subject: Option<String>,
    },

    /// Config file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write ~/.studbud/config.toml with defaults
    Init,
    /// Print the effective config
    Show,
}

fn setup_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Command::Setup => {
            setup::run_setup()?;
        }

        Command::Plan {
            subject,
            current_date,
            exam_date,
            start_time,
            break_days,
            preference,
            seed,
            json,
            ics,
        } => {
            let cfg = config::load_config()?;
            let today = time::today_in(&cfg.timezone, chrono::Utc::now())?;
            let input = PlanInput {
                subject,
                current_date: current_date.unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
                exam_date,
                start_time,
                break_days,
                preference,
            };
            plan(&cfg, &input, today, seed, json, ics)?;
        }

        Command::Topics { subject } => {
            let cfg = config::load_config()?;
            match subject {
                Some(s) => {
                    let catalog = LayeredCatalog::new(&cfg.catalog);
                    for (i, t) in catalog.topics_for(&s).iter().enumerate() {
                        println!("{:>2}. {}", i + 1, t);
                    }
                }
                None => {
                    for s in known_subjects() {
                        println!("{}", s);
                    }
                    for s in cfg.catalog.keys() {
                        println!("{} (config)", s);
                    }
                }
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn plan(
    cfg: &config::Config,
    input: &PlanInput,
    today: chrono::NaiveDate,
    seed: Option<u64>,
    json: bool,
    ics: Option<PathBuf>,
) -> Result<()> {
    let request = PlanRequest::parse(input)?;

    let profile = match state::read_profile(&state::profile_path()?)? {
        Some(p) => p,
        None => {
            info!("no saved profile; using placeholder (run `studbud setup`)");
            StudentProfile::placeholder(&request.subject)
        }
    };

    let catalog = LayeredCatalog::new(&cfg.catalog);
    let mut durations = RandomDurations::new(cfg.duration_range()?, seed)?;

    let plan = plan_study(&request, &profile, &catalog, &KeywordScorer, &mut durations, today)?;

    if !plan.schedule.unplaced.is_empty() {
        warn!(
            "{} of {} task(s) did not fit before {}",
            plan.schedule.unplaced.len(),
            plan.prioritized.len(),
            request.exam_date
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&plan.schedule)?);
    } else {
        println!("# Study plan: {}", request.subject);
        println!(
            "Exam {} ({} day(s) away) | start {} | {}",
            request.exam_date,
            request.days_until_exam(),
            request.start_time.format("%H:%M"),
            request.preference
        );
        println!("\n## Topics\n");
        for t in &plan.topics {
            println!("- {}", t);
        }
        println!("\n## Schedule");
        print!("{}", render_schedule(&plan.schedule));
        print!("{}", render_summary(&plan.schedule));
    }

    if let Some(path) = ics {
        let tz = time::parse_tz(&cfg.timezone)?;
        let events =
            calendar::schedule_to_timeblocks(&plan.schedule, request.start_time, tz, &cfg.calendar.prefix);
        fs::write(&path, calendar::events_to_ics(&events))
            .with_context(|| format!("write {}", path.display()))?;
        eprintln!("Wrote {} event(s) to {}", events.len(), path.display());
    }

    Ok(())
}
