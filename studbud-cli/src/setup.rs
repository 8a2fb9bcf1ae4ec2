use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use studbud_core::{StudentProfile, WEEKDAY_NAMES};

use crate::state::{profile_path, write_profile};

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    input.read_line(&mut s).context("read stdin")?;
    Ok(s.trim().to_string())
}

fn prompt_multiline(input: &mut impl BufRead, label: &str) -> Result<Vec<String>> {
    println!("{} (enter one per line; blank line to finish)", label);
    let mut out = Vec::new();
    loop {
        print!("> ");
        io::stdout().flush().ok();
        let mut s = String::new();
        if input.read_line(&mut s).context("read stdin")? == 0 {
            break;
        }
        let s = s.trim().to_string();
        if s.is_empty() {
            break;
        }
        out.push(s);
    }
    Ok(out)
}

const MAX_HOURS_PER_DAY: f64 = 24.0;

/// Hours as typed ("2", "1.5", "") -> whole minutes, capped at one day.
/// Blank or invalid is 0.
fn hours_to_minutes(s: &str) -> u32 {
    match s.trim().parse::<f64>() {
        Ok(h) if h.is_finite() && h > 0.0 => (h.min(MAX_HOURS_PER_DAY) * 60.0).round() as u32,
        _ => 0,
    }
}

pub fn read_profile_interactive(input: &mut impl BufRead) -> Result<StudentProfile> {
    let goals = prompt_multiline(input, "Goals (e.g. Pass the Physics exam)")?;
    let strengths = prompt_multiline(input, "Strengths (keywords, e.g. algebra)")?;
    let weaknesses = prompt_multiline(input, "Weaknesses (keywords, e.g. calculus)")?;
    let preferences = prompt_multiline(input, "Preferences")?;

    println!("Study hours available per weekday (blank = 0)");
    let mut profile = StudentProfile {
        goals,
        strengths,
        weaknesses,
        preferences,
        ..StudentProfile::default()
    };
    for day in WEEKDAY_NAMES {
        let answer = prompt(input, day)?;
        profile = profile.with_minutes(day, hours_to_minutes(&answer));
    }
    Ok(profile)
}

pub fn run_setup() -> Result<()> {
    println!("Studbud setup\n");
    let stdin = io::stdin();
    let profile = read_profile_interactive(&mut stdin.lock())?;

    let p = profile_path()?;
    write_profile(&p, &profile)?;

    println!("\nWrote {}", p.display());
    println!(
        "Weekly study time: {} h {} min",
        profile.weekly_minutes() / 60,
        profile.weekly_minutes() % 60
    );
    println!("\nNext: studbud plan --subject \"12th grade math\" --exam-date YYYY-MM-DD --start-time 09:00");

    Ok(())
}
