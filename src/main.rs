use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use moodcycle::{Analysis, CalendarCell, GridMode, Logbook, MonthCursor, PhaseTag, Scenario};

#[derive(Parser, Debug)]
#[command(
    name = "moodcycle",
    version,
    about = "Explore every placement of a known date within a recurring mood cycle"
)]
struct Cli {
    /// Anchor date of known significance (YYYY-MM-DD)
    #[arg(long)]
    date: String,

    /// Assumed cycle length in days (20-45)
    #[arg(long, default_value_t = 28)]
    cycle_length: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every hypothesis, or show one scenario's full day table
    Scenarios {
        /// Cycle day the anchor is assumed to be
        #[arg(long)]
        hypothesis: Option<u32>,
    },
    /// Ranked ovulation / menstrual / PMS / best-mood dates across all hypotheses
    Analysis,
    /// Render the six-week calendar grid
    Calendar {
        /// Displayed month as YYYY-MM (defaults to the anchor's month)
        #[arg(long)]
        month: Option<String>,
        /// Show a single hypothesis instead of the cross-scenario average
        #[arg(long)]
        scenario: Option<u32>,
        /// JSON logbook to overlay on the grid
        #[arg(long)]
        logs: Option<PathBuf>,
    },
    /// Dump the scenario set and analysis as pretty JSON
    Export,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let scenarios = moodcycle::enumerate(&cli.date, cli.cycle_length)?;

    match cli.command {
        Command::Scenarios { hypothesis } => match hypothesis {
            Some(day) => print_scenario(&scenarios, day)?,
            None => print_scenario_list(&scenarios),
        },
        Command::Analysis => print_analysis(&moodcycle::aggregate(&scenarios)?),
        Command::Calendar {
            month,
            scenario,
            logs,
        } => {
            let cursor = match month {
                Some(raw) => parse_month(&raw)?,
                None => MonthCursor::containing(scenarios[0].anchor()),
            };
            let mode = scenario.map_or(GridMode::Aggregated, GridMode::Scenario);
            let logbook = logs.map(load_logbook).transpose()?;
            let cells = moodcycle::build_grid(cursor, &scenarios, mode, logbook.as_ref())?;
            print_calendar(cursor, &cells)?;
        }
        Command::Export => {
            let analysis = moodcycle::aggregate(&scenarios)?;
            let export = serde_json::json!({
                "anchor": scenarios[0].anchor(),
                "cycle_length": cli.cycle_length,
                "scenarios": scenarios,
                "analysis": analysis,
            });
            println!("{}", serde_json::to_string_pretty(&export)?);
        }
    }
    Ok(())
}

fn print_scenario_list(scenarios: &[Scenario]) {
    let anchor = scenarios[0].anchor();
    println!("All {} scenarios for anchor {anchor}:", scenarios.len());
    for scenario in scenarios {
        let first = &scenario.days[0];
        println!(
            "  day {:>2}: anchor sits in {} at mood {:.2}",
            scenario.hypothesis,
            first.phase.label(),
            first.mood
        );
    }
}

fn print_scenario(scenarios: &[Scenario], hypothesis: u32) -> Result<()> {
    let scenario = scenarios
        .iter()
        .find(|s| s.hypothesis == hypothesis)
        .with_context(|| format!("no scenario assumes the anchor is cycle day {hypothesis}"))?;

    println!(
        "Scenario {}: {} is cycle day {}",
        scenario.hypothesis,
        scenario.anchor(),
        scenario.hypothesis
    );
    println!();
    println!(" day  date          mood  phase");
    for day in &scenario.days {
        println!(
            "{:>4}  {}  {:>6.2}  {:<15} {}",
            day.cycle_day,
            day.date,
            day.mood,
            day.phase.label(),
            day.phase.detail()
        );
    }
    Ok(())
}

fn print_analysis(analysis: &Analysis) {
    section(
        "Ovulation Peak",
        PhaseTag::OvulationPeak.detail(),
        &analysis.ovulation,
    );
    section(
        "Menstrual/Cramps",
        PhaseTag::Menstrual.detail(),
        &analysis.menstrual,
    );
    section("PMS Period", PhaseTag::PreMenstrual.detail(), &analysis.pms);
    section("Best Mood Days", "Peak Performance", &analysis.best_mood);
}

fn section(title: &str, description: &str, entries: &[moodcycle::RankedDateEntry]) {
    println!("{title}: {description}");
    if entries.is_empty() {
        println!("  no significant dates found");
    }
    for entry in entries {
        println!(
            "  {}  {:>3.0}%  ({} scenarios)",
            entry.date, entry.percentage, entry.count
        );
    }
    println!();
}

fn print_calendar(cursor: MonthCursor, cells: &[CalendarCell]) -> Result<()> {
    let first = cursor.first_day()?;
    println!("{:^42}", first.format("%B %Y").to_string());
    let header: String = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        .iter()
        .map(|name| format!("{name:>4}  "))
        .collect();
    println!("{header}");

    for row in cells.chunks(7) {
        let line: String = row.iter().map(render_cell).collect();
        println!("{line}");
    }
    println!();
    println!("mood: L <= 55 < M <= 75 < H    markers: * anchor, ! today, # logged");
    Ok(())
}

fn render_cell(cell: &CalendarCell) -> String {
    use chrono::Datelike;

    let band = match cell.mood {
        Some(mood) if mood > 75.0 => 'H',
        Some(mood) if mood > 55.0 => 'M',
        Some(_) => 'L',
        None => ' ',
    };
    let marker = if cell.is_anchor {
        '*'
    } else if cell.is_today {
        '!'
    } else if cell.logged.is_some() {
        '#'
    } else {
        ' '
    };
    if cell.in_month {
        format!(" {:>2}{band}{marker} ", cell.date.day())
    } else {
        format!("({:>2}){band}{marker}", cell.date.day())
    }
}

fn parse_month(raw: &str) -> Result<MonthCursor> {
    let (year, month) = raw
        .trim()
        .split_once('-')
        .with_context(|| format!("invalid month {raw:?}, expected YYYY-MM"))?;
    let cursor = MonthCursor {
        year: year
            .parse()
            .with_context(|| format!("invalid year in {raw:?}"))?,
        month: month
            .parse()
            .with_context(|| format!("invalid month in {raw:?}"))?,
    };
    cursor.first_day()?;
    Ok(cursor)
}

fn load_logbook(path: PathBuf) -> Result<Logbook> {
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("reading logbook {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing logbook {}", path.display()))
}
