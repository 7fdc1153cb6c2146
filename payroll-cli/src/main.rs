mod config;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use payroll_core::calculations::report::CURRENCY_SYMBOL;
use payroll_core::models::{
    DayEntry, MealBonus, OvertimeRateTable, Parameters, DAYS_PER_WEEK, WEEKS_PER_PERIOD,
};
use payroll_core::{Diagnostics, PayrollCalculator, WeekReport};
use payroll_store::{load_rate_tables, FileStore, Session, SessionStore};

use crate::config::Config;
use crate::render::{pages_to_text, render_report, Layout};

/// Four-week salary calculator.
#[derive(Parser, Debug)]
#[command(name = "payroll")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "payroll.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Set a base pay parameter
    Param {
        field: ParamField,
        value: String,
    },
    /// Edit one day of the schedule
    Day {
        /// Week number, 1 through 4
        #[arg(long)]
        week: usize,
        /// Day number, 1 (Monday) through 7 (Sunday)
        #[arg(long)]
        day: usize,
        #[command(flatten)]
        changes: DayChanges,
    },
    /// Print the period total
    Total,
    /// Print the weekly report for one week, or all four
    Report {
        /// Week number, 1 through 4
        #[arg(long)]
        week: Option<usize>,
    },
    /// Write the paginated report to a file
    Export {
        #[arg(short, long, default_value = "report-stipendio.txt")]
        output: PathBuf,
    },
    /// Reset one week, or the whole schedule
    Reset {
        /// Week number, 1 through 4; omit to reset everything
        #[arg(long)]
        week: Option<usize>,
    },
    /// Select the active week
    SelectWeek {
        /// Week number, 1 through 4
        week: usize,
    },
    /// Print diagnostics recorded during this invocation
    Logs,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ParamField {
    BaseHourlyRate,
    DrivingAllowance,
    ExtraMealAllowance,
    OffSiteAllowance,
    DinnerAllowance,
    OnCallWeekday,
    OnCallSaturday,
    OnCallHoliday,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MealArg {
    None,
    ExtraMeal,
    OffSite,
}

impl From<MealArg> for MealBonus {
    fn from(arg: MealArg) -> Self {
        match arg {
            MealArg::None => MealBonus::None,
            MealArg::ExtraMeal => MealBonus::ExtraMeal,
            MealArg::OffSite => MealBonus::OffSite,
        }
    }
}

/// Per-field day edits; only the provided options are applied.
#[derive(Args, Debug, Default)]
struct DayChanges {
    #[arg(long)]
    present: Option<bool>,

    #[arg(long)]
    driving: Option<bool>,

    #[arg(long)]
    meal: Option<MealArg>,

    #[arg(long)]
    on_call: Option<bool>,

    #[arg(long)]
    dinner: Option<bool>,

    #[arg(long)]
    regular_hours: Option<String>,
    #[arg(long)]
    regular_minutes: Option<String>,

    #[arg(long)]
    night_hours: Option<String>,
    #[arg(long)]
    night_minutes: Option<String>,

    #[arg(long)]
    holiday_hours: Option<String>,
    #[arg(long)]
    holiday_minutes: Option<String>,
}

fn set_parameter(
    parameters: &mut Parameters,
    field: ParamField,
    value: String,
) {
    match field {
        ParamField::BaseHourlyRate => parameters.base_hourly_rate = value,
        ParamField::DrivingAllowance => parameters.driving_allowance = value,
        ParamField::ExtraMealAllowance => parameters.extra_meal_allowance = value,
        ParamField::OffSiteAllowance => parameters.off_site_allowance = value,
        ParamField::DinnerAllowance => parameters.dinner_allowance = value,
        ParamField::OnCallWeekday => parameters.on_call_weekday = value,
        ParamField::OnCallSaturday => parameters.on_call_saturday = value,
        ParamField::OnCallHoliday => parameters.on_call_holiday = value,
    }
}

fn apply_day_changes(
    day: &mut DayEntry,
    changes: DayChanges,
) {
    if let Some(present) = changes.present {
        day.present = present;
    }
    if let Some(driving) = changes.driving {
        day.driving = driving;
    }
    if let Some(meal) = changes.meal {
        day.meal = meal.into();
    }
    if let Some(on_call) = changes.on_call {
        day.on_call = on_call;
    }
    if let Some(dinner) = changes.dinner {
        day.dinner = dinner;
    }
    if let Some(hours) = changes.regular_hours {
        day.overtime_regular.hours = hours;
    }
    if let Some(minutes) = changes.regular_minutes {
        day.overtime_regular.minutes = minutes;
    }
    if let Some(hours) = changes.night_hours {
        day.overtime_night.hours = hours;
    }
    if let Some(minutes) = changes.night_minutes {
        day.overtime_night.minutes = minutes;
    }
    if let Some(hours) = changes.holiday_hours {
        day.overtime_holiday.hours = hours;
    }
    if let Some(minutes) = changes.holiday_minutes {
        day.overtime_holiday.minutes = minutes;
    }
}

/// Converts a 1-based week number from the command line to a schedule
/// index.
fn week_index(week: usize) -> Result<usize> {
    if (1..=WEEKS_PER_PERIOD).contains(&week) {
        Ok(week - 1)
    } else {
        bail!("week must be between 1 and {WEEKS_PER_PERIOD}, got {week}")
    }
}

/// Converts a 1-based day number (1 = Monday) to a week index.
fn day_index(day: usize) -> Result<usize> {
    if (1..=DAYS_PER_WEEK).contains(&day) {
        Ok(day - 1)
    } else {
        bail!("day must be between 1 (Monday) and {DAYS_PER_WEEK} (Sunday), got {day}")
    }
}

/// Resolves the configured rate table: built-ins first, then tables loaded
/// into the store via `rate-loader`.
async fn resolve_rate_table(
    name: &str,
    store: &dyn SessionStore,
) -> Result<OvertimeRateTable> {
    if let Some(table) = OvertimeRateTable::builtin(name) {
        return Ok(table);
    }

    let custom = load_rate_tables(store)
        .await
        .context("cannot read custom rate tables from the store")?;
    if let Some(table) = custom.get(name) {
        return Ok(table.clone());
    }

    let mut available: Vec<String> = OvertimeRateTable::builtin_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    available.extend(custom.keys().cloned());
    bail!(
        "unknown rate table '{name}'; available tables: {}",
        available.join(", ")
    )
}

/// Persists the session, reporting failure through diagnostics instead of
/// aborting: a write failure leaves the previous revision in the store,
/// which the next run tolerates.
async fn save_session(
    session: &Session,
    store: &FileStore,
    diagnostics: &mut Diagnostics,
) {
    if let Err(error) = session.save(store).await {
        diagnostics.error(format!("failed to persist session: {error}"));
    }
}

/// Renders the diagnostics dump. Diagnostics are a development surface, so
/// outside dev mode the dump only says how to enable it.
fn format_logs(
    diagnostics: &Diagnostics,
    dev_mode: bool,
) -> Vec<String> {
    if !dev_mode {
        return vec!["Diagnostics are only shown when dev_mode is enabled.".to_string()];
    }
    if diagnostics.is_empty() {
        return vec!["No diagnostics recorded.".to_string()];
    }
    diagnostics
        .entries()
        .map(|entry| {
            let header = format!(
                "[{}] {} {}",
                entry.level.as_str(),
                entry.timestamp.format("%H:%M:%S"),
                entry.message
            );
            match &entry.context {
                Some(context) => format!("{header} {context}"),
                None => header,
            }
        })
        .collect()
}

fn print_report(
    week_number: usize,
    report: &WeekReport,
) {
    println!("Week {week_number}");
    for line in report.lines() {
        println!("  {}: {}", line.label, line.value);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    logging::init(config.dev_mode);

    let mut diagnostics = Diagnostics::new(config.dev_mode);
    let store = FileStore::new(&config.store_file);
    tracing::debug!(store = %store.path().display(), "loading session");

    let mut session = Session::load(&store, &mut diagnostics).await;
    let table = resolve_rate_table(&config.rate_table, &store).await?;
    let policy = config.policy();
    tracing::debug!(rate_table = %table.name, "configuration resolved");

    match cli.command {
        Command::Param { field, value } => {
            set_parameter(&mut session.parameters, field, value);
            save_session(&session, &store, &mut diagnostics).await;

            let rates = session.parameters.resolve();
            let calculator = PayrollCalculator::new(&rates, &table, policy);
            println!(
                "Period total: {CURRENCY_SYMBOL} {:.2}",
                calculator.total(&session.schedule)
            );
        }

        Command::Day { week, day, changes } => {
            let week = week_index(week)?;
            let day = day_index(day)?;
            apply_day_changes(&mut session.schedule.weeks[week][day], changes);
            save_session(&session, &store, &mut diagnostics).await;

            let rates = session.parameters.resolve();
            let calculator = PayrollCalculator::new(&rates, &table, policy);
            println!(
                "Period total: {CURRENCY_SYMBOL} {:.2}",
                calculator.total(&session.schedule)
            );
        }

        Command::Total => {
            let rates = session.parameters.resolve();
            let calculator = PayrollCalculator::new(&rates, &table, policy);
            println!(
                "Period total: {CURRENCY_SYMBOL} {:.2}",
                calculator.total(&session.schedule)
            );
        }

        Command::Report { week } => {
            let rates = session.parameters.resolve();
            let calculator = PayrollCalculator::new(&rates, &table, policy);

            match week {
                Some(week) => {
                    let index = week_index(week)?;
                    print_report(week, &calculator.weekly_report(&session.schedule.weeks[index]));
                }
                None => {
                    for (index, week) in session.schedule.weeks.iter().enumerate() {
                        print_report(index + 1, &calculator.weekly_report(week));
                    }
                }
            }
        }

        Command::Export { output } => {
            let rates = session.parameters.resolve();
            let calculator = PayrollCalculator::new(&rates, &table, policy);
            let weekly: Vec<WeekReport> = session
                .schedule
                .weeks
                .iter()
                .map(|week| calculator.weekly_report(week))
                .collect();
            let grand_total = calculator.total(&session.schedule);

            let pages = render_report(&session.parameters, &weekly, grand_total, Layout::default());
            tokio::fs::write(&output, pages_to_text(&pages))
                .await
                .with_context(|| format!("cannot write report to '{}'", output.display()))?;
            println!("Report written to {} ({} pages)", output.display(), pages.len());
        }

        Command::Reset { week } => {
            match week {
                Some(week) => session.schedule.reset_week(week_index(week)?),
                None => session.schedule.reset_all(),
            }
            save_session(&session, &store, &mut diagnostics).await;
            println!("Schedule reset.");
        }

        Command::SelectWeek { week } => {
            session.active_week = week_index(week)?;
            save_session(&session, &store, &mut diagnostics).await;
            println!("Active week: {week}");
        }

        Command::Logs => {
            for line in format_logs(&diagnostics, config.dev_mode) {
                println!("{line}");
            }
        }
    }

    Ok(())
}
