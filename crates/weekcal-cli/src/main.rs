use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use weekcal::{
    resolve, week_coordinate, weeks_in_year, weeks_of_year, Calendar, DateWindow,
    RecurringAnchor, WeekCoordinate,
};

/// Environment variable consulted when `--tz` is not given.
const TZ_ENV: &str = "WEEKCAL_TZ";

#[derive(Parser)]
#[command(name = "weekcal")]
#[command(about = "ISO week numbers, week/month windows, and countdowns")]
#[command(version)]
struct Cli {
    /// IANA timezone for "today" (defaults to $WEEKCAL_TZ, then UTC)
    #[arg(long, global = true)]
    tz: Option<String>,

    /// Reference instant in RFC 3339 (defaults to the system clock)
    #[arg(long, global = true)]
    now: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// ISO week coordinate of a date
    Week {
        /// Date in YYYY-MM-DD format (defaults to today)
        date: Option<String>,
    },
    /// Number of ISO weeks in a year
    Weeks {
        iso_year: i32,
        /// List every week with its Monday
        #[arg(long)]
        list: bool,
    },
    /// Date range of an ISO week (YYYY-Www) or a month (YYYY-MM)
    Window { period: String },
    /// Next occurrence of a date and the days until it
    Countdown {
        /// Anchor date in YYYY-MM-DD format
        date: String,
        /// Repeat every year on the same month and day
        #[arg(long)]
        recurs: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = run(cli)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run(cli: Cli) -> Result<Value> {
    let calendar = load_calendar(cli.tz.as_deref())?;
    let now = match cli.now.as_deref() {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("invalid --now '{s}'"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };
    let today = calendar.today(now);

    match cli.command {
        Commands::Week { date } => {
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => today,
            };
            let coordinate = week_coordinate(date)?;
            Ok(json!({
                "date": date,
                "week": coordinate.to_string(),
                "iso_year": coordinate.iso_year(),
                "iso_week": coordinate.iso_week(),
                "window": DateWindow::of_week(&coordinate),
            }))
        }
        Commands::Weeks { iso_year, list } => {
            let count = weeks_in_year(iso_year)?;
            let mut out = json!({ "iso_year": iso_year, "weeks": count });
            if list {
                out["list"] = weeks_of_year(iso_year)?
                    .iter()
                    .map(|c| json!({ "week": c.to_string(), "window": DateWindow::of_week(c) }))
                    .collect();
            }
            Ok(out)
        }
        Commands::Window { period } => {
            let window = parse_period(&period)?;
            Ok(json!({
                "period": period.trim(),
                "start": window.start(),
                "end": window.end(),
                "days": window.len_days(),
            }))
        }
        Commands::Countdown { date, recurs } => {
            let anchor = RecurringAnchor::new(parse_date(&date)?, recurs);
            let occurrence = resolve(&anchor, today)?;
            Ok(json!({
                "anchor": anchor,
                "today": today,
                "today_start": calendar.start_of_day(today)?.to_rfc3339(),
                "date": occurrence.date(),
                "day_offset": occurrence.day_offset(),
                "relation": occurrence.relation(),
            }))
        }
    }
}

/// `--tz` wins over `$WEEKCAL_TZ`; with neither, UTC.
fn load_calendar(flag: Option<&str>) -> Result<Calendar> {
    let name = match flag {
        Some(name) => name.to_string(),
        None => match std::env::var(TZ_ENV) {
            Ok(name) if !name.trim().is_empty() => name,
            _ => return Ok(Calendar::default()),
        },
    };
    Ok(Calendar::from_name(&name)?)
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date '{s}', expected YYYY-MM-DD"))
}

/// `YYYY-Www` is a week, `YYYY-MM` a month.
fn parse_period(s: &str) -> Result<DateWindow> {
    let s = s.trim();
    if s.contains("-W") {
        let coordinate: WeekCoordinate = s.parse()?;
        return Ok(DateWindow::of_week(&coordinate));
    }
    let Some((year, month)) = s.rsplit_once('-') else {
        bail!("invalid period '{s}', expected YYYY-Www or YYYY-MM");
    };
    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year in '{s}'"))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("invalid month in '{s}'"))?;
    Ok(DateWindow::of_month(year, month)?)
}
