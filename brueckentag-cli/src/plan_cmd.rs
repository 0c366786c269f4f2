use anyhow::{bail, Context, Result};
use brueckentag_core::{
    generate_auto_plan_detailed, generate_auto_plan_variants, generate_auto_plan_variants_seeded,
    AutoPlanInput, AutoPlanResult, HolidayMap, PlannerSettings, SchoolHoliday,
};
use brueckentag_holidays::{
    bridge_days_from_holidays, holidays_for_region, parse_feiertage_json, school_holidays, Region,
};
use chrono::{Datelike, Local};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::ics::schedule_to_ics;
use crate::state::{read_text, write_text};

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Planning year (default: config, then the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Vacation days to spend (default: config)
    #[arg(long)]
    pub budget: Option<i32>,

    /// Federal state code, e.g. SN or BY (default: config)
    #[arg(long)]
    pub region: Option<Region>,

    /// feiertage-api style JSON file used instead of the built-in calendar
    #[arg(long)]
    pub holidays_json: Option<PathBuf>,

    /// Never spend vacation on bridge days
    #[arg(long)]
    pub no_bridge_days: bool,

    /// Longest single break, in weeks
    #[arg(long)]
    pub max_vacation_weeks: Option<u32>,

    /// Longest working stretch before it gets broken up, in weeks
    #[arg(long)]
    pub max_work_weeks: Option<u32>,

    /// Spread breaks over the calendar quarters
    #[arg(long, overrides_with = "no_even_spread")]
    pub even_spread: bool,

    #[arg(long, overrides_with = "even_spread")]
    pub no_even_spread: bool,

    /// Anchor one break on the region's school holidays
    #[arg(long)]
    pub school_holidays: bool,

    /// Month to leave untouched, 1-12 (repeatable)
    #[arg(long = "ignore-month", value_parser = clap::value_parser!(u32).range(1..=12))]
    pub ignore_months: Vec<u32>,

    /// Generate this many alternative plans, best first
    #[arg(long)]
    pub variants: Option<usize>,

    /// Seed for reproducible variants
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Write the (best) schedule as an .ics file
    #[arg(long)]
    pub ics: Option<PathBuf>,
}

/// Command-line flags layered over the config file's planner section.
pub fn resolve_settings(args: &PlanArgs, base: &PlannerSettings) -> PlannerSettings {
    let mut settings = base.clone();
    if args.no_bridge_days {
        settings = settings.with_bridge_days(false);
    }
    if let Some(weeks) = args.max_vacation_weeks {
        settings = settings.with_max_vacation_weeks(weeks);
    }
    if let Some(weeks) = args.max_work_weeks {
        settings = settings.with_max_work_weeks(weeks);
    }
    if args.even_spread {
        settings = settings.with_even_spread(true);
    }
    if args.no_even_spread {
        settings = settings.with_even_spread(false);
    }
    if args.school_holidays {
        settings = settings.with_school_holidays(true);
    }
    if !args.ignore_months.is_empty() {
        settings = settings.with_ignored_months(args.ignore_months.iter().map(|m| m - 1));
    }
    settings
}

pub fn resolve_year(flag: Option<i32>, cfg: &Config) -> i32 {
    flag.or(cfg.defaults.year)
        .unwrap_or_else(|| Local::now().year())
}

/// Holidays of `year`, from a JSON file when given, else the built-in calendar.
pub fn load_holidays(year: i32, region: Region, json: Option<&Path>) -> Result<HolidayMap> {
    let Some(path) = json else {
        return Ok(holidays_for_region(year, region));
    };
    let all = parse_feiertage_json(&read_text(path)?)
        .with_context(|| format!("parsing {}", path.display()))?;
    let holidays: HolidayMap = all.into_iter().filter(|(d, _)| d.year() == year).collect();
    if holidays.is_empty() {
        bail!("{} has no holidays for {}", path.display(), year);
    }
    Ok(holidays)
}

pub fn build_input(args: &PlanArgs, cfg: &Config) -> Result<(AutoPlanInput, Region)> {
    let year = resolve_year(args.year, cfg);
    let budget = args.budget.unwrap_or(cfg.defaults.budget);
    let region = args.region.unwrap_or(cfg.defaults.region);
    let settings = resolve_settings(args, &cfg.planner);

    let holidays = load_holidays(year, region, args.holidays_json.as_deref())?;
    let bridges = bridge_days_from_holidays(year, &holidays);
    let school: Vec<SchoolHoliday> = if settings.respect_school_holidays {
        school_holidays(year, region)
    } else {
        Vec::new()
    };
    debug!(
        year,
        budget,
        %region,
        holidays = holidays.len(),
        bridges = bridges.len(),
        school = school.len(),
        "plan input"
    );

    let input = AutoPlanInput::new(year, budget, holidays, bridges)
        .with_settings(settings)
        .with_school_holidays(school);
    Ok((input, region))
}

pub fn render_result(result: &AutoPlanResult) -> String {
    let mut out = String::new();
    if result.schedule.is_empty() {
        out.push_str("(no vacation planned)\n");
    }
    for e in &result.schedule {
        out.push_str(&format!(
            "{} .. {}  {:>2} days off",
            e.start.format("%a %Y-%m-%d"),
            e.end.format("%a %Y-%m-%d"),
            e.duration_days
        ));
        if !e.holidays_used.is_empty() {
            let names: Vec<&str> = e.holidays_used.iter().map(|h| h.name.as_str()).collect();
            out.push_str(&format!("  ({})", names.join(", ")));
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "\nUsed {} of {} vacation days | score={:.2}\n",
        result.summary.used_vacation_days,
        result.summary.available_vacation_days,
        result.summary.score
    ));
    out
}

pub fn run_plan(args: &PlanArgs, cfg: &Config) -> Result<()> {
    let (input, region) = build_input(args, cfg)?;

    let results = match args.variants {
        Some(count) => match args.seed {
            Some(seed) => generate_auto_plan_variants_seeded(&input, count, seed),
            None => generate_auto_plan_variants(&input, count, &mut rand::thread_rng()),
        },
        None => vec![generate_auto_plan_detailed(&input)],
    };
    let Some(best) = results.first() else {
        bail!("no plan generated (--variants 0?)");
    };

    if args.json {
        let json = if args.variants.is_some() {
            serde_json::to_string_pretty(&results)?
        } else {
            serde_json::to_string_pretty(best)?
        };
        println!("{}", json);
    } else {
        println!("# Vacation plan {} ({}, {})\n", input.year, region.code(), region.name());
        for (i, r) in results.iter().enumerate() {
            if results.len() > 1 {
                println!("## Variant {}\n", i + 1);
            }
            println!("{}", render_result(r));
        }
    }

    if let Some(path) = &args.ics {
        write_text(path, &schedule_to_ics(&best.schedule))?;
        info!(path = %path.display(), entries = best.schedule.len(), "wrote ics");
        if !args.json {
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_flags_override_config() {
        let base = PlannerSettings::default().with_ignored_months([0]);
        let args = PlanArgs {
            no_bridge_days: true,
            max_vacation_weeks: Some(3),
            no_even_spread: true,
            school_holidays: true,
            ignore_months: vec![7, 8],
            ..Default::default()
        };
        let s = resolve_settings(&args, &base);
        assert!(!s.use_bridge_days);
        assert_eq!(s.max_consecutive_vacation_weeks, 3);
        assert_eq!(s.max_consecutive_work_weeks, 8);
        assert!(!s.prefer_even_spread);
        assert!(s.respect_school_holidays);
        assert_eq!(s.ignored_months.iter().copied().collect::<Vec<_>>(), vec![6, 7]);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let base = PlannerSettings::default()
            .with_even_spread(false)
            .with_ignored_months([11]);
        assert_eq!(resolve_settings(&PlanArgs::default(), &base), base);
    }

    #[test]
    fn test_year_resolution() {
        let mut cfg = Config::default();
        assert_eq!(resolve_year(Some(2030), &cfg), 2030);
        cfg.defaults.year = Some(2026);
        assert_eq!(resolve_year(None, &cfg), 2026);
        assert_eq!(resolve_year(Some(2027), &cfg), 2027);
    }

    #[test]
    fn test_builtin_input() {
        let args = PlanArgs {
            year: Some(2025),
            budget: Some(12),
            ..Default::default()
        };
        let (input, region) = build_input(&args, &Config::default()).unwrap();
        assert_eq!(region, Region::SN);
        assert_eq!(input.holidays.len(), 11);
        assert!(input.bridge_days.contains(&date(2025, 5, 30)));
        assert!(input.school_holidays.is_empty());
    }

    #[test]
    fn test_render_empty_result() {
        let args = PlanArgs {
            year: Some(2025),
            budget: Some(0),
            ..Default::default()
        };
        let (input, _) = build_input(&args, &Config::default()).unwrap();
        let text = render_result(&generate_auto_plan_detailed(&input));
        assert!(text.contains("(no vacation planned)"));
        assert!(text.contains("Used 0 of 0 vacation days"));
    }
}
