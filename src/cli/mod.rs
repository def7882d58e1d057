//! CLI subcommands — quote, summary, validate, rates.

use crate::core::{addons, aggregate, builder, roster, types};
use clap::Subcommand;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a single plan from the command line
    Quote {
        /// Customer name
        name: String,

        /// Meal type (veg, nonveg, jain)
        #[arg(short, long, default_value = "veg")]
        meal_type: String,

        /// Billing days
        #[arg(short, long, default_value_t = 30)]
        days: u32,

        /// Add-on as name:price (repeatable)
        #[arg(short, long = "addon")]
        addons: Vec<String>,

        /// Emit JSON instead of the human-readable report
        #[arg(long)]
        json: bool,
    },

    /// Aggregate a customer roster into summary statistics
    Summary {
        /// Path to the roster YAML
        #[arg(short, long, default_value = "roster.yaml")]
        file: PathBuf,

        /// Emit JSON instead of the human-readable report
        #[arg(long)]
        json: bool,
    },

    /// Validate a roster file without pricing anything
    Validate {
        /// Path to the roster YAML
        #[arg(short, long, default_value = "roster.yaml")]
        file: PathBuf,
    },

    /// Show the fixed per-day price table
    Rates,
}

/// Dispatch a CLI command.
pub fn dispatch(cmd: Commands) -> Result<(), String> {
    match cmd {
        Commands::Quote {
            name,
            meal_type,
            days,
            addons,
            json,
        } => cmd_quote(&name, &meal_type, days, &addons, json),
        Commands::Summary { file, json } => cmd_summary(&file, json),
        Commands::Validate { file } => cmd_validate(&file),
        Commands::Rates => cmd_rates(),
    }
}

fn cmd_quote(
    name: &str,
    meal_type: &str,
    days: u32,
    addon_specs: &[String],
    json: bool,
) -> Result<(), String> {
    let request = types::PlanRequest {
        name: name.to_string(),
        meal_type: meal_type.to_string(),
        days,
    };

    let plan = builder::build_plan(&request).ok_or_else(|| {
        if name.is_empty() {
            "customer name must not be empty".to_string()
        } else {
            format!(
                "unknown meal type '{}' (expected veg, nonveg, or jain)",
                meal_type
            )
        }
    })?;

    let extras = addon_specs
        .iter()
        .map(|s| parse_addon_spec(s))
        .collect::<Result<Vec<_>, _>>()?;

    // build_plan succeeded, so the apply cannot come back empty
    let plan = addons::apply_addons(Some(&plan), &extras)
        .ok_or_else(|| "internal: add-on application failed".to_string())?;

    if json {
        print_json(&plan)?;
    } else {
        print_plan(&plan);
    }
    Ok(())
}

/// Parse an add-on spec of the form `name:price`.
fn parse_addon_spec(spec: &str) -> Result<types::Addon, String> {
    let (name, price) = spec
        .rsplit_once(':')
        .ok_or_else(|| format!("invalid add-on '{}' (expected name:price)", spec))?;
    let price: f64 = price
        .parse()
        .map_err(|_| format!("invalid add-on price in '{}'", spec))?;
    Ok(types::Addon {
        name: name.to_string(),
        price,
    })
}

/// Display a plan to stdout.
fn print_plan(plan: &types::Plan) {
    println!("Plan: {} ({})", plan.name, plan.meal_type);
    println!("  Days:       {}", plan.days);
    println!("  Daily rate: {}", plan.daily_rate);
    println!("  Total cost: {}", plan.total_cost);
    if !plan.addon_names.is_empty() {
        println!("  Add-ons:    {}", plan.addon_names.join(", "));
    }
}

fn cmd_summary(file: &Path, json: bool) -> Result<(), String> {
    let roster = parse_and_validate(file)?;
    let plans = roster::build_all(&roster);

    let summary = aggregate::combine_plans(&plans)
        .ok_or_else(|| "no plans to aggregate".to_string())?;

    if json {
        print_json(&summary)?;
        return Ok(());
    }

    let label = roster.name.as_deref().unwrap_or("roster");
    println!("Roster: {} ({} customers)", label, summary.total_customers);
    println!();
    for plan in &plans {
        print_plan(plan);
    }
    println!();
    println!("Meal breakdown:");
    for (meal, count) in &summary.meal_breakdown {
        println!("  {}: {}", meal, count);
    }
    println!();
    println!(
        "Summary: {} customers, total revenue {}.",
        summary.total_customers, summary.total_revenue
    );
    Ok(())
}

/// Parse and validate a roster file, returning errors if invalid.
fn parse_and_validate(file: &Path) -> Result<roster::Roster, String> {
    let roster = roster::parse_roster_file(file)?;
    let errors = roster::validate_roster(&roster);
    if errors.is_empty() {
        return Ok(roster);
    }
    for e in &errors {
        eprintln!("  ERROR: {}", e);
    }
    Err("validation failed".to_string())
}

fn cmd_validate(file: &Path) -> Result<(), String> {
    let roster = roster::parse_roster_file(file)?;
    let errors = roster::validate_roster(&roster);

    if errors.is_empty() {
        println!(
            "OK: {} ({} customers)",
            roster.name.as_deref().unwrap_or("roster"),
            roster.customers.len()
        );
        Ok(())
    } else {
        for e in &errors {
            eprintln!("  ERROR: {}", e);
        }
        Err(format!("{} validation error(s)", errors.len()))
    }
}

fn cmd_rates() -> Result<(), String> {
    println!("Per-day rates:");
    for meal in types::MealType::ALL {
        println!("  {:<7} {}", meal, meal.daily_rate());
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| format!("serialize error: {}", e))?;
    println!("{}", out);
    Ok(())
}
