//! LegalFlow ROI CLI
//!
//! Computes the savings cards and cumulative cost series for a set of inputs,
//! runs the email gate, requests the AI summary, and sweeps a single input.
//! Collaborator endpoints come from the environment (see `AppConfig::from_env`);
//! each input flag can also be set through its `ROI_*` variable.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

use legalflow_roi::{
    calculate,
    export::{write_series_csv, write_sweep_csv},
    format::{axis_thousands, break_even_label, currency, pick_fun_activity, summary_cards},
    AppConfig, Calculation, CalculationInputs, InputField, InsightService, LeadCapture, ScenarioRunner,
    UnlockOutcome,
};

#[derive(Parser)]
#[command(name = "roi", version, about = "Drafting automation ROI calculator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the summary cards and the cumulative cost series
    Calc {
        #[command(flatten)]
        inputs: InputArgs,

        /// Print the full calculation as JSON instead of tables
        #[arg(long)]
        json: bool,

        /// Also write the series to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Submit the email gate and forward the lead to the webhook
    Unlock {
        #[command(flatten)]
        inputs: InputArgs,

        #[arg(long)]
        email: String,
    },
    /// Ask the AI service for a prose summary of the numbers
    Insight {
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Vary one input across its slider range
    Sweep {
        #[command(flatten)]
        inputs: InputArgs,

        #[arg(long, value_enum)]
        field: SweepField,

        /// Write the sweep to this CSV file instead of stdout
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

#[derive(Args, Clone, Copy)]
struct InputArgs {
    /// Billable hourly rate
    #[arg(long, env = "ROI_HOURLY_RATE", default_value_t = 450.0)]
    hourly_rate: f64,

    /// Documents per month
    #[arg(long, env = "ROI_MONTHLY_VOLUME", default_value_t = 8.0)]
    monthly_volume: f64,

    /// Hours to draft one document manually
    #[arg(long, env = "ROI_HOURS_MANUAL", default_value_t = 2.5)]
    hours_manual: f64,

    /// Minutes to draft one document with automation
    #[arg(long, env = "ROI_MINUTES_AUTO", default_value_t = 15.0)]
    minutes_auto: f64,

    /// One-time implementation cost
    #[arg(long, env = "ROI_SETUP_COST", default_value_t = 2000.0)]
    setup_cost: f64,
}

impl Default for InputArgs {
    fn default() -> Self {
        let d = CalculationInputs::default();
        Self {
            hourly_rate: d.hourly_rate,
            monthly_volume: d.monthly_volume,
            hours_manual: d.hours_per_doc_manual,
            minutes_auto: d.minutes_per_doc_auto,
            setup_cost: d.setup_cost,
        }
    }
}

impl From<InputArgs> for CalculationInputs {
    fn from(args: InputArgs) -> Self {
        CalculationInputs {
            hourly_rate: args.hourly_rate,
            monthly_volume: args.monthly_volume,
            hours_per_doc_manual: args.hours_manual,
            minutes_per_doc_auto: args.minutes_auto,
            setup_cost: args.setup_cost,
        }
    }
}

#[derive(ValueEnum, Clone, Copy)]
enum SweepField {
    HourlyRate,
    MonthlyVolume,
    HoursManual,
    MinutesAuto,
    SetupCost,
}

impl From<SweepField> for InputField {
    fn from(field: SweepField) -> Self {
        match field {
            SweepField::HourlyRate => InputField::HourlyRate,
            SweepField::MonthlyVolume => InputField::MonthlyVolume,
            SweepField::HoursManual => InputField::HoursPerDocManual,
            SweepField::MinutesAuto => InputField::MinutesPerDocAuto,
            SweepField::SetupCost => InputField::SetupCost,
        }
    }
}

fn checked_inputs(args: InputArgs) -> anyhow::Result<CalculationInputs> {
    let inputs = CalculationInputs::from(args);
    let errors = inputs.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        bail!("invalid inputs: {}", messages.join("; "));
    }
    Ok(inputs)
}

fn print_calculation(calc: &Calculation) {
    let mut rng = fastrand::Rng::new();
    let activity = pick_fun_activity(&mut rng);

    println!("LegalFlow ROI");
    println!("=============\n");

    for (title, value, note) in summary_cards(&calc.inputs, &calc.results, activity) {
        println!("{}", title);
        println!("  {}", value);
        println!("  {}\n", note);
    }

    println!("{:>9} {:>14} {:>14} {:>14}", "Month", "Manual", "Automated", "Net");
    println!("{}", "-".repeat(54));
    for point in &calc.projection.points {
        println!(
            "{:>9} {:>14} {:>14} {:>14}",
            point.label(),
            currency(point.manual_cumulative),
            currency(point.automated_cumulative),
            currency(point.net_savings()),
        );
    }

    match &calc.projection.break_even {
        Some(be) => println!(
            "\nBreak-even: {} at {} ({})",
            break_even_label(be),
            currency(be.cost),
            axis_thousands(be.cost)
        ),
        None => println!("\nBreak-even: not within the first {} months", calc.projection.horizon_months()),
    }
}

fn run_calc(args: InputArgs, json: bool, csv: Option<PathBuf>) -> anyhow::Result<()> {
    let calc = calculate(&checked_inputs(args)?);

    if json {
        println!("{}", serde_json::to_string_pretty(&calc)?);
    } else {
        print_calculation(&calc);
    }

    if let Some(path) = csv {
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        write_series_csv(file, &calc.projection)?;
        println!("\nSeries written to: {}", path.display());
    }

    Ok(())
}

async fn run_unlock(args: InputArgs, email: &str, config: &AppConfig) -> anyhow::Result<()> {
    let calc = calculate(&checked_inputs(args)?);
    let gate = LeadCapture::from_config(config)?;

    match gate.unlock(email, &calc.inputs, &calc.results) {
        UnlockOutcome::Rejected => bail!("please enter a valid email address"),
        UnlockOutcome::Unlocked { forward } => {
            // The CLI exits right away, so give the detached forward a chance to finish
            if let Some(task) = forward {
                task.await.ok();
            }
            print_calculation(&calc);
        }
    }

    Ok(())
}

async fn run_insight(args: InputArgs, config: &AppConfig) -> anyhow::Result<()> {
    let calc = calculate(&checked_inputs(args)?);
    let service = InsightService::from_config(config)?;

    println!("The AI's Hot Take");
    println!("=================\n");
    println!("{}", service.generate(&calc.inputs, &calc.results).await);
    Ok(())
}

fn run_sweep(args: InputArgs, field: SweepField, csv: Option<PathBuf>) -> anyhow::Result<()> {
    let base = checked_inputs(args)?;
    let field = InputField::from(field);
    let values = ScenarioRunner::slider_values(field);

    info!("Sweeping {} over {} values", field.id(), values.len());
    let calcs = ScenarioRunner::new().sweep(&base, field, &values);

    match csv {
        Some(path) => {
            let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
            write_sweep_csv(file, &calcs)?;
            println!("Sweep written to: {}", path.display());
        }
        None => write_sweep_csv(io::stdout().lock(), &calcs)?,
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    match cli.command {
        None => run_calc(InputArgs::default(), false, None),
        Some(Command::Calc { inputs, json, csv }) => run_calc(inputs, json, csv),
        Some(Command::Unlock { inputs, email }) => run_unlock(inputs, &email, &config).await,
        Some(Command::Insight { inputs }) => run_insight(inputs, &config).await,
        Some(Command::Sweep { inputs, field, csv }) => run_sweep(inputs, field, csv),
    }
}
