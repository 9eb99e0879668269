use clap::Subcommand;
use timely_core::{plan, Config, PlanForm};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Generate a day plan
    Generate {
        /// Name to head the plan with
        #[arg(long)]
        name: Option<String>,
        /// Total work hours
        #[arg(long)]
        work_hours: Option<String>,
        /// Lunch break duration in hours
        #[arg(long)]
        lunch_break: Option<String>,
        /// Short break duration in minutes
        #[arg(long)]
        short_break: Option<String>,
        /// Work session duration in minutes
        #[arg(long)]
        work_session: Option<String>,
        /// Day start, HH:MM 24-hour
        #[arg(long)]
        start_hour: Option<String>,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
        /// Keep a live clock readout running after printing the plan
        #[arg(long)]
        watch: bool,
    },
    /// Print the effective plan defaults as JSON
    Defaults,
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Generate {
            name,
            work_hours,
            lunch_break,
            short_break,
            work_session,
            start_hour,
            json,
            watch,
        } => {
            let config = Config::load_or_default();
            let form = PlanForm {
                name,
                work_hours,
                lunch_break,
                short_break,
                work_session,
                start_hour,
            };
            // Missing or unparseable values fall back to the configured
            // defaults; only a malformed start hour errors out.
            let request = form.resolve(&config.plan)?;
            let day_plan = plan::generate(&request);

            if json {
                println!("{}", serde_json::to_string_pretty(&day_plan)?);
            } else {
                println!("Work Plan for {}", request.name);
                for line in day_plan.display_lines() {
                    println!("- {line}");
                }
            }

            if watch {
                super::clock::watch_until_interrupt(config.clock.tick_secs)?;
            }
        }
        PlanAction::Defaults => {
            let config = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&config.plan)?);
        }
    }
    Ok(())
}
