use clap::Args;
use std::time::Duration;
use timely_core::{clock, Config};

#[derive(Args)]
pub struct ClockArgs {
    /// Seconds between readouts (defaults to the configured tick)
    #[arg(long)]
    pub tick_secs: Option<u64>,
}

pub fn run(args: ClockArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let tick_secs = args.tick_secs.unwrap_or(config.clock.tick_secs);
    watch_until_interrupt(tick_secs)
}

/// Run the live readout on a fresh runtime until ctrl-c.
pub fn watch_until_interrupt(tick_secs: u64) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let handle = clock::spawn(Duration::from_secs(tick_secs.max(1)), |now| {
            println!("{now}");
        });
        tokio::signal::ctrl_c().await?;
        handle.stop().await;
        Ok::<_, std::io::Error>(())
    })?;
    Ok(())
}
