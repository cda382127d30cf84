use anyhow::{Context, Result};
use dotenv::dotenv;
use lighthouse_gate::services::run_gate;
use lighthouse_gate::utils::{init_logging, save_status_report, ActionsReporter, EnvInputs};
use log::error;

#[tokio::main]
async fn main() {
    // inputs may also come from a local .env file
    dotenv().ok();
    init_logging();

    let mut reporter = ActionsReporter::stdout();
    if let Err(e) = run(&mut reporter).await {
        error!("{:#}", e);
    }

    std::process::exit(reporter.exit_code());
}

async fn run(reporter: &mut ActionsReporter<std::io::Stdout>) -> Result<()> {
    let run = run_gate(&EnvInputs, reporter).context("Lighthouse gate could not evaluate results")?;
    save_status_report(&run).await;

    Ok(())
}
