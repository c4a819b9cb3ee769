use clap::{Parser, Subcommand};
use reqwest::Client;
use serde_json::json;

#[derive(Parser)]
#[command(name = "stage-duration-cli")]
#[command(about = "Stage Duration Predictor CLI", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    endpoint: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check server health
    Health,

    /// Request a stage duration prediction
    Predict {
        #[arg(long, default_value = "Feature")]
        issue_type: String,

        #[arg(long, default_value = "High")]
        priority: String,

        #[arg(long, default_value = "Team A")]
        team: String,

        #[arg(long, default_value = "Testing")]
        current_stage: String,

        #[arg(long, default_value_t = 8)]
        story_points: u32,

        #[arg(long, default_value_t = 1)]
        previous_stages_count: u32,

        #[arg(long, default_value_t = 2)]
        num_dependencies: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = Client::new();

    match cli.command {
        Commands::Health => {
            let response = client
                .get(format!("{}/health", cli.endpoint))
                .send()
                .await?
                .error_for_status()?;

            let body: serde_json::Value = response.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }

        Commands::Predict {
            issue_type,
            priority,
            team,
            current_stage,
            story_points,
            previous_stages_count,
            num_dependencies,
        } => {
            let request = json!({
                "issue_type": issue_type,
                "priority": priority,
                "team": team,
                "current_stage": current_stage,
                "story_points": story_points,
                "previous_stages_count": previous_stages_count,
                "num_dependencies": num_dependencies,
            });

            let response = client
                .post(format!("{}/predict", cli.endpoint))
                .json(&request)
                .send()
                .await?
                .error_for_status()?;

            let body: serde_json::Value = response.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    Ok(())
}
