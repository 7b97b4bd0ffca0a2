use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use classroom_catalyst::{split_cards, AssetResponse};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catalystctl")]
#[command(about = "CLI for the Classroom Catalyst server")]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:3000")]
    addr: String,

    /// Print the raw JSON response instead of splitting it into cards
    #[arg(long, global = true)]
    raw: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Health,

    Generate {
        #[arg(short, long)]
        grade: String,

        #[arg(short, long)]
        topic: String,

        #[arg(short, long, default_value = "")]
        context: String,

        #[arg(short, long, default_value = "")]
        location: String,

        /// Asset type to include; repeat for several
        #[arg(short = 'o', long = "output-type")]
        output_types: Vec<String>,

        /// Class duration in minutes
        #[arg(short, long)]
        duration: Option<u32>,

        /// Ask for a plain asset list instead of a timed lesson plan
        #[arg(long)]
        assets_only: bool,
    },

    Remix(CardArgs),

    DeeperDive(CardArgs),

    StudentReply {
        #[arg(short, long)]
        grade: String,

        #[arg(short, long)]
        question: String,

        #[arg(short, long)]
        reply: String,
    },

    /// Share a plan stored as JSON in a file
    Share {
        file: PathBuf,
    },

    GetShared {
        id: String,
    },
}

#[derive(Args)]
struct CardArgs {
    #[arg(short, long)]
    grade: String,

    #[arg(short, long)]
    topic: String,

    #[arg(short, long, default_value = "")]
    location: String,

    #[arg(long)]
    title: String,

    #[arg(long)]
    content: String,
}

impl CardArgs {
    fn to_json(&self) -> Value {
        serde_json::json!({
            "grade": self.grade,
            "topic": self.topic,
            "location": self.location,
            "cardTitle": self.title,
            "cardContent": self.content,
        })
    }
}

async fn post(client: &reqwest::Client, url: String, body: &Value) -> Result<Value> {
    let resp = client.post(url).json(body).send().await?;
    read_json(resp).await
}

async fn read_json(resp: reqwest::Response) -> Result<Value> {
    let status = resp.status();
    let body: Value = resp.json().await?;
    if !status.is_success() {
        let message = body
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown error");
        anyhow::bail!("Server returned {}: {}", status, message);
    }
    Ok(body)
}

fn print_assets(resp: Value, raw: bool) -> Result<()> {
    if raw {
        println!("{}", serde_json::to_string_pretty(&resp)?);
        return Ok(());
    }

    let assets: AssetResponse = serde_json::from_value(resp)?;
    for (i, card) in split_cards(&assets.assets).iter().enumerate() {
        if i > 0 {
            println!("\n{}\n", "-".repeat(40));
        }
        if let Some(title) = &card.title {
            println!("== {} ==\n", title);
        }
        println!("{}", card.body);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base_url = cli.addr.trim_end_matches('/').to_string();

    match cli.command {
        Commands::Health => {
            let resp = read_json(client.get(format!("{}/health", base_url)).send().await?).await?;
            println!("{}", serde_json::to_string_pretty(&resp)?);
        }
        Commands::Generate {
            grade,
            topic,
            context,
            location,
            output_types,
            duration,
            assets_only,
        } => {
            let body = serde_json::json!({
                "grade": grade,
                "topic": topic,
                "context": context,
                "location": location,
                "outputTypes": output_types,
                "duration": duration,
            });
            let path = if assets_only { "generate-assets" } else { "generate" };
            let resp = post(&client, format!("{}/{}", base_url, path), &body).await?;
            print_assets(resp, cli.raw)?;
        }
        Commands::Remix(card) => {
            let resp = post(&client, format!("{}/remix", base_url), &card.to_json()).await?;
            print_assets(resp, cli.raw)?;
        }
        Commands::DeeperDive(card) => {
            let resp = post(&client, format!("{}/deeper-dive", base_url), &card.to_json()).await?;
            print_assets(resp, cli.raw)?;
        }
        Commands::StudentReply {
            grade,
            question,
            reply,
        } => {
            let body = serde_json::json!({
                "grade": grade,
                "cardContent": question,
                "studentReply": reply,
            });
            let resp = post(&client, format!("{}/student-reply", base_url), &body).await?;
            print_assets(resp, cli.raw)?;
        }
        Commands::Share { file } => {
            let plan: Value = serde_json::from_str(&std::fs::read_to_string(&file)?)?;
            let body = serde_json::json!({ "plan": plan });
            let resp = post(&client, format!("{}/share", base_url), &body).await?;
            println!("{}", serde_json::to_string_pretty(&resp)?);
        }
        Commands::GetShared { id } => {
            let resp = read_json(
                client
                    .get(format!("{}/get-shared/{}", base_url, id))
                    .send()
                    .await?,
            )
            .await?;
            println!("{}", serde_json::to_string_pretty(&resp)?);
        }
    }

    Ok(())
}
