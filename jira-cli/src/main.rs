//! jira-cli: read-only Jira Cloud queries printed as JSON.
//!
//! The site comes from `JIRA_HOST`; credentials from `JIRA_USER` plus
//! `JIRA_API_TOKEN` or from `~/.netrc`.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use directories::BaseDirs;
use jira_cloud::{JiraClient, create_jira_client_from_env};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Query a Jira Cloud site from the command line")]
struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  verbose: u8,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Verify the site and credentials by fetching the current user
  Check,

  /// List dashboards visible to the current user
  Dashboards {
    #[arg(long, default_value_t = 0)]
    start_at: i32,
    #[arg(long, default_value_t = 50)]
    max_results: i32,
    /// Restrict to `favourite` or `my` dashboards
    #[arg(long)]
    filter: Option<String>,
  },

  /// Show a project
  Project {
    /// Project key or id
    key: String,
    /// Extra project fields to expand (e.g. description,lead)
    #[arg(long, value_delimiter = ',')]
    expand: Vec<String>,
  },

  /// List the roles of a project with their ids
  Roles {
    /// Project key or id
    key: String,
  },

  /// List issue priorities
  Priorities,

  /// Show the progress of a long-running task
  Task {
    /// Task id
    id: String,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  let level = match cli.verbose {
    0 => tracing::Level::WARN,
    1 => tracing::Level::INFO,
    2 => tracing::Level::DEBUG,
    _ => tracing::Level::TRACE,
  };

  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  let home_dir = BaseDirs::new()
    .context("Failed to determine home directory")?
    .home_dir()
    .to_path_buf();

  let client = create_jira_client_from_env(&home_dir)?;
  run(&client, cli.command).await
}

/// Site and user of `client`, after confirming Jira accepts its credentials.
async fn connection_summary(client: &JiraClient) -> Result<serde_json::Value> {
  let site = client.site().as_str().trim_end_matches('/');
  let user = client.auth().username().unwrap_or("<token>");
  info!("Checking {site} as {user}");

  let connected = client
    .test_connection()
    .await
    .with_context(|| format!("Failed to reach {site}"))?;

  if !connected {
    anyhow::bail!("Jira rejected the credentials for {user} on {site}");
  }

  Ok(serde_json::json!({
    "site": site,
    "user": user,
    "connected": connected,
  }))
}

async fn run(client: &JiraClient, command: Command) -> Result<()> {
  match command {
    Command::Check => print_json(&connection_summary(client).await?),
    Command::Dashboards {
      start_at,
      max_results,
      filter,
    } => {
      let (page, response) = client
        .dashboards()
        .gets(start_at, max_results, filter.as_deref())
        .await
        .context("Failed to list dashboards")?;
      debug!("dashboards: {}", response.code());
      print_json(&page)
    }
    Command::Project { key, expand } => {
      let (project, _) = client
        .projects()
        .get(&key, &expand)
        .await
        .with_context(|| format!("Failed to fetch project {key}"))?;
      print_json(&project)
    }
    Command::Roles { key } => {
      let (roles, _) = client
        .project_roles()
        .gets(&key)
        .await
        .with_context(|| format!("Failed to list roles for project {key}"))?;
      print_json(&roles)
    }
    Command::Priorities => {
      let (priorities, _) = client.priorities().gets().await.context("Failed to list priorities")?;
      print_json(&priorities)
    }
    Command::Task { id } => {
      let (task, _) = client
        .tasks()
        .get(&id)
        .await
        .with_context(|| format!("Failed to fetch task {id}"))?;
      print_json(&task)
    }
  }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
  let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON")?;
  println!("{rendered}");
  Ok(())
}
