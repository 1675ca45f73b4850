//! mr-approvals binary: inspect and restore merge request approvals

mod cli;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mr-approvals",
    about = "Approval gating for GitLab merge requests",
    version
)]
struct Cli {
    /// GitLab host to talk to
    #[arg(long, default_value = "gitlab.com")]
    host: String,

    /// API token; reapprove needs an admin token for impersonation
    #[arg(long, env = "GITLAB_TOKEN", hide_env_values = true)]
    token: String,

    /// Project id or full path (e.g. 42 or group/subgroup/repo)
    #[arg(long)]
    project: String,

    /// Merge request iid
    #[arg(long)]
    mr: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve and print the effective approval state
    Status,
    /// Replay the recorded approvals by impersonating each approver
    Reapprove,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let ctx = cli::CommandContext::new(&args.host, &args.token, &args.project, args.mr).await?;
    match args.command {
        Command::Status => cli::run_status(ctx).await?,
        Command::Reapprove => cli::run_reapprove(ctx).await?,
    }
    Ok(())
}
