//! Status command - resolve and print effective approval state

use crate::cli::CommandContext;
use mr_approvals::Approvals;
use mr_approvals::error::Result;
use owo_colors::OwoColorize;

/// Run the status command
pub async fn run_status(ctx: CommandContext) -> Result<()> {
    let mut approvals = Approvals::new(ctx.api, ctx.mr);
    approvals.refetch().await?;

    if approvals.sufficient() {
        println!(
            "{} MR !{} has sufficient approvals",
            "✓".green(),
            approvals.iid()
        );
    } else {
        println!(
            "{} MR !{} needs {} more approval(s)",
            "✗".red(),
            approvals.iid(),
            approvals.approvals_left()
        );
    }

    let usernames = approvals.approver_usernames();
    if !usernames.is_empty() {
        println!("  approved by: {}", usernames.join(", "));
    }
    Ok(())
}
