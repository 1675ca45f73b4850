//! Reapprove command - replay recorded approvals by impersonation

use crate::cli::CommandContext;
use mr_approvals::Approvals;
use mr_approvals::error::Result;
use owo_colors::OwoColorize;

/// Run the reapprove command
pub async fn run_reapprove(ctx: CommandContext) -> Result<()> {
    let mut approvals = Approvals::new(ctx.api, ctx.mr);
    approvals.refetch().await?;

    let approver_ids = approvals.approver_ids();
    if approver_ids.is_empty() {
        println!("{}", "No recorded approvers to replay".dimmed());
        return Ok(());
    }

    approvals.reapprove().await?;
    println!(
        "{} replayed {} approval(s) on MR !{}",
        "✓".green(),
        approver_ids.len(),
        approvals.iid()
    );
    Ok(())
}
