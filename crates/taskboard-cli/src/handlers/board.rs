use crate::cli::SearchArgs;
use crate::context::CliContext;
use crate::output;
use chrono::Utc;
use taskboard_domain::views;

pub fn handle_show(ctx: &CliContext) -> anyhow::Result<()> {
    output::output_success(ctx.board())
}

pub fn handle_search(ctx: &CliContext, args: SearchArgs) -> anyhow::Result<()> {
    let tasks = views::filtered_tasks(ctx.board(), &args.query, args.tags.as_slice());
    output::output_list(tasks)
}

pub fn handle_stats(ctx: &CliContext) -> anyhow::Result<()> {
    let board = ctx.board();
    output::output_success(serde_json::json!({
        "lists": views::task_counts_by_list(board),
        "completion": views::completion_summary(board, ctx.done_list_name()),
    }))
}

pub fn handle_due(ctx: &CliContext) -> anyhow::Result<()> {
    output::output_list(views::due_sorted(ctx.board(), Utc::now()))
}
