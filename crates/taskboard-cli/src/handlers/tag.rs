use crate::cli::{TagAction, TagArgs};
use crate::context::CliContext;
use crate::output;
use taskboard_domain::{views, BoardOperations, ListId, TaskId};

pub async fn handle(ctx: &mut CliContext, action: TagAction) -> anyhow::Result<()> {
    match action {
        TagAction::Add(args) => {
            let (list_id, task_id, tag) = ids(args);
            let changed = ctx
                .apply(|store| store.add_tag(&list_id, &task_id, &tag))
                .await;
            output_tags(ctx, changed, &task_id)
        }
        TagAction::Delete(args) => {
            let (list_id, task_id, tag) = ids(args);
            let changed = ctx
                .apply(|store| store.delete_tag(&list_id, &task_id, &tag))
                .await;
            output_tags(ctx, changed, &task_id)
        }
        TagAction::List => output::output_list(views::all_tags(ctx.board())),
    }
}

fn ids(args: TagArgs) -> (ListId, TaskId, String) {
    (ListId::new(args.list), TaskId::new(args.task), args.tag)
}

fn output_tags(ctx: &CliContext, changed: bool, task_id: &TaskId) -> anyhow::Result<()> {
    let tags = ctx
        .board()
        .find_task(task_id)
        .map(|(_, task)| serde_json::json!({ "id": task.id, "tags": task.tags }));
    output::output_success(ctx.report(changed, tags))
}
