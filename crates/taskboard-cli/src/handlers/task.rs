use crate::cli::{TaskAction, TaskUpdateArgs};
use crate::context::CliContext;
use crate::output;
use taskboard_core::BoardError;
use taskboard_domain::{Board, BoardOperations, FieldUpdate, ListId, ListedTask, TaskId, TaskUpdate};

pub async fn handle(ctx: &mut CliContext, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::Add { list } => {
            let list_id = ListId::new(list);
            let created = ctx.apply(|store| store.add_task(&list_id)).await;
            let task = created.as_ref().and_then(|id| listed(ctx.board(), id));
            output::output_success(ctx.report(created.is_some(), task))
        }
        TaskAction::Get { id } => {
            let task_id = TaskId::new(id);
            match listed(ctx.board(), &task_id) {
                Some(task) => output::output_success(task),
                None => output::output_error(
                    &BoardError::NotFound(format!("task {}", task_id)).to_string(),
                ),
            }
        }
        TaskAction::Update(args) => handle_update(ctx, args).await,
        TaskAction::Delete { list, id } => {
            let list_id = ListId::new(list);
            let task_id = TaskId::new(id);
            let changed = ctx.apply(|store| store.delete_task(&list_id, &task_id)).await;
            let deleted = changed.then(|| serde_json::json!({ "deleted": task_id }));
            output::output_success(ctx.report(changed, deleted))
        }
        TaskAction::Move {
            id,
            from,
            direction,
        } => {
            let task_id = TaskId::new(id);
            let source = ListId::new(from);
            let changed = ctx
                .apply(|store| store.move_task(&task_id, &source, direction))
                .await;
            let task = listed(ctx.board(), &task_id);
            output::output_success(ctx.report(changed, task))
        }
    }
}

async fn handle_update(ctx: &mut CliContext, args: TaskUpdateArgs) -> anyhow::Result<()> {
    let list_id = ListId::new(args.list);
    let task_id = TaskId::new(args.id);
    let updates = TaskUpdate {
        name: args.name,
        description: args.description,
        tags: None,
        due_date: FieldUpdate::from_parts(args.due, args.clear_due),
    };
    if updates.is_empty() {
        output::output_error("Nothing to update: pass --name, --description, --due or --clear-due");
    }

    let changed = ctx
        .apply(|store| store.update_task(&list_id, &task_id, updates))
        .await;
    let task = listed(ctx.board(), &task_id);
    output::output_success(ctx.report(changed, task))
}

fn listed<'a>(board: &'a Board, task_id: &TaskId) -> Option<ListedTask<'a>> {
    board
        .find_task(task_id)
        .map(|(list, task)| ListedTask {
            list_id: &list.id,
            task,
        })
}
