use crate::cli::{ExportArgs, ImportArgs};
use crate::context::CliContext;
use crate::output;
use taskboard_domain::SnapshotExporter;

pub fn handle_export(ctx: &CliContext, args: ExportArgs) -> anyhow::Result<()> {
    let json = ctx.session().export_snapshot()?;
    match args.output {
        Some(path) => {
            SnapshotExporter::to_file(ctx.board(), &path)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
            output::output_success(serde_json::json!({
                "exported": path.display().to_string(),
                "bytes": json.len(),
            }))
        }
        None => {
            print!("{}", json);
            Ok(())
        }
    }
}

pub async fn handle_import(ctx: &mut CliContext, args: ImportArgs) -> anyhow::Result<()> {
    let data = std::fs::read_to_string(&args.input)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", args.input.display(), e))?;

    let session = ctx.session_mut();
    if session.import_snapshot(&data).await.is_err() {
        let message = session
            .import_error()
            .unwrap_or("Import failed")
            .to_string();
        output::output_error(&format!("Import rejected: {}", message));
    }

    let board = ctx.board();
    let summary = serde_json::json!({
        "lists": board.lists.len(),
        "tasks": board.task_count(),
    });
    output::output_success(ctx.report(true, Some(summary)))
}
