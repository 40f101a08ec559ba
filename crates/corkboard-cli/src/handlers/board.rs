use crate::cli::BoardAction;
use crate::output;
use corkboard_core::UserId;
use corkboard_domain::{BoardOperations, SnapshotBuilder};
use corkboard_service::BoardService;
use serde_json::json;

pub async fn handle(
    service: &BoardService,
    actor: UserId,
    action: BoardAction,
) -> anyhow::Result<()> {
    match action {
        BoardAction::Create { name } => {
            let board = output::unwrap_or_exit(
                service
                    .transact(|ctx| ctx.create_board(actor, name.as_deref().unwrap_or("")))
                    .await,
            );
            output::output_success(json!({
                "board_id": board.id,
                "name": board.name,
                "join_code": board.join_code,
            }));
        }
        BoardAction::Join { code } => {
            let board =
                output::unwrap_or_exit(service.transact(|ctx| ctx.join_board(actor, &code)).await);
            output::output_success(json!({
                "board_id": board.id,
                "name": board.name,
            }));
        }
        BoardAction::View { id, search } => {
            let view = output::unwrap_or_exit(
                service
                    .query(|ctx| ctx.board_view(actor, id, search.as_deref()))
                    .await,
            );
            output::output_success(&view);
        }
        BoardAction::Export { id, output: target } => {
            let snapshot =
                output::unwrap_or_exit(service.query(|ctx| ctx.export_board(actor, id)).await);
            match target {
                Some(path) => {
                    let json = output::unwrap_or_exit(SnapshotBuilder::to_json(&snapshot));
                    std::fs::write(&path, json)?;
                    output::output_success(json!({ "exported": path }));
                }
                None => output::output_success(&snapshot),
            }
        }
        BoardAction::Reset { id } => {
            output::unwrap_or_exit(service.transact(|ctx| ctx.reset_board(actor, id)).await);
            output::output_success(json!({ "reset": id }));
        }
        BoardAction::Delete { id } => {
            output::unwrap_or_exit(service.transact(|ctx| ctx.delete_board(actor, id)).await);
            output::output_success(json!({ "deleted": id }));
        }
    }
    Ok(())
}
