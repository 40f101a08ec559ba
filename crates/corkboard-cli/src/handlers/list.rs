use crate::cli::ListAction;
use crate::output;
use corkboard_core::{BoardError, BoardResult, UserId};
use corkboard_domain::BoardOperations;
use corkboard_service::BoardService;
use serde_json::json;
use uuid::Uuid;

/// Parse a comma-separated id sequence; anything that is not a uuid list is
/// `bad_order`.
fn parse_order(order: &str) -> BoardResult<Vec<Uuid>> {
    order
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Uuid>()
                .map_err(|_| BoardError::Validation("bad_order".to_string()))
        })
        .collect()
}

pub async fn handle(
    service: &BoardService,
    actor: UserId,
    action: ListAction,
) -> anyhow::Result<()> {
    match action {
        ListAction::Create { board_id, title } => {
            let list = output::unwrap_or_exit(
                service
                    .transact(|ctx| ctx.create_list(actor, board_id, &title))
                    .await,
            );
            output::output_success(json!({
                "list_id": list.id,
                "title": list.title,
                "position": list.position,
            }));
        }
        ListAction::Rename {
            board_id,
            id,
            title,
        } => {
            output::unwrap_or_exit(
                service
                    .transact(|ctx| ctx.rename_list(actor, board_id, id, &title))
                    .await,
            );
            output::output_success(json!({ "renamed": id }));
        }
        ListAction::Delete { board_id, id } => {
            output::unwrap_or_exit(
                service
                    .transact(|ctx| ctx.delete_list(actor, board_id, id))
                    .await,
            );
            output::output_success(json!({ "deleted": id }));
        }
        ListAction::Reorder { board_id, order } => {
            let order = output::unwrap_or_exit(parse_order(&order));
            output::unwrap_or_exit(
                service
                    .transact(|ctx| ctx.reorder_lists(actor, board_id, &order))
                    .await,
            );
            output::output_success(json!({ "reordered": order.len() }));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order_accepts_uuid_list() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let parsed = parse_order(&format!("{a}, {b}")).unwrap();
        assert_eq!(parsed, vec![a, b]);
    }

    #[test]
    fn test_parse_order_rejects_garbage() {
        let err = parse_order("not,a,uuid").unwrap_err();
        assert_eq!(err.reason(), "bad_order");
    }
}
