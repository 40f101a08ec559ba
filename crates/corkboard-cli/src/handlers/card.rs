use crate::cli::{CardAction, CardUpdateArgs};
use crate::output;
use corkboard_core::UserId;
use corkboard_domain::{BoardOperations, CardFields, CardTag};
use corkboard_service::BoardService;
use serde_json::json;

pub async fn handle(
    service: &BoardService,
    actor: UserId,
    action: CardAction,
) -> anyhow::Result<()> {
    match action {
        CardAction::Create {
            board_id,
            list_id,
            title,
        } => {
            let card = output::unwrap_or_exit(
                service
                    .transact(|ctx| ctx.create_card(actor, board_id, list_id, &title))
                    .await,
            );
            output::output_success(json!({
                "card_id": card.id,
                "title": card.title,
                "position": card.position,
            }));
        }
        CardAction::Update(args) => {
            let card = output::unwrap_or_exit(handle_update(service, actor, args).await);
            output::output_success(&card);
        }
        CardAction::Delete { board_id, id } => {
            output::unwrap_or_exit(
                service
                    .transact(|ctx| ctx.delete_card(actor, board_id, id))
                    .await,
            );
            output::output_success(json!({ "deleted": id }));
        }
        CardAction::Move {
            board_id,
            id,
            list_id,
            index,
        } => {
            output::unwrap_or_exit(
                service
                    .transact(|ctx| ctx.move_card(actor, board_id, id, list_id, index))
                    .await,
            );
            output::output_success(json!({ "moved": id }));
        }
    }
    Ok(())
}

async fn handle_update(
    service: &BoardService,
    actor: UserId,
    args: CardUpdateArgs,
) -> corkboard_core::BoardResult<corkboard_domain::Card> {
    let fields = CardFields {
        title: args.title,
        desc: args.desc,
        tag: CardTag::parse_or_default(&args.tag),
    };
    service
        .transact(|ctx| ctx.update_card(actor, args.board_id, args.id, fields))
        .await
}
