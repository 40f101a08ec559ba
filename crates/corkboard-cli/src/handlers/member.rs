use crate::cli::MemberAction;
use crate::output;
use corkboard_core::{BoardError, UserId};
use corkboard_domain::{BoardOperations, Role};
use corkboard_service::BoardService;
use serde_json::json;

pub async fn handle(
    service: &BoardService,
    actor: UserId,
    action: MemberAction,
) -> anyhow::Result<()> {
    match action {
        MemberAction::SetRole {
            board_id,
            username,
            role,
        } => {
            let role: Role = output::unwrap_or_exit(role.parse());
            let result = service
                .transact(|ctx| {
                    // An unknown username cannot name a member of any board.
                    let target = ctx
                        .users
                        .iter()
                        .find(|u| u.username == username)
                        .map(|u| u.id)
                        .ok_or_else(|| {
                            BoardError::NotFound("member_not_found".to_string())
                        })?;
                    ctx.set_member_role(actor, board_id, target, role)
                })
                .await;
            output::unwrap_or_exit(result);
            output::output_success(json!({
                "username": username,
                "role": role.as_str(),
            }));
        }
        MemberAction::List { board_id } => {
            let members = output::unwrap_or_exit(
                service.query(|ctx| ctx.list_members(actor, board_id)).await,
            );
            output::output_success(&members);
        }
    }
    Ok(())
}
