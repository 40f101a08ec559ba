use crate::context::ServiceContext;
use corkboard_core::BoardResult;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle for concurrent request handlers.
///
/// One request handler at a time gets exclusive access to the working set,
/// so the read-modify-write of a position recomputation can never interleave
/// with another handler's. Each mutation persists exactly one snapshot while
/// still holding the lock, which makes the unit atomic on disk as well.
#[derive(Clone)]
pub struct BoardService {
    inner: Arc<Mutex<ServiceContext>>,
}

impl BoardService {
    pub fn new(context: ServiceContext) -> Self {
        Self {
            inner: Arc::new(Mutex::new(context)),
        }
    }

    /// Run a mutating operation as one atomic unit.
    ///
    /// Commands validate before they mutate, so an `Err` from the closure
    /// means nothing was applied and nothing needs saving.
    pub async fn transact<R>(
        &self,
        f: impl FnOnce(&mut ServiceContext) -> BoardResult<R>,
    ) -> BoardResult<R> {
        let mut context = self.inner.lock().await;
        let result = f(&mut context)?;
        context.save().await?;
        Ok(result)
    }

    /// Run a read-only operation under the same serialization.
    pub async fn query<R>(
        &self,
        f: impl FnOnce(&ServiceContext) -> BoardResult<R>,
    ) -> BoardResult<R> {
        let context = self.inner.lock().await;
        f(&context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corkboard_domain::BoardOperations;

    #[tokio::test]
    async fn test_transact_serializes_moves() {
        let mut context = ServiceContext::in_memory();
        let user = context.login("alice").unwrap();
        let board = context.create_board(user.id, "Race").unwrap();
        let view = context.board_view(user.id, board.id, None).unwrap();
        let todo = view.lists[0].id;
        let doing = view.lists[1].id;
        let cards: Vec<_> = view.lists[0].cards.iter().map(|c| c.id).collect();

        let service = BoardService::new(context);

        // Two concurrent movers of the same list; the lock forces them to
        // observe each other's resequencing instead of interleaving.
        let mut handles = Vec::new();
        for (i, card_id) in cards.into_iter().enumerate() {
            let service = service.clone();
            let to_list_id = if i % 2 == 0 { doing } else { todo };
            handles.push(tokio::spawn(async move {
                service
                    .transact(|ctx| ctx.move_card(user.id, board.id, card_id, to_list_id, 0))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let view = service
            .query(|ctx| ctx.board_view(user.id, board.id, None))
            .await
            .unwrap();
        for list in &view.lists {
            let positions: Vec<i32> = list.cards.iter().map(|c| c.position).collect();
            let expected: Vec<i32> = (0..positions.len() as i32).collect();
            assert_eq!(positions, expected);
        }
    }
}
