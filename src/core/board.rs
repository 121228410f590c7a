use std::collections::HashMap;
use std::sync::Arc;

use actix::prelude::*;
use futures::FutureExt;
use log::info;
use uuid::Uuid;

use crate::core::card::TaskCardActor;
use crate::core::error::ViewError;
use crate::core::messages::{
    ActivateTask, ApplySnapshot, BindIntents, BindSink, QueryView, RemoveTask, TapControl,
    TapRemove,
};
use crate::core::task::TaskSnapshot;
use crate::core::view_model::TaskViewModel;
use crate::ui::CardSink;
use crate::utils::title::is_valid_url;

/// 新建一张任务卡片
pub struct AddCard {
    pub snapshot: TaskSnapshot,
}
impl Message for AddCard { type Result = Result<Uuid, ViewError>; }
impl Handler<AddCard> for CardBoardActor {
    type Result = Result<Uuid, ViewError>;
    fn handle(&mut self, msg: AddCard, _ctx: &mut Self::Context) -> Self::Result {
        let snapshot = msg.snapshot;
        if !is_valid_url(&snapshot.url) {
            return Err(ViewError::InvalidUrl(snapshot.url));
        }
        let id = snapshot.id;
        if self.cards.contains_key(&id) {
            return Err(ViewError::DuplicateTask(id));
        }
        let card = TaskCardActor::new(&snapshot).start();
        card.do_send(BindIntents {
            on_activate: self.on_activate.clone(),
            on_remove: self.on_remove.clone(),
        });
        if let Some(sink) = &self.sink {
            card.do_send(BindSink { sink: sink.clone() });
        }
        self.cards.insert(id, card);
        info!("新建任务卡片: {} -> {}", id, snapshot.title);
        Ok(id)
    }
}

/// 按任务ID路由一次快照
pub struct ApplySnapshotById {
    pub snapshot: TaskSnapshot,
}
impl Message for ApplySnapshotById { type Result = Result<(), ViewError>; }
impl Handler<ApplySnapshotById> for CardBoardActor {
    type Result = Result<(), ViewError>;
    fn handle(&mut self, msg: ApplySnapshotById, _ctx: &mut Self::Context) -> Self::Result {
        let id = msg.snapshot.id;
        if let Some(card) = self.cards.get(&id) {
            card.do_send(ApplySnapshot { snapshot: msg.snapshot });
            Ok(())
        } else {
            Err(ViewError::UnknownTask(id))
        }
    }
}

/// 撤下一张卡片
pub struct RemoveCard {
    pub task_id: Uuid,
}
impl Message for RemoveCard { type Result = Result<bool, ViewError>; }
impl Handler<RemoveCard> for CardBoardActor {
    type Result = Result<bool, ViewError>;
    fn handle(&mut self, msg: RemoveCard, _ctx: &mut Self::Context) -> Self::Result {
        let removed = self.cards.remove(&msg.task_id).is_some();
        if removed {
            info!("撤下任务卡片: {}", msg.task_id);
        }
        Ok(removed)
    }
}

/// 查询指定卡片的视图模型
pub struct QueryViewById {
    pub task_id: Uuid,
}
impl Message for QueryViewById { type Result = Option<TaskViewModel>; }
impl Handler<QueryViewById> for CardBoardActor {
    type Result = ResponseFuture<Option<TaskViewModel>>;
    fn handle(&mut self, msg: QueryViewById, _ctx: &mut Self::Context) -> Self::Result {
        if let Some(card) = self.cards.get(&msg.task_id) {
            let fut = card.send(QueryView).map(|res| res.ok());
            Box::pin(fut)
        } else {
            Box::pin(async { None })
        }
    }
}

/// 查询所有卡片ID
pub struct ListCards;
impl Message for ListCards { type Result = Vec<Uuid>; }
impl Handler<ListCards> for CardBoardActor {
    type Result = MessageResult<ListCards>;
    fn handle(&mut self, _msg: ListCards, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.cards.keys().cloned().collect())
    }
}

/// 点按指定卡片的控制按钮
pub struct TapControlById {
    pub task_id: Uuid,
}
impl Message for TapControlById { type Result = Result<(), ViewError>; }
impl Handler<TapControlById> for CardBoardActor {
    type Result = Result<(), ViewError>;
    fn handle(&mut self, msg: TapControlById, _ctx: &mut Self::Context) -> Self::Result {
        if let Some(card) = self.cards.get(&msg.task_id) {
            card.do_send(TapControl);
            Ok(())
        } else {
            Err(ViewError::UnknownTask(msg.task_id))
        }
    }
}

/// 点按指定卡片的移除按钮
pub struct TapRemoveById {
    pub task_id: Uuid,
}
impl Message for TapRemoveById { type Result = Result<(), ViewError>; }
impl Handler<TapRemoveById> for CardBoardActor {
    type Result = Result<(), ViewError>;
    fn handle(&mut self, msg: TapRemoveById, _ctx: &mut Self::Context) -> Self::Result {
        if let Some(card) = self.cards.get(&msg.task_id) {
            card.do_send(TapRemove);
            Ok(())
        } else {
            Err(ViewError::UnknownTask(msg.task_id))
        }
    }
}

/// 绑定看板级的用户意图接收端，现有及后续卡片都会收到
pub struct BindBoardIntents {
    pub on_activate: Option<Recipient<ActivateTask>>,
    pub on_remove: Option<Recipient<RemoveTask>>,
}
impl Message for BindBoardIntents { type Result = (); }
impl Handler<BindBoardIntents> for CardBoardActor {
    type Result = ();
    fn handle(&mut self, msg: BindBoardIntents, _ctx: &mut Self::Context) {
        self.on_activate = msg.on_activate;
        self.on_remove = msg.on_remove;
        for card in self.cards.values() {
            card.do_send(BindIntents {
                on_activate: self.on_activate.clone(),
                on_remove: self.on_remove.clone(),
            });
        }
    }
}

/// 绑定看板级控件落地层
pub struct BindBoardSink {
    pub sink: Arc<dyn CardSink>,
}
impl Message for BindBoardSink { type Result = (); }
impl Handler<BindBoardSink> for CardBoardActor {
    type Result = ();
    fn handle(&mut self, msg: BindBoardSink, _ctx: &mut Self::Context) {
        for card in self.cards.values() {
            card.do_send(BindSink { sink: msg.sink.clone() });
        }
        self.sink = Some(msg.sink);
    }
}

impl Actor for CardBoardActor {
    type Context = Context<Self>;
}

/// 任务卡片看板 Actor
///
/// 以任务ID为键管理全部卡片：路由快照、转发点按、新建与撤下。
/// 跨任务之间不承诺更新顺序，单任务内的顺序由卡片信箱保证。
#[derive(Default)]
pub struct CardBoardActor {
    pub cards: HashMap<Uuid, Addr<TaskCardActor>>,
    pub on_activate: Option<Recipient<ActivateTask>>,
    pub on_remove: Option<Recipient<RemoveTask>>,
    pub sink: Option<Arc<dyn CardSink>>,
}

impl CardBoardActor {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::TaskStatus;

    fn board() -> Addr<CardBoardActor> {
        CardBoardActor::new().start()
    }

    fn pending_snapshot() -> TaskSnapshot {
        TaskSnapshot::new("https://example.com/files/demo.zip")
    }

    #[actix::test]
    async fn test_add_and_query() {
        let board = board();
        let snap = pending_snapshot();
        let id = board
            .send(AddCard { snapshot: snap.clone() })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(id, snap.id);

        let view = board.send(QueryViewById { task_id: id }).await.unwrap();
        let view = view.expect("卡片应当存在");
        assert_eq!(view.status_text, "waiting");
        assert_eq!(view.title, "demo.zip");
    }

    #[actix::test]
    async fn test_add_rejects_bad_url_and_duplicate() {
        let board = board();
        let mut snap = pending_snapshot();
        snap.url = "not-a-url".to_string();
        let err = board.send(AddCard { snapshot: snap }).await.unwrap();
        assert!(matches!(err, Err(ViewError::InvalidUrl(_))));

        let snap = pending_snapshot();
        board
            .send(AddCard { snapshot: snap.clone() })
            .await
            .unwrap()
            .unwrap();
        let err = board.send(AddCard { snapshot: snap }).await.unwrap();
        assert!(matches!(err, Err(ViewError::DuplicateTask(_))));
    }

    #[actix::test]
    async fn test_route_snapshot_by_id() {
        let board = board();
        let snap = pending_snapshot();
        let id = board
            .send(AddCard { snapshot: snap.clone() })
            .await
            .unwrap()
            .unwrap();

        let mut update = snap.clone();
        update.status = TaskStatus::Running;
        update.downloaded = 1024;
        update.total = 2048;
        board
            .send(ApplySnapshotById { snapshot: update })
            .await
            .unwrap()
            .unwrap();

        let view = board
            .send(QueryViewById { task_id: id })
            .await
            .unwrap()
            .expect("卡片应当存在");
        assert_eq!(view.status_text, "downloading");
        assert_eq!(view.bytes_text, "1.0KB/2.0KB");
    }

    #[actix::test]
    async fn test_route_unknown_id_errors() {
        let board = board();
        let snap = pending_snapshot();
        let res = board.send(ApplySnapshotById { snapshot: snap }).await.unwrap();
        assert!(matches!(res, Err(ViewError::UnknownTask(_))));

        let res = board
            .send(TapControlById { task_id: Uuid::new_v4() })
            .await
            .unwrap();
        assert!(matches!(res, Err(ViewError::UnknownTask(_))));
    }

    #[actix::test]
    async fn test_remove_card() {
        let board = board();
        let snap = pending_snapshot();
        let id = board
            .send(AddCard { snapshot: snap })
            .await
            .unwrap()
            .unwrap();

        let removed = board.send(RemoveCard { task_id: id }).await.unwrap().unwrap();
        assert!(removed);
        let removed = board.send(RemoveCard { task_id: id }).await.unwrap().unwrap();
        assert!(!removed);

        let view = board.send(QueryViewById { task_id: id }).await.unwrap();
        assert!(view.is_none());
        assert!(board.send(ListCards).await.unwrap().is_empty());
    }
}
