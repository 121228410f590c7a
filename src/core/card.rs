use std::sync::Arc;

use actix::prelude::*;
use log::{debug, warn};
use uuid::Uuid;

use crate::core::messages::*;
use crate::core::project::{project, project_into};
use crate::core::task::TaskSnapshot;
use crate::core::view_model::TaskViewModel;
use crate::ui::CardSink;

/// 单任务卡片 Actor
///
/// 持有一张卡片的最新视图模型。快照经信箱串行应用，保证同一任务
/// 的更新按到达顺序落到显示层；用户点按原样上送给绑定的接收端。
pub struct TaskCardActor {
    pub id: Uuid,
    pub view: TaskViewModel,
    pub on_activate: Option<Recipient<ActivateTask>>,
    pub on_remove: Option<Recipient<RemoveTask>>,
    pub sink: Option<Arc<dyn CardSink>>,
}

impl Actor for TaskCardActor {
    type Context = Context<Self>;

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        // 卡片退场时撤掉对应的控件；系统整体关停时没有执行环境，直接放弃
        if let Some(sink) = self.sink.take() {
            let id = self.id;
            if let Some(arbiter) = actix_rt::Arbiter::try_current() {
                arbiter.spawn(async move {
                    sink.retire(id).await;
                });
            }
        }
    }
}

impl TaskCardActor {
    pub fn new(snapshot: &TaskSnapshot) -> Self {
        Self {
            id: snapshot.id,
            view: project(snapshot),
            on_activate: None,
            on_remove: None,
            sink: None,
        }
    }

    /// 把当前视图模型推给控件层；在信箱内等待完成，保持应用顺序
    fn push_to_sink(&self, ctx: &mut Context<Self>) {
        if let Some(sink) = &self.sink {
            let sink = sink.clone();
            let id = self.id;
            let view = self.view.clone();
            ctx.wait(
                async move {
                    sink.apply(id, &view).await;
                }
                .into_actor(self),
            );
        }
    }
}

impl Handler<ApplySnapshot> for TaskCardActor {
    type Result = ();
    fn handle(&mut self, msg: ApplySnapshot, ctx: &mut Self::Context) {
        if msg.snapshot.id != self.id {
            warn!("快照任务ID不匹配: 卡片 {} 收到 {}", self.id, msg.snapshot.id);
            return;
        }
        self.view = project_into(&self.view, &msg.snapshot);
        self.push_to_sink(ctx);
    }
}

impl Handler<QueryView> for TaskCardActor {
    type Result = MessageResult<QueryView>;
    fn handle(&mut self, _msg: QueryView, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.view.clone())
    }
}

impl Handler<BindIntents> for TaskCardActor {
    type Result = ();
    fn handle(&mut self, msg: BindIntents, _ctx: &mut Self::Context) {
        self.on_activate = msg.on_activate;
        self.on_remove = msg.on_remove;
    }
}

impl Handler<BindSink> for TaskCardActor {
    type Result = ();
    fn handle(&mut self, msg: BindSink, ctx: &mut Self::Context) {
        self.sink = Some(msg.sink);
        // 立即画一次当前状态
        self.push_to_sink(ctx);
    }
}

impl Handler<TapControl> for TaskCardActor {
    type Result = ();
    fn handle(&mut self, _msg: TapControl, _ctx: &mut Self::Context) {
        match &self.on_activate {
            Some(recipient) => {
                let _ = recipient.do_send(ActivateTask { task_id: self.id });
            }
            None => debug!("卡片 {} 未绑定激活接收端，丢弃点按", self.id),
        }
    }
}

impl Handler<TapRemove> for TaskCardActor {
    type Result = ();
    fn handle(&mut self, _msg: TapRemove, _ctx: &mut Self::Context) {
        match &self.on_remove {
            Some(recipient) => {
                let _ = recipient.do_send(RemoveTask { task_id: self.id });
            }
            None => debug!("卡片 {} 未绑定移除接收端，丢弃点按", self.id),
        }
    }
}
