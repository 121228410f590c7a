use std::sync::Arc;

use actix::{Message, Recipient};
use uuid::Uuid;

use crate::core::task::TaskSnapshot;
use crate::core::view_model::TaskViewModel;
use crate::ui::CardSink;

/// 应用一次任务状态快照
///
/// 同一张卡片的快照按到达顺序应用（actor 信箱保证），
/// 乱序应用属于渲染缺陷。
pub struct ApplySnapshot {
    pub snapshot: TaskSnapshot,
}
impl Message for ApplySnapshot { type Result = (); }

/// 查询当前视图模型
pub struct QueryView;
impl Message for QueryView { type Result = TaskViewModel; }

/// 绑定用户意图接收端（两个回调槽）
pub struct BindIntents {
    pub on_activate: Option<Recipient<ActivateTask>>,
    pub on_remove: Option<Recipient<RemoveTask>>,
}
impl Message for BindIntents { type Result = (); }

/// 绑定控件落地层
pub struct BindSink {
    pub sink: Arc<dyn CardSink>,
}
impl Message for BindSink { type Result = (); }

/// 用户点按控制按钮
pub struct TapControl;
impl Message for TapControl { type Result = (); }

/// 用户点按移除按钮
pub struct TapRemove;
impl Message for TapRemove { type Result = (); }

/// 上行事件：激活任务。开始还是暂停由宿主解释，卡片不做判断
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivateTask {
    pub task_id: Uuid,
}
impl Message for ActivateTask { type Result = (); }

/// 上行事件：移除任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveTask {
    pub task_id: Uuid,
}
impl Message for RemoveTask { type Result = (); }
