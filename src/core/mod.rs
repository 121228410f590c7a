//! Core: 任务快照、视图模型、投影，以及卡片/看板 actor
//!
//! 主要包括：
//! - `task`: 任务状态 `TaskStatus` 与只读快照 `TaskSnapshot`
//! - `view_model`: 渲染用的值类型 `TaskViewModel`
//! - `project`: 快照到视图模型的纯函数投影
//! - `messages`: 卡片收发的消息
//! - `card`: 单任务卡片 `TaskCardActor`
//! - `board`: 按任务ID路由的看板 `CardBoardActor`
//! - `error`: 展示层错误

pub mod board;
pub mod card;
pub mod error;
pub mod messages;
pub mod project;
pub mod task;
pub mod view_model;

// 导出核心组件，方便外部使用
pub use board::{
    AddCard, ApplySnapshotById, BindBoardIntents, BindBoardSink, CardBoardActor, ListCards,
    QueryViewById, RemoveCard, TapControlById, TapRemoveById,
};
pub use card::TaskCardActor;
pub use error::{ViewError, ViewResult};
pub use messages::{ActivateTask, ApplySnapshot, BindIntents, BindSink, QueryView, RemoveTask, TapControl, TapRemove};
pub use project::{project, project_into};
pub use task::{TaskSnapshot, TaskStatus};
pub use view_model::{ControlIcon, StatusColor, TaskViewModel};
