//! DownView: 下载任务状态展示库
//!
//! 把外部下载库给出的任务状态快照投影成可渲染的视图模型，并把
//! 用户的点按意图原样上送给宿主。本库不做调度、不做网络请求、
//! 不做重试，也不持久化下载状态，那些都属于外部下载库。
//!
//! 典型用法：
//! 1. 用 [`CardBoardActor`] 起一块看板，绑定意图接收端和渲染器；
//! 2. 外部下载库每次状态变化时把 [`TaskSnapshot`] 发给看板；
//! 3. 宿主按 [`DisplayConfig`] 的刷新间隔查询或让渲染器自动落地。
//!
//! 只需要纯投影时，直接调用 [`project`] 即可。

pub mod config;
pub mod core;
pub mod ui;
pub mod utils;

pub use crate::config::DisplayConfig;
pub use crate::core::{
    project, project_into, CardBoardActor, ControlIcon, StatusColor, TaskCardActor, TaskSnapshot,
    TaskStatus, TaskViewModel, ViewError, ViewResult,
};
pub use crate::ui::{CardRenderer, CardSink};

/// 构建信息（crate 版本 + git 提交）
pub fn build_info() -> String {
    format!(
        "{} ({})",
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    )
}
