use std::io::Write;

use anyhow::Result;
use chrono::Local;
use env_logger::{Builder, Env};
use log::LevelFilter;

/// 初始化日志，固定格式：`2024-01-01 12:00:00 [INFO] - 消息`
///
/// 重复初始化会返回错误，由调用方决定是否忽略。
pub fn init_logger(level: LevelFilter) -> Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init()?;
    Ok(())
}

/// 从 RUST_LOG 环境变量初始化日志，默认 info 级别
pub fn init_logger_from_env() -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_once() {
        // 进程内只允许初始化一次
        assert!(init_logger(LevelFilter::Info).is_ok());
        assert!(init_logger(LevelFilter::Debug).is_err());
        assert!(init_logger_from_env().is_err());
    }
}
