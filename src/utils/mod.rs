//! Utils: 日志初始化、字节/速度/时间格式化、标题处理

pub mod format;
pub mod logger;
pub mod title;

pub use format::{format_eta, format_size, format_speed};
pub use logger::{init_logger, init_logger_from_env};
pub use title::{display_title_from_url, is_valid_url, truncate_title};
