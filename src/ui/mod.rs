//! UI: 视图模型的终端落地（indicatif 进度条 + crossterm 颜色）
//!
//! 控件操作只发生在这一层，投影本身保持纯函数。

mod render;

pub use render::{icon_glyph, term_color, CardRenderer, CardSink};
