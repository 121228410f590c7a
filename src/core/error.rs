use std::io;
use thiserror::Error;
use uuid::Uuid;

/// 展示层错误
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("IO错误: {0}")]
    IoError(#[from] io::Error),

    #[error("配置解析失败: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("配置序列化失败: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("任务ID不存在: {0}")]
    UnknownTask(Uuid),

    #[error("任务ID已存在: {0}")]
    DuplicateTask(Uuid),

    #[error("无效的URL: {0}")]
    InvalidUrl(String),

    #[error("未知错误: {0}")]
    Unknown(String),
}

impl ViewError {
    /// 路由类错误（任务不存在/重复）可以由调用方安全忽略，展示层不因此中断
    pub fn is_routing(&self) -> bool {
        matches!(
            self,
            ViewError::UnknownTask(_) | ViewError::DuplicateTask(_)
        )
    }
}

impl From<String> for ViewError {
    fn from(error: String) -> Self {
        ViewError::Unknown(error)
    }
}

impl From<&str> for ViewError {
    fn from(error: &str) -> Self {
        ViewError::Unknown(error.to_string())
    }
}

pub type ViewResult<T> = Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_routing() {
        let id = Uuid::new_v4();
        assert!(ViewError::UnknownTask(id).is_routing());
        assert!(ViewError::DuplicateTask(id).is_routing());
        assert!(!ViewError::InvalidUrl("x".to_string()).is_routing());
        assert!(!ViewError::Unknown("x".to_string()).is_routing());
    }

    #[test]
    fn test_error_display() {
        let id = Uuid::new_v4();
        let err = ViewError::UnknownTask(id);
        assert!(err.to_string().contains(&id.to_string()));

        let err = ViewError::InvalidUrl("not-a-url".to_string());
        assert!(err.to_string().contains("not-a-url"));
    }

    #[test]
    fn test_error_conversion() {
        let error: ViewError = "测试错误".into();
        assert!(matches!(error, ViewError::Unknown(_)));

        let error: ViewError = "测试错误".to_string().into();
        assert!(matches!(error, ViewError::Unknown(_)));
    }
}
