use thiserror::Error;

pub const EMPTY_INPUT_MESSAGE: &str = "请输入主题关键词或爆款笔记内容。";
pub const CONNECTION_ERROR_MESSAGE: &str = "连接智能创作引擎时出错。";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,
}

/// The only failure callers ever see from a generation call. The underlying
/// cause goes to the log, not into this value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("{}", CONNECTION_ERROR_MESSAGE)]
    Connection,
}
