//! 错误类型定义

use crate::types::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("图数据校验失败: {0}")]
    Validation(String),

    #[error("依赖不存在: {0}")]
    UnknownDependency(String),

    #[error("节点索引越界: {index} (节点数 {len})")]
    IndexOutOfRange { index: NodeId, len: usize },

    #[error("节点不存在: {0}")]
    NodeNotFound(String),

    #[error("图中存在环, {unresolved} 个节点无法排序")]
    CycleDetected { unresolved: usize },

    #[error("节点 {from} 到 {to} 不可达")]
    Unreachable { from: NodeId, to: NodeId },

    #[error("解析错误: {0}")]
    Parse(String),
}

impl Error {
    /// 检查索引是否落在 `[0, len)` 内
    pub(crate) fn check_index(index: NodeId, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, len })
        }
    }
}
