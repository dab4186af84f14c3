//! 节点名称表
//!
//! 名称是外部元数据，顺序即节点索引，算法本身不依赖名称

use crate::error::{Error, Result};
use crate::types::NodeId;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// 有序且唯一的节点名称表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeNames {
    names: IndexSet<String>,
}

impl NodeNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从名称序列构造，名称不能为空也不能重复
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for name in names {
            table.push(name)?;
        }
        Ok(table)
    }

    /// 追加名称，返回其索引
    pub fn push(&mut self, name: impl Into<String>) -> Result<NodeId> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::Validation("节点名称不能为空".to_string()));
        }
        if self.names.contains(&name) {
            return Err(Error::Validation(format!("节点名称重复: {}", name)));
        }
        let (index, _) = self.names.insert_full(name);
        Ok(index)
    }

    /// 移除名称，之后的索引依次减一
    pub fn remove(&mut self, index: NodeId) -> Result<String> {
        Error::check_index(index, self.len())?;
        self.names
            .shift_remove_index(index)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// 按索引取名称
    pub fn name(&self, index: NodeId) -> Option<&str> {
        self.names.get_index(index).map(|s| s.as_str())
    }

    /// 按名称取索引
    pub fn index_of(&self, name: &str) -> Option<NodeId> {
        self.names.get_index_of(name)
    }

    /// 显示标签：有名称用名称，否则用索引
    pub fn label(&self, index: NodeId) -> String {
        self.name(index)
            .map(str::to_string)
            .unwrap_or_else(|| index.to_string())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }
}
