//! 消息处理指标模块
//!
//! `metrics` 门面计数器，未安装 recorder 时为空操作。

use metrics::{counter, histogram};
use serde::Serialize;

/// 记录载入的消息数
pub fn record_messages_loaded(count: usize) {
    counter!("ipc_parser_messages_loaded_total").increment(count as u64);
}

/// 记录一次校验结果
pub fn record_message_validated(valid: bool) {
    let outcome = if valid { "valid" } else { "invalid" };
    counter!(
        "ipc_parser_messages_validated_total",
        "outcome" => outcome
    )
    .increment(1);
}

/// 记录一次分发
pub fn record_message_dispatched(ipc_cmd: &str, success: bool, payload_size: i64) {
    let status = if success { "success" } else { "failure" };
    counter!(
        "ipc_parser_messages_dispatched_total",
        "ipc_cmd" => ipc_cmd.to_string(),
        "status" => status
    )
    .increment(1);
    histogram!("ipc_parser_payload_size_bytes").record(payload_size as f64);
}

/// 载荷大小统计 (仅统计有效消息)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PayloadStats {
    count: u64,
    min: i64,
    max: i64,
}

impl PayloadStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加新值
    pub fn push(&mut self, size: i64) {
        if self.count == 0 {
            self.min = size;
            self.max = size;
        } else {
            self.min = self.min.min(size);
            self.max = self.max.max(size);
        }
        self.count += 1;
    }

    /// 最小值 (无样本时为 None)
    pub fn min(&self) -> Option<i64> {
        (self.count > 0).then_some(self.min)
    }

    /// 最大值 (无样本时为 None)
    pub fn max(&self) -> Option<i64> {
        (self.count > 0).then_some(self.max)
    }
}
