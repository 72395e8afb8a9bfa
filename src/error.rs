//! 错误类型
//!
//! 解析层不产错（坏题块直接丢弃），所以这里只有选题引擎的配额错误。
//! 一次选题调用要么给出完整试卷，要么在产出任何内容之前带着
//! 具体缺口信息失败；批量场景下单个版本失败不影响兄弟版本

use thiserror::Error;

/// 选题配额错误
///
/// 统一为"候选不足"一类，带上缺口定位参数；没有重试语义，
/// 调用方只能接受失败或补充题库
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// 某个 Unit 的某个分区候选题不足
    #[error("Unit {unit} 的 PART {part} 候选题不足 (需要 {required} 题, 仅有 {available} 题)")]
    NotEnoughInUnit {
        unit: u8,
        part: String,
        required: usize,
        available: usize,
    },

    /// 跨 Unit 汇总后的候选池仍然不足
    #[error("PART {part} 候选池不足 (需要 {required} 题, 仅有 {available} 题)")]
    NotEnoughInPool {
        part: String,
        required: usize,
        available: usize,
    },

    /// 拥有 PART B 题目的 Unit 个数不足（CAT-2 专用前置校验）
    #[error("拥有 PART B 题目的 Unit 不足 (需要 {required} 个, 仅有 {available} 个)")]
    NotEnoughUnits { required: usize, available: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_unit_and_counts() {
        let err = SelectionError::NotEnoughInUnit {
            unit: 1,
            part: "A".to_string(),
            required: 2,
            available: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("Unit 1"));
        assert!(msg.contains('2'));
        assert!(msg.contains('1'));
    }
}
