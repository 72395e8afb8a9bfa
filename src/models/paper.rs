//! 组卷结果结构
//!
//! 选题引擎的唯一输出，交给外部渲染层消费

use crate::models::question::Question;
use serde::{Deserialize, Serialize};

/// 考试类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamType {
    /// CAT-1（覆盖 Unit 1-3）
    Cat1,
    /// CAT-2（覆盖 Unit 3-5）
    Cat2,
    /// 期末考试（覆盖全部 5 个 Unit）
    EndSem,
}

impl ExamType {
    /// 从字符串解析考试类型
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cat1" | "cat-1" => Some(ExamType::Cat1),
            "cat2" | "cat-2" => Some(ExamType::Cat2),
            "endsem" | "end-sem" | "end_semester" => Some(ExamType::EndSem),
            _ => None,
        }
    }

    /// 获取标准名称（小写，用于文件名和配置）
    pub fn name(self) -> &'static str {
        match self {
            ExamType::Cat1 => "cat1",
            ExamType::Cat2 => "cat2",
            ExamType::EndSem => "endsem",
        }
    }

    /// 获取卷面标题
    pub fn title(self) -> &'static str {
        match self {
            ExamType::Cat1 => "CONTINUOUS ASSESSMENT TEST – I",
            ExamType::Cat2 => "CONTINUOUS ASSESSMENT TEST – II",
            ExamType::EndSem => "END SEMESTER EXAMINATION",
        }
    }

    /// 该考试类型需要几份题库文档
    pub fn required_banks(self) -> usize {
        match self {
            ExamType::Cat1 | ExamType::Cat2 => 1,
            ExamType::EndSem => 2,
        }
    }
}

impl std::fmt::Display for ExamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name().to_uppercase())
    }
}

/// PART B 的一组 OR 选做对
///
/// 构造时把 "(a) " / "(b) " 前缀写进各自克隆件的题干；
/// 题库里的原始题目不受影响
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrPair {
    /// 主选题，题干以 "(a) " 开头
    pub main: Question,
    /// 备选题，题干以 "(b) " 开头
    #[serde(rename = "or")]
    pub alternative: Question,
}

impl OrPair {
    /// 用两道已选出的题构造 OR 对，并打上前缀
    pub fn new(mut main: Question, mut alternative: Question) -> Self {
        main.text = format!("(a) {}", main.text.trim());
        alternative.text = format!("(b) {}", alternative.text.trim());
        Self { main, alternative }
    }
}

/// 组卷结果
///
/// 三个分区有序；PART C 长度为 1 或 2（第二题为 OR 备选）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedPaper {
    #[serde(rename = "PART_A")]
    pub part_a: Vec<Question>,
    #[serde(rename = "PART_B")]
    pub part_b: Vec<OrPair>,
    #[serde(rename = "PART_C")]
    pub part_c: Vec<Question>,
}
