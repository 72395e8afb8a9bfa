//! 题目实体
//!
//! 题库解析产出的最小数据单元，选题引擎的输入

use serde::{Deserialize, Serialize};

/// 试卷分区（PART A / B / C）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Part {
    /// 2 分简答题
    A,
    /// 13 分大题（带 OR 选做）
    B,
    /// 14/15 分综合题
    C,
}

impl Part {
    /// 从字符解析分区（大小写均可）
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Part::A),
            'B' => Some(Part::B),
            'C' => Some(Part::C),
            _ => None,
        }
    }

    /// 获取分区字母
    pub fn as_str(self) -> &'static str {
        match self {
            Part::A => "A",
            Part::B => "B",
            Part::C => "C",
        }
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 单个题目
///
/// 由解析器按题块构造一次；选题引擎只读引用题库，
/// 选中后克隆进输出结构，原始题库不会被修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 所属教学单元（1..=5）
    pub unit: u8,
    /// 来源分区
    pub part: Part,
    /// 题干（多行来源已用单空格合并为一行）
    pub text: String,
    /// Course Outcome 标签，形如 "CO3"
    pub co: String,
    /// Bloom 认知层级标签，形如 "K2"
    pub bloom: String,
}

impl Question {
    /// 创建新题目
    pub fn new(
        unit: u8,
        part: Part,
        text: impl Into<String>,
        co: impl Into<String>,
        bloom: impl Into<String>,
    ) -> Self {
        Self {
            unit,
            part,
            text: text.into(),
            co: co.into(),
            bloom: bloom.into(),
        }
    }

    /// 判断两题是否为"同一道题"
    ///
    /// 只比较 unit / part / text，刻意忽略 co 和 bloom。
    /// 去重逻辑一律走这个方法，不要用派生的全字段 `==`
    pub fn same_question(&self, other: &Question) -> bool {
        self.unit == other.unit && self.part == other.part && self.text == other.text
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[Unit {} PART {}] {} ({} {})",
            self.unit, self.part, self.text, self.co, self.bloom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_question_ignores_co_bloom() {
        let a = Question::new(1, Part::A, "What is a stack?", "CO1", "K1");
        let b = Question::new(1, Part::A, "What is a stack?", "CO3", "K4");
        assert!(a.same_question(&b));
        // 派生的全字段相等则区分 co/bloom
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_question_checks_unit_and_part() {
        let a = Question::new(1, Part::A, "Define queue.", "CO1", "K1");
        let b = Question::new(2, Part::A, "Define queue.", "CO1", "K1");
        let c = Question::new(1, Part::B, "Define queue.", "CO1", "K1");
        assert!(!a.same_question(&b));
        assert!(!a.same_question(&c));
    }

    #[test]
    fn test_part_from_char() {
        assert_eq!(Part::from_char('a'), Some(Part::A));
        assert_eq!(Part::from_char('C'), Some(Part::C));
        assert_eq!(Part::from_char('D'), None);
    }
}
