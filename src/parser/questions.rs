//! 题目切分解析器
//!
//! 对文档行做单趟从左到右扫描，维护当前 Unit / PART 状态和题干累积缓冲，
//! 把题库文本还原成结构化题目序列。
//!
//! 解析失败语义：宁可漏题，不可出错题 —— 缺少 CO/K 标签、缺少 Unit 或
//! PART 上下文的题块一律静默丢弃，解析器本身永不报错。

use crate::models::{Part, Question};
use regex::Regex;

/// 题目切分解析器
///
/// 正则在构造时编译一次，之后可重复用于多份文档
pub struct QuestionParser {
    /// Unit 标记行，罗马数字 I-V
    unit_re: Regex,
    /// PART 标记行，A-C
    part_re: Regex,
    /// 独立的 CO 声明行（噪声）
    co_line_re: Regex,
    /// 表头噪声行（Q.NO / QUESTIONS / CO'S / BLOOM / LEVEL）
    table_re: Regex,
    /// 题目起始行（1-2 位序号加点）
    start_re: Regex,
    /// 题干尾部的 CO/Bloom 标签
    tag_re: Regex,
}

impl QuestionParser {
    /// 创建解析器并编译全部正则
    pub fn new() -> Self {
        Self {
            unit_re: Regex::new(r"(?i)^Unit\s*[–-]?\s*(I{1,5}|IV|V)\b").expect("合法正则"),
            part_re: Regex::new(r"(?i)^PART\s*[–-]?\s*([A-C])\b").expect("合法正则"),
            co_line_re: Regex::new(r"^CO\d+:").expect("合法正则"),
            table_re: Regex::new(r"(?i)^(Q\.?\s*NO|QUESTIONS|CO['’]S|BLOOM|LEVEL)")
                .expect("合法正则"),
            start_re: Regex::new(r"^(\d{1,2})\.\s*(.*)$").expect("合法正则"),
            tag_re: Regex::new(r"(?i)CO(\d+)\s+K(\d+)(?:\s*Q\.)?").expect("合法正则"),
        }
    }

    /// 解析整段文本（按换行拆分）
    pub fn parse(&self, text: &str) -> Vec<Question> {
        self.parse_lines(text.lines())
    }

    /// 解析行序列
    ///
    /// 状态转移：
    /// - Unit 标记行：冲洗在途题目，更新当前 Unit，行本身被消费
    /// - PART 标记行：冲洗在途题目，更新当前 PART，行本身被消费
    /// - 噪声行（空行 / 裸 CO 声明 / 表头词）：无条件丢弃
    /// - 序号起始行：用旧状态冲洗上一题，以行余下部分开启新缓冲
    /// - 其他非空行：累积进当前题干
    /// - 输入结束：冲洗残留缓冲
    pub fn parse_lines<I, S>(&self, lines: I) -> Vec<Question>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut questions = Vec::new();
        let mut current_unit: Option<u8> = None;
        let mut current_part: Option<Part> = None;
        let mut collecting = false;
        let mut buffer: Vec<String> = Vec::new();

        for raw_line in lines {
            let line = raw_line.as_ref().trim();

            // Unit 标记
            if let Some(caps) = self.unit_re.captures(line) {
                if collecting {
                    questions.extend(self.flush(current_unit, current_part, &buffer));
                    collecting = false;
                    buffer.clear();
                }
                current_unit = roman_to_unit(&caps[1].to_uppercase());
                continue;
            }

            // PART 标记
            if let Some(caps) = self.part_re.captures(line) {
                if collecting {
                    questions.extend(self.flush(current_unit, current_part, &buffer));
                    collecting = false;
                    buffer.clear();
                }
                current_part = caps[1].chars().next().and_then(Part::from_char);
                continue;
            }

            // 噪声行
            if line.is_empty() || self.co_line_re.is_match(line) || self.table_re.is_match(line) {
                continue;
            }

            // 题目起始行
            if let Some(caps) = self.start_re.captures(line) {
                if collecting {
                    questions.extend(self.flush(current_unit, current_part, &buffer));
                }
                buffer.clear();
                let remaining = caps[2].trim().to_string();
                if !remaining.is_empty() {
                    buffer.push(remaining);
                }
                collecting = true;
                continue;
            }

            // 累积题干
            if collecting {
                buffer.push(line.to_string());
            }
        }

        // 输入结束，冲洗残留
        if collecting {
            questions.extend(self.flush(current_unit, current_part, &buffer));
        }

        questions
    }

    /// 冲洗缓冲为一道题
    ///
    /// 缓冲行用单空格合并；必须带有 `CO<n> K<n>` 标签，否则整题丢弃；
    /// 标签及其之后的内容从题干中截掉
    fn flush(&self, unit: Option<u8>, part: Option<Part>, buffer: &[String]) -> Option<Question> {
        let (unit, part) = match (unit, part) {
            (Some(u), Some(p)) => (u, p),
            _ => return None,
        };
        if buffer.is_empty() {
            return None;
        }

        let joined = buffer.join(" ").trim().to_string();
        let caps = self.tag_re.captures(&joined)?;
        let tag_start = caps.get(0)?.start();

        let co = format!("CO{}", &caps[1]);
        let bloom = format!("K{}", &caps[2]);
        let text = joined[..tag_start].trim().to_string();
        if text.is_empty() {
            return None;
        }

        Some(Question::new(unit, part, text, co, bloom))
    }
}

impl Default for QuestionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// 罗马数字映射到单元号 1-5
fn roman_to_unit(roman: &str) -> Option<u8> {
    match roman {
        "I" => Some(1),
        "II" => Some(2),
        "III" => Some(3),
        "IV" => Some(4),
        "V" => Some(5),
        _ => None,
    }
}
