//! Course Outcome 列表提取
//!
//! 独立于题目切分的第二条扫描路径：收集 `CO<n>:` 声明及其续行，
//! 扫到 Unit / PART 区段即整体终止

use regex::Regex;

/// Course Outcome 提取器
pub struct OutcomeParser {
    co_re: Regex,
}

impl OutcomeParser {
    /// 创建提取器
    pub fn new() -> Self {
        Self {
            co_re: Regex::new(r"^CO[1-5]:").expect("合法正则"),
        }
    }

    /// 提取 CO 声明列表
    ///
    /// 每条声明从 `CO<n>:` 行开始，后续非空行拼为续行，
    /// 直到下一条声明或 Unit / PART 区段开头
    pub fn parse(&self, text: &str) -> Vec<String> {
        let mut outcomes = Vec::new();
        let mut current: Option<String> = None;

        for raw_line in text.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            if self.co_re.is_match(line) {
                if let Some(done) = current.take() {
                    outcomes.push(done);
                }
                current = Some(line.to_string());
                continue;
            }

            if current.is_some() {
                let upper = line.to_uppercase();
                if upper.starts_with("UNIT") || upper.contains("PART") {
                    if let Some(done) = current.take() {
                        outcomes.push(done);
                    }
                    break;
                }
                if let Some(acc) = current.as_mut() {
                    acc.push(' ');
                    acc.push_str(line);
                }
            }
        }

        if let Some(done) = current.take() {
            outcomes.push(done);
        }

        outcomes
    }
}

impl Default for OutcomeParser {
    fn default() -> Self {
        Self::new()
    }
}
