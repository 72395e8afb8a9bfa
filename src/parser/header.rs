//! 试卷头提取
//!
//! 按触发词从文档头部尽力提取考试类型、课程代码/名称、规程、院系、学期。
//! 触发词互不排斥，同一行可以同时填多个字段；缺失的触发词让字段保持空

use crate::models::PaperHeader;
use regex::Regex;

/// 试卷头解析器
pub struct HeaderParser {
    /// 课程代码（4 位数字 + 3 字母 + 3 数字 + T，或短格式 3 字母 + 3 数字 + T）
    subject_re: Regex,
    /// CO 声明行，课程名称累积到此为止
    co_line_re: Regex,
}

impl HeaderParser {
    /// 创建解析器
    pub fn new() -> Self {
        Self {
            subject_re: Regex::new(r"(\d{4}[A-Z]{3}\d{3}T|[A-Z]{3}\d{3}T)\s*[-–]?\s*(.+)")
                .expect("合法正则"),
            co_line_re: Regex::new(r"^CO[1-5]:").expect("合法正则"),
        }
    }

    /// 顺序扫描全文提取头字段
    ///
    /// 命中课程代码后，后续非空行会被拼入课程名称，
    /// 直到遇到 CO 声明、含 "Unit" 或含 "PART" 的行为止（边界行不消费）
    pub fn parse(&self, text: &str) -> PaperHeader {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let mut header = PaperHeader::default();

        for (i, &line) in lines.iter().enumerate() {
            if line.to_uppercase().contains("CONTINUOUS ASSESSMENT TEST") {
                header.exam_type = Some(line.to_string());
            }
            if line.contains("Regulations R") {
                header.regulation = Some(line.to_string());
            }
            if line.contains("Department") {
                header.department = Some(line.to_string());
            }
            if line.contains("Year") && line.contains("Semester") {
                header.semester = Some(line.to_string());
            }

            if let Some(caps) = self.subject_re.captures(line) {
                header.subject_code = Some(caps[1].to_string());
                let mut name = caps[2].trim().to_string();
                let mut j = i + 1;
                while j < lines.len() {
                    let next = lines[j];
                    if next.is_empty() {
                        j += 1;
                        continue;
                    }
                    if self.co_line_re.is_match(next)
                        || next.contains("Unit")
                        || next.to_uppercase().contains("PART")
                    {
                        break;
                    }
                    name.push(' ');
                    name.push_str(next);
                    j += 1;
                }
                header.subject_name = Some(name.trim().to_string());
            }
        }

        header
    }
}

impl Default for HeaderParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
CONTINUOUS ASSESSMENT TEST – I
Regulations R2021
Department of Information Technology
II Year – III Semester
2311ITC301T – Data Structures
and Algorithms
CO1: Understand linear data structures
Unit – I
PART – A
";

    #[test]
    fn test_full_header() {
        let header = HeaderParser::new().parse(SAMPLE);
        assert_eq!(
            header.exam_type.as_deref(),
            Some("CONTINUOUS ASSESSMENT TEST – I")
        );
        assert_eq!(header.regulation.as_deref(), Some("Regulations R2021"));
        assert_eq!(
            header.department.as_deref(),
            Some("Department of Information Technology")
        );
        assert_eq!(header.semester.as_deref(), Some("II Year – III Semester"));
        assert_eq!(header.subject_code.as_deref(), Some("2311ITC301T"));
        // 课程名称跨行拼接，CO 行不消费
        assert_eq!(
            header.subject_name.as_deref(),
            Some("Data Structures and Algorithms")
        );
    }

    #[test]
    fn test_short_subject_code() {
        let header = HeaderParser::new().parse("ITC301T – Operating Systems\nUnit – I\n");
        assert_eq!(header.subject_code.as_deref(), Some("ITC301T"));
        assert_eq!(header.subject_name.as_deref(), Some("Operating Systems"));
    }

    #[test]
    fn test_missing_triggers_leave_fields_unset() {
        let header = HeaderParser::new().parse("Some random first line\nAnother line\n");
        assert_eq!(header, PaperHeader::default());
    }
}
