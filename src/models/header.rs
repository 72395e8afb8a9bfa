//! 试卷头信息
//!
//! 从题库文档头部按触发词尽力提取，字段全部可缺省

use serde::{Deserialize, Serialize};

/// 试卷头信息
///
/// 六个字段互相独立，任何一个触发词缺失只会让对应字段保持 `None`，
/// 不构成解析错误
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperHeader {
    /// 考试类型行（如 "CONTINUOUS ASSESSMENT TEST – I"）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_type: Option<String>,
    /// 课程代码（如 "2311ITC301T"）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_code: Option<String>,
    /// 课程名称（可能跨多行拼接）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    /// 教学规程行（含 "Regulations R"）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulation: Option<String>,
    /// 院系行（含 "Department"）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// 学年/学期行（同时含 "Year" 和 "Semester"）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
}
