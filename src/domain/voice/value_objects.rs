//! Voice Context - Value Objects

use serde::Serialize;

/// 声音性别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 音色条目 - (locale, gender, 引擎音色映射)
///
/// 不变量:
/// - 所有字段在编译期确定，不可修改
/// - mapping 原样嵌入到 SSML 的 `name` 属性中
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoiceEntry {
    locale: &'static str,
    gender: Gender,
    mapping: &'static str,
}

impl VoiceEntry {
    pub const fn new(locale: &'static str, gender: Gender, mapping: &'static str) -> Self {
        Self {
            locale,
            gender,
            mapping,
        }
    }

    pub fn locale(&self) -> &'static str {
        self.locale
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn mapping(&self) -> &'static str {
        self.mapping
    }

    /// 完整的服务端音色名
    pub fn full_name(&self) -> String {
        format!("Microsoft Server Speech Text to Speech Voice {}", self.mapping)
    }
}

impl std::fmt::Display for VoiceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.locale, self.gender, self.mapping)
    }
}
