//! 静态音色表
//!
//! 命令行的 `lang_index` 按位置索引此表，顺序不可调整。

use super::{Gender, VoiceEntry, VoiceError};

use super::Gender::{Female, Male};

/// 支持的音色（按索引排列）
pub static VOICE_CATALOG: &[VoiceEntry] = &[
    VoiceEntry::new("ar-EG", Female, "(ar-EG, Hoda)"),
    VoiceEntry::new("de-DE", Female, "(de-DE, Hedda)"),
    VoiceEntry::new("de-DE", Male, "(de-DE, Stefan, Apollo)"),
    VoiceEntry::new("en-AU", Female, "(en-AU, Catherine)"),
    VoiceEntry::new("en-CA", Female, "(en-CA, Linda)"),
    VoiceEntry::new("en-GB", Female, "(en-GB, Susan, Apollo)"),
    VoiceEntry::new("en-GB", Male, "(en-GB, George, Apollo)"),
    VoiceEntry::new("en-IN", Male, "(en-IN, Ravi, Apollo)"),
    VoiceEntry::new("en-US", Female, "(en-US, ZiraRUS)"),
    VoiceEntry::new("en-US", Male, "(en-US, BenjaminRUS)"),
    VoiceEntry::new("es-ES", Female, "(es-ES, Laura, Apollo)"),
    VoiceEntry::new("es-ES", Male, "(es-ES, Pablo, Apollo)"),
    VoiceEntry::new("es-MX", Male, "(es-MX, Raul, Apollo)"),
    VoiceEntry::new("fr-CA", Female, "(fr-CA, Caroline)"),
    VoiceEntry::new("fr-FR", Female, "(fr-FR, Julie, Apollo)"),
    VoiceEntry::new("fr-FR", Male, "(fr-FR, Paul, Apollo)"),
    VoiceEntry::new("it-IT", Male, "(it-IT, Cosimo, Apollo)"),
    VoiceEntry::new("ja-JP", Female, "(ja-JP, Ayumi, Apollo)"),
    VoiceEntry::new("ja-JP", Male, "(ja-JP, Ichiro, Apollo)"),
    VoiceEntry::new("pt-BR", Male, "(pt-BR, Daniel, Apollo)"),
    // 服务端映射沿用 pt-BR 音色，保持与已部署行为一致
    VoiceEntry::new("ru-RU", Female, "(pt-BR, Daniel, Apollo)"),
    VoiceEntry::new("ru-RU", Male, "(ru-RU, Pavel, Apollo)"),
    VoiceEntry::new("zh-CN", Female, "(zh-CN, HuihuiRUS)"),
    VoiceEntry::new("zh-CN", Female, "(zh-CN, Yaoyao, Apollo)"),
    VoiceEntry::new("zh-CN", Male, "(zh-CN, Kangkang, Apollo)"),
    VoiceEntry::new("zh-HK", Female, "(zh-HK, Tracy, Apollo)"),
    VoiceEntry::new("zh-HK", Male, "(zh-HK, Danny, Apollo)"),
    VoiceEntry::new("zh-TW", Female, "(zh-TW, Yating, Apollo)"),
    VoiceEntry::new("zh-TW", Male, "(zh-TW, Zhiwei, Apollo)"),
];

/// 按索引查找音色
pub fn lookup(index: usize) -> Result<&'static VoiceEntry, VoiceError> {
    VOICE_CATALOG
        .get(index)
        .ok_or(VoiceError::IndexOutOfRange {
            index,
            supported: VOICE_CATALOG.len(),
        })
}
