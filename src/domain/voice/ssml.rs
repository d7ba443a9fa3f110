//! SSML 渲染
//!
//! 固定模板：
//! `<speak version='1.0' xml:lang='en-us'><voice xml:lang='{LOCALE}' xml:gender='{GENDER}'
//!  name='Microsoft Server Speech Text to Speech Voice {MAPPING}'>{MSG}</voice></speak>`

use super::VoiceEntry;

/// 渲染合成请求体
///
/// `escape` 为 false 时消息原样嵌入，允许调用方直接传入 SSML 片段。
pub fn render_ssml(entry: &VoiceEntry, message: &str, escape: bool) -> String {
    let msg = if escape {
        escape_xml(message)
    } else {
        message.to_string()
    };

    format!(
        "<speak version='1.0' xml:lang='en-us'>\
         <voice xml:lang='{}' xml:gender='{}' name='{}'>\
         {}</voice></speak>",
        entry.locale(),
        entry.gender(),
        entry.full_name(),
        msg
    )
}

/// XML 特殊字符转义
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
