// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use tracing::{debug, warn};

/// 将原始响应字节解码为UTF-8字符串
///
/// 优先使用 BOM，其次是 `Content-Type` 中声明的字符集，
/// 最后才使用 chardetng 进行检测。无法识别的字符集标签会被忽略。
/// 非法字节替换为 U+FFFD，解码本身不会失败。
pub fn decode_html(input: &[u8], content_type: Option<&str>) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(input) {
        debug!("BOM detected: {}", encoding.name());
        return decode_lossy(encoding, &input[bom_len..]);
    }

    if let Some(label) = content_type.and_then(charset_from_content_type) {
        match Encoding::for_label(label.as_bytes()) {
            Some(encoding) => {
                debug!("Declared charset: {}", encoding.name());
                return decode_lossy(encoding, input);
            }
            None => warn!("Unknown charset label '{}', detecting instead", label),
        }
    }

    // Fast path for the common case
    if let Ok(utf8_str) = std::str::from_utf8(input) {
        return utf8_str.to_string();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(input, true);
    let encoding = detector.guess(None, true);
    debug!("Detected charset: {}", encoding.name());

    decode_lossy(encoding, input)
}

fn decode_lossy(encoding: &'static Encoding, input: &[u8]) -> String {
    let (decoded, _, had_errors) = encoding.decode(input);
    if had_errors {
        warn!("Malformed {} input, replaced invalid bytes", encoding.name());
    }
    decoded.into_owned()
}

fn charset_from_content_type(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"'))
        } else {
            None
        }
    })
}
