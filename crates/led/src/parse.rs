//! 写路径的整数解析
//!
//! 按系统通用的整数字面量约定识别基数：`0x` 前缀为十六进制，
//! 前导 `0` 为八进制，否则为十进制。取最长合法前缀，
//! 尾随字节忽略。

/// 解析字节串的前导无符号整数字面量。
///
/// 返回 `(值, 已消费字节数)`；首字节就不构成数字时返回 None。
/// 溢出时值饱和到 `u64::MAX`（调用方随后会收紧到亮度上限）。
pub(crate) fn parse_uint(bytes: &[u8]) -> Option<(u64, usize)> {
    let (base, prefix) = if bytes.len() >= 3
        && bytes[0] == b'0'
        && (bytes[1] | 0x20) == b'x'
        && bytes[2].is_ascii_hexdigit()
    {
        (16u64, 2)
    } else if !bytes.is_empty() && bytes[0] == b'0' {
        (8u64, 1)
    } else {
        (10u64, 0)
    };

    let mut idx = prefix;
    let mut value: u64 = 0;
    while idx < bytes.len() {
        let digit = match digit_value(bytes[idx], base) {
            Some(d) => d,
            None => break,
        };
        value = value.saturating_mul(base).saturating_add(digit);
        idx += 1;
    }

    // 八进制的前导 0 本身就是一个合法的数字
    if idx == prefix && base != 8 {
        return None;
    }
    Some((value, idx))
}

fn digit_value(byte: u8, base: u64) -> Option<u64> {
    let value = match byte {
        b'0'..=b'9' => (byte - b'0') as u64,
        b'a'..=b'f' => (byte - b'a' + 10) as u64,
        b'A'..=b'F' => (byte - b'A' + 10) as u64,
        _ => return None,
    };
    (value < base).then_some(value)
}
