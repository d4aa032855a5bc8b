//! 자모 -> 로마자 치환
//!
//! 분해된 자모 문자열을 고정 테이블로 로마자 근사 표기로 바꿉니다.
//! 테이블에 없는 문자는 그대로 통과합니다.

use std::collections::HashMap;
use std::sync::LazyLock;

/// 단일 자모 로마자 테이블
///
/// `decompose`가 낼 수 있는 모든 자모(복합 종성 ㄳ, ㄺ 등 포함)를 키로 가집니다.
#[rustfmt::skip]
pub const JAMO_ROMAN_TABLE: [(char, &str); 51] = [
    // 자음
    ('ㄱ', "g"), ('ㄲ', "kk"), ('ㄴ', "n"), ('ㄷ', "d"), ('ㄸ', "tt"),
    ('ㄹ', "r"), ('ㅁ', "m"), ('ㅂ', "b"), ('ㅃ', "pp"), ('ㅅ', "s"),
    ('ㅆ', "ss"), ('ㅇ', ""), ('ㅈ', "j"), ('ㅉ', "jj"), ('ㅊ', "ch"),
    ('ㅋ', "k"), ('ㅌ', "t"), ('ㅍ', "p"), ('ㅎ', "h"),
    // 모음
    ('ㅏ', "a"), ('ㅐ', "ae"), ('ㅑ', "ya"), ('ㅒ', "yae"), ('ㅓ', "eo"),
    ('ㅔ', "e"), ('ㅕ', "yeo"), ('ㅖ', "ye"), ('ㅗ', "o"), ('ㅘ', "wa"),
    ('ㅙ', "wae"), ('ㅚ', "oe"), ('ㅛ', "yo"), ('ㅜ', "u"), ('ㅝ', "wo"),
    ('ㅞ', "we"), ('ㅟ', "wi"), ('ㅠ', "yu"), ('ㅡ', "eu"), ('ㅢ', "ui"),
    ('ㅣ', "i"),
    // 복합 종성
    ('ㄳ', "ks"), ('ㄵ', "nj"), ('ㄶ', "nh"), ('ㄺ', "lg"), ('ㄻ', "lm"),
    ('ㄼ', "lb"), ('ㄽ', "ls"), ('ㄾ', "lt"), ('ㄿ', "lp"), ('ㅀ', "lh"),
    ('ㅄ', "bs"),
];

/// 두 자모 조합 키 테이블 (Lookahead 정책에서만 사용)
#[rustfmt::skip]
pub const COMPOUND_ROMAN_TABLE: [((char, char), &str); 13] = [
    (('ㄱ', 'ㄱ'), "k"),  (('ㄱ', 'ㅅ'), "ks"), (('ㄴ', 'ㅈ'), "nj"),
    (('ㄴ', 'ㅎ'), "nh"), (('ㄹ', 'ㄱ'), "lg"), (('ㄹ', 'ㅁ'), "lm"),
    (('ㄹ', 'ㅂ'), "lb"), (('ㄹ', 'ㅅ'), "ls"), (('ㄹ', 'ㅌ'), "lt"),
    (('ㄹ', 'ㅍ'), "lp"), (('ㄹ', 'ㅎ'), "lh"), (('ㅂ', 'ㅅ'), "bs"),
    (('ㅇ', 'ㅇ'), "ng"),
];

static JAMO_ROMAN: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| JAMO_ROMAN_TABLE.iter().copied().collect());

static COMPOUND_ROMAN: LazyLock<HashMap<(char, char), &'static str>> =
    LazyLock::new(|| COMPOUND_ROMAN_TABLE.iter().copied().collect());

/// 두 자모 조합 키 처리 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompoundPolicy {
    /// 한 글자씩 단일 자모 테이블만 조회
    #[default]
    SingleSymbol,
    /// 매 위치에서 두 자모 조합 키를 먼저 시도한 뒤 단일 자모로 폴백
    Lookahead,
}

/// 자모 하나의 로마자 표기
///
/// ㅇ은 위치와 관계없이 빈 문자열, 테이블에 없는 문자는 None
pub fn romanize_jamo(c: char) -> Option<&'static str> {
    JAMO_ROMAN.get(&c).copied()
}

/// 로마자 변환기
#[derive(Debug, Clone, Copy, Default)]
pub struct Romanizer {
    policy: CompoundPolicy,
}

impl Romanizer {
    pub fn new(policy: CompoundPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CompoundPolicy {
        self.policy
    }

    /// 자모 문자열을 로마자로 변환
    /// 테이블에 없는 문자는 그대로 유지
    pub fn romanize(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut result = String::with_capacity(text.len());
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if self.policy == CompoundPolicy::Lookahead {
                let next = chars.get(i + 1).copied();
                if let Some(roman) = next.and_then(|n| COMPOUND_ROMAN.get(&(c, n))) {
                    result.push_str(roman);
                    i += 2;
                    continue;
                }
            }

            match romanize_jamo(c) {
                Some(roman) => result.push_str(roman),
                None => result.push(c),
            }
            i += 1;
        }

        result
    }
}

/// 기본 정책(단일 자모)으로 로마자 변환
pub fn romanize(text: &str) -> String {
    Romanizer::default().romanize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_syllables() {
        assert_eq!(romanize("ㄱㅏ"), "ga");
        assert_eq!(romanize("ㄴㅏ"), "na");
        assert_eq!(romanize("ㅎㅏㄴㄱㅡㄹ"), "hangeur");
    }

    #[test]
    fn test_null_initial() {
        assert_eq!(romanize("ㅇㅏ"), "a");
        assert_eq!(romanize("ㅇㅢ"), "ui");
    }

    #[test]
    fn test_ieung_is_always_silent() {
        // 한 글자씩 조회하므로 종성 ㅇ도 빈 문자열
        assert_eq!(romanize("ㅇ"), "");
        assert_eq!(romanize("ㅇㅏㄴㄴㅕㅇ"), "annyeo");
        assert_eq!(romanize("ㄱㅏㅇ ㅅㅏㄴ"), "ga san");
        assert_eq!(romanize("ㅇㅏㅇㅇㅏ"), "aa");
        assert_eq!(romanize_jamo('ㅇ'), Some(""));
        assert_eq!(romanize_jamo('a'), None);
    }

    #[test]
    fn test_double_consonants() {
        assert_eq!(romanize("ㄲㅏ"), "kka");
        assert_eq!(romanize("ㅆㅏ"), "ssa");
        assert_eq!(romanize("ㅉㅏ"), "jja");
    }

    #[test]
    fn test_complex_jongseong_single_key() {
        assert_eq!(romanize("ㅇㅣㄺ"), "ilg");
        assert_eq!(romanize("ㅇㅓㅄ"), "eobs");
        assert_eq!(romanize("ㅅㅏㄻ"), "salm");
    }

    #[test]
    fn test_unmapped_passthrough() {
        assert_eq!(romanize("!"), "!");
        assert_eq!(romanize("abc"), "abc");
        assert_eq!(romanize(""), "");
        assert_eq!(romanize("ㄱㅏ, 1"), "ga, 1");
        assert_eq!(romanize("漢"), "漢");
    }

    #[test]
    fn test_single_symbol_ignores_compound_keys() {
        assert_eq!(romanize("ㄹㄱ"), "rg");
        assert_eq!(romanize("ㄱㅅ"), "gs");
    }

    #[test]
    fn test_lookahead_prefers_compound_keys() {
        let romanizer = Romanizer::new(CompoundPolicy::Lookahead);
        assert_eq!(romanizer.romanize("ㄹㄱ"), "lg");
        assert_eq!(romanizer.romanize("ㅂㅅ"), "bs");
        assert_eq!(romanizer.romanize("ㄱㅏㄱㄱㅏ"), "gaka");
        // 조합 키가 없으면 단일 자모로 폴백
        assert_eq!(romanizer.romanize("ㄱㅏ"), "ga");
        assert_eq!(romanizer.romanize("ㅇㅏㄴㄴㅕㅇ"), "annyeo");
        // ㅇㅇ 조합 키만 "ng"
        assert_eq!(romanizer.romanize("ㅇㅏㅇㅇㅏ"), "anga");
        assert_eq!(romanizer.romanize("x!"), "x!");
    }

    #[test]
    fn test_table_keys_unique() {
        assert_eq!(JAMO_ROMAN.len(), JAMO_ROMAN_TABLE.len());
        assert_eq!(COMPOUND_ROMAN.len(), COMPOUND_ROMAN_TABLE.len());
    }

    #[test]
    fn test_policy_default() {
        assert_eq!(Romanizer::default().policy(), CompoundPolicy::SingleSymbol);
    }
}
