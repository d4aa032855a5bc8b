//! 완성형 한글 문자열 -> 자모 문자열 분해기

use crate::core::unicode::{decompose_syllable, CHOSEONG, JONGSEONG, JUNGSEONG};

/// 음절 하나를 분해한 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecomposedSyllable {
    pub lead: char,
    pub vowel: char,
    /// 종성 없음이면 None
    pub trail: Option<char>,
}

impl DecomposedSyllable {
    /// 초성, 중성, 종성 순으로 버퍼에 추가
    pub fn push_to(&self, out: &mut String) {
        out.push(self.lead);
        out.push(self.vowel);
        if let Some(trail) = self.trail {
            out.push(trail);
        }
    }
}

/// 완성형 한글 음절 하나를 자모로 분해
/// 한글 음절이 아니면 None
pub fn decompose_char(c: char) -> Option<DecomposedSyllable> {
    let (cho, jung, jong) = decompose_syllable(c)?;
    Some(DecomposedSyllable {
        lead: CHOSEONG[cho as usize],
        vowel: JUNGSEONG[jung as usize],
        trail: JONGSEONG[jong as usize],
    })
}

/// 문자열의 완성형 한글을 모두 자모로 분해
/// 한글 음절이 아닌 문자(공백, 숫자, 영문, 문장부호 등)는 그대로 유지
pub fn decompose(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 3);

    for c in text.chars() {
        match decompose_char(c) {
            Some(syllable) => syllable.push_to(&mut result),
            None => result.push(c),
        }
    }

    result
}
