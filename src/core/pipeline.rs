//! 발음 전사 -> 자모 분해 -> 로마자 변환 파이프라인

use crate::core::decomposer::decompose;
use crate::core::romanizer::Romanizer;
use crate::transcriber::Phoneticizer;

/// 파이프라인 단계별 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    /// 발음 전사 결과
    pub phonetic: String,
    /// 자모 분해 결과
    pub decomposed: String,
    /// 로마자 변환 결과
    pub romanized: String,
}

/// 전사기와 로마자 변환기를 묶은 파이프라인
#[derive(Debug, Clone)]
pub struct Pipeline<P> {
    transcriber: P,
    romanizer: Romanizer,
}

impl<P: Phoneticizer> Pipeline<P> {
    pub fn new(transcriber: P) -> Self {
        Self {
            transcriber,
            romanizer: Romanizer::default(),
        }
    }

    pub fn with_romanizer(mut self, romanizer: Romanizer) -> Self {
        self.romanizer = romanizer;
        self
    }

    /// 문장 하나를 처리
    ///
    /// 전사기 에러는 감싸지 않고 그대로 반환합니다.
    /// 분해와 로마자 변환 단계에는 실패가 없습니다.
    pub fn process(&self, sentence: &str) -> Result<PipelineOutput, P::Error> {
        let phonetic = self.transcriber.phoneticize(sentence)?;
        let decomposed = decompose(&phonetic);
        let romanized = self.romanizer.romanize(&decomposed);

        Ok(PipelineOutput {
            phonetic,
            decomposed,
            romanized,
        })
    }
}

/// 주어진 전사기와 기본 로마자 변환기로 문장 하나를 처리
pub fn process<P: Phoneticizer>(
    transcriber: &P,
    sentence: &str,
) -> Result<PipelineOutput, P::Error> {
    Pipeline::new(transcriber).process(sentence)
}
