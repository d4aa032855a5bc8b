//! 한글 음절 분해 및 로마자 변환 핵심 로직

pub mod decomposer;
pub mod pipeline;
pub mod romanizer;
pub mod unicode;
