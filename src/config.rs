//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::romanizer::{CompoundPolicy, Romanizer};
use crate::transcriber::{CommandTranscriber, IdentityTranscriber, Transcriber};

/// 로마자 변환기 설정
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RomanizerConfig {
    /// 외부 발음 전사(G2P) 프로그램. 없으면 입력을 그대로 사용
    #[serde(default)]
    pub transcriber_program: Option<String>,
    /// 전사 프로그램 인자
    #[serde(default)]
    pub transcriber_args: Vec<String>,
    /// 두 자모 조합 키(ㄹㄱ -> lg 등)를 우선 적용할지 여부
    #[serde(default)]
    pub compound_lookahead: bool,
}

impl RomanizerConfig {
    /// 설정에 맞는 전사기 생성
    pub fn transcriber(&self) -> Transcriber {
        match &self.transcriber_program {
            Some(program) if !program.trim().is_empty() => Transcriber::Command(
                CommandTranscriber::new(program.as_str()).with_args(self.transcriber_args.iter().cloned()),
            ),
            _ => Transcriber::Identity(IdentityTranscriber),
        }
    }

    /// 설정에 맞는 로마자 변환기 생성
    pub fn romanizer(&self) -> Romanizer {
        if self.compound_lookahead {
            Romanizer::new(CompoundPolicy::Lookahead)
        } else {
            Romanizer::new(CompoundPolicy::SingleSymbol)
        }
    }
}

/// 설정 파일 읽기/쓰기 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 설정 파일 경로: ~/.config/hangul-romanizer/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config")
        .join("hangul-romanizer")
        .join("config.json")
}

/// 기본 경로의 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> RomanizerConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => config,
        Err(ConfigError::Read { .. }) => RomanizerConfig::default(),
        Err(e) => {
            log::warn!("{}, 기본 설정 사용", e);
            RomanizerConfig::default()
        }
    }
}

/// 지정한 경로의 설정 로드
pub fn load_config_from(path: &Path) -> Result<RomanizerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// 설정 파일 저장
pub fn save_config_to(path: &Path, config: &RomanizerConfig) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RomanizerConfig::default();
        assert_eq!(config.transcriber_program, None);
        assert!(config.transcriber_args.is_empty());
        assert!(!config.compound_lookahead);
        assert!(matches!(config.transcriber(), Transcriber::Identity(_)));
        assert_eq!(config.romanizer().policy(), CompoundPolicy::SingleSymbol);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{"compound_lookahead": true}"#;
        let config: RomanizerConfig = serde_json::from_str(json).unwrap();
        assert!(config.compound_lookahead);
        assert_eq!(config.transcriber_program, None);
        assert_eq!(config.romanizer().policy(), CompoundPolicy::Lookahead);
    }

    #[test]
    fn test_command_transcriber_from_config() {
        let json = r#"{"transcriber_program": "g2p", "transcriber_args": ["--stdin"]}"#;
        let config: RomanizerConfig = serde_json::from_str(json).unwrap();
        match config.transcriber() {
            Transcriber::Command(t) => assert_eq!(t.program(), "g2p"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_blank_program_is_identity() {
        let config = RomanizerConfig {
            transcriber_program: Some("  ".into()),
            ..Default::default()
        };
        assert!(matches!(config.transcriber(), Transcriber::Identity(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = RomanizerConfig {
            transcriber_program: Some("g2p".into()),
            transcriber_args: vec!["-q".into()],
            compound_lookahead: true,
        };
        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(load_config_from(&missing), Err(ConfigError::Read { .. })));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(load_config_from(&broken), Err(ConfigError::Parse { .. })));
    }
}
