//! 발음 전사기 (G2P) 연동
//!
//! 철자 → 발음 변환 규칙 자체는 이 크레이트에서 구현하지 않습니다.
//! 외부 프로그램에 문장을 넘기고 결과를 받아오거나, 입력을 그대로 돌려줍니다.

use std::convert::Infallible;
use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};

/// 발음 전사 기능
pub trait Phoneticizer {
    type Error: std::error::Error;

    /// 철자 표기를 발음 표기로 변환
    fn phoneticize(&self, text: &str) -> Result<String, Self::Error>;
}

impl<P: Phoneticizer + ?Sized> Phoneticizer for &P {
    type Error = P::Error;

    fn phoneticize(&self, text: &str) -> Result<String, Self::Error> {
        (**self).phoneticize(text)
    }
}

/// 입력을 그대로 반환하는 전사기
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranscriber;

impl Phoneticizer for IdentityTranscriber {
    type Error = Infallible;

    fn phoneticize(&self, text: &str) -> Result<String, Self::Error> {
        Ok(text.to_string())
    }
}

/// 외부 전사 프로그램 실행 에러
#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error("failed to spawn transcriber `{program}`: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("transcriber I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("transcriber exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
    #[error("transcriber output is not valid UTF-8")]
    InvalidUtf8,
}

/// 외부 G2P 프로그램을 실행하는 전사기
///
/// 문장을 stdin으로 보내고 stdout 전체를 발음 표기로 사용합니다.
/// 끝의 개행 문자는 제거됩니다.
#[derive(Debug, Clone)]
pub struct CommandTranscriber {
    program: String,
    args: Vec<String>,
}

impl CommandTranscriber {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Phoneticizer for CommandTranscriber {
    type Error = TranscribeError;

    fn phoneticize(&self, text: &str) -> Result<String, Self::Error> {
        log::debug!("전사 프로그램 실행: {} {:?}", self.program, self.args);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| TranscribeError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // stdout을 읽는 동안 별도 스레드에서 stdin 기록, 쓰기 실패와 무관하게 자식은 회수
        let stdin = child.stdin.take();
        let (written, output) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                // 쓰기 후 drop되어 EOF 전달
                Some(mut stdin) => stdin.write_all(text.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
            (written, output)
        });
        let output = output?;
        if !output.status.success() {
            return Err(TranscribeError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // 입력을 다 읽지 않고 정상 종료한 경우
        if let Err(e) = written {
            log::warn!("전사 프로그램 stdin 기록 실패: {}", e);
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| TranscribeError::InvalidUtf8)?;
        Ok(stdout.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// 설정으로 선택되는 전사기
#[derive(Debug, Clone)]
pub enum Transcriber {
    Identity(IdentityTranscriber),
    Command(CommandTranscriber),
}

impl Phoneticizer for Transcriber {
    type Error = TranscribeError;

    fn phoneticize(&self, text: &str) -> Result<String, Self::Error> {
        match self {
            Transcriber::Identity(t) => match t.phoneticize(text) {
                Ok(s) => Ok(s),
                Err(never) => match never {},
            },
            Transcriber::Command(t) => t.phoneticize(text),
        }
    }
}
