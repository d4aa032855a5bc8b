//! hangul-romanizer - 한국어 문장 발음 전사 / 자모 분해 / 로마자 변환

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use hangul_romanizer::config::{load_config, load_config_from};
use hangul_romanizer::core::romanizer::{CompoundPolicy, Romanizer};
use hangul_romanizer::{IdentityTranscriber, Pipeline, Transcriber};

#[derive(Parser)]
#[command(
    name = "hangul-romanizer",
    version,
    about = "Convert Korean text to phonetic symbols"
)]
struct Cli {
    /// Korean sentence to convert to phonetic symbols
    sentence: String,
    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Skip the external transcriber and decompose the sentence as written
    #[arg(long)]
    no_transcribe: bool,
    /// Prefer two-jamo compound keys (e.g. ㄹㄱ -> lg) when romanizing
    #[arg(long)]
    lookahead: bool,
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            // 인자 누락/오류는 사용법 출력 후 정상 종료
            if let Err(e) = Cli::command().print_help() {
                log::warn!("사용법 출력 실패: {}", e);
            }
            println!();
            process::exit(0);
        }
    };

    let config = match &cli.config {
        Some(path) => match load_config_from(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("설정 로드 실패: {}", e);
                eprintln!("{}", e);
                process::exit(1);
            }
        },
        None => load_config(),
    };

    let transcriber = if cli.no_transcribe {
        Transcriber::Identity(IdentityTranscriber)
    } else {
        config.transcriber()
    };
    let romanizer = if cli.lookahead {
        Romanizer::new(CompoundPolicy::Lookahead)
    } else {
        config.romanizer()
    };

    let pipeline = Pipeline::new(transcriber).with_romanizer(romanizer);
    match pipeline.process(&cli.sentence) {
        Ok(output) => {
            println!("{}", output.phonetic);
            println!("{}", output.decomposed);
            println!("{}", output.romanized);
        }
        Err(e) => {
            log::error!("발음 전사 실패: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
