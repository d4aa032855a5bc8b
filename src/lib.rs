pub mod config;
pub mod core;
pub mod transcriber;

pub use core::decomposer::decompose;
pub use core::pipeline::{process, Pipeline, PipelineOutput};
pub use core::romanizer::{romanize, CompoundPolicy, Romanizer};
pub use transcriber::{CommandTranscriber, IdentityTranscriber, Phoneticizer, TranscribeError, Transcriber};
