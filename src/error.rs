#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("failed to serialize html: {source}")]
  Io {
    #[from]
    source: std::io::Error,
  },
  #[error("invalid json: {source}")]
  Json {
    #[from]
    source: serde_json::Error,
  },
  #[error("unknown alignment method `{0}` (expected `style` or `class`)")]
  UnknownMethod(String),
}
