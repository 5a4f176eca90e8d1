use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
  #[error("field `{0}` collides with a reserved remote object key")]
  ReservedKey(String),
  #[error("invalid remote object JSON: {0}")]
  Json(#[from] serde_json::Error),
}
