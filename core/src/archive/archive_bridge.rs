use crate::archive::{ArchiveConfig, KeyedArchive};
use crate::engine::AutoEncoded;
use crate::error::{ArchiveError, EngineError};

/// Archiving of coded objects into bytes, tagged with [`AutoEncoded::archive_class_name`].
pub trait ArchiveBridge: AutoEncoded {
  fn archive(&self) -> Result<Vec<u8>, EngineError> {
    self.archive_with(&ArchiveConfig::default())
  }

  fn archive_with(&self, config: &ArchiveConfig) -> Result<Vec<u8>, EngineError> {
    let mut archive = KeyedArchive::new(Self::archive_class_name());
    self.encode_to(&mut archive)?;
    let bytes = archive.to_bytes();
    config.check_payload_size(bytes.len())?;
    tracing::debug!("Archived {}: {} bytes", Self::archive_class_name(), bytes.len());
    Ok(bytes)
  }

  fn unarchive(bytes: &[u8]) -> Result<Self, EngineError>
  where
    Self: Default, {
    Self::unarchive_with(bytes, &ArchiveConfig::default())
  }

  fn unarchive_with(bytes: &[u8], config: &ArchiveConfig) -> Result<Self, EngineError>
  where
    Self: Default, {
    let archive = KeyedArchive::from_bytes(bytes, config)?;
    if config.class_name_check() && archive.class_name() != Self::archive_class_name() {
      return Err(
        ArchiveError::ClassMismatch {
          expected: Self::archive_class_name().to_string(),
          found: archive.class_name().to_string(),
        }
        .into(),
      );
    }
    let mut object = Self::default();
    object.decode_from(&archive)?;
    tracing::debug!("Unarchived {} from {} bytes", Self::archive_class_name(), bytes.len());
    Ok(object)
  }
}

impl<T: AutoEncoded> ArchiveBridge for T {}
