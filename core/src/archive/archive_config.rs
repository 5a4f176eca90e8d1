use crate::archive::ConfigOption;

pub const DEFAULT_MAX_PAYLOAD_SIZE: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConfig {
  class_name_check: bool,
  max_payload_size: Option<usize>,
}

impl Default for ArchiveConfig {
  fn default() -> Self {
    Self {
      class_name_check: true,
      max_payload_size: Some(DEFAULT_MAX_PAYLOAD_SIZE),
    }
  }
}

impl ArchiveConfig {
  pub fn from(options: impl IntoIterator<Item = ConfigOption>) -> ArchiveConfig {
    let mut config = ArchiveConfig::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }

  pub fn class_name_check(&self) -> bool {
    self.class_name_check
  }

  pub fn set_class_name_check(&mut self, check: bool) {
    self.class_name_check = check;
  }

  pub fn max_payload_size(&self) -> Option<usize> {
    self.max_payload_size
  }

  pub fn set_max_payload_size(&mut self, limit: Option<usize>) {
    self.max_payload_size = limit;
  }

  pub(crate) fn check_payload_size(&self, size: usize) -> Result<(), crate::error::ArchiveError> {
    match self.max_payload_size {
      Some(limit) if size > limit => Err(crate::error::ArchiveError::PayloadTooLarge { size, limit }),
      _ => Ok(()),
    }
  }
}
