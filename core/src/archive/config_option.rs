use crate::archive::ArchiveConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOption {
  SetClassNameCheck(bool),
  SetMaxPayloadSize(Option<usize>),
}

impl ConfigOption {
  pub fn apply(&self, config: &mut ArchiveConfig) {
    match self {
      ConfigOption::SetClassNameCheck(check) => {
        config.set_class_name_check(*check);
      }
      ConfigOption::SetMaxPayloadSize(limit) => {
        config.set_max_payload_size(*limit);
      }
    }
  }

  pub fn with_class_name_check(check: bool) -> ConfigOption {
    ConfigOption::SetClassNameCheck(check)
  }

  pub fn with_max_payload_size(limit: usize) -> ConfigOption {
    ConfigOption::SetMaxPayloadSize(Some(limit))
  }

  pub fn without_payload_limit() -> ConfigOption {
    ConfigOption::SetMaxPayloadSize(None)
  }
}
