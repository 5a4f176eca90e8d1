use crate::dictionary::Dictionary;
use crate::engine::AutoEncoded;
use crate::error::EngineError;

/// Conversion of coded objects to and from a [`Dictionary`], using the class schema.
pub trait DictionaryBridge: AutoEncoded {
  fn to_dictionary(&self) -> Result<Dictionary, EngineError> {
    let mut dictionary = Dictionary::new();
    self.encode_to(&mut dictionary)?;
    Ok(dictionary)
  }

  /// Builds a new instance from `dictionary`; an absent dictionary yields `None`.
  fn from_dictionary(dictionary: Option<&Dictionary>) -> Result<Option<Self>, EngineError>
  where
    Self: Default, {
    let Some(dictionary) = dictionary else {
      return Ok(None);
    };
    let mut object = Self::default();
    object.decode_from(dictionary)?;
    Ok(Some(object))
  }
}

impl<T: AutoEncoded> DictionaryBridge for T {}
