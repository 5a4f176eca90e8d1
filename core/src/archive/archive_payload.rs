/// Wire form of a [`crate::archive::KeyedArchive`].
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ArchivePayload {
  #[prost(string, tag = "1")]
  pub class_name: String,
  #[prost(message, repeated, tag = "2")]
  pub entries: Vec<ArchiveEntry>,
}

/// A single key and its value. An unset `kind` stands for `Value::Null`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ArchiveEntry {
  #[prost(string, tag = "1")]
  pub key: String,
  #[prost(oneof = "archive_entry::Kind", tags = "2, 3, 4, 5, 6")]
  pub kind: Option<archive_entry::Kind>,
}

pub mod archive_entry {
  #[derive(Clone, PartialEq, ::prost::Oneof)]
  pub enum Kind {
    #[prost(bool, tag = "2")]
    BoolValue(bool),
    #[prost(sint64, tag = "3")]
    IntValue(i64),
    #[prost(double, tag = "4")]
    FloatValue(f64),
    #[prost(string, tag = "5")]
    StringValue(::prost::alloc::string::String),
    #[prost(bytes = "vec", tag = "6")]
    BytesValue(::prost::alloc::vec::Vec<u8>),
  }
}
