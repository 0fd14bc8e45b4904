pub mod client;
pub mod corpus;
pub mod source;

pub use client::{ApiClient, ApiRecord, DEFAULT_API_BASE_URL};
pub use corpus::CorpusSource;
pub use source::{MetadataSource, RecordSource};
