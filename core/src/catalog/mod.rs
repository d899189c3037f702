pub mod record;
pub mod request;

pub use record::{RawMotorRecord, SearchResponse};
pub use request::SearchRequest;
