pub mod etl;
pub mod pipeline;
pub mod summary;
pub mod transformer;

pub use crate::domain::model::{MappingEntry, Payloads, RemapOutcome, ShipmentRequest, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
