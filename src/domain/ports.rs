use crate::domain::model::{Payloads, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn request_path(&self) -> &str;
    fn mapping_path(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Payloads>;
    fn transform(&self, payloads: Payloads) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
