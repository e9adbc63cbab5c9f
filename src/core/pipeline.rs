use crate::core::transformer::{parse_mapping, parse_request, remap_origin, render};
use crate::core::{ConfigProvider, Payloads, Pipeline, Storage, TransformResult};
use crate::utils::error::Result;

pub struct RemapPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RemapPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for RemapPipeline<S, C> {
    fn extract(&self) -> Result<Payloads> {
        tracing::debug!("Reading request from: {}", self.config.request_path());
        let raw_request = self.storage.read_file(self.config.request_path())?;
        tracing::debug!("Reading mapping from: {}", self.config.mapping_path());
        let raw_mapping = self.storage.read_file(self.config.mapping_path())?;

        let request = parse_request(&raw_request)?;
        let mapping = parse_mapping(&raw_mapping)?;

        Ok(Payloads { request, mapping })
    }

    fn transform(&self, payloads: Payloads) -> Result<TransformResult> {
        let Payloads {
            mut request,
            mapping,
        } = payloads;

        let outcome = remap_origin(&mut request, &mapping)?;
        Ok(TransformResult { request, outcome })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        render(&result.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RemapOutcome;
    use crate::utils::error::{Payload, RemapError};
    use std::collections::HashMap;

    struct MemoryStorage {
        files: HashMap<String, Vec<u8>>,
    }

    impl Storage for MemoryStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, path.to_string()).into())
        }
    }

    struct Paths;

    impl ConfigProvider for Paths {
        fn request_path(&self) -> &str {
            "request.json"
        }

        fn mapping_path(&self) -> &str {
            "mapping.json"
        }
    }

    fn pipeline(request: &str, mapping: &str) -> RemapPipeline<MemoryStorage, Paths> {
        let mut files = HashMap::new();
        files.insert("request.json".to_string(), request.as_bytes().to_vec());
        files.insert("mapping.json".to_string(), mapping.as_bytes().to_vec());
        RemapPipeline::new(MemoryStorage { files }, Paths)
    }

    const REQUEST: &str = r#"{"destination":"89408","shipping_type":"Z2","detail":[{"origin":"CG31","item":"000010","product_herarchy":"006000800096","quantity_weight":9,"volume":3.3333,"oum":"ton"}]}"#;
    const MAPPING: &str = r#"[{"ClaUbicacion":"442","ClaSapUbicacion":"DE31","Descripcion":"Denver"},{"ClaUbicacion":"443","ClaSapUbicacion":"CG31","Descripcion":"Casa Grande"}]"#;

    #[test]
    fn runs_all_stages() {
        let pipeline = pipeline(REQUEST, MAPPING);
        let payloads = pipeline.extract().unwrap();
        assert_eq!(payloads.mapping.len(), 2);

        let result = pipeline.transform(payloads).unwrap();
        assert!(matches!(result.outcome, RemapOutcome::Replaced { .. }));

        let output = pipeline.load(result).unwrap();
        assert!(output.contains("\"origin\": \"443\""));
        assert!(output.contains("\"quantity_weight\": 9,"));
    }

    #[test]
    fn malformed_mapping_fails_extract() {
        let pipeline = pipeline(REQUEST, "[{");
        let err = pipeline.extract().unwrap_err();
        assert!(err.to_string().starts_with("Error al parsear mapping"));
    }

    #[test]
    fn non_utf8_request_names_the_request_payload() {
        let mut files = HashMap::new();
        files.insert("mapping.json".to_string(), MAPPING.as_bytes().to_vec());
        files.insert(
            "request.json".to_string(),
            vec![b'{', b'"', 0xF3, b'"', b':', b'1', b'}'],
        );

        let err = RemapPipeline::new(MemoryStorage { files }, Paths)
            .extract()
            .unwrap_err();
        assert!(matches!(
            err,
            RemapError::ParseError {
                payload: Payload::Request,
                ..
            }
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let pipeline = RemapPipeline::new(
            MemoryStorage {
                files: HashMap::new(),
            },
            Paths,
        );
        assert!(matches!(pipeline.extract(), Err(RemapError::IoError(_))));
    }
}
