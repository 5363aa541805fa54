use std::io::{Read, Write};

use kube::{core::DynamicObject, ResourceExt};
use serde::Deserialize;
use tracing::warn;

use crate::{
    error::{ManifestError, ResourceError},
    transform::Transformer,
};

/// An ordered set of resource documents, as read from a multi-document YAML stream.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    resources: Vec<DynamicObject>,
}

impl Manifest {
    pub fn new(resources: Vec<DynamicObject>) -> Self {
        Manifest { resources }
    }

    /// Parses every document of `yaml`, skipping empty ones.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ManifestError> {
        let mut resources = Vec::new();

        for document in serde_yaml::Deserializer::from_str(yaml) {
            let value = serde_yaml::Value::deserialize(document)?;
            if value.is_null() {
                continue;
            }

            resources.push(serde_yaml::from_value(value)?);
        }

        Ok(Manifest { resources })
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ManifestError> {
        let mut yaml = String::new();
        reader.read_to_string(&mut yaml)?;

        Self::from_yaml_str(&yaml)
    }

    pub fn resources(&self) -> &[DynamicObject] {
        &self.resources
    }

    /// Applies `transformer` to each resource on its own.
    ///
    /// A resource the transformer fails on is restored to what it was before the call and
    /// reported in the returned list; the rest of the manifest is still transformed.
    #[tracing::instrument(level = "debug", skip_all, fields(resources = self.resources.len()))]
    pub fn transform<T>(&mut self, transformer: &T) -> Vec<ResourceError>
    where
        T: Transformer + ?Sized,
    {
        let mut failures = Vec::new();

        for (index, resource) in self.resources.iter_mut().enumerate() {
            let original = resource.clone();

            if let Err(source) = transformer.transform(resource) {
                *resource = original;

                let failure = ResourceError {
                    index,
                    kind: resource
                        .types
                        .as_ref()
                        .map(|types| types.kind.clone())
                        .unwrap_or_default(),
                    name: resource.name_any(),
                    source,
                };
                warn!(%failure, "resource left untransformed");

                failures.push(failure);
            }
        }

        failures
    }

    /// Writes all resources as YAML documents separated by `---`.
    pub fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), ManifestError> {
        for (index, resource) in self.resources.iter().enumerate() {
            if index > 0 {
                writer.write_all(b"---\n")?;
            }

            serde_yaml::to_writer(&mut writer, resource)?;
        }

        Ok(())
    }
}
