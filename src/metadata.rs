/*! Bibliographic metadata

Metadata is read from a flat YAML mapping (`meta_data.yaml`), for example:

```yaml
ID: HCS_001
TITLE: Hoàng Việt Văn Tuyển
VOLUME: 3
AUTHOR: Bùi Huy Bích
PERIOD: Lê
TRANSLATOR: ""
SOURCE: Viện Hán Nôm
```

Hand-written metadata files carry a couple of recurring typos (`TIITLE`, `PEROID`),
these are renamed on load as long as the correctly spelled key is absent.
!*/
use std::path::Path;

use log::debug;
use serde_yaml::{Mapping, Value};

use crate::error::Error;

/// Identifier used when the metadata file has no `ID` key.
pub const DEFAULT_ID: &str = "HCS_001";

/// Keys that are renamed on load: (misspelled, correct).
const KEY_FIXES: [(&str, &str); 2] = [("TIITLE", "TITLE"), ("PEROID", "PERIOD")];

/// Holds metadata as a YAML mapping.
///
/// Values are kept as YAML scalars and rendered as strings on access,
/// so that `VOLUME: 3` and `VOLUME: "3"` are equivalent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    inner: Mapping,
}

impl Metadata {
    /// Read and patch metadata from a YAML file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        debug!("reading metadata from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and patch metadata from a YAML string.
    ///
    /// An empty document yields empty metadata, any other non-mapping document is an error.
    pub fn from_yaml_str(s: &str) -> Result<Self, Error> {
        let value: Value = serde_yaml::from_str(s)?;
        let inner = match value {
            Value::Mapping(m) => m,
            Value::Null => Mapping::new(),
            other => {
                return Err(Error::Custom(format!(
                    "metadata must be a mapping, got {:?}",
                    other
                )))
            }
        };

        let mut metadata = Self { inner };
        metadata.fix_typos();
        Ok(metadata)
    }

    fn fix_typos(&mut self) {
        for (wrong, right) in KEY_FIXES {
            if self.inner.contains_key(wrong) && !self.inner.contains_key(right) {
                if let Some(v) = self.inner.remove(wrong) {
                    debug!("renaming metadata key {} to {}", wrong, right);
                    self.inner.insert(Value::from(right), v);
                }
            }
        }
    }

    /// Get a metadata value as a string. Missing keys and null values are empty.
    pub fn get(&self, key: &str) -> String {
        self.inner.get(key).map(scalar_to_string).unwrap_or_default()
    }

    /// Get the corpus file identifier, defaulting to [DEFAULT_ID] when the `ID` key is missing.
    ///
    /// A present but empty or null `ID` is kept as an empty identifier.
    pub fn id(&self) -> String {
        self.inner
            .get("ID")
            .map(scalar_to_string)
            .unwrap_or_else(|| DEFAULT_ID.to_string())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }
}

fn scalar_to_string(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // sequences/mappings are not expected in metadata, keep a readable form
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}
