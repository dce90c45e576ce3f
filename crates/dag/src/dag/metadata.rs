use std::collections::BTreeMap;
use std::path::Path;

use mime::Mime;
use serde::{Deserialize, Serialize};

use crate::linked_data::{BlockEncoded, DagCborCodec, Link};

/// The off-chain record describing a stored file or folder.
///
/// Fed to [`create_metadata_dag`](super::create_metadata_dag) - which
/// matters because a record is not bounded the way content is: a very
/// long name or a folder's full child listing can push its encoding
/// past one node's budget, at which point it chunks like any payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// MIME type, when it could be determined at inclusion time.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "mime_serde")]
    mime: Option<Mime>,
    /// Logical size in bytes of the content this record describes.
    size: u64,
    /// Child name -> content link listing; empty for plain files.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    children: BTreeMap<String, Link>,
}

impl BlockEncoded<DagCborCodec> for Metadata {}

impl Metadata {
    /// Describe a file, detecting the MIME type from its path.
    pub fn file(path: &Path, size: u64) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string());
        Metadata {
            name,
            mime: mime_guess::from_path(path).first(),
            size,
            children: BTreeMap::new(),
        }
    }

    /// Describe a folder and its child listing.
    pub fn folder(name: String, size: u64, children: BTreeMap<String, Link>) -> Self {
        Metadata {
            name: Some(name),
            mime: None,
            size,
            children,
        }
    }

    pub fn insert_child(&mut self, name: String, link: Link) -> Option<Link> {
        self.children.insert(name, link)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn mime(&self) -> Option<&Mime> {
        self.mime.as_ref()
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn children(&self) -> &BTreeMap<String, Link> {
        &self.children
    }
}

// Mime carries no serde impls of its own; ship it as its string form,
// absent when undetermined.
mod mime_serde {
    use std::str::FromStr;

    use mime::Mime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(mime: &Option<Mime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match mime {
            Some(mime) => serializer.serialize_str(mime.as_ref()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Mime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            Some(s) => Mime::from_str(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
