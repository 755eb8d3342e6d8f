use serde::Deserialize;

/// Metadata shared by every node in the tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Metadata {
    pub name: String,
    pub size: u64,
    /// Seconds since the Unix epoch.
    pub time_modified: i64,
    /// Passed through verbatim, e.g. `rw-r--r--`.
    pub permissions: String,
}

/// A node in the listing tree.
///
/// On the wire a node is a directory when it carries a `contents` array (even
/// an empty one) and a file otherwise. That distinction is resolved once while
/// deserializing.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(from = "RawEntry")]
pub enum Entry {
    File(Metadata),
    Directory {
        meta: Metadata,
        children: Vec<Entry>,
    },
}

impl Entry {
    pub fn file(name: impl Into<String>, size: u64, time_modified: i64, permissions: &str) -> Self {
        Entry::File(Metadata {
            name: name.into(),
            size,
            time_modified,
            permissions: permissions.to_owned(),
        })
    }

    pub fn directory(
        name: impl Into<String>,
        size: u64,
        time_modified: i64,
        permissions: &str,
        children: Vec<Entry>,
    ) -> Self {
        Entry::Directory {
            meta: Metadata {
                name: name.into(),
                size,
                time_modified,
                permissions: permissions.to_owned(),
            },
            children,
        }
    }

    pub fn meta(&self) -> &Metadata {
        match self {
            Entry::File(meta) | Entry::Directory { meta, .. } => meta,
        }
    }

    pub fn name(&self) -> &str {
        &self.meta().name
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Entry::Directory { .. })
    }

    /// Children of a directory, `None` for files.
    pub fn children(&self) -> Option<&[Entry]> {
        match self {
            Entry::File(_) => None,
            Entry::Directory { children, .. } => Some(children),
        }
    }
}

#[derive(Deserialize)]
struct RawEntry {
    name: String,
    size: u64,
    time_modified: i64,
    permissions: String,
    #[serde(default, alias = "children")]
    contents: Option<Vec<Entry>>,
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        let meta = Metadata {
            name: raw.name,
            size: raw.size,
            time_modified: raw.time_modified,
            permissions: raw.permissions,
        };

        match raw.contents {
            Some(children) => Entry::Directory { meta, children },
            None => Entry::File(meta),
        }
    }
}
