//! Read-only view over files handed to us by the host renderer.

use dioxus::html::FileData;
use std::borrow::Cow;

/// Anything the drop zone can validate: a MIME type and a size in bytes.
pub trait FileDescriptor {
    /// Empty when the host does not know the type.
    fn mime_type(&self) -> Cow<'_, str>;
    fn size(&self) -> u64;
}

/// Plain file description, used by tests and by hosts that build their own
/// file lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl DroppedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

impl FileDescriptor for DroppedFile {
    fn mime_type(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.mime_type)
    }

    fn size(&self) -> u64 {
        self.size
    }
}

impl FileDescriptor for FileData {
    fn mime_type(&self) -> Cow<'_, str> {
        Cow::Owned(self.content_type().unwrap_or_default())
    }

    fn size(&self) -> u64 {
        FileData::size(self)
    }
}

impl From<&FileData> for DroppedFile {
    fn from(file: &FileData) -> Self {
        Self {
            name: file.name(),
            mime_type: FileDescriptor::mime_type(file).into_owned(),
            size: FileData::size(file),
        }
    }
}

impl<T: FileDescriptor + ?Sized> FileDescriptor for &T {
    fn mime_type(&self) -> Cow<'_, str> {
        (**self).mime_type()
    }

    fn size(&self) -> u64 {
        (**self).size()
    }
}
