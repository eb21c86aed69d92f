//! Raw project config document and element lookup helpers.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};
use tracing::debug;

use crate::domain::ConfigError;

/// Tag of the document element every project config must carry.
pub const ROOT_TAG: &str = "TestConfiguration";

/// Text of a project config file, tagged with where it came from.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    origin: String,
    text: String,
}

impl ConfigSource {
    /// Read a project config file from disk.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::SourceNotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Unreadable { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), bytes = text.len(), "read project config");
        Ok(Self { origin: path.display().to_string(), text })
    }

    pub fn from_text(origin: impl Into<String>, text: impl Into<String>) -> Self {
        Self { origin: origin.into(), text: text.into() }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Parse the text into an element tree and check the document element.
    pub fn parse(&self) -> Result<ConfigDocument<'_>, ConfigError> {
        let document = Document::parse(&self.text).map_err(|e| ConfigError::Malformed {
            origin: self.origin.clone(),
            details: e.to_string(),
        })?;

        let tag = document.root_element().tag_name().name();
        if tag != ROOT_TAG {
            return Err(ConfigError::UnexpectedRoot(tag.to_string()));
        }

        Ok(ConfigDocument { document })
    }
}

/// A parsed project config whose document element is `TestConfiguration`.
#[derive(Debug)]
pub struct ConfigDocument<'input> {
    document: Document<'input>,
}

impl<'input> ConfigDocument<'input> {
    /// The `TestConfiguration` element.
    pub fn configuration(&self) -> Node<'_, 'input> {
        self.document.root_element()
    }
}

/// Return the first direct child of `parent` named `tag`.
pub fn fetch_element<'a, 'input>(
    parent: Node<'a, 'input>,
    tag: &str,
) -> Result<Node<'a, 'input>, ConfigError> {
    parent.children().find(|child| is_tagged(child, tag)).ok_or_else(|| {
        ConfigError::MissingElement {
            tag: tag.to_string(),
            parent: parent.tag_name().name().to_string(),
        }
    })
}

/// Return the trimmed text of the direct child of `parent` named `tag`.
///
/// An element without text is reported as empty rather than silently yielding
/// an empty value.
pub fn fetch_text(parent: Node<'_, '_>, tag: &str) -> Result<String, ConfigError> {
    element_text(fetch_element(parent, tag)?)
}

/// Return every direct child of `parent` named `tag`, in document order.
pub fn fetch_all_elements<'a, 'input>(parent: Node<'a, 'input>, tag: &str) -> Vec<Node<'a, 'input>> {
    parent.children().filter(|child| is_tagged(child, tag)).collect()
}

pub fn has_element(parent: Node<'_, '_>, tag: &str) -> bool {
    parent.children().any(|child| is_tagged(&child, tag))
}

/// Trimmed text of `element`, joining text split by comments or processing
/// instructions.
pub fn element_text(element: Node<'_, '_>) -> Result<String, ConfigError> {
    let text: String =
        element.children().filter(Node::is_text).filter_map(|child| child.text()).collect();
    let text = text.trim();
    if text.is_empty() {
        return Err(ConfigError::EmptyElement(element.tag_name().name().to_string()));
    }
    Ok(text.to_string())
}

fn is_tagged(node: &Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && node.tag_name().name() == tag
}
