//! Loading of named source units from a content directory.
//!
//! A [`ContentLoader`] reads each source at most once and shares the parsed
//! [`Document`] through an `Arc`, so page loaders asking for the same source
//! (meta, hero and content all live in one file) do not parse it again.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::construct::Document;
use crate::error::{Result, StlError};
use crate::extract::{self, AsoPage, DocNavSection, NavData, PageData, ToolsPage};
use crate::query::OtherHasher;
use crate::settings::{Settings, SourceNames};

#[derive(Debug)]
pub struct ContentLoader {
    content_dir: PathBuf,
    sources: SourceNames,
    cache: Mutex<HashMap<String, Arc<Document>, OtherHasher>>,
}

impl ContentLoader {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self::with_sources(content_dir, SourceNames::default())
    }
    pub fn with_sources(content_dir: impl Into<PathBuf>, sources: SourceNames) -> Self {
        Self {
            content_dir: content_dir.into(),
            sources,
            cache: Mutex::new(HashMap::default()),
        }
    }
    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_sources(settings.content_dir.clone(), settings.sources.clone())
    }
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Returns the parsed document for a source name relative to the content
    /// directory. Only a missing or unreadable source fails.
    pub fn document(&self, name: &str) -> Result<Arc<Document>> {
        validate_name(name)?;
        if let Some(doc) = self.lock()?.get(name) {
            debug!(name, "document cache hit");
            return Ok(Arc::clone(doc));
        }
        let path = self.content_dir.join(name);
        let text = std::fs::read_to_string(&path).map_err(|source| StlError::Read {
            name: name.to_owned(),
            source,
        })?;
        let doc = Arc::new(Document::parse(&text));
        info!(name, statements = doc.len(), comments = doc.comments().len(), "loaded document");
        // a concurrent load of the same name may have won; keep the first one
        let kept = Arc::clone(
            self.lock()?
                .entry(name.to_owned())
                .or_insert(doc),
        );
        Ok(kept)
    }

    pub fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }

    pub fn page(&self, name: &str) -> Result<PageData> {
        Ok(extract::page(&*self.document(name)?))
    }
    pub fn nav(&self) -> Result<NavData> {
        Ok(extract::extract_nav(&*self.document(&self.sources.nav)?))
    }
    pub fn tools(&self) -> Result<ToolsPage> {
        Ok(extract::tools_page(
            &*self.document(&self.sources.tools)?,
            self.sources.tool_sources.as_slice(),
        ))
    }
    pub fn docs_nav(&self) -> Result<Vec<DocNavSection>> {
        Ok(extract::extract_docs_nav(&*self.document(&self.sources.docs_nav)?))
    }
    pub fn aso(&self) -> Result<AsoPage> {
        Ok(extract::aso_page(&*self.document(&self.sources.aso)?))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Arc<Document>, OtherHasher>>> {
        self.cache
            .lock()
            .map_err(|e| StlError::Lock(e.to_string()))
    }
}

/// Source names must stay inside the content directory.
fn validate_name(name: &str) -> Result<()> {
    let path = Path::new(name);
    let inside = !name.is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if inside {
        Ok(())
    } else {
        Err(StlError::InvalidSourceName(name.to_owned()))
    }
}
