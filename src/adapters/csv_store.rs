use std::path::{Path, PathBuf};

use crate::adapters::memory_store::InMemoryStore;
use crate::domain::model::{GarmentCategory, GarmentItem, GarmentPatch, NewGarment};
use crate::domain::ports::ItemStore;
use crate::utils::error::Result;

/// Wardrobe kept in a CSV file. Reads are served from memory; every
/// mutation rewrites the file and is undone in memory if the write fails.
#[derive(Debug)]
pub struct CsvStore {
    path: PathBuf,
    items: InMemoryStore,
}

impl CsvStore {
    /// Opens the file at `path`, starting empty if it does not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let items = if path.exists() {
            let mut reader = csv::Reader::from_path(&path)?;
            reader
                .deserialize::<GarmentItem>()
                .collect::<std::result::Result<Vec<_>, _>>()?
        } else {
            tracing::info!("wardrobe file {:?} not found, starting empty", path);
            Vec::new()
        };

        tracing::debug!("loaded {} garment(s) from {:?}", items.len(), path);
        Ok(Self {
            path,
            items: InMemoryStore::from_items(items),
        })
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut items = self.items.list(None)?;
        items.sort_by_key(|item| item.id);

        let mut writer = csv::Writer::from_path(&self.path)?;
        for item in &items {
            writer.serialize(item)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl ItemStore for CsvStore {
    fn list(&self, category: Option<GarmentCategory>) -> Result<Vec<GarmentItem>> {
        self.items.list(category)
    }

    fn get(&self, id: u64) -> Result<Option<GarmentItem>> {
        self.items.get(id)
    }

    fn add(&self, garment: NewGarment) -> Result<GarmentItem> {
        let item = self.items.add(garment)?;
        if let Err(e) = self.save() {
            tracing::warn!("rolling back garment {}: {}", item.id, e);
            self.items.remove(item.id)?;
            return Err(e);
        }
        Ok(item)
    }

    fn update(&self, id: u64, patch: GarmentPatch) -> Result<bool> {
        let Some(previous) = self.items.get(id)? else {
            return Ok(false);
        };
        let changed = self.items.update(id, patch)?;
        if changed {
            if let Err(e) = self.save() {
                tracing::warn!("rolling back update of garment {}: {}", id, e);
                self.items.restore(previous)?;
                return Err(e);
            }
        }
        Ok(changed)
    }

    fn remove(&self, id: u64) -> Result<bool> {
        let Some(previous) = self.items.get(id)? else {
            return Ok(false);
        };
        self.items.remove(id)?;
        if let Err(e) = self.save() {
            tracing::warn!("rolling back removal of garment {}: {}", id, e);
            self.items.restore(previous)?;
            return Err(e);
        }
        Ok(true)
    }
}
