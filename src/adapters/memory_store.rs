use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::domain::model::{GarmentCategory, GarmentItem, GarmentPatch, NewGarment};
use crate::domain::ports::ItemStore;
use crate::utils::error::{Result, WardrobeError};
use crate::utils::validation::{validate_non_empty_string, validate_temperature_range};

#[derive(Debug, Default)]
struct Inner {
    items: BTreeMap<u64, GarmentItem>,
    next_id: u64,
}

/// Thread-safe in-process wardrobe. Each call sees a consistent snapshot.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from already-persisted items, keeping their ids.
    pub fn from_items(items: Vec<GarmentItem>) -> Self {
        let next_id = items.iter().map(|i| i.id).max().unwrap_or(0);
        let items = items.into_iter().map(|i| (i.id, i)).collect();
        Self {
            inner: RwLock::new(Inner { items, next_id }),
        }
    }

    pub fn len(&self) -> usize {
        self.read().map(|inner| inner.items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Puts `item` back exactly as given, replacing any item with the same id.
    pub fn restore(&self, item: GarmentItem) -> Result<()> {
        let mut inner = self.write()?;
        inner.next_id = inner.next_id.max(item.id);
        inner.items.insert(item.id, item);
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>> {
        self.inner.read().map_err(|_| WardrobeError::StoreError {
            message: "wardrobe lock poisoned".to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
        self.inner.write().map_err(|_| WardrobeError::StoreError {
            message: "wardrobe lock poisoned".to_string(),
        })
    }
}

impl ItemStore for InMemoryStore {
    fn list(&self, category: Option<GarmentCategory>) -> Result<Vec<GarmentItem>> {
        let inner = self.read()?;
        let mut items: Vec<GarmentItem> = inner
            .items
            .values()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(items)
    }

    fn get(&self, id: u64) -> Result<Option<GarmentItem>> {
        Ok(self.read()?.items.get(&id).cloned())
    }

    fn add(&self, garment: NewGarment) -> Result<GarmentItem> {
        validate_non_empty_string("name", &garment.name)?;
        validate_temperature_range("temperature", garment.temp_min, garment.temp_max)?;

        let mut inner = self.write()?;
        inner.next_id += 1;
        let now = Utc::now();
        let item = GarmentItem {
            id: inner.next_id,
            name: garment.name.trim().to_string(),
            category: garment.category,
            color: garment.color,
            style: garment.style.filter(|s| !s.trim().is_empty()),
            temp_min: garment.temp_min,
            temp_max: garment.temp_max,
            image_path: garment.image_path,
            description: garment.description,
            created_at: now,
            updated_at: now,
        };
        inner.items.insert(item.id, item.clone());

        tracing::debug!("added garment {} ({})", item.id, item.category);
        Ok(item)
    }

    fn update(&self, id: u64, patch: GarmentPatch) -> Result<bool> {
        if patch.is_empty() {
            return Ok(false);
        }

        let mut inner = self.write()?;
        let Some(item) = inner.items.get_mut(&id) else {
            return Ok(false);
        };

        let temp_min = patch.temp_min.unwrap_or(item.temp_min);
        let temp_max = patch.temp_max.unwrap_or(item.temp_max);
        validate_temperature_range("temperature", temp_min, temp_max)?;
        if let Some(name) = &patch.name {
            validate_non_empty_string("name", name)?;
        }

        if let Some(name) = patch.name {
            item.name = name.trim().to_string();
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if patch.color.is_some() {
            item.color = patch.color;
        }
        if patch.style.is_some() {
            item.style = patch.style;
        }
        if patch.image_path.is_some() {
            item.image_path = patch.image_path;
        }
        if patch.description.is_some() {
            item.description = patch.description;
        }
        item.temp_min = temp_min;
        item.temp_max = temp_max;
        item.updated_at = Utc::now();
        Ok(true)
    }

    fn remove(&self, id: u64) -> Result<bool> {
        Ok(self.write()?.items.remove(&id).is_some())
    }
}
