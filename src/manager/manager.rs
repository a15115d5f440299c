use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::manager::managererror::ManagerError;

/// The `name` key every managed JSON object carries.
#[derive(Deserialize)]
pub struct NamedJsonObject {
    name: String
}

impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Mutable registry used while objects are being loaded.
pub struct ManagerBuilder<V: ?Sized> {
    map: HashMap<String, Arc<V>>
}

impl<V: ?Sized> ManagerBuilder<V> {
    pub fn new() -> ManagerBuilder<V> {
        ManagerBuilder { map: HashMap::new() }
    }

    pub fn insert(&mut self, name: String, value: Arc<V>) {
        if self.map.insert(name.clone(), value).is_some() {
            log::warn!("'{}' defined more than once, keeping the last definition", name);
        }
    }

    pub fn build(self) -> FrozenManager<V> {
        FrozenManager { map: self.map }
    }
}

impl<V: ?Sized> Default for ManagerBuilder<V> {
    fn default() -> Self {
        ManagerBuilder::new()
    }
}

/// Read-only registry of named objects.
pub struct FrozenManager<V: ?Sized> {
    map: HashMap<String, Arc<V>>
}

impl<V: ?Sized> FrozenManager<V> {
    pub fn get(&self, name: &str) -> Result<Arc<V>, ManagerError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Builds named objects of type `V` from JSON, with extra context `S`.
pub trait IManager<V: ?Sized, S> {
    fn insert_obj_from_json(
        &self,
        builder: &mut ManagerBuilder<V>,
        json_value: serde_json::Value,
        supports: &S
    ) -> Result<(), ManagerError>;

    fn insert_obj_from_json_vec(
        &self,
        builder: &mut ManagerBuilder<V>,
        json_vec: &[serde_json::Value],
        supports: &S
    ) -> Result<(), ManagerError> {
        for json_value in json_vec.iter() {
            self.insert_obj_from_json(builder, json_value.clone(), supports)?;
        }
        Ok(())
    }

    /// Loads a single object or an array of objects.
    fn load(&self, json_value: serde_json::Value, supports: &S) -> Result<FrozenManager<V>, ManagerError> {
        let mut builder = ManagerBuilder::new();
        if json_value.is_array() {
            let json_vec: Vec<serde_json::Value> = ManagerError::from_json_or_json_parse_error(json_value)?;
            self.insert_obj_from_json_vec(&mut builder, &json_vec, supports)?;
        } else {
            self.insert_obj_from_json(&mut builder, json_value, supports)?;
        }
        Ok(builder.build())
    }
}
