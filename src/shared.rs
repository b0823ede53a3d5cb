//! A process-wide inventory that can be swapped for a freshly built one.

use hazard_inventory_core::errors::InventoryResult;
use hazard_inventory_core::Inventory;
use log::info;
use std::sync::{Arc, RwLock};

use crate::config::{build_inventory, InventoryConfig};

/// Shared handle to the current inventory.
///
/// Readers take an `Arc` snapshot and keep using it for as long as they
/// like; a reload builds a complete new inventory before replacing the
/// reference, so readers never observe a partially built one.
#[derive(Debug)]
pub struct SharedInventory {
    current: RwLock<Arc<Inventory>>,
}

impl SharedInventory {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            current: RwLock::new(Arc::new(inventory)),
        }
    }

    /// Build the initial inventory from `config`.
    pub fn load(config: &InventoryConfig) -> InventoryResult<Self> {
        Ok(Self::new(build_inventory(config)?))
    }

    /// Snapshot of the current inventory.
    pub fn current(&self) -> Arc<Inventory> {
        self.current.read().expect("Inventory lock poisoned").clone()
    }

    /// Replace the current inventory.
    pub fn replace(&self, inventory: Inventory) {
        *self.current.write().expect("Inventory lock poisoned") = Arc::new(inventory);
    }

    /// Rebuild from `config` and swap it in.
    ///
    /// On error the current inventory stays in place.
    pub fn reload(&self, config: &InventoryConfig) -> InventoryResult<Arc<Inventory>> {
        let inventory = Arc::new(build_inventory(config)?);
        *self.current.write().expect("Inventory lock poisoned") = inventory.clone();
        info!("Reloaded hazard inventory ({} resources)", inventory.len());
        Ok(inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazard_inventory_core::Colormaps;
    use std::path::PathBuf;

    #[test]
    fn snapshots_survive_reload() {
        let shared = SharedInventory::load(&InventoryConfig::default()).unwrap();
        let before = shared.current();
        assert_eq!(before.len(), 18);

        let empty = InventoryConfig {
            include_embedded: false,
            catalogs: Vec::new(),
        };
        let after = shared.reload(&empty).unwrap();
        assert!(after.is_empty());
        assert!(shared.current().is_empty());
        // the earlier snapshot is unaffected
        assert_eq!(before.len(), 18);
    }

    #[test]
    fn replace_swaps_in_new_inventory() {
        let shared = SharedInventory::load(&InventoryConfig::default()).unwrap();
        let before = shared.current();

        let replacement = Inventory::new(Vec::new(), Colormaps::new()).unwrap();
        shared.replace(replacement);

        assert!(shared.current().is_empty());
        assert!(!Arc::ptr_eq(&before, &shared.current()));
        assert_eq!(before.len(), 18);
        assert!(before.get("inundation/wri/v2/000000000WATCH").is_some());
    }

    #[test]
    fn failed_reload_keeps_current() {
        let shared = SharedInventory::load(&InventoryConfig::default()).unwrap();
        let broken = InventoryConfig {
            include_embedded: true,
            catalogs: vec![PathBuf::from("/nonexistent/extra.toml")],
        };
        assert!(shared.reload(&broken).is_err());
        assert_eq!(shared.current().len(), 18);
    }

    #[test]
    fn shared_across_threads() {
        let shared = Arc::new(SharedInventory::load(&InventoryConfig::default()).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    shared
                        .current()
                        .resources_by_type_id("RiverineInundation", "000000000WATCH")
                        .len()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    }
}
