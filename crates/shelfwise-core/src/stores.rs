//! Store location registry and aggregate KPIs.

use tracing::info;

use shelfwise_types::error::StoreError;
use shelfwise_types::store::{NewStore, StoreKpis, StoreLocation, StoreType};

/// In-memory registry of store locations.
#[derive(Debug, Default)]
pub struct StoreDirectory {
    stores: Vec<StoreLocation>,
}

impl StoreDirectory {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the sample store data.
    pub fn with_sample_stores() -> Self {
        let stores = vec![
            StoreLocation {
                id: "1".to_string(),
                name: "Oxford Street Flagship".to_string(),
                location: "London, UK".to_string(),
                manager: "Sarah Johnson".to_string(),
                store_type: StoreType::Flagship,
                revenue: 65_000,
                customers: 1_240,
                performance: 95,
                active: true,
            },
            StoreLocation {
                id: "2".to_string(),
                name: "Birmingham Central".to_string(),
                location: "Birmingham, UK".to_string(),
                manager: "Michael Chen".to_string(),
                store_type: StoreType::Standard,
                revenue: 42_000,
                customers: 890,
                performance: 88,
                active: true,
            },
            StoreLocation {
                id: "3".to_string(),
                name: "Manchester Mall".to_string(),
                location: "Manchester, UK".to_string(),
                manager: "Emma Wilson".to_string(),
                store_type: StoreType::Outlet,
                revenue: 28_000,
                customers: 650,
                performance: 82,
                active: true,
            },
            StoreLocation {
                id: "4".to_string(),
                name: "Edinburgh Royal Mile".to_string(),
                location: "Edinburgh, UK".to_string(),
                manager: "James Morrison".to_string(),
                store_type: StoreType::Boutique,
                revenue: 35_000,
                customers: 420,
                performance: 91,
                active: true,
            },
        ];
        Self { stores }
    }

    /// All registered stores.
    pub fn stores(&self) -> &[StoreLocation] {
        &self.stores
    }

    /// Find a store by id.
    pub fn get(&self, id: &str) -> Option<&StoreLocation> {
        self.stores.iter().find(|s| s.id == id)
    }

    /// Stores matching the selection: a specific id, or all of them.
    pub fn filtered(&self, store_id: Option<&str>) -> Vec<&StoreLocation> {
        match store_id {
            Some(id) => self.stores.iter().filter(|s| s.id == id).collect(),
            None => self.stores.iter().collect(),
        }
    }

    /// Register a store. Name, location, and manager are required.
    pub fn add(&mut self, new: NewStore) -> Result<&StoreLocation, StoreError> {
        if new.name.trim().is_empty()
            || new.location.trim().is_empty()
            || new.manager.trim().is_empty()
        {
            return Err(StoreError::InvalidStore(
                "name, location, and manager are required".to_string(),
            ));
        }

        let next_id = self
            .stores
            .iter()
            .filter_map(|s| s.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let store = StoreLocation {
            id: next_id.to_string(),
            name: new.name,
            location: new.location,
            manager: new.manager,
            store_type: new.store_type.unwrap_or(StoreType::Flagship),
            revenue: 0,
            customers: 0,
            performance: 0,
            active: true,
        };

        info!(name = %store.name, location = %store.location, "store registered");
        self.stores.push(store);
        Ok(self.stores.last().expect("just pushed"))
    }

    /// Aggregate KPIs over the selected stores: total revenue, total
    /// customers, average performance. `None` when the selection is empty.
    pub fn kpis(&self, store_id: Option<&str>) -> Option<StoreKpis> {
        let selected = self.filtered(store_id);
        if selected.is_empty() {
            return None;
        }

        let total_revenue = selected.iter().map(|s| s.revenue).sum();
        let total_customers = selected.iter().map(|s| s.customers).sum();
        let average_performance = selected
            .iter()
            .map(|s| f64::from(s.performance))
            .sum::<f64>()
            / selected.len() as f64;

        Some(StoreKpis {
            total_revenue,
            total_customers,
            average_performance,
            store_count: selected.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_stores() {
        let directory = StoreDirectory::with_sample_stores();
        assert_eq!(directory.stores().len(), 4);
        assert_eq!(
            directory.get("1").unwrap().name,
            "Oxford Street Flagship"
        );
        assert!(directory.get("99").is_none());
    }

    #[test]
    fn test_kpis_over_all_stores() {
        let directory = StoreDirectory::with_sample_stores();
        let kpis = directory.kpis(None).unwrap();

        assert_eq!(kpis.total_revenue, 170_000);
        assert_eq!(kpis.total_customers, 3_200);
        assert_eq!(kpis.store_count, 4);
        assert!((kpis.average_performance - 89.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_kpis_for_single_store() {
        let directory = StoreDirectory::with_sample_stores();
        let kpis = directory.kpis(Some("2")).unwrap();

        assert_eq!(kpis.total_revenue, 42_000);
        assert_eq!(kpis.total_customers, 890);
        assert_eq!(kpis.store_count, 1);
        assert!((kpis.average_performance - 88.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_kpis_empty_selection_is_none() {
        let directory = StoreDirectory::with_sample_stores();
        assert!(directory.kpis(Some("99")).is_none());
        assert!(StoreDirectory::new().kpis(None).is_none());
    }

    #[test]
    fn test_add_validates_required_fields() {
        let mut directory = StoreDirectory::new();
        let err = directory
            .add(NewStore {
                name: "Leeds Corner".to_string(),
                location: String::new(),
                manager: "Ana Diaz".to_string(),
                store_type: None,
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidStore(_)));
        assert!(directory.stores().is_empty());
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut directory = StoreDirectory::with_sample_stores();
        let store = directory
            .add(NewStore {
                name: "Leeds Corner".to_string(),
                location: "Leeds, UK".to_string(),
                manager: "Ana Diaz".to_string(),
                store_type: Some(StoreType::Outlet),
            })
            .unwrap();

        assert_eq!(store.id, "5");
        assert_eq!(store.store_type, StoreType::Outlet);
        assert!(store.active);
    }
}
