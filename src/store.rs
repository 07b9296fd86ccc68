use chrono::{Duration, NaiveDate};
use thiserror::Error;
use uuid::Uuid;

use crate::model::{Assignment, Order, Vehicle};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown order {0}")]
    UnknownOrder(Uuid),
    #[error("unknown vehicle {0}")]
    UnknownVehicle(String),
}

/// A user intent reported by a gesture. Collected during the render pass
/// and applied to the data layer afterwards; exactly one intent per
/// completed gesture.
#[derive(Debug, Clone)]
pub enum DispatchIntent {
    Assign {
        order_id: Uuid,
        vehicle_id: String,
        vehicle_class: String,
        driver_name: String,
    },
    Unassign {
        order_id: Uuid,
    },
    UpdateTime {
        order_id: Uuid,
        load_time: String,
        unload_time: String,
    },
}

/// The mutation boundary of the board. Real deployments put persistence
/// behind this; the board only issues intents and re-reads afterwards.
pub trait DispatchActions {
    fn assign(
        &mut self,
        order_id: Uuid,
        vehicle_id: &str,
        vehicle_class: &str,
        driver_name: &str,
    ) -> Result<(), DispatchError>;

    fn unassign(&mut self, order_id: Uuid) -> Result<(), DispatchError>;

    fn update_time(
        &mut self,
        order_id: Uuid,
        load_time: &str,
        unload_time: &str,
    ) -> Result<(), DispatchError>;
}

/// In-memory data layer used by the demo application.
pub struct InMemoryStore {
    vehicles: Vec<Vehicle>,
    orders: Vec<Order>,
}

impl InMemoryStore {
    pub fn new(vehicles: Vec<Vehicle>, orders: Vec<Order>) -> Self {
        Self { vehicles, orders }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    fn order_mut(&mut self, id: Uuid) -> Result<&mut Order, DispatchError> {
        self.orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(DispatchError::UnknownOrder(id))
    }

    /// Fleet and order book for demonstration, spread around today so the
    /// initial window has content.
    pub fn seeded(today: NaiveDate) -> Self {
        let vehicles = vec![
            Vehicle::new("T-101", "10t", &["10t", "4t"], Some("A. Reyes")),
            Vehicle::new("T-102", "10t", &["10t"], Some("J. Brandt")),
            Vehicle::new("T-201", "4t", &["4t"], Some("M. Okafor")),
            Vehicle::new("T-202", "4t", &["4t", "flatbed"], None),
            Vehicle::new("TR-01", "trailer", &["trailer", "10t"], Some("S. Weiss")),
            Vehicle::new("W-301", "wing", &["wing", "4t"], Some("K. Harlan")),
        ];

        let mut orders = Vec::new();

        let mut o = Order::new(
            "Acme Logistics",
            "Steel coils",
            today,
            today,
            "10t",
        );
        o.load_time = Some("06:00".into());
        o.unload_time = Some("11:30".into());
        o.load_address = "Dock 4, Harbor Rd".into();
        o.unload_address = "North Yard".into();
        o.assignment = Assignment::Assigned {
            vehicle_id: "T-101".into(),
            vehicle_class: "10t".into(),
            driver_name: "A. Reyes".into(),
        };
        orders.push(o);

        let mut o = Order::new("Borden Foods", "Chilled produce", today, today, "4t");
        o.load_time = Some("04:30".into());
        o.unload_time = Some("07:00".into());
        o.load_address = "Cold Store 2".into();
        o.unload_address = "Market Hall".into();
        o.assignment = Assignment::Assigned {
            vehicle_id: "T-201".into(),
            vehicle_class: "4t".into(),
            driver_name: "M. Okafor".into(),
        };
        orders.push(o);

        // Multi-day haul: loads yesterday, unloads tomorrow.
        let mut o = Order::new(
            "Crane & Sons",
            "Prefab sections",
            today - Duration::days(1),
            today + Duration::days(1),
            "trailer",
        );
        o.load_time = Some("14:00".into());
        o.unload_time = Some("09:00".into());
        o.load_address = "Plant 7".into();
        o.unload_address = "Riverside site".into();
        o.assignment = Assignment::Assigned {
            vehicle_id: "TR-01".into(),
            vehicle_class: "trailer".into(),
            driver_name: "S. Weiss".into(),
        };
        orders.push(o);

        // Sub-half-hour shuttle; renders at the minimum bar width.
        let mut o = Order::new("Borden Foods", "Sample crate", today, today, "4t");
        o.load_time = Some("09:00".into());
        o.unload_time = Some("09:20".into());
        o.load_address = "Cold Store 2".into();
        o.unload_address = "Lab annex".into();
        o.assignment = Assignment::Assigned {
            vehicle_id: "T-202".into(),
            vehicle_class: "4t".into(),
            driver_name: String::new(),
        };
        orders.push(o);

        // Unassigned pool.
        let mut o = Order::new("Delta Build", "Scaffolding", today, today, "10t");
        o.load_time = Some("08:00".into());
        o.unload_time = Some("12:00".into());
        o.load_address = "Depot East".into();
        o.unload_address = "Tower block A".into();
        orders.push(o);

        let mut o = Order::new(
            "Halvorsen AS",
            "Machine parts",
            today + Duration::days(1),
            today + Duration::days(1),
            "4t",
        );
        o.load_time = Some("10:15".into());
        o.unload_time = Some("15:45".into());
        o.load_address = "Unit 12".into();
        o.unload_address = "Assembly hall".into();
        orders.push(o);

        // No times; the board falls back to 08:00 / 17:00.
        let mut o = Order::new(
            "Crane & Sons",
            "Formwork panels",
            today + Duration::days(1),
            today + Duration::days(1),
            "trailer",
        );
        o.load_address = "Plant 7".into();
        o.unload_address = "Riverside site".into();
        orders.push(o);

        let mut o = Order::new(
            "Acme Logistics",
            "Rebar bundles",
            today + Duration::days(2),
            today + Duration::days(2),
            "wing",
        );
        o.load_time = Some("07:30".into());
        o.unload_time = Some("13:00".into());
        o.load_address = "Dock 2, Harbor Rd".into();
        o.unload_address = "South Site".into();
        orders.push(o);

        Self::new(vehicles, orders)
    }
}

impl DispatchActions for InMemoryStore {
    fn assign(
        &mut self,
        order_id: Uuid,
        vehicle_id: &str,
        vehicle_class: &str,
        driver_name: &str,
    ) -> Result<(), DispatchError> {
        if !self.vehicles.iter().any(|v| v.id == vehicle_id) {
            return Err(DispatchError::UnknownVehicle(vehicle_id.to_string()));
        }
        let order = self.order_mut(order_id)?;
        order.assignment = Assignment::Assigned {
            vehicle_id: vehicle_id.to_string(),
            vehicle_class: vehicle_class.to_string(),
            driver_name: driver_name.to_string(),
        };
        Ok(())
    }

    fn unassign(&mut self, order_id: Uuid) -> Result<(), DispatchError> {
        let order = self.order_mut(order_id)?;
        order.assignment = Assignment::Unassigned;
        Ok(())
    }

    fn update_time(
        &mut self,
        order_id: Uuid,
        load_time: &str,
        unload_time: &str,
    ) -> Result<(), DispatchError> {
        let order = self.order_mut(order_id)?;
        order.load_time = Some(load_time.to_string());
        order.unload_time = Some(unload_time.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 4).unwrap()
    }

    #[test]
    fn assign_then_unassign_round_trips() {
        let mut store = InMemoryStore::seeded(today());
        let id = store
            .orders()
            .iter()
            .find(|o| !o.is_assigned())
            .unwrap()
            .id;

        store.assign(id, "T-101", "10t", "A. Reyes").unwrap();
        let order = store.orders().iter().find(|o| o.id == id).unwrap();
        assert_eq!(order.assigned_vehicle(), Some("T-101"));

        store.unassign(id).unwrap();
        let order = store.orders().iter().find(|o| o.id == id).unwrap();
        assert!(!order.is_assigned());
    }

    #[test]
    fn assign_validates_both_sides() {
        let mut store = InMemoryStore::seeded(today());
        let id = store.orders()[0].id;

        assert!(matches!(
            store.assign(id, "NO-SUCH", "4t", ""),
            Err(DispatchError::UnknownVehicle(_))
        ));
        assert!(matches!(
            store.assign(Uuid::new_v4(), "T-101", "10t", ""),
            Err(DispatchError::UnknownOrder(_))
        ));
    }

    #[test]
    fn update_time_overwrites_both_legs() {
        let mut store = InMemoryStore::seeded(today());
        let id = store.orders()[0].id;
        store.update_time(id, "05:15", "10:45").unwrap();
        let order = store.orders().iter().find(|o| o.id == id).unwrap();
        assert_eq!(order.load_time.as_deref(), Some("05:15"));
        assert_eq!(order.unload_time.as_deref(), Some("10:45"));
    }
}
