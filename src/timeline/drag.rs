use uuid::Uuid;

use crate::model::{Order, Vehicle};

/// What travels with a dragged order, whether it comes from the
/// unassigned queue or from an already-placed bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub order_id: Uuid,
    pub requested_tag: String,
    /// Vehicle the order is currently on, if any; used to make
    /// re-dropping onto the same row a no-op.
    pub assigned_vehicle: Option<String>,
}

impl DragPayload {
    pub fn from_order(order: &Order) -> Self {
        Self {
            order_id: order.id,
            requested_tag: order.requested_tag.clone(),
            assigned_vehicle: order.assigned_vehicle().map(str::to_string),
        }
    }
}

/// Outcome of hovering or releasing a payload over a vehicle row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropVerdict {
    /// The vehicle does not support the requested class; no mutation,
    /// the row shows a rejection cue while hovered.
    Incompatible,
    /// Already assigned to this vehicle; accepting again would be a
    /// redundant write.
    AlreadyHere,
    Accept,
}

/// The single structural rule checked before any assignment intent.
pub fn can_accept(payload: &DragPayload, vehicle: &Vehicle) -> bool {
    vehicle.supports(&payload.requested_tag)
}

pub fn evaluate_drop(payload: &DragPayload, vehicle: &Vehicle) -> DropVerdict {
    if !can_accept(payload, vehicle) {
        DropVerdict::Incompatible
    } else if payload.assigned_vehicle.as_deref() == Some(vehicle.id.as_str()) {
        DropVerdict::AlreadyHere
    } else {
        DropVerdict::Accept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Assignment;
    use chrono::NaiveDate;

    fn order(tag: &str) -> Order {
        let d = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        Order::new("Acme", "Pallets", d, d, tag)
    }

    #[test]
    fn incompatible_tag_is_rejected() {
        let payload = DragPayload::from_order(&order("10t"));
        let vehicle = Vehicle::new("T-201", "4t", &["4t"], None);
        assert!(!can_accept(&payload, &vehicle));
        assert_eq!(evaluate_drop(&payload, &vehicle), DropVerdict::Incompatible);
    }

    #[test]
    fn supported_tag_is_accepted() {
        let payload = DragPayload::from_order(&order("10t"));
        let vehicle = Vehicle::new("T-101", "10t", &["10t", "4t"], Some("A. Reyes"));
        assert_eq!(evaluate_drop(&payload, &vehicle), DropVerdict::Accept);
    }

    #[test]
    fn redrop_onto_current_vehicle_is_a_noop() {
        let mut o = order("10t");
        o.assignment = Assignment::Assigned {
            vehicle_id: "T-101".into(),
            vehicle_class: "10t".into(),
            driver_name: "A. Reyes".into(),
        };
        let payload = DragPayload::from_order(&o);
        let same = Vehicle::new("T-101", "10t", &["10t"], Some("A. Reyes"));
        let other = Vehicle::new("T-102", "10t", &["10t"], None);
        assert_eq!(evaluate_drop(&payload, &same), DropVerdict::AlreadyHere);
        assert_eq!(evaluate_drop(&payload, &other), DropVerdict::Accept);
    }

    #[test]
    fn vehicle_without_tags_never_accepts() {
        let payload = DragPayload::from_order(&order("4t"));
        let vehicle = Vehicle::new("T-300", "4t", &[], None);
        assert_eq!(evaluate_drop(&payload, &vehicle), DropVerdict::Incompatible);
    }
}
