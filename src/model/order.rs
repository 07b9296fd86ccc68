use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Assignment state of an order. Vehicle fields only exist in the
/// `Assigned` variant, so an unassigned order can never carry stale
/// vehicle data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Assignment {
    #[default]
    Unassigned,
    Assigned {
        vehicle_id: String,
        vehicle_class: String,
        driver_name: String,
    },
}

/// A transport order: one load leg and one unload leg, each with a date
/// and an optional "HH:MM" time of day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub item_name: String,
    pub load_date: NaiveDate,
    pub load_time: Option<String>,
    pub load_address: String,
    pub unload_date: NaiveDate,
    pub unload_time: Option<String>,
    pub unload_address: String,
    /// Vehicle class the customer requested (e.g. "10t").
    pub requested_tag: String,
    #[serde(default)]
    pub assignment: Assignment,
}

impl Order {
    pub fn new(
        customer_name: impl Into<String>,
        item_name: impl Into<String>,
        load_date: NaiveDate,
        unload_date: NaiveDate,
        requested_tag: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_name: customer_name.into(),
            item_name: item_name.into(),
            load_date,
            load_time: None,
            load_address: String::new(),
            unload_date,
            unload_time: None,
            unload_address: String::new(),
            requested_tag: requested_tag.into(),
            assignment: Assignment::Unassigned,
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self.assignment, Assignment::Assigned { .. })
    }

    /// Vehicle this order is assigned to, if any.
    pub fn assigned_vehicle(&self) -> Option<&str> {
        match &self.assignment {
            Assignment::Assigned { vehicle_id, .. } => Some(vehicle_id),
            Assignment::Unassigned => None,
        }
    }

    /// Whether the order overlaps the half-open day window `[start, end)`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.load_date < end && self.unload_date >= start
    }

    pub fn is_multi_day(&self) -> bool {
        self.load_date != self.unload_date
    }

    /// Short display form of the order id (first uuid segment).
    pub fn short_id(&self) -> String {
        let full = self.id.to_string();
        full[..8].to_uppercase()
    }
}
