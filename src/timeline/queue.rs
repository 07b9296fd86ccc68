use crate::model::Order;

/// Free-text search plus a single capability-tag filter over the
/// unassigned pool. Both are applied as a pure, order-preserving filter;
/// no round-trip to the data layer.
#[derive(Debug, Clone, Default)]
pub struct QueueFilter {
    pub search: String,
    pub tag: Option<String>,
}

impl QueueFilter {
    fn matches(&self, order: &Order) -> bool {
        if let Some(tag) = &self.tag {
            if &order.requested_tag != tag {
                return false;
            }
        }

        if self.search.trim().is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [
            order.short_id(),
            order.item_name.clone(),
            order.load_address.clone(),
            order.unload_address.clone(),
            order.customer_name.clone(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Filtered view of the unassigned pool, in input order.
    pub fn apply<'a>(&self, unassigned: &[&'a Order]) -> Vec<&'a Order> {
        unassigned
            .iter()
            .copied()
            .filter(|o| self.matches(o))
            .collect()
    }
}

/// Distinct requested tags among the given orders, sorted, for the
/// filter dropdown.
pub fn tag_options(orders: &[&Order]) -> Vec<String> {
    let mut tags: Vec<String> = orders.iter().map(|o| o.requested_tag.clone()).collect();
    tags.sort();
    tags.dedup();
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(customer: &str, item: &str, from: &str, to: &str, tag: &str) -> Order {
        let d = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let mut o = Order::new(customer, item, d, d, tag);
        o.load_address = from.into();
        o.unload_address = to.into();
        o
    }

    fn pool() -> Vec<Order> {
        vec![
            order("Acme Logistics", "Steel coils", "Dock 4", "North Yard", "10t"),
            order("Borden Foods", "Chilled produce", "Cold Store", "Market Hall", "4t"),
            order("Acme Logistics", "Rebar bundles", "Dock 2", "South Site", "trailer"),
        ]
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let pool = pool();
        let refs: Vec<&Order> = pool.iter().collect();
        let out = QueueFilter::default().apply(&refs);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].item_name, "Steel coils");
        assert_eq!(out[2].item_name, "Rebar bundles");
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let pool = pool();
        let refs: Vec<&Order> = pool.iter().collect();

        let by_customer = QueueFilter {
            search: "acme".into(),
            ..Default::default()
        };
        assert_eq!(by_customer.apply(&refs).len(), 2);

        let by_address = QueueFilter {
            search: "market".into(),
            ..Default::default()
        };
        assert_eq!(by_address.apply(&refs).len(), 1);

        let by_item = QueueFilter {
            search: "REBAR".into(),
            ..Default::default()
        };
        assert_eq!(by_item.apply(&refs).len(), 1);

        let by_id = QueueFilter {
            search: pool[1].short_id().to_lowercase(),
            ..Default::default()
        };
        assert_eq!(by_id.apply(&refs)[0].customer_name, "Borden Foods");
    }

    #[test]
    fn tag_filter_and_search_combine() {
        let pool = pool();
        let refs: Vec<&Order> = pool.iter().collect();
        let f = QueueFilter {
            search: "acme".into(),
            tag: Some("trailer".into()),
        };
        let out = f.apply(&refs);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].item_name, "Rebar bundles");
    }

    #[test]
    fn tag_options_are_sorted_and_deduped() {
        let pool = pool();
        let refs: Vec<&Order> = pool.iter().collect();
        assert_eq!(tag_options(&refs), vec!["10t", "4t", "trailer"]);
    }
}
