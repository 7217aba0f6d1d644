//! The query filter: a pure function from (records, criteria) to the
//! matching ordered subsequence.

use crate::criteria::FilterCriteria;
use crate::record::InventoryRecord;

/// Return the records satisfying every supplied criterion, preserving the
/// input's relative order. Absent criteria impose no constraint, so empty
/// criteria are the identity filter.
pub fn filter(records: &[InventoryRecord], criteria: &FilterCriteria) -> Vec<InventoryRecord> {
    records
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect()
}

fn matches(record: &InventoryRecord, criteria: &FilterCriteria) -> bool {
    if let Some(name) = &criteria.name
        && !record
            .product_name
            .to_lowercase()
            .contains(&name.to_lowercase())
    {
        return false;
    }

    if let Some(category) = &criteria.category
        && !record.category.eq_ignore_ascii_case(category)
    {
        return false;
    }

    if let Some(min) = criteria.min_price
        && record.price < min
    {
        return false;
    }

    if let Some(max) = criteria.max_price
        && record.price > max
    {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordId;

    fn record(id: u32, name: &str, category: &str, price: f64) -> InventoryRecord {
        InventoryRecord {
            id: RecordId(id),
            product_name: name.to_string(),
            category: category.to_string(),
            price,
            quantity: 10,
            supplier: "Acme".to_string(),
            city: "Springfield".to_string(),
        }
    }

    fn sample() -> Vec<InventoryRecord> {
        vec![
            record(1, "Laptop Dell XPS 15", "Electronics", 1499.99),
            record(2, "Wireless Mouse", "Electronics", 99.99),
            record(3, "The Rust Programming Language", "Books", 39.95),
            record(4, "Standing Desk", "Furniture", 569.0),
            record(5, "Desk Lamp", "Furniture", 109.0),
        ]
    }

    #[test]
    fn empty_criteria_is_the_identity_filter() {
        let records = sample();
        let out = filter(&records, &FilterCriteria::default());
        assert_eq!(out, records);
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let records = sample();
        let criteria = FilterCriteria {
            name: Some("lap".to_string()),
            ..Default::default()
        };
        let out = filter(&records, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].product_name, "Laptop Dell XPS 15");
    }

    #[test]
    fn category_match_is_case_insensitive_equality() {
        let records = sample();
        let criteria = FilterCriteria {
            category: Some("books".to_string()),
            ..Default::default()
        };
        let out = filter(&records, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].category, "Books");
    }

    #[test]
    fn category_substring_does_not_match() {
        let records = sample();
        let criteria = FilterCriteria {
            category: Some("Book".to_string()),
            ..Default::default()
        };
        assert!(filter(&records, &criteria).is_empty());
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let records = sample();
        let criteria = FilterCriteria {
            min_price: Some(100.0),
            max_price: Some(569.0),
            ..Default::default()
        };
        let out = filter(&records, &criteria);
        let ids: Vec<u32> = out.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![4, 5]);

        // A bound equal to a record's price keeps that record.
        let criteria = FilterCriteria {
            min_price: Some(99.99),
            max_price: Some(99.99),
            ..Default::default()
        };
        let out = filter(&records, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, RecordId(2));
    }

    #[test]
    fn all_criteria_combine_conjunctively() {
        let records = sample();
        let criteria = FilterCriteria {
            name: Some("desk".to_string()),
            category: Some("Furniture".to_string()),
            min_price: Some(200.0),
            max_price: None,
        };
        let out = filter(&records, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].product_name, "Standing Desk");
    }

    #[test]
    fn relative_order_is_preserved() {
        let records = sample();
        let criteria = FilterCriteria {
            category: Some("Furniture".to_string()),
            ..Default::default()
        };
        let ids: Vec<u32> = filter(&records, &criteria).iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_record() -> impl Strategy<Value = InventoryRecord> {
            (
                0u32..10_000,
                "[A-Za-z][A-Za-z0-9 ]{0,30}",
                prop_oneof![
                    Just("Electronics".to_string()),
                    Just("Books".to_string()),
                    Just("Furniture".to_string()),
                ],
                0.0f64..5_000.0,
                0u32..1_000,
            )
                .prop_map(|(id, name, category, price, quantity)| InventoryRecord {
                    id: RecordId(id),
                    product_name: name,
                    category,
                    price,
                    quantity,
                    supplier: "Acme".to_string(),
                    city: "Springfield".to_string(),
                })
        }

        fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
            (
                proptest::option::of("[A-Za-z]{1,5}"),
                proptest::option::of(prop_oneof![
                    Just("Electronics".to_string()),
                    Just("books".to_string()),
                    Just("Toys".to_string()),
                ]),
                proptest::option::of(0.0f64..5_000.0),
                proptest::option::of(0.0f64..5_000.0),
            )
                .prop_map(|(name, category, min_price, max_price)| FilterCriteria {
                    name,
                    category,
                    min_price,
                    max_price,
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: the output is a subsequence of the input (subset,
            /// relative order preserved).
            #[test]
            fn output_is_an_ordered_subsequence(
                records in proptest::collection::vec(arb_record(), 0..50),
                criteria in arb_criteria(),
            ) {
                let out = filter(&records, &criteria);

                let mut cursor = records.iter();
                for kept in &out {
                    // Each output record must appear in the remaining input,
                    // so order and multiplicity are both respected.
                    prop_assert!(cursor.any(|r| r == kept));
                }
            }

            /// Property: every output record satisfies every supplied bound.
            #[test]
            fn output_satisfies_price_bounds(
                records in proptest::collection::vec(arb_record(), 0..50),
                criteria in arb_criteria(),
            ) {
                for kept in filter(&records, &criteria) {
                    if let Some(min) = criteria.min_price {
                        prop_assert!(kept.price >= min);
                    }
                    if let Some(max) = criteria.max_price {
                        prop_assert!(kept.price <= max);
                    }
                }
            }

            /// Property: absent criteria return the input unchanged.
            #[test]
            fn no_criteria_returns_everything(
                records in proptest::collection::vec(arb_record(), 0..50),
            ) {
                prop_assert_eq!(filter(&records, &FilterCriteria::default()), records);
            }
        }
    }
}
