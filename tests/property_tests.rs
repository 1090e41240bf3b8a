//! Property-based checks of compartment ordering and number formatting.

use bngl_bridge::io::bngl::export_compartments;
use bngl_bridge::io::bngl::hierarchy::compartment_order;
use bngl_bridge::io::util::f_to_str;
use bngl_bridge::{BngData, CompartmentId, DEFAULT_COMPARTMENT_NAME};
use proptest::prelude::*;
use std::collections::HashMap;

/// A random forest: `parents[i]` is either a root marker or an index below `i`,
/// plus the order in which the nodes are declared.
fn forest() -> impl Strategy<Value = (Vec<Option<usize>>, Vec<usize>)> {
    (1usize..24).prop_flat_map(|n| {
        let parents = (0..n)
            .map(|i| {
                if i == 0 {
                    Just(None::<usize>).boxed()
                } else {
                    prop::option::of(0..i).boxed()
                }
            })
            .collect::<Vec<_>>();
        let order = Just((0..n).collect::<Vec<_>>()).prop_shuffle();
        (parents, order)
    })
}

fn build(parents: &[Option<usize>], order: &[usize]) -> (BngData, HashMap<usize, CompartmentId>) {
    build_named(parents, order, |node| format!("C{node}"))
}

fn build_named(
    parents: &[Option<usize>],
    order: &[usize],
    name: impl Fn(usize) -> String,
) -> (BngData, HashMap<usize, CompartmentId>) {
    let mut data = BngData::new();
    let mut ids = HashMap::new();
    for &node in order {
        let id = data.add_compartment(name(node), node % 2 == 0, 1.0, None);
        ids.insert(node, id);
    }
    for (node, parent) in parents.iter().enumerate() {
        if let Some(parent) = parent {
            assert!(data.set_compartment_parent(ids[&node], ids[parent]));
        }
    }
    (data, ids)
}

proptest! {
    /// Every compartment is listed once and after its parent.
    #[test]
    fn parents_precede_children((parents, order) in forest()) {
        let (data, ids) = build(&parents, &order);
        let listed = compartment_order(&data).expect("forest is well-formed");

        prop_assert_eq!(listed.len(), parents.len());

        let position: HashMap<CompartmentId, usize> =
            listed.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        prop_assert_eq!(position.len(), listed.len());

        for (node, parent) in parents.iter().enumerate() {
            if let Some(parent) = parent {
                prop_assert!(position[&ids[parent]] < position[&ids[&node]]);
            }
        }
    }

    /// A default compartment anywhere in the forest is never written, every
    /// other compartment is written once, and each named parent is declared
    /// on an earlier line.
    #[test]
    fn default_compartment_is_never_exported(
        (parents, order, default_node) in forest().prop_flat_map(|(parents, order)| {
            let n = parents.len();
            (Just(parents), Just(order), 0..n)
        })
    ) {
        let (data, _) = build_named(&parents, &order, |node| {
            if node == default_node {
                DEFAULT_COMPARTMENT_NAME.to_string()
            } else {
                format!("C{node}")
            }
        });

        let (mut params, mut compartments) = (Vec::new(), Vec::new());
        let diagnostics =
            export_compartments(&data, &mut params, &mut compartments).expect("export");
        let params = String::from_utf8(params).expect("utf8");
        let compartments = String::from_utf8(compartments).expect("utf8");

        prop_assert!(diagnostics.is_empty());
        prop_assert!(!params.contains(DEFAULT_COMPARTMENT_NAME));
        prop_assert!(!compartments.contains(DEFAULT_COMPARTMENT_NAME));

        let lines: Vec<&str> = compartments
            .lines()
            .filter(|l| !l.starts_with("BEGIN") && !l.starts_with("END"))
            .collect();
        prop_assert_eq!(lines.len(), data.compartment_count() - 1);

        let mut declared = Vec::new();
        for line in &lines {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let parent = match fields.as_slice() {
                [_, "3", _, parent] | [_, "2", _, "*", "THICKNESS", parent] => Some(*parent),
                _ => None,
            };
            if let Some(parent) = parent {
                prop_assert!(declared.contains(&parent), "{} before its parent", line);
            }
            declared.push(fields[0]);
        }
    }

    /// The same model always yields the same order.
    #[test]
    fn order_is_deterministic((parents, order) in forest()) {
        let (first, _) = build(&parents, &order);
        let (second, _) = build(&parents, &order);
        prop_assert_eq!(
            compartment_order(&first).expect("first"),
            compartment_order(&second).expect("second")
        );
    }

    /// Formatted numbers read back to the exact same value.
    #[test]
    fn formatted_numbers_round_trip(value in prop::num::f64::NORMAL) {
        let text = f_to_str(value);
        prop_assert_eq!(text.parse::<f64>().expect("parse"), value);
    }
}
