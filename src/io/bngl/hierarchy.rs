//! Emission order for nested compartments.
//!
//! BNGL requires a compartment's parent to be declared before the
//! compartment itself, while the model stores compartments in declaration
//! order. The order computed here is a depth-first pre-order walk of the
//! compartment forest, visiting roots in model order and children in the
//! order they were attached, so the output is reproducible byte for byte.

use crate::io::error::Error;
use crate::model::compartment::{Compartment, CompartmentId};
use crate::model::data::BngData;
use std::collections::BTreeSet;

/// Returns every compartment id of `data` ordered so that parents precede
/// their descendants.
///
/// Fails if the parent and child links disagree, or if some compartment is
/// not reachable from a root exactly once.
pub fn compartment_order(data: &BngData) -> Result<Vec<CompartmentId>, Error> {
    let total = data.compartment_count();
    let mut visited = BTreeSet::new();
    let mut order = Vec::with_capacity(total);
    let mut stack = Vec::new();

    for root in data.compartments.iter().filter(|c| c.is_root()) {
        stack.push(root.id);

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let compartment = data.compartment(id).ok_or(Error::UnknownCompartment(id))?;
            order.push(id);

            // reversed so that the first child is popped first
            for &child_id in compartment.children.iter().rev() {
                let child = data
                    .compartment(child_id)
                    .ok_or(Error::UnknownCompartment(child_id))?;
                if child.parent != Some(id) {
                    return Err(Error::InconsistentCompartmentLink {
                        parent: id,
                        child: child_id,
                        actual: child.parent,
                    });
                }
                if !visited.contains(&child_id) {
                    stack.push(child_id);
                }
            }
        }
    }

    if order.len() != visited.len() || order.len() != total {
        return Err(Error::MalformedCompartmentTree {
            visited: order.len(),
            total,
        });
    }
    Ok(order)
}

/// Returns the ancestor a compartment is declared inside: its parent, or the
/// nearest ancestor above any default compartments on the way up.
///
/// `None` for roots and for compartments with only default ancestors.
pub fn declared_parent<'a>(data: &'a BngData, compartment: &Compartment) -> Option<&'a Compartment> {
    let mut current = compartment.parent.and_then(|p| data.compartment(p));
    // bounded: links may not have been validated
    for _ in 0..data.compartment_count() {
        match current {
            Some(c) if c.is_default() => current = c.parent.and_then(|p| data.compartment(p)),
            other => return other,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::compartment::DEFAULT_COMPARTMENT_NAME;

    fn names(data: &BngData, order: &[CompartmentId]) -> Vec<String> {
        order
            .iter()
            .map(|&id| data.compartment(id).unwrap().name.clone())
            .collect()
    }

    #[test]
    fn chain_is_emitted_parent_first() {
        let mut data = BngData::new();
        let a = data.add_compartment("A", true, 1.0, None);
        let b = data.add_compartment("B", false, 1.0, Some(a));
        data.add_compartment("C", true, 1.0, Some(b));

        let order = compartment_order(&data).unwrap();
        assert_eq!(names(&data, &order), ["A", "B", "C"]);
    }

    #[test]
    fn children_declared_before_parents_are_reordered() {
        let mut data = BngData::new();
        // declare the innermost compartment first, then wire links manually
        data.add_compartment("CP", true, 1.0, Some(CompartmentId(1)));
        data.add_compartment("PM", false, 1.0, Some(CompartmentId(2)));
        data.add_compartment("EC", true, 1.0, None);
        data.compartments[1].add_child(CompartmentId(0));
        data.compartments[2].add_child(CompartmentId(1));

        let order = compartment_order(&data).unwrap();
        assert_eq!(names(&data, &order), ["EC", "PM", "CP"]);
    }

    #[test]
    fn siblings_follow_insertion_order_depth_first() {
        let mut data = BngData::new();
        let root = data.add_compartment("R", true, 1.0, None);
        let x = data.add_compartment("X", false, 1.0, Some(root));
        let y = data.add_compartment("Y", false, 1.0, Some(root));
        data.add_compartment("X1", true, 1.0, Some(x));
        data.add_compartment("Y1", true, 1.0, Some(y));
        data.add_compartment("Other", true, 1.0, None);

        let order = compartment_order(&data).unwrap();
        assert_eq!(names(&data, &order), ["R", "X", "X1", "Y", "Y1", "Other"]);
    }

    #[test]
    fn cycle_without_root_is_rejected() {
        let mut data = BngData::new();
        data.add_compartment("A", true, 1.0, None);
        data.add_compartment("B", true, 1.0, Some(CompartmentId(2)));
        data.add_compartment("C", true, 1.0, Some(CompartmentId(1)));
        data.compartments[1].add_child(CompartmentId(2));
        data.compartments[2].add_child(CompartmentId(1));

        let err = compartment_order(&data).expect_err("cycle");
        assert!(matches!(
            err,
            Error::MalformedCompartmentTree {
                visited: 1,
                total: 3
            }
        ));
    }

    #[test]
    fn orphan_is_rejected() {
        let mut data = BngData::new();
        data.add_compartment("A", true, 1.0, None);
        data.add_compartment("B", true, 1.0, Some(CompartmentId(9)));

        let err = compartment_order(&data).expect_err("orphan");
        assert!(matches!(err, Error::MalformedCompartmentTree { .. }));
    }

    #[test]
    fn one_sided_child_link_is_rejected() {
        let mut data = BngData::new();
        let a = data.add_compartment("A", true, 1.0, None);
        let b = data.add_compartment("B", true, 1.0, None);
        data.compartments[a.0].add_child(b);

        let err = compartment_order(&data).expect_err("inconsistent link");
        assert!(matches!(
            err,
            Error::InconsistentCompartmentLink { actual: None, .. }
        ));
    }

    #[test]
    fn declared_parent_skips_default_ancestors() {
        let mut data = BngData::new();
        let ec = data.add_compartment("EC", true, 8.0, None);
        let default = data.add_compartment(DEFAULT_COMPARTMENT_NAME, true, 1.0, Some(ec));
        let cp = data.add_compartment("CP", true, 1.0, Some(default));
        let top = data.add_compartment(DEFAULT_COMPARTMENT_NAME, true, 1.0, None);
        let loose = data.add_compartment("X", true, 1.0, Some(top));

        let parent_name = |id| {
            declared_parent(&data, data.compartment(id).unwrap()).map(|c| c.name.clone())
        };
        assert_eq!(parent_name(cp).as_deref(), Some("EC"));
        assert_eq!(parent_name(default).as_deref(), Some("EC"));
        assert_eq!(parent_name(ec), None);
        assert_eq!(parent_name(loose), None);
    }
}
