//! Property-based tests for the set algebra.
//!
//! These tests verify that the derived operations satisfy the mathematical
//! properties expected of sets, over arbitrary element batches. A small
//! value domain keeps overlap between generated sets frequent.

use cantor::element::Element;
use cantor::set::{Set, UnsyncSet};
use proptest::prelude::*;

fn set_of(values: &[i64]) -> UnsyncSet {
    values.iter().copied().map(Element::from).collect()
}

fn batch_of(values: &[i64]) -> Vec<Element> {
    values.iter().copied().map(Element::from).collect()
}

// =============================================================================
// Add-Contains Law
// Description: Every added element is contained afterwards
// =============================================================================

proptest! {
    #[test]
    fn prop_add_contains_law(
        values in prop::collection::vec(-16_i64..16, 0..40),
        additions in prop::collection::vec(-16_i64..16, 0..10)
    ) {
        let set = set_of(&values);
        set.add(batch_of(&additions));

        prop_assert!(set.contains(&batch_of(&additions)));
    }
}

// =============================================================================
// Remove-Contains Law
// Description: A removed element is never contained afterwards
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_contains_law(
        values in prop::collection::vec(-16_i64..16, 0..40),
        victim in -16_i64..16
    ) {
        let set = set_of(&values);
        set.remove(&batch_of(&[victim]));

        prop_assert!(!set.contains(&batch_of(&[victim])));
    }
}

// =============================================================================
// Deduplication Law
// Description: Cardinality never exceeds the number of inserted values
// =============================================================================

proptest! {
    #[test]
    fn prop_dedup_law(values in prop::collection::vec(-16_i64..16, 0..60)) {
        let set = set_of(&values);

        prop_assert!(set.cardinality() <= values.len());
        // Re-inserting the same values changes nothing.
        let before = set.cardinality();
        set.add(batch_of(&values));
        prop_assert_eq!(set.cardinality(), before);
    }
}

// =============================================================================
// Union Upper Bound Law
// Description: A ∪ B ⊆ X iff A ⊆ X and B ⊆ X
// =============================================================================

proptest! {
    #[test]
    fn prop_union_upper_bound_law(
        values_a in prop::collection::vec(-16_i64..16, 0..30),
        values_b in prop::collection::vec(-16_i64..16, 0..30),
        values_x in prop::collection::vec(-16_i64..16, 0..30)
    ) {
        let set_a = set_of(&values_a);
        let set_b = set_of(&values_b);
        let set_x = set_of(&values_x);
        let union = set_a.union(&[&set_b]);

        prop_assert!(set_a.is_subset_of(union.as_ref()));
        prop_assert!(set_b.is_subset_of(union.as_ref()));

        prop_assert_eq!(
            union.is_subset_of(&set_x),
            set_a.is_subset_of(&set_x) && set_b.is_subset_of(&set_x)
        );

        // A bound built over both participants always admits the union.
        let cover = set_x.union(&[union.as_ref()]);
        prop_assert!(union.is_subset_of(cover.as_ref()));
    }
}

// =============================================================================
// Union Cardinality Law
// Description: max(|A|, |B|) <= |A ∪ B| <= |A| + |B|
// =============================================================================

proptest! {
    #[test]
    fn prop_union_cardinality_law(
        values_a in prop::collection::vec(-16_i64..16, 0..30),
        values_b in prop::collection::vec(-16_i64..16, 0..30)
    ) {
        let set_a = set_of(&values_a);
        let set_b = set_of(&values_b);
        let union = set_a.union(&[&set_b]);

        prop_assert!(union.cardinality() >= set_a.cardinality().max(set_b.cardinality()));
        prop_assert!(union.cardinality() <= set_a.cardinality() + set_b.cardinality());
    }
}

// =============================================================================
// Union Commutativity Law
// Description: A ∪ B = B ∪ A
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutativity_law(
        values_a in prop::collection::vec(-16_i64..16, 0..30),
        values_b in prop::collection::vec(-16_i64..16, 0..30)
    ) {
        let set_a = set_of(&values_a);
        let set_b = set_of(&values_b);

        let a_union_b = set_a.union(&[&set_b]);
        let b_union_a = set_b.union(&[&set_a]);

        prop_assert!(a_union_b.equals(b_union_a.as_ref()));
    }
}

// =============================================================================
// Intersection Lower Bound Law
// Description: The intersection is a subset of every participant
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_lower_bound_law(
        values_a in prop::collection::vec(-16_i64..16, 0..30),
        values_b in prop::collection::vec(-16_i64..16, 0..30)
    ) {
        let set_a = set_of(&values_a);
        let set_b = set_of(&values_b);
        let intersection = set_a.intersection(&[&set_b]);

        prop_assert!(intersection.is_subset_of(&set_a));
        prop_assert!(intersection.is_subset_of(&set_b));
    }
}

// =============================================================================
// Intersection Commutativity Law
// Description: A ∩ B = B ∩ A
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_commutativity_law(
        values_a in prop::collection::vec(-16_i64..16, 0..30),
        values_b in prop::collection::vec(-16_i64..16, 0..30)
    ) {
        let set_a = set_of(&values_a);
        let set_b = set_of(&values_b);

        let a_intersect_b = set_a.intersection(&[&set_b]);
        let b_intersect_a = set_b.intersection(&[&set_a]);

        prop_assert!(a_intersect_b.equals(b_intersect_a.as_ref()));
    }
}

// =============================================================================
// Intersection Identity Law
// Description: Intersection with no operands is a clone of the receiver
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_identity_law(values in prop::collection::vec(-16_i64..16, 0..40)) {
        let set = set_of(&values);
        let clone = set.intersection(&[]);

        prop_assert!(clone.equals(&set));
    }
}

// =============================================================================
// Complement Disjointness Law
// Description: (A \ B) ∩ B = ∅
// =============================================================================

proptest! {
    #[test]
    fn prop_complement_disjointness_law(
        values_a in prop::collection::vec(-16_i64..16, 0..30),
        values_b in prop::collection::vec(-16_i64..16, 0..30)
    ) {
        let set_a = set_of(&values_a);
        let set_b = set_of(&values_b);

        let difference = set_a.complement(&[&set_b]);
        let overlap = difference.intersection(&[&set_b]);

        prop_assert!(overlap.is_empty());
    }
}

// =============================================================================
// Self-Complement Law
// Description: A \ A = ∅, with the receiver as its own operand
// =============================================================================

proptest! {
    #[test]
    fn prop_self_complement_law(values in prop::collection::vec(-16_i64..16, 0..40)) {
        let set = set_of(&values);
        let before = set.cardinality();

        let nothing = set.complement(&[&set]);

        prop_assert!(nothing.is_empty());
        // The receiver survives being its own operand.
        prop_assert_eq!(set.cardinality(), before);
    }
}

// =============================================================================
// Partition Law
// Description: |A ∩ B| + |A \ B| = |A|
// =============================================================================

proptest! {
    #[test]
    fn prop_partition_law(
        values_a in prop::collection::vec(-16_i64..16, 0..30),
        values_b in prop::collection::vec(-16_i64..16, 0..30)
    ) {
        let set_a = set_of(&values_a);
        let set_b = set_of(&values_b);

        let inside = set_a.intersection(&[&set_b]);
        let outside = set_a.complement(&[&set_b]);

        prop_assert_eq!(inside.cardinality() + outside.cardinality(), set_a.cardinality());
    }
}

// =============================================================================
// Subset Antisymmetry Law
// Description: A ⊆ B and B ⊆ A iff A = B
// =============================================================================

proptest! {
    #[test]
    fn prop_subset_antisymmetry_law(
        values_a in prop::collection::vec(-16_i64..16, 0..30),
        values_b in prop::collection::vec(-16_i64..16, 0..30)
    ) {
        let set_a = set_of(&values_a);
        let set_b = set_of(&values_b);

        let mutual = set_a.is_subset_of(&set_b) && set_b.is_subset_of(&set_a);
        prop_assert_eq!(mutual, set_a.equals(&set_b));
    }
}

// =============================================================================
// Clone Independence Law
// Description: Mutating a clone never touches the original
// =============================================================================

proptest! {
    #[test]
    fn prop_clone_independence_law(
        values in prop::collection::vec(-16_i64..16, 0..40),
        intruder in 100_i64..200
    ) {
        let original = set_of(&values);
        let clone = original.boxed_clone();

        clone.add(batch_of(&[intruder]));
        prop_assert!(!original.contains(&batch_of(&[intruder])));
    }
}

// =============================================================================
// Render Shape Law
// Description: The rendering is brace-wrapped with one element per comma gap
// =============================================================================

proptest! {
    #[test]
    fn prop_render_shape_law(values in prop::collection::vec(-16_i64..16, 0..40)) {
        let set = set_of(&values);
        let rendered = set.render();

        prop_assert!(rendered.starts_with('{'), "render must open with a brace");
        prop_assert!(rendered.ends_with('}'), "render must close with a brace");
        if set.is_empty() {
            prop_assert_eq!(rendered, "{}");
        } else {
            let separators = rendered.matches(',').count();
            prop_assert_eq!(separators, set.cardinality() - 1);
        }
    }
}
