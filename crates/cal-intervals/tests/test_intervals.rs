//! Algebraic laws of the interval types, checked on sampled segments.

use cal_intervals::{Intersect, LowerRay, Segment, SegmentSet, UpperRay};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = Segment<i32>> {
    (-1_000..1_000_i32, 0..200_i32).prop_map(|(min, len)| Segment::new(min, min + len).unwrap())
}

fn boundary_segment() -> impl Strategy<Value = Segment<i32>> {
    prop_oneof![
        (0..5_i32).prop_map(|k| Segment::new(i32::MAX - k, i32::MAX).unwrap()),
        (0..5_i32).prop_map(|k| Segment::new(i32::MIN, i32::MIN + k).unwrap()),
        segment(),
    ]
}

proptest! {
    #[test]
    fn intersect_with_self_is_identity(x in segment()) {
        prop_assert_eq!(x.intersect(&x), SegmentSet::from(x));
    }

    #[test]
    fn intersect_is_commutative(x in segment(), y in segment()) {
        prop_assert_eq!(x.intersect(&y), y.intersect(&x));
    }

    #[test]
    fn gap_is_empty_when_connected(x in segment(), y in segment()) {
        if x.is_connected(&y) {
            prop_assert!(x.gap(&y).is_empty());
        } else {
            let gap = x.gap(&y);
            prop_assert!(!gap.is_empty());
            let g = gap.segment().unwrap();
            prop_assert!(g.is_adjacent(&x));
            prop_assert!(g.is_adjacent(&y));
        }
    }

    #[test]
    fn connected_iff_overlapping_or_adjacent(x in boundary_segment(), y in boundary_segment()) {
        prop_assert_eq!(x.is_connected(&y), !x.is_disjoint(&y) || x.is_adjacent(&y));
    }

    #[test]
    fn disjoint_iff_empty_intersection(x in segment(), y in segment()) {
        prop_assert_eq!(x.is_disjoint(&y), x.intersect(&y).is_empty());
    }

    #[test]
    fn span_contains_both(x in segment(), y in segment()) {
        let s = x.span(&y);
        prop_assert!(x.is_subset_of(&s));
        prop_assert!(y.is_subset_of(&s));
        prop_assert!(s.count() >= x.count().max(y.count()));
    }

    #[test]
    fn rays_partition_the_line(max in any::<i32>(), v in any::<i32>()) {
        let lo = LowerRay::ending_at(max);
        match lo.complement() {
            Some(hi) => {
                prop_assert!(lo.intersect(&hi).is_empty());
                prop_assert!(lo.contains(v) != hi.contains(v));
            }
            None => prop_assert!(lo.contains(v)),
        }
    }

    #[test]
    fn ray_segment_intersection_matches_contains(x in segment(), min in -1_500..1_500_i32, v in -1_500..1_500_i32) {
        let ray = UpperRay::starting_at(min);
        let both = x.intersect(&ray);
        prop_assert_eq!(both.contains(v), x.contains(v) && ray.contains(v));
    }
}

#[test]
fn maximal_segment() {
    let all = Segment::<i32>::maximal();
    assert!(all.is_maximal());
    assert!(all.contains(i32::MIN) && all.contains(i32::MAX));
    assert_eq!(all.intersect(&all), SegmentSet::from(all));
}
