//! 연도 구간 보정 규칙 테스트.
use salary_inflation::inflation::{RateTable, YearBound, YearRange, MAX_YEAR, MIN_YEAR};

#[test]
fn reversed_bounds_are_swapped() {
    assert_eq!(YearRange::new(2022, 2010), YearRange { from: 2010, to: 2022 });
    assert_eq!(YearRange::new(2010, 2010).year_count(), 1);
}

#[test]
fn editing_from_past_to_snaps_to() {
    let r = YearRange::new(2005, 2010).apply_edit(YearBound::From, 2015);
    assert_eq!(r, YearRange { from: 2015, to: 2015 });
}

#[test]
fn editing_to_below_from_snaps_from() {
    let r = YearRange::new(2005, 2010).apply_edit(YearBound::To, 2001);
    assert_eq!(r, YearRange { from: 2001, to: 2001 });
}

#[test]
fn edits_inside_range_keep_other_bound() {
    let r = YearRange::new(2005, 2010);
    assert_eq!(r.apply_edit(YearBound::From, 2008), YearRange { from: 2008, to: 2010 });
    assert_eq!(r.apply_edit(YearBound::To, 2006), YearRange { from: 2005, to: 2006 });
}

#[test]
fn no_single_edit_inverts_range() {
    let t = RateTable::bundled().unwrap();
    let years = t.years();
    for &a in &years {
        for &b in &years {
            for &edit in &years {
                let start = YearRange::new(a, b);
                for bound in [YearBound::From, YearBound::To] {
                    let r = start.apply_edit(bound, edit);
                    assert!(r.from <= r.to, "{start:?} {bound:?} {edit} -> {r:?}");
                }
            }
        }
    }
}

#[test]
fn full_and_clamped_ranges_follow_table() {
    let t = RateTable::bundled().unwrap();
    let full = YearRange::full(&t);
    assert_eq!((full.from, full.to), (t.min_year(), t.max_year()));
    assert!(full.is_covered_by(&t));
    let wide = YearRange::new(1950, 2100);
    assert!(!wide.is_covered_by(&t));
    assert_eq!(wide.clamp_to(&t), full);
}

#[test]
fn extreme_bounds_are_counted_without_overflow() {
    let t = RateTable::bundled().unwrap();
    let all = YearRange::new(i32::MAX, i32::MIN);
    assert_eq!(all.year_count(), 1u64 << 32);
    assert!(!all.is_covered_by(&t));
    assert_eq!(all.limited(), YearRange { from: MIN_YEAR, to: MAX_YEAR });
    assert_eq!(YearRange::new(2010, 2012).limited(), YearRange::new(2010, 2012));
}
