use approx::assert_relative_eq;
use curvelet_view::{
    OffsetResolver, Selection, TransformView, ViewError, ViewOptions, WedgeLayout, WedgeShape,
};
use num_complex::Complex64;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Arc;

/// Scale 0 spans [0, 40) as two 4x5 wedges; scale 1 fills the rest.
fn make_scenario() -> (WedgeLayout, Vec<i64>) {
    let layout = WedgeLayout::new(vec![vec![[4, 5], [4, 5]], vec![[6, 10]]]);
    (layout, (0..100).collect())
}

/// Coarse scale, two directional scales, and a finer scale with mixed shapes.
fn make_layout() -> WedgeLayout {
    WedgeLayout::new(vec![
        vec![[3, 3]],
        vec![[4, 2], [2, 4], [4, 2], [2, 4]],
        vec![[5, 3], [3, 5], [5, 3], [3, 5], [5, 3], [3, 5], [5, 3], [3, 5]],
        vec![[1, 7]],
    ])
}

fn make_random(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

#[test]
fn test_scenario_wedge_and_scale_agree() {
    let (layout, data) = make_scenario();
    let view = TransformView::new(data.as_slice(), &layout);

    let direct = view.at(&[0, 0]).unwrap().into_wedge().unwrap();
    assert_eq!(direct.shape(), [4, 5]);
    assert_eq!(direct.as_slice(), &(0..20).collect::<Vec<i64>>()[..]);

    let scale = view.at(&[0]).unwrap().into_scale().unwrap();
    let through_scale = scale.at(&[0]).unwrap().into_wedge().unwrap();
    assert_eq!(through_scale, direct);

    let second = scale.wedge(1).unwrap();
    assert_eq!(second.as_slice(), &(20..40).collect::<Vec<i64>>()[..]);
}

#[test]
fn test_every_wedge_matches_resolver_slice() {
    let layout = make_layout();
    let data = make_random(layout.len(), 7);
    let view = TransformView::new(data.as_slice(), &layout);
    for s in 0..layout.num_scales() {
        for a in 0..layout.num_angles(s).unwrap() {
            let wedge = view.wedge(s, a).unwrap();
            let range = layout.wedge_range(s, a).unwrap();
            assert_eq!(wedge.shape(), layout.sizes()[s][a]);
            assert_eq!(wedge.as_slice(), &data[range]);
        }
    }
}

#[test]
fn test_every_coefficient_matches_resolver_offset() {
    let layout = make_layout();
    let data = make_random(layout.len(), 11);
    let view = TransformView::new(data.as_slice(), &layout);
    for s in 0..layout.num_scales() {
        let scale = view.scale(s).unwrap();
        for a in 0..layout.num_angles(s).unwrap() {
            let [rows, cols] = layout.wedge_shape(s, a).unwrap();
            for r in 0..rows {
                for c in 0..cols {
                    let expected = data[layout.offset(s, a, r, c).unwrap()];
                    assert_relative_eq!(view.coefficient(s, a, r, c).unwrap(), expected);
                    assert_relative_eq!(scale.coefficient(a, r, c).unwrap(), expected);
                }
            }
        }
    }
}

#[test]
fn test_aliasing_through_borrowed_view() {
    let layout = make_layout();
    let mut data = make_random(layout.len(), 3);
    {
        let mut view = TransformView::new(data.as_mut_slice(), &layout);
        view.set(2, 5, 2, 4, 42.0).unwrap();
        let mut fine = view.scale_mut(3).unwrap();
        fine.set(0, 0, 6, -42.0).unwrap();
    }
    assert_eq!(data[layout.offset(2, 5, 2, 4).unwrap()], 42.0);
    assert_eq!(data[layout.len() - 1], -42.0);
}

#[test]
fn test_copy_law() {
    let layout = make_layout();
    let data = make_random(layout.len(), 5);
    let original = data.clone();
    let view = TransformView::new(data.as_slice(), &layout);

    let mut wedge = view.wedge(1, 2).unwrap();
    wedge[[0, 0]] = 100.0;
    let mut row = view.row(2, 0, 1).unwrap();
    row[0] = 100.0;
    let mut from_scale = view.scale(2).unwrap().wedge(3).unwrap();
    from_scale[[1, 1]] = 100.0;

    assert_eq!(view.as_slice(), original.as_slice());
    assert_eq!(data, original);
}

#[test]
fn test_zero_arity_is_identity() {
    let layout = make_layout();
    let data = make_random(layout.len(), 9);
    let view = TransformView::new(data.as_slice(), &layout);
    let same = view.at(&[]).unwrap().into_transform().unwrap();
    assert_eq!(same.as_slice(), view.as_slice());
    assert_eq!(same.wedge(1, 1).unwrap(), view.wedge(1, 1).unwrap());

    let scale = view.scale(1).unwrap();
    let same_scale = scale.at(&[]).unwrap().into_scale().unwrap();
    assert_eq!(same_scale.as_slice(), scale.as_slice());
    assert_eq!(same_scale.base(), scale.base());
}

#[test]
fn test_selection_variants() {
    let (layout, data) = make_scenario();
    let view = TransformView::new(data.as_slice(), &layout);
    assert!(matches!(view.at(&[]).unwrap(), Selection::Transform(_)));
    assert!(matches!(view.at(&[1]).unwrap(), Selection::Scale(_)));
    assert!(matches!(view.at(&[1, 0]).unwrap(), Selection::Wedge(_)));
    assert!(matches!(view.at(&[1, 0, 2]).unwrap(), Selection::Row(_)));
    assert!(matches!(
        view.at(&[1, 0, 2, 3]).unwrap(),
        Selection::Coefficient(63)
    ));
}

#[test]
fn test_unsupported_arity_names_limits() {
    let (layout, data) = make_scenario();
    let view = TransformView::new(data.as_slice(), &layout);
    let err = view.at(&[0; 6]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported coordinate arity 6: expected 0 to 4 components"
    );
    let err = view.scale(0).unwrap().at(&[0; 4]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported coordinate arity 4: expected 0 to 3 components"
    );
}

#[test]
fn test_resolver_error_is_transparent() {
    let (layout, data) = make_scenario();
    let view = TransformView::new(data.as_slice(), &layout);
    let err = view.row(0, 1, 4).unwrap_err();
    assert_eq!(err.to_string(), "row 4 out of range for 4 rows in wedge (0, 1)");
}

#[test]
fn test_unbound_view_reports_missing_resolver() {
    let (_, data) = make_scenario();
    let view = TransformView::<_, WedgeLayout>::unbound(data.as_slice());
    assert!(matches!(view.wedge(0, 0), Err(ViewError::NoResolver)));
    assert!(matches!(view.num_scales(), Err(ViewError::NoResolver)));
}

#[test]
fn test_shared_resolver_across_owned_views() {
    let layout = Arc::new(make_layout());
    let data = make_random(layout.len(), 21);
    let a = TransformView::new(data.clone(), Arc::clone(&layout));
    let b = a.to_owned_view();
    assert_eq!(Arc::strong_count(&layout), 3);
    assert_eq!(a.wedge(2, 7).unwrap(), b.wedge(2, 7).unwrap());
}

#[test]
fn test_with_options_copy_is_independent() {
    let layout = make_layout();
    let data = make_random(layout.len(), 13);
    let copied = TransformView::with_options(&data, &layout, ViewOptions::copied());
    let mut owned = copied.to_owned_view();
    owned.set(0, 0, 0, 0, 9.0).unwrap();
    assert_relative_eq!(copied.coefficient(0, 0, 0, 0).unwrap(), data[0]);
}

#[test]
fn test_cast_preserves_addressing() {
    let (layout, data) = make_scenario();
    let view = TransformView::new(data.as_slice(), &layout);
    let floats = view.cast::<f32>().unwrap();
    let z = floats.cast::<Complex64>().unwrap();
    for s in 0..2 {
        for a in 0..layout.num_angles(s).unwrap() {
            let ints = view.wedge(s, a).unwrap();
            let zs = z.wedge(s, a).unwrap();
            for (i, w) in ints.iter().zip(zs.iter()) {
                assert_relative_eq!(w.re, *i as f64);
                assert_eq!(w.im, 0.0);
            }
        }
    }
}

#[test]
fn test_complex_buffer() {
    let layout = make_layout();
    let mut rng = StdRng::seed_from_u64(17);
    let view = TransformView::from_elements(
        (0..layout.len()).map(|_| Complex64::new(rng.gen(), rng.gen())),
        &layout,
    );
    let rebuilt: Vec<Complex64> = view
        .scales()
        .unwrap()
        .flat_map(|s| {
            let s = s.unwrap();
            s.wedges()
                .unwrap()
                .flat_map(|w| w.unwrap().into_vec())
                .collect::<Vec<_>>()
        })
        .collect();
    assert_eq!(rebuilt.as_slice(), view.as_slice());
}

fn sizes_strategy() -> impl Strategy<Value = Vec<Vec<WedgeShape>>> {
    prop::collection::vec(
        prop::collection::vec((0usize..5, 0usize..5).prop_map(|(r, c)| [r, c]), 1..6),
        1..5,
    )
}

proptest! {
    #[test]
    fn prop_scale_then_angle_equals_direct(sizes in sizes_strategy()) {
        let layout = WedgeLayout::new(sizes);
        let data: Vec<i64> = (0..layout.len() as i64).map(|x| 3 * x + 1).collect();
        let view = TransformView::new(data.as_slice(), &layout);
        for s in 0..layout.num_scales() {
            let scale = view.scale(s).unwrap();
            for a in 0..layout.num_angles(s).unwrap() {
                let direct = view.wedge(s, a).unwrap();
                prop_assert_eq!(direct.shape(), layout.wedge_shape(s, a).unwrap());
                prop_assert_eq!(&scale.wedge(a).unwrap(), &direct);
                for r in 0..direct.nrows() {
                    prop_assert_eq!(scale.row(a, r).unwrap(), view.row(s, a, r).unwrap());
                    for c in 0..direct.ncols() {
                        let offset = layout.offset(s, a, r, c).unwrap();
                        prop_assert_eq!(view.coefficient(s, a, r, c).unwrap(), data[offset]);
                        prop_assert_eq!(scale.coefficient(a, r, c).unwrap(), data[offset]);
                        prop_assert_eq!(direct[[r, c]], data[offset]);
                    }
                }
            }
        }
    }

    #[test]
    fn prop_arity_beyond_limits_is_rejected(extra in 5usize..9) {
        let (layout, data) = make_scenario();
        let view = TransformView::new(data.as_slice(), &layout);
        let coord = vec![0; extra];
        let is_arity_error = matches!(
            view.at(&coord),
            Err(ViewError::UnsupportedArity { max: 4, .. })
        );
        prop_assert!(is_arity_error);
    }
}
