use floem_color_selectors::{
    BarSpec, ColorModel, ColorSelector, ColorWheel, Harmony, Hsva, MarkerShape, PixelColor,
    PixelPoint, PixelRect, PointerButton, PreferenceStore, Spectrum, TintShadeTone,
    WheelGeometry,
};

fn wheel(discrete: bool) -> ColorSelector<ColorWheel> {
    let mut s = ColorSelector::new(ColorWheel::new(discrete, ColorModel::Rgb, Harmony::None))
        .with_bars(BarSpec::none())
        .with_color(PixelColor::hsva(0.0, 50.0, 80.0, 255));
    s.resize(PixelRect::new(0, 0, 120, 150));
    s
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

#[test]
fn spectrum_top_edge_click() {
    let mut s = ColorSelector::new(Spectrum::default())
        .with_bars(BarSpec::none())
        .with_color(PixelColor::hsva(180.0, 50.0, 80.0, 255));
    s.resize(PixelRect::new(0, 0, 200, 100));

    let outcome = s.pointer_down(PixelPoint::new(100, 0), PointerButton::Primary);
    let change = outcome.change.expect("drag emits a change");
    assert!((change.color.hue() - 180.0).abs() <= 1.0, "hue = {}", change.color.hue());
    assert_eq!(change.color.value(), 100.0);
    assert_eq!(change.color.saturation(), 0.0);
    assert_eq!(s.color(), PixelColor::from(change.color));
    assert!(s.pointer_up());
}

#[cfg(feature = "alpha")]
#[test]
fn alpha_bar_click() {
    let mut s = ColorSelector::new(TintShadeTone).with_color(PixelColor::hsva(30.0, 40.0, 50.0, 255));
    s.resize(PixelRect::new(0, 0, 200, 100));
    assert_eq!(s.layout().bar_count(), 2);

    let band = s.layout().bar_band(1).expect("alpha band");
    let outcome = s.pointer_down(PixelPoint::new(50, band.y + 2), PointerButton::Primary);
    let color = outcome.change.expect("drag emits a change").color;
    assert_eq!(color.alpha(), 64);
    assert_eq!((color.hue(), color.saturation(), color.value()), (30.0, 40.0, 50.0));

    // The drag stays on the alpha bar even when the pointer wanders off it.
    let far = s.pointer_move(PixelPoint::new(500, 0)).change.expect("still captured");
    assert_eq!(far.color.alpha(), 255);
}

#[test]
fn wheel_forward_and_inverse_agree() {
    let mut s = wheel(false);
    let geometry = WheelGeometry::of(s.layout());
    let radius = geometry.radius as f64;
    let center = (geometry.center.x as f64, geometry.center.y as f64);

    let mut checked = 0;
    for y in (0..150).step_by(5) {
        for x in (0..120).step_by(5) {
            let d = distance((x as f64, y as f64), center);
            if d >= radius - 1.0 {
                continue;
            }
            s.pointer_down(PixelPoint::new(x, y), PointerButton::Primary);
            s.pointer_up();
            let ring = s.markers()[0];
            assert_eq!(ring.shape, MarkerShape::Ring);
            let off = distance((ring.x, ring.y), (x as f64, y as f64));
            assert!(off < 3.0, "({x}, {y}) came back as ({}, {})", ring.x, ring.y);
            checked += 1;
        }
    }
    assert!(checked > 100);
}

#[test]
fn discrete_wheel_marker_stays_within_one_step() {
    let mut s = wheel(true);
    let geometry = WheelGeometry::of(s.layout());
    let radius = geometry.radius as f64;
    let center = (geometry.center.x as f64, geometry.center.y as f64);
    // Half a 30° hue step at the rim plus one 20% saturation step.
    let tolerance = 0.3 * radius;

    let mut checked = 0;
    for y in 0..150 {
        for x in 0..120 {
            if distance((x as f64, y as f64), center) >= radius - 1.0 {
                continue;
            }
            s.pointer_down(PixelPoint::new(x, y), PointerButton::Primary);
            s.pointer_up();
            let ring = s.markers()[0];
            let off = distance((ring.x, ring.y), (x as f64, y as f64));
            assert!(off <= tolerance, "({x}, {y}) came back {off:.2} px away");
            checked += 1;
        }
    }
    assert!(checked > 10_000);
}

#[test]
fn drag_far_outside_the_window_stays_in_range() {
    let far = [
        PixelPoint::from_f64(f64::INFINITY, f64::NEG_INFINITY),
        PixelPoint::from_f64(-1e300, 1e300),
    ];

    let mut spectrum = ColorSelector::new(Spectrum::default()).with_color(PixelColor::hsva(10.0, 50.0, 50.0, 255));
    spectrum.resize(PixelRect::new(0, 0, 200, 100));
    spectrum.pointer_down(PixelPoint::new(20, 20), PointerButton::Primary);
    for pos in far {
        let c = spectrum.pointer_move(pos).change.expect("still captured").color;
        assert!((0.0..=360.0).contains(&c.hue()));
        assert!((0.0..=100.0).contains(&c.value()));
    }

    let mut w = wheel(false);
    w.pointer_down(PixelPoint::new(60, 79), PointerButton::Primary);
    for pos in far {
        assert!(w.pointer_move(pos).change.is_none());
        assert!(w.color_by_position(pos).is_mask());
    }
}

#[test]
fn wheel_outside_radius_is_mask() {
    for discrete in [false, true] {
        let s = wheel(discrete);
        let geometry = WheelGeometry::of(s.layout());
        let radius = geometry.radius as f64;
        let center = (geometry.center.x as f64, geometry.center.y as f64);
        let base = Hsva::opaque(0.0, 0.0, 100.0);
        for y in -10..160 {
            for x in -10..130 {
                let d = distance((x as f64, y as f64), center);
                if d >= radius + 2.0 {
                    let c = s.law().wheel_color(s.layout(), PixelPoint::new(x, y), base);
                    assert!(c.is_mask(), "({x}, {y}) at distance {d}");
                }
            }
        }
    }
}

#[test]
fn ryb_round_trip_within_one_degree() {
    for h in 0..360 {
        let back = ColorModel::Ryb.convert_hue(ColorModel::Ryb.convert_hue(h, 1), -1);
        let diff = (back - h).rem_euclid(360);
        assert!(diff.min(360 - diff) <= 1, "{h} -> {back}");
    }
}

#[test]
fn bar_count_is_monotonic() {
    let spec = BarSpec {
        thickness: 8,
        max_bars: 2,
    };
    let mut previous = 0;
    for h in 0..200 {
        let count = spec.count_for(h);
        assert!((0..=2).contains(&count));
        assert!(count >= previous, "count dropped at height {h}");
        previous = count;
    }
    assert_eq!(previous, 2);
}

#[test]
fn harmony_swatch_counts() {
    let base = Hsva::opaque(40.0, 60.0, 70.0);
    assert_eq!(Harmony::None.colors(ColorModel::Rgb, base).len(), 1);
    assert_eq!(Harmony::Square.colors(ColorModel::Rgb, base).len(), 4);
    assert_eq!(Harmony::Square.colors(ColorModel::Ryb, base).len(), 4);
    assert_eq!(Harmony::Square.colors(ColorModel::Rgb, Hsva::opaque(40.0, 0.0, 70.0)).len(), 1);
    assert_eq!(Harmony::Square.colors(ColorModel::Rgb, Hsva::opaque(40.0, 60.0, 0.0)).len(), 1);
}

#[test]
fn wheel_options_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("color_bar.json");

    let mut first = ColorWheel::with_preferences(PreferenceStore::load(&path));
    first.set_discrete(true);
    first.set_model(ColorModel::Ryb);
    first.set_harmony(Harmony::SplitComplementary);

    let second = ColorWheel::with_preferences(PreferenceStore::load(&path));
    assert!(second.is_discrete());
    assert_eq!(second.model(), ColorModel::Ryb);
    assert_eq!(second.harmony(), Harmony::SplitComplementary);
}

#[test]
fn harmony_pick_does_not_move_the_wheel() {
    let mut s = ColorSelector::new(ColorWheel::new(false, ColorModel::Rgb, Harmony::Complementary))
        .with_bars(BarSpec::none())
        .with_color(PixelColor::hsva(0.0, 80.0, 80.0, 255));
    s.resize(PixelRect::new(0, 0, 120, 150));
    let base = s.color();

    // Second swatch: the complement.
    let swatches = s.swatches();
    assert_eq!(swatches.len(), 2);
    let second = swatches[1].rect;
    let change = s
        .pointer_down(PixelPoint::new(second.x + 1, second.y + 1), PointerButton::Secondary)
        .change
        .expect("swatch pick emits a change");
    assert_eq!(change.button, PointerButton::Secondary);
    assert!((change.color.hue() - 180.0).abs() <= 1.0);
    s.pointer_up();

    // The host echoes the picked color back; the wheel keeps its base.
    assert!(!s.set_color(change.color.into()));
    assert_eq!(s.color(), base);
}
