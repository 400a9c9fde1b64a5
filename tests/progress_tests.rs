// Host-side tests for region parsing and progress mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod progress {
    include!("../src/core/progress.rs");
}

use progress::*;

const VH: f64 = 800.0;

fn layout(top: f64, height: f64) -> ElementLayout {
    ElementLayout { top, height }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn parses_trigger_points() {
    let p: TriggerPoint = "top top".parse().unwrap();
    assert_eq!(p, TriggerPoint::new(Anchor::Top, Anchor::Top));

    let p: TriggerPoint = "bottom   center".parse().unwrap();
    assert_eq!(p, TriggerPoint::new(Anchor::Bottom, Anchor::Center));

    let p: TriggerPoint = "top 85%".parse().unwrap();
    match p.viewport {
        Anchor::Fraction(f) => assert!(approx(f, 0.85)),
        other => panic!("expected fraction, got {other:?}"),
    }

    let p: TriggerPoint = "top -80".parse().unwrap();
    assert_eq!(p.viewport, Anchor::Px(-80.0));
    let p: TriggerPoint = "center 120px".parse().unwrap();
    assert_eq!(p.viewport, Anchor::Px(120.0));
}

#[test]
fn parses_region_ends() {
    assert_eq!("+=500".parse::<RegionEnd>(), Ok(RegionEnd::After(500.0)));
    assert_eq!(
        "bottom bottom".parse::<RegionEnd>(),
        Ok(RegionEnd::Point(TriggerPoint::new(
            Anchor::Bottom,
            Anchor::Bottom
        )))
    );
}

#[test]
fn rejects_malformed_trigger_points() {
    assert_eq!("".parse::<TriggerPoint>(), Err(ParseTriggerError::Empty));
    assert!(matches!(
        "top".parse::<TriggerPoint>(),
        Err(ParseTriggerError::MissingViewportAnchor(_))
    ));
    assert!(matches!(
        "middle top".parse::<TriggerPoint>(),
        Err(ParseTriggerError::BadAnchor(_))
    ));
    assert!(matches!(
        "top top top".parse::<TriggerPoint>(),
        Err(ParseTriggerError::BadAnchor(_))
    ));
    assert!(matches!(
        "+=lots".parse::<RegionEnd>(),
        Err(ParseTriggerError::BadAnchor(_))
    ));
    let msg = ParseTriggerError::BadAnchor("middle".into()).to_string();
    assert!(msg.contains("middle"));
}

#[test]
fn every_page_region_parses() {
    for (start, end) in [
        constants::HUMAN_REGION,
        constants::REVEAL_REGION,
        constants::HORIZONTAL_BG_REGION,
        constants::SLIDE_REGION,
        constants::SLIDE_ENTER_REGION,
        constants::SECTION_REVEAL_REGION,
    ] {
        assert!(RegionSpec::parse(start, end).is_ok(), "{start} / {end}");
    }
}

#[test]
fn full_section_region_measures_and_clamps() {
    let spec = RegionSpec::parse("top top", "bottom bottom").unwrap();
    let region = Region::measure(&spec, layout(1000.0, 2000.0), VH);
    assert_eq!(region, Region { start: 1000.0, end: 2200.0 });

    assert_eq!(region.progress(0.0), 0.0);
    assert_eq!(region.progress(1000.0), 0.0);
    assert!(approx(region.progress(1600.0), 0.5));
    assert_eq!(region.progress(2200.0), 1.0);
    assert_eq!(region.progress(9000.0), 1.0);
}

#[test]
fn progress_is_monotonic_in_scroll() {
    let spec = RegionSpec::parse("top bottom", "center center").unwrap();
    let region = Region::measure(&spec, layout(3000.0, 1200.0), VH);
    let mut prev = 0.0;
    for y in (0..6000).step_by(25) {
        let p = region.progress(y as f64);
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= prev);
        prev = p;
    }
}

#[test]
fn zero_length_region_is_a_step() {
    let spec = RegionSpec::parse("top 85%", "top 85%").unwrap();
    let region = Region::measure(&spec, layout(1000.0, 400.0), VH);
    assert!(approx(region.start, 1000.0 - 0.85 * VH));
    assert_eq!(region.progress(region.start - 1.0), 0.0);
    assert_eq!(region.progress(region.start), 1.0);
    assert_eq!(region.progress(region.start + 500.0), 1.0);
}

#[test]
fn relative_end_extends_past_start() {
    let spec = RegionSpec {
        start: "top top".parse().unwrap(),
        end: RegionEnd::After(500.0),
    };
    let region = Region::measure(&spec, layout(1000.0, 800.0), VH);
    assert_eq!(region, Region { start: 1000.0, end: 1500.0 });
    assert!(approx(region.progress(1250.0), 0.5));
}

#[test]
fn source_reports_only_changes_until_refreshed() {
    let spec = RegionSpec::parse("top top", "bottom bottom").unwrap();
    let mut src = ProgressSource::new(spec, layout(0.0, 1800.0), VH);
    assert_eq!(src.progress(), 0.0);

    assert_eq!(src.update(0.0), Some(0.0));
    assert_eq!(src.update(0.0), None);
    assert_eq!(src.update(500.0), Some(0.5));
    assert_eq!(src.update(500.0), None);

    // Taller viewport: same scroll, different progress, always re-reported
    src.refresh(layout(0.0, 1800.0), 1300.0);
    assert_eq!(src.region(), Region { start: 0.0, end: 500.0 });
    assert_eq!(src.update(500.0), Some(1.0));
}

#[test]
fn source_spec_can_be_replaced() {
    let spec = RegionSpec::parse("top top", "+=100").unwrap();
    let mut src = ProgressSource::new(spec, layout(200.0, 0.0), VH);
    assert_eq!(src.update(250.0), Some(0.5));

    src.set_spec(RegionSpec::parse("top top", "+=400").unwrap());
    src.refresh(layout(200.0, 0.0), VH);
    assert_eq!(src.update(250.0), Some(0.125));
}
