use super::*;
use pullrefresh_foundation::{ListProbe, RefreshableView};

struct Plain;

impl RefreshableView for Plain {
    fn height(&self) -> f32 {
        100.0
    }
}

#[test]
fn defaults_match_documented_values() {
    let options = Options::builder().build().expect("defaults are valid");

    assert_eq!(options.header_layout(), DEFAULT_HEADER_LAYOUT);
    assert_eq!(options.scroll_distance(), 0.5);
    assert!(!options.refresh_on_release());
    assert!(options.refresh_minimize());
    assert_eq!(options.minimize_delay(), Duration::from_millis(1000));
    assert_eq!(options.touch_slop(), TOUCH_SLOP);
    assert_eq!(options.show_animation(), Some(AnimationSpec::fade_in()));
    assert_eq!(options.hide_animation(), Some(AnimationSpec::fade_out()));
    assert!(options.probes().is_empty());
    assert!(!options.has_custom_transformer());
}

#[test]
fn scroll_distance_must_be_in_unit_interval() {
    for bad in [0.0, -0.25, 1.5, f32::NAN] {
        let result = Options::builder().scroll_distance(bad).build();
        assert!(
            matches!(result, Err(ConfigurationError::InvalidScrollDistance(_))),
            "{bad} should be rejected"
        );
    }

    let full = Options::builder().scroll_distance(1.0).build().unwrap();
    assert_eq!(full.scroll_distance(), 1.0);
}

#[test]
fn builder_setters_are_kept() {
    let options = Options::builder()
        .header_layout("compact_header")
        .refresh_on_release(true)
        .refresh_minimize(false)
        .minimize_delay(Duration::from_millis(250))
        .touch_slop(Dp(12.0))
        .show_animation(None)
        .hide_animation(Some(AnimationSpec::linear(100)))
        .build()
        .unwrap();

    assert_eq!(options.header_layout(), "compact_header");
    assert!(options.refresh_on_release());
    assert!(!options.refresh_minimize());
    assert_eq!(options.minimize_delay(), Duration::from_millis(250));
    assert_eq!(options.touch_slop(), Dp(12.0));
    assert_eq!(options.show_animation(), None);
    assert_eq!(
        options.hide_animation().map(|spec| spec.duration),
        Some(Duration::from_millis(100))
    );
}

#[test]
fn custom_probe_is_registered_in_order() {
    let options = Options::builder()
        .probe(|_view: &dyn RefreshableView| true, ListProbe)
        .probe(|_view: &dyn RefreshableView| false, |_view: &dyn RefreshableView| true)
        .build()
        .unwrap();

    assert_eq!(options.probes().len(), 2);
    let probe = options.probes().resolve(&Plain).expect("first predicate matches");
    // ListProbe answers false for views without list content.
    assert!(!probe.is_scrolled_to_top(&Plain));
}

#[test]
fn custom_transformer_is_taken_once() {
    let mut options = Options::builder()
        .header_transformer(crate::header::DefaultHeaderTransformer::new())
        .build()
        .unwrap();

    assert!(options.has_custom_transformer());
    assert!(options.take_header_transformer().is_some());
    assert!(options.take_header_transformer().is_none());
}
