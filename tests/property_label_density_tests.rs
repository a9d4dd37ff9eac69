use playaxis::core::plan_label_density;
use proptest::prelude::*;

proptest! {
    #[test]
    fn visible_labels_fit_the_span_and_start_at_zero(
        count in 1usize..200,
        label_width in 1.0f64..120.0,
        margin in 0.0f64..20.0,
        span in 1.0f64..4_000.0
    ) {
        let names: Vec<String> = (0..count).map(|index| format!("g{index}")).collect();
        let measurer = move |_text: &str, _font_size_px: f64| label_width;
        let map = plan_label_density(&names, span, margin, 11.0, &measurer);

        prop_assert_eq!(map.len(), count);
        prop_assert!(map.is_visible(0));

        let visible = map.visible_indices();
        let capacity = ((span / (label_width + margin)).floor() as usize).max(1);
        prop_assert!(visible.len() <= capacity);
        let factor = map.thinning_factor();
        prop_assert!(visible.iter().all(|index| index % factor == 0));
        prop_assert!(visible.windows(2).all(|pair| pair[1] - pair[0] == factor));
    }

    #[test]
    fn wider_spans_never_hide_more_labels(
        count in 1usize..120,
        span in 10.0f64..2_000.0,
        extra in 0.0f64..2_000.0
    ) {
        let names: Vec<String> = (0..count).map(|index| format!("{}", 1900 + index)).collect();
        let measurer = |_text: &str, _font_size_px: f64| 30.0;
        let narrow = plan_label_density(&names, span, 10.0, 11.0, &measurer);
        let wide = plan_label_density(&names, span + extra, 10.0, 11.0, &measurer);

        prop_assert!(wide.visible_indices().len() >= narrow.visible_indices().len());
    }
}
