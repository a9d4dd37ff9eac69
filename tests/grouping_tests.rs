use playaxis::PlayAxisError;
use playaxis::core::{
    DataPoint, GroupOrdering, PlayAxisValue, PointId, PointKey, ValueClass, build_groups,
};

fn point(category: &str, value: impl Into<PlayAxisValue>) -> DataPoint {
    DataPoint::new(0.0, 0.0, PointKey::new(category, "series")).with_play_axis_value(value)
}

fn blank(category: &str) -> DataPoint {
    DataPoint::new(0.0, 0.0, PointKey::new(category, "series"))
}

#[test]
fn numeric_years_sort_ascending_regardless_of_input_order() {
    let points = vec![point("a", 2021), point("b", 2019), point("c", 2020)];
    let groups = build_groups(&points).expect("groups");

    assert_eq!(groups.value_class(), ValueClass::Number);
    assert_eq!(groups.ordering(), GroupOrdering::Numeric);
    assert_eq!(groups.captions(), vec!["2019", "2020", "2021"]);
    assert_eq!(groups.group_of(PointId(0)), Some(2));
    assert_eq!(groups.group_of(PointId(1)), Some(0));
}

#[test]
fn numeric_strings_compare_as_numbers_not_text() {
    let points = vec![point("a", "10"), point("b", "9"), point("c", "100")];
    let groups = build_groups(&points).expect("groups");

    assert_eq!(groups.ordering(), GroupOrdering::Numeric);
    assert_eq!(groups.captions(), vec!["9", "10", "100"]);
}

#[test]
fn date_strings_sort_chronologically_and_format_us_style() {
    let points = vec![
        point("a", "2020-03-01"),
        point("b", "2019-12-31"),
        point("c", "2020-01-15"),
    ];
    let groups = build_groups(&points).expect("groups");

    assert_eq!(groups.value_class(), ValueClass::Date);
    assert_eq!(groups.ordering(), GroupOrdering::Chronological);
    assert_eq!(
        groups.captions(),
        vec!["12/31/2019", "01/15/2020", "03/01/2020"]
    );
}

#[test]
fn month_names_sort_by_calendar_position() {
    let points = vec![
        point("a", "March"),
        point("b", "December"),
        point("c", "January"),
    ];
    let groups = build_groups(&points).expect("groups");

    assert_eq!(groups.value_class(), ValueClass::String);
    assert_eq!(groups.ordering(), GroupOrdering::MonthName);
    assert_eq!(groups.captions(), vec!["January", "March", "December"]);
}

#[test]
fn one_non_month_value_falls_back_to_lexicographic() {
    let points = vec![point("a", "March"), point("b", "Q1"), point("c", "January")];
    let groups = build_groups(&points).expect("groups");

    assert_eq!(groups.value_class(), ValueClass::String);
    assert_eq!(groups.ordering(), GroupOrdering::Lexicographic);
    assert_eq!(groups.captions(), vec!["January", "March", "Q1"]);
}

#[test]
fn lowercase_month_names_are_not_months() {
    let points = vec![point("a", "march"), point("b", "January")];
    let groups = build_groups(&points).expect("groups");

    assert_eq!(groups.ordering(), GroupOrdering::Lexicographic);
    assert_eq!(groups.captions(), vec!["January", "march"]);
}

#[test]
fn blank_group_leads_every_ordering() {
    let points = vec![point("a", "beta"), blank("b"), point("c", "alpha")];
    let groups = build_groups(&points).expect("groups");

    assert_eq!(groups.captions(), vec!["(Blank)", "alpha", "beta"]);
    assert_eq!(groups.get(0).and_then(|group| group.value()), None);
    assert!(groups.get(0).is_some_and(|group| group.contains(PointId(1))));
}

#[test]
fn members_keep_input_order_within_a_group() {
    let points = vec![
        point("a", 1),
        point("b", 2),
        point("c", 1),
        point("d", 2),
        point("e", 1),
    ];
    let groups = build_groups(&points).expect("groups");

    assert_eq!(groups.len(), 2);
    assert_eq!(
        groups.groups()[0].members(),
        &[PointId(0), PointId(2), PointId(4)]
    );
    assert_eq!(groups.groups()[1].members(), &[PointId(1), PointId(3)]);
}

#[test]
fn rebuilding_is_idempotent() {
    let points = vec![
        point("a", "2020-05"),
        point("b", "2019"),
        point("c", "2020-05"),
        blank("d"),
    ];
    let first = build_groups(&points).expect("first");
    let second = build_groups(&points).expect("second");

    assert_eq!(first, second);
}

#[test]
fn empty_point_list_is_an_empty_input_error() {
    let err = build_groups(&[]).expect_err("empty input");
    assert!(matches!(err, PlayAxisError::EmptyInput));
}

#[test]
fn values_naming_the_same_key_collapse_into_one_group() {
    let numbers = vec![point("a", 2020), point("b", "2020"), point("c", "2020.0")];
    let groups = build_groups(&numbers).expect("groups");
    assert_eq!(groups.captions(), vec!["2020"]);
    assert_eq!(groups.groups()[0].members(), &[PointId(0), PointId(1), PointId(2)]);

    let dates = vec![point("a", "2021-03"), point("b", "2020-12-31"), point("c", "2021-03-01")];
    let groups = build_groups(&dates).expect("groups");
    assert_eq!(groups.value_class(), ValueClass::Date);
    assert_eq!(groups.captions(), vec!["12/31/2020", "03/01/2021"]);
    assert_eq!(groups.groups()[1].members(), &[PointId(0), PointId(2)]);
    assert_eq!(groups.group_of(PointId(2)), Some(1));
}
