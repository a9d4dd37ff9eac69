use std::cmp::Ordering;

use indexmap::IndexMap;
use indexmap::map::Entry;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::{DataPoint, PlayAxisValue, PointId};
use crate::core::value_class::{ValueClass, classify, format_value, parse_date, parse_number};
use crate::error::{PlayAxisError, PlayAxisResult};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// How the groups ended up ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupOrdering {
    Numeric,
    Chronological,
    MonthName,
    Lexicographic,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum GroupKey {
    Blank,
    Number(OrderedFloat<f64>),
    Text(String),
}

impl GroupKey {
    fn of(value: Option<&PlayAxisValue>) -> Self {
        match value {
            None => Self::Blank,
            Some(PlayAxisValue::Number(number)) => Self::Number(OrderedFloat(*number)),
            Some(PlayAxisValue::Text(text)) => Self::Text(text.clone()),
        }
    }
}

/// Points sharing one play-axis value.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    value: Option<PlayAxisValue>,
    caption: String,
    members: SmallVec<[PointId; 8]>,
}

impl Group {
    /// Representative play-axis value; `None` for the blank group.
    #[must_use]
    pub fn value(&self) -> Option<&PlayAxisValue> {
        self.value.as_ref()
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    #[must_use]
    pub fn members(&self) -> &[PointId] {
        &self.members
    }

    #[must_use]
    pub fn contains(&self, id: PointId) -> bool {
        self.members.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Sorted play-axis groups plus per-point membership.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayAxisGroups {
    groups: Vec<Group>,
    class: ValueClass,
    ordering: GroupOrdering,
    membership: Vec<usize>,
}

impl PlayAxisGroups {
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[must_use]
    pub fn value_class(&self) -> ValueClass {
        self.class
    }

    #[must_use]
    pub fn ordering(&self) -> GroupOrdering {
        self.ordering
    }

    /// Index of the group that owns `id`.
    #[must_use]
    pub fn group_of(&self, id: PointId) -> Option<usize> {
        self.membership.get(id.index()).copied()
    }

    #[must_use]
    pub fn captions(&self) -> Vec<String> {
        self.groups.iter().map(|group| group.caption.clone()).collect()
    }
}

/// Partitions points into groups by play-axis value and sorts the groups.
///
/// Groups are first collected in first-seen order, then ordered numerically,
/// chronologically, by month name or lexicographically depending on what every
/// representative value supports. The blank group sorts first.
pub fn build_groups(points: &[DataPoint]) -> PlayAxisResult<PlayAxisGroups> {
    if points.is_empty() {
        return Err(PlayAxisError::EmptyInput);
    }

    let mut collected: IndexMap<GroupKey, GroupEntry> = IndexMap::new();
    for (index, point) in points.iter().enumerate() {
        let id = PointId(index);
        match collected.entry(GroupKey::of(point.play_axis_value.as_ref())) {
            Entry::Occupied(mut entry) => entry.get_mut().1.push(id),
            Entry::Vacant(entry) => {
                let mut members = SmallVec::new();
                members.push(id);
                entry.insert((point.play_axis_value.clone(), members));
            }
        }
    }

    let class = classify(collected.values().filter_map(|(value, _)| value.as_ref()));
    let mut entries = merge_equivalent_entries(collected, class);
    let ordering = sort_entries(&mut entries, class);

    let mut membership = vec![0; points.len()];
    let groups = entries
        .into_iter()
        .enumerate()
        .map(|(group_index, (value, members))| {
            for id in &members {
                membership[id.index()] = group_index;
            }
            Group {
                caption: format_value(value.as_ref(), class),
                value,
                members,
            }
        })
        .collect();

    Ok(PlayAxisGroups {
        groups,
        class,
        ordering,
        membership,
    })
}

/// Key a value reduces to once the class is known; `2020`, `"2020"` and
/// `"2020.0"` are the same number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ClassKey {
    Blank,
    Number(OrderedFloat<f64>),
    Instant(i64),
    Text(String),
}

impl ClassKey {
    fn of(value: Option<&PlayAxisValue>, class: ValueClass) -> Self {
        let Some(value) = value else {
            return Self::Blank;
        };
        let normalized = match class {
            ValueClass::Number => {
                parse_number(value).map(|number| Self::Number(OrderedFloat(number)))
            }
            ValueClass::Date => {
                parse_date(value).map(|time| Self::Instant(time.and_utc().timestamp_millis()))
            }
            ValueClass::String => None,
        };
        normalized.unwrap_or_else(|| Self::Text(value.to_string()))
    }
}

type GroupEntry = (Option<PlayAxisValue>, SmallVec<[PointId; 8]>);

/// Folds raw-value groups that classify to the same key. The first-seen raw
/// value stays representative; members keep point order.
fn merge_equivalent_entries(
    collected: IndexMap<GroupKey, GroupEntry>,
    class: ValueClass,
) -> Vec<GroupEntry> {
    let mut merged: IndexMap<ClassKey, GroupEntry> = IndexMap::with_capacity(collected.len());
    for (value, members) in collected.into_values() {
        match merged.entry(ClassKey::of(value.as_ref(), class)) {
            Entry::Occupied(mut entry) => {
                let existing = &mut entry.get_mut().1;
                existing.extend(members);
                existing.sort_unstable();
            }
            Entry::Vacant(entry) => {
                entry.insert((value, members));
            }
        }
    }
    merged.into_values().collect()
}

fn sort_entries<T>(entries: &mut [(Option<PlayAxisValue>, T)], class: ValueClass) -> GroupOrdering {
    match class {
        ValueClass::Number => {
            sort_by_key_with_blank_first(entries, |value| {
                parse_number(value).map(OrderedFloat)
            });
            GroupOrdering::Numeric
        }
        ValueClass::Date => {
            sort_by_key_with_blank_first(entries, |value| {
                parse_date(value).map(|time| time.and_utc().timestamp_millis())
            });
            GroupOrdering::Chronological
        }
        ValueClass::String => {
            let all_months = entries
                .iter()
                .filter_map(|(value, _)| value.as_ref())
                .all(|value| month_index(value).is_some());
            if all_months {
                sort_by_key_with_blank_first(entries, month_index);
                GroupOrdering::MonthName
            } else {
                sort_by_key_with_blank_first(entries, |value| Some(value.to_string()));
                GroupOrdering::Lexicographic
            }
        }
    }
}

fn sort_by_key_with_blank_first<T, K, F>(entries: &mut [(Option<PlayAxisValue>, T)], key: F)
where
    K: Ord,
    F: Fn(&PlayAxisValue) -> Option<K>,
{
    entries.sort_by(|(left, _), (right, _)| match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => key(left).cmp(&key(right)),
    });
}

/// Position of a full English month name in the calendar, case-sensitive.
#[must_use]
pub fn month_index(value: &PlayAxisValue) -> Option<usize> {
    match value {
        PlayAxisValue::Text(text) => MONTH_NAMES.iter().position(|month| month == text),
        PlayAxisValue::Number(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{GroupOrdering, build_groups, month_index};
    use crate::core::{DataPoint, PlayAxisValue, PointId, PointKey};
    use crate::error::PlayAxisError;

    fn point(value: impl Into<PlayAxisValue>) -> DataPoint {
        DataPoint::new(0.0, 0.0, PointKey::new("c", "s")).with_play_axis_value(value)
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = build_groups(&[]).expect_err("empty input must fail");
        assert!(matches!(err, PlayAxisError::EmptyInput));
    }

    #[test]
    fn first_seen_members_stay_in_input_order() {
        let points = vec![point(2.0), point(1.0), point(2.0)];
        let groups = build_groups(&points).expect("groups");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.groups()[1].members(), &[PointId(0), PointId(2)]);
        assert_eq!(groups.group_of(PointId(1)), Some(0));
    }

    #[test]
    fn blank_values_form_a_leading_group() {
        let mut blank = point(0.0);
        blank.play_axis_value = None;
        let points = vec![point(5.0), blank, point(3.0)];
        let groups = build_groups(&points).expect("groups");
        assert_eq!(groups.ordering(), GroupOrdering::Numeric);
        assert_eq!(groups.captions(), vec!["(Blank)", "3", "5"]);
    }

    #[test]
    fn equivalent_numbers_share_one_group() {
        let points = vec![point(2020), point("2020"), point("2019"), point("2020.0")];
        let groups = build_groups(&points).expect("groups");
        assert_eq!(groups.captions(), vec!["2019", "2020"]);
        assert_eq!(
            groups.groups()[1].members(),
            &[PointId(0), PointId(1), PointId(3)]
        );
        assert_eq!(groups.group_of(PointId(3)), Some(1));
    }

    #[test]
    fn month_lookup_is_case_sensitive() {
        assert_eq!(month_index(&PlayAxisValue::from("March")), Some(2));
        assert_eq!(month_index(&PlayAxisValue::from("march")), None);
    }
}
