use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::grouping::PlayAxisGroups;
use crate::core::scale::ScalePair;
use crate::core::types::{DataPoint, PointId, PointKey, ScreenPoint};

/// Identity rule used to find a selected point's counterparts in other groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchPolicy {
    #[default]
    CategoryAndSeries,
    Category,
    Series,
}

impl MatchPolicy {
    #[must_use]
    pub fn matches(self, left: &PointKey, right: &PointKey) -> bool {
        match self {
            Self::CategoryAndSeries => left == right,
            Self::Category => left.category == right.category,
            Self::Series => left.series == right.series,
        }
    }
}

/// Path of one selected point through every play-axis group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    owner: PointId,
    owner_group: usize,
    slots: Vec<Option<PointId>>,
    positions: Vec<Option<ScreenPoint>>,
    cumulative_distances: Vec<Option<f64>>,
}

impl Trace {
    #[must_use]
    pub fn owner(&self) -> PointId {
        self.owner
    }

    /// Group index of the selected point that owns this trace.
    #[must_use]
    pub fn owner_group(&self) -> usize {
        self.owner_group
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<PointId>] {
        &self.slots
    }

    #[must_use]
    pub fn defined_slot_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Screen positions from the last `measure` call, index-aligned with slots.
    #[must_use]
    pub fn positions(&self) -> &[Option<ScreenPoint>] {
        &self.positions
    }

    /// Distance from the previous defined slot, stored at the later slot.
    #[must_use]
    pub fn cumulative_distances(&self) -> &[Option<f64>] {
        &self.cumulative_distances
    }

    #[must_use]
    pub fn total_distance(&self) -> f64 {
        self.cumulative_distances.iter().flatten().sum()
    }

    /// Sum of segment lengths for slots `0..=index`.
    #[must_use]
    pub fn distance_through(&self, index: usize) -> f64 {
        self.cumulative_distances
            .iter()
            .take(index.saturating_add(1))
            .flatten()
            .sum()
    }

    /// Projects the defined slots and recomputes segment lengths.
    ///
    /// Must run again whenever the scales change, since distances are in pixels.
    pub fn measure(&mut self, points: &[DataPoint], scales: &ScalePair) {
        self.positions = self
            .slots
            .iter()
            .map(|slot| {
                slot.and_then(|id| points.get(id.index()))
                    .map(|point| scales.project(point.x, point.y))
            })
            .collect();

        let mut previous: Option<ScreenPoint> = None;
        self.cumulative_distances = self
            .positions
            .iter()
            .map(|position| {
                let current = (*position)?;
                let distance = previous.map(|from| from.distance_to(current));
                previous = Some(current);
                distance
            })
            .collect();
    }
}

/// Builds one trace per selected point that has counterparts in other groups.
///
/// The selected point always fills its own group's slot. Elsewhere the first
/// group member matching under `policy` is taken. Traces with fewer than two
/// defined slots are dropped since they would render as a lone point.
pub fn trace_selection(
    groups: &PlayAxisGroups,
    points: &[DataPoint],
    selected: &[PointId],
    policy: MatchPolicy,
) -> Vec<Trace> {
    let mut traces = Vec::with_capacity(selected.len());

    for &owner in selected {
        let (Some(owner_point), Some(owner_group)) = (points.get(owner.index()), groups.group_of(owner))
        else {
            warn!(point = %owner, "selected point is not part of the current play-axis data");
            continue;
        };

        let slots: Vec<Option<PointId>> = groups
            .groups()
            .iter()
            .enumerate()
            .map(|(index, group)| {
                if index == owner_group {
                    return Some(owner);
                }
                group.members().iter().copied().find(|candidate| {
                    points
                        .get(candidate.index())
                        .is_some_and(|point| policy.matches(&owner_point.key, &point.key))
                })
            })
            .collect();

        let trace = Trace {
            owner,
            owner_group,
            positions: vec![None; slots.len()],
            cumulative_distances: vec![None; slots.len()],
            slots,
        };
        if trace.defined_slot_count() < 2 {
            trace!(point = %owner, "dropping trace without counterparts");
            continue;
        }
        traces.push(trace);
    }

    traces
}
