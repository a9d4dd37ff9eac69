pub mod grouping;
pub mod label_density;
pub mod scale;
pub mod trace;
pub mod types;
pub mod value_class;

pub use grouping::{Group, GroupOrdering, MONTH_NAMES, PlayAxisGroups, build_groups, month_index};
pub use label_density::{
    ApproxTextMeasurer, LABEL_MARGIN_PX, LabelVisibilityMap, TextMeasurer, plan_label_density,
};
pub use scale::{LinearScale, ScalePair};
pub use trace::{MatchPolicy, Trace, trace_selection};
pub use types::{DataPoint, PlayAxisValue, PointId, PointKey, ScreenPoint, Viewport};
pub use value_class::{
    BLANK_CAPTION, ValueClass, classify, format_value, parse_date, parse_number,
};
