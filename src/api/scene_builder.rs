use crate::render::{
    CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::{AxisGeometry, PlayAxisEngine};

const LABEL_GAP_PX: f64 = 2.0;
const BUTTON_CORNER_RADIUS_PX: f64 = 4.0;
const PLAY_GLYPH: &str = "\u{25B6}";
const PAUSE_GLYPH: &str = "\u{275A}\u{275A}";

impl<R: Renderer> PlayAxisEngine<R> {
    /// Builds the draw list for the current state.
    ///
    /// Returns `None` before the first update delivered a layout. A disabled
    /// engine, or one without groups, yields an empty frame.
    #[must_use]
    pub fn build_render_frame(&self) -> Option<RenderFrame> {
        let layout = self.layout?;
        let mut frame = RenderFrame::new(layout.viewport);
        if !self.enabled {
            return Some(frame);
        }
        let Some(groups) = self.groups.as_ref() else {
            return Some(frame);
        };

        let style = self.config.style;
        let geometry = layout.axis_geometry(&self.config);

        for animated in self.animator.traces() {
            let points: Vec<(f64, f64)> = animated
                .polyline()
                .into_iter()
                .map(|position| (position.x, position.y))
                .collect();
            if points.len() < 2 || animated.total_length() <= 0.0 {
                continue;
            }
            frame.paths.push(PathPrimitive {
                points,
                stroke_width: style.path_stroke_width_px,
                color: style.path_color,
                dash_length: animated.total_length(),
                dash_offset: animated.dash_offset(),
            });
        }

        if let Some(scales) = self.scales.as_ref() {
            for (id, opacity) in self.bindings.rendered() {
                let Some(point) = self.points.get(id.index()) else {
                    continue;
                };
                if opacity <= 0.0 {
                    continue;
                }
                let position = scales.project(point.x, point.y);
                let color = if point.selected {
                    style.selected_point_color
                } else {
                    style.point_color
                };
                frame.points.push(CirclePrimitive::new(
                    position.x,
                    position.y,
                    style.point_radius_px,
                    color.with_opacity(opacity),
                ));
            }
        }

        frame.markers.extend(self.animator.markers().into_iter().map(|marker| {
            CirclePrimitive::new(
                marker.position.x,
                marker.position.y,
                style.marker_radius_px,
                style.marker_color,
            )
        }));

        self.push_axis(&mut frame, geometry, groups.len(), &groups.captions());
        self.push_button(&mut frame, geometry);

        let group_count = groups.len();
        frame.handle = Some(CirclePrimitive::new(
            geometry.group_x(self.timeline.display_index(), group_count),
            geometry.axis_y,
            style.handle_radius_px,
            style.handle_color,
        ));

        if let Some(caption) = self.caption.as_deref().filter(|text| !text.is_empty()) {
            frame.texts.push(TextPrimitive::new(
                caption,
                geometry.caption_x,
                geometry.caption_y,
                self.config.caption_font_size_px,
                style.caption_color,
                TextHAlign::Right,
            ));
        }

        Some(frame)
    }

    fn push_axis(
        &self,
        frame: &mut RenderFrame,
        geometry: AxisGeometry,
        group_count: usize,
        captions: &[String],
    ) {
        let style = self.config.style;
        if geometry.track_span_px() > 0.0 {
            frame.lines.push(LinePrimitive::new(
                geometry.track_start_x,
                geometry.axis_y,
                geometry.track_end_x,
                geometry.axis_y,
                style.axis_line_width_px,
                style.axis_line_color,
            ));
        }

        let label_y = geometry.axis_y + style.major_tick_height_px + LABEL_GAP_PX;
        for (index, caption) in captions.iter().enumerate() {
            let x = geometry.group_x(index, group_count);
            let major = self.labels.is_visible(index);
            let (height, color) = if major {
                (style.major_tick_height_px, style.major_tick_color)
            } else {
                (style.tick_height_px, style.tick_color)
            };
            frame.lines.push(LinePrimitive::new(
                x,
                geometry.axis_y,
                x,
                geometry.axis_y + height,
                1.0,
                color,
            ));
            if major && !caption.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    caption.as_str(),
                    x,
                    label_y,
                    self.config.label_font_size_px,
                    style.label_color,
                    TextHAlign::Center,
                ));
            }
        }
    }

    fn push_button(&self, frame: &mut RenderFrame, geometry: AxisGeometry) {
        let style = self.config.style;
        let size = style.button_size_px;
        frame.rects.push(
            RectPrimitive::new(
                geometry.button_x,
                geometry.button_y,
                size,
                size,
                style.button_color,
            )
            .with_corner_radius(BUTTON_CORNER_RADIUS_PX),
        );
        let glyph = if self.timeline.is_playing() {
            PAUSE_GLYPH
        } else {
            PLAY_GLYPH
        };
        frame.texts.push(TextPrimitive::new(
            glyph,
            geometry.button_x + size / 2.0,
            geometry.button_y + size * 0.2,
            size * 0.5,
            style.button_glyph_color,
            TextHAlign::Center,
        ));
    }
}
