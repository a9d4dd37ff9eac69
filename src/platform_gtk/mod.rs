use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::PlayAxisEngine;
use crate::render::{CairoContextRenderer, Renderer};

/// Hosts a play-axis engine inside a GTK `DrawingArea`.
///
/// Drawing goes through `render_on_cairo_context`; the widget frame clock
/// drives `advance`, and a drag gesture feeds scrubbing and the play button.
pub struct GtkPlayAxisAdapter<R: Renderer + CairoContextRenderer + 'static> {
    engine: Rc<RefCell<PlayAxisEngine<R>>>,
    drawing_area: gtk::DrawingArea,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkPlayAxisAdapter<R> {
    #[must_use]
    pub fn new(engine: PlayAxisEngine<R>) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        let draw_engine = Rc::clone(&engine);
        drawing_area.set_draw_func(move |_area, context, _width, _height| {
            if let Err(err) = draw_engine.borrow_mut().render_on_cairo_context(context) {
                warn!(error = %err, "play-axis draw failed");
            }
        });

        let last_frame_time = Rc::new(Cell::new(None::<i64>));
        let tick_engine = Rc::clone(&engine);
        drawing_area.add_tick_callback(move |area, frame_clock| {
            let now = frame_clock.frame_time();
            let elapsed = last_frame_time
                .replace(Some(now))
                .map_or(Duration::ZERO, |previous| {
                    Duration::from_micros(u64::try_from(now - previous).unwrap_or(0))
                });
            if tick_engine.borrow_mut().advance(elapsed) {
                area.queue_draw();
            }
            gtk::glib::ControlFlow::Continue
        });

        let drag = gtk::GestureDrag::new();
        let press_engine = Rc::clone(&engine);
        drag.connect_drag_begin(move |gesture, x, y| {
            if press_engine.borrow_mut().pointer_down(x, y) {
                if let Some(widget) = gesture.widget() {
                    widget.queue_draw();
                }
            }
        });
        let move_engine = Rc::clone(&engine);
        drag.connect_drag_update(move |gesture, offset_x, _offset_y| {
            let Some((start_x, _start_y)) = gesture.start_point() else {
                return;
            };
            if move_engine.borrow_mut().pointer_move(start_x + offset_x) {
                if let Some(widget) = gesture.widget() {
                    widget.queue_draw();
                }
            }
        });
        let release_engine = Rc::clone(&engine);
        drag.connect_drag_end(move |gesture, offset_x, _offset_y| {
            let Some((start_x, _start_y)) = gesture.start_point() else {
                return;
            };
            if release_engine.borrow_mut().pointer_up(start_x + offset_x) {
                if let Some(widget) = gesture.widget() {
                    widget.queue_draw();
                }
            }
        });
        drawing_area.add_controller(drag);

        Self {
            engine,
            drawing_area,
        }
    }

    /// Shared handle for host-side updates and selection changes.
    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<PlayAxisEngine<R>>> {
        Rc::clone(&self.engine)
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    pub fn queue_draw(&self) {
        self.drawing_area.queue_draw();
    }
}
