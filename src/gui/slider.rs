use crate::config::SliderConfig;
use crate::geometry::Point;
use crate::gui::theme::SliderColors;
use crate::slider::{self, SliderModel, UpdateAction};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// The embeddable circular slider: a drawing area with a drag gesture bound
/// to a [`SliderModel`]. Hosts embed it as a child component and observe
/// value changes through [`SliderOutput`].
pub struct SliderWidget {
    model: Rc<RefCell<SliderModel>>,
    tracking: bool,
    drag_origin: Point,
    drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum SliderMsg {
    /// Drag started at an absolute widget-local point.
    DragBegin(Point),
    /// Drag moved by an offset relative to the drag origin.
    DragUpdate(Point),
    DragEnd,
    Resize(i32, i32),
    SetValue(f64),
    ApplyConfig(SliderConfig),
}

#[derive(Debug)]
pub enum SliderOutput {
    ValueChanged(f64),
}

#[relm4::component(pub)]
impl SimpleComponent for SliderWidget {
    type Init = SliderModel;
    type Input = SliderMsg;
    type Output = SliderOutput;

    view! {
        #[root]
        #[name = "drawing_area"]
        gtk::DrawingArea {
            set_hexpand: true,
            set_vexpand: true,
            set_content_width: 320,
            set_content_height: 320,
            add_css_class: "ringdial-drawing-area",

            connect_resize[sender] => move |_, width, height| {
                sender.input(SliderMsg::Resize(width, height));
            },

            add_controller = gtk::GestureDrag {
                connect_drag_begin[sender] => move |_, x, y| {
                    sender.input(SliderMsg::DragBegin(Point::new(x, y)));
                },
                connect_drag_update[sender] => move |_, dx, dy| {
                    sender.input(SliderMsg::DragUpdate(Point::new(dx, dy)));
                },
                connect_drag_end[sender] => move |_, _, _| {
                    sender.input(SliderMsg::DragEnd);
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = SliderWidget {
            model: Rc::new(RefCell::new(init)),
            tracking: false,
            drag_origin: Point::default(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let state_draw = model.model.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let style_context = drawing_area.style_context();
                let colors = SliderColors::from_context(&style_context);
                if let Err(e) = slider::draw(cr, &state_draw.borrow(), &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        // construction-time value counts as a change for observers
        let initial = model.model.borrow().current_value();
        let _ = sender.output(SliderOutput::ValueChanged(initial));

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            SliderMsg::DragBegin(point) => {
                let accepted = {
                    let mut model = self.model.borrow_mut();
                    model.contains_point(point) && model.begin_tracking(point)
                };
                if accepted {
                    self.tracking = true;
                    self.drag_origin = point;
                } else {
                    log::debug!("drag at ({:.1}, {:.1}) missed the handle", point.x, point.y);
                }
            }
            SliderMsg::DragUpdate(offset) => {
                if !self.tracking {
                    return;
                }
                let point = Point::new(
                    self.drag_origin.x + offset.x,
                    self.drag_origin.y + offset.y,
                );
                let action = self.model.borrow_mut().move_handle(point);
                self.apply(action, &sender);
            }
            SliderMsg::DragEnd => {
                self.tracking = false;
            }
            SliderMsg::Resize(width, height) => {
                let action = self
                    .model
                    .borrow_mut()
                    .set_bounds(f64::from(width), f64::from(height));
                self.apply(action, &sender);
            }
            SliderMsg::SetValue(value) => {
                let action = self.model.borrow_mut().set_value(value);
                self.apply(action, &sender);
            }
            SliderMsg::ApplyConfig(config) => {
                let action = self.model.borrow_mut().apply_config(&config);
                self.apply(action, &sender);
            }
        }
    }
}

impl SliderWidget {
    fn apply(&self, action: UpdateAction, sender: &ComponentSender<Self>) {
        if action.should_relayout {
            self.drawing_area.queue_resize();
        }
        if action.should_redraw {
            self.drawing_area.queue_draw();
        }
        if action.value_changed {
            let value = self.model.borrow().current_value();
            let _ = sender.output(SliderOutput::ValueChanged(value));
        }
    }
}
