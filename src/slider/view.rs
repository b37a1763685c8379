use crate::gui::theme::SliderColors;
use crate::slider::model::SliderModel;
use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;

/// Draws the widget from model state: full background ring, progress arc
/// sweeping counter to clock direction from north, then the handle on top.
pub fn draw(cr: &Context, model: &SliderModel, colors: &SliderColors) -> Result<(), cairo::Error> {
    draw_ring(cr, model, &colors.unfilled)?;
    draw_progress_arc(cr, model, &colors.filled)?;
    draw_handle(cr, model, &colors.handle)
}

fn draw_ring(cr: &Context, model: &SliderModel, color: &Srgba<f64>) -> Result<(), cairo::Error> {
    let center = model.center();
    set_source(cr, color);
    cr.set_line_width(model.line_width());
    cr.set_line_cap(cairo::LineCap::Butt);
    cr.arc(center.x, center.y, model.radius(), 0.0, 2.0 * PI);
    cr.stroke()
}

fn draw_progress_arc(
    cr: &Context,
    model: &SliderModel,
    color: &Srgba<f64>,
) -> Result<(), cairo::Error> {
    let center = model.center();
    let start = 3.0 * PI / 2.0;
    let end = start - model.angle().to_radians();
    set_source(cr, color);
    cr.set_line_width(model.line_width());
    cr.set_line_cap(cairo::LineCap::Butt);
    cr.arc_negative(center.x, center.y, model.radius(), start, end);
    cr.stroke()
}

fn draw_handle(cr: &Context, model: &SliderModel, color: &Srgba<f64>) -> Result<(), cairo::Error> {
    let handle = model.handle_center();
    cr.save()?;
    set_source(cr, color);
    cr.arc(handle.x, handle.y, model.handle_radius(), 0.0, 2.0 * PI);
    cr.fill()?;
    cr.restore()
}

fn set_source(cr: &Context, color: &Srgba<f64>) {
    let (r, g, b, a) = (*color).into_components();
    cr.set_source_rgba(r, g, b, a);
}
