use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct SliderColors {
    pub filled: Srgba<f64>,
    pub unfilled: Srgba<f64>,
    pub handle: Srgba<f64>,
}

impl SliderColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            filled: Self::lookup_color(
                context,
                "theme_selected_bg_color",
                Srgba::new(0.4, 0.55, 0.9, 1.0),
                None,
            ),
            unfilled: Self::lookup_color(
                context,
                "theme_bg_color",
                Srgba::new(0.2, 0.2, 0.2, 1.0),
                Some(0.8),
            ),
            handle: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(1.0, 1.0, 1.0, 0.9),
                Some(0.9),
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.ringdial-value {
    font-size: 22px;
    font-weight: bold;
}
.ringdial-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
