use crate::config;
use crate::events::AppEvent;
use crate::gui::slider::{SliderMsg, SliderOutput, SliderWidget};
use crate::gui::theme;
use crate::slider::SliderModel;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::path::PathBuf;

/// Demo host: a window with the slider and a label tracking its value.
pub struct AppModel {
    slider: Controller<SliderWidget>,
    value_label: String,
    config_path: Option<PathBuf>,
}

#[derive(Debug)]
pub enum AppMsg {
    ValueChanged(f64),
    SetValue(f64),
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::SetValue(v) => AppMsg::SetValue(v),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
            AppEvent::Quit => AppMsg::Quit,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        config::SliderConfig,
        Option<PathBuf>,
        async_channel::Receiver<AppEvent>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("ringdial"),
            set_default_width: 420,
            set_default_height: 480,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 12,
                set_margin_all: 16,

                append: model.slider.widget(),

                gtk::Label {
                    #[watch]
                    set_label: &model.value_label,
                    add_css_class: "ringdial-value",
                    set_halign: gtk::Align::Center,
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (slider_config, config_path, rx) = init;

        theme::load_css();

        let initial_value = slider_config.initial_value;
        let slider = SliderWidget::builder()
            .launch(SliderModel::from_config(&slider_config))
            .forward(sender.input_sender(), |output| match output {
                SliderOutput::ValueChanged(v) => AppMsg::ValueChanged(v),
            });

        let model = AppModel {
            slider,
            value_label: format_value(initial_value),
            config_path,
        };

        let widgets = view_output!();

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::ValueChanged(value) => {
                log::debug!("value changed: {value}");
                self.value_label = format_value(value);
            }
            AppMsg::SetValue(value) => {
                self.slider.emit(SliderMsg::SetValue(value));
            }
            AppMsg::ConfigReload => match config::load_config(self.config_path.as_deref()) {
                Ok(new_config) => {
                    self.slider.emit(SliderMsg::ApplyConfig(new_config));
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppMsg::Quit => {
                relm4::main_application().quit();
            }
        }
    }
}

fn format_value(value: f64) -> String {
    format!("{value:.1}")
}
