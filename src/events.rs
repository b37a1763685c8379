/// Events delivered to the GUI from outside the main loop (control socket,
/// config watcher).
#[derive(Debug, Clone)]
pub enum AppEvent {
    SetValue(f64),
    ConfigReload,
    Quit,
}
