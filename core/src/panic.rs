use log::error;
use std::{panic, process};

/// Routes panics through the logger, so they also land in the log files, then exits
/// with status 1 once the default hook has printed its report.
pub fn configure_panic() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let location = info.location().map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column())).unwrap_or_else(|| "unknown".into());
        error!("panicked at {}: {}", location, info.payload_as_str().unwrap_or("Box<dyn Any>"));
        default_hook(info);
        process::exit(1);
    }));
}
