/// Output channel for the importer.
///
/// The importer never returns its results, it only reports them here.
pub trait Console {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);
}

/// Forwards everything to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogConsole;

impl Console for LogConsole {
    fn info(&self, message: &str) {
        log::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        log::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}
