//! Process-wide logger built on `fern`.

use log::LevelFilter;

/// Dispatcher writing `[LEVEL target] message` lines.  GPU backend crates are
/// held at `Warn` whatever `level` is.
pub fn dispatch(level: LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("wgpu_core", LevelFilter::Warn)
        .level_for("wgpu_hal", LevelFilter::Warn)
        .level_for("naga", LevelFilter::Warn)
}

/// Install the logger, writing to stderr.  Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    dispatch(level).chain(std::io::stderr()).apply()
}
