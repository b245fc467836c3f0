use super::{LogFormat, LoggingConfig, LoggingError};
use tracing::{dispatcher::DefaultGuard, level_filters::LevelFilter, Dispatch};
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";

/// Install a temporary logger used while the configuration is loaded.
/// The logger is active until the returned guard is dropped and it is filtered by the `RUST_LOG` environment.
pub fn install_pre_init_logger() -> DefaultGuard {
    if LogTracer::init().is_err() {
        eprintln!("Log tracer is already installed");
    }

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let pre_init_log = tracing_subscriber::fmt().with_env_filter(env_filter).compact().finish();
    tracing::dispatcher::set_default(&pre_init_log.into())
}

fn set_global_tracing_pipeline<P>(pipeline: P) -> Result<(), LoggingError>
where
    P: Into<Dispatch>,
{
    //Note: pipeline.init (SubscriberInitExt::init) cannot be used as the LogTracer was installed
    // by the pre-init logger. Calling init here would result in a double install error from the LogTracer.
    tracing::dispatcher::set_global_default(pipeline.into())?;
    Ok(())
}

/// Install the global logger of the service.
///
/// Both the `log` and the `tracing` macros are supported, the `log` records are channelled to the tracing layer.
pub fn install_logger(service_name: &str, config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = config.default_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let env_filter = EnvFilter::builder().parse(filter)?;

    if !config.enable_console_log {
        log::info!("Console log is disabled for {service_name}");
        let pipeline = tracing_subscriber::registry();
        return set_global_tracing_pipeline(pipeline);
    }

    log::info!("Installing {:?} console log for {service_name} with filter [{filter}]", config.format);
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);
    match config.format {
        LogFormat::Compact => set_global_tracing_pipeline(builder.compact().finish()),
        LogFormat::Pretty => set_global_tracing_pipeline(builder.pretty().finish()),
        LogFormat::Json => set_global_tracing_pipeline(builder.json().finish()),
    }
}
