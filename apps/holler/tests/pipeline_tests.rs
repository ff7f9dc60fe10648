//! Integration tests for config-driven log routing.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use clap::Parser;
use holler::cli::{Cli, Commands, build_filter, resolve_logger_config};
use holler::{Config, Event, Logger, Repository, StreamAdapter};
use holler_core::{HollerError, LevelFilter, LevelModifier, LevelSeed, Severity};
use std::io::Write;
use std::sync::{Arc, Mutex};

// =============================================================================
// HELPERS
// =============================================================================

/// In-memory writer whose contents stay readable after the adapter is boxed.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

const INPUT: &str = "\
DEBUG cache warmed
INFO listening on 8080
WARN slow request
ERROR upstream timeout
FATAL out of memory
something odd happened
";

// =============================================================================
// LOGGER ROUTING
// =============================================================================

#[test]
fn test_adapters_receive_their_slices() {
    let low = SharedBuffer::default();
    let high = SharedBuffer::default();

    let mut logger = Logger::new("app", LevelFilter::from_seed(Severity::Info))
        .with_adapter(Box::new(StreamAdapter::new(
            "low",
            LevelFilter::from_seed(Severity::Info..=Severity::Warn),
            low.clone(),
        )))
        .with_adapter(Box::new(StreamAdapter::new(
            "high",
            LevelFilter::from_seed(vec![Severity::Error, Severity::Fatal]),
            high.clone(),
        )));

    let stats = logger.consume(INPUT.as_bytes()).unwrap();

    assert_eq!(stats.events, 6);
    assert_eq!(stats.accepted, 5);
    assert_eq!(stats.writes, 4);
    assert_eq!(
        low.contents(),
        "INFO    listening on 8080\nWARN    slow request\n"
    );
    assert_eq!(
        high.contents(),
        "ERROR   upstream timeout\nFATAL   out of memory\n"
    );
}

#[test]
fn test_unknown_lines_follow_unknown_rank() {
    let out = SharedBuffer::default();
    let mut logger = Logger::new("app", LevelFilter::from_seed(vec![Severity::Unknown]))
        .with_adapter(Box::new(StreamAdapter::new(
            "out",
            LevelFilter::from_seed(Severity::Unknown),
            out.clone(),
        )));

    logger.consume(INPUT.as_bytes()).unwrap();
    assert_eq!(out.contents(), "UNKNOWN something odd happened\n");
}

#[test]
fn test_log_single_event() {
    let out = SharedBuffer::default();
    let mut logger = Logger::new("app", LevelFilter::new())
        .with_adapter(Box::new(StreamAdapter::new(
            "out",
            LevelFilter::new().less_than(Severity::Error),
            out.clone(),
        )));

    assert_eq!(logger.log(&Event::new(Severity::Error, "nope")).unwrap(), 0);
    assert_eq!(logger.log(&Event::new(Severity::Warn, "yes")).unwrap(), 1);
    assert_eq!(out.contents(), "WARN    yes\n");
}

// =============================================================================
// CONFIG FILES
// =============================================================================

#[test]
fn test_config_file_routes_to_file_adapter() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("errors.log");
    let config_path = dir.path().join("holler.toml");

    let config_text = format!(
        r#"
[production]
name = "app"
level = "warn"

[[production.adapters]]
type = "file"
path = "{}"
level = "error..fatal"
"#,
        log_path.display().to_string().replace('\\', "\\\\")
    );
    std::fs::write(&config_path, config_text).unwrap();

    let config = Config::load(&config_path).unwrap();
    let mut logger = config.logger_for("production").unwrap().build().unwrap();
    let stats = logger.consume(INPUT.as_bytes()).unwrap();

    assert_eq!(stats.writes, 2);
    let written = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(written, "ERROR   upstream timeout\nFATAL   out of memory\n");
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(HollerError::IoError(_))));
}

#[test]
fn test_resolve_logger_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("holler.toml");
    std::fs::write(
        &config_path,
        "[staging]\nname = \"svc\"\nlevel = \"debug\"\nmodifiers = [\"lt:unknown\"]\n",
    )
    .unwrap();

    let logger = resolve_logger_config(
        Some(config_path.as_path()),
        Some("staging".to_string()),
        None,
        Some("info".parse().unwrap()),
        vec!["lte:error".parse().unwrap()],
    )
    .unwrap();

    assert_eq!(logger.name, "svc");
    assert_eq!(logger.level_filter().to_string(), "{INFO, WARN, ERROR}");
}

#[test]
fn test_resolve_logger_unknown_environment() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("holler.toml");
    std::fs::write(&config_path, "[production]\n").unwrap();

    let result = resolve_logger_config(
        Some(config_path.as_path()),
        Some("qa".to_string()),
        None,
        None,
        vec![],
    );
    assert_eq!(
        result.map(|l| l.name),
        Err(HollerError::UnknownEnvironment("qa".to_string()))
    );
}

#[test]
fn test_resolve_logger_without_config() {
    let logger = resolve_logger_config(None, None, None, None, vec![]).unwrap();
    assert_eq!(logger.level_filter(), LevelFilter::new());
    assert!(logger.adapters.is_empty());
}

#[test]
fn test_resolve_logger_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("holler.toml");
    std::fs::write(
        &config_path,
        "[production]\nname = \"app\"\nlevel = \"error\"\n\n[jobs]\nname = \"worker\"\nlevel = \"debug..warn\"\n",
    )
    .unwrap();

    // The environment only breaks ties; "worker" lives in another section.
    let logger = resolve_logger_config(
        Some(config_path.as_path()),
        Some("production".to_string()),
        Some("worker"),
        None,
        vec!["gt:debug".parse().unwrap()],
    )
    .unwrap();
    assert_eq!(logger.name, "worker");
    assert_eq!(logger.level_filter().to_string(), "{INFO, WARN}");

    let missing = resolve_logger_config(
        Some(config_path.as_path()),
        Some("production".to_string()),
        Some("billing"),
        None,
        vec![],
    );
    assert_eq!(
        missing.map(|l| l.name),
        Err(HollerError::LoggerNotFound("billing".to_string()))
    );
}

#[test]
fn test_resolve_named_logger_needs_config() {
    let result = resolve_logger_config(None, None, Some("worker"), None, vec![]);
    assert_eq!(
        result.map(|l| l.name),
        Err(HollerError::LoggerNotFound("worker".to_string()))
    );
}

#[test]
fn test_config_file_adapter_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("short.log");
    let config_path = dir.path().join("holler.toml");

    let config_text = format!(
        r#"
[production]
[[production.adapters]]
type = "file"
path = "{}"
level = "warn..error"
format = "%l: %m"
"#,
        log_path.display().to_string().replace('\\', "\\\\")
    );
    std::fs::write(&config_path, config_text).unwrap();

    let config = Config::load(&config_path).unwrap();
    let mut logger = config.logger_for("production").unwrap().build().unwrap();
    logger.consume(INPUT.as_bytes()).unwrap();

    let written = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(written, "W: slow request\nE: upstream timeout\n");
}

// =============================================================================
// NAMED LOGGERS
// =============================================================================

#[test]
fn test_repository_routes_through_shared_logger() {
    let out = SharedBuffer::default();
    let repository = Repository::new();
    repository.register(
        Logger::new("api", LevelFilter::from_seed(Severity::Warn)).with_adapter(Box::new(
            StreamAdapter::new("out", LevelFilter::new(), out.clone()),
        )),
    );

    let logger = repository.get("api").unwrap();
    let stats = logger.lock().unwrap().consume(INPUT.as_bytes()).unwrap();

    assert_eq!(stats.writes, 4);
    assert!(out.contents().starts_with("WARN    slow request\n"));
}

// =============================================================================
// CLI PARSING
// =============================================================================

#[test]
fn test_cli_check_arguments() {
    let cli = Cli::try_parse_from([
        "holler", "check", "--level", "info..fatal", "-m", "lt:fatal", "-m", "at:debug",
    ])
    .unwrap();

    match cli.command {
        Some(Commands::Check { level, modifiers }) => {
            let filter = build_filter(&level, &modifiers);
            assert_eq!(filter.to_string(), "{DEBUG, INFO, WARN, ERROR}");
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_cli_check_default_level() {
    let cli = Cli::try_parse_from(["holler", "check"]).unwrap();

    match cli.command {
        Some(Commands::Check { level, modifiers }) => {
            assert_eq!(level, LevelSeed::All);
            assert!(modifiers.is_empty());
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_cli_filter_arguments() {
    let cli = Cli::try_parse_from([
        "holler", "--quiet", "filter", "--env", "production", "--level", "debug,fatal", "app.log",
    ])
    .unwrap();

    assert!(cli.quiet);
    match cli.command {
        Some(Commands::Filter {
            env,
            logger,
            level,
            input,
            ..
        }) => {
            assert_eq!(env.as_deref(), Some("production"));
            assert_eq!(logger, None);
            assert_eq!(level, Some(LevelSeed::List(vec!["debug".into(), "fatal".into()])));
            assert_eq!(input.unwrap().to_string_lossy(), "app.log");
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_cli_filter_logger_name() {
    let cli = Cli::try_parse_from([
        "holler", "filter", "--config", "holler.toml", "--logger", "worker",
    ])
    .unwrap();

    match cli.command {
        Some(Commands::Filter { config, logger, .. }) => {
            assert_eq!(config.unwrap().to_string_lossy(), "holler.toml");
            assert_eq!(logger.as_deref(), Some("worker"));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_cli_rejects_malformed_level() {
    assert!(Cli::try_parse_from(["holler", "check", "--level", "info.."]).is_err());
    assert!(Cli::try_parse_from(["holler", "check", "-m", "near:info"]).is_err());
}

// =============================================================================
// SHARED READ-ONLY FILTERS
// =============================================================================

#[test]
fn test_filter_shared_across_threads() {
    let filter = Arc::new(
        LevelFilter::new()
            .greater_or_equal(Severity::Info)
            .less_or_equal(Severity::Error),
    );
    let modifier: LevelModifier = "gt:fatal".parse().unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let filter = Arc::clone(&filter);
            scope.spawn(move || {
                for _ in 0..1000 {
                    assert!(filter.allows(Severity::Warn));
                    assert!(!filter.allows(Severity::Fatal));
                }
            });
        }
    });

    // Narrowing happens on a private copy, never on the shared one.
    let narrowed = (*filter).clone().apply(&modifier);
    assert!(narrowed.is_empty());
    assert!(filter.allows(Severity::Info));
}
