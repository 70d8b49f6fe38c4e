use crate::cli::{Cli, Commands};
use sjsuconnect::{config, logging, nav, ui};
use std::process;

pub fn run(cli: Cli) {
    if let Some(command) = cli.command {
        match command {
            Commands::Transitions => handle_transitions(),
            Commands::InitConfig => handle_init_config(),
        }
        return;
    }

    let config = match config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {:#}", e);
            eprintln!("Using built-in defaults.");
            config::Config::default()
        }
    };

    // CLI flag > config > default
    let log_file = cli.log_file.or_else(|| config.logging.file.clone());
    let log_level = cli
        .log_level
        .unwrap_or_else(|| config.logging.level.clone());

    if let Err(e) = logging::init(log_file.as_deref(), &log_level) {
        eprintln!("Error: {:#}", anyhow::Error::from(e));
        process::exit(1);
    }

    let mut options = ui::UiOptions::from_config(&config);
    if let Some(screen) = cli.start_screen {
        options.start_screen = screen;
    }
    if cli.no_mouse {
        options.mouse_capture = false;
    }

    if let Err(e) = ui::run_ui_with_options(options) {
        tracing::error!(error = %e, "ui loop failed");
        eprintln!("Error running UI: {}", e);
        process::exit(1);
    }
}

fn handle_transitions() {
    println!("{}", nav::describe_transitions());
}

fn handle_init_config() {
    match config::Config::load() {
        Ok(cfg) => {
            match config::Config::config_path() {
                Ok(path) => println!("Config loaded successfully from {}", path.display()),
                Err(e) => println!("Config loaded, but config path unknown: {:#}", e),
            }
            println!("{:#?}", cfg);
        }
        Err(e) => {
            println!("Config missing or invalid: {:#}", e);
            println!("Creating default config...");

            let cfg = config::Config::default();
            if let Err(err) = cfg.save() {
                eprintln!("Failed to save default config: {:#}", err);
                process::exit(1);
            } else {
                match config::Config::config_path() {
                    Ok(path) => println!("Default config saved to {}", path.display()),
                    Err(e) => println!("Default config saved (path unknown): {:#}", e),
                }
            }
        }
    }
}
