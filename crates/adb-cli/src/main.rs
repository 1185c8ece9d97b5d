use std::{fs, path::PathBuf, sync::OnceLock};

use adb_core::{
    call::MethodCall, channel::MethodChannelRegistry, config::Config, plugin::AdbPlugin,
};
use adb_plugin_sdk::{Plugin, PluginManifest};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use regex::Regex;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "adb", author, version, about = "Platform method-channel host")]
struct Cli {
    /// Sets the log level (error, warn, info, debug, trace).
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Dispatch a single method call into the plugin registry.
    Call {
        /// Method name, e.g. getPlatformVersion.
        #[arg(value_name = "METHOD")]
        method: String,

        /// JSON arguments forwarded to the handler (the built-in plugin ignores them).
        #[arg(long, value_name = "JSON")]
        args: Option<String>,

        /// Channel to dispatch on; defaults to the configured channel.
        #[arg(long, value_name = "NAME")]
        channel: Option<String>,

        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Interact with configuration files (validate, sample output, etc.)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Inspect built-in and discovered plugins.
    Plugins {
        #[command(subcommand)]
        command: PluginCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Validates the provided configuration file.
    Validate {
        #[arg(value_name = "FILE")]
        config: PathBuf,
    },
    /// Prints the bundled minimal example configuration.
    Example,
}

#[derive(Subcommand, Debug)]
enum PluginCommands {
    /// Lists the built-in plugin and any manifests found on disk.
    List {
        #[arg(long, value_name = "DIR", default_value = "plugins")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;
    match cli.command {
        Commands::Call {
            method,
            args,
            channel,
            config,
        } => handle_call(method, args, channel, config),
        Commands::Config { command } => handle_config(command),
        Commands::Plugins { command } => handle_plugins(command),
    }
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).try_init().ok();
    Ok(())
}

fn handle_call(
    method: String,
    args: Option<String>,
    channel: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => load_config(&path)?,
        None => Config::default(),
    };
    config.validate()?;

    let call = match args {
        Some(raw) => {
            let value = serde_json::from_str(&raw).context("failed to parse --args as JSON")?;
            MethodCall::with_args(method, value)
        }
        None => MethodCall::new(method),
    };

    let mut registry = MethodChannelRegistry::new();
    let mut plugin = AdbPlugin;
    plugin.init(serde_json::Value::Null)?;
    registry.register(config.channel.name.clone(), Box::new(plugin));

    let target = channel.as_deref().unwrap_or(config.channel.name.as_str());
    let result = registry.invoke(target, &call);
    match result.as_str() {
        Some(value) => println!("{value}"),
        None if result.is_not_implemented() => {
            println!(
                "not implemented: no handler for `{}` on channel `{target}`",
                call.method
            );
        }
        None => println!("{}", serde_json::to_string(&result)?),
    }
    Ok(())
}

fn handle_config(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Validate { config } => {
            let cfg = load_config(&config)?;
            cfg.validate()?;
            println!("configuration OK: {}", config.display());
        }
        ConfigCommands::Example => {
            println!("{}", include_str!("../../../demos/config/minimal.adb.toml"));
        }
    }
    Ok(())
}

fn handle_plugins(command: PluginCommands) -> Result<()> {
    match command {
        PluginCommands::List { dir } => {
            let builtin = AdbPlugin;
            println!(
                "- {} v{} (built-in) — methods: {}",
                builtin.name(),
                builtin.version(),
                builtin.capabilities().join(", ")
            );
            for manifest in discover_plugins(&dir)? {
                println!(
                    "- {} v{} (channel `{}`){}",
                    manifest.name,
                    manifest.version,
                    manifest.channel(),
                    manifest
                        .description
                        .as_ref()
                        .map(|d| format!(" — {d}"))
                        .unwrap_or_default()
                );
            }
        }
    }
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<Config> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let expanded = interpolate_env(&raw)?;
    let cfg = toml::from_str::<Config>(&expanded)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(cfg)
}

fn interpolate_env(input: &str) -> Result<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let regex = RE.get_or_init(|| Regex::new(r"\$\{([A-Z0-9_]+)(?::([^}]+))?\}").unwrap());
    let result = regex.replace_all(input, |caps: &regex::Captures| {
        let key = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        std::env::var(key).unwrap_or_else(|_| default.to_string())
    });
    Ok(result.into_owned())
}

fn discover_plugins(dir: &PathBuf) -> Result<Vec<PluginManifest>> {
    let mut manifests = Vec::new();
    if !dir.exists() {
        return Ok(manifests);
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let data = fs::read_to_string(&path)?;
        let manifest: PluginManifest = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse manifest {}", path.display()))?;
        manifests.push(manifest);
    }
    Ok(manifests)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_interpolation_falls_back_to_defaults() {
        let input = "name = \"${ADB_CHANNEL_DOES_NOT_EXIST:adb}\"";
        assert_eq!(interpolate_env(input).unwrap(), "name = \"adb\"");
    }

    #[test]
    fn example_config_parses_and_validates() {
        let raw = include_str!("../../../demos/config/minimal.adb.toml");
        let cfg: Config = toml::from_str(&interpolate_env(raw).unwrap()).unwrap();
        cfg.validate().unwrap();
        assert_eq!(cfg.channel.name, "adb");
    }
}
