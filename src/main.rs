//! nfogen's main application entry point and orchestration logic.
//! Handles command-line argument parsing, file resolution for templates
//! and artwork, and coordinates rendering and configuration commands.

use std::fs;
use std::path::{Path, PathBuf};

use nfogen::{
    cli::{get_args, Args, Command, ConfigArgs, FileCommand, GenerateArgs},
    config::{get_key, load_settings, save_settings, set_key, unset_key, Directories},
    constants::{DESCRIPTION_EXT, TEMPLATE_EXT},
    context::{load_context, parse_var},
    error::{default_error_handler, NfoError, NfoResult},
    prompt::{DialoguerPrompter, Prompter},
    renderer::{NfoRenderer, TemplateRenderer},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> NfoResult<()> {
    match args.command {
        Command::Generate(generate) => run_generate(generate),
        Command::Template(command) => run_file_command(FileKind::Template, command),
        Command::Artwork(command) => run_file_command(FileKind::Artwork, command),
        Command::Config(config) => run_config(config),
    }
}

/// Resolves a name to a file: a direct path wins, otherwise the named
/// file in the user data directory.
fn resolve_file(name: &str, data_file: PathBuf, kind: &str) -> NfoResult<PathBuf> {
    let direct = PathBuf::from(name);
    if direct.is_file() {
        return Ok(direct);
    }
    if data_file.is_file() {
        return Ok(data_file);
    }
    Err(NfoError::ConfigError(format!("No {} named {} exists", kind, name)))
}

fn read_file(path: &Path) -> NfoResult<String> {
    log::debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(NfoError::IoError)
}

/// Renders a template (optionally artwork-wrapped) against a context
/// file and writes the result to a file or stdout.
fn run_generate(args: GenerateArgs) -> NfoResult<()> {
    let dirs = Directories::new()?;

    let mut context = load_context(&args.context)?;
    for raw in &args.vars {
        let (key, value) = parse_var(raw)?;
        context.insert(key, value);
    }

    let template_path = resolve_file(
        &args.template,
        dirs.template_file(&args.template, args.description),
        "template",
    )?;
    let template_text = read_file(&template_path)?;

    let artwork_text = match &args.artwork {
        Some(artwork) => {
            let artwork_path =
                resolve_file(artwork, dirs.artwork_file(artwork), "artwork")?;
            Some(read_file(&artwork_path)?)
        }
        None => None,
    };

    let renderer = NfoRenderer::new();
    let output = renderer.render(&template_text, artwork_text.as_deref(), &context)?;

    match args.output {
        Some(path) => {
            fs::write(&path, &output).map_err(NfoError::IoError)?;
            println!("Saved output to: {}", path.display());
        }
        None => println!("{}", output),
    }
    Ok(())
}

enum FileKind {
    Template,
    Artwork,
}

impl FileKind {
    fn label(&self) -> &'static str {
        match self {
            FileKind::Template => "template",
            FileKind::Artwork => "artwork",
        }
    }

    fn dir(&self, dirs: &Directories) -> PathBuf {
        match self {
            FileKind::Template => dirs.templates.clone(),
            FileKind::Artwork => dirs.artwork.clone(),
        }
    }
}

/// Lists or deletes template/artwork files in the user data directory.
fn run_file_command(kind: FileKind, command: FileCommand) -> NfoResult<()> {
    let dirs = Directories::new()?;
    let dir = kind.dir(&dirs);

    match command {
        FileCommand::List => {
            let mut found = 0;
            if dir.is_dir() {
                let mut entries: Vec<PathBuf> = fs::read_dir(&dir)
                    .map_err(NfoError::IoError)?
                    .filter_map(|entry| entry.ok().map(|e| e.path()))
                    .collect();
                entries.sort();
                for path in entries {
                    let (Some(stem), Some(ext)) = (
                        path.file_stem().and_then(|s| s.to_str()),
                        path.extension().and_then(|s| s.to_str()),
                    ) else {
                        continue;
                    };
                    match (&kind, ext) {
                        (FileKind::Template, TEMPLATE_EXT) => {
                            println!("{} - NFO Template", stem)
                        }
                        (FileKind::Template, DESCRIPTION_EXT) => {
                            println!("{} - Description Template", stem)
                        }
                        (FileKind::Artwork, TEMPLATE_EXT) => println!("{}", stem),
                        _ => continue,
                    }
                    found += 1;
                }
            }
            if found == 0 {
                return Err(NfoError::ConfigError(format!("No {}s found", kind.label())));
            }
            Ok(())
        }
        FileCommand::Delete { name, description, yes } => {
            let path = match kind {
                FileKind::Template => dirs.template_file(&name, description),
                FileKind::Artwork => dirs.artwork_file(&name),
            };
            if !path.is_file() {
                return Err(NfoError::ConfigError(format!(
                    "No {} named {} exists",
                    kind.label(),
                    name
                )));
            }
            if !yes {
                let prompt = DialoguerPrompter::new();
                let message =
                    format!("Are you sure you want to delete the {} {}?", kind.label(), name);
                if !prompt.confirm(&message)? {
                    return Ok(());
                }
            }
            fs::remove_file(&path).map_err(NfoError::IoError)?;
            println!("Deleted {} {}", kind.label(), name);
            Ok(())
        }
    }
}

/// Gets, sets, unsets or lists persistent configuration values.
fn run_config(args: ConfigArgs) -> NfoResult<()> {
    let dirs = Directories::new()?;
    let path = dirs.config_file();
    let mut settings = load_settings(&path)?;

    if args.list {
        let dump = serde_yaml::to_string(&settings)
            .map_err(|e| NfoError::ConfigError(format!("Cannot serialize settings: {}", e)))?;
        println!("{}", dump.trim_end());
        return Ok(());
    }

    let Some(key) = args.key else {
        return Err(NfoError::ConfigError(
            "No key provided, see `nfogen config --help`".to_string(),
        ));
    };

    if args.unset {
        unset_key(&mut settings, &key);
        save_settings(&path, &settings)?;
        println!("Unset {}", key);
        return Ok(());
    }

    match args.value {
        None => match get_key(&settings, &key) {
            Some(value) => {
                let dump = serde_yaml::to_string(value).map_err(|e| {
                    NfoError::ConfigError(format!("Cannot serialize settings: {}", e))
                })?;
                println!("{}: {}", key, dump.trim_end());
                Ok(())
            }
            None => Err(NfoError::ConfigError(format!(
                "Key {} does not exist in the config",
                key
            ))),
        },
        Some(value) => {
            set_key(&mut settings, &key, serde_yaml::Value::String(value.clone()));
            save_settings(&path, &settings)?;
            println!("Set {} to {:?}", key, value);
            Ok(())
        }
    }
}
