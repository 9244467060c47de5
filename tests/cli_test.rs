use clap::Parser;
use nfogen::cli::{Args, Command, FileCommand};
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("nfogen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_generate_args() {
    let args = make_args(&[
        "generate",
        "context.json",
        "-t",
        "movie",
        "-a",
        "phoenix",
        "--var",
        "note=hi",
        "-o",
        "out.nfo",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    let Command::Generate(generate) = parsed.command else {
        panic!("Expected generate subcommand");
    };
    assert_eq!(generate.context, PathBuf::from("context.json"));
    assert_eq!(generate.template, "movie");
    assert_eq!(generate.artwork.as_deref(), Some("phoenix"));
    assert_eq!(generate.vars, vec!["note=hi".to_string()]);
    assert_eq!(generate.output, Some(PathBuf::from("out.nfo")));
    assert!(!generate.description);
}

#[test]
fn test_generate_requires_template() {
    let args = make_args(&["generate", "context.json"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_template_subcommands() {
    let parsed = Args::try_parse_from(make_args(&["template", "list"])).unwrap();
    assert!(matches!(parsed.command, Command::Template(FileCommand::List)));

    let parsed =
        Args::try_parse_from(make_args(&["template", "delete", "movie", "--yes"])).unwrap();
    match parsed.command {
        Command::Template(FileCommand::Delete { name, description, yes }) => {
            assert_eq!(name, "movie");
            assert!(!description);
            assert!(yes);
        }
        other => panic!("Expected template delete, got {:?}", other),
    }
}

#[test]
fn test_template_delete_description_variant() {
    let parsed = Args::try_parse_from(make_args(&[
        "template",
        "delete",
        "movie",
        "--description",
        "--yes",
    ]))
    .unwrap();
    match parsed.command {
        Command::Template(FileCommand::Delete { name, description, yes }) => {
            assert_eq!(name, "movie");
            assert!(description);
            assert!(yes);
        }
        other => panic!("Expected template delete, got {:?}", other),
    }
}

#[test]
fn test_config_args() {
    let parsed =
        Args::try_parse_from(make_args(&["config", "generate.artwork", "phoenix"])).unwrap();
    let Command::Config(config) = parsed.command else {
        panic!("Expected config subcommand");
    };
    assert_eq!(config.key.as_deref(), Some("generate.artwork"));
    assert_eq!(config.value.as_deref(), Some("phoenix"));
    assert!(!config.unset);
    assert!(!config.list);

    let parsed = Args::try_parse_from(make_args(&["config", "--list"])).unwrap();
    let Command::Config(config) = parsed.command else {
        panic!("Expected config subcommand");
    };
    assert!(config.list);
}

#[test]
fn test_verbose_flag() {
    let parsed = Args::try_parse_from(make_args(&["-v", "template", "list"])).unwrap();
    assert!(parsed.verbose);

    let parsed = Args::try_parse_from(make_args(&["template", "list"])).unwrap();
    assert!(!parsed.verbose);
}

#[test]
fn test_missing_subcommand() {
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}
