// Command-line interface for mdweave
//
// This binary converts one restricted-Markdown document into a DOCX file.
//
// With no arguments every path is derived from convention: the input is
// <exe dir>/../docs/PROJECT_REPORT.md, the output sits next to the input
// with a .docx extension, and image references are resolved against the
// parent of the input's directory. Each of the three paths can be
// overridden, either on the command line or through an mdweave.toml file.
//
// Usage:
//  mdweave                                   - Convert the conventional document
//  mdweave <input> [-o <file>]               - Convert an explicit file
//  mdweave <input> --assets-root <dir>       - Override image resolution root
//  mdweave --config <path>                   - Load an explicit config file
//
// A missing input file is reported with a plain diagnostic and is not an
// error exit: the batch workflow treats "nothing to convert" as a no-op.

use clap::{Arg, Command, ValueHint};
use mdweave_config::{Loader, MdweaveConfig};
use mdweave_core::{convert_file, StyleSettings};
use std::path::{Path, PathBuf};

fn build_cli() -> Command {
    Command::new("mdweave")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a restricted Markdown document to DOCX")
        .long_about(
            "mdweave converts a single Markdown document into a Word (DOCX) file,\n\
            preserving headings, paragraphs, lists, code blocks, horizontal rules\n\
            and embedded images.\n\n\
            Paths default to the docs/ convention and can be overridden via flags\n\
            or an mdweave.toml configuration file.\n\n\
            Examples:\n  \
            mdweave                                # Convert docs/PROJECT_REPORT.md\n  \
            mdweave notes/draft.md                 # Convert an explicit file\n  \
            mdweave notes/draft.md -o out.docx     # Choose the output path\n  \
            mdweave report.md --assets-root media  # Resolve images under media/",
        )
        .arg(
            Arg::new("input")
                .help("Input Markdown file (defaults to the docs/ convention)")
                .required(false)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output DOCX path (defaults to the input path with a .docx extension)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("assets-root")
                .long("assets-root")
                .value_name("DIR")
                .help("Directory image paths are resolved against (defaults to the parent of the input's directory)")
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mdweave.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    let input = matches
        .get_one::<String>("input")
        .map(PathBuf::from)
        .or_else(|| config.paths.input.as_deref().map(PathBuf::from))
        .unwrap_or_else(conventional_input);

    if !input.exists() {
        // Not a fatal condition: report and skip the conversion entirely.
        println!("Markdown file not found: {}", input.display());
        return;
    }

    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .or_else(|| config.paths.output.as_deref().map(PathBuf::from))
        .unwrap_or_else(|| input.with_extension("docx"));

    let assets_root = matches
        .get_one::<String>("assets-root")
        .map(PathBuf::from)
        .or_else(|| config.paths.assets_root.as_deref().map(PathBuf::from))
        .unwrap_or_else(|| default_assets_root(&input));

    let styles: StyleSettings = (&config.convert.docx).into();

    if let Err(e) = convert_file(&input, &output, &assets_root, &styles) {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    }

    println!("Wrote: {}", output.display());
}

fn load_cli_config(explicit_path: Option<&str>) -> MdweaveConfig {
    let loader = Loader::new().with_optional_file("mdweave.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// The original batch convention: the markup lives in a docs/ directory one
/// level above the directory holding the program itself.
fn conventional_input() -> PathBuf {
    let base = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("docs").join("PROJECT_REPORT.md")
}

/// Image paths are project-root relative: one level above the input's
/// directory, so docs/report.md resolves assets/x.png against the project
/// root.
fn default_assets_root(input: &Path) -> PathBuf {
    input
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_default()
}
