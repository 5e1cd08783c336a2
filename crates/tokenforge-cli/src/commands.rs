//! Subcommand implementations.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokenforge_codegen::{CodeGenerationOptions, CodeGenerator, GeneratedFile};
use tokenforge_core::{Token, TokenSet};
use tokenforge_export::ExportFormat;
use tokenforge_extract::{ExtractOptions, Extractor};
use tokenforge_history::{JsonFileStore, TokenHistory};
use tracing::info;

use crate::error::{CliError, Result};
use crate::{GenerateArgs, HistoryCommand};

/// Version listing without the token payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionSummary<'a> {
    id: &'a str,
    timestamp: i64,
    description: &'a str,
    file_id: &'a str,
    entries: usize,
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let source = read_source(path)?;
    serde_json::from_str(&source).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|source| CliError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(path, content).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            eprintln!("Wrote: {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn extract_tokens(path: &Path, options: ExtractOptions) -> Result<Vec<Token>> {
    let source = read_source(path)?;
    Ok(Extractor::new(options).extract_str(&source)?)
}

pub fn extract(
    path: &Path,
    deep: bool,
    usage_metadata: bool,
    token_set: bool,
    output: Option<&Path>,
) -> Result<()> {
    let options = ExtractOptions::new()
        .with_blur(deep)
        .with_usage_metadata(usage_metadata);
    let tokens = extract_tokens(path, options)?;
    info!(tokens = tokens.len(), "extracted tokens");

    let json = if token_set {
        serde_json::to_string_pretty(&TokenSet::from_tokens(&tokens))?
    } else {
        serde_json::to_string_pretty(&tokens)?
    };
    write_output(output, &json)
}

pub fn generate(args: &GenerateArgs) -> Result<()> {
    let options = CodeGenerationOptions::new()
        .with_framework(args.framework.parse()?)
        .with_style_format(args.style.parse()?)
        .with_typescript(!args.no_typescript)
        .with_format_output(!args.no_format);

    let tokens: Vec<Token> = if args.document {
        extract_tokens(&args.path, ExtractOptions::new())?
    } else {
        read_json(&args.path)?
    };

    let generator = CodeGenerator::new(options)?;
    let files = generator.generate_from_tokens(&tokens)?;
    for file in &files {
        write_generated(&args.out_dir, file)?;
    }
    eprintln!("Generated {} files in {}", files.len(), args.out_dir.display());
    Ok(())
}

/// Write one generated file under `out_dir`, creating its directories.
fn write_generated(out_dir: &Path, file: &GeneratedFile) -> Result<PathBuf> {
    let dir = file.path.iter().fold(out_dir.to_path_buf(), |dir, segment| dir.join(segment));
    fs::create_dir_all(&dir).map_err(|source| CliError::Write {
        path: dir.clone(),
        source,
    })?;
    let target = dir.join(&file.file_name);
    fs::write(&target, &file.content).map_err(|source| CliError::Write {
        path: target.clone(),
        source,
    })?;
    Ok(target)
}

pub fn export(path: &Path, format: &str, output: Option<&Path>) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let tokens: TokenSet = read_json(path)?;
    let content = tokenforge_export::export(&tokens, format)?;
    write_output(output, &content)
}

pub fn history(store: PathBuf, command: HistoryCommand) -> Result<()> {
    let mut history = TokenHistory::new(JsonFileStore::new(store));

    match command {
        HistoryCommand::Save {
            path,
            file_id,
            description,
        } => {
            let tokens: TokenSet = read_json(&path)?;
            history.set_current(&tokens)?;
            let version = history.save_version(tokens, &file_id, &description)?;
            println!("{}", version.id);
        }
        HistoryCommand::List => {
            let versions = history.history()?;
            let summaries: Vec<VersionSummary<'_>> = versions
                .iter()
                .map(|version| VersionSummary {
                    id: &version.id,
                    timestamp: version.timestamp,
                    description: &version.description,
                    file_id: &version.file_id,
                    entries: version.tokens.len(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        HistoryCommand::Show { id } => {
            let version = history.get_version(&id)?;
            println!("{}", serde_json::to_string_pretty(&version.tokens)?);
        }
        HistoryCommand::Diff { from, to } => {
            let changes = history.compare_versions(&from, &to)?;
            println!("{}", serde_json::to_string_pretty(&changes)?);
        }
        HistoryCommand::Revert { id } => {
            let tokens = history.revert_to_version(&id)?;
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        }
    }
    Ok(())
}
