//! Line-based console transport for `AuthoringSession`.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::archive::zip_entry_folder;
use crate::discovery::{filtered_subdirectory_names, png_files, ProjectConfig};
use crate::error::{Result, SkinError};

use super::folder::{folder_name, FolderChoice};
use super::record::EntryRecord;
use super::session::{AuthoringSession, Prompt};

/// Where the finished entry ended up.
#[derive(Debug, Clone)]
pub struct AuthoredEntry {
    pub folder: PathBuf,
    pub entry_path: PathBuf,
    pub archive_path: PathBuf,
    pub archived_files: usize,
    pub record: EntryRecord,
    pub json: String,
}

/// Console session settings.
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    /// Directory whose subfolders are offered for authoring.
    pub root: PathBuf,
    /// Skip the folder menu and author this folder (name or path under `root`).
    pub folder: Option<String>,
    /// Directory the `<folder>.zip` is written to.
    pub out_dir: PathBuf,
    /// Its `excludes` hide folders from the menu, as in `skinshop list`.
    pub config: ProjectConfig,
}

/// Run a full authoring session over `input`/`output`.
///
/// Any input error ends the session; nothing is written until every layer
/// has been configured.
pub fn run_console<R: BufRead, W: Write>(
    options: &ConsoleOptions,
    input: &mut R,
    output: &mut W,
) -> Result<AuthoredEntry> {
    let folder = match &options.folder {
        Some(name) => options.root.join(name),
        None => select_folder(&options.root, &options.config, input, output)?,
    };

    writeln!(output, "Now creating entry for {}", folder.display())?;

    let files = png_files(&folder)?;
    let mut session = AuthoringSession::new(files);

    loop {
        let prompt = session.next_prompt();
        if prompt.is_done() {
            break;
        }

        show_menu(&prompt, output)?;
        write!(output, "{}", prompt)?;
        output.flush()?;

        let answer = read_answer(input)?;
        session.submit(&answer)?;
    }

    let record = session.finish()?;
    let entry_path = record.write_to(&folder)?;

    let archive_path = options.out_dir.join(format!("{}.zip", folder_name(&folder)));
    let archived_files = zip_entry_folder(&folder, &archive_path)?;

    let json = record.to_pretty_json()?;
    writeln!(output, "{}", json)?;

    Ok(AuthoredEntry {
        folder,
        entry_path,
        archive_path,
        archived_files,
        record,
        json,
    })
}

fn select_folder<R: BufRead, W: Write>(
    root: &Path,
    config: &ProjectConfig,
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf> {
    let folders = filtered_subdirectory_names(root, config)?;

    for (i, folder) in folders.iter().enumerate() {
        writeln!(output, "{}\t: {}", i + 1, folder)?;
    }
    write!(output, "Directory index or name > ")?;
    output.flush()?;

    let answer = read_answer(input)?;
    Ok(FolderChoice::parse(&answer).resolve(root, &folders))
}

fn show_menu<W: Write>(prompt: &Prompt, output: &mut W) -> Result<()> {
    match prompt {
        Prompt::Layer { remaining, .. } => {
            for (number, file) in remaining {
                writeln!(output, "{} : {}", number, file)?;
            }
        }
        Prompt::Swatch { layer, swatch: 1 } => {
            writeln!(output, "Setup for {}:", layer)?;
            writeln!(output, "Options:")?;
            writeln!(output, "  <hex>      : Hex color for layer")?;
            writeln!(output, "  <file>.png : Name of file to copy color from")?;
            writeln!(output, "  none       : Layer cannot be colored")?;
            writeln!(output, "  erase      : Layer is an erase layer")?;
        }
        _ => {}
    }
    Ok(())
}

/// Read one line, without its line ending.
fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SkinError::InputClosed);
    }

    let trimmed = line.trim_end_matches(['\n', '\r']);
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    use crate::discovery::summarize_folders;

    fn options(root: &Path) -> ConsoleOptions {
        ConsoleOptions {
            root: root.to_path_buf(),
            folder: None,
            out_dir: root.join("out"),
            config: ProjectConfig::default(),
        }
    }

    #[test]
    fn test_read_answer_strips_line_endings() {
        let mut input = Cursor::new("hello\r\nworld");
        assert_eq!(read_answer(&mut input).unwrap(), "hello");
        assert_eq!(read_answer(&mut input).unwrap(), "world");
        assert!(matches!(read_answer(&mut input), Err(SkinError::InputClosed)));
    }

    #[test]
    fn test_folder_menu_is_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("zeta")).unwrap();
        fs::create_dir_all(dir.path().join("alpha")).unwrap();

        let mut input = Cursor::new("2\n");
        let mut output = Vec::new();
        let folder =
            select_folder(dir.path(), &ProjectConfig::default(), &mut input, &mut output).unwrap();

        assert_eq!(folder, dir.path().join("zeta"));
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with("1\t: alpha\n2\t: zeta\n"));
    }

    #[test]
    fn test_folder_menu_matches_folder_listing() {
        let dir = tempdir().unwrap();
        for name in ["alpha", "scratch", "zeta"] {
            fs::create_dir_all(dir.path().join(name)).unwrap();
        }
        let config = ProjectConfig {
            excludes: vec!["scratch".to_string()],
            ..ProjectConfig::default()
        };

        let mut input = Cursor::new("2\n");
        let mut output = Vec::new();
        let folder = select_folder(dir.path(), &config, &mut input, &mut output).unwrap();
        assert_eq!(folder, dir.path().join("zeta"));

        let listed = summarize_folders(dir.path(), &config).unwrap();
        let menu: String = listed
            .iter()
            .enumerate()
            .map(|(i, summary)| format!("{}\t: {}\n", i + 1, summary.name))
            .collect();
        assert_eq!(menu, "1\t: alpha\n2\t: zeta\n");
        assert!(String::from_utf8(output).unwrap().starts_with(&menu));
    }

    #[test]
    fn test_zero_padded_folder_name() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("007");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("base.png"), b"png").unwrap();

        let mut input = Cursor::new("007\nBond\n1\n1\nerase\n");
        let mut output = Vec::new();
        let authored = run_console(&options(dir.path()), &mut input, &mut output).unwrap();

        assert_eq!(authored.folder, folder);
        assert_eq!(authored.record.name, "Bond");
        assert!(folder.join("entry.json").exists());
        assert_eq!(authored.archive_path, dir.path().join("out/007.zip"));
    }

    #[test]
    fn test_swatch_menu_only_before_first_swatch() {
        let mut output = Vec::new();
        show_menu(
            &Prompt::Swatch {
                layer: "base.png".into(),
                swatch: 2,
            },
            &mut output,
        )
        .unwrap();
        assert!(output.is_empty());

        show_menu(
            &Prompt::Swatch {
                layer: "base.png".into(),
                swatch: 1,
            },
            &mut output,
        )
        .unwrap();
        assert!(String::from_utf8(output).unwrap().starts_with("Setup for base.png:"));
    }

    #[test]
    fn test_truncated_input_writes_nothing() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("cape01");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("base.png"), b"png").unwrap();

        let mut input = Cursor::new("cape01\nCape\n1\n1\n");
        let mut output = Vec::new();
        let result = run_console(&options(dir.path()), &mut input, &mut output);

        assert!(matches!(result, Err(SkinError::InputClosed)));
        assert!(!folder.join("entry.json").exists());
        assert!(!dir.path().join("out/cape01.zip").exists());
    }

    #[test]
    fn test_missing_folder_is_fatal() {
        let dir = tempdir().unwrap();
        let mut input = Cursor::new("ghost\n");
        let mut output = Vec::new();

        let result = run_console(&options(dir.path()), &mut input, &mut output);
        assert!(result.is_err());
    }
}
