use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SkinError};
use crate::output::{display_path, plural, Printer};
use crate::validation::validate_folder;

/// Check an entry.json against its asset folder
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Asset folders to validate
    #[arg(required = true)]
    pub folders: Vec<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let mut errors = 0;
    let mut warnings = 0;

    for folder in &args.folders {
        printer.status("Checking", &display_path(folder));

        let report = validate_folder(folder)?;
        for diagnostic in report.iter() {
            printer.diagnostic(diagnostic);
        }

        errors += report.error_count();
        warnings += report.warning_count();
    }

    let failed = errors > 0 || (args.strict && warnings > 0);
    if failed {
        return Err(SkinError::Validation {
            message: format!(
                "{}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
            help: (errors == 0).then(|| "Warnings fail the check because of --strict".to_string()),
        });
    }

    printer.status(
        "Finished",
        &format!(
            "{} valid ({})",
            plural(args.folders.len(), "entry", "entries"),
            plural(warnings, "warning", "warnings")
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{ColourSpec, EntryRecord, LayerEntry};
    use std::fs;
    use tempfile::tempdir;

    fn erase_entry(folder: &std::path::Path, advanced: bool) {
        EntryRecord::new(
            "Mask",
            &[LayerEntry {
                filename: "mask.png".to_string(),
                position: 1,
                colour: ColourSpec::Erase,
                advanced,
            }],
        )
        .write_to(folder)
        .unwrap();
    }

    #[test]
    fn test_validate_reports_errors() {
        let dir = tempdir().unwrap();
        erase_entry(dir.path(), true);

        let args = ValidateArgs {
            folders: vec![dir.path().to_path_buf()],
            strict: false,
        };
        let err = run(args, &Printer::plain()).unwrap_err();
        assert!(matches!(err, SkinError::Validation { .. }));
    }

    #[test]
    fn test_strict_fails_on_warnings() {
        let dir = tempdir().unwrap();
        image::RgbaImage::new(8, 8)
            .save(dir.path().join("mask.png"))
            .unwrap();
        erase_entry(dir.path(), false);

        let lenient = ValidateArgs {
            folders: vec![dir.path().to_path_buf()],
            strict: false,
        };
        run(lenient, &Printer::plain()).unwrap();

        let strict = ValidateArgs {
            folders: vec![dir.path().to_path_buf()],
            strict: true,
        };
        assert!(run(strict, &Printer::plain()).is_err());

        assert!(fs::read_to_string(dir.path().join("entry.json")).is_ok());
    }
}
