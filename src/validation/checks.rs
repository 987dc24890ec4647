//! Individual entry checks.
//!
//! Each check looks at one aspect of an entry and returns its own `Report`.

use std::collections::HashSet;

use palette::Srgb;

use crate::entry::ColourSpec;

use super::diagnostic::{Diagnostic, Report};
use super::EntryContext;

/// `layers`, `colors` and `advanced` must line up.
pub fn check_lengths(ctx: &EntryContext) -> Report {
    let mut report = Report::new();
    let record = &ctx.record;

    if !record.is_consistent() {
        report.push(
            Diagnostic::error(
                "parallel-length",
                format!(
                    "{} layers, {} colors and {} advanced flags",
                    record.layers.len(),
                    record.colors.len(),
                    record.advanced.len()
                ),
            )
            .with_help("Every layer needs exactly one colors entry and one advanced flag"),
        );
    }

    report
}

pub fn check_duplicate_layers(ctx: &EntryContext) -> Report {
    let mut report = Report::new();
    let mut seen = HashSet::new();

    for layer in &ctx.record.layers {
        if !seen.insert(layer.as_str()) {
            report.push(
                Diagnostic::error("duplicate-layer", "listed more than once").on_layer(layer),
            );
        }
    }

    report
}

pub fn check_missing_layers(ctx: &EntryContext) -> Report {
    let mut report = Report::new();

    for layer in &ctx.record.layers {
        if !ctx.files.contains(layer) {
            report.push(
                Diagnostic::error("missing-layer", "file not found in the asset folder")
                    .on_layer(layer),
            );
        }
    }

    report
}

/// PNGs in the folder that no layer uses still end up in the archive.
pub fn check_unused_files(ctx: &EntryContext) -> Report {
    let mut report = Report::new();

    for file in &ctx.files {
        if !ctx.record.layers.contains(file) {
            report.push(
                Diagnostic::warning("unused-file", "PNG is not listed as a layer")
                    .on_layer(file)
                    .with_help("Re-run `skinshop entry` or remove the file"),
            );
        }
    }

    report
}

pub fn check_copy_sources(ctx: &EntryContext) -> Report {
    let mut report = Report::new();

    for layer in ctx.record.layer_entries() {
        if let ColourSpec::CopyFrom(source) = &layer.colour {
            if !ctx.files.contains(source) {
                report.push(
                    Diagnostic::error(
                        "missing-copy-source",
                        format!("copies colours from '{}', which does not exist", source),
                    )
                    .on_layer(&layer.filename),
                );
            } else if *source == layer.filename {
                report.push(
                    Diagnostic::warning("self-copy", "copies colours from itself")
                        .on_layer(&layer.filename),
                );
            }
        }
    }

    report
}

/// Every swatch must be a full `#rrggbb` colour.
pub fn check_hex_codes(ctx: &EntryContext) -> Report {
    let mut report = Report::new();

    for layer in ctx.record.layer_entries() {
        let ColourSpec::Swatches(swatches) = &layer.colour else {
            continue;
        };

        for code in swatches.codes() {
            if !is_full_hex(code) {
                report.push(
                    Diagnostic::error("invalid-hex", format!("'{}' is not a colour", code))
                        .on_layer(&layer.filename)
                        .with_help("Use #rgb or #rrggbb hex colours"),
                );
            }
        }
    }

    report
}

fn is_full_hex(code: &str) -> bool {
    code.len() == 7 && code.starts_with('#') && code.parse::<Srgb<u8>>().is_ok()
}

/// Layers with swatches should all offer the same number of them.
pub fn check_swatch_counts(ctx: &EntryContext) -> Report {
    let mut report = Report::new();
    let mut expected: Option<usize> = None;

    for layer in ctx.record.layer_entries() {
        let ColourSpec::Swatches(swatches) = &layer.colour else {
            continue;
        };

        let Some(count) = expected else {
            expected = Some(swatches.len());
            continue;
        };

        if count != swatches.len() {
            report.push(
                Diagnostic::warning(
                    "swatch-count",
                    format!("has {} swatches, other layers have {}", swatches.len(), count),
                )
                .on_layer(&layer.filename),
            );
        }
    }

    report
}

/// Marker layers are always advanced when authored.
pub fn check_marker_advanced(ctx: &EntryContext) -> Report {
    let mut report = Report::new();

    for layer in ctx.record.layer_entries() {
        if layer.colour.is_marker() && !layer.advanced {
            report.push(
                Diagnostic::warning(
                    "marker-not-advanced",
                    format!("'{}' layer is not flagged advanced", layer.colour),
                )
                .on_layer(&layer.filename),
            );
        }
    }

    report
}

/// All layers are composited together, so they must share one size.
pub fn check_layer_sizes(ctx: &EntryContext) -> Report {
    let mut report = Report::new();
    let mut expected: Option<(String, (u32, u32))> = None;

    for layer in &ctx.record.layers {
        if !ctx.files.contains(layer) {
            continue;
        }

        let size = match image::image_dimensions(ctx.folder.join(layer)) {
            Ok(size) => size,
            Err(e) => {
                report.push(
                    Diagnostic::error("unreadable-image", format!("cannot read image: {}", e))
                        .on_layer(layer),
                );
                continue;
            }
        };

        if let Some((first, first_size)) = &expected {
            if *first_size != size {
                report.push(
                    Diagnostic::warning(
                        "size-mismatch",
                        format!(
                            "is {}x{}, but {} is {}x{}",
                            size.0, size.1, first, first_size.0, first_size.1
                        ),
                    )
                    .on_layer(layer),
                );
            }
        } else {
            expected = Some((layer.clone(), size));
        }
    }

    report
}

pub fn check_name(ctx: &EntryContext) -> Report {
    let mut report = Report::new();

    if ctx.record.name.trim().is_empty() {
        report.push(Diagnostic::warning("empty-name", "entry has no name"));
    }

    report
}
