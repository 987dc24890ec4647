//! Step-by-step entry authoring.
//!
//! `AuthoringSession` holds the answers collected so far and knows which
//! question comes next. It does no IO: a transport asks for `next_prompt`,
//! shows it however it likes, and feeds the answer back through `submit`.
//!
//! Question order:
//! 1. asset name
//! 2. swatch count (repeated until positive)
//! 3. for every PNG file: which layer comes next, then its swatch colours,
//!    then (unless a marker was given) whether it is advanced

use std::fmt;

use crate::error::{Result, SkinError};

use super::colour::{ColourSpec, SwatchColours, ERASE_MARKER, NONE_MARKER, PNG_SUFFIX};
use super::hex::normalize_hex;
use super::record::{EntryRecord, LayerEntry};

/// The question the session is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Name,
    Swatches,
    /// Choose the next layer. `remaining` pairs 1-based menu numbers (from the
    /// full file list) with file names that have not been chosen yet.
    Layer {
        round: usize,
        remaining: Vec<(usize, String)>,
    },
    /// One swatch colour (1-based) for the layer being configured.
    Swatch { layer: String, swatch: usize },
    Advanced { layer: String },
    Done,
}

impl Prompt {
    pub fn is_done(&self) -> bool {
        matches!(self, Prompt::Done)
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prompt::Name => write!(f, "Name of asset? > "),
            Prompt::Swatches => write!(f, "Number of default color swatches? > "),
            Prompt::Layer { round, .. } => write!(f, "Layer {}? > ", round),
            Prompt::Swatch { swatch, .. } => write!(f, "Color for swatch {}? > ", swatch),
            Prompt::Advanced { .. } => write!(f, "Is this an advanced layer? (y/n) > "),
            Prompt::Done => Ok(()),
        }
    }
}

/// What an accepted answer did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The answer was recorded; ask `next_prompt` again.
    Next,
    /// The answer was valid but not acceptable; the same question repeats.
    Retry,
    /// A layer was fully configured.
    LayerDone(LayerEntry),
    /// Every layer is configured; call `finish`.
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Name,
    Swatches,
    Layer,
    Swatch(usize),
    Advanced,
    Done,
}

#[derive(Debug, Clone)]
struct PendingLayer {
    index: usize,
    codes: Vec<String>,
    colour: Option<ColourSpec>,
}

/// Interactive authoring state for one asset folder.
#[derive(Debug, Clone)]
pub struct AuthoringSession {
    files: Vec<String>,
    chosen: Vec<bool>,
    name: String,
    swatches: usize,
    layers: Vec<LayerEntry>,
    pending: Option<PendingLayer>,
    stage: Stage,
}

impl AuthoringSession {
    /// Start a session over the folder's PNG files, in menu order.
    pub fn new(files: Vec<String>) -> Self {
        let chosen = vec![false; files.len()];
        Self {
            files,
            chosen,
            name: String::new(),
            swatches: 0,
            layers: Vec::new(),
            pending: None,
            stage: Stage::Name,
        }
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn swatches(&self) -> usize {
        self.swatches
    }

    pub fn layers(&self) -> &[LayerEntry] {
        &self.layers
    }

    pub fn is_complete(&self) -> bool {
        self.stage == Stage::Done
    }

    pub fn next_prompt(&self) -> Prompt {
        match self.stage {
            Stage::Name => Prompt::Name,
            Stage::Swatches => Prompt::Swatches,
            Stage::Layer => Prompt::Layer {
                round: self.layers.len() + 1,
                remaining: self
                    .files
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !self.chosen[*i])
                    .map(|(i, file)| (i + 1, file.clone()))
                    .collect(),
            },
            Stage::Swatch(swatch) => Prompt::Swatch {
                layer: self.pending_file(),
                swatch,
            },
            Stage::Advanced => Prompt::Advanced {
                layer: self.pending_file(),
            },
            Stage::Done => Prompt::Done,
        }
    }

    /// Feed one answer (without its line ending) to the current question.
    ///
    /// On error the session is left exactly as it was.
    pub fn submit(&mut self, answer: &str) -> Result<Transition> {
        match self.stage {
            Stage::Name => {
                self.name = answer.to_string();
                self.stage = Stage::Swatches;
                Ok(Transition::Next)
            }
            Stage::Swatches => self.submit_swatches(answer),
            Stage::Layer => self.submit_layer(answer),
            Stage::Swatch(swatch) => self.submit_swatch(swatch, answer),
            Stage::Advanced => {
                let advanced = answer.to_lowercase() == "y";
                let colour = self.pending.as_mut().and_then(|p| p.colour.take());
                match colour {
                    Some(colour) => Ok(self.complete_layer(colour, advanced)),
                    None => Err(Self::state_error("no colours recorded for this layer")),
                }
            }
            Stage::Done => Err(Self::state_error("the entry is already complete")),
        }
    }

    /// Turn a completed session into its record.
    pub fn finish(self) -> Result<EntryRecord> {
        if self.stage != Stage::Done {
            return Err(Self::state_error("the entry is not complete yet"));
        }
        Ok(EntryRecord::new(self.name, &self.layers))
    }

    fn submit_swatches(&mut self, answer: &str) -> Result<Transition> {
        let count = parse_integer(answer)?;
        if count <= 0 {
            return Ok(Transition::Retry);
        }

        self.swatches = count as usize;
        Ok(self.advance_to_layer())
    }

    fn submit_layer(&mut self, answer: &str) -> Result<Transition> {
        let number = parse_integer(answer)?;
        let count = self.files.len();
        if number < 1 || number as usize > count {
            return Err(SkinError::IndexRange {
                index: number,
                count,
            });
        }

        let index = number as usize - 1;
        if self.chosen[index] {
            return Err(SkinError::AlreadySelected {
                index: number as usize,
                file: self.files[index].clone(),
            });
        }

        self.chosen[index] = true;
        self.pending = Some(PendingLayer {
            index,
            codes: Vec::with_capacity(self.swatches),
            colour: None,
        });
        self.stage = Stage::Swatch(1);
        Ok(Transition::Next)
    }

    fn submit_swatch(&mut self, swatch: usize, answer: &str) -> Result<Transition> {
        let value = answer.to_lowercase();

        let marker = if value == NONE_MARKER {
            Some(ColourSpec::Uncolourable)
        } else if value == ERASE_MARKER {
            Some(ColourSpec::Erase)
        } else if value.ends_with(PNG_SUFFIX) {
            Some(ColourSpec::CopyFrom(value.clone()))
        } else {
            None
        };

        if let Some(colour) = marker {
            return Ok(self.complete_layer(colour, true));
        }

        let swatches = self.swatches;
        let pending = match self.pending.as_mut() {
            Some(pending) => pending,
            None => return Err(Self::state_error("no layer is being configured")),
        };
        pending.codes.push(normalize_hex(&value));

        if swatch < swatches {
            self.stage = Stage::Swatch(swatch + 1);
        } else {
            let codes = std::mem::take(&mut pending.codes);
            pending.colour = Some(ColourSpec::Swatches(SwatchColours::from_codes(codes)));
            self.stage = Stage::Advanced;
        }
        Ok(Transition::Next)
    }

    fn complete_layer(&mut self, colour: ColourSpec, advanced: bool) -> Transition {
        let index = self.pending.take().map(|p| p.index).unwrap_or_default();
        let entry = LayerEntry {
            filename: self.files[index].clone(),
            position: self.layers.len() + 1,
            colour,
            advanced,
        };
        self.layers.push(entry.clone());

        match self.advance_to_layer() {
            Transition::Complete => Transition::Complete,
            _ => Transition::LayerDone(entry),
        }
    }

    fn advance_to_layer(&mut self) -> Transition {
        if self.layers.len() == self.files.len() {
            self.stage = Stage::Done;
            Transition::Complete
        } else {
            self.stage = Stage::Layer;
            Transition::Next
        }
    }

    fn pending_file(&self) -> String {
        self.pending
            .as_ref()
            .map(|p| self.files[p.index].clone())
            .unwrap_or_default()
    }

    fn state_error(message: &str) -> SkinError {
        SkinError::Session {
            message: message.to_string(),
        }
    }
}

/// Parse an integer answer the way the prompts expect (surrounding space allowed).
pub fn parse_integer(answer: &str) -> Result<i64> {
    answer.trim().parse::<i64>().map_err(|_| SkinError::InputParse {
        input: answer.to_string(),
        expected: "a whole number".to_string(),
    })
}
