//! Entry authoring for multi-layer skin assets.
//!
//! An entry (`entry.json`) names an asset, lists its PNG layers in stacking
//! order and says how each layer may be recoloured. Entries are authored
//! interactively with an [`AuthoringSession`], usually driven by the console
//! transport in [`console`].
//!
//! # Example
//!
//! ```
//! use skinshop::entry::{AuthoringSession, Prompt};
//!
//! let mut session = AuthoringSession::new(vec!["base.png".to_string()]);
//! for answer in ["Cape", "1", "1", "erase"] {
//!     session.submit(answer)?;
//! }
//! assert_eq!(session.next_prompt(), Prompt::Done);
//!
//! let record = session.finish()?;
//! assert_eq!(record.advanced, vec![true]);
//! # Ok::<(), skinshop::SkinError>(())
//! ```

mod colour;
pub mod console;
mod folder;
mod hex;
mod record;
mod session;

pub use colour::{ColourSpec, SwatchColours, COPY_PREFIX, ERASE_MARKER, NONE_MARKER};
pub use console::{run_console, AuthoredEntry, ConsoleOptions};
pub use folder::{folder_name, FolderChoice};
pub use hex::normalize_hex;
pub use record::{EntryRecord, LayerEntry, ENTRY_FILENAME};
pub use session::{parse_integer, AuthoringSession, Prompt, Transition};
