//! # ratio-crop
//!
//! Center-crop a photo to a fixed aspect ratio, square (1:1) or the classic
//! 35mm frame (3:2), and write the result next to the original as
//! `{name}_cropped{ext}`.
//!
//! # Architecture
//!
//! ```text
//! select / CLI args  →  identify  →  compute rectangle  →  crop + encode
//!   (selection)         (backend)     (calculations)        (backend)
//! ```
//!
//! The only real logic is the rectangle computation, a pure function over
//! integer dimensions. Everything around it is I/O behind small seams so the
//! pipeline can be tested without decoding images or opening windows.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Crop geometry, parameter types, the `ImageBackend` trait and its `image`-crate implementation |
//! | [`crop`] | One crop attempt end to end, and the unified [`crop::CropError`] |
//! | [`selection`] | `SelectionUi` trait: terminal prompts, optional native dialogs, notifications |
//! | [`config`] | Stock defaults, optional TOML file, command-line overrides |
//! | [`naming`] | `{name}_cropped{ext}` output path convention |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Width First, Then Height
//!
//! For 3:2 the crop keeps the full width whenever the matching height fits,
//! and only otherwise keeps the full height. Derived sides are floored, so an
//! odd leftover pixel always ends up on the bottom or right edge. Because the
//! height fallback only triggers when the source is wider than 3:2, the
//! fallback width can never exceed the source width.
//!
//! ## No Implicit Config File
//!
//! The tool reads no configuration unless `--config` names a file. Running
//! it in a directory never changes its behavior.
//!
//! ## Same Format In, Same Format Out
//!
//! The output keeps the source extension and therefore its format. JPEG is
//! re-encoded at the configured quality; every other format is lossless.

pub mod config;
pub mod crop;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod selection;

#[cfg(test)]
pub(crate) mod test_helpers;
