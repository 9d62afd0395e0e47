//! Interactive selection of the image and ratio, plus user notifications.
//!
//! The crop pipeline never talks to the terminal or a window directly; it
//! goes through a [`SelectionUi`]. Two implementations exist:
//!
//! - [`PromptSelection`]: line-based prompts on any `BufRead`/`Write` pair
//!   (stdin/stderr in the binary, byte buffers in tests).
//! - `DialogSelection` (feature `dialog`): native file picker and message
//!   boxes via `rfd`.

use crate::imaging::operations::CropPlan;
use crate::imaging::{AspectRatio, has_supported_extension};
use crate::output;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("No file selected.")]
    NoFileSelected,
    #[error("No aspect ratio selected.")]
    NoRatioSelected,
    #[error("Unsupported file type: {}", .0.display())]
    UnsupportedFile(PathBuf),
    #[error("Unrecognized aspect ratio choice '{0}' (expected 1:1 or 3:2)")]
    UnrecognizedChoice(String),
    #[error("Failed to read selection: {0}")]
    Io(#[from] std::io::Error),
}

/// A message shown to the user once a crop attempt ends.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Info(String),
    Success(CropPlan),
    Error(String),
}

impl Notification {
    /// Window/heading title for the notification.
    pub fn title(&self) -> &'static str {
        match self {
            Notification::Info(_) => "Info",
            Notification::Success(_) => "Success",
            Notification::Error(_) => "Error",
        }
    }
}

/// Source of user choices and sink for notifications.
pub trait SelectionUi {
    /// Ask for the image to crop.
    fn select_path(&mut self) -> Result<PathBuf, SelectionError>;

    /// Ask for the target ratio; `default` is offered as the preselected choice.
    fn select_ratio(&mut self, default: AspectRatio) -> Result<AspectRatio, SelectionError>;

    /// Show the outcome of a crop attempt.
    fn notify(&mut self, notification: &Notification);
}

/// Check a picked path against the decodable extensions.
pub fn validate_selected_path(path: PathBuf) -> Result<PathBuf, SelectionError> {
    if has_supported_extension(&path) {
        Ok(path)
    } else {
        Err(SelectionError::UnsupportedFile(path))
    }
}

/// Terminal prompts over any reader/writer pair.
pub struct PromptSelection<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSelection<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line. EOF reads as an empty line.
    fn ask(&mut self, prompt: &str) -> Result<String, SelectionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl PromptSelection<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Prompts and notifications go to stderr, keeping stdout for command output.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

/// Strip one pair of matching quotes, as added by terminals on drag-and-drop.
fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    s
}

/// Parse a ratio answer: a label/name, or a 1-based menu index.
fn parse_ratio_choice(answer: &str) -> Result<AspectRatio, SelectionError> {
    if let Ok(index) = answer.parse::<usize>() {
        if let Some(ratio) = index.checked_sub(1).and_then(|i| AspectRatio::ALL.get(i)) {
            return Ok(*ratio);
        }
    }
    answer
        .parse()
        .map_err(|_| SelectionError::UnrecognizedChoice(answer.to_string()))
}

impl<R: BufRead, W: Write> SelectionUi for PromptSelection<R, W> {
    fn select_path(&mut self) -> Result<PathBuf, SelectionError> {
        let answer = self.ask("Image path: ")?;
        let answer = unquote(&answer);
        if answer.is_empty() {
            return Err(SelectionError::NoFileSelected);
        }
        validate_selected_path(Path::new(answer).to_path_buf())
    }

    fn select_ratio(&mut self, default: AspectRatio) -> Result<AspectRatio, SelectionError> {
        let menu: Vec<String> = AspectRatio::ALL
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{}) {}", i + 1, r))
            .collect();
        let answer = self.ask(&format!(
            "Aspect ratio [{}] (default {}): ",
            menu.join(", "),
            default
        ))?;
        if answer.is_empty() {
            return Ok(default);
        }
        parse_ratio_choice(&answer)
    }

    fn notify(&mut self, notification: &Notification) {
        for line in output::format_notification(notification) {
            // Nowhere left to report a failed write
            let _ = writeln!(self.output, "{line}");
        }
    }
}

#[cfg(feature = "dialog")]
pub use dialog::DialogSelection;

#[cfg(feature = "dialog")]
mod dialog {
    use super::*;
    use crate::imaging::supported_input_extensions;
    use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

    const CANCEL_LABEL: &str = "Cancel";

    /// Map the ratio dialog's answer to a ratio.
    ///
    /// Platforms without custom labels report the button position instead.
    /// Closing the dialog reports `Cancel`.
    fn ratio_from_dialog(
        result: MessageDialogResult,
    ) -> Result<AspectRatio, SelectionError> {
        let [first, second] = AspectRatio::ALL;
        match result {
            MessageDialogResult::Custom(label) if label != CANCEL_LABEL => {
                parse_ratio_choice(&label)
            }
            MessageDialogResult::Yes => Ok(first),
            MessageDialogResult::No => Ok(second),
            _ => Err(SelectionError::NoRatioSelected),
        }
    }

    /// Native file picker and message boxes.
    #[derive(Default)]
    pub struct DialogSelection;

    impl DialogSelection {
        pub fn new() -> Self {
            Self
        }
    }

    impl SelectionUi for DialogSelection {
        fn select_path(&mut self) -> Result<PathBuf, SelectionError> {
            let path = FileDialog::new()
                .set_title("Select an Image")
                .add_filter("Image Files", supported_input_extensions())
                .pick_file()
                .ok_or(SelectionError::NoFileSelected)?;
            validate_selected_path(path)
        }

        fn select_ratio(&mut self, default: AspectRatio) -> Result<AspectRatio, SelectionError> {
            let [first, second] = AspectRatio::ALL;
            let result = MessageDialog::new()
                .set_title("Aspect Ratio")
                .set_description(format!("Crop to which aspect ratio? (default {default})"))
                .set_level(MessageLevel::Info)
                .set_buttons(MessageButtons::YesNoCancelCustom(
                    first.label().to_string(),
                    second.label().to_string(),
                    CANCEL_LABEL.to_string(),
                ))
                .show();
            ratio_from_dialog(result)
        }

        fn notify(&mut self, notification: &Notification) {
            let level = match notification {
                Notification::Error(_) => MessageLevel::Error,
                _ => MessageLevel::Info,
            };
            MessageDialog::new()
                .set_title(notification.title())
                .set_description(output::format_notification(notification).join("\n"))
                .set_level(level)
                .set_buttons(MessageButtons::Ok)
                .show();
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn ratio_buttons_map_to_ratios() {
            assert_eq!(
                ratio_from_dialog(MessageDialogResult::Custom("1:1".into())).unwrap(),
                AspectRatio::Square
            );
            assert_eq!(
                ratio_from_dialog(MessageDialogResult::Custom("3:2".into())).unwrap(),
                AspectRatio::Standard
            );
            assert_eq!(
                ratio_from_dialog(MessageDialogResult::Yes).unwrap(),
                AspectRatio::Square
            );
            assert_eq!(
                ratio_from_dialog(MessageDialogResult::No).unwrap(),
                AspectRatio::Standard
            );
        }

        #[test]
        fn dismissed_ratio_dialog_selects_nothing() {
            for result in [
                MessageDialogResult::Cancel,
                MessageDialogResult::Custom(CANCEL_LABEL.into()),
                MessageDialogResult::Ok,
            ] {
                assert!(matches!(
                    ratio_from_dialog(result),
                    Err(SelectionError::NoRatioSelected)
                ));
            }
        }
    }
}
