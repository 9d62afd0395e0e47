//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Crop
//!
//! ```text
//! Cropped dawn.jpg 4032x3024 → 3024x3024 (1:1)
//!     Region: 3024x3024 at (504, 0)
//!     Cropped image saved at: photos/dawn_cropped.jpg
//! ```
//!
//! ## Plan
//!
//! ```text
//! dawn.jpg 4032x3024 → 3024x3024 (1:1)
//!     Region: 3024x3024 at (504, 0)
//!     Output: photos/dawn_cropped.jpg
//! ```
//!
//! # Architecture
//!
//! Each view has a pure `format_*` function returning `Vec<String>`, which
//! is what the tests check. The plan also has a `print_plan` wrapper that
//! writes to stdout. Notifications have no wrapper: each `SelectionUi`
//! shows [`format_notification`] its own way (stderr lines for the prompt,
//! a message box for the dialog).

use crate::imaging::operations::CropPlan;
use crate::selection::Notification;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Display name for a path: the file name when there is one.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// `dawn.jpg 4032x3024 → 3024x3024 (1:1)`
fn plan_header(plan: &CropPlan) -> String {
    format!(
        "{} {} → {} ({})",
        display_name(&plan.source),
        plan.source_dims,
        plan.rect.dimensions(),
        plan.ratio
    )
}

fn region_line(plan: &CropPlan) -> String {
    format!(
        "{}Region: {} at ({}, {})",
        indent(1),
        plan.rect.dimensions(),
        plan.rect.x,
        plan.rect.y
    )
}

/// Format a crop plan for the `plan` command.
pub fn format_plan(plan: &CropPlan) -> Vec<String> {
    vec![
        plan_header(plan),
        region_line(plan),
        format!("{}Output: {}", indent(1), plan.output.display()),
    ]
}

pub fn print_plan(plan: &CropPlan) {
    for line in format_plan(plan) {
        println!("{}", line);
    }
}

/// Format a notification shown at the end of a crop attempt.
pub fn format_notification(notification: &Notification) -> Vec<String> {
    match notification {
        Notification::Info(message) => vec![message.clone()],
        Notification::Success(plan) => vec![
            format!("Cropped {}", plan_header(plan)),
            region_line(plan),
            format!(
                "{}Cropped image saved at: {}",
                indent(1),
                plan.output.display()
            ),
        ],
        Notification::Error(message) => vec![format!("Error: {}", message)],
    }
}
