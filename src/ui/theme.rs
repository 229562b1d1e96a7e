//! Color theme constants for the guide UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for drawer and list titles
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

// ============================================================================
// Rules Content Colors
// ============================================================================

/// Inline content links
pub const COLOR_LINK: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Trait badges
pub const COLOR_TRAIT: Color = Color::Rgb(176, 132, 48);

/// Expandable section headers
pub const COLOR_SECTION: Color = Color::Cyan;

/// "Report a problem" hint
pub const COLOR_REPORT: Color = Color::Rgb(230, 120, 90);

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for dialog boxes (feedback)
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
