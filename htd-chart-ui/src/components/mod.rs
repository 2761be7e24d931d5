//! Reusable Dioxus RSX components for the temperature dashboard.

mod chart_container;
mod chart_header;
mod clear_button;
mod error_display;
mod file_upload;
mod loading_spinner;
mod mode_selector;
mod theme_toggle;
mod year_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use clear_button::ClearButton;
pub use error_display::ErrorDisplay;
pub use file_upload::FileUpload;
pub use loading_spinner::LoadingSpinner;
pub use mode_selector::ModeSelector;
pub use theme_toggle::ThemeToggle;
pub use year_selector::YearSelector;
