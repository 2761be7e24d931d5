//! Core types and CSV parser for historical temperature data.
//!
//! - `reading`: a temperature cell that is either a value or missing
//! - `month` / `column`: the calendar months and the expected CSV columns
//! - `record`: one row of the dataset
//! - `parser`: CSV text to `Dataset`
//! - `view`: the Monthly/Yearly display selection

pub mod column;
pub mod error;
pub mod month;
pub mod parser;
pub mod reading;
pub mod record;
pub mod view;

pub use column::Column;
pub use error::ParseError;
pub use month::Month;
pub use reading::Reading;
pub use record::{Dataset, TemperatureRecord};
pub use view::ViewMode;
