//! PDF reports: profile cards and the statistics report.
//!
//! `card` and `charts` produce a [`layout::Canvas`]; `render` writes it out.

pub mod card;
pub mod charts;
pub mod layout;
pub mod photo;
pub mod render;

pub use card::{card_file_name, profile_card_layout, profile_cards_layout, CARDS_FILE_NAME};
pub use charts::statistics_layout;
pub use layout::Canvas;
pub use photo::{load_image, PhotoError};
pub use render::render_pdf;
