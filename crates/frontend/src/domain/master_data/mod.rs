pub mod details;
pub mod list;
pub mod screen;

pub use details::EditorMode;
pub use list::master_data_page;
pub use screen::MasterDataScreen;
