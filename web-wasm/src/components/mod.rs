pub mod arrow_nav;
pub mod header;
pub mod mode_switch;
pub mod result_panel;
pub mod search_box;
pub mod upload_area;
