pub mod search_box;
pub mod service_board;
pub mod service_card;
pub mod services_grid;
