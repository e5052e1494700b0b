mod intent;
mod reducer;
mod state;
mod widget;

pub use intent::TableIntent;
pub use reducer::TableReducer;
pub use state::TableState;
pub use widget::render_product_table;
