// Modal rendering modules
mod utils;

pub mod detalle;
mod help;

pub use detalle::render_detalle_modal;
pub use help::render_help_modal;
