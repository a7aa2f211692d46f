mod get_logo;

pub use get_logo::get_logo_handler;
