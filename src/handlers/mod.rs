mod dump;
mod load;

pub use dump::dump_to_file;
pub use load::load_from_file;
