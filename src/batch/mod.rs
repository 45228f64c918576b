mod dispatch;
mod io;
mod runner;

pub use dispatch::{is_valid_record, process_entries, process_record};
pub use io::{read_json_file, write_json_file};
pub use runner::process_directory;
