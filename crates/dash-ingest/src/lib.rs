pub mod headers;
pub mod reader;
pub mod table;

pub use headers::{read_headers, read_headers_from_path};
pub use reader::{read_csv_table, read_upload};
pub use table::RawTable;
