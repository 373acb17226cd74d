pub mod dataset_reader;
pub mod table_reader;

pub use dataset_reader::load_dataset;
pub use table_reader::TableReader;
