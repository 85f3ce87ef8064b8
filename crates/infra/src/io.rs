// crates/infra/src/io.rs
pub mod documents;
pub mod file_reader;
pub mod file_writer;

pub use documents::{BrushEventDocument, DocumentFormat};
pub use file_reader::FileReader;
pub use file_writer::FileWriter;
