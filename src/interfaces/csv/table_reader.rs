use serde::de::DeserializeOwned;
use std::io::Read;
use std::marker::PhantomData;

/// Reads one entity table from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over deserialized rows.
/// Whitespace around fields is trimmed; the header row names the columns.
pub struct TableReader<R: Read, T: DeserializeOwned> {
    reader: csv::Reader<R>,
    _row: PhantomData<T>,
}

impl<R: Read, T: DeserializeOwned> TableReader<R, T> {
    /// Creates a new `TableReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self {
            reader,
            _row: PhantomData,
        }
    }

    /// Returns an iterator that lazily reads and deserializes rows.
    pub fn rows(self) -> impl Iterator<Item = Result<T, csv::Error>> {
        self.reader.into_deserialize()
    }
}
