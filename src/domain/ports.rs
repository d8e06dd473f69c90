use crate::utils::error::Result;

/// Byte-level access to the file that backs the inventory.
///
/// A missing file must surface as an `std::io::ErrorKind::NotFound` I/O error so
/// callers can tell "not there" apart from other failures.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn inventory_path(&self) -> &str;
    fn verbose(&self) -> bool;
    fn log_format(&self) -> &str;
}
