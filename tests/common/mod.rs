use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str = "amount, card_number, account_number, cvv, expiration_date, cardholder_name";

pub fn requests_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file.flush().unwrap();
    file
}
