//! CSV field rendering shared by the marketplace row formats.
//!
//! Rows are assembled by hand rather than through a CSV writer: the upload
//! tools expect text fields and lists quoted even when no comma is present,
//! and list elements joined with a bare `,` inside the quotes. Embedded quotes
//! and commas inside list elements are not escaped. Scalar fields (filename,
//! country, timecode, category code) are written as they are.

/// Field separator, also used to join list elements
pub const DELIMITER: &str = ",";

/// Wrap a text field in double quotes unconditionally
pub fn quoted(field: &str) -> String {
    format!("\"{}\"", field)
}

/// Join list elements and quote the result
pub fn quoted_list<S: AsRef<str>>(items: &[S]) -> String {
    let joined: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    quoted(&joined.join(DELIMITER))
}

/// Render a boolean as `yes` / `no`
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Join rendered fields into one row
pub fn row<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .map(|f| f.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(DELIMITER)
}
