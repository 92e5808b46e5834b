use super::stl_binary::HEADER_LEN;

/// The encoding of an STL buffer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum MeshFormat {
    /// Guess the format from the header with [`MeshFormat::detect`].
    #[default]
    Auto,
    /// The fixed-layout little-endian binary format.
    Binary,
    /// The whitespace-delimited text format.
    Ascii,
}

impl MeshFormat {
    /// Guesses the format of an STL buffer.
    ///
    /// The first 80 bytes are decoded as text, stripped of a UTF-8 byte order
    /// mark and trimmed: if they start with `solid` the buffer is assumed to be
    /// a text STL, otherwise a binary one.
    /// This is a convention, not a signature: some binary exporters write
    /// `solid` in their header too. Never returns [`MeshFormat::Auto`].
    pub fn detect(bytes: &[u8]) -> MeshFormat {
        let header = &bytes[..bytes.len().min(HEADER_LEN)];

        let text = String::from_utf8_lossy(header);

        if text
            .trim_start_matches('\u{feff}')
            .trim()
            .starts_with("solid")
        {
            MeshFormat::Ascii
        } else {
            MeshFormat::Binary
        }
    }
}
