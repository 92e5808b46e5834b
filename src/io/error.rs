use std::path::PathBuf;

/// Errors raised while decoding the bytes of a mesh file.
///
/// Every variant except [`DecodeError::SizeLimit`] is a format error: the
/// bytes do not match the layout they claim to follow.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer is too short to contain the binary header and triangle count.
    #[error("truncated binary STL header: expected at least {expected} bytes, found {found}.")]
    TruncatedHeader {
        /// The minimum number of bytes of a binary STL.
        expected: usize,
        /// The actual buffer length.
        found: usize,
    },
    /// The buffer is shorter than what the declared triangle count requires.
    #[error("truncated binary STL: {num_triangles} triangles need {expected} bytes, found {found}.")]
    TruncatedTriangles {
        /// The triangle count read from the header.
        num_triangles: u32,
        /// The number of bytes required by that count.
        expected: u64,
        /// The actual buffer length.
        found: usize,
    },
    /// A vertex coordinate of a text STL is not a valid number.
    #[error("invalid coordinate `{token}` for the vertex {vertex} of the text STL.")]
    InvalidNumber {
        /// The offending token.
        token: String,
        /// The index of the vertex this token belongs to.
        vertex: usize,
    },
    /// A text STL contains a number of vertices that is not a multiple of 3.
    #[error("the text STL contains {0} vertices, which is not a whole number of triangles.")]
    VertexCountMismatch(usize),
    /// The mesh would decode into more coordinates than the sanity limit allows.
    #[error("the STL describes {num_coords} coordinates, more than the limit of {limit}.")]
    SizeLimit {
        /// The number of coordinates the input describes.
        num_coords: u64,
        /// The maximum number of coordinates accepted by the decoder.
        limit: u64,
    },
}

impl DecodeError {
    /// Is this error caused by malformed or truncated input?
    pub fn is_format_error(&self) -> bool {
        !self.is_size_limit_error()
    }

    /// Is this error caused by an input exceeding the decoder size limit?
    pub fn is_size_limit_error(&self) -> bool {
        matches!(self, DecodeError::SizeLimit { .. })
    }
}

/// Errors raised while loading a mesh file from disk.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// The path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The file content could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
