//! Limits applied while decoding untrusted documents.

/// zstd frame magic number (little-endian 0xFD2FB528).
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Default maximum nesting of GeometryCollections and FeatureCollections.
///
/// serde_json stops at 128 levels of raw JSON nesting and every collection
/// level costs two (object plus array), so anything above 64 is unreachable.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Default maximum document size in bytes (after decompression).
pub const MAX_DOCUMENT_SIZE: usize = 256 * 1024 * 1024;

/// zstd level the inspect tool passes to `encode_document_compressed` unless told otherwise.
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 3;
