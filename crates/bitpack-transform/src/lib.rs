//! # bitpack-transform
//!
//! Domain transforms layered over the `bitpack` codec, and a concrete entity
//! snapshot codec built from them.
//!
//! [transform::FixedPoint] and [transform::Bias] map domain values onto
//! integer slots before `bitpack` packs them, and back after it unpacks.
//! [snapshot::SnapshotCodec] composes both with a fixed 142-bit schema.
//! [scaled::ScaledCodec] applies a per-field [transform::FixedPoint] to any
//! schema, configured in code or (with the `serde` feature) from a JSON
//! schema's `precision` entries.
//!
//! ## Example
//!
//! ```
//! use bitpack_transform::snapshot::{EntitySnapshot, SnapshotCodec};
//!
//! let codec = SnapshotCodec::new().unwrap();
//! let snapshot = EntitySnapshot {
//!     x: 1234.56,
//!     z: -4567.89,
//!     head_yaw: -12,
//!     head_pitch: -20,
//!     anim_frame: 512,
//!     ..Default::default()
//! };
//!
//! let packed = codec.encode(&snapshot).unwrap();
//! assert_eq!(codec.decode(&packed), snapshot);
//! ```

pub mod errors;
pub mod scaled;
pub mod snapshot;
pub mod transform;
