//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the pure scoring core and
//! the outside world (randomness, remote word lists, the video platform).
//!
//! Implementations live in the `adapters` module; tests supply their own.

mod random_source;
mod reference_source;
mod video_platform;

pub use random_source::{RandomSource, pick};
pub use reference_source::{ReferenceError, ReferenceSource};
pub use video_platform::{
    Credential, MIN_CREDENTIAL_LEN, PlatformError, SearchOrder, SearchQuery, VideoPlatform,
};
