//! Cookie Jar Implementations

pub mod recording;

pub use recording::RecordingCookieJar;
