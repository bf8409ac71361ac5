// SPDX-License-Identifier: MPL-2.0
use crate::application::port::camera::CameraError;
use crate::application::port::picker::PickerError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Camera(CameraError),
    Picker(PickerError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Camera(e) => write!(f, "Camera Error: {}", e),
            Error::Picker(e) => write!(f, "Picker Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CameraError> for Error {
    fn from(err: CameraError) -> Self {
        Error::Camera(err)
    }
}

impl From<PickerError> for Error {
    fn from(err: PickerError) -> Self {
        Error::Picker(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::camera::Facing;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn camera_error_converts_and_displays() {
        let err: Error = CameraError::DeviceUnavailable(Facing::Front).into();
        assert!(matches!(err, Error::Camera(_)));
        assert!(format!("{}", err).contains("front"));
    }

    #[test]
    fn picker_error_converts() {
        let err: Error = PickerError::Decode("truncated".into()).into();
        assert!(matches!(err, Error::Picker(PickerError::Decode(_))));
    }
}
