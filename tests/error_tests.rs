//! Error message formatting tests

use asset_downloads::error::AssetError;
use std::path::PathBuf;

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_unknown_asset() {
        let err = AssetError::UnknownAsset("bogus.tif".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Unknown asset"));
        assert!(msg.contains("bogus.tif"));
    }

    #[test]
    fn test_source_missing() {
        let err = AssetError::SourceMissing {
            asset: "textured_model.zip".to_string(),
            path: PathBuf::from("/media/project/1/task/2/assets/odm_texturing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("textured_model.zip"));
        assert!(msg.contains("odm_texturing"));
        assert!(msg.contains("does not exist"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AssetError = io.into();
        assert!(matches!(err, AssetError::IoError(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let err: AssetError = parse.into();
        assert!(err.to_string().starts_with("Config parse error"));
    }
}
