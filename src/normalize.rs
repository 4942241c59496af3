use crate::document::{decode, encode, sort_keys};
use crate::error::{Error, Result};
use std::path::Path;

/// Rewrite a JSON file in place with its keys sorted.
///
/// The file is read and closed before anything is written, so a decode
/// failure leaves it exactly as it was. There is no backup.
pub fn normalize_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.into(),
        source,
    })?;
    let doc = decode(&bytes).map_err(|source| Error::Decode {
        path: path.into(),
        source,
    })?;
    let out = encode(&sort_keys(doc)).map_err(|source| Error::Encode {
        path: path.into(),
        source,
    })?;
    std::fs::write(path, out).map_err(|source| Error::Write {
        path: path.into(),
        source,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use indoc::indoc;
    use std::fs;

    #[test]
    fn rewrites_in_place() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("thingino-camera.json");
        fs::write(&path, r#"{"sensor":{"model":"gc2053","i2c":"0x37"},"board":"t31"}"#)?;

        normalize_file(&path)?;
        assert_eq!(
            fs::read_to_string(&path)?,
            indoc! {r#"
                {
                  "board": "t31",
                  "sensor": {
                    "i2c": "0x37",
                    "model": "gc2053"
                  }
                }"#}
        );
        Ok(())
    }

    #[test]
    fn twice_is_once() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("thingino-camera.json");
        fs::write(&path, r#"{"b":[{"d":"ü","c":1}],"a":0.5}"#)?;

        normalize_file(&path)?;
        let once = fs::read(&path)?;
        normalize_file(&path)?;
        assert_eq!(fs::read(&path)?, once);
        Ok(())
    }

    #[test]
    fn malformed_left_untouched() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("thingino-camera.json");
        fs::write(&path, r#"{"a":"#)?;

        match normalize_file(&path) {
            Err(Error::Decode { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected decode error, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(&path)?, r#"{"a":"#);
        Ok(())
    }

    #[test]
    fn missing_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let result = normalize_file(dir.path().join("gone.json"));
        assert!(matches!(result, Err(Error::Read { .. })));
        Ok(())
    }
}
