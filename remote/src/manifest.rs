use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const MANIFEST_FILE: &str = "manifest.json.base64";
pub const SIGNATURE_FILE: &str = "manifest.json.base64.sign.sha256.base64";
pub const CERTIFICATE_FILE: &str = "author.crt.pem.base64";

/// Algorithm the bundle's signature file is produced with.
pub const SIGNATURE_ALGORITHM: &str = "sha256";

/// Externally supplied payload manifest. The three files are owned by the
/// marketplace tooling and treated as opaque pass-through here; we only
/// require that they exist next to the invocation.
#[derive(Debug, Clone)]
pub struct ManifestBundle {
    pub payload: String,
    pub signature: String,
    pub certificate: String,
}

impl ManifestBundle {
    pub async fn load(dir: &Path) -> Result<ManifestBundle> {
        Ok(ManifestBundle {
            payload: read_part(dir.join(MANIFEST_FILE)).await?,
            signature: read_part(dir.join(SIGNATURE_FILE)).await?,
            certificate: read_part(dir.join(CERTIFICATE_FILE)).await?,
        })
    }
}

async fn read_part(path: PathBuf) -> Result<String> {
    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| Error::ReadManifestFile(path, e))?;

    Ok(contents.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_and_trims_all_parts() {
        let dir = std::env::temp_dir().join(format!("feed-bench-manifest-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(MANIFEST_FILE), "bWFuaWZlc3Q=\n").unwrap();
        std::fs::write(dir.join(SIGNATURE_FILE), "c2ln\n").unwrap();
        std::fs::write(dir.join(CERTIFICATE_FILE), "Y2VydA==\n").unwrap();

        let bundle = ManifestBundle::load(&dir).await.unwrap();

        assert_eq!(bundle.payload, "bWFuaWZlc3Q=");
        assert_eq!(bundle.signature, "c2ln");
        assert_eq!(bundle.certificate, "Y2VydA==");
    }

    #[tokio::test]
    async fn missing_file_is_reported_with_its_path() {
        let dir = std::env::temp_dir().join(format!(
            "feed-bench-manifest-missing-{}",
            std::process::id()
        ));

        match ManifestBundle::load(&dir).await {
            Err(Error::ReadManifestFile(path, _)) => {
                assert!(path.ends_with(MANIFEST_FILE));
            }
            other => panic!("unexpected result: {:?}", other.map(|b| b.payload)),
        }
    }
}
