//! File selection and media type detection.
//!
//! The browser hands its backend a declared MIME type; on the CLI side the
//! nearest equivalent is the file extension. Only `audio/*` and `video/*`
//! types are accepted, anything else is rejected before a request exists.

use std::path::{Path, PathBuf};

use super::ClientError;
use crate::domain::types::is_supported_media_type;

/// A file that passed the media type check.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub mime_type: String,
}

/// Declared media type for a path, by extension.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        "aac" => "audio/aac",
        "ogg" | "oga" => "audio/ogg",
        "opus" => "audio/opus",
        "flac" => "audio/flac",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        _ => return None,
    };
    Some(mime)
}

/// Validate a user-selected path. No request is ever issued for a file
/// that fails here.
pub fn select_file(path: &Path) -> Result<SelectedFile, ClientError> {
    let mime_type = mime_for_path(path).ok_or(ClientError::InvalidFile)?;
    if !is_supported_media_type(mime_type) {
        return Err(ClientError::InvalidFile);
    }

    Ok(SelectedFile {
        path: path.to_path_buf(),
        mime_type: mime_type.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_audio_extensions_map_to_audio_types() {
        assert_eq!(mime_for_path(Path::new("voz.mp3")), Some("audio/mpeg"));
        assert_eq!(mime_for_path(Path::new("voz.WAV")), Some("audio/wav"));
        assert_eq!(mime_for_path(Path::new("voz.flac")), Some("audio/flac"));
    }

    #[test]
    fn known_video_extensions_map_to_video_types() {
        assert_eq!(mime_for_path(Path::new("clip.mp4")), Some("video/mp4"));
        assert_eq!(mime_for_path(Path::new("clip.webm")), Some("video/webm"));
    }

    #[test]
    fn unknown_or_missing_extension_yields_none() {
        assert_eq!(mime_for_path(Path::new("notas.txt")), None);
        assert_eq!(mime_for_path(Path::new("sin_extension")), None);
    }

    #[test]
    fn select_file_accepts_media() {
        let file = select_file(Path::new("/tmp/entrevista.mp3")).unwrap();
        assert_eq!(file.mime_type, "audio/mpeg");
        assert_eq!(file.path, PathBuf::from("/tmp/entrevista.mp3"));
    }

    #[test]
    fn select_file_rejects_non_media() {
        let err = select_file(Path::new("/tmp/documento.pdf")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidFile));
        assert!(err.to_string().starts_with("Por favor, selecciona"));
    }
}
