use crate::error::{BoycottCheckError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// 対応する画像拡張子か（大文字小文字は区別しない）
pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

fn image_info(path: &Path) -> ImageInfo {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    ImageInfo {
        path: path.to_path_buf(),
        file_name,
    }
}

pub fn scan_folder(folder: &Path) -> Result<Vec<ImageInfo>> {
    if !folder.is_dir() {
        return Err(BoycottCheckError::FolderNotFound(folder.display().to_string()));
    }

    let mut images: Vec<ImageInfo> = WalkDir::new(folder)
        .max_depth(1) // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| is_image_extension(&ext.to_string_lossy()))
        })
        .map(|e| image_info(e.path()))
        .collect();

    // ファイル名でソート
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

/// 画像ファイル1枚、またはフォルダ直下の画像をまとめて取得
///
/// 単体ファイルは拡張子を問わずそのまま送る（判定はサーバーに任せる）。
pub fn collect_images(path: &Path) -> Result<Vec<ImageInfo>> {
    if path.is_file() {
        return Ok(vec![image_info(path)]);
    }
    if !path.exists() {
        return Err(BoycottCheckError::FileNotFound(path.display().to_string()));
    }

    let images = scan_folder(path)?;
    if images.is_empty() {
        return Err(BoycottCheckError::NoImagesFound(path.display().to_string()));
    }
    Ok(images)
}
