//! File, prompt and formatting helpers.

use std::{
    fs,
    io::BufRead,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use stockdesk_shared::{resolve_image_url, InventoryItem};

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "svg"];

/// An image file read from disk, ready for a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// File name sent with the part.
    pub file_name: String,
    /// Guessed content type.
    pub mime_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// Reads an image from `path`, rejecting non-image extensions.
pub fn load_upload(path: &Path) -> Result<UploadFile> {
    if !has_image_extension(path, &IMAGE_EXTENSIONS) {
        bail!("not an image file: {}", path.display());
    }
    let bytes =
        fs::read(path).with_context(|| format!("failed to read image {}", path.display()))?;
    let mime_type = mime_guess2::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    Ok(UploadFile {
        file_name: file_name(path),
        mime_type,
        bytes,
    })
}

/// Loads every path, paired with a display label standing in for a preview.
pub fn load_uploads(paths: &[PathBuf]) -> Result<Vec<(UploadFile, String)>> {
    paths
        .iter()
        .map(|path| Ok((load_upload(path)?, path.display().to_string())))
        .collect()
}

/// Asks a yes/no question; anything but `y`/`yes` is a no.
pub fn confirm_from(mut input: impl BufRead, prompt: &str) -> Result<bool> {
    eprint!("{prompt} [y/N] ");
    let mut line = String::new();
    input.read_line(&mut line).context("failed to read confirmation")?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Renders items as an aligned text table.
pub fn format_table(items: &[InventoryItem], asset_host: &str) -> String {
    let header = ["ID", "NAME", "CATEGORY", "BRAND", "PRICE", "STOCK", "STATUS", "RX", "IMAGE"];
    let rows: Vec<[String; 9]> = items
        .iter()
        .map(|item| {
            [
                item.id.clone(),
                item.name.clone(),
                item.category.label().to_string(),
                item.brand.clone(),
                format!("{:.2}", item.price),
                item.stock.to_string(),
                item.status.code().to_string(),
                item.prescription.code().to_string(),
                resolve_image_url(asset_host, item.primary_image().as_deref()),
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: &[String]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render(header.map(str::to_string).as_slice())];
    lines.extend(rows.iter().map(|row| render(row.as_slice())));
    lines.join("\n")
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string()
}

fn has_image_extension(path: &Path, exts: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| exts.iter().any(|item| ext.eq_ignore_ascii_case(item)))
        .unwrap_or(false)
}
