//! Texture handling for the rendering pipeline.
//!
//! Block faces only carry a texture slot. This module owns the decoded image data
//! behind those slots: a [`TextureRegistry`] is constructed explicitly, filled with
//! images through its load functions and passed to whatever uploads them.

use std::collections::HashMap;
use std::path::Path;

use image::ImageFormat;
use log::info;

use crate::error::TextureError;

/// Handle to a texture loaded into a [`TextureRegistry`].
///
/// Ids are assigned in load order starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// Decoded RGBA8 pixel data for one texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    /// Tightly packed rows, four bytes per pixel.
    pub rgba: Vec<u8>,
}

/// Name-keyed store of decoded textures.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    ids: HashMap<String, TextureId>,
    textures: Vec<TextureData>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an in-memory PNG and registers it under `name`.
    ///
    /// # Errors
    /// * [`TextureError::DuplicateTexture`] if `name` is taken.
    /// * [`TextureError::Decode`] if the bytes are not a valid PNG.
    pub fn load_png(&mut self, name: &str, bytes: &[u8]) -> Result<TextureId, TextureError> {
        if self.ids.contains_key(name) {
            return Err(TextureError::DuplicateTexture(name.to_string()));
        }

        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.to_rgba8();
        Ok(self.insert(name, image))
    }

    /// Reads and decodes an image file, guessing the format from its contents.
    ///
    /// # Errors
    /// * [`TextureError::DuplicateTexture`] if `name` is taken.
    /// * [`TextureError::Io`] if the file cannot be read.
    /// * [`TextureError::Decode`] if the file is not a supported image.
    pub fn load_file(
        &mut self,
        name: &str,
        path: impl AsRef<Path>,
    ) -> Result<TextureId, TextureError> {
        if self.ids.contains_key(name) {
            return Err(TextureError::DuplicateTexture(name.to_string()));
        }

        let bytes = std::fs::read(path.as_ref())?;
        let image = image::load_from_memory(&bytes)?.to_rgba8();
        Ok(self.insert(name, image))
    }

    /// Looks up the id of a loaded texture.
    ///
    /// # Errors
    /// [`TextureError::UnknownTexture`] if nothing was loaded under `name`.
    pub fn get_texture(&self, name: &str) -> Result<TextureId, TextureError> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| TextureError::UnknownTexture(name.to_string()))
    }

    /// Pixel data of a loaded texture.
    pub fn data(&self, id: TextureId) -> Option<&TextureData> {
        self.textures.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    fn insert(&mut self, name: &str, image: image::RgbaImage) -> TextureId {
        let id = TextureId(self.textures.len() as u32);
        let (width, height) = image.dimensions();
        info!("Loaded texture '{}' ({}x{}) as slot {}", name, width, height, id.0);

        self.textures.push(TextureData {
            width,
            height,
            rgba: image.into_raw(),
        });
        self.ids.insert(name.to_string(), id);
        id
    }
}
