use image::RgbaImage;
use survivor_core::TextureId;

/// A decoded image and the name it was registered under.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub label: String,
    pub image: RgbaImage,
}

impl StoredImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Decoded images in registration order.  A [`TextureId`] is the index of
/// its image, so a renderer that uploads in iteration order can use the id
/// directly.
#[derive(Debug, Clone, Default)]
pub struct ImageStore {
    images: Vec<StoredImage>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, image: RgbaImage) -> TextureId {
        let id = TextureId(self.images.len() as u32);
        self.images.push(StoredImage {
            label: label.into(),
            image,
        });
        id
    }

    pub fn get(&self, id: TextureId) -> Option<&StoredImage> {
        self.images.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (TextureId, &StoredImage)> {
        self.images
            .iter()
            .enumerate()
            .map(|(i, img)| (TextureId(i as u32), img))
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
