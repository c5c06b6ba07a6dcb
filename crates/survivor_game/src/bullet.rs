use glam::Vec2;
use survivor_core::Rect;

/// A projectile: where it is and which way it travels.  Keeping both in one
/// record means positions and directions can never get out of step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub position: Vec2,
    /// Unit vector.
    pub direction: Vec2,
}

/// Bullets in firing order.
#[derive(Debug, Clone, Default)]
pub struct Bullets {
    items: Vec<Bullet>,
}

impl Bullets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bullet; it becomes the last element.
    pub fn spawn(&mut self, position: Vec2, direction: Vec2) {
        self.items.push(Bullet { position, direction });
    }

    /// Move every bullet by `direction × speed`.
    pub fn advance(&mut self, speed: f32) {
        for b in &mut self.items {
            b.position += b.direction * speed;
        }
    }

    /// Remove bullets outside `bounds`, keeping the order of the rest.
    /// Returns how many were removed.
    pub fn retain_within(&mut self, bounds: Rect) -> usize {
        let before = self.items.len();
        self.items.retain(|b| bounds.contains(b.position));
        before - self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bullet> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Bullet] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Bullets {
    type Item = &'a Bullet;
    type IntoIter = std::slice::Iter<'a, Bullet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
