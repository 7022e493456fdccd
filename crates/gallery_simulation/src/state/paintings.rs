//! Paintings: регистрация, nearest (proximity), selected (zoom)

use bevy::prelude::*;

use crate::logger;

/// Интерактивный объект на стене (картина)
///
/// Регистрируется один раз при сборке сцены, дальше immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct Painting {
    /// Уникальный id ("painting-1", ...)
    pub id: String,
    pub position: Vec3,
    /// Euler XYZ (радианы), как у объекта сцены
    pub rotation: Vec3,
    pub title: String,
    /// Ссылка на текстуру (грузит хост)
    pub url: String,
}

impl Painting {
    pub fn new(
        id: impl Into<String>,
        position: Vec3,
        rotation: Vec3,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            position,
            rotation,
            title: title.into(),
            url: url.into(),
        }
    }

    /// Нормаль "из стены" (локальный +Z, повёрнутый rotation)
    pub fn outward_normal(&self) -> Vec3 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        rotation * Vec3::Z
    }

    pub fn planar_position(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.z)
    }
}

/// Зарегистрированные картины (порядок регистрации = порядок Next/Prev)
#[derive(Resource, Debug, Clone, Default)]
pub struct PaintingRegistry {
    paintings: Vec<Painting>,
}

impl PaintingRegistry {
    /// Idempotent upsert по id
    ///
    /// Старая запись с тем же id удаляется, новая встаёт в конец.
    pub fn register(&mut self, painting: Painting) {
        let before = self.paintings.len();
        self.paintings.retain(|p| p.id != painting.id);

        if self.paintings.len() == before {
            logger::log(&format!("Painting registered: {} ({})", painting.id, painting.title));
        }

        self.paintings.push(painting);
    }

    pub fn get(&self, id: &str) -> Option<&Painting> {
        self.paintings.iter().find(|p| p.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.paintings.iter().position(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Painting> {
        self.paintings.iter()
    }

    pub fn as_slice(&self) -> &[Painting] {
        &self.paintings
    }

    pub fn len(&self) -> usize {
        self.paintings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paintings.is_empty()
    }

    /// Соседняя картина по кругу (`forward` = Next)
    pub fn cycle_from(&self, id: &str, forward: bool) -> Option<&Painting> {
        let len = self.paintings.len();
        if len == 0 {
            return None;
        }

        // Неизвестный id → ведём себя как с позиции -1 (Next даёт первую)
        let next_index = match (self.index_of(id), forward) {
            (Some(index), true) => (index + 1) % len,
            (Some(index), false) => (index + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };

        self.paintings.get(next_index)
    }
}

/// Ближайшая картина в радиусе (ProximityResult)
///
/// Пишет только `detect_nearest_painting`, и только при смене id.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct NearestPainting(pub Option<Painting>);

impl NearestPainting {
    pub fn id(&self) -> Option<&str> {
        self.0.as_ref().map(|p| p.id.as_str())
    }
}

/// Выбранная картина (SelectionState). `Some` → camera в zoom mode.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SelectedPainting(pub Option<Painting>);

impl SelectedPainting {
    pub fn id(&self) -> Option<&str> {
        self.0.as_ref().map(|p| p.id.as_str())
    }
}
