use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::id::ObjectId;

/// Size used when a serialized object omits `size`.
pub const DEFAULT_OBJECT_SIZE: f64 = 28.0;

/// What an object on the diagram represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    /// A player on the offensive team.
    OffensePlayer,
    /// A player on the defensive team.
    DefensePlayer,
    /// The ball itself.
    Ball,
    /// A training cone.
    Cone,
    /// A free text annotation.
    Text,
    /// A rectangle drawn on the court.
    ShapeRect,
    /// A circle drawn on the court.
    ShapeCircle,
}

impl ObjectKind {
    /// True for offense and defense players, the only kinds that can be
    /// picked as the default ball owner.
    pub fn is_player(self) -> bool {
        matches!(self, Self::OffensePlayer | Self::DefensePlayer)
    }

    /// The size given to a freshly created object of this kind.
    pub fn default_size(self) -> f64 {
        match self {
            Self::OffensePlayer | Self::DefensePlayer => DEFAULT_OBJECT_SIZE,
            Self::Ball => 16.0,
            Self::Cone => 20.0,
            Self::Text => 18.0,
            Self::ShapeRect | Self::ShapeCircle => 80.0,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::OffensePlayer => "offense_player",
            Self::DefensePlayer => "defense_player",
            Self::Ball => "ball",
            Self::Cone => "cone",
            Self::Text => "text",
            Self::ShapeRect => "shape_rect",
            Self::ShapeCircle => "shape_circle",
        };
        f.write_str(s)
    }
}

fn default_size() -> f64 {
    DEFAULT_OBJECT_SIZE
}

/// Anything placed on the court in a phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayObject {
    /// Identifier, unique within the phase and stable across phases.
    pub id: ObjectId,
    /// The kind of object.
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    /// Optional label drawn next to the object (e.g. "1", "PG").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Recorded position in normalized court space.
    pub position: Point,
    /// Drawing size in court units.
    #[serde(default = "default_size")]
    pub size: f64,
    /// Rectangle width (`shape_rect` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Rectangle height (`shape_rect` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl PlayObject {
    /// Create an object of the given kind at `position`, sized by kind.
    pub fn new(id: impl Into<ObjectId>, kind: ObjectKind, position: Point) -> Self {
        let (width, height) = if kind == ObjectKind::ShapeRect {
            (Some(120.0), Some(80.0))
        } else {
            (None, None)
        };
        Self {
            id: id.into(),
            kind,
            label: None,
            position,
            size: kind.default_size(),
            width,
            height,
        }
    }

    /// Attach a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Display name: the label if present, otherwise the id.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(self.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_players_are_players() {
        assert!(ObjectKind::OffensePlayer.is_player());
        assert!(ObjectKind::DefensePlayer.is_player());
        assert!(!ObjectKind::Ball.is_player());
        assert!(!ObjectKind::Cone.is_player());
    }

    #[test]
    fn rect_gets_dimensions() {
        let rect = PlayObject::new("r1", ObjectKind::ShapeRect, Point::new(10.0, 10.0));
        assert!(rect.width.is_some() && rect.height.is_some());
        let cone = PlayObject::new("c1", ObjectKind::Cone, Point::new(10.0, 10.0));
        assert!(cone.width.is_none() && cone.height.is_none());
    }

    #[test]
    fn deserializes_wire_shape() {
        let obj: PlayObject = serde_json::from_str(
            r#"{"id":"P1","type":"offense_player","label":"1","position":{"x":500,"y":200}}"#,
        )
        .unwrap();
        assert_eq!(obj.kind, ObjectKind::OffensePlayer);
        assert_eq!(obj.position, Point::new(500.0, 200.0));
        assert_eq!(obj.size, DEFAULT_OBJECT_SIZE);
        assert_eq!(obj.display_name(), "1");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result: Result<PlayObject, _> = serde_json::from_str(
            r#"{"id":"X","type":"referee","position":{"x":0,"y":0}}"#,
        );
        assert!(result.is_err());
    }
}
