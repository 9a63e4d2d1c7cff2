use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::action::PlayAction;
use crate::id::{ObjectId, PhaseId};
use crate::object::PlayObject;

/// The only document schema version this crate understands.
pub const SCHEMA_VERSION: i64 = 1;

/// Which court drawing the diagram sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtTemplate {
    /// One basket, the usual choice for set plays.
    #[default]
    HalfCourt,
    /// Both baskets, for transition and press plays.
    FullCourt,
}

impl fmt::Display for CourtTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HalfCourt => f.write_str("half_court"),
            Self::FullCourt => f.write_str("full_court"),
        }
    }
}

/// Who holds the ball when a phase begins.
///
/// On the wire this is `ballOwnerObjectId`: an absent key is [`BallOwner::Inherit`],
/// `null` is [`BallOwner::None`], and a string is [`BallOwner::Owner`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum BallOwner {
    /// Take over whoever holds the ball at the end of the previous phase.
    #[default]
    Inherit,
    /// Explicitly nobody.
    None,
    /// Explicitly this object.
    Owner(ObjectId),
}

impl BallOwner {
    /// True for the unset state.
    pub fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }

    /// The explicit owner id, if there is one.
    pub fn owner_id(&self) -> Option<&ObjectId> {
        match self {
            Self::Owner(id) => Some(id),
            Self::Inherit | Self::None => Option::None,
        }
    }
}

impl Serialize for BallOwner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Owner(id) => serializer.serialize_some(id),
            Self::Inherit | Self::None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for BallOwner {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // A missing key never reaches here; the field's `#[serde(default)]` covers it.
        Ok(match Option::<ObjectId>::deserialize(deserializer)? {
            Some(id) => Self::Owner(id),
            Option::None => Self::None,
        })
    }
}

/// A named snapshot of object positions plus the actions that lead out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    /// Identifier, unique across the document.
    pub id: PhaseId,
    /// Display name.
    pub name: String,
    /// Objects in insertion order.
    #[serde(default)]
    pub objects: Vec<PlayObject>,
    /// Actions in execution order.
    #[serde(default)]
    pub actions: Vec<PlayAction>,
    /// Ball owner at the start of the phase.
    #[serde(default, skip_serializing_if = "BallOwner::is_inherit")]
    pub ball_owner_object_id: BallOwner,
}

impl Phase {
    /// An empty phase with a freshly minted id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(PhaseId::generate(), name)
    }

    /// An empty phase with a pre-assigned id.
    pub fn with_id(id: impl Into<PhaseId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            objects: Vec::new(),
            actions: Vec::new(),
            ball_owner_object_id: BallOwner::Inherit,
        }
    }

    /// Look up an object by id.
    pub fn object(&self, id: &ObjectId) -> Option<&PlayObject> {
        self.objects.iter().find(|o| &o.id == id)
    }

    /// True if an object with this id exists in the phase.
    pub fn contains_object(&self, id: &ObjectId) -> bool {
        self.object(id).is_some()
    }

    /// The first offense or defense player in insertion order.
    pub fn first_player(&self) -> Option<&PlayObject> {
        self.objects.iter().find(|o| o.kind.is_player())
    }
}

/// A multi-phase basketball play diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketballPlayDocument {
    /// Document schema version. Any integer is accepted; the value is
    /// carried through untouched and never compared against [`SCHEMA_VERSION`].
    pub schema_version: i64,
    /// Court drawing.
    pub court_template: CourtTemplate,
    /// Phases in play order. Never empty in a valid document.
    pub phases: Vec<Phase>,
}

impl BasketballPlayDocument {
    /// Create a document from phases on the given court.
    pub fn new(court_template: CourtTemplate, phases: Vec<Phase>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            court_template,
            phases,
        }
    }

    /// The minimal always-valid document: one empty half-court phase.
    pub fn empty() -> Self {
        Self::new(
            CourtTemplate::HalfCourt,
            vec![Phase::with_id("phase-1", "Phase 1")],
        )
    }

    /// Look up a phase by index.
    pub fn phase(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }

    /// Number of phases.
    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    /// Total number of objects across all phases.
    pub fn object_count(&self) -> usize {
        self.phases.iter().map(|p| p.objects.len()).sum()
    }

    /// Total number of actions across all phases.
    pub fn action_count(&self) -> usize {
        self.phases.iter().map(|p| p.actions.len()).sum()
    }
}

impl Default for BasketballPlayDocument {
    fn default() -> Self {
        Self::empty()
    }
}
