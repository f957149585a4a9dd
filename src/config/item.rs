use std::fmt;

use serde_json::{Map, Value};

/// Visual shape of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemKind {
    /// Optional icon followed by text
    Label,
    /// Two stacked lines of text
    TwoLineLabel,
    /// Icon followed by text
    IconText,
    /// Icon only, always rendered
    Icon,
    /// Plain text
    #[default]
    Text,
}

impl ItemKind {
    /// Parses a wire `type` tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "label" => Some(ItemKind::Label),
            "label-2lines" => Some(ItemKind::TwoLineLabel),
            "icon-text" => Some(ItemKind::IconText),
            "icon" => Some(ItemKind::Icon),
            "text" => Some(ItemKind::Text),
            _ => None,
        }
    }
}

/// The five supported click actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Push a client-side location
    Navigate,
    /// Open an address in a browsing context
    Url,
    /// Toggle an entity
    Toggle,
    /// Invoke a `domain.service`
    CallService,
    /// Open an entity's detail panel
    MoreInfo,
}

impl ActionKind {
    /// All actions, in wire order.
    pub const ALL: [ActionKind; 5] = [
        ActionKind::Navigate,
        ActionKind::Url,
        ActionKind::Toggle,
        ActionKind::CallService,
        ActionKind::MoreInfo,
    ];

    /// Parses a wire `action` tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// Wire name of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Navigate => "navigate",
            ActionKind::Url => "url",
            ActionKind::Toggle => "toggle",
            ActionKind::CallService => "call-service",
            ActionKind::MoreInfo => "more-info",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action tag as configured: a known action or whatever else was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionTag {
    /// One of the supported actions
    Known(ActionKind),
    /// Any other tag, kept so dispatch can report it
    Unrecognized(String),
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionTag::Known(kind) => kind.fmt(f),
            ActionTag::Unrecognized(tag) => f.write_str(tag),
        }
    }
}

/// Declarative click action attached to an item.
///
/// Fields are kept unvalidated; each action checks what it needs when
/// dispatched.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemAction {
    /// Which action to run
    pub tag: ActionTag,
    /// Entity for `toggle` and `more-info`
    pub entity: Option<String>,
    /// Path for `navigate`
    pub navigation_path: Option<String>,
    /// Address for `url`
    pub url_path: Option<String>,
    /// Browsing context for `url`
    pub url_target: Option<String>,
    /// `domain.service` for `call-service`
    pub service: Option<String>,
    /// Payload for `call-service`
    pub service_data: Option<Map<String, Value>>,
    /// Legacy payload for `call-service`
    pub data: Option<Map<String, Value>>,
    /// Explicit target for `call-service`
    pub target: Option<Map<String, Value>>,
}

impl ItemAction {
    /// Creates an action with only its tag set.
    pub fn new(tag: ActionTag) -> Self {
        Self {
            tag,
            entity: None,
            navigation_path: None,
            url_path: None,
            url_target: None,
            service: None,
            service_data: None,
            data: None,
            target: None,
        }
    }
}

/// A render-ready item. Read-only once normalized.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    /// Shape to render
    pub kind: ItemKind,
    /// Whether the item is highlighted
    pub selected: bool,
    /// Icon name; `None` means the default icon, an empty string means none
    pub icon: Option<String>,
    /// Primary text template
    pub text: Option<String>,
    /// Second line template
    pub second_line: Option<String>,
    /// Gap between icon and text
    pub icon_text_spacing: Option<String>,
    /// Push to the right edge
    pub push_to_right: bool,
    /// Left and right padding
    pub horizontal_padding: Option<String>,
    /// Text color
    pub color: Option<String>,
    /// Font size
    pub font_size: Option<String>,
    /// Font weight
    pub font_weight: Option<String>,
    /// Text alignment
    pub text_align: Option<String>,
    /// Extra CSS appended verbatim
    pub additional_css: Option<String>,
    /// Click action, `None` when the item is inert
    pub action: Option<ItemAction>,
}

impl Item {
    /// Whether clicking this item does anything.
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }
}
