use serde::Serialize;

use crate::geometry::coords::{Point, Size};

/// The canonical, deduplicated, semantically-typed unit representing one
/// interactive or informational screen feature. Built fresh every cycle;
/// ids are opaque and stable only within the cycle that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct Element {
    pub id: String,
    pub semantic_type: SemanticType,
    pub position: Point,
    pub size: Size,
    pub clickable: bool,
    pub confidence: f32,

    pub text: Option<String>,
    pub structural: Option<StructuralMeta>,
    pub recognition: Option<RecognitionMeta>,

    pub semantic_meaning: String,
    pub action_hint: Option<String>,
    pub interactions: Vec<Interaction>,
    pub context: ElementContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    Button,
    TextInput,
    Text,
    Link,
    Image,
    Dropdown,
    Checkbox,
    Radio,
    Slider,
    ScrollArea,
    Menu,
    Tab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interaction {
    Click,
    Type,
    SelectText,
    Copy,
    Paste,
    Drag,
    ArrowKeys,
    Toggle,
    Scroll,
    Swipe,
    Dropdown,
}

impl Interaction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interaction::Click => "click",
            Interaction::Type => "type",
            Interaction::SelectText => "select_text",
            Interaction::Copy => "copy",
            Interaction::Paste => "paste",
            Interaction::Drag => "drag",
            Interaction::ArrowKeys => "arrow_keys",
            Interaction::Toggle => "toggle",
            Interaction::Scroll => "scroll",
            Interaction::Swipe => "swipe",
            Interaction::Dropdown => "dropdown",
        }
    }
}

/// Why the element exists on screen, inferred from keywords and role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementPurpose {
    WindowControl,
    FileOperation,
    Search,
    Sharing,
    ActionTrigger,
    TextInput,
    InformationDisplay,
    VisualContent,
    ContentContainer,
    UiElement,
}

/// Coarse screen band the element sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenRegion {
    Toolbar,
    Sidebar,
    StatusBar,
    MainContent,
}

#[derive(Debug, Clone, Serialize)]
pub struct ElementContext {
    pub purpose: ElementPurpose,
    pub region: ScreenRegion,
    pub ancestor_path: String,
    pub available_actions: Vec<String>,
}

/// Accessibility metadata carried over from the structural source.
#[derive(Debug, Clone, Serialize)]
pub struct StructuralMeta {
    pub role: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub help: Option<String>,
    pub value: Option<String>,
    pub parent_role: Option<String>,
    pub child_roles: Vec<String>,
    pub enabled: bool,
    pub focused: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecognitionMeta {
    pub text: String,
    pub confidence: f32,
}

impl Element {
    pub fn area(&self) -> f64 {
        self.size.area()
    }

    /// True when any accessibility field contains one of the keywords.
    pub fn structural_mentions(&self, keywords: &[&str]) -> bool {
        let Some(meta) = &self.structural else {
            return false;
        };

        let mut haystack = meta.role.to_lowercase();
        for field in [&meta.title, &meta.description, &meta.help] {
            if let Some(s) = field {
                haystack.push(' ');
                haystack.push_str(&s.to_lowercase());
            }
        }

        keywords.iter().any(|k| haystack.contains(k))
    }
}

/// Opaque per-cycle identity: a short fingerprint over the fields that make
/// the element distinguishable inside one cycle.
pub fn element_fingerprint(seed: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(seed.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    format!("el:{}", &digest[..12])
}
