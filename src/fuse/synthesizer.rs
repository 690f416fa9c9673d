use crate::detect::detection_model::{
    InteractionCategory, ShapeDetection, StructuralDetection, TextDetection,
};
use crate::element::element_model::{
    Element, ElementContext, ElementPurpose, Interaction, RecognitionMeta, ScreenRegion,
    SemanticType, StructuralMeta, element_fingerprint,
};
use crate::geometry::coords::{Point, Rect, Size, window_relative};

// ============================================================================
// Element synthesizer — one detection (or a matched pair) → one Element
// ============================================================================

/// Fixed role → semantic type table. Roles are matched lowercased.
const ROLE_TYPES: &[(&str, SemanticType)] = &[
    ("button", SemanticType::Button),
    ("textfield", SemanticType::TextInput),
    ("textarea", SemanticType::TextInput),
    ("searchfield", SemanticType::TextInput),
    ("statictext", SemanticType::Text),
    ("text", SemanticType::Text),
    ("link", SemanticType::Link),
    ("image", SemanticType::Image),
    ("popupbutton", SemanticType::Dropdown),
    ("combobox", SemanticType::Dropdown),
    ("menubutton", SemanticType::Dropdown),
    ("checkbox", SemanticType::Checkbox),
    ("radiobutton", SemanticType::Radio),
    ("slider", SemanticType::Slider),
    ("scrollarea", SemanticType::ScrollArea),
    ("scrollview", SemanticType::ScrollArea),
    ("menu", SemanticType::Menu),
    ("menuitem", SemanticType::Menu),
    ("menubar", SemanticType::Menu),
    ("tab", SemanticType::Tab),
    ("tabgroup", SemanticType::Tab),
];

/// Roles that take pointer interaction even without a button type.
const CLICKABLE_ROLES: &[&str] = &[
    "button",
    "textfield",
    "textarea",
    "searchfield",
    "link",
    "popupbutton",
    "combobox",
    "menubutton",
    "checkbox",
    "radiobutton",
    "slider",
    "menuitem",
    "tab",
];

/// Action-hint keywords checked against recognized text, in match order.
const ACTION_HINTS: &[(&str, &str)] = &[
    ("close", "closes the window or view"),
    ("save", "saves the current document"),
    ("search", "performs a search"),
    ("share", "shares the current content"),
    ("edit", "edits the current content"),
];

// Region bands, window-relative pixels.
const TOOLBAR_BAND: f64 = 80.0;
const SIDEBAR_BAND: f64 = 150.0;
const STATUS_BAR_BAND: f64 = 80.0;

// ----------------------------------------------------------------------------
// Entry points
// ----------------------------------------------------------------------------

/// Synthesize from a matched (text, structural) pair. The structural side
/// supplies role and metadata; the recognized text fills the display gap.
pub fn from_pair(
    text: &TextDetection,
    structural: &StructuralDetection,
    window: &Rect,
) -> Element {
    let semantic_type = type_for_role(&structural.role, structural.enabled);
    let clickable = structural.enabled && role_is_clickable(&structural.role);
    let display_text = display_text(structural.value.as_deref(), Some(text.text.as_str()));
    let confidence = text.confidence.max(structural.confidence() * 0.9);

    build(
        semantic_type,
        structural.position,
        structural.size,
        clickable,
        confidence,
        display_text,
        Some(structural_meta(structural)),
        Some(RecognitionMeta {
            text: text.text.clone(),
            confidence: text.confidence,
        }),
        window,
    )
}

/// Synthesize from a text detection with no structural counterpart.
pub fn from_text(text: &TextDetection, window: &Rect) -> Element {
    build(
        SemanticType::Text,
        text.position,
        text.size,
        false,
        text.confidence,
        Some(text.text.clone()),
        None,
        Some(RecognitionMeta {
            text: text.text.clone(),
            confidence: text.confidence,
        }),
        window,
    )
}

/// Synthesize from a leftover structural detection.
pub fn from_structural(structural: &StructuralDetection, window: &Rect) -> Element {
    let semantic_type = type_for_role(&structural.role, structural.enabled);
    let clickable = structural.enabled && role_is_clickable(&structural.role);
    let display_text = display_text(structural.value.as_deref(), structural.title.as_deref());

    build(
        semantic_type,
        structural.position,
        structural.size,
        clickable,
        structural.confidence(),
        display_text,
        Some(structural_meta(structural)),
        None,
        window,
    )
}

/// Synthesize from a standalone shape detection. A nearby recognized text,
/// when the merger found one inside the shape's bounds, becomes the label.
pub fn from_shape(shape: &ShapeDetection, label: Option<&str>, window: &Rect) -> Element {
    let semantic_type = match shape.interaction {
        InteractionCategory::Button
        | InteractionCategory::IconButton
        | InteractionCategory::CloseButton => SemanticType::Button,
        InteractionCategory::TextInput => SemanticType::TextInput,
        InteractionCategory::Unknown => SemanticType::Text,
    };

    let text = label
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    build(
        semantic_type,
        shape.bounds.origin,
        shape.bounds.size,
        shape.interaction.is_clickable(),
        shape.confidence,
        text,
        None,
        None,
        window,
    )
}

// ----------------------------------------------------------------------------
// Shared construction
// ----------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn build(
    semantic_type: SemanticType,
    position: Point,
    size: Size,
    clickable: bool,
    confidence: f32,
    text: Option<String>,
    structural: Option<StructuralMeta>,
    recognition: Option<RecognitionMeta>,
    window: &Rect,
) -> Element {
    let action_hint = action_hint(clickable, text.as_deref(), structural.as_ref());
    let interactions = interactions_for(semantic_type, clickable);
    let purpose = infer_purpose(semantic_type, clickable, text.as_deref(), structural.as_ref());
    let region = infer_region(position, window);
    let ancestor_path = ancestor_path(semantic_type, structural.as_ref());
    let semantic_meaning = semantic_meaning(semantic_type, text.as_deref(), structural.as_ref());

    let available_actions = interactions.iter().map(|i| i.as_str().to_string()).collect();

    let id = element_fingerprint(&format!(
        "{:?}|{:.1}|{:.1}|{:.1}x{:.1}|{}",
        semantic_type,
        position.x,
        position.y,
        size.width,
        size.height,
        text.as_deref().unwrap_or(""),
    ));

    Element {
        id,
        semantic_type,
        position,
        size,
        clickable,
        confidence: confidence.clamp(0.0, 1.0),
        text,
        structural,
        recognition,
        semantic_meaning,
        action_hint,
        interactions,
        context: ElementContext {
            purpose,
            region,
            ancestor_path,
            available_actions,
        },
    }
}

fn structural_meta(s: &StructuralDetection) -> StructuralMeta {
    StructuralMeta {
        role: s.role.clone(),
        title: s.title.clone(),
        description: s.description.clone(),
        help: s.help.clone(),
        value: s.value.clone(),
        parent_role: s.parent_role.clone(),
        child_roles: s.child_roles.clone(),
        enabled: s.enabled,
        focused: s.focused,
        selected: s.selected,
    }
}

// ----------------------------------------------------------------------------
// Display text
// ----------------------------------------------------------------------------

/// The structural value is what the control currently shows, so it wins over
/// recognized text when present.
fn display_text(value: Option<&str>, recognized: Option<&str>) -> Option<String> {
    let value = value.map(str::trim).filter(|s| !s.is_empty());
    let recognized = recognized.map(str::trim).filter(|s| !s.is_empty());

    value.or(recognized).map(str::to_string)
}

// ----------------------------------------------------------------------------
// Semantic type
// ----------------------------------------------------------------------------

pub fn type_for_role(role: &str, enabled: bool) -> SemanticType {
    let lower = role.to_lowercase();

    // Exact table first
    if let Some((_, ty)) = ROLE_TYPES.iter().find(|(r, _)| *r == lower) {
        return *ty;
    }

    // Keyword fallback over the raw label
    if lower.contains("button") {
        return SemanticType::Button;
    }
    if lower.contains("field") || lower.contains("input") {
        return SemanticType::TextInput;
    }
    if lower.contains("menu") {
        return SemanticType::Menu;
    }
    if lower.contains("check") {
        return SemanticType::Checkbox;
    }
    if lower.contains("slider") {
        return SemanticType::Slider;
    }
    if lower.contains("scroll") {
        return SemanticType::ScrollArea;
    }
    if lower.contains("link") {
        return SemanticType::Link;
    }
    if lower.contains("image") || lower.contains("img") {
        return SemanticType::Image;
    }
    if lower.contains("tab") {
        return SemanticType::Tab;
    }

    // Unknown role: clickable unknowns read as buttons, the rest as text
    if enabled && role_is_clickable(&lower) {
        SemanticType::Button
    } else {
        SemanticType::Text
    }
}

pub fn role_is_clickable(role: &str) -> bool {
    let lower = role.to_lowercase();
    CLICKABLE_ROLES.iter().any(|r| lower == *r)
        || lower.contains("button")
        || lower.contains("link")
}

// ----------------------------------------------------------------------------
// Action hint
// ----------------------------------------------------------------------------

fn action_hint(
    clickable: bool,
    text: Option<&str>,
    structural: Option<&StructuralMeta>,
) -> Option<String> {
    if clickable {
        if let Some(t) = text {
            let lower = t.to_lowercase();
            for (keyword, hint) in ACTION_HINTS {
                if lower.contains(keyword) {
                    return Some((*hint).to_string());
                }
            }
        }
    }

    if let Some(meta) = structural {
        if let Some(desc) = meta.description.as_deref().map(str::trim) {
            if !desc.is_empty() {
                return Some(desc.to_string());
            }
        }
    }

    if clickable {
        return Some("clickable element".to_string());
    }

    None
}

// ----------------------------------------------------------------------------
// Interactions
// ----------------------------------------------------------------------------

pub fn interactions_for(semantic_type: SemanticType, clickable: bool) -> Vec<Interaction> {
    let mut interactions = Vec::new();

    if clickable {
        interactions.push(Interaction::Click);
    }

    match semantic_type {
        SemanticType::TextInput => {
            interactions.extend([
                Interaction::Type,
                Interaction::SelectText,
                Interaction::Copy,
                Interaction::Paste,
            ]);
        }
        SemanticType::Slider => {
            interactions.extend([Interaction::Drag, Interaction::ArrowKeys]);
        }
        SemanticType::Checkbox | SemanticType::Radio => {
            interactions.push(Interaction::Toggle);
        }
        SemanticType::ScrollArea => {
            interactions.extend([Interaction::Scroll, Interaction::Swipe]);
        }
        SemanticType::Dropdown | SemanticType::Menu => {
            interactions.push(Interaction::Dropdown);
        }
        _ => {}
    }

    interactions
}

// ----------------------------------------------------------------------------
// Context
// ----------------------------------------------------------------------------

fn infer_purpose(
    semantic_type: SemanticType,
    clickable: bool,
    text: Option<&str>,
    structural: Option<&StructuralMeta>,
) -> ElementPurpose {
    let mut haystack = text.unwrap_or("").to_lowercase();
    if let Some(meta) = structural {
        haystack.push(' ');
        haystack.push_str(&meta.role.to_lowercase());
        for field in [&meta.title, &meta.description] {
            if let Some(s) = field {
                haystack.push(' ');
                haystack.push_str(&s.to_lowercase());
            }
        }
    }

    if ["close", "minimize", "zoom"].iter().any(|k| haystack.contains(k)) {
        return ElementPurpose::WindowControl;
    }
    if ["save", "open", "file", "export", "import"].iter().any(|k| haystack.contains(k)) {
        return ElementPurpose::FileOperation;
    }
    if ["search", "find", "filter"].iter().any(|k| haystack.contains(k)) {
        return ElementPurpose::Search;
    }
    if haystack.contains("share") {
        return ElementPurpose::Sharing;
    }

    match semantic_type {
        SemanticType::TextInput => ElementPurpose::TextInput,
        SemanticType::Image => ElementPurpose::VisualContent,
        SemanticType::ScrollArea => ElementPurpose::ContentContainer,
        SemanticType::Text => ElementPurpose::InformationDisplay,
        _ if clickable => ElementPurpose::ActionTrigger,
        _ => ElementPurpose::UiElement,
    }
}

fn infer_region(position: Point, window: &Rect) -> ScreenRegion {
    if window.size.is_degenerate() {
        return ScreenRegion::MainContent;
    }

    let rel = window_relative(position, window);

    if rel.y < TOOLBAR_BAND {
        ScreenRegion::Toolbar
    } else if rel.y > window.size.height - STATUS_BAR_BAND {
        ScreenRegion::StatusBar
    } else if rel.x < SIDEBAR_BAND {
        ScreenRegion::Sidebar
    } else {
        ScreenRegion::MainContent
    }
}

fn ancestor_path(semantic_type: SemanticType, structural: Option<&StructuralMeta>) -> String {
    let own = match structural {
        Some(meta) => meta.role.clone(),
        None => format!("{:?}", semantic_type).to_lowercase(),
    };

    let mut path = match structural.and_then(|m| m.parent_role.as_deref()) {
        Some(parent) => format!("{} > {}", parent, own),
        None => own,
    };

    if let Some(title) = structural
        .and_then(|m| m.title.as_deref())
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        path.push_str(&format!(" [{}]", title));
    }

    path
}

fn semantic_meaning(
    semantic_type: SemanticType,
    text: Option<&str>,
    structural: Option<&StructuralMeta>,
) -> String {
    let type_name = match semantic_type {
        SemanticType::Button => "button",
        SemanticType::TextInput => "text input",
        SemanticType::Text => "text",
        SemanticType::Link => "link",
        SemanticType::Image => "image",
        SemanticType::Dropdown => "dropdown",
        SemanticType::Checkbox => "checkbox",
        SemanticType::Radio => "radio button",
        SemanticType::Slider => "slider",
        SemanticType::ScrollArea => "scroll area",
        SemanticType::Menu => "menu",
        SemanticType::Tab => "tab",
    };

    let label = structural
        .and_then(|m| m.title.as_deref())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .or_else(|| text.map(str::trim).filter(|t| !t.is_empty()));

    match label {
        Some(l) => format!("'{}' {}", l, type_name),
        None => format!("unlabeled {}", type_name),
    }
}
