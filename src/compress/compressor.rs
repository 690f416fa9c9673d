use crate::compress::compress_model::{
    CompressedScreen, CompressionMetrics, GridMappedElement, Quadrant,
};
use crate::element::element_model::{Element, SemanticType};
use crate::engine::config::FusionConfig;
use crate::geometry::coords::{Rect, normalize};

// ============================================================================
// Compressor — rank, encode, serialize; degrades instead of failing
// ============================================================================

/// Clickability dominates ranking; confidence refines it.
const CLICKABLE_BONUS: f64 = 10.0;

/// Compress the filtered element list into the delimited output grammar
/// `segment("," segment)*` with `segment = type ":" gx "-" gy ["+" WxH]
/// ["~" label]`. Coordinates are rounded percent of the window bounds, so
/// the output is display-scale-agnostic. An empty input yields a well-formed
/// empty output, never an error.
pub fn compress(elements: &[Element], window: &Rect, config: &FusionConfig) -> CompressedScreen {
    if elements.is_empty() {
        return CompressedScreen {
            compressed: String::new(),
            metrics: CompressionMetrics::empty(),
        };
    }

    let mut mapped: Vec<GridMappedElement> = elements
        .iter()
        .map(|e| grid_map(e, window, config))
        .collect();

    // Clickable elements first, then reading order on the normalized grid.
    mapped.sort_by(|a, b| {
        b.importance
            .total_cmp(&a.importance)
            .then(a.normalized.y.total_cmp(&b.normalized.y))
            .then(a.normalized.x.total_cmp(&b.normalized.x))
            .then(a.element.id.cmp(&b.element.id))
    });

    let compressed = mapped
        .iter()
        .map(|m| m.token.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let metrics = build_metrics(&mapped, &compressed);

    CompressedScreen {
        compressed,
        metrics,
    }
}

fn grid_map(element: &Element, window: &Rect, config: &FusionConfig) -> GridMappedElement {
    let normalized = normalize(element.position, window);
    let importance = if element.clickable {
        CLICKABLE_BONUS + element.confidence as f64
    } else {
        element.confidence as f64
    };

    let token = render_token(element, normalized, config);

    GridMappedElement {
        element: element.clone(),
        normalized,
        importance,
        token,
    }
}

fn render_token(
    element: &Element,
    normalized: crate::geometry::coords::Point,
    config: &FusionConfig,
) -> String {
    let gx = (normalized.x * 100.0).round() as i64;
    let gy = (normalized.y * 100.0).round() as i64;

    let mut token = format!("{}:{}-{}", type_token(element), gx, gy);

    if !element.size.is_degenerate() {
        token.push_str(&format!(
            "+{}x{}",
            element.size.width.round() as i64,
            element.size.height.round() as i64
        ));
    }

    if let Some(label) = element.text.as_deref() {
        let cleaned = clean_label(label, config.label_max_len);
        if !cleaned.is_empty() {
            token.push('~');
            token.push_str(&cleaned);
        }
    }

    token
}

/// Fixed semantic-type → short-token table. Unmapped clickables read as
/// buttons and unmapped non-clickables as text at synthesis time, so every
/// element that reaches here has a token.
fn type_token(element: &Element) -> &'static str {
    match element.semantic_type {
        SemanticType::Button => "btn",
        SemanticType::Dropdown => "dropdown",
        SemanticType::TextInput => "txtinp",
        SemanticType::Checkbox => "checkbox",
        SemanticType::Radio => "radio",
        SemanticType::Slider => "slider",
        SemanticType::ScrollArea => "scroll",
        SemanticType::Link => "link",
        SemanticType::Image => "img",
        SemanticType::Text => "txt",
        SemanticType::Menu => "menu",
        SemanticType::Tab => "tab",
    }
}

/// Labels ride inside the delimited grammar, so the delimiter characters are
/// stripped and whitespace collapses to underscores.
fn clean_label(label: &str, max_len: usize) -> String {
    let cleaned: String = label
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | ':' | '~' | '+'))
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();

    cleaned.chars().take(max_len).collect()
}

fn build_metrics(mapped: &[GridMappedElement], compressed: &str) -> CompressionMetrics {
    let token_count = if compressed.is_empty() {
        0
    } else {
        compressed.split(',').count()
    };

    let compression_ratio = if compressed.is_empty() {
        0.0
    } else {
        (mapped.len() * 100) as f64 / compressed.len() as f64
    };

    let confidence = if mapped.is_empty() {
        0.0
    } else {
        mapped.iter().map(|m| m.element.confidence).sum::<f32>() / mapped.len() as f32
    };

    let mut metrics = CompressionMetrics::empty();
    metrics.token_count = token_count;
    metrics.compression_ratio = compression_ratio;
    metrics.confidence = confidence;

    for m in mapped {
        *metrics
            .region_breakdown
            .entry(Quadrant::of(m.normalized))
            .or_insert(0) += 1;
    }

    metrics
}
