//! # Node Preprocessors
//!
//! Per-kind fixups applied to a node copy before construction: text layers
//! get their font fields repaired, svg and bitmap layers get their payload
//! references normalized, everything else gets its image fills scrubbed.
//! A preprocessor may rewrite style/fill/text fields in place but must not
//! change the node's class tag or children.

use serde_json::{json, Value};
use sketchport_portable::{NodeKind, PortableNode, SharedStyleDef};

/// Pattern fill type in portable fill records
const FILL_TYPE_IMAGE: u64 = 4;

/// Mutates a node in place before construction
pub trait NodePreprocessor {
    fn apply(&self, node: &mut PortableNode);
}

/// Default dispatch by class tag
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFixups;

impl NodePreprocessor for StandardFixups {
    fn apply(&self, node: &mut PortableNode) {
        match node.kind() {
            NodeKind::Text => fix_text_layer(node),
            NodeKind::Svg => fix_svg_layer(node),
            NodeKind::Bitmap => fix_bitmap_layer(node),
            _ => fix_image_fills(node),
        }
    }
}

/// Repair the font fields of a text layer's style
pub fn fix_text_layer(node: &mut PortableNode) {
    if let Some(style) = node.field_mut("style") {
        fix_font_attributes(style);
    }
}

/// Normalize an svg layer's raw source field
pub fn fix_svg_layer(node: &mut PortableNode) {
    if let Some(Value::String(raw)) = node.field_mut("rawSVGString") {
        let trimmed = raw.trim();
        if trimmed.len() != raw.len() {
            *raw = trimmed.to_string();
        }
    }
}

/// Ensure a bitmap layer's image reference is a tagged data reference
pub fn fix_bitmap_layer(node: &mut PortableNode) {
    if let Some(Value::Object(image)) = node.field_mut("image") {
        image
            .entry("_class")
            .or_insert_with(|| json!("MSJSONOriginalDataReference"));
    }
}

/// Drop image fills that carry no image data; the host cannot construct
/// them and would reject the whole layer otherwise.
pub fn fix_image_fills(node: &mut PortableNode) {
    let Some(style) = node.field_mut("style") else {
        return;
    };
    let Some(Value::Array(fills)) = style.pointer_mut("/fills") else {
        return;
    };

    fills.retain(|fill| {
        let is_image_fill = fill
            .get("fillType")
            .and_then(Value::as_u64)
            .map_or(false, |fill_type| fill_type == FILL_TYPE_IMAGE);
        !is_image_fill || fill.get("image").is_some()
    });
}

/// Shared text styles need the same font repair as text layers before they
/// enter the document pool.
pub fn fix_shared_text_style(style: &mut SharedStyleDef) {
    fix_font_attributes(&mut style.value);
}

fn fix_font_attributes(style: &mut Value) {
    let Some(attributes) = style.pointer_mut("/textStyle/encodedAttributes") else {
        return;
    };
    let Some(attributes) = attributes.as_object_mut() else {
        return;
    };

    let font = attributes
        .entry("MSAttributedStringFontAttribute")
        .or_insert_with(|| {
            json!({
                "_class": "fontDescriptor",
                "attributes": {"name": "Helvetica", "size": 14},
            })
        });

    if let Some(font) = font.as_object_mut() {
        font.entry("_class").or_insert_with(|| json!("fontDescriptor"));
        let attrs = font
            .entry("attributes")
            .or_insert_with(|| json!({}));
        if let Some(attrs) = attrs.as_object_mut() {
            attrs.entry("name").or_insert_with(|| json!("Helvetica"));
            attrs.entry("size").or_insert_with(|| json!(14));
        }
    }
}
