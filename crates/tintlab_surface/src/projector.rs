//! Key-to-style projection strategies

use crate::registry::{StyleRegistry, SurfaceBackend};
use indexmap::IndexMap;
use tintlab_core::{ColorCategory, ColorRole, ElementType};
use tintlab_tokens::try_resolve_color;

const TOKENS_SLOT: &str = "tokens";

/// How a key maps onto the surface
enum Strategy {
    /// Write one custom property into the shared tokens slot
    CustomProperty(ColorRole),
    /// Rewrite a small scoped rule block in a per-setting slot
    RuleBlock(&'static Setting),
}

struct Setting {
    key: &'static str,
    slot: &'static str,
    render: fn(&str) -> Option<String>,
}

static SETTINGS: [Setting; 4] = [
    Setting {
        key: "cornerRadius",
        slot: "setting-corner-radius",
        render: render_corner_radius,
    },
    Setting {
        key: "spacing",
        slot: "setting-spacing",
        render: render_spacing,
    },
    Setting {
        key: "hoverEffect",
        slot: "setting-hover-effect",
        render: render_hover_effect,
    },
    Setting {
        key: "activeEffect",
        slot: "setting-active-effect",
        render: render_active_effect,
    },
];

fn render_corner_radius(value: &str) -> Option<String> {
    let px: f32 = value.trim().trim_end_matches("px").parse().ok()?;
    Some(format!(".tl-surface {{ border-radius: {px}px; }}"))
}

fn render_spacing(value: &str) -> Option<String> {
    let px: f32 = value.trim().trim_end_matches("px").parse().ok()?;
    Some(format!(".tl-surface {{ padding: {px}px; }}"))
}

fn render_hover_effect(value: &str) -> Option<String> {
    let body = match value {
        "lift" => "transform: translateY(-2px); box-shadow: 0 4px 12px rgba(0,0,0,0.15);",
        "glow" => "box-shadow: 0 0 0 3px var(--global-backgrounds-primary);",
        "darken" => "filter: brightness(0.92);",
        "none" => "",
        _ => return None,
    };
    Some(format!(".tl-interactive:hover {{ {body} }}"))
}

fn render_active_effect(value: &str) -> Option<String> {
    let body = match value {
        "press" => "transform: translateY(1px) scale(0.98);",
        "darken" => "filter: brightness(0.85);",
        "none" => "",
        _ => return None,
    };
    Some(format!(".tl-interactive:active {{ {body} }}"))
}

/// Projects `(key, value)` pairs onto the style surface.
///
/// Safe to call every frame: each key resolves to one reused slot or one
/// custom property, and unknown keys are dropped without effect.
pub struct StyleProjector {
    registry: StyleRegistry,
    variables: IndexMap<String, String>,
}

impl StyleProjector {
    pub fn new(backend: Box<dyn SurfaceBackend>) -> Self {
        Self {
            registry: StyleRegistry::new(backend),
            variables: IndexMap::new(),
        }
    }

    /// Apply one proposed value to the surface.
    ///
    /// Unknown keys and unrenderable values are no-ops; this path must
    /// never fail at input-event rate.
    pub fn apply(
        &mut self,
        key: &str,
        value: &str,
        category: Option<ColorCategory>,
        element: Option<ElementType>,
    ) {
        match self.strategy(key) {
            Some(Strategy::CustomProperty(role)) => {
                let Some(color) = try_resolve_color(value) else {
                    tracing::trace!(key, value, "unresolvable color, skipping projection");
                    return;
                };
                let name = variable_name(role, category, element);
                self.variables.insert(name, color.to_css_string());
                let css = render_variables(&self.variables);
                self.registry.set(TOKENS_SLOT, css);
            }
            Some(Strategy::RuleBlock(setting)) => match (setting.render)(value) {
                Some(css) => self.registry.set(setting.slot, css),
                None => {
                    tracing::trace!(key, value, "unrenderable setting value, skipping");
                }
            },
            None => {
                tracing::trace!(key, "unknown style key, no projection");
            }
        }
    }

    /// Remove every slot this projector created
    pub fn clear(&mut self) {
        self.variables.clear();
        self.registry.clear();
    }

    /// Number of live style slots (bounded by the strategy table)
    pub fn slot_count(&self) -> usize {
        self.registry.len()
    }

    fn strategy(&self, key: &str) -> Option<Strategy> {
        if let Some(role) = ColorRole::from_role_key(key) {
            return Some(Strategy::CustomProperty(role));
        }
        SETTINGS
            .iter()
            .find(|s| s.key == key)
            .map(Strategy::RuleBlock)
    }
}

fn variable_name(
    role: ColorRole,
    category: Option<ColorCategory>,
    element: Option<ElementType>,
) -> String {
    let element = element.map(|e| e.as_str()).unwrap_or("global");
    let category = category.map(|c| c.as_str()).unwrap_or("backgrounds");
    format!("--{element}-{category}-{}", role.as_str())
}

fn render_variables(variables: &IndexMap<String, String>) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in variables {
        css.push_str(&format!("  {name}: {value};\n"));
    }
    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SharedMemoryBackend;

    fn projector() -> (StyleProjector, SharedMemoryBackend) {
        let shared = SharedMemoryBackend::new();
        (StyleProjector::new(Box::new(shared.clone())), shared)
    }

    #[test]
    fn color_key_writes_custom_property() {
        let (mut p, shared) = projector();
        p.apply(
            "primaryColor",
            "#ff0000",
            Some(ColorCategory::Backgrounds),
            Some(ElementType::Cards),
        );

        let slot = shared.slot("tokens").unwrap();
        assert!(slot.contains("--cards-backgrounds-primary: #ff0000;"));
    }

    #[test]
    fn repeated_applies_stay_bounded() {
        let (mut p, shared) = projector();
        for i in 0..200 {
            p.apply(
                "primaryColor",
                &format!("rgb({}, 0, 0)", i % 256),
                None,
                None,
            );
            p.apply("cornerRadius", "8", None, None);
        }
        // One tokens slot, one setting slot, no matter how often we apply
        assert_eq!(shared.slot_count(), 2);
    }

    #[test]
    fn unknown_key_is_noop() {
        let (mut p, shared) = projector();
        p.apply("definitelyNotAKey", "#ff0000", None, None);
        assert_eq!(shared.slot_count(), 0);
    }

    #[test]
    fn unresolvable_color_is_noop() {
        let (mut p, shared) = projector();
        p.apply("primaryColor", "not-a-color", None, None);
        assert_eq!(shared.slot_count(), 0);
    }

    #[test]
    fn settings_render_rule_blocks() {
        let (mut p, shared) = projector();
        p.apply("cornerRadius", "12", None, None);
        p.apply("hoverEffect", "lift", None, None);

        assert!(shared
            .slot("setting-corner-radius")
            .unwrap()
            .contains("border-radius: 12px"));
        assert!(shared
            .slot("setting-hover-effect")
            .unwrap()
            .contains(":hover"));
    }

    #[test]
    fn clear_removes_projector_slots() {
        let (mut p, shared) = projector();
        p.apply("primaryColor", "#ff0000", None, None);
        p.apply("spacing", "16", None, None);
        assert_eq!(shared.slot_count(), 2);

        p.clear();
        assert_eq!(shared.slot_count(), 0);
        assert_eq!(p.slot_count(), 0);
    }

    #[test]
    fn theme_reference_values_resolve() {
        let (mut p, shared) = projector();
        p.apply("dangerColor", "theme:danger", None, None);
        assert!(shared.slot("tokens").unwrap().contains("--global-backgrounds-danger"));
    }
}
