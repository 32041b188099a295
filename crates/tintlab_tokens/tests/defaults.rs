use tintlab_core::{ColorCategory, ColorRole, ElementType};
use tintlab_tokens::{default_palette, TokenStore};

#[test]
fn every_scope_has_a_complete_default_palette() {
    for element in ElementType::ALL {
        for category in ColorCategory::ALL {
            let palette = default_palette(element, category);
            for role in ColorRole::ALL {
                assert!(
                    palette.get(role).a > 0.0,
                    "element={element:?} category={category:?} role={role:?}"
                );
            }
        }
    }
}

#[test]
fn categories_have_distinct_default_palettes() {
    let backgrounds = default_palette(ElementType::Cards, ColorCategory::Backgrounds);
    let text = default_palette(ElementType::Cards, ColorCategory::Text);
    let borders = default_palette(ElementType::Cards, ColorCategory::Borders);

    assert_ne!(
        backgrounds.get(ColorRole::Primary),
        text.get(ColorRole::Primary)
    );
    assert_ne!(
        backgrounds.get(ColorRole::Primary),
        borders.get(ColorRole::Primary)
    );
}

#[test]
fn store_reads_are_pure_projections_of_committed_state() {
    let store = TokenStore::new();
    store.update(
        ElementType::Headers,
        ColorCategory::Backgrounds,
        ColorRole::Secondary,
        "#8839ef",
    );

    // Repeated reads agree with each other and with the single-color read
    let a = store.element_palette(ElementType::Headers);
    let b = store.category_palette(ElementType::Headers, ColorCategory::Backgrounds);
    assert_eq!(a, b);
    assert_eq!(
        a.get(ColorRole::Secondary),
        store.color(
            ElementType::Headers,
            ColorCategory::Backgrounds,
            ColorRole::Secondary
        )
    );
}
