//! Layout-to-utility-class mapping.

use tokenforge_core::naming::number;
use tokenforge_core::{LayoutMode, LayoutValue};

/// Utility class vocabulary of a CSS framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtilityScheme {
    pub row: &'static str,
    pub column: &'static str,
    pub grid: &'static str,
    /// Directional padding prefixes, top/right/bottom/left.
    pub padding_sides: [&'static str; 4],
}

/// Tailwind utilities, used by the React and Vue generators.
pub const TAILWIND: UtilityScheme = UtilityScheme {
    row: "flex flex-row",
    column: "flex flex-col",
    grid: "grid",
    padding_sides: ["pt", "pr", "pb", "pl"],
};

/// Bootstrap utilities, used by the Angular generator.
pub const BOOTSTRAP: UtilityScheme = UtilityScheme {
    row: "d-flex flex-row",
    column: "d-flex flex-column",
    grid: "d-grid",
    padding_sides: ["pt", "pe", "pb", "ps"],
};

/// Spacing scale step: one unit is 4px.
fn step(px: f64) -> String {
    number(px / 4.0)
}

/// Utility classes for a layout: direction, then padding, then gap.
///
/// Uniform padding collapses to a single `p-N`; otherwise four directional
/// classes are emitted. A zero or missing item spacing emits no gap class.
pub fn layout_classes(layout: &LayoutValue, scheme: &UtilityScheme) -> String {
    let mut classes: Vec<String> = Vec::new();

    match layout.layout_mode {
        LayoutMode::Horizontal => classes.push(scheme.row.to_string()),
        LayoutMode::Vertical => classes.push(scheme.column.to_string()),
        LayoutMode::Grid => classes.push(scheme.grid.to_string()),
        LayoutMode::None | LayoutMode::Other => {}
    }

    if let Some(padding) = layout.padding {
        if padding.is_uniform() {
            classes.push(format!("p-{}", step(padding.top)));
        } else {
            let [top, right, bottom, left] = scheme.padding_sides;
            classes.push(format!(
                "{}-{} {}-{} {}-{} {}-{}",
                top,
                step(padding.top),
                right,
                step(padding.right),
                bottom,
                step(padding.bottom),
                left,
                step(padding.left)
            ));
        }
    }

    if let Some(spacing) = layout.item_spacing.filter(|s| *s != 0.0) {
        classes.push(format!("gap-{}", step(spacing)));
    }

    classes.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenforge_core::Padding;

    fn layout(mode: LayoutMode, padding: Option<Padding>, spacing: Option<f64>) -> LayoutValue {
        LayoutValue {
            layout_mode: mode,
            padding,
            item_spacing: spacing,
            ..Default::default()
        }
    }

    #[test]
    fn test_uniform_padding_collapses() {
        let value = layout(LayoutMode::Horizontal, Some(Padding::uniform(8.0)), None);
        assert_eq!(layout_classes(&value, &TAILWIND), "flex flex-row p-2");
    }

    #[test]
    fn test_directional_padding_per_scheme() {
        let padding = Padding {
            top: 8.0,
            right: 16.0,
            bottom: 8.0,
            left: 16.0,
        };
        let value = layout(LayoutMode::Vertical, Some(padding), Some(12.0));
        assert_eq!(
            layout_classes(&value, &TAILWIND),
            "flex flex-col pt-2 pr-4 pb-2 pl-4 gap-3"
        );
        assert_eq!(
            layout_classes(&value, &BOOTSTRAP),
            "d-flex flex-column pt-2 pe-4 pb-2 ps-4 gap-3"
        );
    }

    #[test]
    fn test_grid_and_fractional_steps() {
        let value = layout(LayoutMode::Grid, None, Some(6.0));
        assert_eq!(layout_classes(&value, &TAILWIND), "grid gap-1.5");
        assert_eq!(layout_classes(&value, &BOOTSTRAP), "d-grid gap-1.5");
    }

    #[test]
    fn test_no_layout() {
        let value = layout(LayoutMode::None, None, Some(0.0));
        assert_eq!(layout_classes(&value, &TAILWIND), "");
    }
}
