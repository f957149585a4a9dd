//! Turns normalized items into render-ready nodes.
//!
//! Rendering is pure: it reads the configuration and a
//! [`TemplateContext`] and returns plain data. Clicks are routed back by
//! each node's `index`.

mod style;


pub use style::{DEFAULT_COLOR, item_style, menu_style};

use std::fmt;

use bitflags::bitflags;

use crate::{
    config::{Configuration, Item, ItemKind},
    template::TemplateContext,
};

/// Icon used when an item sets none.
pub const DEFAULT_ICON: &str = "mdi:home-assistant";
/// Second line used by two-line labels that set none.
pub const DEFAULT_SECOND_LINE: &str = "2nd line";
/// Gap between icon and text when unset.
pub const DEFAULT_ICON_TEXT_SPACING: &str = "20px";
/// Size hint reported to the host layout.
pub const CARD_SIZE: u32 = 3;

bitflags! {
    /// Style classes applied to an item node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ItemClasses: u8 {
        /// Item is the current page
        const SELECTED = 1;
        /// Item has an action and reacts to hover
        const HOVERABLE = 1 << 1;
        /// Item stacks two lines
        const TWO_LINES = 1 << 2;
    }
}

impl ItemClasses {
    /// CSS class list, always starting with `menu-item`.
    pub fn class_list(self) -> String {
        let mut classes = vec!["menu-item"];
        if self.contains(ItemClasses::TWO_LINES) {
            classes.push("label2lines");
        }
        if self.contains(ItemClasses::SELECTED) {
            classes.push("selected");
        }
        if self.contains(ItemClasses::HOVERABLE) {
            classes.push("hoverable");
        }
        classes.join(" ")
    }
}

/// Visual content of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemShape {
    /// Optional icon, then text
    Label {
        /// Icon glyph, absent when the icon resolved to blank
        icon: Option<String>,
        /// Text content
        text: String,
        /// Gap before the text when an icon is shown
        spacing: String,
    },
    /// Two stacked lines
    TwoLineLabel {
        /// Upper line
        first: String,
        /// Lower line
        second: String,
    },
    /// Icon, then text
    IconText {
        /// Icon glyph
        icon: String,
        /// Text content
        text: String,
        /// Gap before the text
        spacing: String,
    },
    /// Icon only
    Icon {
        /// Icon glyph
        icon: String,
    },
    /// Text only
    Text {
        /// Text content
        text: String,
    },
}

impl fmt::Display for ItemShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemShape::Label { icon: Some(icon), text, .. } => write!(f, "label [{icon}] {text}"),
            ItemShape::Label { icon: None, text, .. } => write!(f, "label {text}"),
            ItemShape::TwoLineLabel { first, second } => write!(f, "label-2lines {first} / {second}"),
            ItemShape::IconText { icon, text, .. } => write!(f, "icon-text [{icon}] {text}"),
            ItemShape::Icon { icon } => write!(f, "icon [{icon}]"),
            ItemShape::Text { text } => write!(f, "text {text}"),
        }
    }
}

/// One rendered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    /// Position in the configured item list; the click target
    pub index: usize,
    /// Visual content
    pub shape: ItemShape,
    /// Style classes
    pub classes: ItemClasses,
    /// Resolved inline style
    pub style: String,
}

/// The whole bar for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBar {
    /// Icon size, exported as `--mdc-icon-size`
    pub icon_size: String,
    /// Inline style of the bar container
    pub menu_style: String,
    /// Visible items, in display order
    pub items: Vec<RenderedItem>,
}

impl RenderedBar {
    /// Layout size hint for the host.
    pub fn card_size(&self) -> u32 {
        CARD_SIZE
    }
}

/// Renders the bar container and all of its items.
pub fn render_bar(config: &Configuration, ctx: &TemplateContext<'_>) -> RenderedBar {
    RenderedBar {
        icon_size: config.size.clone(),
        menu_style: menu_style(config),
        items: render_all(&config.items, ctx),
    }
}

/// Renders items in order, leaving out the ones with nothing to show.
pub fn render_all(items: &[Item], ctx: &TemplateContext<'_>) -> Vec<RenderedItem> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| render_item(index, item, ctx))
        .collect()
}

fn render_item(index: usize, item: &Item, ctx: &TemplateContext<'_>) -> Option<RenderedItem> {
    let text = ctx.resolve(item.text.as_deref().unwrap_or_default()).into_owned();
    let second_line = ctx
        .resolve(item.second_line.as_deref().unwrap_or(DEFAULT_SECOND_LINE))
        .into_owned();
    let icon = ctx.resolve(item.icon.as_deref().unwrap_or(DEFAULT_ICON)).into_owned();
    let spacing = ctx
        .resolve(
            item.icon_text_spacing
                .as_deref()
                .unwrap_or(DEFAULT_ICON_TEXT_SPACING),
        )
        .into_owned();
    let style = ctx.resolve(&item_style(item)).into_owned();

    let blank = |s: &str| s.trim().is_empty();

    let shape = match item.kind {
        ItemKind::Label if blank(&text) => return None,
        ItemKind::Label => ItemShape::Label {
            icon: (!blank(&icon)).then_some(icon),
            text,
            spacing,
        },
        ItemKind::TwoLineLabel if blank(&text) && blank(&second_line) => return None,
        ItemKind::TwoLineLabel => ItemShape::TwoLineLabel {
            first: text,
            second: second_line,
        },
        ItemKind::IconText if blank(&text) => return None,
        ItemKind::IconText => ItemShape::IconText {
            icon,
            text,
            spacing,
        },
        ItemKind::Icon => ItemShape::Icon { icon },
        ItemKind::Text if blank(&text) => return None,
        ItemKind::Text => ItemShape::Text { text },
    };

    let mut classes = ItemClasses::empty();
    classes.set(ItemClasses::SELECTED, item.selected);
    classes.set(ItemClasses::HOVERABLE, item.has_action());
    classes.set(ItemClasses::TWO_LINES, item.kind == ItemKind::TwoLineLabel);

    Some(RenderedItem {
        index,
        shape,
        classes,
        style,
    })
}
