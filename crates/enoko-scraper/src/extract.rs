//! Catalog page → [`FigureRecord`] extraction.
//!
//! The page is expected to contain a title element, an ordered list of
//! label/value items and a main image. Each of the three is located
//! independently; anything missing leaves its field empty.

use std::sync::LazyLock;

use enoko_core::FigureRecord;
use scraper::{ElementRef, Html, Selector};

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".hpoi-ibox-title > p").expect("valid selector"));
static INFO_ITEM_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".infoList-box > .hpoi-infoList-item").expect("valid selector")
});
static MAIN_IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".isotope-img > img").expect("valid selector"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InfoField {
    OriginalName,
    Price,
    ReleaseDate,
    Manufacturer,
    Scale,
    Size,
}

impl InfoField {
    fn slot(self, figure: &mut FigureRecord) -> &mut String {
        match self {
            InfoField::OriginalName => &mut figure.original_name,
            InfoField::Price => &mut figure.price,
            InfoField::ReleaseDate => &mut figure.release_date,
            InfoField::Manufacturer => &mut figure.manufacturer,
            InfoField::Scale => &mut figure.scale,
            InfoField::Size => &mut figure.size,
        }
    }
}

/// Info-list labels, matched exactly. The site renders the Chinese labels;
/// the English ones are accepted as aliases.
const INFO_LABELS: &[(&str, InfoField)] = &[
    ("名称", InfoField::OriginalName),
    ("定价", InfoField::Price),
    ("出货日", InfoField::ReleaseDate),
    ("制作", InfoField::Manufacturer),
    ("比例", InfoField::Scale),
    ("尺寸", InfoField::Size),
    ("name (original)", InfoField::OriginalName),
    ("price", InfoField::Price),
    ("release date", InfoField::ReleaseDate),
    ("manufacturer", InfoField::Manufacturer),
    ("scale", InfoField::Scale),
    ("size", InfoField::Size),
];

fn field_for_label(label: &str) -> Option<InfoField> {
    INFO_LABELS
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, field)| *field)
}

/// Extracts figure attributes from a catalog page.
///
/// Never fails: unparseable markup is handled by the HTML parser's error
/// recovery and missing elements simply leave fields empty. Values are
/// copied verbatim, without trimming. When an element or label occurs more
/// than once, the last occurrence wins.
#[must_use]
pub fn extract_figure(html: &str) -> FigureRecord {
    let document = Html::parse_document(html);
    let mut figure = FigureRecord::default();

    for title in document.select(&TITLE_SELECTOR) {
        title
            .value()
            .attr("title")
            .unwrap_or_default()
            .clone_into(&mut figure.name);
    }

    for item in document.select(&INFO_ITEM_SELECTOR) {
        let label = child_text(item, "span");
        let Some(field) = field_for_label(&label) else {
            continue;
        };
        *field.slot(&mut figure) = child_text(item, "p");
    }

    for image in document.select(&MAIN_IMAGE_SELECTOR) {
        image
            .value()
            .attr("src")
            .unwrap_or_default()
            .clone_into(&mut figure.main_image_url);
    }

    figure
}

/// Concatenated text of the direct children of `parent` named `tag`.
fn child_text(parent: ElementRef<'_>, tag: &str) -> String {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == tag)
        .flat_map(|child| child.text())
        .collect()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
