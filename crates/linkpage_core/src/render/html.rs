//! Page renderer: sticky area navigation plus one colored band per area.

use crate::model::taxonomy::{Area, Subarea, SubareaOrder, Taxonomy};
use crate::render::escape::escape_html;
use crate::render::slug::slug;
use std::fmt::{Display, Formatter};

const PAGE_STYLE: &str = include_str!("page.css");

/// Default document title.
pub const DEFAULT_TITLE: &str = "Links";

/// Presentation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub title: String,
    pub subarea_order: SubareaOrder,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subarea_order: SubareaOrder::default(),
        }
    }
}

/// Renders the complete HTML document.
///
/// `color_of` is called with each area name; the same color is used for the
/// area's nav pill and its content band.
pub fn render<C, S>(taxonomy: &Taxonomy, color_of: C, options: &RenderOptions) -> String
where
    C: Fn(&str) -> S,
    S: AsRef<str>,
{
    let areas = taxonomy
        .areas_sorted()
        .into_iter()
        .map(|area| AreaView {
            area,
            anchor: slug(&area.name),
            color: color_of(&area.name).as_ref().to_string(),
        })
        .collect::<Vec<_>>();

    Page {
        title: &options.title,
        areas: &areas,
        order: options.subarea_order,
    }
    .to_string()
}

struct AreaView<'a> {
    area: &'a Area,
    anchor: String,
    color: String,
}

struct Page<'a> {
    title: &'a str,
    areas: &'a [AreaView<'a>],
    order: SubareaOrder,
}

impl Display for Page<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<!doctype html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "  <meta charset=\"utf-8\" />")?;
        writeln!(
            f,
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />"
        )?;
        writeln!(f, "  <title>{}</title>", escape_html(self.title))?;
        writeln!(f, "  <style>")?;
        write!(f, "{PAGE_STYLE}")?;
        writeln!(f, "  </style>")?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;

        writeln!(f, "  <nav class=\"topnav\" aria-label=\"Areas\">")?;
        writeln!(f, "    <div class=\"topnav-inner\">")?;
        for view in self.areas {
            writeln!(
                f,
                "      <a class=\"pill\" href=\"#{}\" style=\"--area-color:{}\">{}</a>",
                escape_html(&view.anchor),
                escape_html(&view.color),
                escape_html(&view.area.name)
            )?;
        }
        writeln!(f, "    </div>")?;
        writeln!(f, "  </nav>")?;

        writeln!(f, "  <main>")?;
        for view in self.areas {
            write_band(f, view, self.order)?;
        }
        writeln!(f, "  </main>")?;
        writeln!(f, "</body>")?;
        write!(f, "</html>")
    }
}

fn write_band(
    f: &mut Formatter<'_>,
    view: &AreaView<'_>,
    order: SubareaOrder,
) -> std::fmt::Result {
    writeln!(
        f,
        "    <section class=\"band\" id=\"{}\" style=\"--area-color:{}\">",
        escape_html(&view.anchor),
        escape_html(&view.color)
    )?;
    writeln!(
        f,
        "      <div class=\"band-header\">{}</div>",
        escape_html(&view.area.name)
    )?;
    writeln!(f, "      <div class=\"band-grid\">")?;

    if view.area.is_empty() {
        let heading = format!("{} - (no subareas)", view.area.name);
        writeln!(
            f,
            "      <div class=\"subcol\"><div class=\"subcard\"><h2>{}</h2><ol class=\"linklist\"></ol></div></div>",
            escape_html(&heading)
        )?;
    } else {
        for subarea in view.area.subareas_sorted(order) {
            write_subarea(f, &view.area.name, subarea)?;
        }
    }

    writeln!(f, "      </div>")?;
    writeln!(f, "    </section>")
}

fn write_subarea(f: &mut Formatter<'_>, area: &str, subarea: &Subarea) -> std::fmt::Result {
    let heading = format!("{area} - {}", subarea.name);
    writeln!(f, "      <div class=\"subcol\">")?;
    writeln!(f, "        <div class=\"subcard\">")?;
    writeln!(f, "          <h2>{}</h2>", escape_html(&heading))?;
    writeln!(f, "          <ol class=\"linklist\">")?;
    for entry in subarea.entries() {
        writeln!(
            f,
            "            <li><a class=\"link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></li>",
            escape_html(&entry.url),
            escape_html(&entry.description)
        )?;
    }
    writeln!(f, "          </ol>")?;
    writeln!(f, "        </div>")?;
    writeln!(f, "      </div>")
}
