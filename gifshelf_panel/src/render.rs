//! HTML fragment projection of the view-model.
//!
//! Fragments are plain strings assigned into the page's regions; every
//! interpolated value passes through [`html_escape`]. The hooks named in
//! `onclick` attributes (`newPage`, `toggleBookmark`, `toggleFavorite`,
//! `addCategory`, `removeCategory`, `deleteCategory`) are the page-shell
//! entry points bound to the matching controller methods.

use gifshelf_api::types::{Category, Pagination};

use crate::paging::{self, PageSlot};
use crate::state::ItemState;

/// Gifs per grid row.
const ROW_WIDTH: usize = 5;

/// Painted into both regions while a search is in flight.
pub const LOADING: &str = "Loading...";
/// Painted into both regions when the server rejects the request.
pub const BAD_REQUEST: &str = "Bad request";
/// Painted into both regions when no usable response arrived at all.
pub const NETWORK_ERROR: &str = "Network error";

/// Escapes text for interpolation into HTML content or attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// The search form fragment the page shell embeds; Enter in the text field
/// and the submit control both reach `SearchPanel::submit`.
pub fn search_form() -> String {
    concat!(
        "<input type=\"text\" id=\"search\">",
        "<button type=\"button\" id=\"submit\">Search</button>"
    )
    .to_string()
}

/// The result-count region: summary line plus the page selector.
pub fn results_header(paging: &Pagination) -> String {
    let mut out = String::new();
    out.push_str(&paging::summary(paging));
    out.push_str("<br>Page: ");
    for slot in paging::page_slots(paging::max_pages(paging), paging::current_page(paging)) {
        match slot {
            PageSlot::Page(page) => out.push_str(&format!(
                "<button type=\"button\" id=\"page_{page}\" onclick=\"newPage({page})\">{}</button>&nbsp;",
                page + 1
            )),
            PageSlot::Gap => out.push_str("…&nbsp;"),
        }
    }
    out
}

/// The result grid, five cells to a row. Empty input projects an empty
/// region, which still replaces any prior "Loading..." text.
pub fn results_grid(items: &[ItemState]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut out = String::from("<table>");
    for row in items.chunks(ROW_WIDTH) {
        out.push_str("<tr>");
        for item in row {
            out.push_str(&item_cell(item));
        }
        out.push_str("</tr>");
    }
    out.push_str("</table>");
    out
}

/// One grid cell: preview, title, both toggle controls with their current
/// labels, the projected state flags, and the item's category container.
pub fn item_cell(item: &ItemState) -> String {
    let id = html_escape(&item.id);
    format!(
        concat!(
            "<td align=\"center\">",
            "<img src=\"{src}\"/><br>Title: {title}<br>",
            "<input type=\"hidden\" id=\"saved_{id}\" value=\"{saved}\">",
            "<input type=\"hidden\" id=\"favorited_{id}\" value=\"{favorited}\">",
            "<button type=\"button\" id=\"bookmark_{id}\" onclick=\"toggleBookmark('{id}')\">{bookmark}</button>&nbsp;",
            "<button type=\"button\" id=\"favorite_{id}\" onclick=\"toggleFavorite('{id}')\">{favorite}</button>",
            "<div id=\"categories_{id}\"></div>",
            "</td>"
        ),
        src = html_escape(&item.preview_url),
        title = html_escape(&item.title),
        id = id,
        saved = item.saved,
        favorited = item.favorited,
        bookmark = item.bookmark_label(),
        favorite = item.favorite_label(),
    )
}

/// The item's category container: catalog selector, Add control, and the
/// currently assigned tag rows.
pub fn category_panel(item: &ItemState) -> String {
    let id = html_escape(&item.id);
    let mut out = format!("<select id=\"categories_for_{id}\">");
    for category in &item.catalog {
        out.push_str(&format!(
            "<option value=\"{}\">{}</option>",
            html_escape(&category.id),
            html_escape(&category.name)
        ));
    }
    out.push_str("</select>");
    out.push_str(&format!(
        "<button type=\"button\" onclick=\"addCategory('{id}')\">Add</button>"
    ));
    for tag in &item.tags {
        out.push_str(&tag_row(&item.id, tag));
    }
    out
}

fn tag_row(item_id: &str, category: &Category) -> String {
    let gid = html_escape(item_id);
    let cid = html_escape(&category.id);
    format!(
        concat!(
            "<div id=\"cat_{gid}_{cid}\" align=\"left\">",
            "<button type=\"button\" onclick=\"removeCategory('{gid}', '{cid}')\">Remove</button>",
            "&nbsp;&nbsp;&nbsp; {name}</div>"
        ),
        gid = gid,
        cid = cid,
        name = html_escape(&category.name),
    )
}

/// The catalog page's table body, one row per category.
pub fn catalog_table(rows: &[Category]) -> String {
    let mut out = String::new();
    for category in rows {
        let cid = html_escape(&category.id);
        out.push_str(&format!(
            concat!(
                "<tr id=\"cat_{cid}\"><td align=\"left\">",
                "<button type=\"button\" onclick=\"deleteCategory('{cid}')\">Remove</button>",
                "&nbsp;&nbsp;&nbsp;{name}</td></tr>"
            ),
            cid = cid,
            name = html_escape(&category.name),
        ));
    }
    out
}
