use dioxus::prelude::*;

fn page_link_style(page: usize, current: usize) -> &'static str {
    if page == current {
        "border: 1px solid #0d6efd; background: #0d6efd; color: #fff; padding: 2px 8px; cursor: pointer;"
    } else {
        "border: 1px solid #dee2e6; background: #fff; color: #0d6efd; padding: 2px 8px; cursor: pointer;"
    }
}

// The selected number goes back unchecked; the grid clamps it.
#[component]
pub fn Pagination(pages: usize, current: usize, on_select: EventHandler<usize>) -> Element {
    rsx! {
        ul { style: "display: flex; flex-wrap: wrap; gap: 2px; list-style: none; margin: 0; padding: 0;",
            {(1..=pages).map(|page| {
                rsx!(
                    li { key: "{page}",
                        button {
                            r#type: "button",
                            style: "{page_link_style(page, current)}",
                            onclick: move |_| on_select.call(page),
                            "{page}"
                        }
                    }
                )
            })}
        }
    }
}
