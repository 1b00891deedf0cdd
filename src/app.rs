use std::sync::Arc;

use chrono::Local;
use dioxus::prelude::*;
use tracing::info;

use crate::domain::entities::edit::View;
use crate::domain::entities::paging::{PageSize, SortDirection, SortField};
use crate::domain::entities::todo::{Todo, TodoId};
use crate::domain::grid::TodoGrid;
use crate::infra::config::AppConfig;
use crate::infra::http::source::HttpTodoSource;
use crate::platform::desktop::dialogs::RfdDialogs;
use crate::ui::components::action_button::{ActionButton, ButtonVariant};
use crate::ui::components::form_item::{FieldValue, FormItem};
use crate::ui::components::pagination::Pagination;
use crate::ui::state::app_state::{load_status, page_summary, save_status, GridState};
use crate::usecase::ports::source::SourceError;
use crate::usecase::services::edit_service::EditService;
use crate::usecase::services::load_service::LoadService;

#[derive(Clone)]
pub struct AppServices {
    pub load: Arc<LoadService>,
    pub edit: Arc<EditService>,
}

impl AppServices {
    pub fn from_config(config: &AppConfig) -> Result<Self, SourceError> {
        let source = HttpTodoSource::new(config.endpoint.clone(), config.request_timeout())?;
        info!(endpoint = %source.endpoint(), "todo source ready");
        Ok(Self {
            load: Arc::new(LoadService::new(Arc::new(source))),
            edit: Arc::new(EditService::new(Arc::new(RfdDialogs))),
        })
    }
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.load, &other.load) && Arc::ptr_eq(&self.edit, &other.edit)
    }
}

fn table_container_style() -> &'static str {
    "margin: 12px 0; max-height: 70vh; overflow: auto; border: 1px solid #dee2e6;"
}

fn table_header_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 6px; text-align: left; background: #f1f3f5; position: sticky; top: 0; cursor: pointer; user-select: none;"
}

fn table_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 4px 6px;"
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let services = use_hook(|| AppServices::from_config(&config).map_err(|err| err.to_string()));

    match services {
        Ok(services) => rsx! {
            div { style: "font-family: sans-serif; padding: 12px;",
                DataGrid { services: services }
            }
        },
        Err(err) => rsx! {
            div {
                p { "Unable to start the todo client: {err}" }
            }
        },
    }
}

#[component]
pub fn DataGrid(services: AppServices) -> Element {
    let GridState {
        mut grid,
        mut status,
    } = GridState::new();

    let load_service = services.load.clone();
    let start_load = use_callback(move |_: ()| {
        let service = load_service.clone();
        let ticket = grid.write().begin_load();
        spawn(async move {
            let result = service.fetch().await;
            let message = load_status(&result, Local::now().time());
            if grid.write().finish_load(ticket, result) {
                status.set(message);
            }
        });
    });

    use_effect(move || start_load.call(()));

    let snapshot = grid.read().clone();

    if snapshot.is_loading() {
        return rsx! {
            p { "Loading..." }
        };
    }

    if let View::Editing { draft, is_new } = snapshot.view() {
        return render_edit_form(draft, *is_new, grid, status, services.edit.clone());
    }

    let rows: Vec<Todo> = snapshot.visible_items().to_vec();
    let summary = page_summary(&snapshot);
    let total_pages = snapshot.total_pages();
    let current_page = snapshot.current_page();
    let edit_service_for_remove = services.edit.clone();
    let sort_hint = match snapshot.sort_direction() {
        SortDirection::Ascending => "Click to sort ascending",
        SortDirection::Descending => "Click to sort descending",
    };

    rsx! {
        div {
            ActionButton {
                label: "Add",
                onclick: move |_| grid.write().begin_add(),
            }

            div {
                style: "{table_container_style()}",
                table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                    thead {
                        tr {
                            th {
                                style: "{table_header_cell_style()}",
                                title: "{sort_hint}",
                                onclick: move |_| {
                                    grid.write().sort_by(SortField::Id);
                                },
                                "#"
                            }
                            th {
                                style: "{table_header_cell_style()}",
                                title: "{sort_hint}",
                                onclick: move |_| {
                                    grid.write().sort_by(SortField::Title);
                                },
                                "Title"
                            }
                            th {
                                style: "{table_header_cell_style()}",
                                title: "{sort_hint}",
                                onclick: move |_| {
                                    grid.write().sort_by(SortField::Completed);
                                },
                                "Status"
                            }
                            th { style: "{table_header_cell_style()}", "Actions" }
                        }
                    }
                    tbody {
                        {rows.into_iter().map(|todo| {
                            let id: TodoId = todo.id;
                            let edit_service = edit_service_for_remove.clone();
                            rsx!(
                                tr { key: "{id}",
                                    th { style: "{table_cell_style()}", "{id}" }
                                    td { style: "{table_cell_style()}", "{todo.title}" }
                                    td { style: "{table_cell_style()}", "{todo.status_label()}" }
                                    td { style: "{table_cell_style()} white-space: nowrap;",
                                        div { style: "display: flex; gap: 4px;",
                                            ActionButton {
                                                label: "Delete",
                                                variant: ButtonVariant::Danger,
                                                onclick: move |_| {
                                                    let removed = edit_service.confirm_remove(id, |id| {
                                                        grid.with_mut(|state| state.remove(id).is_some())
                                                    });
                                                    if removed {
                                                        status.set(format!("Deleted todo #{id}"));
                                                    }
                                                },
                                            }
                                            ActionButton {
                                                label: "Edit",
                                                variant: ButtonVariant::Warning,
                                                onclick: move |_| {
                                                    grid.write().begin_edit(id);
                                                },
                                            }
                                        }
                                    }
                                }
                            )
                        })}
                    }
                }
            }

            nav { style: "display: flex; justify-content: space-between; align-items: center; gap: 12px; flex-wrap: wrap;",
                div { style: "display: flex; gap: 4px;",
                    {PageSize::CHOICES.into_iter().map(|size| {
                        rsx!(
                            ActionButton {
                                key: "{size.get()}",
                                label: size.get().to_string(),
                                variant: ButtonVariant::Outline,
                                onclick: move |_| {
                                    let changed = grid.write().set_page_size(size);
                                    if changed {
                                        start_load.call(());
                                    }
                                },
                            }
                        )
                    })}
                }
                Pagination {
                    pages: total_pages,
                    current: current_page,
                    on_select: move |page| grid.write().select_page(page),
                }
            }

            p { style: "margin-top: 8px; color: #555;", "{summary}" }
            p { style: "color: #555;", "{status}" }
        }
    }
}

fn render_edit_form(
    draft: &Todo,
    is_new: bool,
    mut grid: Signal<TodoGrid>,
    mut status: Signal<String>,
    edit_service: Arc<EditService>,
) -> Element {
    let heading = if is_new {
        "New todo".to_string()
    } else {
        format!("Edit todo #{}", draft.id)
    };

    rsx! {
        div { style: "background: #fff; padding: 16px; border: 1px solid #999; max-width: 560px;",
            div { style: "margin-bottom: 12px; font-weight: 600;", "{heading}" }
            FormItem {
                title: "Title",
                value: FieldValue::Text(draft.title.clone()),
                onchange: move |value| {
                    if let FieldValue::Text(title) = value {
                        grid.write().set_draft_title(title);
                    }
                },
            }
            FormItem {
                title: "Completed",
                value: FieldValue::Checked(draft.completed),
                onchange: move |value| {
                    if let FieldValue::Checked(completed) = value {
                        grid.write().set_draft_completed(completed);
                    }
                },
            }
            div { style: "display: flex; gap: 8px;",
                ActionButton {
                    label: "Save",
                    onclick: move |_| {
                        let outcome = edit_service.save(|| grid.with_mut(TodoGrid::save_draft));
                        status.set(save_status(outcome));
                    },
                }
                ActionButton {
                    label: "Cancel",
                    variant: ButtonVariant::Plain,
                    onclick: move |_| grid.write().cancel_edit(),
                }
            }
        }
    }
}
