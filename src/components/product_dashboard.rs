// ============================================================================
// PRODUCT DASHBOARD - Tabla paginada + filtro + diálogos de edición y borrado
// ============================================================================

use yew::prelude::*;

use super::{PaginationBar, ProductEditor, ProductFilterForm};
use crate::hooks::use_products;
use crate::models::{FormMode, Product, ProductPayload};
use crate::viewmodels::{DashboardAction, DashboardState, ListDisplay};

#[function_component(ProductDashboard)]
pub fn product_dashboard() -> Html {
    let products = use_products();
    let view = use_reducer(DashboardState::default);

    // Listado completo al montar
    {
        let fetch_all = products.fetch_all.clone();
        use_effect_with((), move |_| {
            fetch_all.emit(());
            || ()
        });
    }

    let dispatcher = view.dispatcher();
    let dispatch = Callback::from(move |action: DashboardAction| dispatcher.dispatch(action));
    let on_page = dispatch.reform(DashboardAction::GoTo);
    let on_edit = dispatch.reform(DashboardAction::OpenEdit);
    let on_delete = dispatch.reform(DashboardAction::OpenDelete);
    let close_delete = dispatch.reform(|_: ()| DashboardAction::CloseDelete);
    let close_edit = dispatch.reform(|_: ()| DashboardAction::CloseEdit);

    // El diálogo se cierra ya; el borrado y la recarga siguen en segundo plano
    let confirm_delete = {
        let close = close_delete.clone();
        let target = view.delete_target.clone();
        let confirm = products.confirm_delete.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(id) = target.clone() {
                confirm.emit(id);
            }
            close.emit(());
        })
    };

    let submit_edit = {
        let target = view.edit_target.as_ref().map(|p| p.id.clone());
        let submit = products.submit_edit.clone();
        let close = close_edit.clone();
        Callback::from(move |(payload, on_saved): (ProductPayload, Callback<()>)| {
            let Some(id) = target.clone() else {
                return;
            };
            let close = close.clone();
            let on_success = Callback::from(move |_: ()| {
                on_saved.emit(());
                close.emit(());
            });
            submit.emit((id, payload, on_success));
        })
    };

    let filter = products.fetch_filtered.clone();
    let reset = products.fetch_all.clone();

    let display = ListDisplay::from_state(&products.list, &view.pagination);
    let base_url = products.image_base_url.clone();

    let body = match display {
        ListDisplay::Loading => html! { <p class="list-status">{"Loading..."}</p> },
        ListDisplay::Error(message) => html! { <p class="list-status error">{message}</p> },
        ListDisplay::Empty => html! { <p class="list-status">{"No products found"}</p> },
        ListDisplay::Populated(items) => html! {
            <table class="product-table">
                <thead>
                    <tr>
                        <th>{"Image"}</th>
                        <th>{"Name"}</th>
                        <th>{"Description"}</th>
                        <th>{"Price"}</th>
                        <th>{"Stock"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for items.iter().map(|p| product_row(p, &base_url, &on_edit, &on_delete)) }
                </tbody>
            </table>
        },
    };

    html! {
        <div class="product-dashboard">
            <h1>{"Products"}</h1>
            <ProductFilterForm on_filter={filter} on_reset={reset} />
            { body }
            <PaginationBar pagination={view.pagination} total={products.list.items.len()} on_change={on_page} />

            if view.delete_target.is_some() {
                <div class="modal-overlay">
                    <div class="modal confirm-modal">
                        <h2>{"Delete product"}</h2>
                        <p>{"Are you sure you want to delete this product?"}</p>
                        <div class="modal-actions">
                            <button type="button" class="btn-secondary" onclick={close_delete.reform(|_: MouseEvent| ())}>{"Cancel"}</button>
                            <button type="button" class="btn-danger" onclick={confirm_delete}>{"Delete"}</button>
                        </div>
                    </div>
                </div>
            }

            if let Some(product) = &view.edit_target {
                <div class="modal-overlay">
                    <div class="modal edit-modal">
                        <h2>{format!("Edit {}", product.productname)}</h2>
                        <ProductEditor
                            key={product.id.clone()}
                            mode={FormMode::Edit}
                            initial={Some(product.clone())}
                            image_base_url={base_url.clone()}
                            loading={products.edit.loading}
                            error={products.edit.error.clone().map(AttrValue::from)}
                            on_submit={submit_edit}
                            on_cancel={Some(close_edit)}
                        />
                    </div>
                </div>
            }
        </div>
    }
}

fn product_row(
    product: &Product,
    base_url: &str,
    on_edit: &Callback<Product>,
    on_delete: &Callback<String>,
) -> Html {
    let edit = {
        let product = product.clone();
        on_edit.reform(move |_: MouseEvent| product.clone())
    };
    let delete = {
        let id = product.id.clone();
        on_delete.reform(move |_: MouseEvent| id.clone())
    };

    html! {
        <tr key={product.id.clone()}>
            <td>
                if let Some(url) = product.thumbnail_url(base_url) {
                    <img class="thumbnail" src={url} alt={product.productname.clone()} />
                }
            </td>
            <td>{product.productname.clone()}</td>
            <td>{product.description.clone()}</td>
            <td>{product.display_price()}</td>
            <td>{product.stock}</td>
            <td class="row-actions">
                <button type="button" class="btn-secondary" onclick={edit}>{"Edit"}</button>
                <button type="button" class="btn-danger" onclick={delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}
