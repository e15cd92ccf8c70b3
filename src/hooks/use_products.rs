use yew::prelude::*;

use crate::hooks::{use_app_context, use_store};
use crate::models::{FilterCriteria, ProductPayload};
use crate::state::{MutationState, ProductListState};

pub struct UseProductsHandle {
    pub list: ProductListState,
    pub creation: MutationState,
    pub edit: MutationState,
    pub delete: MutationState,
    pub image_base_url: String,
    pub fetch_all: Callback<()>,
    pub fetch_filtered: Callback<FilterCriteria>,
    pub create: Callback<(ProductPayload, Callback<()>)>,
    /// (id, datos, callback si el servidor acepta)
    pub submit_edit: Callback<(String, ProductPayload, Callback<()>)>,
    pub confirm_delete: Callback<String>,
}

#[hook]
pub fn use_products() -> UseProductsHandle {
    let ctx = use_app_context();
    let list = use_store(&ctx.state.products);
    let creation = use_store(&ctx.state.creation);
    let edit = use_store(&ctx.state.edit);
    let delete = use_store(&ctx.state.delete);

    let fetch_all = {
        let dashboard = ctx.dashboard.clone();
        Callback::from(move |_: ()| {
            let dashboard = dashboard.clone();
            wasm_bindgen_futures::spawn_local(async move {
                dashboard.load().await;
            });
        })
    };

    let fetch_filtered = {
        let vm = ctx.products.clone();
        Callback::from(move |criteria: FilterCriteria| {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = vm.fetch_filtered(&criteria).await {
                    log::warn!("⚠️ Filtro fallido: {}", e);
                }
            });
        })
    };

    let create = {
        let vm = ctx.products.clone();
        Callback::from(move |(payload, on_success): (ProductPayload, Callback<()>)| {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if vm.create(&payload).await.is_ok() {
                    on_success.emit(());
                }
            });
        })
    };

    let submit_edit = {
        let dashboard = ctx.dashboard.clone();
        Callback::from(
            move |(id, payload, on_success): (String, ProductPayload, Callback<()>)| {
                let dashboard = dashboard.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if dashboard.submit_edit(&id, &payload).await.is_ok() {
                        on_success.emit(());
                    }
                });
            },
        )
    };

    let confirm_delete = {
        let dashboard = ctx.dashboard.clone();
        Callback::from(move |id: String| {
            let dashboard = dashboard.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = dashboard.confirm_delete(&id).await {
                    log::warn!("⚠️ Borrado fallido: {}", e);
                }
            });
        })
    };

    UseProductsHandle {
        list,
        creation,
        edit,
        delete,
        image_base_url: ctx.products.image_base_url().to_string(),
        fetch_all,
        fetch_filtered,
        create,
        submit_edit,
        confirm_delete,
    }
}
