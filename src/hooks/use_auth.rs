use yew::prelude::*;

use crate::hooks::{use_app_context, use_store};
use crate::models::{LoginRequest, RegisterData};
use crate::state::AuthState;
use crate::utils::events::broadcast_logged_out;

pub struct UseAuthHandle {
    pub state: AuthState,
    /// (credenciales, callback si el login va bien)
    pub login: Callback<(LoginRequest, Callback<()>)>,
    pub register: Callback<(RegisterData, Callback<()>)>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let ctx = use_app_context();
    let state = use_store(&ctx.state.auth);

    let login = {
        let vm = ctx.auth.clone();
        Callback::from(move |(request, on_success): (LoginRequest, Callback<()>)| {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if vm.login(request.email, request.password).await.is_ok() {
                    on_success.emit(());
                }
            });
        })
    };

    let register = {
        let vm = ctx.auth.clone();
        Callback::from(move |(data, on_success): (RegisterData, Callback<()>)| {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if vm.register(data).await.is_ok() {
                    on_success.emit(());
                }
            });
        })
    };

    let logout = {
        let vm = ctx.auth.clone();
        Callback::from(move |_: ()| {
            vm.logout();
            // El listener de la raíz recarga la página
            if let Err(e) = broadcast_logged_out() {
                log::error!("❌ Error emitiendo loggedOut: {:?}", e);
            }
        })
    };

    UseAuthHandle {
        state,
        login,
        register,
        logout,
    }
}
