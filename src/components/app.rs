// ============================================================================
// APP - Componente raíz: contexto, navegación, modales y toasts
// ============================================================================

use yew::prelude::*;

use super::{AuthModal, Home, NavBar, ProductDashboard, ToastContainer};
use crate::context::AppContext;
use crate::utils::events::reload_on_logged_out;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Home,
    Products,
}

#[function_component(App)]
pub fn app() -> Html {
    // La sesión guardada se restaura antes del primer render
    let ctx = use_state(|| {
        let ctx = AppContext::browser();
        ctx.auth.restore();
        ctx
    });
    let page = use_state(|| Page::Home);
    let show_auth = use_state(|| false);

    use_effect_with((), |_| {
        if let Err(e) = reload_on_logged_out() {
            log::error!("❌ No se pudo registrar el listener de logout: {:?}", e);
        }
        || ()
    });

    let navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| {
            log::debug!("🧭 Navegando a {:?}", next);
            page.set(next);
        })
    };
    let open_auth = {
        let show_auth = show_auth.clone();
        Callback::from(move |_: ()| show_auth.set(true))
    };
    let close_auth = {
        let show_auth = show_auth.clone();
        Callback::from(move |_: ()| show_auth.set(false))
    };

    html! {
        <ContextProvider<AppContext> context={(*ctx).clone()}>
            <div class="app">
                <NavBar page={*page} on_navigate={navigate.clone()} on_open_auth={open_auth.clone()} />
                <main class="app-content">
                    {
                        match *page {
                            Page::Home => html! { <Home on_open_auth={open_auth} on_navigate={navigate} /> },
                            Page::Products => html! { <ProductDashboard /> },
                        }
                    }
                </main>
                if *show_auth {
                    <AuthModal on_close={close_auth} />
                }
                <ToastContainer />
            </div>
        </ContextProvider<AppContext>>
    }
}
