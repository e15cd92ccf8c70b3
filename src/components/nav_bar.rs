use yew::prelude::*;

use super::app::Page;
use super::LogoutModal;
use crate::hooks::use_auth;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub page: Page,
    pub on_navigate: Callback<Page>,
    pub on_open_auth: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let auth = use_auth();
    let show_menu = use_state(|| false);
    let show_confirm = use_state(|| false);

    // Perfil: sin sesión abre el modal de auth, con sesión el menú
    let on_profile = {
        let logged_in = auth.state.is_logged_in();
        let on_open_auth = props.on_open_auth.clone();
        let show_menu = show_menu.clone();
        Callback::from(move |_: MouseEvent| {
            if logged_in {
                show_menu.set(!*show_menu);
            } else {
                on_open_auth.emit(());
            }
        })
    };

    let ask_logout = {
        let show_menu = show_menu.clone();
        let show_confirm = show_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            show_menu.set(false);
            show_confirm.set(true);
        })
    };
    let cancel_logout = {
        let show_confirm = show_confirm.clone();
        Callback::from(move |_: ()| show_confirm.set(false))
    };
    let confirm_logout = {
        let show_confirm = show_confirm.clone();
        let logout = auth.logout.clone();
        Callback::from(move |_: ()| {
            show_confirm.set(false);
            logout.emit(());
        })
    };

    let link = |page: Page, label: &'static str| {
        let class = classes!("nav-link", (props.page == page).then_some("active"));
        html! {
            <button type="button" {class} onclick={props.on_navigate.reform(move |_| page)}>
                {label}
            </button>
        }
    };

    html! {
        <nav class="nav-bar">
            <span class="nav-brand">{"Product Dashboard"}</span>
            <div class="nav-links">
                { link(Page::Home, "Home") }
                { link(Page::Products, "Products") }
            </div>
            <div class="nav-profile">
                <button type="button" class="btn-profile" onclick={on_profile}>
                    { auth.state.user.as_ref().map(|u| u.display_name().to_string()).unwrap_or_else(|| "Login".to_string()) }
                </button>
                if *show_menu {
                    <div class="profile-menu">
                        if let Some(user) = &auth.state.user {
                            <p class="profile-email">{user.email.clone()}</p>
                        }
                        <button type="button" class="menu-item" onclick={ask_logout}>{"Logout"}</button>
                    </div>
                }
            </div>
            if *show_confirm {
                <LogoutModal on_confirm={confirm_logout} on_close={cancel_logout} />
            }
        </nav>
    }
}
