use yew::prelude::*;

use crate::viewmodels::Pagination;

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    pub pagination: Pagination,
    pub total: usize,
    pub on_change: Callback<usize>,
}

#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    if !props.pagination.shows_navigation(props.total) {
        return html! {};
    }

    let page = props.pagination.page;
    // Al menos la página 1, para volver desde una página vacía
    let page_count = props.pagination.page_count(props.total).max(1);
    let prev = props
        .on_change
        .reform(move |_: MouseEvent| page.saturating_sub(1).clamp(1, page_count));
    let next = props.on_change.reform(move |_: MouseEvent| page + 1);

    html! {
        <div class="pagination">
            <button type="button" class="page-btn" disabled={page <= 1} onclick={prev}>{"‹"}</button>
            { for (1..=page_count).map(|n| html! {
                <button
                    type="button"
                    class={classes!("page-btn", (n == page).then_some("active"))}
                    onclick={props.on_change.reform(move |_: MouseEvent| n)}
                >
                    {n}
                </button>
            }) }
            <button type="button" class="page-btn" disabled={page >= page_count} onclick={next}>{"›"}</button>
        </div>
    }
}
