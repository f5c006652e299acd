use crate::shared::icons::icon;
use leptos::prelude::*;

/// Breadcrumb entry; the current page has no link
#[derive(Clone, Debug, PartialEq)]
pub struct Crumb {
    pub name: &'static str,
    pub href: Option<&'static str>,
}

/// Breadcrumb trail starting at the dashboard home icon
#[component]
pub fn Breadcrumb(pages: Vec<Crumb>) -> impl IntoView {
    view! {
        <nav class="breadcrumb" aria-label="Breadcrumb">
            <ol role="list" class="breadcrumb__list">
                <li>
                    <a href="/dashboard" class="breadcrumb__home">
                        {icon("home")}
                        <span class="sr-only">"Home"</span>
                    </a>
                </li>
                {pages
                    .into_iter()
                    .map(|page| {
                        let current = if page.href.is_none() { Some("page") } else { None };
                        view! {
                            <li class="breadcrumb__item">
                                {icon("chevron-right")}
                                {match page.href {
                                    Some(href) => view! {
                                        <a href=href class="breadcrumb__link">{page.name}</a>
                                    }.into_any(),
                                    None => view! {
                                        <span class="breadcrumb__link" aria-current=current>{page.name}</span>
                                    }.into_any(),
                                }}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </nav>
    }
}
