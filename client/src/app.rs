//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use widgets::page_config::PageConfig;
use widgets::theme::Theme;

use crate::components::session_monitor::SessionMonitor;
use crate::components::theme_toggle::ThemeToggle;
use crate::pages::board_setup::BoardSetupPage;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The page configuration travels to the browser as `<body>` data
/// attributes (see `widgets::page_config`).
pub fn shell(options: LeptosOptions, page: PageConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body
                data-session-timeout=page.session_timeout_attr()
                data-perfil-theme=page.profile_theme_attr()
                data-logout-url=page.logout_path.clone()
            >
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme context, applies the resolved theme once hydrated,
/// and mounts the session monitor for every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(Theme::default());
    provide_context(theme);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let page = crate::util::page_config::read();
        crate::util::theme::init(theme, page.profile_theme);
    });

    view! {
        <Title text="OptiCut"/>

        <header class="app-header">
            <span class="app-header__brand">"OptiCut"</span>
            <span class="app-header__spacer"></span>
            <ThemeToggle/>
        </header>

        <Router>
            <main class="app-main">
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=StaticSegment("") view=BoardSetupPage/>
                </Routes>
            </main>
        </Router>

        <SessionMonitor/>
    }
}
