use aqua_shell::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn AquadeskApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Aquadesk" />
        <Meta name="description" content="A macOS-style desktop shell that runs in the browser." />

        <main class="site-root">
            <DesktopProvider>
                <DesktopShell />
            </DesktopProvider>
        </main>
    }
}
