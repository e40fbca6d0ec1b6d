//! App Layout
//!
//! Header, sidebar and backdrop around a signed-in page.

use leptos::*;

use super::{Header, Sidebar};

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let sidebar_open = create_rw_signal(false);
    let toggle = Callback::new(move |_: ()| sidebar_open.update(|open| *open = !*open));

    view! {
        <div class="min-h-screen flex flex-col">
            <Header on_menu=toggle />
            <div class="flex flex-1 relative">
                <Sidebar open=sidebar_open />
                <Show when=move || sidebar_open.get()>
                    <div
                        class="fixed inset-0 z-20 bg-black/30 md:hidden"
                        on:click=move |_| sidebar_open.set(false)
                    />
                </Show>
                <main class="flex-1 p-6 max-w-4xl mx-auto w-full">
                    {children()}
                </main>
            </div>
        </div>
    }
}
