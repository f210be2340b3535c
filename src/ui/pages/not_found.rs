//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Página não encontrada - Triade Suplementos" />

        <div class="min-h-screen bg-brand-bg text-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                // Error code
                <h1 class="text-8xl font-display text-brand-accent mb-4">"404"</h1>

                <h2 class="text-3xl font-display mb-2">"PÁGINA NÃO ENCONTRADA"</h2>

                <p class="text-white/50 mb-8 max-w-md mx-auto">
                    "O endereço que você procura não existe ou foi movido."
                </p>

                // Actions
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/"
                        attr:class="bg-brand-accent text-black px-8 py-4 rounded-full font-bold hover:scale-105 transition-transform flex items-center gap-2"
                    >
                        "Voltar ao Início"
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                    </A>
                    <a
                        href="https://triade.rdi.store"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="border border-brand-border px-8 py-4 rounded-full font-bold hover:bg-white/10 transition-colors flex items-center gap-2"
                    >
                        <Icon name=icons::SHOPPING_BAG class="w-5 h-5" />
                        "Ver Catálogo"
                    </a>
                </div>
            </div>

            // Footer
            <div class="absolute bottom-8 text-center">
                <p class="text-xs text-white/20 uppercase tracking-widest">
                    "© 2026 Triade Suplementos"
                </p>
            </div>
        </div>
    }
}
