//! Landing page component
//!
//! The Triade storefront landing page:
//! - SEO meta tags and structured data
//! - Hero section with staggered entrance motion
//! - Brand marquee
//! - Feature grid revealed as a staggered group
//! - Digital catalog section with QR code
//! - About section and testimonials
//! - Call-to-action and footer sections
//!
//! Motion is attached through the `MotionRegistry`: sections register the
//! elements they want animated and `use_landing_motion` binds them after
//! mount.

use leptos::html;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{
    MotionRole, Reveal, provide_motion_registry, use_landing_motion, use_motion_registry,
};

/// Outbound destinations
pub mod links {
    pub const CATALOG: &str = "https://triade.rdi.store";
    pub const CATALOG_PRODUCTS: &str = "https://triade.rdi.store/products";
    pub const CHAT: &str = "http://wa.me/message/QPZXRSXRO3DTO1";
    pub const INSTAGRAM: &str = "https://www.instagram.com/triadebsb";
    pub const CATALOG_QR: &str =
        "https://api.qrserver.com/v1/create-qr-code/?size=300x300&data=https://triade.rdi.store";
}

const LOGO_HORIZONTAL: &str = "https://i.postimg.cc/w7J6VtDM/TRD-LOGO-PNG.png";
const LOGO_VERTICAL: &str = "https://i.postimg.cc/py3WzQ5L/TRD-LOGO-2.png";
const HERO_IMAGE: &str = "https://i.postimg.cc/xT1Xrt0J/2024-Crossfit-Double-Under-Workout-Workout-Of-The-Day-768x432.jpg";
const TRAINING_IMAGE: &str = "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?q=80&w=2070&auto=format&fit=crop";

const BRANDS: &[&str] = &[
    "UNDER ARMOUR",
    "OLYMPIKUS",
    "CCM MODA FITNESS",
    "MAX TITANIUM",
    "DUX NUTRITION",
    "UNDER LABZ",
    "OPTIMUM NUTRITION",
    "TRUE SOURCE",
    "ADAPTOGEN",
    "ALQUIMIA DA SAÚDE",
    "DOBRO",
    "CAFFEINE ARMY",
    "VITAFOR",
    "OCEAN DROP",
    "UNIÃO VEGETAL",
    "UNINUTRE",
    "LONG JACK",
    "EQUALIVE",
    "BOLD",
    "DARKNESS",
];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    text: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Carlos Silva",
        role: "Crossfitter",
        text: "A Triade salvou meu pré-treino. Entrega rápida e o atendimento via WhatsApp é nota 10.",
    },
    Testimonial {
        name: "Mariana Costa",
        role: "Triatleta",
        text: "Encontro tudo que preciso para natação e corrida. Os preços são realmente os melhores do DF.",
    },
    Testimonial {
        name: "João Pedro",
        role: "Bodybuilder",
        text: "Produtos originais e consultoria de quem entende. Recomendo para todos os meus alunos.",
    },
];

/// Landing page component with entrance and scroll-triggered motion
#[component]
pub fn LandingPage() -> impl IntoView {
    let registry = provide_motion_registry();
    let hero_ref = NodeRef::<html::Section>::new();
    use_landing_motion(registry, hero_ref);

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-brand-bg text-white overflow-x-hidden selection:bg-brand-accent selection:text-black">
            <Header />
            <ChatButton />

            <main>
                <Hero hero_ref=hero_ref />
                <BrandMarquee />
                <FeatureSection />
                <CatalogSection />
                <AboutSection />
                <TestimonialsSection />
                <CtaSection />
            </main>

            <Footer />

            <LandingStyles />
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Triade Suplementos - Be Your Inspiration" />

        <Meta name="description" content="Suplementação de elite com os melhores preços de Brasília e região. Entrega grátis no DF, consultoria especializada e opções veganas." />
        <Meta name="theme-color" content="#0a0a0a" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Triade Suplementos - Be Your Inspiration" />
        <Meta property="og:description" content="Os melhores preços de Brasília e região. Suplementação de elite para quem não aceita o comum." />
        <Meta property="og:image" content=HERO_IMAGE />

        <Link rel="icon" type_="image/svg+xml" href="/favicon.svg" />

        // Display font
        <Link rel="preconnect" href="https://fonts.googleapis.com" />
        <Link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Bebas+Neue&family=Inter:wght@400;500;600;700&display=swap" />

        <script type="application/ld+json" inner_html=structured_data()></script>
    }
}

/// JSON-LD description of the store
fn structured_data() -> String {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Store",
        "name": "Triade Suplementos",
        "slogan": "Be Your Inspiration",
        "url": links::CATALOG,
        "logo": LOGO_HORIZONTAL,
        "sameAs": [links::INSTAGRAM],
        "foundingDate": "2021",
        "address": {
            "@type": "PostalAddress",
            "streetAddress": "SMPW Quadra 05 Conjunto 09 Lote 02",
            "addressLocality": "Brasília",
            "addressRegion": "DF",
            "postalCode": "71735-509",
            "addressCountry": "BR"
        },
        "openingHours": ["Mo-Fr 05:00-20:00", "Sa 08:00-12:00"]
    })
    .to_string()
}

#[component]
fn LogoHorizontal(#[prop(default = "")] class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("h-12 flex items-center justify-center {}", class)>
            <img
                src=LOGO_HORIZONTAL
                alt="Triade Logo"
                class="h-full object-contain invert"
                referrerpolicy="no-referrer"
            />
        </div>
    }
}

#[component]
fn LogoVertical() -> impl IntoView {
    view! {
        <div class="w-full h-full flex items-center justify-center">
            <img
                src=LOGO_VERTICAL
                alt="Triade Logo Vertical"
                class="max-w-[80%] max-h-[80%] object-contain invert opacity-90"
                referrerpolicy="no-referrer"
            />
        </div>
    }
}

/// Row of five stars
#[component]
fn Stars(
    #[prop(default = "w-4 h-4 fill-brand-accent text-brand-accent")] class: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex gap-1">
            {(0..5).map(|_| view! { <Icon name=icons::STAR class=class /> }).collect_view()}
        </div>
    }
}

/// Header component with mobile menu support
#[component]
fn Header() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <header class="fixed top-4 left-1/2 -translate-x-1/2 w-[calc(100%-2rem)] max-w-7xl z-50 glass rounded-3xl md:rounded-full px-6 py-3">
            <div class="flex items-center justify-between">
                <a href="#inicio" aria-label="Início">
                    <LogoHorizontal class="text-white" />
                </a>

                // Desktop Navigation
                <nav class="hidden md:flex items-center gap-8 text-sm font-medium text-white/70">
                    <NavLinks on_navigate=|| {} />
                </nav>

                <div class="flex items-center gap-2">
                    <a
                        href=links::CATALOG
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-white text-black px-5 py-2 rounded-full text-sm font-semibold hover:bg-brand-accent transition-all duration-300 flex items-center gap-2 group"
                    >
                        "Ver Catálogo"
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4 group-hover:translate-x-1 transition-transform" />
                    </a>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-full hover:bg-white/10 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Abrir menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }
                            }
                        }}
                    </button>
                </div>
            </div>

            // Mobile menu
            <div
                class="md:hidden overflow-hidden transition-all duration-300"
                class:max-h-0=move || !mobile_menu_open.get()
                class:max-h-96=move || mobile_menu_open.get()
            >
                <nav class="flex flex-col gap-2 pt-4 pb-2 text-sm font-medium text-white/70">
                    <NavLinks on_navigate=move || set_mobile_menu_open.set(false) />
                </nav>
            </div>
        </header>
    }
}

/// In-page navigation anchors
#[component]
fn NavLinks<F>(on_navigate: F) -> impl IntoView
where
    F: Fn() + Clone + Send + Sync + 'static,
{
    [
        ("#inicio", "Início"),
        ("#produtos", "Produtos"),
        ("#sobre", "Sobre"),
        ("#contato", "Contato"),
    ]
    .into_iter()
    .map(|(href, label)| {
        let on_navigate = on_navigate.clone();
        view! {
            <a
                href=href
                class="px-2 py-1 hover:text-brand-accent transition-colors"
                on:click=move |_| on_navigate()
            >
                {label}
            </a>
        }
    })
    .collect_view()
}

/// Floating chat button
#[component]
fn ChatButton() -> impl IntoView {
    view! {
        <a
            href=links::CHAT
            target="_blank"
            rel="noopener noreferrer"
            class="fixed bottom-8 right-8 z-50 bg-[#25D366] text-white p-4 rounded-full shadow-2xl hover:scale-110 transition-transform flex items-center justify-center group"
            title="Fale conosco no WhatsApp"
            aria-label="Fale conosco no WhatsApp"
        >
            <Icon name=icons::MESSAGE_CIRCLE class="w-8 h-8" />
            <span class="absolute right-full mr-4 bg-white text-black px-4 py-2 rounded-lg text-sm font-bold opacity-0 group-hover:opacity-100 transition-opacity whitespace-nowrap pointer-events-none">
                "Fale Conosco"
            </span>
        </a>
    }
}

/// Hero section; its title lines, subtexts and call-to-action enter on mount
#[component]
fn Hero(hero_ref: NodeRef<html::Section>) -> impl IntoView {
    let registry = use_motion_registry();

    let badge_ref = NodeRef::<html::Div>::new();
    let first_line_ref = NodeRef::<html::Span>::new();
    let second_line_ref = NodeRef::<html::Span>::new();
    let lead_ref = NodeRef::<html::P>::new();
    let cta_ref = NodeRef::<html::Div>::new();

    registry.register(MotionRole::HeroSubtext, badge_ref);
    registry.register(MotionRole::HeroTitle, first_line_ref);
    registry.register(MotionRole::HeroTitle, second_line_ref);
    registry.register(MotionRole::HeroSubtext, lead_ref);
    registry.register(MotionRole::HeroCta, cta_ref);

    view! {
        <section
            id="inicio"
            node_ref=hero_ref
            class="relative h-screen flex items-center justify-center overflow-hidden pt-20"
        >
            // Background
            <div class="absolute inset-0 z-0" aria-hidden="true">
                <img
                    src=HERO_IMAGE
                    alt="CrossFit Double Under Workout"
                    class="w-full h-full object-cover opacity-80 scale-105"
                    referrerpolicy="no-referrer"
                />
                <div class="absolute inset-0 bg-gradient-to-b from-brand-bg/90 via-transparent to-brand-bg"></div>
                <div class="absolute inset-0 bg-black/20"></div>
            </div>

            <div class="relative z-10 text-center px-4 max-w-4xl">
                <div
                    node_ref=badge_ref
                    class="motion-pending inline-flex items-center gap-2 px-3 py-1 rounded-full glass text-xs font-semibold text-brand-accent mb-6"
                >
                    <span class="relative flex h-2 w-2">
                        <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-brand-accent opacity-75"></span>
                        <span class="relative inline-flex rounded-full h-2 w-2 bg-brand-accent"></span>
                    </span>
                    "BE YOUR INSPIRATION"
                </div>

                <h1 class="text-6xl md:text-8xl font-display leading-[0.9] mb-8">
                    <span node_ref=first_line_ref class="block motion-pending">"O MELHOR PARA"</span>
                    <span node_ref=second_line_ref class="block text-gradient motion-pending">"SUPERAR LIMITES"</span>
                </h1>

                <p node_ref=lead_ref class="motion-pending text-lg md:text-xl text-white/60 mb-10 max-w-2xl mx-auto">
                    "Os melhores preços de Brasília e região. Suplementação de elite para quem não aceita o comum."
                </p>

                <div node_ref=cta_ref class="motion-pending flex flex-col sm:flex-row items-center justify-center gap-4">
                    <a
                        href=links::CHAT
                        target="_blank"
                        rel="noopener noreferrer"
                        class="w-full sm:w-auto bg-brand-accent text-black px-8 py-4 rounded-full font-bold text-lg hover:scale-105 transition-transform flex items-center justify-center gap-2"
                    >
                        <Icon name=icons::MESSAGE_CIRCLE class="w-5 h-5" />
                        "Falar no WhatsApp"
                    </a>
                    <a
                        href=links::CATALOG
                        target="_blank"
                        rel="noopener noreferrer"
                        class="w-full sm:w-auto glass px-8 py-4 rounded-full font-bold text-lg hover:bg-white/10 transition-colors flex items-center justify-center gap-2"
                    >
                        <Icon name=icons::SHOPPING_BAG class="w-5 h-5" />
                        "Acessar Catálogo"
                    </a>
                </div>
            </div>

            // Scroll indicator
            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce opacity-50" aria-hidden="true">
                <div class="w-6 h-10 border-2 border-white/30 rounded-full flex justify-center pt-2">
                    <div class="w-1 h-2 bg-white rounded-full"></div>
                </div>
            </div>
        </section>
    }
}

/// Endless marquee of partner brands
#[component]
fn BrandMarquee() -> impl IntoView {
    let brand_row = || {
        BRANDS
            .iter()
            .map(|brand| {
                view! {
                    <span class="text-3xl md:text-5xl font-display opacity-30 hover:opacity-100 transition-opacity cursor-default whitespace-nowrap px-8">
                        {*brand}
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <div class="py-12 border-y border-brand-border overflow-hidden bg-white/[0.02]">
            <div class="marquee">
                <div class="marquee-content">{brand_row()}</div>
                <div class="marquee-content" aria-hidden="true">{brand_row()}</div>
            </div>
        </div>
    }
}

/// Feature grid; its cards reveal as one staggered group
#[component]
fn FeatureSection() -> impl IntoView {
    let grid_ref = NodeRef::<html::Div>::new();
    use_motion_registry().register(MotionRole::FeatureGrid, grid_ref);

    view! {
        <section id="produtos" class="py-24 px-4 max-w-7xl mx-auto">
            <Reveal class="text-center mb-16">
                <h2 class="text-4xl md:text-6xl mb-4">
                    "POR QUE A " <span class="text-brand-accent">"TRIADE?"</span>
                </h2>
                <p class="text-white/50 max-w-xl mx-auto">
                    "Excelência em atendimento e os melhores produtos do mercado fitness."
                </p>
            </Reveal>

            <div node_ref=grid_ref class="grid grid-cols-1 md:grid-cols-4 gap-4 auto-rows-[240px]">
                // Main feature
                <div class="md:col-span-2 md:row-span-2 glass rounded-3xl p-8 flex flex-col justify-end relative overflow-hidden group">
                    <img
                        src=TRAINING_IMAGE
                        alt="Training"
                        class="absolute inset-0 w-full h-full object-cover opacity-20 group-hover:scale-110 transition-transform duration-700"
                        referrerpolicy="no-referrer"
                    />
                    <div class="relative z-10">
                        <div class="w-12 h-12 bg-brand-accent rounded-xl flex items-center justify-center mb-4">
                            <Icon name=icons::SHOPPING_BAG class="text-black w-6 h-6" />
                        </div>
                        <h3 class="text-3xl mb-2">"Ampla Linha de Produtos"</h3>
                        <p class="text-white/60">
                            "Dos maiores fabricantes mundiais para CrossFit, Musculação, Triathlon e muito mais."
                        </p>
                    </div>
                </div>

                // Delivery
                <div class="md:col-span-2 glass rounded-3xl p-8 flex flex-col justify-center border-l-4 border-l-brand-accent">
                    <div class="flex items-center gap-4 mb-4">
                        <Icon name=icons::TRUCK class="text-brand-accent w-8 h-8" />
                        <h3 class="text-2xl">"Entrega Grátis*"</h3>
                    </div>
                    <p class="text-white/60">
                        "Receba seus suplementos com rapidez e sem custo em todo o DF e Região."
                    </p>
                </div>

                // Price
                <div class="glass rounded-3xl p-8 flex flex-col justify-center text-center">
                    <span class="text-brand-accent text-4xl font-display mb-2">"#1"</span>
                    <h3 class="text-xl mb-1">"Melhores Preços"</h3>
                    <p class="text-xs text-white/40 uppercase tracking-widest">"Brasília & Entorno"</p>
                </div>

                // Expert advice
                <div class="glass rounded-3xl p-8 flex flex-col justify-center">
                    <Icon name=icons::SHIELD_CHECK class="text-brand-accent w-8 h-8 mb-4" />
                    <h3 class="text-xl mb-2">"Consultoria Especializada"</h3>
                    <p class="text-sm text-white/60">
                        "Profissionais treinados para orientar suas melhores escolhas."
                    </p>
                </div>

                // Community
                <div class="md:col-span-2 glass rounded-3xl p-8 flex items-center justify-between group overflow-hidden">
                    <div class="max-w-[60%]">
                        <h3 class="text-2xl mb-2">"Be Your Inspiration"</h3>
                        <p class="text-sm text-white/60">
                            "Junte-se a milhares de atletas que confiam na Triade desde 2021."
                        </p>
                    </div>
                    <div class="flex -space-x-4">
                        {(11..=14)
                            .map(|seed| {
                                view! {
                                    <div class="w-12 h-12 rounded-full border-2 border-brand-bg overflow-hidden bg-zinc-800">
                                        <img
                                            src=format!("https://picsum.photos/seed/{}/100/100", seed)
                                            alt="Atleta"
                                            referrerpolicy="no-referrer"
                                        />
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                // Vegan options
                <div class="md:col-span-2 glass rounded-3xl p-8 flex flex-col justify-center bg-brand-accent/5">
                    <div class="flex items-center gap-4 mb-2">
                        <Icon name=icons::CHECK_CIRCLE class="text-brand-accent w-6 h-6" />
                        <h3 class="text-2xl">"Opções Veganas"</h3>
                    </div>
                    <p class="text-white/60">
                        "Linha completa de suplementação plant-based para todos os objetivos."
                    </p>
                </div>
            </div>
        </section>
    }
}

/// Digital catalog section with QR code
#[component]
fn CatalogSection() -> impl IntoView {
    view! {
        <section id="catalogo" class="py-24 px-4 bg-brand-accent/5">
            <div class="max-w-7xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-16 items-center">
                <Reveal>
                    <h2 class="text-4xl md:text-6xl mb-6">
                        "NOSSO " <span class="text-brand-accent">"CATÁLOGO"</span> " DIGITAL"
                    </h2>
                    <p class="text-xl text-white/70 mb-8 leading-relaxed">
                        "Acesse agora nossa loja completa com todos os produtos, preços e disponibilidade em tempo real. Escaneie o QR Code ou clique no botão abaixo."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <a
                            href=links::CATALOG
                            target="_blank"
                            rel="noopener noreferrer"
                            class="bg-brand-accent text-black px-8 py-4 rounded-full font-bold text-lg hover:scale-105 transition-transform flex items-center justify-center gap-2"
                        >
                            <Icon name=icons::SHOPPING_BAG class="w-5 h-5" />
                            "Ir para a Loja"
                        </a>
                        <a
                            href=links::CHAT
                            target="_blank"
                            rel="noopener noreferrer"
                            class="glass px-8 py-4 rounded-full font-bold text-lg hover:bg-white/10 transition-colors flex items-center justify-center gap-2"
                        >
                            <Icon name=icons::MESSAGE_CIRCLE class="w-5 h-5" />
                            "Pedir pelo WhatsApp"
                        </a>
                    </div>
                </Reveal>

                <Reveal class="flex justify-center">
                    <div class="glass p-8 rounded-[2rem] text-center max-w-sm">
                        <div class="bg-white p-4 rounded-2xl mb-6">
                            <img src=links::CATALOG_QR alt="QR Code Triade" class="w-full aspect-square" />
                        </div>
                        <p class="text-sm font-bold text-brand-accent uppercase tracking-widest">
                            "Aponte a câmera para o QR Code"
                        </p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="sobre" class="py-24 px-4 bg-white/[0.02]">
            <div class="max-w-7xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-16 items-center">
                <Reveal>
                    <h2 class="text-5xl md:text-7xl mb-8 leading-tight">
                        "MAIS QUE UMA LOJA, " <br />
                        <span class="text-brand-accent italic">"UM ESTILO DE VIDA."</span>
                    </h2>
                    <p class="text-lg text-white/70 mb-8 leading-relaxed">
                        "Desde 2021, a Triade nasceu com o propósito de ser a inspiração para quem busca superar seus limites. Localizada no coração de Brasília, oferecemos não apenas suplementos, mas as ferramentas necessárias para sua evolução."
                    </p>

                    <div class="grid grid-cols-2 gap-8 mb-10">
                        <div>
                            <h4 class="text-3xl font-display text-brand-accent mb-1">"1.8k+"</h4>
                            <p class="text-sm text-white/40 uppercase tracking-widest">"Seguidores Reais"</p>
                        </div>
                        <div>
                            <h4 class="text-3xl font-display text-brand-accent mb-1">"1k+"</h4>
                            <p class="text-sm text-white/40 uppercase tracking-widest">"Posts de Conteúdo"</p>
                        </div>
                    </div>

                    <a
                        href=links::INSTAGRAM
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-3 text-white hover:text-brand-accent transition-colors group"
                    >
                        <Icon name=icons::INSTAGRAM class="w-6 h-6" />
                        <span class="font-semibold">"Siga-nos no Instagram @triadebsb"</span>
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4 group-hover:translate-x-2 transition-transform" />
                    </a>
                </Reveal>

                <Reveal class="relative">
                    <div class="aspect-square rounded-3xl overflow-hidden glass p-12 flex items-center justify-center bg-brand-accent/5">
                        <LogoVertical />
                    </div>
                    // Floating badge
                    <div class="absolute -bottom-6 -left-6 glass p-6 rounded-2xl max-w-[200px] hidden md:block">
                        <div class="mb-2">
                            <Stars />
                        </div>
                        <p class="text-sm font-medium">
                            "\"Melhor atendimento de Brasília, entrega super rápida!\""
                        </p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

/// Testimonials grid
#[component]
fn TestimonialsSection() -> impl IntoView {
    view! {
        <section class="py-24 px-4 max-w-7xl mx-auto overflow-hidden">
            <Reveal class="text-center mb-16">
                <h2 class="text-4xl md:text-6xl mb-4">
                    "PROVA " <span class="text-brand-accent">"SOCIAL"</span>
                </h2>
                <p class="text-white/50">"O que nossos atletas dizem sobre a experiência Triade."</p>
            </Reveal>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {TESTIMONIALS
                    .iter()
                    .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    let initial = testimonial.name.chars().next().unwrap_or_default();

    view! {
        <Reveal class="glass p-8 rounded-3xl">
            <div class="mb-4">
                <Stars class="w-3 h-3 fill-brand-accent text-brand-accent" />
            </div>
            <p class="text-white/70 mb-6 italic">{format!("\"{}\"", testimonial.text)}</p>
            <div class="flex items-center gap-3">
                <div class="w-10 h-10 rounded-full bg-brand-accent/20 flex items-center justify-center font-bold text-brand-accent">
                    {initial.to_string()}
                </div>
                <div>
                    <h4 class="font-bold text-sm">{testimonial.name}</h4>
                    <p class="text-xs text-white/40">{testimonial.role}</p>
                </div>
            </div>
        </Reveal>
    }
}

/// Closing call-to-action
#[component]
fn CtaSection() -> impl IntoView {
    view! {
        <section class="py-24 px-4">
            <Reveal class="max-w-5xl mx-auto glass rounded-[3rem] p-12 md:p-20 text-center relative overflow-hidden">
                <div class="absolute top-0 left-0 w-full h-full bg-brand-accent/5 -z-10"></div>
                <h2 class="text-5xl md:text-7xl mb-8">
                    "PRONTO PARA " <br /> <span class="text-brand-accent">"EVOLUIR?"</span>
                </h2>
                <p class="text-xl text-white/60 mb-10 max-w-2xl mx-auto">
                    "Não perca tempo. Fale agora com um de nossos consultores e descubra o combo ideal para seus objetivos."
                </p>
                <a
                    href=links::CHAT
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center gap-3 bg-white text-black px-10 py-5 rounded-full font-bold text-xl hover:bg-brand-accent transition-all duration-300"
                >
                    <Icon name=icons::MESSAGE_CIRCLE class="w-6 h-6" />
                    "Chamar no WhatsApp"
                </a>
            </Reveal>
        </section>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer id="contato" class="py-12 px-4 border-t border-brand-border">
            <div class="max-w-7xl mx-auto grid grid-cols-1 md:grid-cols-4 gap-12 mb-12">
                // Brand
                <div class="md:col-span-2">
                    <LogoHorizontal class="mb-6 justify-start" />
                    <p class="text-white/40 max-w-sm mb-6">
                        "SMPW QUADRA 05 CONJUTO 09 LOTE 02 - DF- 71.735, Brasília, Brazil 71.735-509"
                    </p>
                    <div class="flex gap-4">
                        <a
                            href=links::INSTAGRAM
                            target="_blank"
                            rel="noopener noreferrer"
                            class="w-10 h-10 glass rounded-full flex items-center justify-center hover:text-brand-accent transition-colors"
                            aria-label="Instagram"
                        >
                            <Icon name=icons::INSTAGRAM class="w-5 h-5" />
                        </a>
                        <a
                            href=links::CHAT
                            target="_blank"
                            rel="noopener noreferrer"
                            class="w-10 h-10 glass rounded-full flex items-center justify-center hover:text-brand-accent transition-colors"
                            aria-label="WhatsApp"
                        >
                            <Icon name=icons::MESSAGE_CIRCLE class="w-5 h-5" />
                        </a>
                    </div>
                </div>

                // Opening hours
                <div>
                    <h4 class="font-display text-lg mb-6">"Horários"</h4>
                    <ul class="space-y-2 text-sm text-white/50">
                        <li>"Seg a Sex: 05h às 20h"</li>
                        <li>"Sáb: 08h às 12h"</li>
                        <li>"Dom: Fechado"</li>
                    </ul>
                </div>

                // Quick links
                <div>
                    <h4 class="font-display text-lg mb-6">"Links Rápidos"</h4>
                    <ul class="space-y-2 text-sm text-white/50">
                        <li><a href="#inicio" class="hover:text-white transition-colors">"Início"</a></li>
                        <li><a href="#produtos" class="hover:text-white transition-colors">"Produtos"</a></li>
                        <li><a href="#sobre" class="hover:text-white transition-colors">"Sobre Nós"</a></li>
                        <li>
                            <a
                                href=links::CATALOG_PRODUCTS
                                target="_blank"
                                rel="noopener noreferrer"
                                class="hover:text-white transition-colors"
                            >
                                "Loja Online"
                            </a>
                        </li>
                    </ul>
                </div>
            </div>

            // Bottom bar
            <div class="max-w-7xl mx-auto pt-8 border-t border-brand-border flex flex-col md:flex-row items-center justify-between gap-4 text-xs text-white/20 uppercase tracking-widest">
                <p>"© 2026 TRIADE SUPLEMENTOS. TODOS OS DIREITOS RESERVADOS."</p>
                <p>"DESIGNED FOR PERFORMANCE"</p>
            </div>
        </footer>
    }
}

/// Shows the hero when scripts are disabled
const NOSCRIPT_STYLES: &str = "<style>.motion-pending { opacity: 1 !important; }</style>";

/// CSS for the glass panels, gradient text and the marquee
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .glass {
                background: rgba(255, 255, 255, 0.04);
                border: 1px solid rgba(255, 255, 255, 0.08);
                backdrop-filter: blur(16px);
                -webkit-backdrop-filter: blur(16px);
            }

            .text-gradient {
                background: linear-gradient(90deg, var(--color-brand-accent), #ffffff);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }

            /* Brand marquee */
            .marquee {
                display: flex;
                width: max-content;
            }

            .marquee-content {
                display: flex;
                flex-shrink: 0;
                align-items: center;
                animation: landing-marquee 40s linear infinite;
            }

            .marquee:hover .marquee-content {
                animation-play-state: paused;
            }

            @keyframes landing-marquee {
                from { transform: translateX(0); }
                to { transform: translateX(-100%); }
            }

            /* Hero entrance targets stay hidden until the motion engine
               takes over with inline styles */
            .motion-pending {
                opacity: 0;
            }

            /* Entrance and reveal motion writes transform/opacity inline */
            @media (prefers-reduced-motion: reduce) {
                .marquee-content { animation: none; }
            }
            "#
        </style>
        <noscript inner_html=NOSCRIPT_STYLES></noscript>
    }
}
