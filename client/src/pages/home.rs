//! Landing page with entry points to the student and volunteer chats.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

/// Title/description pair for a presentational card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Card; 3] = [
    Card { title: "Chat Anônimo", description: "Conversas seguras e privadas sem necessidade de identificação" },
    Card { title: "Suporte Emocional", description: "Apoio de voluntários treinados e colegas que entendem" },
    Card { title: "Privacidade Total", description: "Sem coleta de dados pessoais, garantindo total anonimato" },
];

pub const BENEFITS: [Card; 3] = [
    Card { title: "Reduz o Estresse", description: "Diminui a pressão escolar através de apoio emocional contínuo" },
    Card { title: "Melhora o Bem-estar", description: "Promove saúde mental e equilíbrio emocional dos estudantes" },
    Card { title: "Fortalece Vínculos", description: "Cria conexões sociais saudáveis e redes de apoio" },
];

pub const STUDENT_ROUTE: &str = "/chat";
pub const VOLUNTEER_ROUTE: &str = "/volunteer";

fn cards(list: &'static [Card], class: &'static str) -> impl IntoView {
    list.iter()
        .map(|card| {
            view! {
                <div class=class>
                    <h3>{card.title}</h3>
                    <p>{card.description}</p>
                </div>
            }
        })
        .collect::<Vec<_>>()
}

/// Static landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <nav class="home-nav">
                <span class="home-nav__brand">"Open Mind"</span>
                <div class="home-nav__links">
                    <a href=STUDENT_ROUTE class="btn btn--ghost">"Chat de Apoio"</a>
                    <a href=VOLUNTEER_ROUTE class="btn btn--ghost">"Voluntário"</a>
                </div>
            </nav>

            <section class="home-hero">
                <h1>"Welcome to " <span class="home-hero__brand">"Open Mind"</span></h1>
                <p>"Plataforma de Apoio à Saúde Mental Escolar"</p>
                <div class="home-hero__actions">
                    <a href=STUDENT_ROUTE class="btn btn--primary">"Iniciar Chat Anônimo"</a>
                    <a href=VOLUNTEER_ROUTE class="btn btn--secondary">"Sou Voluntário"</a>
                </div>
            </section>

            <section class="home-section">
                <h2>"O Problema que Enfrentamos"</h2>
                <p>
                    "Muitos estudantes enfrentam desafios significativos com "
                    <strong>"estresse acadêmico"</strong> ", " <strong>"ansiedade"</strong> " e "
                    <strong>"pressão social"</strong> "."
                </p>
                <p>
                    "A falta de apoio psicológico adequado nas escolas deixa jovens sem recursos para lidar com suas emoções e desafios mentais."
                </p>
                <p>"É essencial criar espaços seguros onde estudantes possam buscar ajuda sem julgamentos."</p>
            </section>

            <section class="home-section">
                <h2>"Nossa Solução"</h2>
                <div class="home-cards">{cards(&FEATURES, "home-card")}</div>
            </section>

            <section class="home-section">
                <h2>"Benefícios da Plataforma"</h2>
                <div class="home-cards">{cards(&BENEFITS, "home-card home-card--benefit")}</div>
            </section>

            <section class="home-cta">
                <h2>"Pronto para Começar?"</h2>
                <p>"Junte-se à nossa comunidade de apoio e comece sua jornada para uma melhor saúde mental."</p>
                <div class="home-hero__actions">
                    <a href=STUDENT_ROUTE class="btn btn--primary">"Começar Chat Agora"</a>
                    <a href=VOLUNTEER_ROUTE class="btn btn--secondary">"Quero Ajudar Como Voluntário"</a>
                </div>
            </section>

            <footer class="home-footer">
                <p>"Plataforma de Apoio à Saúde Mental Escolar"</p>
                <p>"© 2024 Open Mind. Cuidando da saúde mental estudantil com carinho e segurança."</p>
            </footer>
        </div>
    }
}
