//! The single portfolio page: hero, about, projects, expertise, contact.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::cursor::CursorOverlay;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::notifications::NotificationHost;
use crate::components::project_card::ProjectCard;
use crate::components::rating::RatingWidget;
use crate::components::reveal::Reveal;

struct Project {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
}

const PROJECTS: [Project; 3] = [
    Project {
        title: "Collaborative Whiteboard",
        description: "Realtime multi-user canvas with presence cursors and conflict-free object sync.",
        tags: &["Rust", "WebSockets", "Canvas"],
    },
    Project {
        title: "Telemetry Pipeline",
        description: "Streaming ingestion and query layer for high-cardinality service metrics.",
        tags: &["Rust", "Postgres", "Observability"],
    },
    Project {
        title: "Static Site Toolkit",
        description: "Build tooling that turns markdown and templates into sub-second page loads.",
        tags: &["WASM", "Tooling", "Performance"],
    },
];

const EXPERTISE: [(&str, &str); 4] = [
    ("Front-end", "Component-driven UIs, animation, and accessibility-minded markup."),
    ("Back-end", "HTTP services, realtime protocols, and data modeling."),
    ("Performance", "Profiling, caching, and shaving milliseconds where users feel them."),
    ("Tooling", "Build pipelines and developer experience that keep teams fast."),
];

/// Root page layout.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar/>
        <main class="page">
            <Hero/>

            <section id="about" class="section">
                <h2 class="section__heading">"About"</h2>
                <Reveal>
                    <div class="about-card">
                        <p>
                            "I design and build web software end to end: pixel-level interface "
                            "polish on the front, boring-on-purpose reliability on the back. "
                            "Most of my recent work is Rust compiled to WebAssembly."
                        </p>
                    </div>
                </Reveal>
            </section>

            <section id="projects" class="section">
                <h2 class="section__heading">"Projects"</h2>
                <div class="project-grid">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <Reveal>
                                    <ProjectCard
                                        title=project.title
                                        description=project.description
                                        tags=project.tags
                                    />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="expertise" class="section">
                <h2 class="section__heading">"Expertise"</h2>
                <div class="expertise-grid">
                    {EXPERTISE
                        .iter()
                        .map(|&(area, blurb)| {
                            view! {
                                <Reveal>
                                    <div class="expertise-item">
                                        <h3 class="expertise-item__area">{area}</h3>
                                        <p class="expertise-item__blurb">{blurb}</p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="contact" class="section">
                <h2 class="section__heading">"Contact"</h2>
                <Reveal>
                    <div class="contact-grid">
                        <ContactForm/>
                        <RatingWidget/>
                    </div>
                </Reveal>
            </section>
        </main>
        <footer class="footer">
            <p>"Thanks for scrolling this far."</p>
        </footer>
        <NotificationHost/>
        <CursorOverlay/>
    }
}
