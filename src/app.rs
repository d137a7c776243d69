mod about;
mod contact;
mod home;
mod layout;
mod loading;
mod not_found;
mod overlay;
mod projects;
mod search_box;
mod skills;

pub use contact::send_contact_message;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::OWNER;
use about::AboutPage;
use contact::ContactPage;
use home::HomePage;
use layout::SearchLayout;
use not_found::NotFoundPage;
use projects::ProjectsPage;
use skills::SkillsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/search-portfolio.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-page text-white font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} - {}", OWNER.full_name) />

        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <ParentRoute path=path!("/search") view=SearchLayout>
                    <Route path=path!("") view=NotFoundPage />
                    <Route path=path!("about") view=AboutPage />
                    <Route path=path!("projects") view=ProjectsPage />
                    <Route path=path!("skills") view=SkillsPage />
                    <Route path=path!("contact") view=ContactPage />
                    <Route path=path!("*any") view=NotFoundPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// The "About N results (x seconds)" line over each results page.
#[component]
fn ResultStats(count: u32, seconds: f32) -> impl IntoView {
    view! {
        <p class="text-sm text-muted mb-6">
            {format!("About {} results ({seconds:.2} seconds)", group_thousands(count))}
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(512), "512");
        assert_eq!(group_thousands(1240), "1,240");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
